use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    engine_api::GameApi,
    game::{Game, GameStatus},
    protocol::{handle, Request, Response},
};

/// A game behind one exclusive lock. Clones share the same game.
#[derive(Clone)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    pub async fn game_status(&self) -> GameStatus {
        self.game.lock().await.status()
    }

    /// Run `f` against the game while holding the lock.
    pub async fn with_game<T>(&self, f: impl FnOnce(&Game) -> T) -> T {
        let game = self.game.lock().await;
        f(&game)
    }

    /// A copy of the current game state.
    pub async fn snapshot(&self) -> Game {
        self.game.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl GameApi for SharedGame {
    async fn execute(&self, request: Request) -> anyhow::Result<Response> {
        let mut game = self.game.lock().await;
        Ok(handle(&mut game, request))
    }
}
