//! A game owned by a single task and driven through a channel.

use anyhow::anyhow;
use log::{debug, info};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::{
    engine_api::GameApi,
    game::Game,
    protocol::{handle, Request, Response},
};

/// Queued requests per game before senders wait.
const INBOX_CAPACITY: usize = 32;

struct Envelope {
    request: Request,
    reply: oneshot::Sender<Response>,
}

/// Task that owns a [`Game`] and applies requests one at a time.
pub struct GameActor {
    game: Game,
    inbox: mpsc::Receiver<Envelope>,
}

impl GameActor {
    /// Spawn an actor for `game` on the current runtime.
    ///
    /// The task ends once every [`GameHandle`] has been dropped and yields the final
    /// game state.
    pub fn spawn(game: Game) -> (GameHandle, JoinHandle<Game>) {
        let (tx, inbox) = mpsc::channel(INBOX_CAPACITY);
        let actor = GameActor { game, inbox };
        (GameHandle { tx }, tokio::spawn(actor.run()))
    }

    async fn run(mut self) -> Game {
        while let Some(Envelope { request, reply }) = self.inbox.recv().await {
            let response = handle(&mut self.game, request);
            if reply.send(response).is_err() {
                debug!("requester went away before the reply was sent");
            }
        }
        info!("game actor stopped in {} phase", self.game.phase());
        self.game
    }
}

/// Cloneable sender side of a [`GameActor`].
#[derive(Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Envelope>,
}

#[async_trait::async_trait]
impl GameApi for GameHandle {
    async fn execute(&self, request: Request) -> anyhow::Result<Response> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Envelope { request, reply })
            .await
            .map_err(|_| anyhow!("game actor has stopped"))?;
        rx.await.map_err(|_| anyhow!("game actor dropped the request"))
    }
}
