use crate::domain::{FireShotRequest, PlaceShipRequest};
use crate::protocol::{Request, Response};

/// Serialized access to one game.
///
/// Implementors guarantee that requests against the same game never interleave.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn execute(&self, request: Request) -> anyhow::Result<Response>;

    async fn place_ship(&self, request: PlaceShipRequest) -> anyhow::Result<Response> {
        self.execute(Request::PlaceShip(request)).await
    }

    async fn fire_shot(&self, request: FireShotRequest) -> anyhow::Result<Response> {
        self.execute(Request::FireShot(request)).await
    }

    async fn status(&self) -> anyhow::Result<Response> {
        self.execute(Request::Status).await
    }
}
