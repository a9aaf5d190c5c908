//! Contract between the service layer and a routing engine.

use kairo_json::ResultBody;
use kairo_params::{
    MatchParameters, NearestParameters, RouteParameters, TableParameters, TileParameters, TripParameters,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

/// What a router hands back for one request.
///
/// Object bodies carry a `code` entry (`"Ok"` on success) and, on
/// failure, usually a `message`.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: Status,
    pub body: ResultBody,
}

impl Response {
    pub fn ok(body: ResultBody) -> Self {
        Response {
            status: Status::Ok,
            body,
        }
    }

    pub fn error(body: ResultBody) -> Self {
        Response {
            status: Status::Error,
            body,
        }
    }
}

/// A routing engine.
///
/// Each service takes ownership of its validated parameters. A router is
/// shared between threads and must tolerate concurrent calls.
pub trait Router: Send + Sync {
    fn route(&self, params: RouteParameters) -> Response;
    fn nearest(&self, params: NearestParameters) -> Response;
    fn table(&self, params: TableParameters) -> Response;
    fn trip(&self, params: TripParameters) -> Response;
    fn matching(&self, params: MatchParameters) -> Response;
    fn tile(&self, params: TileParameters) -> Response;

    /// Whether the router can serve the given tile address.
    fn tile_is_valid(&self, tile: &TileParameters) -> bool {
        tile.fits_grid()
    }
}
