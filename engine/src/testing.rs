use kairo_json::{Array, Object, ResultBody, Value};
use kairo_params::{
    Coordinate, MatchParameters, NearestParameters, RouteParameters, TableParameters, TileParameters,
    TripParameters,
};

use crate::router::{Response, Router};

/// Router answering from the request alone.
#[derive(Debug, Default)]
pub(crate) struct MockRouter {
    pub fail: bool,
    pub any_tile: bool,
}

impl MockRouter {
    fn respond(&self, entries: Object) -> Response {
        if self.fail {
            let mut error = Object::new();
            error.insert("code", "NoRoute");
            error.insert("message", "Impossible route between points");
            return Response::error(ResultBody::Object(error));
        }
        let mut body = Object::new();
        body.insert("code", "Ok");
        for (key, value) in entries.iter() {
            body.insert(key.as_str(), value.clone());
        }
        Response::ok(ResultBody::Object(body))
    }
}

fn waypoints(coordinates: &[Coordinate]) -> Array {
    coordinates
        .iter()
        .map(|c| {
            let mut waypoint = Object::new();
            waypoint.insert("name", "");
            waypoint.insert(
                "location",
                [Value::Number(c.longitude), Value::Number(c.latitude)]
                    .into_iter()
                    .collect::<Array>(),
            );
            Value::from(waypoint)
        })
        .collect()
}

fn route(legs: usize) -> Value {
    let mut route = Object::new();
    route.insert("distance", 1000.0 * legs as f64);
    route.insert("legs", (0..legs).map(|_| Value::from(Object::new())).collect::<Array>());
    Value::from(route)
}

impl Router for MockRouter {
    fn route(&self, params: RouteParameters) -> Response {
        let mut object = Object::new();
        object.insert("routes", [route(params.base.coordinates.len() - 1)].into_iter().collect::<Array>());
        object.insert("waypoints", waypoints(&params.base.coordinates));
        self.respond(object)
    }

    fn nearest(&self, params: NearestParameters) -> Response {
        let repeated = vec![params.base.coordinates[0]; params.number_of_results as usize];
        let mut object = Object::new();
        object.insert("waypoints", waypoints(&repeated));
        self.respond(object)
    }

    fn table(&self, params: TableParameters) -> Response {
        let count = params.base.coordinates.len();
        let rows = if params.sources.is_empty() { count } else { params.sources.len() };
        let columns = if params.destinations.is_empty() { count } else { params.destinations.len() };
        let durations = (0..rows)
            .map(|_| Value::from((0..columns).map(|_| Value::Number(0.0)).collect::<Array>()))
            .collect::<Array>();
        let mut object = Object::new();
        object.insert("durations", durations);
        self.respond(object)
    }

    fn trip(&self, params: TripParameters) -> Response {
        let mut object = Object::new();
        object.insert("trips", [route(params.base.coordinates.len())].into_iter().collect::<Array>());
        object.insert("waypoints", waypoints(&params.base.coordinates));
        self.respond(object)
    }

    fn matching(&self, params: MatchParameters) -> Response {
        let mut object = Object::new();
        object.insert("matchings", [route(params.base.coordinates.len() - 1)].into_iter().collect::<Array>());
        object.insert("tracepoints", waypoints(&params.base.coordinates));
        self.respond(object)
    }

    fn tile(&self, params: TileParameters) -> Response {
        Response::ok(ResultBody::Text(format!(
            "tile {}/{}/{}",
            params.x, params.y, params.z
        )))
    }

    fn tile_is_valid(&self, tile: &TileParameters) -> bool {
        self.any_tile || tile.fits_grid()
    }
}
