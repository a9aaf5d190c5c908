//! Service calls.
//!
//! A [`Call`] is one decoded request bound to the router that will serve
//! it. It holds its own strong reference to the router, so it stays
//! runnable on any thread even after every [`Engine`](crate::Engine)
//! handle has been dropped.

use std::fmt;
use std::sync::Arc;

use kairo::decoder::Decoder as _;
use kairo_dynamic::DynamicValue;
use kairo_json::{Rendered, ResultBody, Value, render_body};
use kairo_params::{
    MatchParameters, NearestParameters, PluginParameters, RouteParameters, TableParameters, TileParameters,
    TripParameters,
};
use tracing::{instrument, warn};

use crate::error::{Error, Result};
use crate::router::{Response, Router, Status};

/// Parameters of one routing service.
pub trait Request: fmt::Debug + Send + Sized + 'static {
    /// Service name used in logs.
    const SERVICE: &'static str;

    fn decode_for(value: &DynamicValue, router: &dyn Router) -> std::result::Result<Self, kairo_params::Error>;

    fn dispatch(self, router: &dyn Router) -> Response;
}

impl Request for RouteParameters {
    const SERVICE: &'static str = "route";

    fn decode_for(value: &DynamicValue, _: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        value.decode()
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.route(self)
    }
}

impl Request for NearestParameters {
    const SERVICE: &'static str = "nearest";

    fn decode_for(value: &DynamicValue, _: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        value.decode()
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.nearest(self)
    }
}

impl Request for TableParameters {
    const SERVICE: &'static str = "table";

    fn decode_for(value: &DynamicValue, _: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        value.decode()
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.table(self)
    }
}

impl Request for TripParameters {
    const SERVICE: &'static str = "trip";

    fn decode_for(value: &DynamicValue, _: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        value.decode()
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.trip(self)
    }
}

impl Request for MatchParameters {
    const SERVICE: &'static str = "match";

    fn decode_for(value: &DynamicValue, _: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        value.decode()
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.matching(self)
    }
}

impl Request for TileParameters {
    const SERVICE: &'static str = "tile";

    // Tile validity belongs to the router's tiling scheme.
    fn decode_for(value: &DynamicValue, router: &dyn Router) -> std::result::Result<Self, kairo_params::Error> {
        TileParameters::from_dynamic(value, |tile| router.tile_is_valid(tile))
    }

    fn dispatch(self, router: &dyn Router) -> Response {
        router.tile(self)
    }
}

pub struct Call<P> {
    router: Arc<dyn Router>,
    params: P,
    plugin: PluginParameters,
}

impl<P: Request> Call<P> {
    pub(crate) fn new(router: Arc<dyn Router>, params: P, plugin: PluginParameters) -> Self {
        Call {
            router,
            params,
            plugin,
        }
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    pub fn plugin_parameters(&self) -> PluginParameters {
        self.plugin
    }

    /// Runs the request on the router and renders the result.
    #[instrument(name = "call", skip(self), fields(service = P::SERVICE))]
    pub fn run(self) -> Result<Rendered> {
        let Call {
            router,
            params,
            plugin,
        } = self;
        let response = params.dispatch(router.as_ref());
        let body = parse_result(response)?;
        Ok(render_body(&body, plugin.render_json_to_buffer)?)
    }
}

impl<P: fmt::Debug> fmt::Debug for Call<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("params", &self.params)
            .field("plugin", &self.plugin)
            .finish_non_exhaustive()
    }
}

/// Turns a router response into the body to render.
///
/// Object bodies lose their `code` and `message` entries; an error status
/// becomes [`Error::Engine`]. Text bodies pass through untouched.
pub fn parse_result(response: Response) -> Result<ResultBody> {
    let Response { status, body } = response;
    let mut object = match body {
        ResultBody::Object(object) => object,
        text @ ResultBody::Text(_) => return Ok(text),
    };

    let code = match object.remove("code") {
        Some(Value::String(code)) => code,
        _ => return Err(Error::MissingCode),
    };
    let message = match object.remove("message") {
        Some(Value::String(message)) => Some(message),
        _ => None,
    };

    if status == Status::Error {
        warn!(%code, message = message.as_deref().unwrap_or_default(), "router returned an error");
        return Err(Error::Engine { code, message });
    }
    Ok(ResultBody::Object(object))
}
