use std::fmt;
use std::sync::Arc;

use kairo_dynamic::DynamicValue;
use kairo_params::{
    EngineConfig, MatchParameters, NearestParameters, PluginParameters, RouteParameters, TableParameters,
    TileParameters, TripParameters,
};
use tracing::{debug, info};

use crate::call::{Call, Request};
use crate::error::{Error, Result};
use crate::router::Router;

/// Shared handle to a routing engine.
///
/// Cloning is cheap and every clone serves the same router. Calls created
/// from a handle keep the router alive on their own.
#[derive(Clone)]
pub struct Engine {
    router: Arc<dyn Router>,
}

impl Engine {
    pub fn new(router: impl Router + 'static) -> Self {
        Engine {
            router: Arc::new(router),
        }
    }

    /// Decodes the engine arguments and hands the configuration to
    /// `connect`, which opens the dataset it describes.
    pub fn open<R, E, F>(arguments: &[DynamicValue], connect: F) -> Result<Self>
    where
        R: Router + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce(EngineConfig) -> std::result::Result<R, E>,
    {
        let config = EngineConfig::from_arguments(arguments)?;
        info!(
            storage_path = ?config.storage_path,
            shared_memory = config.use_shared_memory,
            algorithm = ?config.algorithm,
            "opening routing engine"
        );
        let router = connect(config).map_err(|err| Error::Open(Box::new(err)))?;
        Ok(Engine::new(router))
    }

    pub fn route(&self, params: &DynamicValue, options: Option<&DynamicValue>) -> Result<Call<RouteParameters>> {
        self.call(params, options)
    }

    pub fn nearest(
        &self,
        params: &DynamicValue,
        options: Option<&DynamicValue>,
    ) -> Result<Call<NearestParameters>> {
        self.call(params, options)
    }

    pub fn table(&self, params: &DynamicValue, options: Option<&DynamicValue>) -> Result<Call<TableParameters>> {
        self.call(params, options)
    }

    pub fn trip(&self, params: &DynamicValue, options: Option<&DynamicValue>) -> Result<Call<TripParameters>> {
        self.call(params, options)
    }

    pub fn matching(
        &self,
        params: &DynamicValue,
        options: Option<&DynamicValue>,
    ) -> Result<Call<MatchParameters>> {
        self.call(params, options)
    }

    /// Tile requests take the `[x, y, z]` array itself.
    pub fn tile(&self, params: &DynamicValue, options: Option<&DynamicValue>) -> Result<Call<TileParameters>> {
        self.call(params, options)
    }

    fn call<P: Request>(&self, params: &DynamicValue, options: Option<&DynamicValue>) -> Result<Call<P>> {
        let params = P::decode_for(params, self.router.as_ref())?;
        let plugin = PluginParameters::from_options(options)?;
        debug!(service = P::SERVICE, ?params, ?plugin, "decoded request");
        Ok(Call::new(Arc::clone(&self.router), params, plugin))
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}
