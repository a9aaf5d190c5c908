use clap::{Args, ValueEnum};
use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::DynamicValue;
use kairo_params::{
    EngineConfig, MatchParameters, NearestParameters, RouteParameters, TableParameters, TileParameters,
    TripParameters,
};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::output::{self, OutputFormat};
use crate::utils::read_json;

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Service {
    Route,
    Nearest,
    Table,
    Trip,
    Match,
    /// `[x, y, z]` tile address
    Tile,
    /// Engine constructor argument: a dataset path or an options object
    EngineConfig,
}

#[derive(Args)]
pub(crate) struct Config {
    /// Service whose parameters are decoded
    #[arg(value_enum)]
    service: Service,

    /// Path to the JSON request. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let request = read_json(config.file.as_deref())?;

    match config.service {
        Service::Route => show::<RouteParameters>("Route parameters", &request, config.output),
        Service::Nearest => show::<NearestParameters>("Nearest parameters", &request, config.output),
        Service::Table => show::<TableParameters>("Table parameters", &request, config.output),
        Service::Trip => show::<TripParameters>("Trip parameters", &request, config.output),
        Service::Match => show::<MatchParameters>("Match parameters", &request, config.output),
        Service::Tile => show::<TileParameters>("Tile parameters", &request, config.output),
        Service::EngineConfig => show::<EngineConfig>("Engine configuration", &request, config.output),
    }
}

fn show<T>(title: &str, request: &DynamicValue, format: OutputFormat) -> Result<()>
where
    T: DecodableFrom<DynamicValue> + Serialize + std::fmt::Debug,
    DynamicValue: Decoder<DynamicValue, T>,
    <DynamicValue as Decoder<DynamicValue, T>>::Error: Into<crate::error::Error>,
{
    let params = decode::<T>(request)?;
    debug!(?params, "decoded request");
    output::print(title, &params, format)
}

/// Decode a dynamic value into any parameter type implementing
/// `Decoder<DynamicValue, T>`.
fn decode<T>(request: &DynamicValue) -> Result<T>
where
    T: DecodableFrom<DynamicValue>,
    DynamicValue: Decoder<DynamicValue, T>,
    <DynamicValue as Decoder<DynamicValue, T>>::Error: Into<crate::error::Error>,
{
    request.decode().map_err(Into::into)
}
