//! Request parameters for the routing services.
//!
//! Each service has its own parameter type, decoded from a [`DynamicValue`]
//! through [`kairo::decoder::Decoder`]. Decoding validates the whole request
//! in one pass and fails on the first problem, so a parameter value that
//! exists is always complete and consistent.
//!
//! ```no_run
//! use kairo::decoder::Decoder;
//! use kairo_dynamic::DynamicValue;
//! use kairo_params::RouteParameters;
//!
//! let request: DynamicValue = r#"{"coordinates": [[13.38, 52.51], [13.42, 52.5]], "steps": true}"#
//!     .parse()
//!     .unwrap();
//! let params: RouteParameters = request.decode().unwrap();
//! assert!(params.common.steps);
//! ```
//!
//! [`DynamicValue`]: kairo_dynamic::DynamicValue

#![forbid(unsafe_code)]

pub mod annotations;
pub mod approach;
pub mod base;
pub mod bearing;
pub mod common;
pub mod coordinate;
pub mod engine_config;
pub mod error;
pub mod field;
pub mod hint;
pub mod matching;
pub mod nearest;
pub mod plugin;
pub mod route;
pub mod table;
pub mod tile;
pub mod trip;
mod waypoints;

pub use annotations::{AnnotationsType, TableAnnotations};
pub use approach::Approach;
pub use base::BaseParameters;
pub use bearing::Bearing;
pub use common::{CommonParameters, Geometries, Overview};
pub use coordinate::{Cardinality, Coordinate};
pub use engine_config::{Algorithm, EngineConfig, Limits};
pub use error::{Error, Field, IndexList};
pub use field::Choice;
pub use hint::Hint;
pub use matching::{Gaps, MatchParameters};
pub use nearest::NearestParameters;
pub use plugin::{OutputFormat, PluginParameters};
pub use route::{RouteParameters, Snapping};
pub use table::{FallbackCoordinate, TableParameters};
pub use tile::TileParameters;
pub use trip::{TripDestination, TripParameters, TripSource};
