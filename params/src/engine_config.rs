//! Engine configuration.
//!
//! The engine is opened either from a dataset path or from an options
//! object. Without a path the dataset must come from shared memory.

use std::path::PathBuf;

use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::{DynamicValue, Object};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::field::{Choice, optional_bool, optional_choice, optional_integral, optional_number, optional_string};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Algorithm {
    /// Contraction hierarchies.
    #[default]
    CH,
    /// Multi-level Dijkstra.
    MLD,
}

impl Choice for Algorithm {
    const FIELD: &'static str = "algorithm";
    // "CoreCH" is a legacy spelling of CH.
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("CH", Algorithm::CH),
        ("CoreCH", Algorithm::CH),
        ("MLD", Algorithm::MLD),
    ];
}

/// Service-wide request limits. `-1` means unlimited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Limits {
    pub max_locations_trip: i32,
    pub max_locations_viaroute: i32,
    pub max_locations_distance_table: i32,
    pub max_locations_map_matching: i32,
    pub max_results_nearest: i32,
    pub max_alternatives: i32,
    pub max_radius_map_matching: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_locations_trip: -1,
            max_locations_viaroute: -1,
            max_locations_distance_table: -1,
            max_locations_map_matching: -1,
            max_results_nearest: -1,
            max_alternatives: 3,
            max_radius_map_matching: -1.0,
        }
    }
}

impl Limits {
    fn from_object(object: &Object) -> Result<Self> {
        let defaults = Limits::default();
        let limit = |key: &'static str, default: i32| -> Result<i32> {
            Ok(optional_integral(object, key)?.unwrap_or(default))
        };

        Ok(Limits {
            max_locations_trip: limit("max_locations_trip", defaults.max_locations_trip)?,
            max_locations_viaroute: limit("max_locations_viaroute", defaults.max_locations_viaroute)?,
            max_locations_distance_table: limit(
                "max_locations_distance_table",
                defaults.max_locations_distance_table,
            )?,
            max_locations_map_matching: limit(
                "max_locations_map_matching",
                defaults.max_locations_map_matching,
            )?,
            max_results_nearest: limit("max_results_nearest", defaults.max_results_nearest)?,
            max_alternatives: limit("max_alternatives", defaults.max_alternatives)?,
            max_radius_map_matching: optional_number(object, "max_radius_map_matching")?
                .unwrap_or(defaults.max_radius_map_matching),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    /// Base path of the prepared dataset files.
    pub storage_path: Option<PathBuf>,
    pub memory_file: Option<PathBuf>,
    pub use_shared_memory: bool,
    pub use_mmap: bool,
    /// Named dataset region in shared memory.
    pub dataset_name: Option<String>,
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub limits: Limits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            storage_path: None,
            memory_file: None,
            use_shared_memory: true,
            use_mmap: true,
            dataset_name: None,
            algorithm: Algorithm::default(),
            limits: Limits::default(),
        }
    }
}

impl EngineConfig {
    /// Decodes the engine constructor arguments: nothing, a dataset path or
    /// an options object.
    pub fn from_arguments(arguments: &[DynamicValue]) -> Result<Self> {
        match arguments {
            [] => Ok(EngineConfig::default()),
            [argument] => argument.decode(),
            _ => Err(Error::TooManyArguments(arguments.len())),
        }
    }

    fn from_path(path: &str) -> Self {
        EngineConfig {
            storage_path: Some(PathBuf::from(path)),
            use_shared_memory: false,
            ..Default::default()
        }
    }

    fn from_options(object: &Object) -> Result<Self> {
        if object.contains_key("memory_file") && !object.contains_key("path") {
            return Err(Error::MemoryFileRequiresPath);
        }

        let storage_path = optional_string(object, "path")?.map(PathBuf::from);
        let memory_file = optional_string(object, "memory_file")?.map(PathBuf::from);
        let dataset_name = optional_string(object, "dataset_name")?.map(str::to_string);

        let use_shared_memory = optional_bool(object, "shared_memory")?.unwrap_or(storage_path.is_none());
        if storage_path.is_none() && !use_shared_memory {
            return Err(Error::SharedMemoryRequired);
        }
        let use_mmap = optional_bool(object, "mmap_memory")?.unwrap_or(true);

        let algorithm: Algorithm = optional_choice(object)?.unwrap_or_default();
        let limits = Limits::from_object(object)?;

        Ok(EngineConfig {
            storage_path,
            memory_file,
            use_shared_memory,
            use_mmap,
            dataset_name,
            algorithm,
            limits,
        })
    }
}

impl DecodableFrom<DynamicValue> for EngineConfig {}

impl Decoder<DynamicValue, EngineConfig> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<EngineConfig> {
        match self {
            DynamicValue::String(path) => Ok(EngineConfig::from_path(path)),
            DynamicValue::Object(object) => EngineConfig::from_options(object),
            _ => Err(Error::ExpectedPathOrOptions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn decode(json: &str) -> Result<EngineConfig> {
        let value: DynamicValue = json.parse().unwrap();
        EngineConfig::from_arguments(&[value])
    }

    #[test]
    fn test_no_arguments() {
        let config = EngineConfig::from_arguments(&[]).unwrap();
        assert_eq!(EngineConfig::default(), config);
        assert!(config.use_shared_memory);
        assert!(config.use_mmap);
        assert_eq!(3, config.limits.max_alternatives);
        assert_eq!(-1, config.limits.max_locations_trip);
    }

    #[test]
    fn test_too_many_arguments() {
        let args = [DynamicValue::from("a.osrm"), DynamicValue::from("b.osrm")];
        assert_eq!(Err(Error::TooManyArguments(2)), EngineConfig::from_arguments(&args));
    }

    #[test]
    fn test_path_argument() {
        let config = decode(r#""berlin-latest.osrm""#).unwrap();
        assert_eq!(Some(PathBuf::from("berlin-latest.osrm")), config.storage_path);
        assert!(!config.use_shared_memory);
    }

    #[rstest(input, case("42"), case("null"), case(r#"["berlin.osrm"]"#))]
    fn test_invalid_argument(input: &str) {
        assert_eq!(Err(Error::ExpectedPathOrOptions), decode(input));
    }

    #[test]
    fn test_memory_file_requires_path() {
        assert_eq!(
            Err(Error::MemoryFileRequiresPath),
            decode(r#"{"memory_file": "/dev/shm/berlin"}"#)
        );

        let config = decode(r#"{"memory_file": "/dev/shm/berlin", "path": "berlin.osrm"}"#).unwrap();
        assert_eq!(Some(PathBuf::from("/dev/shm/berlin")), config.memory_file);
        assert_eq!(Some(PathBuf::from("berlin.osrm")), config.storage_path);
        assert!(!config.use_shared_memory);
    }

    #[rstest(
        json,
        expected,
        case(r#"{}"#, Ok(true)),
        case(r#"{"shared_memory": true}"#, Ok(true)),
        case(r#"{"shared_memory": false}"#, Err(Error::SharedMemoryRequired)),
        case(r#"{"path": "berlin.osrm"}"#, Ok(false)),
        case(r#"{"path": "berlin.osrm", "shared_memory": true}"#, Ok(true)),
        case(r#"{"shared_memory": "yes"}"#, Err(Error::ExpectedBoolean("shared_memory")))
    )]
    fn test_shared_memory(json: &str, expected: Result<bool>) {
        assert_eq!(expected, decode(json).map(|config| config.use_shared_memory));
    }

    #[rstest(
        name,
        expected,
        case("CH", Ok(Algorithm::CH)),
        case("CoreCH", Ok(Algorithm::CH)),
        case("MLD", Ok(Algorithm::MLD)),
        case(
            "mld",
            Err(Error::InvalidChoice { field: "algorithm", allowed: "CH, CoreCH, MLD".to_string() })
        )
    )]
    fn test_algorithm(name: &str, expected: Result<Algorithm>) {
        let json = format!(r#"{{"algorithm": "{name}"}}"#);
        assert_eq!(expected, decode(&json).map(|config| config.algorithm));
    }

    #[test]
    fn test_options() {
        let config = decode(
            r#"{"path": "berlin.osrm", "algorithm": "MLD", "mmap_memory": false,
                "dataset_name": "berlin",
                "max_locations_trip": 3, "max_locations_viaroute": 2,
                "max_locations_distance_table": 100, "max_locations_map_matching": 50,
                "max_results_nearest": 10, "max_alternatives": 1,
                "max_radius_map_matching": 12.5}"#,
        )
        .unwrap();
        assert_eq!(Algorithm::MLD, config.algorithm);
        assert!(!config.use_mmap);
        assert_eq!(Some("berlin".to_string()), config.dataset_name);
        assert_eq!(
            Limits {
                max_locations_trip: 3,
                max_locations_viaroute: 2,
                max_locations_distance_table: 100,
                max_locations_map_matching: 50,
                max_results_nearest: 10,
                max_alternatives: 1,
                max_radius_map_matching: 12.5,
            },
            config.limits
        );
    }

    #[rstest(
        json,
        expected,
        case(r#"{"max_locations_trip": 1.5}"#, Error::ExpectedIntegral("max_locations_trip")),
        case(r#"{"max_alternatives": "3"}"#, Error::ExpectedIntegral("max_alternatives")),
        case(r#"{"max_radius_map_matching": "far"}"#, Error::ExpectedNumber("max_radius_map_matching")),
        case(r#"{"dataset_name": 7}"#, Error::ExpectedString("dataset_name")),
        case(r#"{"path": 7}"#, Error::ExpectedString("path"))
    )]
    fn test_invalid_options(json: &str, expected: Error) {
        assert_eq!(Err(expected), decode(json));
    }
}
