//! Decode errors.
//!
//! Every variant is one human-readable diagnostic naming the offending
//! field. Decoding stops at the first one.

use std::fmt;

use thiserror::Error;

/// Per-coordinate arrays whose length must match the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Approaches,
    Bearings,
    Hints,
    Radiuses,
    Timestamps,
}

impl Field {
    /// Key of the field in the request object.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Approaches => "approaches",
            Self::Bearings => "bearings",
            Self::Hints => "hints",
            Self::Radiuses => "radiuses",
            Self::Timestamps => "timestamps",
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::Approaches => "an array of strings or null",
            Self::Bearings => "an array of [bearing, range] pairs or null",
            Self::Hints => "an array of strings or null",
            Self::Radiuses => "an array of non-negative numbers or null",
            Self::Timestamps => "an array of integers (or undefined)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approaches => write!(f, "Approaches"),
            Self::Bearings => write!(f, "Bearings"),
            Self::Hints => write!(f, "Hints"),
            Self::Radiuses => write!(f, "Radiuses"),
            Self::Timestamps => write!(f, "Timestamps"),
        }
    }
}

/// Index lists of a table request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexList {
    Sources,
    Destinations,
}

impl IndexList {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Sources => "sources",
            Self::Destinations => "destinations",
        }
    }

    fn singular(&self) -> &'static str {
        match self {
            Self::Sources => "Source",
            Self::Destinations => "Destination",
        }
    }
}

impl fmt::Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sources => write!(f, "Sources"),
            Self::Destinations => write!(f, "Destinations"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Argument shape
    #[error("First arg must be an object")]
    ExpectedObject,
    #[error("Only accepts one parameter, got {0}")]
    TooManyArguments(usize),
    #[error("Parameter must be a path or options object")]
    ExpectedPathOrOptions,

    // Coordinates
    #[error("Must provide a coordinates property")]
    MissingCoordinates,
    #[error("Coordinates must be an array of (lon/lat) pairs")]
    CoordinatesNotPairs,
    #[error("Each member of a coordinate pair must be a number")]
    CoordinateNotNumber,
    #[error("Lng/Lat coordinates must be valid numbers")]
    CoordinateNotFinite,
    #[error("Lng/Lat coordinates must be within world bounds (-180 <= lng <= 180, -90 <= lat <= 90)")]
    CoordinateOutOfBounds,
    #[error("At least two coordinates must be provided")]
    TooFewCoordinates,
    #[error("Exactly one coordinate pair must be provided")]
    ExpectedSingleCoordinate,

    // Per-coordinate arrays
    #[error("{0} must be {expected}", expected = .0.expected())]
    NotAnArray(Field),
    #[error("{0} array must have the same length as coordinates array")]
    LengthMismatch(Field),
    #[error("Bearing must be an array of [bearing, range] or null")]
    BearingNotPair,
    #[error("Bearing values need to be numbers in range 0..360")]
    BearingNotNumber,
    #[error("Bearing values need to be in range 0..360, 0..180")]
    BearingOutOfRange,
    #[error("Hint must be null or string")]
    HintNotString,
    #[error("Hint cannot be an empty string")]
    EmptyHint,
    #[error("Hint must be valid base64: {0}")]
    InvalidHint(base64::DecodeError),
    #[error("Radius must be non-negative double or null")]
    InvalidRadius,
    #[error("Timestamps array items must be non-negative integers")]
    InvalidTimestamp,
    #[error("Exclude must be an array of strings or empty")]
    InvalidExclude,

    // Enumerations
    #[error("{field} must be a string: [{allowed}]")]
    ChoiceNotString { field: &'static str, allowed: String },
    #[error("'{field}' param must be one of [{allowed}]")]
    InvalidChoice { field: &'static str, allowed: String },

    // Scalars
    #[error("'{0}' param must be a boolean")]
    ExpectedBoolean(&'static str),
    #[error("'{0}' param must be boolean or null")]
    ExpectedBooleanOrNull(&'static str),
    #[error("{0} must be a number")]
    ExpectedNumber(&'static str),
    #[error("{0} must be > 0")]
    NotPositive(&'static str),
    #[error("{0} must be an integral number")]
    ExpectedIntegral(&'static str),
    #[error("{0} needs to be a string")]
    ExpectedString(&'static str),

    // Annotations
    #[error("this 'annotations' param is not supported")]
    UnsupportedAnnotations,
    #[error("Annotations must be an array containing 'duration' or 'distance', or both")]
    TableAnnotationsNotArray,

    // Route
    #[error("'alternatives' param must be boolean or a non-negative integer")]
    InvalidAlternatives,

    // Waypoints
    #[error("Waypoints must be an array of integers corresponding to the input coordinates.")]
    WaypointsNotArray,
    #[error("At least two waypoints must be provided")]
    TooFewWaypoints,
    #[error("Waypoint values must be an array of integers")]
    WaypointNotInteger,
    #[error("Waypoints must correspond with the index of an input coordinate")]
    WaypointOutOfRange,
    #[error("Waypoints must be supplied in increasing order")]
    WaypointsNotIncreasing,
    #[error("First waypoint value must correspond to the first coordinate index")]
    FirstWaypointNotFirstCoordinate,
    #[error("Last waypoint value must correspond to the last coordinate index")]
    LastWaypointNotLastCoordinate,

    // Nearest
    #[error("Number must be an integer greater than or equal to 1")]
    InvalidNumberOfResults,

    // Table
    #[error("{0} must be an array of indices (or undefined)")]
    IndicesNotArray(IndexList),
    #[error("{singular} must be an integer", singular = .0.singular())]
    IndexNotInteger(IndexList),
    #[error("{singular} indices must be less than the number of coordinates", singular = .0.singular())]
    IndexOutOfRange(IndexList),

    // Tile
    #[error("Parameter must be an array [x, y, z]")]
    ExpectedTileTriple,
    #[error("Tile {0} coordinate must be unsigned integer")]
    TileCoordinateNotUnsigned(char),
    #[error("Invalid tile coordinates")]
    InvalidTile,

    // Engine configuration
    #[error("memory_file option requires a path to a file.")]
    MemoryFileRequiresPath,
    #[error("Shared_memory must be enabled if no path is specified")]
    SharedMemoryRequired,
}

pub type Result<T> = std::result::Result<T, Error>;
