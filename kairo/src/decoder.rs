//! Decoder trait for validated conversions.
//!
//! The `Decoder` trait turns a loosely structured source value `T` into a
//! strongly typed destination `D`, rejecting malformed input with an
//! error. It is how every request parameter object is built from caller
//! input.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use kairo::decoder::{DecodableFrom, Decoder};
//!
//! struct Input(Option<f64>);
//! struct Speed(f64);
//!
//! #[derive(Debug)]
//! struct MissingSpeed;
//!
//! impl DecodableFrom<Input> for Speed {}
//!
//! impl Decoder<Input, Speed> for Input {
//!     type Error = MissingSpeed;
//!
//!     fn decode(&self) -> Result<Speed, Self::Error> {
//!         self.0.map(Speed).ok_or(MissingSpeed)
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. A single source type usually carries
/// several implementations, one per destination, so call sites name the
/// destination type:
///
/// ```ignore
/// let params: TableParameters = input.decode()?;
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first field that failed validation.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
pub trait DecodableFrom<T> {}
