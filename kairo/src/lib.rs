//! # kairo
//!
//! Core conversion traits for the kairo routing-request boundary.
//!
//! The crates of this workspace move data across the line between a
//! dynamically typed caller and a strongly typed routing engine. Every
//! step of that move is one `Decoder` or `Encoder` implementation.
//!
//! ## Overview
//!
//! ```text
//! DynamicValue → RouteParameters / TableParameters / ... → routing engine
//! routing engine → json::Value → DynamicValue (or a serialized buffer)
//! ```
//!
//! Inbound values are decoded into validated request objects with the
//! `Decoder` trait; result trees are encoded back into host values with
//! the `Encoder` trait.
//!
//! ## Type Safety
//!
//! Both traits are guarded by marker traits (`DecodableFrom` and
//! `EncodableTo`), so only conversions that were declared for a pair of
//! types can be requested.
//!
//! ## Example
//!
//! ```ignore
//! use kairo::decoder::Decoder;
//! use kairo_dynamic::DynamicValue;
//! use kairo_params::RouteParameters;
//!
//! let input: DynamicValue = r#"{"coordinates": [[13.38, 52.51], [13.42, 52.50]]}"#.parse()?;
//! let params: RouteParameters = input.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
