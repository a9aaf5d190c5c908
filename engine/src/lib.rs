//! Routing engine handle.
//!
//! An [`Engine`] wraps a [`Router`] behind a reference-counted handle.
//! Every service method decodes its arguments into validated parameters
//! and returns a [`Call`] that owns everything it needs to run: the
//! parameters, the output options and its own reference to the router.
//! Running the call dispatches to the router, strips the status entries
//! from the result and renders it.

#![forbid(unsafe_code)]

pub mod call;
pub mod engine;
pub mod error;
pub mod router;

#[cfg(test)]
mod testing;

pub use call::{Call, Request, parse_result};
pub use engine::Engine;
pub use error::{Error, Result};
pub use router::{Response, Router, Status};
