//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].
//!
//! Implemented by the source type `T` to produce `E`. Rendering a result
//! tree into a host value and serializing it into a byte buffer are both
//! encoders.

/// Encodes `self` (of type `T`) into type `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    type Error;

    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be produced from type `T`.
pub trait EncodableTo<T> {}
