use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use kairo_dynamic::DynamicValue;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

// Hints are issued with the URL-safe alphabet. Callers often strip the
// trailing padding, so both forms are accepted.
const HINT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Opaque engine-issued token for a previously snapped coordinate.
///
/// The decoded bytes are what the engine consumes; the original text is
/// kept so the hint can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    encoded: String,
    data: Vec<u8>,
}

impl Hint {
    pub fn from_base64(encoded: &str) -> Result<Self> {
        if encoded.is_empty() {
            return Err(Error::EmptyHint);
        }
        let data = HINT_ENGINE.decode(encoded).map_err(Error::InvalidHint)?;
        Ok(Hint {
            encoded: encoded.to_string(),
            data,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl TryFrom<&DynamicValue> for Hint {
    type Error = Error;

    fn try_from(value: &DynamicValue) -> Result<Self> {
        let encoded = value.as_str().ok_or(Error::HintNotString)?;
        Hint::from_base64(encoded)
    }
}

impl Serialize for Hint {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.encoded)
    }
}
