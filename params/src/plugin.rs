use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::field::{Choice, optional_choice};

/// Shape of a successful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// A native structured value.
    #[default]
    Object,
    /// The serialized JSON text as a byte buffer.
    JsonBuffer,
}

impl Choice for OutputFormat {
    const FIELD: &'static str = "format";
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("object", OutputFormat::Object),
        ("json_buffer", OutputFormat::JsonBuffer),
    ];
}

/// Per-call output options passed next to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PluginParameters {
    pub render_json_to_buffer: bool,
}

impl PluginParameters {
    /// A missing or non-object argument yields the defaults.
    pub fn from_options(options: Option<&DynamicValue>) -> Result<Self> {
        let Some(object) = options.and_then(DynamicValue::as_object) else {
            return Ok(PluginParameters::default());
        };
        let format: OutputFormat = optional_choice(object)?.unwrap_or_default();
        Ok(PluginParameters {
            render_json_to_buffer: format == OutputFormat::JsonBuffer,
        })
    }
}

impl DecodableFrom<DynamicValue> for PluginParameters {}

impl Decoder<DynamicValue, PluginParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<PluginParameters> {
        PluginParameters::from_options(Some(self))
    }
}
