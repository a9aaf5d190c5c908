use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One `field: value` line per parameter
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

pub(crate) fn print<T: Serialize>(title: &str, value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(value)?);
        }
        OutputFormat::Text => {
            // Round-trip through text so fields keep their declaration order.
            let value: DynamicValue = serde_json::to_string(value)?.parse()?;
            print!("{}", format_text(title, &value));
        }
    }
    Ok(())
}

fn format_text(title: &str, value: &DynamicValue) -> String {
    let mut output = format!("{title}:\n");
    match value {
        DynamicValue::Object(fields) => {
            let width = fields.keys().map(String::len).max().unwrap_or(0);
            for (name, field) in fields {
                output.push_str(&format!("    {name:<width$}  {field}\n"));
            }
        }
        other => output.push_str(&format!("    {other}\n")),
    }
    output
}
