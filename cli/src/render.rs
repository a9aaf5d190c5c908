use std::io::{self, Write};

use clap::{Args, ValueEnum};
use kairo_engine::{Response, Status, parse_result};
use kairo_json::{Rendered, ResultBody, Value, render_body};

use crate::error::{Error, Result};
use crate::utils::read_json;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RenderFormat {
    /// Native value, printed as JSON
    Object,
    /// Raw serialized JSON bytes
    #[value(name = "json_buffer")]
    JsonBuffer,
}

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the JSON result tree. If not specified, reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "object")]
    format: RenderFormat,

    /// Treat the input as a router response: fail unless its `code` is
    /// "Ok", and strip `code` and `message` before rendering
    #[arg(long)]
    response: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_json(config.file.as_deref())?;
    let Value::Object(tree) = Value::from(&input) else {
        return Err(Error::InvalidInput(format!(
            "result tree must be an object, got {}",
            input.type_name()
        )));
    };

    let body = if config.response {
        let status = match tree.get("code") {
            Some(Value::String(code)) if code == "Ok" => Status::Ok,
            _ => Status::Error,
        };
        parse_result(Response {
            status,
            body: ResultBody::Object(tree),
        })?
    } else {
        ResultBody::Object(tree)
    };

    match render_body(&body, config.format == RenderFormat::JsonBuffer)? {
        Rendered::Native(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Rendered::Buffer(buffer) => io::stdout().write_all(&buffer)?,
    }
    Ok(())
}
