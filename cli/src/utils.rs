use std::fs;
use std::io::{self, Read};

use kairo_dynamic::DynamicValue;

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read a JSON document from a file or stdin as a dynamic value.
pub(crate) fn read_json(file: Option<&str>) -> Result<DynamicValue> {
    let contents = String::from_utf8(read_input(file)?)?;
    Ok(contents.parse()?)
}
