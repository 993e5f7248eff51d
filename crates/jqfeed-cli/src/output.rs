use std::io::{self, Write};

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(data: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_output(&mut writer, data, format, pretty)?;
    writer.flush()?;
    Ok(())
}

fn write_output<W: Write>(
    writer: &mut W,
    data: &Value,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            writeln!(writer, "{payload}")?;
        }
        OutputFormat::Ndjson => match data {
            Value::Array(items) => {
                for item in items {
                    writeln!(writer, "{}", serde_json::to_string(item)?)?;
                }
            }
            other => writeln!(writer, "{}", serde_json::to_string(other)?)?,
        },
    }

    Ok(())
}
