use scnuml_errors::error::{CliErrorKind, Error, Result};
use std::path::Path;

pub fn cmd_records(file_path: &Path, json: bool) -> Result<()> {
    let records = scnuml_parser::from_path(file_path)?;

    if json {
        let payload = serde_json::to_string_pretty(&records).map_err(|e| {
            Error::cli(
                format!("failed to serialize records to JSON: {e}"),
                CliErrorKind::OutputFormatError,
            )
            .with_command("records")
        })?;
        println!("{payload}");
    } else {
        println!("Records in {}:", file_path.display());
        for (index, record) in records.iter().enumerate() {
            println!("  [{index}] {record}");
        }
    }
    Ok(())
}
