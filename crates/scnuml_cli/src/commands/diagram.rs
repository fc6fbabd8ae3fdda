use log::{debug, info};
use scnuml_diagram::DiagramRenderer;
use scnuml_errors::error::{Error, Result};
use std::fs;
use std::path::Path;

pub fn cmd_diagram(file_path: &Path, output: Option<&Path>) -> Result<()> {
    let records = scnuml_parser::from_path(file_path)?;
    debug!("parsed {} records from {}", records.len(), file_path.display());

    // Render completely before touching the output: a failure here must
    // not leave a partial artifact behind
    let script = DiagramRenderer::new().render(&records)?;

    match output {
        Some(path) => {
            fs::write(path, &script).map_err(|e| Error::from(e).with_file_path(path))?;
            info!("wrote {} bytes to {}", script.len(), path.display());
        }
        None => print!("{script}"),
    }
    Ok(())
}
