//! scnuml - scene-description to PlantUML conversion toolkit
//!
//! This is a convenience crate that re-exports the main functionality
//! from the scnuml ecosystem and offers whole-pipeline entry points.

pub use scnuml_diagram::{self, DiagramRenderer};
pub use scnuml_errors::error::*;
pub use scnuml_parser::{self, Record, from_path, from_str};

use std::path::Path;

/// Parse a scene file and render its PlantUML class-diagram script
pub fn render_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let records = from_path(path)?;
    DiagramRenderer::new().render(&records)
}

/// Parse scene-description text and render its PlantUML class-diagram
/// script
pub fn render_str(source: &str) -> Result<String> {
    let records = from_str(source)?;
    DiagramRenderer::new().render(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_str_runs_the_whole_pipeline() {
        let script =
            render_str("{type=object;id=1;}{type=shader;id=2;}{type=object;id=3;parent=1;shader=2;}")
                .unwrap();

        assert!(script.contains("class object_3"));
        assert!(script.contains("object_1 --> object_3"));
        assert!(script.contains("object_3 --> shader_2"));
    }
}
