use clap::Args;
use std::path::PathBuf;

/// File input argument
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// Input scene file
    #[arg(index = 1)]
    pub file: PathBuf,
}

/// JSON output argument
#[derive(Debug, Clone, Args)]
pub struct JsonArgs {
    /// Output as JSON
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

/// Tree styling arguments
#[derive(Debug, Clone, Args)]
pub struct TreeStyleArgs {
    /// Use ASCII characters instead of Unicode box characters for tree output
    #[arg(
        long,
        help = "Use ASCII characters instead of Unicode box characters for tree output"
    )]
    pub ascii: bool,
}
