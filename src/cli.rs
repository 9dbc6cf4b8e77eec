use crate::domain::constants::{DEFAULT_OUTPUT_NAME, DEFAULT_SPEC_DIR};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "traitscan",
    version,
    about = "Derive a behavior model from a Smithy-style IDL spec"
)]
pub struct Cli {
    #[arg(long, help = "Print the run summary as machine-readable JSON")]
    pub json: bool,
    #[arg(
        default_value = DEFAULT_SPEC_DIR,
        help = "Directory containing the primary document and overlays/"
    )]
    pub spec_dir: PathBuf,
    #[arg(help = "Path of the generated behavior model")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Output path: explicit argument, or the conventional filename
    /// next to the spec directory.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.spec_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
                .join(DEFAULT_OUTPUT_NAME)
        })
    }
}
