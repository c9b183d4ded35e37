use vocabgen::fileops::merge_files;

use crate::logging::LogArgs;

/// Args for the merge command.
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// Input files; missing inputs are skipped.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Output file.
    #[arg(long)]
    output: String,
}

impl MergeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        merge_files(&self.files, &self.output)?;

        Ok(())
    }
}
