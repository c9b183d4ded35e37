use vocabgen::fileops::split_file;

use crate::logging::LogArgs;

/// Args for the split command.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// Input file.
    file: String,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Number of parts to split into.
    #[arg(long)]
    parts: usize,

    /// Output directory for the part files.
    #[arg(long)]
    output_dir: String,
}

impl SplitArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let parts = split_file(&self.file, self.parts, &self.output_dir)?;
        log::info!("wrote {} parts to {}", parts.len(), self.output_dir);

        Ok(())
    }
}
