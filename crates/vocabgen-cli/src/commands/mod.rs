mod merge;
mod split;
mod vocab;

/// Subcommands for vocabgen-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a vocabulary file from corpus files.
    Vocab(vocab::VocabArgs),

    /// Merge corpus files into one.
    Merge(merge::MergeArgs),

    /// Split a corpus file into parts.
    Split(split::SplitArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Merge(cmd) => cmd.run(),
            Commands::Split(cmd) => cmd.run(),
        }
    }
}
