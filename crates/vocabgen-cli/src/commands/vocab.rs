use vocabgen::{
    EmptyFilter, LengthFilter, SortMode, SpecialTokensFilter, VocabGeneratorOptions,
};

use crate::logging::LogArgs;

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Corpus files; missing files are skipped.
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocabulary size, excluding the unknown marker.
    #[arg(long)]
    target_size: usize,

    /// Minimum occurrence count for a token to be kept.
    #[arg(long, default_value = "5")]
    min_count: u64,

    /// Output ordering.
    #[arg(long, default_value = "freq_desc", value_parser = SortMode::parse)]
    sort: SortMode,

    /// Do not prepend the unknown marker to the output.
    #[arg(long)]
    no_unk: bool,

    /// The reserved unknown marker.
    #[arg(long, default_value = "<unk>")]
    unknown_token: String,

    /// Exclude tokens longer than this many characters.
    #[arg(long)]
    max_token_len: Option<usize>,

    /// Exclude tokens that are empty after removing this marker; repeatable.
    #[arg(long)]
    strip_marker: Vec<String>,

    /// Exclude empty tokens.
    #[arg(long)]
    drop_empty: bool,

    /// Output vocabulary file; stdout when omitted.
    #[arg(long)]
    output: Option<String>,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let mut options = VocabGeneratorOptions::new(self.target_size)
            .with_min_count(self.min_count)
            .with_sort_mode(self.sort)
            .with_include_unknown(!self.no_unk)
            .with_unknown_token(self.unknown_token.clone());

        if let Some(max_len) = self.max_token_len {
            options = options.with_filter(LengthFilter::new(max_len));
        }
        if !self.strip_marker.is_empty() {
            options = options.with_filter(SpecialTokensFilter::new(self.strip_marker.clone()));
        }
        if self.drop_empty {
            options = options.with_filter(EmptyFilter);
        }

        let mut generator = options.init()?;

        log::info!("Reading corpora:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            generator.update_from_path(path);
        }

        log::info!(
            "Counted {} distinct tokens over {} observations",
            generator.counter.len(),
            generator.counter.total_observations(),
        );

        match &self.output {
            Some(path) => {
                generator.write_to_path(path)?;
                log::info!("output: {path}");
            }
            None => {
                let mut writer = std::io::stdout().lock();
                generator.write_to(&mut writer)?;
            }
        }

        Ok(())
    }
}
