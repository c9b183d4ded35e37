//! # Vocabulary Generation
//!
//! Drives corpus lines through a [`LineSplitter`] into a [`TokenCounter`],
//! then reduces the accumulated counts through size/frequency/filter
//! policy into a final ordered token list, persisted one token per line.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    counter::TokenCounter,
    errors::{VgResult, VocabgenError},
    filters::{FilterChain, VocabFilter},
    splitter::{LineSplitter, SpaceLineSplitter},
};

/// The default reserved unknown-token marker.
pub const DEFAULT_UNKNOWN_TOKEN: &str = "<unk>";

/// The default minimum occurrence count.
pub const DEFAULT_MIN_COUNT: u64 = 5;

/// Ordering applied to the generated vocabulary.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
pub enum SortMode {
    /// Most frequent tokens first, count ties in first-observation order.
    #[default]
    #[strum(serialize = "freq_desc")]
    FreqDesc,

    /// Lexicographically ascending.
    #[strum(serialize = "alphabet_asc")]
    AlphabetAsc,
}

impl SortMode {
    /// Parse a sort mode name.
    ///
    /// Unknown names are a configuration error, rejected immediately
    /// rather than deferred to generation time.
    pub fn parse(name: &str) -> VgResult<Self> {
        name.parse().map_err(|_| VocabgenError::InvalidSortMode {
            name: name.to_string(),
        })
    }
}

/// Options for [`VocabGenerator`].
pub struct VocabGeneratorOptions {
    /// Target vocabulary size, excluding the unknown marker.
    pub target_size: usize,

    /// Minimum occurrence count for a token to be kept.
    pub min_count: u64,

    /// Output ordering.
    pub sort_mode: SortMode,

    /// Whether to prepend the unknown marker to the output.
    pub include_unknown: bool,

    /// The reserved unknown-token marker.
    pub unknown_token: String,

    /// The exclusion filter chain.
    pub filters: FilterChain,

    /// The line splitter.
    pub splitter: Box<dyn LineSplitter>,
}

impl VocabGeneratorOptions {
    /// Create new options with the default policy.
    ///
    /// ## Arguments
    /// * `target_size` - the target vocabulary size, excluding the
    ///   unknown marker.
    ///
    /// ## Returns
    /// A new `VocabGeneratorOptions` instance.
    pub fn new(target_size: usize) -> Self {
        Self {
            target_size,
            min_count: DEFAULT_MIN_COUNT,
            sort_mode: SortMode::default(),
            include_unknown: true,
            unknown_token: DEFAULT_UNKNOWN_TOKEN.to_string(),
            filters: FilterChain::new(),
            splitter: Box::new(SpaceLineSplitter),
        }
    }

    /// Sets the minimum occurrence count.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_min_count(
        self,
        min_count: u64,
    ) -> Self {
        Self { min_count, ..self }
    }

    /// Sets the output ordering.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_sort_mode(
        self,
        sort_mode: SortMode,
    ) -> Self {
        Self { sort_mode, ..self }
    }

    /// Sets whether the unknown marker is prepended to the output.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_include_unknown(
        self,
        include_unknown: bool,
    ) -> Self {
        Self {
            include_unknown,
            ..self
        }
    }

    /// Sets the reserved unknown-token marker.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_unknown_token(
        self,
        unknown_token: impl Into<String>,
    ) -> Self {
        Self {
            unknown_token: unknown_token.into(),
            ..self
        }
    }

    /// Sets the line splitter.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_splitter(
        self,
        splitter: impl LineSplitter + 'static,
    ) -> Self {
        Self {
            splitter: Box::new(splitter),
            ..self
        }
    }

    /// Adds a filter to the exclusion chain.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_filter(
        mut self,
        filter: impl VocabFilter + 'static,
    ) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replaces the exclusion filter chain.
    ///
    /// ## Returns
    /// The updated `VocabGeneratorOptions` instance.
    pub fn with_filters(
        self,
        filters: FilterChain,
    ) -> Self {
        Self { filters, ..self }
    }

    /// Initializes a [`VocabGenerator`] from these options.
    ///
    /// ## Returns
    /// A new `VocabGenerator` instance; or a configuration error for a
    /// zero target size.
    pub fn init(self) -> VgResult<VocabGenerator> {
        if self.target_size == 0 {
            return Err(VocabgenError::ZeroTargetSize);
        }
        Ok(VocabGenerator {
            options: self,
            counter: TokenCounter::new(),
        })
    }
}

/// Streams corpora into a token frequency table and reduces it to a
/// bounded, ordered vocabulary.
///
/// A generator owns its counter for its whole lifetime: reuse across
/// calls accumulates. Create a fresh instance per run for independent,
/// reproducible outputs.
pub struct VocabGenerator {
    /// The generator options.
    pub options: VocabGeneratorOptions,

    /// The token counts observed so far.
    pub counter: TokenCounter,
}

impl VocabGenerator {
    fn observe_line(
        &mut self,
        line: &str,
    ) {
        let tokens = self.options.splitter.split(line);
        if tokens.is_empty() {
            return;
        }
        self.counter.observe(&tokens);
    }

    fn read_source(
        &mut self,
        path: &Path,
    ) -> std::io::Result<()> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            self.observe_line(&line?);
        }
        Ok(())
    }

    /// Accumulate counts from one corpus file.
    ///
    /// A source that cannot be resolved or read is skipped with a logged
    /// notice; this is recoverable, never fatal.
    ///
    /// ## Arguments
    /// * `path` - the corpus file path.
    ///
    /// ## Returns
    /// Whether the source was read.
    pub fn update_from_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> bool {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("source does not exist, skipping: {}", path.display());
            return false;
        }
        if let Err(err) = self.read_source(path) {
            log::warn!("failed to read source {}: {err}", path.display());
            return false;
        }
        log::info!("finished counting source: {}", path.display());
        true
    }

    /// Accumulate counts from corpus files, in source order then line
    /// order.
    ///
    /// ## Returns
    /// The number of sources actually read.
    pub fn update_from_paths<I, P>(
        &mut self,
        paths: I,
    ) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter(|path| self.update_from_path(path))
            .count()
    }

    /// Accumulate counts from an in-memory line sequence.
    pub fn update_from_lines<I>(
        &mut self,
        lines: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.observe_line(line);
        }
    }

    /// Reduce the accumulated counts to the final ordered vocabulary.
    ///
    /// Rejection happens inside the top-`target_size` ranked window only:
    /// a token ranked below the window is never reconsidered, even when
    /// higher-ranked candidates are rejected. The result is therefore at
    /// most `target_size` tokens (plus the unknown marker), and may be
    /// fewer.
    pub fn build(&self) -> Vec<String> {
        let opts = &self.options;

        let mut vocab = Vec::new();
        for (token, count) in self.counter.most_common(opts.target_size) {
            if count < opts.min_count {
                continue;
            }
            if token == opts.unknown_token {
                continue;
            }
            if opts.filters.excludes(&token) {
                continue;
            }
            vocab.push(token);
        }

        match opts.sort_mode {
            SortMode::FreqDesc => {}
            SortMode::AlphabetAsc => vocab.sort(),
        }

        if opts.include_unknown {
            vocab.insert(0, opts.unknown_token.clone());
        }
        vocab
    }

    /// Write the vocabulary, one token per newline-terminated line.
    ///
    /// ## Arguments
    /// * `writer` - the output sink.
    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
    ) -> VgResult<()> {
        for token in self.build() {
            writer.write_all(token.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the vocabulary to a file.
    ///
    /// The vocabulary is written to a sibling temporary file and renamed
    /// into place on success, so a failed write never leaves a partial
    /// file at `path`. Sink failures are fatal and propagate.
    ///
    /// ## Arguments
    /// * `path` - the output file path.
    pub fn write_to_path(
        &self,
        path: impl AsRef<Path>,
    ) -> VgResult<()> {
        let path = path.as_ref();

        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut writer = BufWriter::new(File::create(&tmp)?);
        if let Err(err) = self.write_to(&mut writer) {
            drop(writer);
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        drop(writer);

        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Generate a vocabulary file from corpus files.
    ///
    /// ## Arguments
    /// * `paths` - the corpus file paths; unresolvable sources are
    ///   skipped.
    /// * `output` - the output vocabulary file path.
    pub fn generate<I, P>(
        &mut self,
        paths: I,
        output: impl AsRef<Path>,
    ) -> VgResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.update_from_paths(paths);
        self.write_to_path(output)
    }

    /// Generate a vocabulary file from an in-memory line sequence.
    ///
    /// ## Arguments
    /// * `lines` - the corpus lines.
    /// * `output` - the output vocabulary file path.
    pub fn generate_from_lines<I>(
        &mut self,
        lines: I,
        output: impl AsRef<Path>,
    ) -> VgResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.update_from_lines(lines);
        self.write_to_path(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::LengthFilter;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!(SortMode::parse("freq_desc").unwrap(), SortMode::FreqDesc);
        assert_eq!(
            SortMode::parse("alphabet_asc").unwrap(),
            SortMode::AlphabetAsc
        );
        assert!(matches!(
            SortMode::parse("by_rank"),
            Err(VocabgenError::InvalidSortMode { .. })
        ));
    }

    #[test]
    fn test_sort_mode_display() {
        assert_eq!(SortMode::FreqDesc.to_string(), "freq_desc");
        assert_eq!(SortMode::AlphabetAsc.to_string(), "alphabet_asc");
    }

    #[test]
    fn test_zero_target_size_is_rejected() {
        assert!(matches!(
            VocabGeneratorOptions::new(0).init(),
            Err(VocabgenError::ZeroTargetSize)
        ));
    }

    fn generator(options: VocabGeneratorOptions) -> VocabGenerator {
        options.init().unwrap()
    }

    #[test]
    fn test_frequency_ranked_build() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(1));
        generator.update_from_lines(["hello world hello"]);

        assert_eq!(generator.build(), vec!["<unk>", "hello", "world"]);
    }

    #[test]
    fn test_length_filter_rejects_in_window() {
        let mut generator = generator(
            VocabGeneratorOptions::new(10)
                .with_min_count(1)
                .with_filter(LengthFilter::new(4)),
        );
        generator.update_from_lines(["hello world hello"]);

        assert_eq!(generator.build(), vec!["<unk>", "hello"]);
    }

    #[test]
    fn test_min_count_rejects() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(2));
        generator.update_from_lines(["hello world hello"]);

        assert_eq!(generator.build(), vec!["<unk>", "hello"]);
    }

    #[test]
    fn test_unknown_marker_candidate_is_rejected() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(1));
        generator.update_from_lines(["<unk> hello <unk>"]);

        assert_eq!(generator.build(), vec!["<unk>", "hello"]);
    }

    #[test]
    fn test_without_unknown_marker() {
        let mut generator = generator(
            VocabGeneratorOptions::new(10)
                .with_min_count(1)
                .with_include_unknown(false),
        );
        generator.update_from_lines(["hello world hello"]);

        assert_eq!(generator.build(), vec!["hello", "world"]);
    }

    #[test]
    fn test_custom_unknown_token() {
        let mut generator = generator(
            VocabGeneratorOptions::new(10)
                .with_min_count(1)
                .with_unknown_token("<oov>"),
        );
        generator.update_from_lines(["hello"]);

        assert_eq!(generator.build(), vec!["<oov>", "hello"]);
    }

    #[test]
    fn test_alphabetical_sort_mode() {
        let mut generator = generator(
            VocabGeneratorOptions::new(10)
                .with_min_count(1)
                .with_sort_mode(SortMode::AlphabetAsc),
        );
        generator.update_from_lines(["zebra apple zebra mango"]);

        // Marker first regardless of sort mode.
        assert_eq!(generator.build(), vec!["<unk>", "apple", "mango", "zebra"]);
    }

    #[test]
    fn test_bounded_candidate_window_is_not_backfilled() {
        // The two most frequent tokens fill the window and are both
        // rejected by the filter; "ok" ranks outside and never enters.
        let mut generator = generator(
            VocabGeneratorOptions::new(2)
                .with_min_count(1)
                .with_filter(LengthFilter::new(4)),
        );
        generator.update_from_lines([
            "longest longest longest",
            "longer longer",
            "ok",
        ]);

        assert_eq!(generator.build(), vec!["<unk>"]);
    }

    #[test]
    fn test_consecutive_spaces_count_empty_tokens() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(1));
        generator.update_from_lines(["a  a"]);

        // "a  a" splits to ["a", "", "a"].
        assert_eq!(generator.counter.count("a"), 2);
        assert_eq!(generator.counter.count(""), 1);
    }

    #[test]
    fn test_reuse_accumulates() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(2));
        generator.update_from_lines(["hello"]);
        assert_eq!(generator.build(), vec!["<unk>"]);

        generator.update_from_lines(["hello"]);
        assert_eq!(generator.build(), vec!["<unk>", "hello"]);
    }

    #[test]
    fn test_in_memory_lines_strip_terminators() {
        let mut generator = generator(VocabGeneratorOptions::new(10).with_min_count(1));
        generator.update_from_lines(["hello\n", "world\r\n"]);

        assert_eq!(generator.counter.count("hello"), 1);
        assert_eq!(generator.counter.count("world"), 1);
    }
}
