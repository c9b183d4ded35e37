//! # Line Splitting

/// Capability for turning one line of text into an ordered token sequence.
pub trait LineSplitter {
    /// Split a line into tokens.
    ///
    /// ## Arguments
    /// * `line` - the line to split; may be empty.
    ///
    /// ## Returns
    /// The tokens of the line, in order. Empty input yields an empty vec.
    fn split(
        &self,
        line: &str,
    ) -> Vec<String>;
}

impl<F> LineSplitter for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn split(
        &self,
        line: &str,
    ) -> Vec<String> {
        self(line)
    }
}

/// Splits on the single ASCII space character.
///
/// Empty substrings produced by consecutive delimiters are preserved;
/// replacing this with a trim-and-split changes frequency counts for
/// inputs with repeated spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceLineSplitter;

impl LineSplitter for SpaceLineSplitter {
    fn split(
        &self,
        line: &str,
    ) -> Vec<String> {
        if line.is_empty() {
            return Vec::new();
        }
        line.split(' ').map(str::to_string).collect()
    }
}
