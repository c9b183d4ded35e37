//! # Corpus Line Reading
//!
//! Callback-driven line reading over corpus files. Every line read is
//! fanned out to each registered [`LineCallback`]; plain `FnMut(&str)`
//! closures participate through the blanket impl.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Capability invoked for every line read from a corpus.
pub trait LineCallback {
    /// Receive one line, trailing terminator stripped.
    fn on_line(
        &mut self,
        line: &str,
    );
}

impl<F> LineCallback for F
where
    F: FnMut(&str),
{
    fn on_line(
        &mut self,
        line: &str,
    ) {
        self(line)
    }
}

/// Reads corpus files line by line, fanning each line out to callbacks.
#[derive(Default)]
pub struct FileLineReader {
    callbacks: Vec<Box<dyn LineCallback>>,
}

impl FileLineReader {
    /// Create a reader with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    ///
    /// ## Returns
    /// The updated `FileLineReader` instance.
    pub fn with_callback(
        mut self,
        callback: impl LineCallback + 'static,
    ) -> Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    fn read_lines(
        &mut self,
        path: &Path,
    ) -> std::io::Result<()> {
        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            for callback in &mut self.callbacks {
                callback.on_line(&line);
            }
        }
        Ok(())
    }

    /// Read one corpus file.
    ///
    /// A file that cannot be resolved or read is skipped with a logged
    /// notice.
    ///
    /// ## Returns
    /// Whether the file was read.
    pub fn read_path(
        &mut self,
        path: impl AsRef<Path>,
    ) -> bool {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("file does not exist, skipping: {}", path.display());
            return false;
        }
        if let Err(err) = self.read_lines(path) {
            log::warn!("failed to read {}: {err}", path.display());
            return false;
        }
        true
    }

    /// Read corpus files in order.
    ///
    /// ## Returns
    /// The number of files actually read.
    pub fn read_paths<I, P>(
        &mut self,
        paths: I,
    ) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .filter(|path| self.read_path(path))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs, rc::Rc};

    use super::*;

    #[test]
    fn test_read_paths_fans_out_and_skips_missing() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = dir.path().join("corpus.txt");
        fs::write(&path, "hello world\nsecond line\n").unwrap();

        let lines: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = lines.clone();

        let mut reader = FileLineReader::new()
            .with_callback(move |line: &str| sink.borrow_mut().push(line.to_string()));

        let read = reader.read_paths([path, dir.path().join("missing.txt")]);

        assert_eq!(read, 1);
        assert_eq!(*lines.borrow(), vec!["hello world", "second line"]);
    }

    struct CountingCallback {
        lines: Rc<RefCell<usize>>,
    }

    impl LineCallback for CountingCallback {
        fn on_line(
            &mut self,
            _line: &str,
        ) {
            *self.lines.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_trait_callback() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let path = dir.path().join("corpus.txt");
        fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let lines: Rc<RefCell<usize>> = Rc::default();
        let mut reader = FileLineReader::new().with_callback(CountingCallback {
            lines: lines.clone(),
        });

        assert!(reader.read_path(&path));
        assert_eq!(*lines.borrow(), 3);
    }
}
