//! # Corpus File Utilities
//!
//! Sequential merge and split operations over line-oriented text files.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::errors::{VgResult, VocabgenError};

/// Concatenate input files into one output file, in order.
///
/// The output's parent directory is created when absent. Inputs that do
/// not exist are skipped with a logged notice; output failures are fatal.
///
/// ## Arguments
/// * `inputs` - the input file paths.
/// * `output` - the output file path.
pub fn merge_files<I, P>(
    inputs: I,
    output: impl AsRef<Path>,
) -> VgResult<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let output = output.as_ref();
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(output)?);
    for input in inputs {
        let input = input.as_ref();
        if !input.exists() {
            log::warn!("input does not exist, skipping: {}", input.display());
            continue;
        }
        let mut reader = BufReader::new(File::open(input)?);
        io::copy(&mut reader, &mut writer)?;
        log::info!("merged {} into {}", input.display(), output.display());
    }
    writer.flush()?;
    Ok(())
}

fn count_lines(path: &Path) -> io::Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    let mut total = 0;
    for line in reader.lines() {
        line?;
        total += 1;
    }
    Ok(total)
}

/// Split a file into `num_parts` roughly even parts.
///
/// Parts are written as `<name>.part<i>` under `output_dir`, which is
/// created when absent. Each part holds `ceil(total / num_parts)` lines;
/// no empty trailing parts are created. Lines are rewritten
/// `\n`-terminated, so merge of the parts reproduces a
/// terminator-normal input byte for byte.
///
/// ## Arguments
/// * `input` - the file to split.
/// * `num_parts` - the number of parts to split into; must be positive.
/// * `output_dir` - the directory for the part files.
///
/// ## Returns
/// The paths of the part files written, in order.
pub fn split_file(
    input: impl AsRef<Path>,
    num_parts: usize,
    output_dir: impl AsRef<Path>,
) -> VgResult<Vec<PathBuf>> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    if num_parts == 0 {
        return Err(VocabgenError::ZeroParts);
    }

    let total = count_lines(input)?;
    let lines_per_part = total.div_ceil(num_parts).max(1);

    let name = input
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "input has no file name"))?
        .to_string_lossy()
        .into_owned();

    fs::create_dir_all(output_dir)?;

    let reader = BufReader::new(File::open(input)?);
    let mut lines = reader.lines().peekable();

    let mut parts = Vec::new();
    while lines.peek().is_some() {
        let path = output_dir.join(format!("{name}.part{idx}", idx = parts.len()));
        let mut writer = BufWriter::new(File::create(&path)?);
        for _ in 0..lines_per_part {
            match lines.next() {
                Some(line) => {
                    writer.write_all(line?.as_bytes())?;
                    writer.write_all(b"\n")?;
                }
                None => break,
            }
        }
        writer.flush()?;
        log::info!("wrote part: {}", path.display());
        parts.push(path);
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_creates_parent_and_skips_missing() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "one\ntwo\n").unwrap();
        fs::write(&b, "three\n").unwrap();

        let output = dir.path().join("merged/all.txt");
        merge_files([&a, &dir.path().join("missing.txt"), &b], &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_split_even() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let input = dir.path().join("corpus.txt");
        fs::write(&input, "1\n2\n3\n4\n").unwrap();

        let parts = split_file(&input, 2, dir.path().join("parts")).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(fs::read_to_string(&parts[0]).unwrap(), "1\n2\n");
        assert_eq!(fs::read_to_string(&parts[1]).unwrap(), "3\n4\n");
    }

    #[test]
    fn test_split_uneven_last_part_is_short() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let input = dir.path().join("corpus.txt");
        fs::write(&input, "1\n2\n3\n4\n5\n").unwrap();

        let parts = split_file(&input, 2, dir.path().join("parts")).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(fs::read_to_string(&parts[0]).unwrap(), "1\n2\n3\n");
        assert_eq!(fs::read_to_string(&parts[1]).unwrap(), "4\n5\n");
    }

    #[test]
    fn test_split_more_parts_than_lines() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let input = dir.path().join("corpus.txt");
        fs::write(&input, "1\n2\n").unwrap();

        let parts = split_file(&input, 5, dir.path().join("parts")).unwrap();

        // One line per part; no empty trailing parts.
        assert_eq!(parts.len(), 2);
    }

    #[test]
    fn test_split_zero_parts_is_rejected() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let input = dir.path().join("corpus.txt");
        fs::write(&input, "1\n").unwrap();

        assert!(matches!(
            split_file(&input, 0, dir.path()),
            Err(VocabgenError::ZeroParts)
        ));
    }

    #[test]
    fn test_split_then_merge_roundtrip() {
        let dir = tempdir::TempDir::new("fileops_test").unwrap();
        let input = dir.path().join("corpus.txt");
        let content = "alpha\nbeta\ngamma\ndelta\nepsilon\n";
        fs::write(&input, content).unwrap();

        let parts = split_file(&input, 3, dir.path().join("parts")).unwrap();
        let merged = dir.path().join("merged.txt");
        merge_files(&parts, &merged).unwrap();

        assert_eq!(fs::read_to_string(&merged).unwrap(), content);
    }
}
