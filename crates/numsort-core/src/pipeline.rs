use std::{
    cmp::Ordering,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Result;
use numsort_utility::{
    numeric_cmp::numeric_cmp,
    sort::{NumericSort, dedup_numeric},
};

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOptions {
    pub reverse: bool,
    pub unique: bool,
    pub parallel: bool,
    pub parallel_threshold: usize,
}

impl SortOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            reverse: config.reverse,
            unique: config.unique,
            parallel: config.parallel,
            parallel_threshold: config.parallel_threshold,
        }
    }

    fn use_parallel(&self, len: usize) -> bool {
        self.parallel || len >= self.parallel_threshold
    }

    /// Sorts `lines`, then drops repeated lines if `unique` is set, then
    /// reverses if `reverse` is set.
    pub fn sort(&self, lines: &mut Vec<String>) {
        profiling::scope!("sort lines");
        let start = Instant::now();

        if self.use_parallel(lines.len()) {
            lines.par_numeric_sort();
        } else {
            lines.numeric_sort();
        }

        if self.unique {
            let before = lines.len();
            dedup_numeric(lines);
            tracing::debug!("Removed {} duplicate lines", before - lines.len());
        }

        if self.reverse {
            lines.reverse();
        }

        tracing::debug!("Sorted {} lines in {:?}", lines.len(), start.elapsed());
    }

    /// Index of the first line that breaks the order `sort` would produce.
    /// With `unique` set a repeated line counts as out of order.
    pub fn find_disorder<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        let expected = if self.reverse {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        lines
            .windows(2)
            .position(|pair| {
                let ordering = numeric_cmp(pair[0].as_ref(), pair[1].as_ref());
                ordering != expected && (self.unique || ordering.is_ne())
            })
            .map(|i| i + 1)
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

pub fn read_lines_from(reader: impl BufRead, lines: &mut Vec<String>) -> Result<()> {
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(())
}

/// Reads the lines of every input in order, stdin when `paths` is empty or
/// for a path of `-`.
pub fn read_lines(paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if paths.is_empty() {
        read_lines_from(io::stdin().lock(), &mut lines)?;
        tracing::info!("Read {} lines from stdin", lines.len());
        return Ok(lines);
    }

    for path in paths {
        let before = lines.len();
        if is_stdin(path) {
            read_lines_from(io::stdin().lock(), &mut lines)?;
        } else {
            let file = File::open(path).map_err(|err| {
                anyhow::Error::msg(format!("Unable to open `{}`: {err}", path.display()))
            })?;
            read_lines_from(BufReader::new(file), &mut lines)?;
        }
        tracing::info!("Read {} lines from {path:?}", lines.len() - before);
    }

    Ok(lines)
}

pub fn write_lines<S: AsRef<str>>(writer: impl Write, lines: &[S]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    fn options() -> SortOptions {
        SortOptions::from_config(&Config::default())
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sort_plain() {
        let mut items = lines(&["v123", "v9", "v2"]);
        options().sort(&mut items);
        assert_eq!(items, ["v2", "v9", "v123"]);
    }

    #[test]
    fn sort_unique_reverse() {
        let mut items = lines(&["a2", "a10", "a2", "a02", "a10"]);
        let options = SortOptions {
            unique: true,
            reverse: true,
            ..options()
        };
        options.sort(&mut items);
        assert_eq!(items, ["a10", "a02", "a2"]);
    }

    #[test]
    fn sort_parallel_threshold() {
        let options = SortOptions {
            parallel_threshold: 3,
            ..options()
        };
        assert!(!options.use_parallel(2));
        assert!(options.use_parallel(3));

        let mut items = lines(&["2021.1.1", "2020.8.8", "2021.1.0"]);
        options.sort(&mut items);
        assert_eq!(items, ["2020.8.8", "2021.1.0", "2021.1.1"]);
    }

    #[test]
    fn disorder() {
        let forward = options();
        assert_eq!(forward.find_disorder(&["a1", "a2", "a10"]), None);
        assert_eq!(forward.find_disorder(&["a1", "a1", "a10"]), None);
        assert_eq!(forward.find_disorder(&["a1", "a10", "a2"]), Some(2));

        let reverse = SortOptions {
            reverse: true,
            ..options()
        };
        assert_eq!(reverse.find_disorder(&["a10", "a2", "a1"]), None);
        assert_eq!(reverse.find_disorder(&["a10", "a10", "a1"]), None);
        assert_eq!(reverse.find_disorder(&["a10", "a1", "a2"]), Some(2));
    }

    #[test]
    fn disorder_with_unique_reports_repeats() {
        let unique = SortOptions {
            unique: true,
            ..options()
        };
        assert_eq!(unique.find_disorder(&["a1", "a2", "a10"]), None);
        assert_eq!(unique.find_disorder(&["a1", "a2", "a2", "a10"]), Some(2));
        assert_eq!(unique.find_disorder(&["a1", "a01", "a10"]), None);

        let unique_reverse = SortOptions {
            reverse: true,
            ..unique
        };
        assert_eq!(unique_reverse.find_disorder(&["b", "a", "a"]), Some(2));
    }

    #[test]
    fn read_strips_line_endings() {
        let mut items = Vec::new();
        read_lines_from("b10\r\na9\n\nlast".as_bytes(), &mut items).unwrap();
        assert_eq!(items, ["b10", "a9", "", "last"]);
    }

    #[test]
    fn read_and_write_files() {
        let dir = TempDir::new("numsort-pipeline").unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "file10\nfile2\n").unwrap();
        fs::write(&second, "file1\r\n").unwrap();

        let mut items = read_lines(&[first, second]).unwrap();
        assert_eq!(items, ["file10", "file2", "file1"]);

        options().sort(&mut items);
        let mut out = Vec::new();
        write_lines(&mut out, &items).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "file1\nfile2\nfile10\n");
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new("numsort-pipeline").unwrap();
        let err = read_lines(&[dir.path().join("missing.txt")]).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
