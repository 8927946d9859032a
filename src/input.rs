use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use log::trace;

use crate::error::{FuelError, Result};
use crate::fuel::Mass;

/// Masses read one per line from a buffered source.
///
/// Surrounding whitespace is ignored. A line that isn't an integer, blank
/// lines included, comes out as a parse error naming its line number.
pub struct Masses<R> {
    path: PathBuf,
    lines: Lines<R>,
    line: usize,
}

impl Masses<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FuelError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Masses::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> Masses<R> {
    pub fn new<P: Into<PathBuf>>(path: P, reader: R) -> Self {
        Masses {
            path: path.into(),
            lines: reader.lines(),
            line: 0,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Masses<R> {
    type Item = Result<Mass>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line += 1;

        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(FuelError::Read {
                    path: self.path.clone(),
                    source,
                }))
            }
        };

        let content = line.trim();
        let parsed = content.parse::<Mass>().map_err(|source| FuelError::Parse {
            line: self.line,
            content: content.to_string(),
            source,
        });
        if let Ok(mass) = parsed {
            trace!("line {}: mass {}", self.line, mass);
        }

        Some(parsed)
    }
}
