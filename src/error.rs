use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuelError {
    #[error("unable to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {content:?} is not a mass")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("total fuel for {} overflows", path.display())]
    Overflow { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, FuelError>;
