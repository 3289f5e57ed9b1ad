//! iptf-feeds: line sources for iptf.
//!
//! Each feed yields a blocking [`BufRead`]. A closed file ends at EOF; stdin
//! fed by `tail -f` never ends, and the pipeline simply waits on it.

pub mod file;
pub mod stdin;

use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feed {
    Stdin,
    File(PathBuf),
}

impl Feed {
    /// Map an optional CLI path to a feed. `None` and `-` both mean stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            None => Feed::Stdin,
            Some(p) if p.as_os_str() == "-" => Feed::Stdin,
            Some(p) => Feed::File(p.to_path_buf()),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, FeedError> {
        tracing::debug!(feed = %self, "opening feed");
        match self {
            Feed::Stdin => Ok(Box::new(stdin::open())),
            Feed::File(path) => Ok(Box::new(file::open(path)?)),
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feed::Stdin => write!(f, "stdin"),
            Feed::File(path) => write!(f, "{}", path.display()),
        }
    }
}
