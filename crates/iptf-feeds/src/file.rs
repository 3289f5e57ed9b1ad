//! Static file feed. Read once from start to EOF.

use crate::FeedError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn open(path: &Path) -> Result<BufReader<File>, FeedError> {
    let file = File::open(path).map_err(|source| FeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
