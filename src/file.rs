use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::diagnostic::{DIAGNOSTIC_TAIL_CHARS, tail};
use crate::pattern::PairLocation;
use crate::swap::swap_pairs;

/// Content of a file read into memory
#[derive(Debug, Clone)]
struct FileContent {
    /// File content as valid UTF-8 string
    content: String,
    /// BLAKE3 hash of the content (hex-encoded)
    checksum: String,
}

/// Error types for file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in file: {0}")]
    InvalidUtf8(String),
}

impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound(path.display().to_string())
        } else {
            FileError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    }
}

/// Hex-encoded BLAKE3 hash of `content`
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Read the rest of `file` and validate it as UTF-8
fn read_content(file: &mut File, path: &Path) -> Result<FileContent, FileError> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| FileError::io(path, e))?;

    let content = String::from_utf8(bytes)
        .map_err(|_| FileError::InvalidUtf8(path.display().to_string()))?;

    Ok(FileContent {
        checksum: checksum(&content),
        content,
    })
}

/// Summary of one in-place rewrite
#[derive(Debug, Clone)]
pub struct RewriteReport {
    pub path: PathBuf,
    /// Pairs located in the original content, in document order
    pub pairs: Vec<PairLocation>,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub checksum_before: String,
    pub checksum_after: String,
    /// Last characters of the document before the rewrite
    pub tail_before: String,
    /// Last characters of the document after the rewrite
    pub tail_after: String,
}

impl RewriteReport {
    pub fn pairs_swapped(&self) -> usize {
        self.pairs.len()
    }

    pub fn changed(&self) -> bool {
        self.checksum_before != self.checksum_after
    }
}

/// Swap every coordinate pair in the file at `path`, overwriting it.
///
/// The file is opened once for reading and writing. After the whole content
/// is read and transformed, the same handle seeks to the start, writes the new
/// text and truncates to its length. There is no backup: a failure between the
/// write and the truncate can leave the file partially rewritten.
///
/// Content that is not valid UTF-8 is rejected before anything is written.
pub fn rewrite_in_place<P: AsRef<Path>>(path: P) -> Result<RewriteReport, FileError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| FileError::io(path, e))?;

    let before = read_content(&mut file, path)?;
    debug!(path = %path.display(), bytes = before.content.len(), "read document");

    let outcome = swap_pairs(&before.content);

    file.seek(SeekFrom::Start(0)).map_err(|e| FileError::io(path, e))?;
    file.write_all(outcome.text.as_bytes()).map_err(|e| FileError::io(path, e))?;
    file.set_len(outcome.text.len() as u64).map_err(|e| FileError::io(path, e))?;
    file.flush().map_err(|e| FileError::io(path, e))?;

    let report = RewriteReport {
        path: path.to_path_buf(),
        pairs: outcome.pairs.iter().map(|pair| pair.locate(&before.content)).collect(),
        bytes_before: before.content.len(),
        bytes_after: outcome.text.len(),
        checksum_before: before.checksum,
        checksum_after: checksum(&outcome.text),
        tail_before: tail(&before.content, DIAGNOSTIC_TAIL_CHARS).to_string(),
        tail_after: tail(&outcome.text, DIAGNOSTIC_TAIL_CHARS).to_string(),
    };

    info!(
        path = %path.display(),
        pairs = report.pairs_swapped(),
        bytes_before = report.bytes_before,
        bytes_after = report.bytes_after,
        "rewrote file"
    );

    Ok(report)
}
