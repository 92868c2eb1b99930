//! Input file reading.
//!
//! One host token per line. Every line counts, blank ones included, so the
//! number of tokens always equals the number of lines in the file.

use std::io;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Split};

/// Yields host tokens from a line-delimited source.
pub struct HostTokenReader<R> {
    segments: Split<BufReader<R>>,
}

impl HostTokenReader<File> {
    /// Opens the input file.
    ///
    /// Only regular files are accepted. A directory opens fine on some
    /// platforms but fails on the first read, after the output already exists.
    pub async fn open(path: &Path) -> io::Result<Self> {
        if !tokio::fs::metadata(path).await?.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", path.display()),
            ));
        }
        let file = File::open(path).await?;
        Ok(Self::new(file))
    }
}

impl<R: AsyncRead + Unpin> HostTokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            segments: BufReader::new(reader).split(b'\n'),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub async fn next_token(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .segments
            .next_segment()
            .await?
            .map(|segment| host_token(&segment)))
    }
}

/// Turns one raw line (without its `\n`) into a host token.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn host_token(line: &[u8]) -> String {
    String::from_utf8_lossy(line).trim().to_string()
}
