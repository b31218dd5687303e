//! Error types
//!
//! Every condition here is fatal to a run. Duplicates are not errors and
//! never surface through this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DedupError {
    /// Malformed interval or interval list, raised before any variant I/O.
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("cannot open input {path}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open output {path}")]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Record `record` (1-based) could not be read. Output written so far is kept.
    #[error("failed to read variant record {record}")]
    StreamCorruption {
        record: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to write variant record")]
    SinkWrite(#[source] io::Error),
}

impl DedupError {
    #[inline]
    pub fn argument<S: Into<String>>(msg: S) -> Self {
        DedupError::Argument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_corruption_message() {
        let err = DedupError::StreamCorruption {
            record: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad POS"),
        };
        assert_eq!(err.to_string(), "failed to read variant record 7");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_argument_message() {
        let err = DedupError::argument("empty interval");
        assert_eq!(err.to_string(), "invalid argument: empty interval");
    }
}
