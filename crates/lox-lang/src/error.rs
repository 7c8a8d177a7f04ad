// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the Lox front end.
//!
//! Scanning itself never fails; these cover the work around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Lox front end operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or scheduling sources
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The scanning thread pool could not be started
    #[cfg(feature = "parallel")]
    #[error("Failed to create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let err = Error::io(
            "missing.lox",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to read missing.lox: no such file");
    }

    #[test]
    fn test_io_source_is_kept() {
        let err = Error::io(
            "x.lox",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }
}
