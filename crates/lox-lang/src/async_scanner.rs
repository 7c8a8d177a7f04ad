// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Asynchronous and parallel scanning APIs.
//!
//! A scan is CPU-bound and runs to completion in one call. This module only
//! moves the surrounding work off the caller: tokio for reading sources and
//! rayon for scanning many sources at once. Every source still gets its own
//! [`Scanner`](crate::lexer::Scanner) and its own diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use lox_lang::AsyncScanner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scanner = AsyncScanner::new();
//!     let output = scanner.scan_file("script.lox").await.unwrap();
//!     for token in &output.tokens {
//!         println!("{token}");
//!     }
//! }
//! ```

#[cfg(feature = "async")]
use std::path::Path;

#[cfg(feature = "async")]
use tokio::fs;

#[cfg(feature = "async")]
use crate::Error;
use crate::{Lox, Result, ScanOutput};

/// An asynchronous file scanner.
///
/// Sources are read with tokio's non-blocking file I/O and then scanned on
/// the calling task.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncScanner {
    lox: Lox,
}

#[cfg(feature = "async")]
impl AsyncScanner {
    /// Creates a new async scanner.
    pub fn new() -> Self {
        Self { lox: Lox::new() }
    }

    /// Reads and scans a file.
    pub async fn scan_file(&self, path: impl AsRef<Path>) -> Result<ScanOutput> {
        let path = path.as_ref();

        let source = fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "scanning file");
        Ok(self.lox.scan(&source))
    }

    /// Reads and scans several files concurrently.
    ///
    /// Results are returned in the same order as `paths`.
    pub async fn scan_files(&self, paths: &[impl AsRef<Path>]) -> Vec<Result<ScanOutput>> {
        let futures: Vec<_> = paths.iter().map(|p| self.scan_file(p)).collect();

        futures::future::join_all(futures).await
    }
}

/// A scanner that spreads many sources over a thread pool.
#[cfg(feature = "parallel")]
pub struct ParallelScanner {
    /// Thread pool for CPU-bound work
    pool: rayon::ThreadPool,
    lox: Lox,
}

#[cfg(feature = "parallel")]
impl ParallelScanner {
    /// Creates a new parallel scanner with the default number of threads.
    pub fn new() -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new().build()?;
        Ok(Self {
            pool,
            lox: Lox::new(),
        })
    }

    /// Creates a parallel scanner with a specific number of threads.
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;
        Ok(Self {
            pool,
            lox: Lox::new(),
        })
    }

    /// Number of threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Scans multiple sources in parallel.
    ///
    /// Returns one output per source, in input order.
    pub fn scan_parallel(&self, sources: &[&str]) -> Vec<ScanOutput> {
        use rayon::prelude::*;

        let lox = self.lox;
        self.pool
            .install(|| sources.par_iter().map(|source| lox.scan(source)).collect())
    }
}

#[cfg(feature = "parallel")]
impl std::fmt::Debug for ParallelScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelScanner")
            .field("threads", &self.threads())
            .finish()
    }
}


#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use super::*;
    use crate::TokenKind;

    #[test]
    fn test_scan_parallel_preserves_order() {
        let scanner = ParallelScanner::with_threads(2).unwrap();
        let sources = ["and", "or", "\"open", "1.5"];

        let outputs = scanner.scan_parallel(&sources);
        let first_kinds: Vec<TokenKind> = outputs.iter().map(|o| o.tokens[0].kind).collect();
        assert_eq!(
            first_kinds,
            vec![
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Eof,
                TokenKind::Number,
            ]
        );
        assert!(outputs[2].had_error());
        assert!(!outputs[3].had_error());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scanner = ParallelScanner::new().unwrap();
        let sources = ["var a = 1;\nprint a;", "// only a comment", "class A {}"];

        let parallel = scanner.scan_parallel(&sources);
        let sequential: Vec<ScanOutput> = sources.iter().map(|s| Lox::new().scan(s)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_thread_count() {
        let scanner = ParallelScanner::with_threads(3).unwrap();
        assert_eq!(scanner.threads(), 3);
    }
}
