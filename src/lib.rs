/// Handles argument parsing and run orchestration.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants used throughout the application.
pub mod constants;

/// Extension traits for built-in types.
pub mod ext;

/// Candidate file matching by suffix.
pub mod filter;

/// Header computation and per-file enforcement.
pub mod header;

/// A set of helpers for working with the file system.
pub mod ioutils;
