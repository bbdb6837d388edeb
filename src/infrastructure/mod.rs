//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; everything that turns
//! configuration strings into sandbox paths lives here.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
