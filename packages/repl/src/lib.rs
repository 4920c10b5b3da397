//! # shelf-repl
//!
//! An interactive command-line client for a shelf file store.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to the default server (http://localhost:9000)
//! shelf
//!
//! # Or point it somewhere else
//! shelf --server http://10.0.0.2:9000
//!
//! # Inside the prompt:
//! > ls
//! > open projects
//! > mkdir reports
//! > put ./notes.txt
//! > cd ..
//! ```

pub mod commands;
pub mod completer;
pub mod repl;

pub use repl::{run, ReplError, DEFAULT_SERVER};
