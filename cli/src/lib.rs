//! Command-line client for the presentation backend.
//!
//! `http` implements the backend seam over `reqwest`; `commands` drives the
//! shared editor workflow and formats results for the terminal.

pub mod commands;
pub mod http;
