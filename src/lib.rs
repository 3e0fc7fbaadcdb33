// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - option_if_let_else: if-let is often clearer
// - manual_let_else: if-let with early return is often clearer in context
#![allow(
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::manual_let_else
)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod parse;
pub mod patch;
pub mod sync;
