//! CLI argument model for the sticky comment binary.
//!
//! Action inputs arrive as `INPUT_*` environment variables (or flags) and the
//! runner context as `GITHUB_*` variables; both are mapped onto
//! `CommentInputs` here.

pub mod cli_args;

pub use cli_args::Cli;
