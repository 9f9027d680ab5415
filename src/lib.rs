//! Payload - collect a project's source files into one text file
//!
//! Payload walks a directory tree, keeps files whose extension is accepted,
//! whose path avoids excluded substrings (`node_modules` by default) and
//! whose size is under a threshold, and concatenates them into a single
//! payload with a `--- FILE: <path> ---` header before each file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `collector`: Directory walk, filters, decoding and payload assembly
//! - `config`: Configuration file loading and parsing

pub mod cli;
pub mod collector;
pub mod config;
