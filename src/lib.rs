//! Deadstyle - unused StyleSheet style checker for React Native
//!
//! Deadstyle is a CLI tool and library for finding style declarations in
//! React Native projects that are created through `StyleSheet.create({...})`
//! but never referenced, and for removing them safely from the source.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `engine`: Core analysis engine (parse, extract, diff, rewrite)
//! - `issues`: Issue type definitions and reporting contracts

pub mod cli;
pub mod config;
pub mod engine;
pub mod issues;
