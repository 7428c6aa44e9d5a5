//! nxs - interactive scaffolding for Next.js projects.
//!
//! This library exposes the core of the `nxs` CLI for use in tests and
//! other tools.
//!
//! # Modules
//!
//! - `color`: hex parsing and light/dark tints
//! - `theme`: six-slot palette and the `globals.css` template
//! - `project`: package.json validation and path detection
//! - `workspace`, `runner`, `prompt`: filesystem, process and prompt
//!   capabilities, each with an in-crate mock
//! - `workflow`: the step driver and its `RunReport`
//! - `output`: human and robot rendering
//! - `config`: optional TOML configuration
#![forbid(unsafe_code)]

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod project;
pub mod prompt;
pub mod runner;
pub mod theme;
pub mod workflow;
pub mod workspace;
