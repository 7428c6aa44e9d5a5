//! End-to-end tests that run the compiled `nxs` binary.

#[path = "../common/mod.rs"]
mod common;

mod commands;
mod robot_mode;
