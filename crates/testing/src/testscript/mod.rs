// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Data-driven tests. A script is a sequence of blocks, each block one or
//! more commands, a `---` line and the output the commands produce:
//!
//! ```text
//! # women only
//! evaluate sex == 'F'
//! ---
//! p1: F
//! p3: F
//! ```
//!
//! Blocks are separated by blank lines, `#` starts a comment.

mod command;
mod parser;
mod runner;

pub use command::{Argument, Block, Command};
pub use parser::ParseError;
pub use runner::{Runner, generate, run, run_path};
