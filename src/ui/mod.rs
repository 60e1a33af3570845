//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for user prompts and
//! output. Business logic (query builder, post-search actions, saved search
//! commands) only talks to the traits, so the dialoguer terminal backend can
//! be swapped for scripted input in tests.
//!
//! # Core Traits
//!
//! - **`UserInput`** - User prompts (text, confirmation, select, multi-select)
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Business Logic Layer               │
//! │   (query builder, commands)             │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (UserInput, OutputWriter)              │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Terminal      │  │ In-memory         │
//! │ - Dialoguer   │  │ - BufferedWriter  │
//! │ - Stdout      │  │ - ScriptedInput   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use stacwiz::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Operation completed!");
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

pub mod input;
pub mod output;

#[cfg(test)]
pub mod mock;

pub use input::{DialoguerInput, InputError, TextValidator, UserInput};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
