//! Core types for the PR assistant
//!
//! This crate provides the foundational types shared by every other crate:
//! - Tool kinds and their option catalogs
//! - Form values and tool requests
//! - The finished prompt type
//! - Error kinds

pub mod error;
pub mod request;
pub mod tool;

pub use error::{Error, ErrorKind, MissingFieldError, Result};
pub use request::{FormValues, Prompt, ToolRequest};
pub use tool::{slots, OptionSlot, PitchFormat, ToolKind, UnknownToolKind};
