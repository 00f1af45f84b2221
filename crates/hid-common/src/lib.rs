//! Common HID report utilities for the balance board crates
//!
//! Reports arrive as plain byte slices. Multi-byte fields are decoded by
//! composing individual bytes, so results never depend on the host's
//! alignment or native byte order.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod report_parser;

pub use report_parser::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HidCommonError {
    #[error("Unexpected end of report at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
