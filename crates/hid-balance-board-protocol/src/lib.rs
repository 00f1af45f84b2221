//! HID protocol implementation for the balance board accessory
//!
//! The balance board plugs into the expansion port of a motion controller and
//! reports four load cells, one under each corner of the board. This crate
//! decodes the two report kinds the accessory produces:
//! - the one-time handshake block carrying factory calibration constants
//! - the periodic sensor report carrying raw per-corner readings
//!
//! and converts raw readings into kilograms by piecewise-linear interpolation
//! against the calibration constants.
//!
//! Everything here is pure and allocation-free. Connection lifecycle lives in
//! the `balance-board` crate.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod handshake;
pub mod ids;
pub mod input;
pub mod interpolate;
pub mod types;

pub use handshake::*;
pub use ids::*;
pub use input::*;
pub use interpolate::*;
pub use types::*;

use balance_board_hid_common::HidCommonError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceBoardError {
    #[error("Insufficient report data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Balance board not connected: no calibration available")]
    NotConnected,

    #[error("Invalid calibration {points:?}: zero-width interpolation segment")]
    InvalidCalibration { points: [u16; 3] },
}

pub type BalanceBoardResult<T> = Result<T, BalanceBoardError>;

impl From<HidCommonError> for BalanceBoardError {
    fn from(e: HidCommonError) -> Self {
        match e {
            HidCommonError::UnexpectedEnd {
                offset,
                needed,
                available,
            } => BalanceBoardError::InsufficientData {
                expected: offset.saturating_add(needed),
                actual: offset.saturating_add(available),
            },
        }
    }
}
