//! Balance board accessory handler
//!
//! [`BalanceBoard`] is the per-accessory state owned by the transport that
//! talks to the parent motion controller. The transport feeds it raw report
//! buffers in arrival order:
//!
//! 1. the handshake block, once per connection ([`BalanceBoard::decode_handshake`])
//! 2. periodic sensor reports ([`BalanceBoard::decode_event`])
//! 3. a disconnect notification ([`BalanceBoard::reset`])
//!
//! Calibrated readings are read back through [`BalanceBoard::state`] and
//! connection changes through [`BalanceBoard::take_event`].
//!
//! All operations are synchronous, bounded and perform no I/O. A host that
//! shares a board between threads must serialize calls itself.
//!
//! # Example
//!
//! ```
//! use balance_board::{BalanceBoard, BoardConfig, BoardEvent};
//!
//! let mut board = BalanceBoard::with_config(BoardConfig::default());
//!
//! // Every corner calibrated at raw 0 / 17 / 34.
//! let mut handshake = vec![0u8; 4];
//! for point in [0u16, 17, 34] {
//!     for _ in 0..4 {
//!         handshake.extend_from_slice(&point.to_be_bytes());
//!     }
//! }
//! board.decode_handshake(&handshake)?;
//! assert_eq!(board.take_event(), Some(BoardEvent::AccessoryInserted));
//!
//! board.decode_event(&[0, 17, 0, 0, 0, 0, 0, 0])?;
//! assert_eq!(board.state().top_right.weight_kg, 14.0);
//! # Ok::<(), balance_board::BalanceBoardError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod board;
pub mod config;
pub mod dump;
pub mod event;

pub use board::BalanceBoard;
pub use config::{BoardConfig, DUMP_HANDSHAKE_ENV};
pub use event::BoardEvent;

pub use hid_balance_board_protocol::{
    BalanceBoardError, BalanceBoardResult, BoardState, CalibrationTable, CalibrationTriple,
    ConnectionState, Corner, CornerReading, Corners, ExpansionType,
};
