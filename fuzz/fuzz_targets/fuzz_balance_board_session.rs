//! Fuzzes a full handler session: handshakes, events and resets in any order.
//!
//! Each chunk starts with an opcode byte: 0 = handshake, 1 = event, 2 = reset.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_balance_board_session
#![no_main]
use balance_board::{BalanceBoard, BoardConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut board = BalanceBoard::with_config(BoardConfig::default());
    for chunk in data.chunks(29) {
        let Some((op, payload)) = chunk.split_first() else {
            continue;
        };
        match op % 3 {
            0 => {
                let _ = board.decode_handshake(payload);
            }
            1 => {
                let _ = board.decode_event(payload);
            }
            _ => board.reset(),
        }
        let _ = board.take_event();
    }
});
