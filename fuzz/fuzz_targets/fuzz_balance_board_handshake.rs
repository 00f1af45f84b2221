//! Fuzzes the balance board handshake (calibration block) decoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_balance_board_handshake
#![no_main]
use hid_balance_board_protocol::{decode_handshake, non_monotonic_corners};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes.
    if let Ok(table) = decode_handshake(data) {
        let _ = non_monotonic_corners(&table).count();
    }
});
