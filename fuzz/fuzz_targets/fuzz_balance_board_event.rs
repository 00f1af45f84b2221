//! Fuzzes sensor event decoding against an arbitrary calibration table.
//!
//! The first 28 bytes are the handshake block, the rest is the event report.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_balance_board_event
#![no_main]
use hid_balance_board_protocol::{HANDSHAKE_REPORT_LEN, decode_event_report, decode_handshake};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((handshake, event)) = data.split_at_checked(HANDSHAKE_REPORT_LEN) else {
        return;
    };
    let Ok(table) = decode_handshake(handshake) else {
        return;
    };
    if let Ok(state) = decode_event_report(event, &table) {
        // Zero-width segments are rejected, so every accepted weight is finite.
        assert!(state.iter().all(|(_, r)| r.weight_kg.is_finite()));
    }
});
