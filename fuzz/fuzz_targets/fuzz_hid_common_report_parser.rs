//! Fuzzes the shared report cursor with arbitrary reads.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_hid_common_report_parser
#![no_main]
use balance_board_hid_common::ReportParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut parser = ReportParser::new(data);
    // Alternate single-byte and word reads until the buffer is exhausted.
    while parser.remaining() > 0 {
        let _ = parser.read_u16_be();
        let _ = parser.read_u8();
    }
    let mut parser = ReportParser::new(data);
    while parser.read_u16_le().is_ok() {}
    let _ = parser.require(1);
});
