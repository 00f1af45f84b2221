//! Handshake (calibration block) decoding
//!
//! The handshake block is a sequence of big-endian 16-bit words:
//!
//! | words   | contents                         |
//! |---------|----------------------------------|
//! | 0..=1   | unused                           |
//! | 2..=5   | raw readings at 0 kg             |
//! | 6..=9   | raw readings at 17 kg            |
//! | 10..=13 | raw readings at 34 kg            |
//!
//! Within each group of four the corner order is top-right, bottom-right,
//! top-left, bottom-left.

use balance_board_hid_common::ReportParser;

use super::input::read_corner_words;
use super::{
    BalanceBoardError, BalanceBoardResult, CALIBRATION_FIRST_WORD, CalibrationTable,
    CalibrationTriple, Corner, HANDSHAKE_REPORT_LEN,
};

/// Decodes the calibration table from a handshake block.
///
/// Only the length is validated. Calibration triples that are not
/// non-decreasing still decode; callers can check
/// [`CalibrationTriple::is_monotonic`] or [`non_monotonic_corners`].
///
/// # Errors
///
/// [`BalanceBoardError::InsufficientData`] when `buffer` is shorter than
/// [`HANDSHAKE_REPORT_LEN`].
pub fn decode_handshake(buffer: &[u8]) -> BalanceBoardResult<CalibrationTable> {
    if buffer.len() < HANDSHAKE_REPORT_LEN {
        return Err(BalanceBoardError::InsufficientData {
            expected: HANDSHAKE_REPORT_LEN,
            actual: buffer.len(),
        });
    }

    let mut parser = ReportParser::new(buffer);
    parser.skip(CALIBRATION_FIRST_WORD * 2);

    let at_0kg = read_corner_words(&mut parser)?;
    let at_17kg = read_corner_words(&mut parser)?;
    let at_34kg = read_corner_words(&mut parser)?;

    Ok(at_0kg
        .zip(at_17kg)
        .zip(at_34kg)
        .map(|_, ((zero, mid), full)| CalibrationTriple::new(zero, mid, full)))
}

/// Corners whose calibration triple is not non-decreasing.
pub fn non_monotonic_corners(table: &CalibrationTable) -> impl Iterator<Item = Corner> + '_ {
    table
        .iter()
        .filter(|(_, triple)| !triple.is_monotonic())
        .map(|(corner, _)| corner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use balance_board_hid_common::ReportBuilder;

    fn make_handshake(words: &[u16]) -> Vec<u8> {
        let mut builder = ReportBuilder::with_capacity(words.len() * 2);
        for word in words {
            builder.write_u16_be(*word);
        }
        builder.into_inner()
    }

    #[test]
    fn test_decode_word_mapping() -> Result<(), BalanceBoardError> {
        let words: Vec<u16> = (0u16..14).map(|k| k * 100).collect();
        let table = decode_handshake(&make_handshake(&words))?;

        assert_eq!(table.top_right, CalibrationTriple::new(200, 600, 1000));
        assert_eq!(table.bottom_right, CalibrationTriple::new(300, 700, 1100));
        assert_eq!(table.top_left, CalibrationTriple::new(400, 800, 1200));
        assert_eq!(table.bottom_left, CalibrationTriple::new(500, 900, 1300));
        Ok(())
    }

    #[test]
    fn test_decode_is_big_endian() -> Result<(), BalanceBoardError> {
        let mut data = [0u8; HANDSHAKE_REPORT_LEN];
        // Word 2 = 0x1234, word 13 = 0xABCD.
        data[4] = 0x12;
        data[5] = 0x34;
        data[26] = 0xAB;
        data[27] = 0xCD;
        let table = decode_handshake(&data)?;
        assert_eq!(table.top_right.zero(), 0x1234);
        assert_eq!(table.bottom_left.full(), 0xABCD);
        Ok(())
    }

    #[test]
    fn test_decode_ignores_header_and_trailing_bytes() -> Result<(), BalanceBoardError> {
        let mut words = vec![0xFFFFu16, 0xFFFF];
        words.extend(std::iter::repeat_n(7u16, 12));
        words.extend([0xDEAD, 0xBEEF]);
        let table = decode_handshake(&make_handshake(&words))?;
        assert_eq!(table, CalibrationTable::splat(CalibrationTriple::new(7, 7, 7)));
        Ok(())
    }

    #[test]
    fn test_short_buffer() {
        for len in [0usize, 10, 27] {
            let data = vec![0u8; len];
            assert_eq!(
                decode_handshake(&data),
                Err(BalanceBoardError::InsufficientData {
                    expected: HANDSHAKE_REPORT_LEN,
                    actual: len,
                })
            );
        }
    }

    #[test]
    fn test_non_monotonic_still_decodes() -> Result<(), BalanceBoardError> {
        let mut words = vec![0u16; 14];
        // top_left: 900, 500, 100
        words[4] = 900;
        words[8] = 500;
        words[12] = 100;
        let table = decode_handshake(&make_handshake(&words))?;
        assert_eq!(table.top_left, CalibrationTriple::new(900, 500, 100));
        let bad: Vec<Corner> = non_monotonic_corners(&table).collect();
        assert_eq!(bad, vec![Corner::TopLeft]);
        Ok(())
    }
}
