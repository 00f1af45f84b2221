//! Sensor event report parsing

use balance_board_hid_common::ReportParser;

use super::{
    BalanceBoardError, BalanceBoardResult, BoardState, CalibrationTable, CornerReading, Corners,
    EVENT_REPORT_LEN, interpolate,
};

/// Uncalibrated per-corner readings from one sensor event report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardEventReport {
    pub raw: Corners<u16>,
}

impl BoardEventReport {
    /// Parses the four big-endian readings at offsets 0, 2, 4 and 6.
    ///
    /// Bytes past [`EVENT_REPORT_LEN`] are ignored.
    ///
    /// # Errors
    ///
    /// [`BalanceBoardError::InsufficientData`] when `msg` is shorter than
    /// [`EVENT_REPORT_LEN`].
    pub fn parse(msg: &[u8]) -> BalanceBoardResult<Self> {
        if msg.len() < EVENT_REPORT_LEN {
            return Err(BalanceBoardError::InsufficientData {
                expected: EVENT_REPORT_LEN,
                actual: msg.len(),
            });
        }

        let mut parser = ReportParser::new(msg);
        let raw = read_corner_words(&mut parser)?;

        Ok(Self { raw })
    }

    /// Interpolates every corner against `calibration`.
    ///
    /// All four corners are computed before anything is returned, so a
    /// degenerate calibration on any corner yields an error and no state.
    ///
    /// # Errors
    ///
    /// [`BalanceBoardError::InvalidCalibration`] for the first corner whose
    /// reading falls in a zero-width segment.
    pub fn calibrate(&self, calibration: &CalibrationTable) -> BalanceBoardResult<BoardState> {
        self.raw
            .zip(*calibration)
            .try_map(|_, (raw, cal)| {
                Ok(CornerReading {
                    raw,
                    weight_kg: interpolate(raw, cal)?,
                })
            })
    }
}

/// Parses an event report and converts it into a [`BoardState`].
///
/// # Errors
///
/// See [`BoardEventReport::parse`] and [`BoardEventReport::calibrate`].
pub fn decode_event_report(
    msg: &[u8],
    calibration: &CalibrationTable,
) -> BalanceBoardResult<BoardState> {
    BoardEventReport::parse(msg)?.calibrate(calibration)
}

/// Reads four consecutive big-endian words in corner wire order.
pub(crate) fn read_corner_words(
    parser: &mut ReportParser<'_>,
) -> BalanceBoardResult<Corners<u16>> {
    Ok(Corners {
        top_right: parser.read_u16_be()?,
        bottom_right: parser.read_u16_be()?,
        top_left: parser.read_u16_be()?,
        bottom_left: parser.read_u16_be()?,
    })
}
