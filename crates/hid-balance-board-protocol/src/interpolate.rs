//! Raw reading to kilogram conversion

use core::cmp::Ordering;

use super::{
    BalanceBoardError, BalanceBoardResult, CalibrationTriple, INTERPOLATION_BREAKPOINT_KG,
};

/// Converts a raw load-cell reading into kilograms.
///
/// The calibration triple splits the raw range into two linear segments:
/// `[zero, mid)` maps onto `[0, 14)` kg and `(mid, full]` maps onto
/// `(14, 28]` kg. A reading exactly at `mid` is 14 kg. Readings outside the
/// calibrated range extrapolate along the nearest segment, so a reading below
/// `zero` yields a negative weight.
///
/// # Errors
///
/// Returns [`BalanceBoardError::InvalidCalibration`] when the segment the
/// reading falls in has zero width (`zero == mid` below the breakpoint,
/// `mid == full` above it).
///
/// # Examples
///
/// ```
/// use hid_balance_board_protocol::{CalibrationTriple, interpolate};
///
/// let cal = CalibrationTriple::new(0, 17, 34);
/// assert_eq!(interpolate(17, cal), Ok(14.0));
/// assert_eq!(interpolate(0, cal), Ok(0.0));
/// ```
pub fn interpolate(raw: u16, cal: CalibrationTriple) -> BalanceBoardResult<f32> {
    let (zero, mid, full) = (cal.zero(), cal.mid(), cal.full());

    match raw.cmp(&mid) {
        Ordering::Less => scaled_offset(raw, zero, mid, cal),
        Ordering::Equal => Ok(INTERPOLATION_BREAKPOINT_KG),
        Ordering::Greater => {
            scaled_offset(raw, mid, full, cal).map(|w| w + INTERPOLATION_BREAKPOINT_KG)
        }
    }
}

/// `(raw - start) * 14 / (end - start)`, rejecting a zero-width segment.
fn scaled_offset(raw: u16, start: u16, end: u16, cal: CalibrationTriple) -> BalanceBoardResult<f32> {
    if start == end {
        return Err(BalanceBoardError::InvalidCalibration {
            points: cal.points(),
        });
    }
    let offset = f32::from(raw) - f32::from(start);
    let width = f32::from(end) - f32::from(start);
    Ok(offset * INTERPOLATION_BREAKPOINT_KG / width)
}
