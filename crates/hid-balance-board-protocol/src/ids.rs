//! Wire constants for the balance board accessory.

/// Minimum length of the handshake (calibration) block, in bytes.
pub const HANDSHAKE_REPORT_LEN: usize = 28;

/// Number of 16-bit words in the handshake block.
pub const HANDSHAKE_WORD_COUNT: usize = HANDSHAKE_REPORT_LEN / 2;

/// Index of the first calibration word; words 0 and 1 are not used.
pub const CALIBRATION_FIRST_WORD: usize = 2;

/// Calibration points per corner (0 kg, 17 kg, 34 kg).
pub const CALIBRATION_POINT_COUNT: usize = 3;

/// Minimum length of a sensor event report, in bytes.
pub const EVENT_REPORT_LEN: usize = 8;

/// Accessory register the handshake block is read from.
pub const CALIBRATION_REGISTER: u32 = 0x04A4_0020;

/// Nominal reference weights of the three calibration points, in kilograms.
pub const REFERENCE_WEIGHTS_KG: [f32; CALIBRATION_POINT_COUNT] = [0.0, 17.0, 34.0];

/// Breakpoint used by the interpolation law, in kilograms.
///
/// This is not the 17 kg middle reference weight. The value is kept as the
/// accessory's established output scale.
pub const INTERPOLATION_BREAKPOINT_KG: f32 = 14.0;
