//! Per-accessory state: handshake, sensor events and connection lifecycle.

use hid_balance_board_protocol::{
    BalanceBoardError, BalanceBoardResult, BoardState, CALIBRATION_REGISTER, CalibrationTable,
    ConnectionState, ExpansionType, decode_event_report, decode_handshake, non_monotonic_corners,
};
use tracing::{debug, info, trace, warn};

use crate::config::BoardConfig;
use crate::dump::hex_dump_lines;
use crate::event::BoardEvent;

/// Balance board accessory handler.
///
/// Owns the calibration table and latest readings for exactly one board.
/// Every decode is all-or-nothing: a rejected report leaves the board as it
/// was.
#[derive(Debug, Clone)]
pub struct BalanceBoard {
    config: BoardConfig,
    calibration: CalibrationTable,
    state: BoardState,
    connection: ConnectionState,
    expansion: ExpansionType,
    pending_event: Option<BoardEvent>,
}

impl BalanceBoard {
    /// Create a disconnected board configured from the environment.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::from_env())
    }

    /// Create a disconnected board with an explicit configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            calibration: CalibrationTable::default(),
            state: BoardState::default(),
            connection: ConnectionState::Disconnected,
            expansion: ExpansionType::None,
            pending_event: None,
        }
    }

    /// Decode the handshake block and mark the board connected.
    ///
    /// On success the calibration table is replaced and
    /// [`BoardEvent::AccessoryInserted`] is raised. A handshake received while
    /// already connected recalibrates the board.
    ///
    /// The board state is only written by [`decode_event`](Self::decode_event)
    /// and [`reset`](Self::reset). After a recalibration, [`state`](Self::state)
    /// keeps the weights computed against the previous table until the next
    /// sensor report arrives.
    ///
    /// # Errors
    ///
    /// [`BalanceBoardError::InsufficientData`] when `buffer` is shorter than
    /// the handshake block. The board is left unchanged.
    pub fn decode_handshake(&mut self, buffer: &[u8]) -> BalanceBoardResult<()> {
        if self.config.dump_handshake {
            debug!("Balance board handshake block ({} bytes):", buffer.len());
            for line in hex_dump_lines(CALIBRATION_REGISTER, buffer) {
                debug!("{}", line);
            }
        }

        let calibration = decode_handshake(buffer).inspect_err(|e| {
            debug!("Rejected balance board handshake: {}", e);
        })?;

        for corner in non_monotonic_corners(&calibration) {
            warn!(
                "Balance board {} calibration is not non-decreasing: {:?}",
                corner.name(),
                calibration.get(corner).points()
            );
        }

        self.calibration = calibration;
        self.connection = ConnectionState::Connected;
        self.expansion = ExpansionType::BalanceBoard;
        self.pending_event = Some(BoardEvent::AccessoryInserted);

        info!("Balance board inserted: calibration {:?}", self.calibration);
        Ok(())
    }

    /// Decode a sensor report into the board state.
    ///
    /// # Errors
    ///
    /// - [`BalanceBoardError::NotConnected`] before a successful handshake
    /// - [`BalanceBoardError::InsufficientData`] when `msg` is shorter than a
    ///   sensor report
    /// - [`BalanceBoardError::InvalidCalibration`] when a corner's reading
    ///   falls in a zero-width calibration segment
    ///
    /// The board state is left unchanged on every error.
    pub fn decode_event(&mut self, msg: &[u8]) -> BalanceBoardResult<()> {
        if self.connection != ConnectionState::Connected {
            debug!("Dropped balance board event: no handshake yet");
            return Err(BalanceBoardError::NotConnected);
        }

        let state = decode_event_report(msg, &self.calibration).inspect_err(|e| {
            debug!("Rejected balance board event: {}", e);
        })?;

        trace!(
            "Balance board sample raw={:?} kg=[{:.2}, {:.2}, {:.2}, {:.2}]",
            state.raw(),
            state.top_right.weight_kg,
            state.bottom_right.weight_kg,
            state.top_left.weight_kg,
            state.bottom_left.weight_kg
        );

        self.state = state;
        Ok(())
    }

    /// Clear calibration and readings after the transport reports a disconnect.
    ///
    /// Resetting a board that is already disconnected changes nothing.
    pub fn reset(&mut self) {
        if self.connection == ConnectionState::Disconnected {
            return;
        }

        self.calibration = CalibrationTable::default();
        self.state = BoardState::default();
        self.connection = ConnectionState::Disconnected;
        self.expansion = ExpansionType::None;
        self.pending_event = Some(BoardEvent::AccessoryRemoved);

        info!("Balance board removed");
    }

    /// Take the most recent unconsumed signal, if any.
    pub fn take_event(&mut self) -> Option<BoardEvent> {
        self.pending_event.take()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn calibration(&self) -> &CalibrationTable {
        &self.calibration
    }

    /// Latest calibrated readings.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    pub fn is_connected(&self) -> bool {
        self.connection == ConnectionState::Connected
    }

    pub fn expansion_type(&self) -> ExpansionType {
        self.expansion
    }
}

impl Default for BalanceBoard {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid_balance_board_protocol::{CalibrationTriple, HANDSHAKE_REPORT_LEN};
    use tracing_test::traced_test;

    fn handshake_with(points: [u16; 3]) -> Vec<u8> {
        let mut data = vec![0u8; 4];
        for point in points {
            for _ in 0..4 {
                data.extend_from_slice(&point.to_be_bytes());
            }
        }
        data
    }

    fn connected_board() -> Result<BalanceBoard, BalanceBoardError> {
        let mut board = BalanceBoard::default();
        board.decode_handshake(&handshake_with([0, 17, 34]))?;
        Ok(board)
    }

    #[test]
    fn test_new_board_is_disconnected() {
        let board = BalanceBoard::default();
        assert_eq!(board.connection_state(), ConnectionState::Disconnected);
        assert_eq!(board.expansion_type(), ExpansionType::None);
        assert!(board.calibration().is_empty());
        assert_eq!(*board.state(), BoardState::default());
    }

    #[test]
    fn test_handshake_connects() -> Result<(), BalanceBoardError> {
        let mut board = connected_board()?;
        assert!(board.is_connected());
        assert_eq!(board.expansion_type(), ExpansionType::BalanceBoard);
        assert_eq!(
            *board.calibration(),
            CalibrationTable::splat(CalibrationTriple::new(0, 17, 34))
        );
        assert_eq!(board.take_event(), Some(BoardEvent::AccessoryInserted));
        assert_eq!(board.take_event(), None);
        Ok(())
    }

    #[test]
    fn test_failed_handshake_leaves_board_unchanged() -> Result<(), BalanceBoardError> {
        let mut board = BalanceBoard::default();
        assert!(board.decode_handshake(&[0u8; 10]).is_err());
        assert_eq!(board.connection_state(), ConnectionState::Disconnected);
        assert!(board.calibration().is_empty());
        assert_eq!(board.take_event(), None);

        let mut board = connected_board()?;
        let before = *board.calibration();
        assert!(board.decode_handshake(&[0xFFu8; HANDSHAKE_REPORT_LEN - 1]).is_err());
        assert_eq!(*board.calibration(), before);
        assert!(board.is_connected());
        Ok(())
    }

    #[test]
    fn test_event_before_handshake() {
        let mut board = BalanceBoard::default();
        assert_eq!(
            board.decode_event(&[0u8; 8]),
            Err(BalanceBoardError::NotConnected)
        );
    }

    #[test]
    fn test_not_connected_takes_precedence_over_length() {
        let mut board = BalanceBoard::default();
        assert_eq!(
            board.decode_event(&[]),
            Err(BalanceBoardError::NotConnected)
        );
    }

    #[test]
    fn test_event_updates_state() -> Result<(), BalanceBoardError> {
        let mut board = connected_board()?;
        board.decode_event(&[0, 17, 0, 0, 0, 34, 0, 0])?;

        assert_eq!(board.state().top_right.raw, 17);
        assert_eq!(board.state().top_right.weight_kg, 14.0);
        assert_eq!(board.state().top_left.weight_kg, 28.0);
        assert_eq!(board.state().bottom_left.weight_kg, 0.0);
        Ok(())
    }

    #[test]
    fn test_rejected_event_keeps_previous_state() -> Result<(), BalanceBoardError> {
        let mut board = BalanceBoard::default();
        // Bottom-left has a zero-width upper segment.
        let mut handshake = handshake_with([0, 17, 34]);
        handshake[26] = 0;
        handshake[27] = 17;
        board.decode_handshake(&handshake)?;

        board.decode_event(&[0, 1, 0, 2, 0, 3, 0, 4])?;
        let before = *board.state();

        assert_eq!(
            board.decode_event(&[0, 5, 0, 5, 0, 5, 0, 18]),
            Err(BalanceBoardError::InvalidCalibration {
                points: [0, 17, 17]
            })
        );
        assert_eq!(*board.state(), before);

        assert!(matches!(
            board.decode_event(&[0, 5, 0, 5]),
            Err(BalanceBoardError::InsufficientData { .. })
        ));
        assert_eq!(*board.state(), before);
        Ok(())
    }

    #[test]
    fn test_reset_clears_everything() -> Result<(), BalanceBoardError> {
        let mut board = connected_board()?;
        board.decode_event(&[0, 9, 0, 9, 0, 9, 0, 9])?;
        assert_eq!(board.take_event(), Some(BoardEvent::AccessoryInserted));

        board.reset();

        assert_eq!(board.connection_state(), ConnectionState::Disconnected);
        assert_eq!(board.expansion_type(), ExpansionType::None);
        assert!(board.calibration().is_empty());
        assert_eq!(*board.state(), BoardState::default());
        assert_eq!(board.take_event(), Some(BoardEvent::AccessoryRemoved));
        assert_eq!(
            board.decode_event(&[0u8; 8]),
            Err(BalanceBoardError::NotConnected)
        );
        Ok(())
    }

    #[test]
    fn test_reset_is_idempotent() -> Result<(), BalanceBoardError> {
        let mut board = connected_board()?;
        board.reset();
        let calibration = *board.calibration();
        let state = *board.state();
        let event = board.pending_event;

        board.reset();

        assert_eq!(*board.calibration(), calibration);
        assert_eq!(*board.state(), state);
        assert_eq!(board.pending_event, event);
        assert_eq!(board.connection_state(), ConnectionState::Disconnected);
        Ok(())
    }

    #[test]
    fn test_rehandshake_recalibrates() -> Result<(), BalanceBoardError> {
        let mut board = connected_board()?;
        board.decode_event(&[0, 17, 0, 0, 0, 0, 0, 0])?;
        assert_eq!(board.take_event(), Some(BoardEvent::AccessoryInserted));

        board.decode_handshake(&handshake_with([100, 200, 300]))?;
        assert!(board.is_connected());
        assert_eq!(
            board.calibration().bottom_right,
            CalibrationTriple::new(100, 200, 300)
        );
        assert_eq!(board.take_event(), Some(BoardEvent::AccessoryInserted));

        // Readings from the old table stay until the next report.
        assert_eq!(board.state().top_right.raw, 17);
        assert_eq!(board.state().top_right.weight_kg, 14.0);

        board.decode_event(&[0, 200, 0, 0, 0, 0, 0, 0])?;
        assert_eq!(board.state().top_right.raw, 200);
        assert_eq!(board.state().top_right.weight_kg, 14.0);
        assert_eq!(board.state().bottom_right.weight_kg, -14.0);
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_handshake_dump_logged_when_enabled() {
        let mut board = BalanceBoard::with_config(BoardConfig::default().with_dump_handshake(true));
        assert!(board.decode_handshake(&handshake_with([0, 17, 34])).is_ok());
        assert!(logs_contain(
            "4A40020: 00 00 00 00 00 00 00 00 00 00 00 00 00 11 00 11"
        ));
        assert!(logs_contain("4A40030: 00 11 00 11 00 22 00 22 00 22 00 22"));
    }

    #[test]
    #[traced_test]
    fn test_handshake_dump_off_by_default() {
        let mut board = BalanceBoard::default();
        assert!(board.decode_handshake(&handshake_with([0, 17, 34])).is_ok());
        assert!(!logs_contain("4A40020:"));
        assert!(logs_contain("Balance board inserted"));
    }

    #[test]
    #[traced_test]
    fn test_non_monotonic_calibration_warns() {
        let mut board = BalanceBoard::default();
        assert!(board.decode_handshake(&handshake_with([300, 200, 100])).is_ok());
        assert!(board.is_connected());
        assert!(logs_contain("top_right calibration is not non-decreasing"));
    }
}
