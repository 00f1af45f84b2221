//! HID report parsing utilities

use crate::{HidCommonError, HidCommonResult};

/// Composes a big-endian 16-bit value from its two wire bytes.
pub const fn u16_from_be(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Composes a little-endian 16-bit value from its two wire bytes.
pub const fn u16_from_le(lo: u8, hi: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Forward-only cursor over a borrowed report buffer.
#[derive(Debug, Clone)]
pub struct ReportParser<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ReportParser<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Fails unless at least `needed` bytes are left to read.
    ///
    /// # Errors
    ///
    /// [`HidCommonError::UnexpectedEnd`] when fewer than `needed` bytes remain.
    pub fn require(&self, needed: usize) -> HidCommonResult<()> {
        if self.remaining() < needed {
            return Err(self.unexpected_end(needed));
        }
        Ok(())
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`HidCommonError::UnexpectedEnd`] when no byte is left. The
    /// cursor does not move.
    pub fn read_u8(&mut self) -> HidCommonResult<u8> {
        let value = self
            .buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| self.unexpected_end(1))?;
        self.position = self.position.saturating_add(1);
        Ok(value)
    }

    /// Reads a big-endian word.
    ///
    /// # Errors
    ///
    /// [`HidCommonError::UnexpectedEnd`] when fewer than 2 bytes are left. The
    /// cursor does not move.
    pub fn read_u16_be(&mut self) -> HidCommonResult<u16> {
        let [hi, lo] = self.read_array::<2>()?;
        Ok(u16_from_be(hi, lo))
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// [`HidCommonError::UnexpectedEnd`] when fewer than 2 bytes are left. The
    /// cursor does not move.
    pub fn read_u16_le(&mut self) -> HidCommonResult<u16> {
        let [lo, hi] = self.read_array::<2>()?;
        Ok(u16_from_le(lo, hi))
    }

    /// Borrows the next `count` bytes.
    ///
    /// # Errors
    ///
    /// [`HidCommonError::UnexpectedEnd`] when fewer than `count` bytes are left. The
    /// cursor does not move.
    pub fn read_bytes(&mut self, count: usize) -> HidCommonResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .ok_or_else(|| self.unexpected_end(count))?;
        let buffer = self.buffer;
        let bytes = buffer
            .get(self.position..end)
            .ok_or_else(|| self.unexpected_end(count))?;
        self.position = end;
        Ok(bytes)
    }

    pub fn skip(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.buffer.len());
    }

    fn read_array<const N: usize>(&mut self) -> HidCommonResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        <[u8; N]>::try_from(bytes)
            .ok()
            .ok_or_else(|| self.unexpected_end(N))
    }

    fn unexpected_end(&self, needed: usize) -> HidCommonError {
        HidCommonError::UnexpectedEnd {
            offset: self.position,
            needed,
            available: self.remaining(),
        }
    }
}

/// Growable report writer, mainly for building test and fuzz inputs.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    buffer: Vec<u8>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    pub fn write_u16_be(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn write_u16_le(&mut self, value: u16) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
