//! Hex dump of raw accessory memory, used for handshake diagnostics.

const BYTES_PER_LINE: usize = 16;

/// Formats `data` as lines of 16 bytes, each prefixed by its register address.
///
/// ```
/// use balance_board::dump::hex_dump_lines;
///
/// let lines: Vec<String> = hex_dump_lines(0x04A4_0020, &[0x01, 0xAB]).collect();
/// assert_eq!(lines, vec!["4A40020: 01 AB"]);
/// ```
pub fn hex_dump_lines(base: u32, data: &[u8]) -> impl Iterator<Item = String> + '_ {
    data.chunks(BYTES_PER_LINE)
        .enumerate()
        .map(move |(line, chunk)| {
            let offset = u64::try_from(line.saturating_mul(BYTES_PER_LINE)).unwrap_or(u64::MAX);
            let address = u64::from(base).saturating_add(offset);
            let bytes = chunk
                .iter()
                .map(|b| format!("{b:02X}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{address:X}: {bytes}")
        })
}
