//! Line-delimited JSON writing shared by both report phases.

use std::io::Write;

/// Serialize one value as a JSON line.
pub(crate) fn write_line<W: Write, T: serde::Serialize>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    let line = serde_json::to_string(value).map_err(std::io::Error::other)?;
    writeln!(writer, "{line}")
}
