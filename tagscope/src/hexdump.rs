//! Hex dumps of binary values

use std::fmt::Write;

use tagscope_common::math::SafeMul;

/// Offset, hex and ASCII columns for each `line_width` bytes
///
/// Once the accumulated output exceeds `byte_limit` characters, the dump
/// stops with a notice line.
///
/// ```
/// # use tagscope::hexdump::dump;
/// let lines = dump(b"Exif\x00\x01", 4, 10000);
/// assert_eq!(
///     lines,
///     [
///         "0000   45 78 69 66    Exif",
///         "0004   00 01          ..",
///     ]
/// );
/// ```
pub fn dump(bytes: &[u8], line_width: usize, byte_limit: usize) -> Vec<String> {
    let line_width = line_width.max(1);
    let hex_width = line_width.safe_mul(3).unwrap_or(usize::MAX);

    let mut lines = Vec::new();
    let mut output_len = 0_usize;

    for (n, chunk) in bytes.chunks(line_width).enumerate() {
        let offset = n.saturating_mul(line_width);
        let line = format!("{offset:04X}   {:<hex_width$}   {}", hex(chunk), ascii(chunk));

        // Counted with the line break
        output_len = output_len.saturating_add(line.len()).saturating_add(1);
        lines.push(line);

        if output_len > byte_limit {
            lines.push(format!("(analysis limit reached after {byte_limit} bytes)"));
            break;
        }
    }

    lines
}

/// Compact single line rendering
///
/// Lists the first `line_width` bytes as `0xNN` tokens followed by at most
/// `total_limit` characters of ASCII in brackets. Omitted content is marked
/// with `...`.
///
/// ```
/// # use tagscope::hexdump::preview;
/// assert_eq!(preview(&[1, 2, 3, 0], 16, 16), "0x01 0x02 0x03 0x00 [....]");
/// assert_eq!(preview(b"ABCDEF", 2, 4), "0x41 0x42 ... [ABCD...]");
/// ```
pub fn preview(bytes: &[u8], line_width: usize, total_limit: usize) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let mut out = bytes
        .iter()
        .take(line_width)
        .map(|x| format!("0x{x:02X}"))
        .collect::<Vec<_>>()
        .join(" ");

    if bytes.len() > line_width {
        out.push_str(" ...");
    }

    let shown = bytes.get(..total_limit).unwrap_or(bytes);
    let _ = write!(out, " [{}", ascii(shown));
    if bytes.len() > total_limit {
        out.push_str("...");
    }
    out.push(']');

    out
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|x| format!("{x:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-printable bytes and backslashes are shown as `.`
fn ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|x| {
            if (x.is_ascii_graphic() || *x == b' ') && *x != b'\\' {
                char::from(*x)
            } else {
                '.'
            }
        })
        .collect()
}
