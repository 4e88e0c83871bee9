use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::constants::REPORT_SEPARATOR_WIDTH;
use crate::error::SimError;
use crate::translation::AccessResult;

/// Parse a single address token with the usual integer-literal rules.
///
/// Accepts decimal and `0x`/`0o`/`0b` prefixed literals (either case), an
/// optional leading `+`, and single `_` separators between digits. A
/// non-zero decimal may not start with `0` (`0100` is rejected, `000` is 0).
pub fn parse_address(token: &str) -> Option<u32> {
    let token = token.trim();
    let token = token.strip_prefix('+').unwrap_or(token);
    let (digits, radix) = match token.get(..2) {
        Some("0x" | "0X") => (&token[2..], 16),
        Some("0o" | "0O") => (&token[2..], 8),
        Some("0b" | "0B") => (&token[2..], 2),
        _ => (token, 10),
    };
    // One separator may follow a radix prefix, as in 0x_ff
    let digits = match radix {
        10 => digits,
        _ => digits.strip_prefix('_').unwrap_or(digits),
    };

    let misplaced_separator =
        digits.starts_with('_') || digits.ends_with('_') || digits.contains("__");
    if digits.is_empty() || misplaced_separator {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    // from_str_radix would accept a sign here
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    if radix == 10 && digits.starts_with('0') && digits.chars().any(|c| c != '0') {
        return None;
    }
    u32::from_str_radix(&digits, radix).ok()
}

/// Parse an address listing, one per line. Blank lines are skipped.
pub fn parse_addresses(content: &str) -> Result<Vec<u32>, SimError> {
    let mut addresses = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let va = parse_address(token).ok_or_else(|| SimError::InvalidAddress {
            line: idx + 1,
            token: token.to_string(),
        })?;
        addresses.push(va);
    }
    Ok(addresses)
}

pub fn read_virtual_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let addresses = parse_addresses(&content)?;
    log::info!("read {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}

/// Write one report block per access, each followed by a separator line
pub fn write_report<W: Write>(writer: &mut W, results: &[AccessResult]) -> Result<(), SimError> {
    let separator = "-".repeat(REPORT_SEPARATOR_WIDTH);
    for result in results {
        writeln!(writer, "{}", result)?;
        writeln!(writer, "{}", separator)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results<P: AsRef<Path>>(path: P, results: &[AccessResult]) -> Result<(), SimError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(&mut BufWriter::new(file), results)
}
