//! Integer literals and rendering.
//!
//! The accepted grammar is: optional surrounding whitespace, an optional sign, an optional radix
//! prefix (`0b`, `0o`, `0d`, `0x`, or just a leading `0` for octal), then digits of that radix
//! with single underscores allowed between them.

use crate::value::ty::BigInteger;
use crate::{ErrorKind, Result, Value};

/// The smallest radix that can be explicitly requested.
pub const MIN_RADIX: i64 = 2;

/// The largest radix that can be explicitly requested.
pub const MAX_RADIX: i64 = 36;

/// Radix `0` means "detect it from the prefix, defaulting to decimal".
fn check_parse_radix(radix: i64) -> Result<u32> {
	if radix == 0 || (MIN_RADIX..=MAX_RADIX).contains(&radix) {
		Ok(radix as u32)
	} else {
		Err(ErrorKind::Argument(format!("invalid radix {radix}")).into())
	}
}

/// Checks `radix` can be used to render an integer.
pub fn check_render_radix(radix: i64) -> Result<u32> {
	if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
		Ok(radix as u32)
	} else {
		Err(ErrorKind::Argument(format!("invalid radix {radix}")).into())
	}
}

fn prefix_radix(source: &str) -> Option<u32> {
	match source.as_bytes() {
		[b'0', b'b' | b'B', ..] => Some(2),
		[b'0', b'o' | b'O', ..] => Some(8),
		[b'0', b'd' | b'D', ..] => Some(10),
		[b'0', b'x' | b'X', ..] => Some(16),
		_ => None,
	}
}

/// Scans the longest integer at the start of `source`, returning it and whatever follows it.
fn scan(source: &str, mut radix: u32) -> Option<(BigInteger, &str)> {
	let mut rest = source.trim_start();

	let negative = rest.starts_with('-');
	if negative || rest.starts_with('+') {
		rest = &rest[1..];
	}

	match prefix_radix(rest) {
		Some(prefix) if radix == 0 || radix == prefix => {
			radix = prefix;
			rest = &rest[2..];
		}
		_ if radix == 0 => {
			radix = if rest.len() > 1 && rest.starts_with('0') { 8 } else { 10 };
		}
		_ => {}
	}

	let mut digits = String::new();
	let mut end = 0;

	for (idx, chr) in rest.char_indices() {
		if chr == '_' {
			// only between two digits
			if end != idx || digits.is_empty() {
				break;
			}
		} else if chr.is_digit(radix) {
			digits.push(chr);
			end = idx + 1;
		} else {
			break;
		}
	}

	let magnitude = BigInteger::parse_bytes(digits.as_bytes(), radix)?;
	let integer = if negative { -magnitude } else { magnitude };

	Some((integer, &rest[end..]))
}

/// Parses all of `source` as an integer in the given radix.
pub fn parse(source: &str, radix: i64) -> Result<Value> {
	let radix = check_parse_radix(radix)?;

	match scan(source, radix) {
		Some((integer, rest)) if rest.trim().is_empty() => Ok(integer.into()),
		_ => Err(ErrorKind::Argument(format!("invalid value for Integer(): {source:?}")).into()),
	}
}

/// Parses the longest valid integer at the start of `source`, or `0` if there is none.
pub fn parse_prefix(source: &str, radix: i64) -> Result<Value> {
	let radix = check_parse_radix(radix)?;

	Ok(scan(source, radix).map_or(Value::Integer(0), |(integer, _)| integer.into()))
}

/// Renders `integer` in `radix`, which must be valid.
#[must_use]
pub fn render(integer: i64, radix: u32) -> String {
	let digits = radix_fmt::radix(integer.unsigned_abs(), radix as u8).to_string();

	if integer < 0 {
		format!("-{digits}")
	} else {
		digits
	}
}
