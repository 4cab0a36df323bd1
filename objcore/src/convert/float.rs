//! Float literals and rendering.

use crate::value::ty::{BigInteger, Float};
use crate::{ErrorKind, Result};
use num_traits::ToPrimitive;

/// Copies the run of `radix` digits starting at `start` into `out`, skipping underscores that sit
/// between two digits. Returns the index just after the run.
fn digits(bytes: &[u8], start: usize, radix: u32, out: &mut String) -> usize {
	let is_digit = |idx: usize| bytes.get(idx).map_or(false, |&byte| (byte as char).is_digit(radix));
	let mut idx = start;

	while idx < bytes.len() {
		if is_digit(idx) {
			out.push(bytes[idx] as char);
		} else if !(bytes[idx] == b'_' && idx != start && is_digit(idx - 1) && is_digit(idx + 1)) {
			break;
		}

		idx += 1;
	}

	idx
}

/// Scans the longest float at the start of `source`, returning it and whatever follows it.
fn scan(source: &str, allow_hex: bool) -> Option<(Float, &str)> {
	let source = source.trim_start();
	let bytes = source.as_bytes();
	let mut literal = String::new();
	let mut idx = 0;

	if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
		literal.push(sign as char);
		idx += 1;
	}

	if allow_hex && matches!(bytes.get(idx..idx + 2), Some(b"0x" | b"0X")) {
		let mut hex = String::new();
		let end = digits(bytes, idx + 2, 16, &mut hex);
		let magnitude = BigInteger::parse_bytes(hex.as_bytes(), 16)?.to_f64()?;

		return Some((if literal == "-" { -magnitude } else { magnitude }, &source[end..]));
	}

	let end = digits(bytes, idx, 10, &mut literal);
	if end == idx {
		return None;
	}
	idx = end;

	// a fraction needs digits on both sides of the `.`
	if bytes.get(idx) == Some(&b'.') {
		let mut fraction = String::from(".");
		let end = digits(bytes, idx + 1, 10, &mut fraction);

		if end != idx + 1 {
			literal.push_str(&fraction);
			idx = end;
		}
	}

	if matches!(bytes.get(idx), Some(b'e' | b'E')) {
		let mut exponent = String::from("e");
		let mut start = idx + 1;

		if let Some(&sign @ (b'+' | b'-')) = bytes.get(start) {
			exponent.push(sign as char);
			start += 1;
		}

		let end = digits(bytes, start, 10, &mut exponent);
		if end != start {
			literal.push_str(&exponent);
			idx = end;
		}
	}

	literal.parse().ok().map(|float| (float, &source[idx..]))
}

/// Parses all of `source` as a float.
pub fn parse(source: &str) -> Result<Float> {
	match scan(source, true) {
		Some((float, rest)) if rest.trim().is_empty() => Ok(float),
		_ => Err(ErrorKind::Domain(format!("invalid value for Float(): {source:?}")).into()),
	}
}

/// Parses the longest valid float at the start of `source`, or `0.0` if there is none.
#[must_use]
pub fn parse_prefix(source: &str) -> Float {
	scan(source, false).map_or(0.0, |(float, _)| float)
}

/// Renders `float` so that it always reads back as a float: `1.0`, `1.5e-05`, `1.0e+20`, `NaN`.
#[must_use]
pub fn render(float: Float) -> String {
	if float.is_nan() {
		return "NaN".to_string();
	}

	if float.is_infinite() {
		return if float.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string();
	}

	let magnitude = float.abs();
	if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
		let rendered = float.to_string();
		return if rendered.contains('.') { rendered } else { rendered + ".0" };
	}

	let scientific = format!("{float:e}");
	let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
	let (sign, exponent) = match exponent.strip_prefix('-') {
		Some(exponent) => ('-', exponent),
		None => ('+', exponent),
	};

	if mantissa.contains('.') {
		format!("{mantissa}e{sign}{exponent:0>2}")
	} else {
		format!("{mantissa}.0e{sign}{exponent:0>2}")
	}
}
