use crate::value::Value;
use crate::{ErrorKind, Result};
use std::ops::{Index, RangeInclusive};

/// The positional arguments passed to a native member.
#[derive(Default, Debug, Clone, Copy)]
pub struct Args<'a> {
	positional: &'a [Value],
}

impl<'a> Args<'a> {
	#[must_use]
	pub const fn new(positional: &'a [Value]) -> Self {
		Self { positional }
	}

	#[must_use]
	pub const fn positional(self) -> &'a [Value] {
		self.positional
	}

	#[must_use]
	pub const fn len(self) -> usize {
		self.positional.len()
	}

	#[must_use]
	pub const fn is_empty(self) -> bool {
		self.len() == 0
	}

	#[must_use]
	pub fn get(self, index: usize) -> Option<&'a Value> {
		self.positional.get(index)
	}

	pub fn assert_no_arguments(self) -> Result<()> {
		self.assert_positional_len(0)
	}

	pub fn assert_positional_len(self, len: usize) -> Result<()> {
		if self.len() == len {
			Ok(())
		} else {
			Err(ErrorKind::PositionalArgumentMismatch { given: self.len(), expected: count(len) }.into())
		}
	}

	/// Gets the truthiness of the only argument, or `default` if there wasn't one.
	pub fn optional_flag(self, default: bool) -> Result<bool> {
		self.assert_positional_range(0..=1)?;

		Ok(self.get(0).map_or(default, Value::is_truthy))
	}

	pub fn assert_positional_range(self, range: RangeInclusive<usize>) -> Result<()> {
		if range.contains(&self.len()) {
			Ok(())
		} else {
			Err(ErrorKind::PositionalArgumentMismatch {
				given: self.len(),
				expected: range_description(range),
			}
			.into())
		}
	}
}

fn count(len: usize) -> &'static str {
	const COUNTS: [&str; 4] = ["0", "1", "2", "3"];

	COUNTS.get(len).copied().unwrap_or("many")
}

fn range_description(range: RangeInclusive<usize>) -> &'static str {
	match (*range.start(), *range.end()) {
		(0, 1) => "0..1",
		(1, 2) => "1..2",
		(0, usize::MAX) => "0+",
		(1, usize::MAX) => "1+",
		(start, end) if start == end => count(start),
		_ => "other",
	}
}

impl Index<usize> for Args<'_> {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.positional[index]
	}
}
