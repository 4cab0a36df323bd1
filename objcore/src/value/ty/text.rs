use crate::convert;
use crate::value::ty::integer::radix_argument;
use crate::value::ty::{Class, ComparableModule, InstanceOf, ObjectClass, Singleton};
use crate::value::{Args, Convertible, Gc, Symbol};
use crate::{Result, Value};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::sync::Arc;

/// An immutable piece of text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, NamedType)]
pub struct Text(Arc<str>);

impl Text {
	#[must_use]
	pub fn new(text: &str) -> Self {
		Self(Arc::from(text))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Checks to see if `self` and `rhs` share the same allocation.
	#[must_use]
	pub fn ptr_eq(&self, rhs: &Self) -> bool {
		Arc::ptr_eq(&self.0, &rhs.0)
	}
}

impl Deref for Text {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		self.as_str()
	}
}

impl From<&str> for Text {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Text {
	fn from(text: String) -> Self {
		Self(Arc::from(text))
	}
}

impl From<Text> for Value {
	fn from(text: Text) -> Self {
		Self::Text(text)
	}
}

impl Display for Text {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for Text {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Debug::fmt(self.as_str(), f)
	}
}

impl Convertible for Text {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Text(text) => Some(text.clone()),
			_ => None,
		}
	}
}

impl InstanceOf for Text {
	type Class = TextClass;
}

#[derive(Debug, Clone, Copy)]
pub struct TextClass;

impl Singleton for TextClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Text", superclass ObjectClass::instance(), include ComparableModule::instance();
					public Intern::to_str => method funcs::itself,
					public Intern::to_s => method funcs::itself,
					public Intern::inspect => method funcs::inspect,
					public Intern::to_i => method funcs::to_i,
					public Intern::to_f => method funcs::to_f,
					public Intern::to_sym => method funcs::to_sym,
					public Intern::op_cmp => method funcs::cmp,
					public "length" => method funcs::length,
					public "empty?" => method funcs::is_empty,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn itself(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(text.into())
	}

	pub fn inspect(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(format!("{text:?}")).into())
	}

	/// `to_i(radix = 10)`, which parses as much of a leading integer as it can, and is `0` if there
	/// isn't one.
	pub fn to_i(text: Text, args: Args<'_>) -> Result<Value> {
		let radix = radix_argument(args, 10)?;

		convert::integer::parse_prefix(text.as_str(), radix)
	}

	/// Parses as much of a leading float as it can, and is `0.0` if there isn't one.
	pub fn to_f(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(convert::float::parse_prefix(text.as_str()).into())
	}

	pub fn to_sym(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Symbol::new(text.as_str()).into())
	}

	pub fn cmp(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		match &args[0] {
			Value::Text(rhs) => Ok(Value::Integer(text.as_str().cmp(rhs.as_str()) as i64)),
			_ => Ok(Value::Null),
		}
	}

	pub fn length(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Integer(text.chars().count() as i64))
	}

	pub fn is_empty(text: Text, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(text.is_empty().into())
	}
}
