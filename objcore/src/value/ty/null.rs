use crate::value::ty::{Class, InstanceOf, List, ObjectClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{Result, Value};
use std::fmt::{self, Debug, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, NamedType)]
pub struct Null;

impl Debug for Null {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "null")
	}
}

impl From<Null> for Value {
	fn from(_: Null) -> Self {
		Self::Null
	}
}

impl Convertible for Null {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Null => Some(Self),
			_ => None,
		}
	}
}

impl InstanceOf for Null {
	type Class = NullClass;
}

#[derive(Debug, Clone, Copy)]
pub struct NullClass;

impl Singleton for NullClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Null", superclass ObjectClass::instance();
					public Intern::to_a => method funcs::to_a,
					public Intern::to_s => method funcs::to_s,
					public Intern::to_i => method funcs::to_i,
					public Intern::to_f => method funcs::to_f,
					public Intern::inspect => method funcs::inspect,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn to_a(_: Null, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(List::default().into())
	}

	pub fn to_s(_: Null, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from("").into())
	}

	pub fn to_i(_: Null, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Integer(0))
	}

	pub fn to_f(_: Null, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Float(0.0))
	}

	pub fn inspect(_: Null, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from("null").into())
	}
}
