use crate::value::ty::{Class, InstanceOf, ObjectClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{Result, Value};

pub type Boolean = bool;

impl crate::value::NamedType for Boolean {
	const TYPENAME: crate::value::Typename = "Boolean";
}

impl Convertible for Boolean {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Boolean(boolean) => Some(*boolean),
			_ => None,
		}
	}
}

impl InstanceOf for Boolean {
	type Class = BooleanClass;
}

#[derive(Debug, Clone, Copy)]
pub struct BooleanClass;

impl Singleton for BooleanClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Boolean", superclass ObjectClass::instance();
					public Intern::to_s => method funcs::to_s,
					public Intern::inspect => method funcs::to_s,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn to_s(boolean: Boolean, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(if boolean { "true" } else { "false" }).into())
	}
}
