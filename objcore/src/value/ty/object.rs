use crate::value::ty::{Class, KernelModule, Singleton, Specialization};
use crate::value::{Args, Gc};
use crate::{ErrorKind, Result, Value};

/// An instance of a user-defined class.
#[derive(Debug, NamedType)]
pub struct Object {
	class: Gc<Class>,
	singleton: Option<Gc<Specialization>>,
	frozen: bool,
}

impl Object {
	/// Creates a new, empty instance of `class`.
	pub fn instantiate(class: &Gc<Class>) -> Result<Gc<Self>> {
		if class.is_module() {
			return Err(ErrorKind::Type(format!("can't instantiate module {}", class.name())).into());
		}

		Ok(Gc::new(Self { class: class.clone(), singleton: None, frozen: false }))
	}

	#[must_use]
	pub const fn class(&self) -> &Gc<Class> {
		&self.class
	}

	#[must_use]
	pub const fn singleton(&self) -> Option<&Gc<Specialization>> {
		self.singleton.as_ref()
	}

	#[must_use]
	pub const fn is_frozen(&self) -> bool {
		self.frozen
	}

	pub(crate) fn freeze(&mut self) {
		self.frozen = true;
	}

	pub(crate) fn singleton_or_init(&mut self) -> Gc<Specialization> {
		self.singleton.get_or_insert_with(|| Gc::new(Specialization::default())).clone()
	}
}

impl From<Gc<Object>> for Value {
	fn from(object: Gc<Object>) -> Self {
		Self::Object(object)
	}
}

/// The root of the builtin hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct BasicObjectClass;

impl Singleton for BasicObjectClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "BasicObject";
					public "==" => function funcs::eql,
					public "equal?" => function funcs::eql,
					public "!" => function funcs::not,
				}
			})
			.clone()
	}
}

/// The default superclass, which mixes in [`KernelModule`].
#[derive(Debug, Clone, Copy)]
pub struct ObjectClass;

impl Singleton for ObjectClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Object", superclass BasicObjectClass::instance(), include KernelModule::instance(); }
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn eql(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		Ok(obj.is_identical(&args[0]).into())
	}

	pub fn not(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok((!obj.is_truthy()).into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn modules_cannot_be_instantiated() {
		assert_matches!(
			Object::instantiate(&KernelModule::instance()).unwrap_err().kind,
			ErrorKind::Type(msg) if msg == "can't instantiate module Kernel"
		);
	}

	#[test]
	fn object_ancestors() {
		let names = ObjectClass::instance()
			.linearization()
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>();

		assert_eq!(vec!["Object", "Kernel", "BasicObject"], names);
	}
}
