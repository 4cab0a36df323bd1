use crate::value::ty::{Class, InstanceOf, ObjectClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{Result, Value};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// An immutable sequence of values.
#[derive(Clone, PartialEq, Default, NamedType)]
pub struct List(Arc<Vec<Value>>);

impl List {
	#[must_use]
	pub fn new(elements: Vec<Value>) -> Self {
		Self(Arc::new(elements))
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Value] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	/// Checks to see if `self` and `rhs` share the same allocation.
	#[must_use]
	pub fn ptr_eq(&self, rhs: &Self) -> bool {
		Arc::ptr_eq(&self.0, &rhs.0)
	}
}

impl From<Vec<Value>> for List {
	fn from(elements: Vec<Value>) -> Self {
		Self::new(elements)
	}
}

impl FromIterator<Value> for List {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl From<List> for Value {
	fn from(list: List) -> Self {
		Self::List(list)
	}
}

impl Debug for List {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl Convertible for List {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::List(list) => Some(list.clone()),
			_ => None,
		}
	}
}

impl InstanceOf for List {
	type Class = ListClass;
}

#[derive(Debug, Clone, Copy)]
pub struct ListClass;

impl Singleton for ListClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "List", superclass ObjectClass::instance();
					public Intern::to_ary => method funcs::itself,
					public Intern::to_a => method funcs::itself,
					public Intern::to_s => method funcs::inspect,
					public Intern::inspect => method funcs::inspect,
					public "length" => method funcs::length,
					public "empty?" => method funcs::is_empty,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn itself(list: List, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(list.into())
	}

	pub fn inspect(list: List, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(format!("{list:?}")).into())
	}

	pub fn length(list: List, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Integer(list.len() as i64))
	}

	pub fn is_empty(list: List, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(list.is_empty().into())
	}
}
