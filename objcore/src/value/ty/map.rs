use crate::value::ty::{Class, InstanceOf, List, ObjectClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{Result, Value};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// An immutable, insertion-ordered mapping.
///
/// Keys are compared by equality; lookups are linear.
#[derive(Clone, PartialEq, Default, NamedType)]
pub struct Map(Arc<Vec<(Value, Value)>>);

impl Map {
	/// Creates a new map out of `pairs`. Later pairs replace earlier ones with an equal key.
	#[must_use]
	pub fn new(pairs: Vec<(Value, Value)>) -> Self {
		let mut entries: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());

		for (key, value) in pairs {
			if let Some(entry) = entries.iter_mut().find(|(existing, _)| *existing == key) {
				entry.1 = value;
			} else {
				entries.push((key, value));
			}
		}

		Self(Arc::new(entries))
	}

	#[must_use]
	pub fn get(&self, key: &Value) -> Option<&Value> {
		self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
		self.0.iter().map(|(key, value)| (key, value))
	}

	/// Checks to see if `self` and `rhs` share the same allocation.
	#[must_use]
	pub fn ptr_eq(&self, rhs: &Self) -> bool {
		Arc::ptr_eq(&self.0, &rhs.0)
	}
}

impl From<Map> for Value {
	fn from(map: Map) -> Self {
		Self::Map(map)
	}
}

impl Debug for Map {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("{")?;

		for (idx, (key, value)) in self.iter().enumerate() {
			if idx != 0 {
				f.write_str(", ")?;
			}

			write!(f, "{key:?} => {value:?}")?;
		}

		f.write_str("}")
	}
}

impl Convertible for Map {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Map(map) => Some(map.clone()),
			_ => None,
		}
	}
}

impl InstanceOf for Map {
	type Class = MapClass;
}

#[derive(Debug, Clone, Copy)]
pub struct MapClass;

impl Singleton for MapClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Map", superclass ObjectClass::instance();
					public Intern::to_hash => method funcs::itself,
					public Intern::to_a => method funcs::to_a,
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

	pub fn itself(map: Map, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(map.into())
	}

	/// Each entry as a two-element list.
	pub fn to_a(map: Map, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		let pairs = map
			.iter()
			.map(|(key, value)| Value::from(List::new(vec![key.clone(), value.clone()])))
			.collect::<List>();

		Ok(pairs.into())
	}

	pub fn inspect(map: Map, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(format!("{map:?}")).into())
	}

	pub fn length(map: Map, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Integer(map.len() as i64))
	}

	pub fn is_empty(map: Map, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(map.is_empty().into())
	}
}
