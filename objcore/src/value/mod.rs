//! The object model the coercion engine and member resolver read from.

pub mod ty;

mod ancestor;
mod args;
pub mod gc;
mod intern;
mod methods;
mod probe;
mod symbol;
mod value;

pub use ancestor::Ancestor;
pub use args::Args;
pub use gc::Gc;
pub use intern::Intern;
pub use methods::{Member, MethodTable, Visibility};
pub use probe::Probe;
pub use symbol::Symbol;
pub use value::Value;

pub type Typename = &'static str;

/// A type with a fixed name, used when reporting errors about it.
pub trait NamedType {
	const TYPENAME: Typename;
}

/// A type that can be extracted from a [`Value`].
pub trait Convertible: Sized {
	/// Gets `Self` out of `value`, if `value` is one.
	fn downcast(value: &Value) -> Option<Self>;

	/// Checks to see if `value` is a `Self`.
	fn is_a(value: &Value) -> bool {
		Self::downcast(value).is_some()
	}
}

pub trait ToValue {
	fn to_value(self) -> Value;
}

impl<T: Into<Value>> ToValue for T {
	fn to_value(self) -> Value {
		self.into()
	}
}
