//! The builtin classes, and the types backing each kind of [`Value`](crate::Value).

#[macro_use]
mod macros;

pub mod boolean;
pub mod class;
pub mod comparable;
pub mod float;
pub mod integer;
pub mod kernel;
pub mod list;
pub mod map;
pub mod null;
pub mod numeric;
pub mod object;
pub mod rustfn;
pub mod specialization;
pub mod symbol;
pub mod text;

pub use boolean::{Boolean, BooleanClass};
pub use class::{Class, ClassClass, ClassKind, ModuleClass};
pub use comparable::ComparableModule;
pub use float::{Float, FloatClass};
pub use integer::{BigInteger, Integer, IntegerClass};
pub use kernel::KernelModule;
pub use list::{List, ListClass};
pub use map::{Map, MapClass};
pub use null::{Null, NullClass};
pub use numeric::NumericClass;
pub use object::{BasicObjectClass, Object, ObjectClass};
pub use rustfn::RustFn;
pub use specialization::Specialization;
pub use symbol::SymbolClass;
pub use text::{Text, TextClass};

use crate::value::Gc;

/// A builtin class, which is created the first time it's requested.
pub trait Singleton: Sized {
	fn instance() -> Gc<Class>;
}

/// Associates a value type with its builtin class.
pub trait InstanceOf {
	type Class: Singleton;
}
