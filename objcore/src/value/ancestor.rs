use crate::value::ty::{Class, Specialization};
use crate::value::{Gc, Member, MethodTable};
use std::fmt::{self, Debug, Display, Formatter};

/// A single layer of a lookup chain.
///
/// Walks that only look at a value's own specializations stop at the first `Concrete` node, so the
/// distinction between the three kinds matters beyond where the members are stored.
#[derive(Clone, PartialEq)]
pub enum Ancestor {
	/// A class in the superclass chain.
	Concrete(Gc<Class>),

	/// A module that was included into a class, or that an object was extended with.
	Mixin(Gc<Class>),

	/// A per-object member table.
	Specialization(Gc<Specialization>),
}

impl Ancestor {
	/// Creates the node for `class` itself, based on whether it's a class or module.
	#[must_use]
	pub fn of(class: &Gc<Class>) -> Self {
		if class.as_ref().is_module() {
			Self::Mixin(class.clone())
		} else {
			Self::Concrete(class.clone())
		}
	}

	#[must_use]
	pub const fn is_concrete(&self) -> bool {
		matches!(self, Self::Concrete(_))
	}

	#[must_use]
	pub const fn class(&self) -> Option<&Gc<Class>> {
		match self {
			Self::Concrete(class) | Self::Mixin(class) => Some(class),
			Self::Specialization(_) => None,
		}
	}

	/// Runs `func` with the member table of this layer.
	///
	/// The layer is read-locked for the duration of `func`, so it mustn't call back into anything
	/// that could lock it again.
	pub fn with_methods<R>(&self, func: impl FnOnce(&MethodTable) -> R) -> R {
		match self {
			Self::Concrete(class) | Self::Mixin(class) => func(class.as_ref().methods()),
			Self::Specialization(spec) => func(spec.as_ref().methods()),
		}
	}

	/// Gets this layer's entry for `name`, if it has one.
	#[must_use]
	pub fn member(&self, name: &str) -> Option<Member> {
		self.with_methods(|methods| methods.get(name).cloned())
	}
}

impl Display for Ancestor {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Concrete(class) | Self::Mixin(class) => Display::fmt(class.as_ref().name(), f),
			Self::Specialization(spec) => write!(f, "#<specialization {:#x}>", spec.id()),
		}
	}
}

impl Debug for Ancestor {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Concrete(_) => write!(f, "Concrete({self})"),
			Self::Mixin(_) => write!(f, "Mixin({self})"),
			Self::Specialization(spec) => write!(f, "Specialization({:#x})", spec.id()),
		}
	}
}
