use crate::value::{Intern, Symbol, Typename, Value};
use std::fmt::{self, Display, Formatter};

/// An error type that contains an [`ErrorKind`] and, optionally, the error it was raised in
/// response to.
#[derive(Debug)]
#[must_use]
pub struct Error {
	pub kind: ErrorKind,
	pub cause: Option<Box<Error>>,
}

/// Type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors that can be raised while coercing values or reflecting over them.
#[derive(Debug)]
#[must_use]
#[non_exhaustive]
pub enum ErrorKind {
	/// The input had the wrong shape for the operation, such as an empty numeric text or a radix
	/// given alongside a non-text value.
	Argument(String),

	/// The value's type is fundamentally incompatible with what was requested.
	Type(String),

	/// The value is of a compatible kind, but outside of the representable domain (eg `NaN` to an
	/// integer, or a malformed float literal).
	Domain(String),

	/// The conversion member `via` of `object` was called, but the result wasn't an `into`.
	ConversionFailed {
		object: Value,
		into: Typename,
		via: Intern,
		returned: Value,
	},

	/// Attempted to invoke the unknown (or undefined) member `attribute` on `object`.
	UnknownAttribute {
		object: Value,
		attribute: Symbol,
	},

	/// Attempted to look up the unknown (or undefined) member `attribute` on `object`.
	UndefinedMethod {
		object: Value,
		attribute: Symbol,
	},

	/// A member was declared for reflection purposes but carries no native body.
	NotImplemented {
		object: Value,
		attribute: Symbol,
	},

	/// A function was given the wrong amount of arguments.
	PositionalArgumentMismatch {
		given: usize,
		expected: &'static str,
	},

	/// Mutation of a [frozen value](crate::Value::freeze) was attempted.
	ValueFrozen(Value),

	/// A `Gc` of the given type was already borrowed when exclusive access was requested.
	AlreadyLocked(Typename),

	/// Raised by native members that don't fit any other kind.
	Message(String),
}

/// The abstract error classes each [`ErrorKind`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
	ArgumentError,
	TypeError,
	DomainError,
	NoMethodError,
	NameError,
	FrozenError,
	RuntimeError,
}

impl ErrorKind {
	/// Gets the abstract class this error is reported as.
	pub const fn family(&self) -> Family {
		match self {
			Self::Argument(_) | Self::PositionalArgumentMismatch { .. } => Family::ArgumentError,
			Self::Type(_) | Self::ConversionFailed { .. } => Family::TypeError,
			Self::Domain(_) => Family::DomainError,
			Self::UnknownAttribute { .. } => Family::NoMethodError,
			Self::UndefinedMethod { .. } => Family::NameError,
			Self::ValueFrozen(_) => Family::FrozenError,
			Self::NotImplemented { .. } | Self::AlreadyLocked(_) | Self::Message(_) => {
				Family::RuntimeError
			}
		}
	}
}

impl Error {
	/// Creates a new error of `kind`, recording `cause` as the error it replaces.
	pub fn with_cause(kind: ErrorKind, cause: Self) -> Self {
		Self { kind, cause: Some(Box::new(cause)) }
	}

	/// Shorthand for `self.kind.family()`.
	#[must_use]
	pub const fn family(&self) -> Family {
		self.kind.family()
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.kind, f)?;

		if f.alternate() {
			if let Some(cause) = &self.cause {
				write!(f, "\ncaused by: {cause:#}")?;
			}
		}

		Ok(())
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Argument(msg) | Self::Type(msg) | Self::Domain(msg) | Self::Message(msg) => {
				f.write_str(msg)
			}
			Self::ConversionFailed { object, into, via, returned } => {
				let class = object.class().name();
				write!(f, "can't convert {class} to {into} ({class}#{via} gives {})", returned.class().name())
			}
			Self::UnknownAttribute { object, attribute }
			| Self::UndefinedMethod { object, attribute } => {
				write!(f, "undefined method `{attribute}' for {object:?}")
			}
			Self::NotImplemented { object, attribute } => {
				write!(f, "method `{attribute}' for {object:?} has no implementation")
			}
			Self::PositionalArgumentMismatch { given, expected } => {
				write!(f, "wrong number of arguments (given {given}, expected {expected})")
			}
			Self::ValueFrozen(value) => write!(f, "can't modify frozen {}", value.class().name()),
			Self::AlreadyLocked(typename) => write!(f, "{typename} is already locked"),
		}
	}
}

impl From<String> for ErrorKind {
	fn from(msg: String) -> Self {
		Self::Message(msg)
	}
}

impl From<String> for Error {
	fn from(msg: String) -> Self {
		ErrorKind::from(msg).into()
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Self {
		Self { kind, cause: None }
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.cause.as_deref().map(|cause| cause as &(dyn std::error::Error + 'static))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn families() {
		assert_eq!(Family::ArgumentError, ErrorKind::Argument("x".into()).family());
		assert_eq!(Family::TypeError, ErrorKind::Type("x".into()).family());
		assert_eq!(Family::DomainError, ErrorKind::Domain("x".into()).family());
		assert_eq!(
			Family::NoMethodError,
			ErrorKind::UnknownAttribute { object: Value::Null, attribute: Symbol::new("x") }.family()
		);
		assert_eq!(Family::RuntimeError, ErrorKind::from("x".to_string()).family());
	}

	#[test]
	fn cause_is_exposed_as_source() {
		use std::error::Error as _;

		let inner = Error::from(ErrorKind::Domain("inner".into()));
		let outer = Error::with_cause(ErrorKind::Type("outer".into()), inner);

		assert_eq!("outer", outer.to_string());
		assert_eq!("outer\ncaused by: inner", format!("{outer:#}"));
		assert_eq!("inner", outer.source().unwrap().to_string());
	}
}
