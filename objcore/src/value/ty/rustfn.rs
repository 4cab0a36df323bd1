use crate::value::{Args, Convertible, NamedType, Symbol};
use crate::{ErrorKind, Result, Value};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// The signature of every native member: the receiver, then its arguments.
pub type Function = dyn Fn(&Value, Args<'_>) -> Result<Value> + Send + Sync;

/// A named native function that can be installed as a member.
#[derive(Clone)]
pub struct RustFn {
	name: Symbol,
	func: Arc<Function>,
}

sa::assert_impl_all!(RustFn: Send, Sync);

impl crate::value::NamedType for RustFn {
	const TYPENAME: crate::value::Typename = "RustFn";
}

impl RustFn {
	pub fn new<F>(name: impl Into<Symbol>, func: F) -> Self
	where
		F: Fn(&Value, Args<'_>) -> Result<Value> + Send + Sync + 'static,
	{
		Self { name: name.into(), func: Arc::new(func) }
	}

	/// Creates a function whose receiver must be a `T`.
	pub fn method<T, F>(name: impl Into<Symbol>, func: F) -> Self
	where
		T: Convertible + NamedType + 'static,
		F: Fn(T, Args<'_>) -> Result<Value> + Send + Sync + 'static,
	{
		Self::new(name, move |this: &Value, args: Args<'_>| {
			let this = T::downcast(this).ok_or_else(|| {
				ErrorKind::Type(format!("{} expected, got {}", T::TYPENAME, this.class().name()))
			})?;

			func(this, args)
		})
	}

	#[must_use]
	pub const fn name(&self) -> &Symbol {
		&self.name
	}

	pub fn call(&self, this: &Value, args: Args<'_>) -> Result<Value> {
		(self.func)(this, args)
	}
}

impl Eq for RustFn {}
impl PartialEq for RustFn {
	fn eq(&self, rhs: &Self) -> bool {
		Arc::ptr_eq(&self.func, &rhs.func)
	}
}

impl Debug for RustFn {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "RustFn({:?}:{:p})", self.name.as_str(), Arc::as_ptr(&self.func) as *const u8)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ty::Integer;

	#[test]
	fn method_checks_the_receiver() {
		let double = RustFn::method("double", |int: Integer, _| Ok(Value::from(int * 2)));

		assert_eq!(Value::Integer(4), double.call(&Value::Integer(2), Args::default()).unwrap());
		assert_matches!(
			double.call(&Value::Null, Args::default()).unwrap_err().kind,
			ErrorKind::Type(msg) if msg == "Integer expected, got Null"
		);
	}

	#[test]
	fn equality_is_identity() {
		let noop = RustFn::new("noop", |_, _| Ok(Value::Null));
		let other = RustFn::new("noop", |_, _| Ok(Value::Null));

		assert_eq!(noop, noop.clone());
		assert_ne!(noop, other);
	}
}
