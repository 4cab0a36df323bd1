use crate::convert;
use crate::value::ty::{numeric, Class, InstanceOf, NumericClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{Result, Value};

pub type Float = f64;

impl crate::value::NamedType for Float {
	const TYPENAME: crate::value::Typename = "Float";
}

impl Convertible for Float {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Float(float) => Some(*float),
			_ => None,
		}
	}
}

impl InstanceOf for Float {
	type Class = FloatClass;
}

#[derive(Debug, Clone, Copy)]
pub struct FloatClass;

impl Singleton for FloatClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Float", superclass NumericClass::instance();
					public Intern::to_f => method funcs::to_f,
					public Intern::to_i => method funcs::to_i,
					public Intern::to_int => method funcs::to_i,
					public Intern::to_s => method funcs::to_s,
					public Intern::inspect => method funcs::to_s,
					public Intern::op_cmp => function numeric::funcs::cmp,
					public "nan?" => method funcs::is_nan,
					public "infinite?" => method funcs::is_infinite,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn to_f(float: Float, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(float.into())
	}

	/// Truncates towards zero; fails for `NaN` and the infinities.
	pub fn to_i(float: Float, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		convert::to_integer(&float.into(), None)
	}

	pub fn to_s(float: Float, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(convert::float::render(float)).into())
	}

	pub fn is_nan(float: Float, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(float.is_nan().into())
	}

	pub fn is_infinite(float: Float, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(float.is_infinite().into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Probe;
	use crate::Family;

	#[test]
	fn to_i_truncates() {
		assert_eq!(Value::Integer(-2), Value::from(-2.9).call_attr("to_i", Args::default()).unwrap());
		assert_eq!(
			Family::DomainError,
			Value::from(Float::NAN).call_attr("to_int", Args::default()).unwrap_err().family()
		);
	}

	#[test]
	fn to_s() {
		assert_eq!(Value::from("2.5"), Value::from(2.5).call_attr("to_s", Args::default()).unwrap());
	}
}
