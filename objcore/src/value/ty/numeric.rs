use crate::value::ty::{BigInteger, Class, ComparableModule, ObjectClass, Singleton};
use crate::value::Gc;
use crate::Value;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

/// The superclass of [`IntegerClass`](crate::value::ty::IntegerClass) and
/// [`FloatClass`](crate::value::ty::FloatClass).
#[derive(Debug, Clone, Copy)]
pub struct NumericClass;

impl Singleton for NumericClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Numeric", superclass ObjectClass::instance(), include ComparableModule::instance();
					public "integer?" => function funcs::is_integer,
				}
			})
			.clone()
	}
}

fn as_float(value: &Value) -> Option<f64> {
	match value {
		Value::Integer(integer) => Some(*integer as f64),
		Value::BigInteger(integer) => integer.to_f64(),
		Value::Float(float) => Some(*float),
		_ => None,
	}
}

/// Compares two numbers, exactly if both are integers. Returns `None` if either isn't a number or
/// a `NaN` is involved.
#[must_use]
pub fn compare(lhs: &Value, rhs: &Value) -> Option<Ordering> {
	match (lhs, rhs) {
		(Value::Integer(lhs), Value::Integer(rhs)) => Some(lhs.cmp(rhs)),
		(Value::BigInteger(lhs), Value::BigInteger(rhs)) => Some(lhs.cmp(rhs)),
		(Value::Integer(lhs), Value::BigInteger(rhs)) => Some(BigInteger::from(*lhs).cmp(rhs)),
		(Value::BigInteger(lhs), Value::Integer(rhs)) => Some(lhs.cmp(&BigInteger::from(*rhs))),
		_ => as_float(lhs)?.partial_cmp(&as_float(rhs)?),
	}
}

pub mod funcs {
	use super::*;
	use crate::value::Args;
	use crate::Result;

	pub fn is_integer(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(matches!(obj, Value::Integer(_) | Value::BigInteger(_)).into())
	}

	/// `<=>`, returning `null` for incomparable values.
	pub fn cmp(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		Ok(compare(obj, &args[0]).map_or(Value::Null, |ordering| Value::from(ordering as i64)))
	}
}
