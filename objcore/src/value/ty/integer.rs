use crate::convert;
use crate::value::ty::{numeric, Class, Float, InstanceOf, NumericClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc};
use crate::{ErrorKind, Result, Value};

pub type Integer = i64;

/// Integers that don't fit into an [`Integer`]. Values that do are always normalized back into one
/// when converted into a [`Value`].
pub type BigInteger = num_bigint::BigInt;

impl crate::value::NamedType for Integer {
	const TYPENAME: crate::value::Typename = "Integer";
}

impl Convertible for Integer {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Integer(integer) => Some(*integer),
			_ => None,
		}
	}
}

impl InstanceOf for Integer {
	type Class = IntegerClass;
}

#[derive(Debug, Clone, Copy)]
pub struct IntegerClass;

impl Singleton for IntegerClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Integer", superclass NumericClass::instance();
					public Intern::to_int => function funcs::to_int,
					public Intern::to_i => function funcs::to_int,
					public Intern::to_f => function funcs::to_f,
					public Intern::to_s => function funcs::to_s,
					public Intern::inspect => function funcs::inspect,
					public Intern::op_cmp => function numeric::funcs::cmp,
				}
			})
			.clone()
	}
}

/// Parses an optional radix argument, as given to `Integer#to_s` and `Text#to_i`.
pub(crate) fn radix_argument(args: Args<'_>, default: i64) -> Result<i64> {
	args.assert_positional_range(0..=1)?;

	match args.get(0) {
		None => Ok(default),
		Some(Value::Integer(radix)) => Ok(*radix),
		Some(other) => Err(ErrorKind::Argument(format!("invalid radix {other:?}")).into()),
	}
}

pub mod funcs {
	use super::*;
	use num_traits::ToPrimitive;

	fn not_an_integer(obj: &Value) -> crate::Error {
		ErrorKind::Type(format!("Integer expected, got {}", obj.class().name())).into()
	}

	pub fn to_int(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		match obj {
			Value::Integer(_) | Value::BigInteger(_) => Ok(obj.clone()),
			_ => Err(not_an_integer(obj)),
		}
	}

	pub fn to_f(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		let float: Float = match obj {
			Value::Integer(integer) => *integer as Float,
			Value::BigInteger(integer) => integer.to_f64().unwrap_or(Float::INFINITY),
			_ => return Err(not_an_integer(obj)),
		};

		Ok(float.into())
	}

	/// `to_s(radix = 10)`
	pub fn to_s(obj: &Value, args: Args<'_>) -> Result<Value> {
		let radix = convert::integer::check_render_radix(radix_argument(args, 10)?)?;

		let text = match obj {
			Value::Integer(integer) => convert::integer::render(*integer, radix),
			Value::BigInteger(integer) => integer.to_str_radix(radix),
			_ => return Err(not_an_integer(obj)),
		};

		Ok(Text::from(text).into())
	}

	pub fn inspect(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		to_s(obj, Args::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Probe;

	fn to_s(value: Value, radix: i64) -> Value {
		value.call_attr("to_s", Args::new(&[Value::Integer(radix)])).unwrap()
	}

	#[test]
	fn rendering() {
		assert_eq!(Value::from("255"), to_s(Value::Integer(255), 10));
		assert_eq!(Value::from("-1010"), to_s(Value::Integer(-10), 2));

		let Value::Text(base36) = to_s(Value::Integer(35 * 36 + 35), 36) else { panic!("not text") };
		assert_eq!(Value::Integer(35 * 36 + 35), convert::integer::parse(base36.as_str(), 36).unwrap());

		let big: BigInteger = BigInteger::from(i64::MAX) * 4u32;
		assert_eq!(Value::from(big.to_string()), to_s(Value::from(big.clone()), 10));
	}

	#[test]
	fn invalid_radix() {
		let err = Value::Integer(1).call_attr("to_s", Args::new(&[Value::Integer(37)])).unwrap_err();
		assert_matches!(err.kind, ErrorKind::Argument(msg) if msg == "invalid radix 37");
	}

	#[test]
	fn conversions() {
		assert_eq!(Value::from(2.0), Value::Integer(2).call_attr("to_f", Args::default()).unwrap());
		assert_eq!(Value::Integer(2), Value::Integer(2).invoke(crate::Intern::to_int, Args::default()).unwrap());
	}
}
