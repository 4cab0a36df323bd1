//! Coercing arbitrary values into the canonical types.
//!
//! Every canonical type has up to two conversion members. The *exact* member (eg `to_int`) is only
//! defined by types that really are that kind of value, so its result is trusted as-is. The *weak*
//! member (eg `to_i`) is opportunistic, and its result is always checked before being returned.

pub mod float;
pub mod integer;

use crate::value::ty::{BigInteger, Float, Integer, List, Map, Text};
use crate::value::{Args, Intern, NamedType, Probe};
use crate::{Error, ErrorKind, Family, Result, Value};
use num_traits::{FromPrimitive, ToPrimitive};

/// A type that values can be coerced into.
pub trait Canonical: NamedType {
	/// Checks to see if `value` is already of this type.
	fn accepts(value: &Value) -> bool;
}

/// A canonical type with a conversion member whose result is trusted.
pub trait ExactConversion: Canonical {
	const EXACT: Intern;
}

/// A canonical type with a duck-typed conversion member, whose result is validated.
pub trait WeakConversion: Canonical {
	const WEAK: Intern;
}

impl Canonical for Integer {
	fn accepts(value: &Value) -> bool {
		matches!(value, Value::Integer(_) | Value::BigInteger(_))
	}
}

impl ExactConversion for Integer {
	const EXACT: Intern = Intern::to_int;
}

impl WeakConversion for Integer {
	const WEAK: Intern = Intern::to_i;
}

impl Canonical for Float {
	fn accepts(value: &Value) -> bool {
		matches!(value, Value::Float(_))
	}
}

impl WeakConversion for Float {
	const WEAK: Intern = Intern::to_f;
}

impl Canonical for List {
	fn accepts(value: &Value) -> bool {
		matches!(value, Value::List(_))
	}
}

impl ExactConversion for List {
	const EXACT: Intern = Intern::to_ary;
}

impl WeakConversion for List {
	const WEAK: Intern = Intern::to_a;
}

impl Canonical for Map {
	fn accepts(value: &Value) -> bool {
		matches!(value, Value::Map(_))
	}
}

impl ExactConversion for Map {
	const EXACT: Intern = Intern::to_hash;
}

impl Canonical for Text {
	fn accepts(value: &Value) -> bool {
		matches!(value, Value::Text(_))
	}
}

impl ExactConversion for Text {
	const EXACT: Intern = Intern::to_str;
}

impl WeakConversion for Text {
	const WEAK: Intern = Intern::to_s;
}

fn cant_convert<T: Canonical>(value: &Value) -> ErrorKind {
	ErrorKind::Type(format!("can't convert {} into {}", value.class().name(), T::TYPENAME))
}

/// Ensures `returned`, the result of calling `via` on `object`, is a `T`.
pub fn check_convert<T: Canonical>(object: &Value, via: Intern, returned: Value) -> Result<Value> {
	if T::accepts(&returned) {
		Ok(returned)
	} else {
		debug!(target: "coerce", ?object, %via, ?returned, into=T::TYPENAME, "conversion returned the wrong type");
		Err(ErrorKind::ConversionFailed { object: object.clone(), into: T::TYPENAME, via, returned }.into())
	}
}

/// Calls the exact conversion of `T`, if `value` has it. A falsy result counts as not having it.
pub fn try_exact<T: ExactConversion>(value: &Value) -> Result<Option<Value>> {
	if !value.probe(T::EXACT) {
		return Ok(None);
	}

	trace!(target: "coerce", ?value, via=%T::EXACT, into=T::TYPENAME, "exact conversion");

	match value.invoke(T::EXACT, Args::default())? {
		converted if !converted.is_truthy() => Ok(None),
		converted => Ok(Some(converted)),
	}
}

/// Calls the weak conversion of `T`, if `value` has it, and checks the result.
pub fn try_weak<T: WeakConversion>(value: &Value) -> Result<Option<Value>> {
	if !value.probe(T::WEAK) {
		return Ok(None);
	}

	trace!(target: "coerce", ?value, via=%T::WEAK, into=T::TYPENAME, "weak conversion");

	let converted = value.invoke(T::WEAK, Args::default())?;
	check_convert::<T>(value, T::WEAK, converted).map(Some)
}

fn float_to_integer(float: Float) -> Result<Value> {
	if !float.is_finite() {
		return Err(ErrorKind::Domain(format!("unable to coerce {} to Integer", float::render(float))).into());
	}

	BigInteger::from_f64(float.trunc())
		.map(Value::from)
		.ok_or_else(|| ErrorKind::Domain(format!("unable to coerce {} to Integer", float::render(float))).into())
}

/// Converts `value` to an integer.
///
/// Text is parsed in `radix` (`None` detects it from the prefix); a radix for anything else is
/// an `ArgumentError`. Floats are truncated towards zero, and `NaN` and the infinities are domain
/// errors. `null` never becomes zero. Anything else goes through `to_int`, then `to_i`.
pub fn to_integer(value: &Value, radix: Option<i64>) -> Result<Value> {
	if let Value::Text(text) = value {
		if text.is_empty() {
			return Err(ErrorKind::Argument("invalid value for Integer(): (empty string)".into()).into());
		}

		return integer::parse(text.as_str(), radix.unwrap_or(0));
	}

	if radix.is_some() {
		return Err(ErrorKind::Argument("base specified for non-text value".into()).into());
	}

	match value {
		Value::Integer(_) | Value::BigInteger(_) => Ok(value.clone()),
		Value::Float(float) => float_to_integer(*float),
		Value::Null => Err(ErrorKind::Type("can't convert null into Integer".into()).into()),
		_ => {
			if let Some(converted) = try_exact::<Integer>(value)? {
				return Ok(converted);
			}

			try_weak::<Integer>(value)?.ok_or_else(|| cant_convert::<Integer>(value).into())
		}
	}
}

/// Converts `value` to a float. Text must be a complete float literal.
pub fn to_float(value: &Value) -> Result<Value> {
	match value {
		Value::Text(text) => float::parse(text.as_str()).map(Value::Float),
		Value::Float(_) => Ok(value.clone()),
		Value::Integer(integer) => Ok(Value::Float(*integer as Float)),
		Value::BigInteger(integer) => Ok(Value::Float(integer.to_f64().unwrap_or(Float::INFINITY))),
		Value::Null => Err(ErrorKind::Type("can't convert null into Float".into()).into()),
		_ => try_weak::<Float>(value)?.ok_or_else(|| cant_convert::<Float>(value).into()),
	}
}

/// Like [`to_float`], except text isn't accepted and every failure is a `TypeError`.
///
/// This is what's used when a float is required as an argument.
pub fn to_float_strict(value: &Value) -> Result<Value> {
	let error = || ErrorKind::Type(format!("no implicit conversion to float from {}", value.class().name()));

	if let Value::Text(_) = value {
		return Err(error().into());
	}

	to_float(value).map_err(|cause| Error::with_cause(error(), cause))
}

/// Converts `value` to a list, wrapping it in a single-element list if it has no conversion.
pub fn to_sequence(value: &Value) -> Result<Value> {
	if let Value::List(_) = value {
		return Ok(value.clone());
	}

	if let Some(converted) = try_exact::<List>(value)? {
		return Ok(converted);
	}

	if value.probe(List::WEAK) {
		match value.invoke(List::WEAK, Args::default())? {
			Value::Null => {}
			converted => return check_convert::<List>(value, List::WEAK, converted),
		}
	}

	Ok(List::new(vec![value.clone()]).into())
}

/// Converts `value` to a map. Only `null` and the empty list are converted implicitly; anything
/// else needs a `to_hash`.
pub fn to_mapping(value: &Value) -> Result<Value> {
	match value {
		Value::Null => Ok(Map::default().into()),
		Value::List(list) if list.is_empty() => Ok(Map::default().into()),
		Value::Map(_) => Ok(value.clone()),
		_ => try_exact::<Map>(value)?.ok_or_else(|| cant_convert::<Map>(value).into()),
	}
}

/// Converts `value` to text via `to_s`.
///
/// A `to_s` that itself fails because of a missing member, or that is declared without a body,
/// is reported as a `TypeError` about `value`, with the original error as its cause.
pub fn to_text(value: &Value) -> Result<Value> {
	if let Value::Text(_) = value {
		return Ok(value.clone());
	}

	if !value.probe(Text::WEAK) {
		return Err(cant_convert::<Text>(value).into());
	}

	match value.invoke(Text::WEAK, Args::default()) {
		Ok(converted) => check_convert::<Text>(value, Text::WEAK, converted),
		Err(err) if err.family() == Family::NoMethodError
			|| matches!(err.kind, ErrorKind::NotImplemented { .. }) =>
		{
			Err(Error::with_cause(cant_convert::<Text>(value), err))
		}
		Err(err) => Err(err),
	}
}

/// Converts `value` to text via `to_str`, which only text-like values have.
pub fn to_text_strict(value: &Value) -> Result<Value> {
	if let Value::Text(_) = value {
		return Ok(value.clone());
	}

	if !value.probe(Text::EXACT) {
		return Err(
			ErrorKind::Type(format!("no implicit conversion of {} into Text", value.class().name())).into(),
		);
	}

	let converted = value.invoke(Text::EXACT, Args::default())?;
	check_convert::<Text>(value, Text::EXACT, converted)
}
