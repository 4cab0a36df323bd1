mod common;

use assert_matches::assert_matches;
use common::*;
use objcore::convert::{self, integer};
use objcore::value::ty::{BigInteger, List, Map, ObjectClass, RustFn, Singleton, Text};
use objcore::value::{Args, Probe};
use objcore::{ErrorKind, Family, Intern, Value};

fn render(value: &Value, radix: i64) -> String {
	setup_tracing();

	match value.call_attr("to_s", Args::new(&[Value::Integer(radix)])).unwrap() {
		Value::Text(text) => text.as_str().to_string(),
		other => panic!("to_s returned {other:?}"),
	}
}

#[test]
fn integers_round_trip_through_text_at_every_radix() {
	let samples = [0, 1, -1, 7, 36, -255, 1_000_000, i64::MAX, i64::MIN];

	for radix in integer::MIN_RADIX..=integer::MAX_RADIX {
		for sample in samples {
			let rendered = render(&Value::Integer(sample), radix);
			let parsed = convert::to_integer(&Value::from(rendered.as_str()), Some(radix)).unwrap();

			assert_eq!(Value::Integer(sample), parsed, "{sample} in radix {radix} ({rendered})");
		}
	}

	let big = Value::from(BigInteger::from(i64::MAX) * 1000u32 + 17u32);
	for radix in [2, 10, 16, 36] {
		let rendered = render(&big, radix);
		assert_eq!(big, convert::to_integer(&Value::from(rendered.as_str()), Some(radix)).unwrap());
	}
}

#[test]
fn integer_from_text() {
	setup_tracing();

	assert_eq!(Value::Integer(255), convert::to_integer(&Value::from("0xff"), None).unwrap());
	assert_eq!(Value::Integer(-42), convert::to_integer(&Value::from("  -42\n"), None).unwrap());
	assert_eq!(Value::Integer(35), convert::to_integer(&Value::from("z"), Some(36)).unwrap());

	assert_matches!(
		convert::to_integer(&Value::from(""), None).unwrap_err().kind,
		ErrorKind::Argument(msg) if msg.contains("empty string")
	);
	assert_matches!(
		convert::to_integer(&Value::from("12z"), None).unwrap_err().kind,
		ErrorKind::Argument(msg) if msg == r#"invalid value for Integer(): "12z""#
	);
	assert_matches!(
		convert::to_integer(&Value::from("1"), Some(37)).unwrap_err().kind,
		ErrorKind::Argument(msg) if msg == "invalid radix 37"
	);
}

#[test]
fn integer_argument_errors() {
	setup_tracing();

	assert_matches!(
		convert::to_integer(&Value::Integer(1), Some(10)).unwrap_err().kind,
		ErrorKind::Argument(msg) if msg == "base specified for non-text value"
	);

	let err = convert::to_integer(&Value::Null, None).unwrap_err();
	assert_eq!(Family::TypeError, err.family());
}

#[test]
fn integer_domain_errors() {
	setup_tracing();

	for float in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
		let err = convert::to_integer(&Value::from(float), None).unwrap_err();
		assert_eq!(Family::DomainError, err.family(), "{float}");
	}

	assert_eq!(Value::Integer(2), convert::to_integer(&Value::from(2.9), None).unwrap());
	assert_eq!(Value::Integer(0), convert::to_integer(&Value::from(-0.5), None).unwrap());
}

#[test]
fn exact_integer_conversion_is_trusted() {
	setup_tracing();

	let exact = object_with(&[("to_int", Value::from("not an integer")), ("to_i", Value::Integer(1))]);
	assert_eq!(Value::from("not an integer"), convert::to_integer(&exact, None).unwrap());

	// a falsy result is the same as not having it
	let falls_through = object_with(&[("to_int", Value::Null), ("to_i", Value::Integer(7))]);
	assert_eq!(Value::Integer(7), convert::to_integer(&falls_through, None).unwrap());

	let declined = object_with(&[("to_int", Value::Boolean(false)), ("to_i", Value::Integer(7))]);
	assert_eq!(Value::Integer(7), convert::to_integer(&declined, None).unwrap());

	let list = Value::from(List::new(vec![Value::Integer(1)]));
	let declined = object_with(&[("to_ary", Value::Boolean(false)), ("to_a", list.clone())]);
	assert_eq!(list, convert::to_sequence(&declined).unwrap());
}

#[test]
fn weak_integer_conversion_is_validated() {
	setup_tracing();

	let weak = object_with(&[("to_i", Value::from("12"))]);
	let err = convert::to_integer(&weak, None).unwrap_err();

	assert_eq!(Family::TypeError, err.family());
	assert_matches!(
		err.kind,
		ErrorKind::ConversionFailed { into: "Integer", via: Intern::to_i, returned: Value::Text(_), .. }
	);

	let nothing = object_with(&[]);
	assert_matches!(
		convert::to_integer(&nothing, None).unwrap_err().kind,
		ErrorKind::Type(msg) if msg == "can't convert Convertible into Integer"
	);
}

#[test]
fn private_conversions_are_not_capabilities() {
	setup_tracing();

	let object = object_with(&[]);
	object.define_singleton_method("to_i", objcore::value::Visibility::Private, Some(returns("to_i", Value::Integer(1)))).unwrap();

	assert!(!object.probe(Intern::to_i));
	assert_eq!(Family::TypeError, convert::to_integer(&object, None).unwrap_err().family());
}

#[test]
fn floats() {
	setup_tracing();

	assert_eq!(Value::from(1.5), convert::to_float(&Value::from("1.5")).unwrap());
	assert_eq!(Value::from(3.0), convert::to_float(&Value::Integer(3)).unwrap());
	assert_eq!(Value::from(0.25), convert::to_float(&object_with(&[("to_f", Value::from(0.25))])).unwrap());

	assert_eq!(Family::DomainError, convert::to_float(&Value::from("1.5.5")).unwrap_err().family());
	assert_eq!(Family::TypeError, convert::to_float(&object_with(&[])).unwrap_err().family());
	assert_eq!(Family::TypeError, convert::to_float(&Value::Null).unwrap_err().family());

	assert_matches!(
		convert::to_float(&object_with(&[("to_f", Value::Integer(1))])).unwrap_err().kind,
		ErrorKind::ConversionFailed { into: "Float", .. }
	);
}

#[test]
fn strict_floats_only_raise_type_errors() {
	setup_tracing();

	for value in [Value::from("1.5"), Value::Null, object_with(&[])] {
		let err = convert::to_float_strict(&value).unwrap_err();
		assert_eq!(Family::TypeError, err.family(), "{value:?}");
	}

	assert_eq!(Value::from(1.0), convert::to_float_strict(&Value::from(1.0)).unwrap());
}

#[test]
fn sequences_never_fail() {
	setup_tracing();

	let plain = object_with(&[]);
	let wrapped = convert::to_sequence(&plain).unwrap();
	let Value::List(list) = &wrapped else { panic!("not a list: {wrapped:?}") };
	assert_eq!(1, list.len());
	assert!(list.as_slice()[0].is_identical(&plain));

	for value in [Value::Integer(5), Value::from("a"), Value::from(1.5), Value::Boolean(true)] {
		assert_eq!(Value::from(List::new(vec![value.clone()])), convert::to_sequence(&value).unwrap());
	}

	assert_eq!(Value::from(List::default()), convert::to_sequence(&Value::Null).unwrap());
}

#[test]
fn sequence_tiers() {
	setup_tracing();

	let list = Value::from(List::new(vec![Value::Integer(1), Value::Integer(2)]));

	let exact = object_with(&[("to_ary", list.clone()), ("to_a", Value::Null)]);
	assert_eq!(list, convert::to_sequence(&exact).unwrap());

	let weak = object_with(&[("to_a", list.clone())]);
	assert_eq!(list, convert::to_sequence(&weak).unwrap());

	let null_weak = object_with(&[("to_ary", Value::Null), ("to_a", Value::Null)]);
	assert_eq!(Value::from(List::new(vec![null_weak.clone()])), convert::to_sequence(&null_weak).unwrap());

	let broken = object_with(&[("to_a", Value::Integer(1))]);
	assert_matches!(
		convert::to_sequence(&broken).unwrap_err().kind,
		ErrorKind::ConversionFailed { into: "List", via: Intern::to_a, .. }
	);
}

#[test]
fn mappings() {
	setup_tracing();

	let empty = Value::from(Map::default());
	assert_eq!(empty, convert::to_mapping(&Value::Null).unwrap());
	assert_eq!(empty, convert::to_mapping(&Value::from(List::default())).unwrap());

	let map = Value::from(Map::new(vec![(Value::from("a"), Value::Integer(1))]));
	assert!(convert::to_mapping(&map).unwrap().is_identical(&map));
	assert_eq!(map, convert::to_mapping(&object_with(&[("to_hash", map.clone())])).unwrap());

	assert_matches!(
		convert::to_mapping(&Value::from(List::new(vec![Value::Integer(1)]))).unwrap_err().kind,
		ErrorKind::Type(msg) if msg == "can't convert List into Map"
	);
	assert_matches!(
		convert::to_mapping(&Value::Integer(1)).unwrap_err().kind,
		ErrorKind::Type(msg) if msg == "can't convert Integer into Map"
	);
}

#[test]
fn text() {
	setup_tracing();

	assert_eq!(Value::from("12"), convert::to_text(&Value::Integer(12)).unwrap());
	assert_eq!(Value::from("1.0e+20"), convert::to_text(&Value::from(1e20)).unwrap());
	assert_eq!(Value::from(""), convert::to_text(&Value::Null).unwrap());
	assert_eq!(Value::from("a"), convert::to_text(&Value::from(objcore::Symbol::new("a"))).unwrap());

	let object = instance(&ObjectClass::instance());
	assert_eq!(Value::from("#<Object>"), convert::to_text(&object).unwrap());

	assert_matches!(
		convert::to_text(&object_with(&[])).unwrap_err().kind,
		ErrorKind::Type(msg) if msg == "can't convert Convertible into Text"
	);
	assert_matches!(
		convert::to_text(&object_with(&[("to_s", Value::Integer(1))])).unwrap_err().kind,
		ErrorKind::ConversionFailed { into: "Text", via: Intern::to_s, .. }
	);
}

#[test]
fn missing_members_inside_to_s_become_type_errors() {
	setup_tracing();

	let object = object_with(&[]);
	object
		.define_singleton_method(
			"to_s",
			objcore::value::Visibility::Public,
			Some(RustFn::new("to_s", |this, args| this.call_attr("missing", args))),
		)
		.unwrap();

	let err = convert::to_text(&object).unwrap_err();
	assert_eq!(Family::TypeError, err.family());
	assert_eq!(Some(Family::NoMethodError), err.cause.as_ref().map(|cause| cause.family()));

	// other failures are passed through untouched
	let failing = object_with(&[]);
	failing
		.define_singleton_method(
			"to_s",
			objcore::value::Visibility::Public,
			Some(RustFn::new("to_s", |_, _| Err(ErrorKind::Message("boom".into()).into()))),
		)
		.unwrap();

	assert_matches!(convert::to_text(&failing).unwrap_err().kind, ErrorKind::Message(msg) if msg == "boom");
}

#[test]
fn bodiless_to_s_becomes_a_type_error() {
	setup_tracing();

	let object = object_with(&[]);
	object.define_singleton_method("to_s", objcore::value::Visibility::Public, None).unwrap();

	let err = convert::to_text(&object).unwrap_err();
	assert_matches!(&err.kind, ErrorKind::Type(msg) if msg == "can't convert Convertible into Text");
	assert_matches!(err.cause.as_deref().map(|cause| &cause.kind), Some(ErrorKind::NotImplemented { .. }));
}

#[test]
fn strict_text() {
	setup_tracing();

	let text = Value::from(Text::from("hi"));
	assert!(convert::to_text_strict(&text).unwrap().is_identical(&text));

	assert_eq!(Value::from("hi"), convert::to_text_strict(&object_with(&[("to_str", Value::from("hi"))])).unwrap());

	assert_matches!(
		convert::to_text_strict(&Value::Integer(1)).unwrap_err().kind,
		ErrorKind::Type(msg) if msg == "no implicit conversion of Integer into Text"
	);
	assert_matches!(
		convert::to_text_strict(&object_with(&[("to_str", Value::Integer(1))])).unwrap_err().kind,
		ErrorKind::ConversionFailed { into: "Text", via: Intern::to_str, .. }
	);
}

#[test]
fn kernel_exposes_the_engine() {
	setup_tracing();

	let object = instance(&ObjectClass::instance());

	let call = |name: &str, args: &[Value]| object.call_attr(name, Args::new(args));

	assert_eq!(Value::Integer(10), call("Integer", &[Value::from("a"), Value::Integer(16)]).unwrap());
	assert_eq!(Value::Integer(10), call("Integer", &[Value::from("0xa"), Value::Null]).unwrap());
	assert_eq!(Value::from(2.5), call("Float", &[Value::from("2.5")]).unwrap());
	assert_eq!(Value::from(List::new(vec![Value::Integer(1)])), call("List", &[Value::Integer(1)]).unwrap());
	assert_eq!(Value::from(Map::default()), call("Map", &[Value::Null]).unwrap());
	assert_eq!(Value::from("1"), call("Text", &[Value::Integer(1)]).unwrap());

	// they're private, so aren't capabilities
	assert!(!object.respond_to("Integer", false));
	assert!(object.respond_to("Integer", true));
}
