#![allow(dead_code)]

use objcore::value::ty::{Class, Object, RustFn};
use objcore::value::{Gc, Visibility};
use objcore::{Result, Value};

/// Installs a subscriber printing at the level named by `OBJCORE_LOGGING`, if it's set.
pub fn setup_tracing() {
	use tracing::level_filters::LevelFilter;

	let loglevel = std::env::var("OBJCORE_LOGGING");
	let filter = match loglevel.as_ref().map(|x| x.as_ref()) {
		Ok("T") | Ok("TRACE") => LevelFilter::TRACE,
		Ok("D") | Ok("DEBUG") => LevelFilter::DEBUG,
		Ok("I") | Ok("INFO") => LevelFilter::INFO,
		Ok("W") | Ok("WARN") => LevelFilter::WARN,
		Ok("E") | Ok("ERROR") => LevelFilter::ERROR,
		Ok("O") | Ok("OFF") => LevelFilter::OFF,
		_ => return,
	};

	// every test calls this, and only the first one gets to install it.
	let _ = tracing_subscriber::fmt().with_max_level(filter).with_test_writer().try_init();
}

/// A member that returns `value` no matter what it's called with.
pub fn returns(name: &str, value: Value) -> RustFn {
	RustFn::new(name, move |_, _| Ok(value.clone()))
}

/// A member that returns its receiver.
pub fn noop(name: &str) -> RustFn {
	RustFn::new(name, |this, _| Ok(this.clone()))
}

pub fn instance(class: &Gc<Class>) -> Value {
	Object::instantiate(class).expect("instantiating a class").into()
}

/// An object whose class defines each of `members` publicly, each returning the paired value.
pub fn object_with(members: &[(&str, Value)]) -> Value {
	let class = members
		.iter()
		.fold(Class::builder("Convertible"), |builder, (name, value)| {
			builder.public(*name, returns(name, value.clone()))
		})
		.finish()
		.expect("building the class");

	instance(&class)
}

pub fn define(object: &Value, name: &str, visibility: Visibility) -> Result<()> {
	object.define_singleton_method(name, visibility, Some(noop(name)))
}

pub fn strings<'a>(names: impl IntoIterator<Item = &'a objcore::Symbol>) -> Vec<&'a str> {
	names.into_iter().map(|name| name.as_str()).collect()
}
