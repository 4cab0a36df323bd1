//! Finding individual members, and asking how a value relates to a class.

use crate::value::ty::Class;
use crate::value::{Ancestor, Args, Gc, Member, Probe, Symbol, Visibility};
use crate::{ErrorKind, Result, Value};

/// A member found on a specific value, along with the layer it came from.
#[derive(Debug, Clone)]
pub struct Method {
	pub receiver: Value,
	pub name: Symbol,
	pub owner: Ancestor,
	pub member: Member,
}

impl Method {
	/// Calls the member with its receiver.
	pub fn call(&self, args: Args<'_>) -> Result<Value> {
		match &self.member.body {
			Some(body) => body.call(&self.receiver, args),
			None => Err(ErrorKind::NotImplemented { object: self.receiver.clone(), attribute: self.name.clone() }
				.into()),
		}
	}
}

fn undefined_method(obj: &Value, name: &str) -> crate::Error {
	ErrorKind::UndefinedMethod { object: obj.clone(), attribute: Symbol::new(name) }.into()
}

fn find(obj: &Value, name: &str, accept: impl FnOnce(Visibility) -> bool) -> Result<Method> {
	match obj.find_member(name) {
		Some((owner, member)) if member.is_defined() && accept(member.visibility) => {
			trace!(target: "members", ?obj, %name, %owner, "found member");
			Ok(Method { receiver: obj.clone(), name: Symbol::new(name), owner, member })
		}
		_ => Err(undefined_method(obj, name)),
	}
}

/// Finds the nearest member `name` of `obj`, regardless of visibility.
pub fn method(obj: &Value, name: &str) -> Result<Method> {
	find(obj, name, |_| true)
}

/// Like [`method`], but only public members are found.
pub fn public_method(obj: &Value, name: &str) -> Result<Method> {
	find(obj, name, |visibility| visibility == Visibility::Public)
}

fn class_argument(class: &Value) -> Result<&Gc<Class>> {
	match class {
		Value::Class(class) => Ok(class),
		_ => Err(ErrorKind::Type("class or module required".into()).into()),
	}
}

/// Checks to see if `obj`'s declared class is exactly `class`. Modules are never an exact match.
pub fn instance_of(obj: &Value, class: &Value) -> Result<bool> {
	let class = class_argument(class)?;

	Ok(!class.is_module() && obj.class() == *class)
}

/// Checks to see if `class` is anywhere in `obj`'s lookup chain, including modules it was extended
/// with.
pub fn kind_of(obj: &Value, class: &Value) -> Result<bool> {
	let class = class_argument(class)?;

	Ok(obj.lookup_chain().iter().any(|node| node.class() == Some(class)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ty::{KernelModule, Object, ObjectClass, RustFn, Singleton};

	fn fixture() -> (Gc<Class>, Value) {
		let hello = RustFn::new("hello", |_, _| Ok(Value::from("hello")));
		let class = Class::builder("Greeter")
			.superclass(ObjectClass::instance())
			.public("hello", hello.clone())
			.private("whisper", hello)
			.finish()
			.unwrap();

		let object = Object::instantiate(&class).unwrap().into();
		(class, object)
	}

	#[test]
	fn finding_methods() {
		let (class, object) = fixture();

		let hello = public_method(&object, "hello").unwrap();
		assert_eq!(Ancestor::Concrete(class), hello.owner);
		assert_eq!(Value::from("hello"), hello.call(Args::default()).unwrap());

		assert!(method(&object, "whisper").is_ok());
		assert_matches!(public_method(&object, "whisper").unwrap_err().kind, ErrorKind::UndefinedMethod { .. });
		assert_matches!(method(&object, "nope").unwrap_err().kind, ErrorKind::UndefinedMethod { .. });
	}

	#[test]
	fn relationships() {
		let (class, object) = fixture();
		let class = Value::from(class);
		let kernel = Value::from(KernelModule::instance());

		assert!(instance_of(&object, &class).unwrap());
		assert!(!instance_of(&object, &kernel).unwrap());
		assert!(kind_of(&object, &kernel).unwrap());
		assert!(!kind_of(&Value::Integer(1), &class).unwrap());

		// root classes don't pick up `Kernel`
		let root: Value = Object::instantiate(&Class::builder("Root").finish().unwrap()).unwrap().into();
		assert!(!kind_of(&root, &kernel).unwrap());

		assert_matches!(
			kind_of(&object, &Value::Null).unwrap_err().kind,
			ErrorKind::Type(msg) if msg == "class or module required"
		);
	}
}
