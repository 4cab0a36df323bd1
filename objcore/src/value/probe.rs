use crate::value::{Ancestor, Args, Intern, Member, Symbol, Visibility};
use crate::{ErrorKind, Result, Value};

/// Asking a value whether it has a capability, and invoking it.
///
/// Only the nearest entry for a name along [`Value::lookup_chain`] is ever consulted: an undefined
/// entry hides everything behind it.
pub trait Probe {
	/// Finds the nearest entry for `name`, including undefined ones.
	fn find_member(&self, name: &str) -> Option<(Ancestor, Member)>;

	/// Checks to see if `name` is a capability of `self`. Only public members count unless
	/// `include_private` is set.
	fn respond_to(&self, name: &str, include_private: bool) -> bool {
		match self.find_member(name) {
			Some((_, member)) => match member.visibility {
				Visibility::Public => true,
				Visibility::Protected | Visibility::Private => include_private,
				Visibility::Undefined => false,
			},
			None => false,
		}
	}

	/// Shorthand for checking a well-known public capability.
	fn probe(&self, name: Intern) -> bool {
		self.respond_to(name.as_str(), false)
	}

	/// Calls the nearest defined member named `name`, regardless of its visibility.
	fn call_attr(&self, name: &str, args: Args<'_>) -> Result<Value>;

	fn invoke(&self, name: Intern, args: Args<'_>) -> Result<Value> {
		self.call_attr(name.as_str(), args)
	}
}

impl Probe for Value {
	fn find_member(&self, name: &str) -> Option<(Ancestor, Member)> {
		self.lookup_chain().into_iter().find_map(|node| {
			let member = node.member(name)?;
			Some((node, member))
		})
	}

	fn call_attr(&self, name: &str, args: Args<'_>) -> Result<Value> {
		let member = match self.find_member(name) {
			Some((_, member)) if member.is_defined() => member,
			_ => {
				return Err(
					ErrorKind::UnknownAttribute { object: self.clone(), attribute: Symbol::new(name) }.into()
				)
			}
		};

		trace!(target: "probe", object=?self, %name, args=args.len(), "calling member");

		match member.body {
			Some(body) => body.call(self, args),
			None => Err(ErrorKind::NotImplemented { object: self.clone(), attribute: Symbol::new(name) }.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ty::{Class, Object, RustFn};

	fn instance_of(class: &crate::value::Gc<Class>) -> Value {
		Object::instantiate(class).unwrap().into()
	}

	#[test]
	fn nearest_entry_decides() {
		let answer = RustFn::new("answer", |_, _| Ok(Value::Integer(42)));
		let base = Class::builder("Base").public("answer", answer).declare("hidden", Visibility::Private).finish().unwrap();
		let child = Class::builder("Child").superclass(base).undef("answer").finish().unwrap();

		let object = instance_of(&child);
		assert!(!object.respond_to("answer", true));
		assert_matches!(
			object.call_attr("answer", Args::default()).unwrap_err().kind,
			ErrorKind::UnknownAttribute { .. }
		);

		assert!(!object.respond_to("hidden", false));
		assert!(object.respond_to("hidden", true));
		assert_matches!(
			object.call_attr("hidden", Args::default()).unwrap_err().kind,
			ErrorKind::NotImplemented { .. }
		);
	}

	#[test]
	fn private_members_can_be_called() {
		let secret = RustFn::new("secret", |this, _| Ok(this.clone()));
		let class = Class::builder("Secretive").private("secret", secret).finish().unwrap();
		let object = instance_of(&class);

		assert!(!object.probe(Intern::to_s));
		assert!(object.call_attr("secret", Args::default()).unwrap().is_identical(&object));
	}
}
