use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

static SYMBOLS: Lazy<DashMap<Arc<str>, Arc<str>>> = Lazy::new(DashMap::new);

/// An interned name, used for member names and as a value in its own right.
///
/// All symbols with the same name share the same allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl crate::value::NamedType for Symbol {
	const TYPENAME: crate::value::Typename = "Symbol";
}

impl Symbol {
	/// Interns `name`.
	#[must_use]
	pub fn new(name: &str) -> Self {
		if let Some(interned) = SYMBOLS.get(name) {
			return Self(interned.value().clone());
		}

		let name: Arc<str> = Arc::from(name);
		let interned = SYMBOLS.entry(name.clone()).or_insert(name).value().clone();
		Self(interned)
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Symbol {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl Borrow<str> for Symbol {
	fn borrow(&self) -> &str {
		self.as_str()
	}
}

impl Display for Symbol {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Debug for Symbol {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, ":{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interning_shares_allocations() {
		let foo = Symbol::new("foo");
		let foo2 = Symbol::from(String::from("foo").as_str());

		assert_eq!(foo, foo2);
		assert!(Arc::ptr_eq(&foo.0, &foo2.0));
		assert_ne!(foo, Symbol::new("bar"));
	}

	#[test]
	fn formatting() {
		let sym = Symbol::new("to_s");
		assert_eq!("to_s", sym.to_string());
		assert_eq!(":to_s", format!("{sym:?}"));
	}
}
