//! Enumerating the members visible on a value.
//!
//! Two walks are used. The *specialization* walk starts at a value's own specialization layer and
//! keeps going only while it sees other non-concrete layers (extended modules, and for classes,
//! the superclasses' specializations); it stops at the first real class. The *type* walk covers
//! the declared class, and with `include_ancestors`, its whole linearization.
//!
//! In every walk, the first layer that mentions a name decides its visibility, including when
//! that layer marks it undefined.

pub mod lookup;

use crate::value::ty::Class;
use crate::value::{Ancestor, Gc, Symbol, Visibility};
use crate::Value;
use hashbrown::HashSet;

/// Which members [`resolve`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
	Public,
	Protected,
	Private,

	/// Everything callable from outside: public and protected members of the specialization layers
	/// and the declared class, minus whatever the specialization layers undefined.
	All,
}

/// The visibilities a single walk keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
	Public,
	Protected,
	Private,
	PublicOrProtected,
}

impl Filter {
	#[must_use]
	pub const fn matches(self, visibility: Visibility) -> bool {
		matches!(
			(self, visibility),
			(Self::Public | Self::PublicOrProtected, Visibility::Public)
				| (Self::Protected | Self::PublicOrProtected, Visibility::Protected)
				| (Self::Private, Visibility::Private)
		)
	}
}

/// An ordered set of names: iteration follows the order names were first inserted in.
#[derive(Debug, Default, Clone)]
pub struct NameSet {
	order: Vec<Symbol>,
	seen: HashSet<Symbol>,
}

impl NameSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `name`, returning `false` if it was already present.
	pub fn insert(&mut self, name: Symbol) -> bool {
		if self.seen.contains(&name) {
			return false;
		}

		self.seen.insert(name.clone());
		self.order.push(name);
		true
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.seen.contains(name)
	}

	pub fn retain(&mut self, mut keep: impl FnMut(&Symbol) -> bool) {
		let seen = &mut self.seen;

		self.order.retain(|name| {
			let kept = keep(name);
			if !kept {
				seen.remove(name);
			}
			kept
		});
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.order.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
		self.order.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Symbol] {
		&self.order
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<Symbol> {
		self.order
	}
}

impl PartialEq for NameSet {
	fn eq(&self, rhs: &Self) -> bool {
		self.order == rhs.order
	}
}

impl Eq for NameSet {}

impl Extend<Symbol> for NameSet {
	fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
		for name in iter {
			self.insert(name);
		}
	}
}

impl FromIterator<Symbol> for NameSet {
	fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
		let mut names = Self::new();
		names.extend(iter);
		names
	}
}

impl IntoIterator for NameSet {
	type Item = Symbol;
	type IntoIter = std::vec::IntoIter<Symbol>;

	fn into_iter(self) -> Self::IntoIter {
		self.order.into_iter()
	}
}

impl<'a> IntoIterator for &'a NameSet {
	type Item = &'a Symbol;
	type IntoIter = std::slice::Iter<'a, Symbol>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Converts into a list of symbols.
impl From<NameSet> for Value {
	fn from(names: NameSet) -> Self {
		names.into_iter().map(Value::Symbol).collect::<crate::value::ty::List>().into()
	}
}

/// Walks `nodes` in order, keeping the names whose first entry matches `filter`.
fn collect<'a>(nodes: impl IntoIterator<Item = &'a Ancestor>, filter: Filter) -> NameSet {
	let mut decided = HashSet::new();
	let mut names = NameSet::new();

	for node in nodes {
		node.with_methods(|methods| {
			for (name, member) in methods.iter() {
				if decided.insert(name.clone()) && filter.matches(member.visibility) {
					names.insert(name.clone());
				}
			}
		});
	}

	names
}

/// Names whose nearest entry among `nodes` is a tombstone.
fn undefined_names<'a>(nodes: impl IntoIterator<Item = &'a Ancestor>) -> NameSet {
	let mut decided = HashSet::new();
	let mut names = NameSet::new();

	for node in nodes {
		node.with_methods(|methods| {
			for (name, member) in methods.iter() {
				if decided.insert(name.clone()) && !member.is_defined() {
					names.insert(name.clone());
				}
			}
		});
	}

	names
}

/// The specialization layers of `obj`: just its own when `all` is false, otherwise every layer
/// before the first concrete class. Immediates have none.
fn specialization_chain(obj: &Value, all: bool) -> Vec<Ancestor> {
	if obj.is_immediate() {
		return Vec::new();
	}

	if all {
		obj.lookup_chain().into_iter().take_while(|node| !node.is_concrete()).collect()
	} else {
		obj.specialization().map(Ancestor::Specialization).into_iter().collect()
	}
}

/// The declared class of `obj`, and with `all`, the rest of its linearization.
fn type_chain(class: &Gc<Class>, all: bool) -> Vec<Ancestor> {
	let mut chain = class.linearization();

	if !all {
		chain.truncate(1);
	}

	chain
}

/// The public and protected members `obj` defines for itself. With `all`, members from modules it
/// was extended with (and for classes, inherited class-level members) are included.
#[must_use]
pub fn singleton_methods(obj: &Value, all: bool) -> NameSet {
	let names = collect(&specialization_chain(obj, all), Filter::PublicOrProtected);
	debug!(target: "members", ?obj, all, count=names.len(), "singleton methods");
	names
}

/// The members instances of `class` have, filtered by visibility.
#[must_use]
pub fn instance_methods(class: &Gc<Class>, filter: Filter, all: bool) -> NameSet {
	let names = collect(&type_chain(class, all), filter);
	debug!(target: "members", class=%class.name(), ?filter, all, count=names.len(), "instance methods");
	names
}

/// Computes the names of the members visible on `obj`.
///
/// For the single-visibility selectors, the specialization layers are always searched, followed
/// by the declared class (and its ancestors if `include_ancestors`). For [`Selector::All`], see
/// its documentation.
#[must_use]
pub fn resolve(obj: &Value, selector: Selector, include_ancestors: bool) -> NameSet {
	let filter = match selector {
		Selector::Public => Filter::Public,
		Selector::Protected => Filter::Protected,
		Selector::Private => Filter::Private,
		Selector::All => return resolve_all(obj, include_ancestors),
	};

	let specializations = specialization_chain(obj, true);
	let declared = type_chain(&obj.class(), include_ancestors);
	let names = collect(specializations.iter().chain(&declared), filter);

	debug!(target: "members", ?obj, ?selector, include_ancestors, count=names.len(), "resolved");
	names
}

fn resolve_all(obj: &Value, include_ancestors: bool) -> NameSet {
	let mut names = singleton_methods(obj, include_ancestors);

	if include_ancestors {
		names.extend(instance_methods(&obj.class(), Filter::PublicOrProtected, true));
	}

	let undefined = undefined_names(&specialization_chain(obj, true));

	if !undefined.is_empty() {
		trace!(target: "members", ?obj, ?undefined, "removing undefined names");
		names.retain(|name| !undefined.contains(name.as_str()));
	}

	debug!(target: "members", ?obj, selector=?Selector::All, include_ancestors, count=names.len(), "resolved");
	names
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::ty::{Object, RustFn};

	fn strings(names: &NameSet) -> Vec<&str> {
		names.iter().map(Symbol::as_str).collect()
	}

	#[test]
	fn filters() {
		assert!(Filter::PublicOrProtected.matches(Visibility::Protected));
		assert!(!Filter::PublicOrProtected.matches(Visibility::Private));
		assert!(!Filter::Public.matches(Visibility::Undefined));
		assert!(Filter::Private.matches(Visibility::Private));
	}

	#[test]
	fn name_sets_keep_first_insertion_order() {
		let mut names = ["b", "a", "b", "c"].into_iter().map(Symbol::new).collect::<NameSet>();
		assert_eq!(vec!["b", "a", "c"], strings(&names));

		names.retain(|name| name.as_str() != "a");
		assert_eq!(vec!["b", "c"], strings(&names));
		assert!(!names.contains("a"));
		assert!(names.insert(Symbol::new("a")));
	}

	#[test]
	fn first_entry_decides() {
		let noop = RustFn::new("noop", |_, _| Ok(Value::Null));
		let base = Class::builder("Base")
			.public("shadowed", noop.clone())
			.public("hidden", noop.clone())
			.public("kept", noop)
			.finish()
			.unwrap();
		let child = Class::builder("Child")
			.superclass(base)
			.declare("shadowed", Visibility::Private)
			.undef("hidden")
			.finish()
			.unwrap();

		assert_eq!(vec!["kept"], strings(&instance_methods(&child, Filter::Public, true)));
		assert_eq!(vec!["shadowed"], strings(&instance_methods(&child, Filter::Private, true)));
		assert!(instance_methods(&child, Filter::Public, false).is_empty());
	}

	#[test]
	fn symbols_list() {
		let object = Value::from(Object::instantiate(&Class::builder("Empty").finish().unwrap()).unwrap());
		object.define_singleton_method("a", Visibility::Public, None).unwrap();

		assert_eq!(
			Value::from(crate::value::ty::List::new(vec![Value::from(Symbol::new("a"))])),
			Value::from(resolve(&object, Selector::All, true))
		);
	}
}
