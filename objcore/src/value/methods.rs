use crate::value::ty::RustFn;
use crate::value::Symbol;
use hashbrown::HashMap;
use std::fmt::{self, Debug, Formatter};

/// Who is allowed to see a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
	Public,
	Protected,
	Private,

	/// The member was explicitly undefined. It hides any member of the same name further up the
	/// lookup chain, and isn't visible itself.
	Undefined,
}

/// An entry in a [`MethodTable`].
#[derive(Clone, PartialEq)]
pub struct Member {
	pub visibility: Visibility,
	pub body: Option<RustFn>,
}

impl Member {
	#[must_use]
	pub const fn new(visibility: Visibility, body: RustFn) -> Self {
		Self { visibility, body: Some(body) }
	}

	/// A member that exists for reflection purposes only.
	#[must_use]
	pub const fn declared(visibility: Visibility) -> Self {
		Self { visibility, body: None }
	}

	#[must_use]
	pub const fn undefined() -> Self {
		Self { visibility: Visibility::Undefined, body: None }
	}

	#[must_use]
	pub fn is_defined(&self) -> bool {
		self.visibility != Visibility::Undefined
	}
}

impl Debug for Member {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match &self.body {
			Some(body) => write!(f, "{:?}({:?})", self.visibility, body),
			None => write!(f, "{:?}", self.visibility),
		}
	}
}

/// The members declared directly on a class, module or specialization layer.
///
/// Names are kept in the order they were first defined; redefining a name replaces its entry in
/// place.
#[derive(Default, Clone)]
pub struct MethodTable {
	entries: Vec<(Symbol, Member)>,
	index: HashMap<Symbol, usize>,
}

impl MethodTable {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Gets the entry for `name`, including undefined ones.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Member> {
		self.index.get(name).map(|&index| &self.entries[index].1)
	}

	pub fn define(&mut self, name: Symbol, member: Member) {
		if let Some(&index) = self.index.get(&name) {
			self.entries[index].1 = member;
		} else {
			self.index.insert(name.clone(), self.entries.len());
			self.entries.push((name, member));
		}
	}

	/// Marks `name` as undefined, hiding it from lookups that reach this table.
	pub fn undefine(&mut self, name: Symbol) {
		self.define(name, Member::undefined());
	}

	/// Changes the visibility of a defined member, returning whether it was found.
	pub fn set_visibility(&mut self, name: &str, visibility: Visibility) -> bool {
		match self.index.get(name) {
			Some(&index) if self.entries[index].1.is_defined() => {
				self.entries[index].1.visibility = visibility;
				true
			}
			_ => false,
		}
	}

	/// Removes the entry for `name` entirely, so lookups continue past this table.
	pub fn remove(&mut self, name: &str) -> Option<Member> {
		let index = self.index.remove(name)?;
		let (_, member) = self.entries.remove(index);

		for (_, idx) in self.index.iter_mut() {
			if *idx > index {
				*idx -= 1;
			}
		}

		Some(member)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Member)> + '_ {
		self.entries.iter().map(|(name, member)| (name, member))
	}

	/// Iterates over the names with the given visibility, in definition order.
	pub fn names(&self, visibility: Visibility) -> impl Iterator<Item = &Symbol> + '_ {
		self.iter().filter(move |(_, member)| member.visibility == visibility).map(|(name, _)| name)
	}
}

impl Debug for MethodTable {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
