use crate::value::ty::Class;
use crate::value::{Gc, MethodTable};

/// The members an individual object (or class) defines for itself, along with the modules it was
/// extended with.
///
/// A specialization sits in front of the object's class in every lookup. It never has a name and
/// never becomes an ancestor of anything else.
#[derive(Debug, Default, NamedType)]
pub struct Specialization {
	methods: MethodTable,
	extended: Vec<Gc<Class>>,
}

impl Specialization {
	#[must_use]
	pub const fn methods(&self) -> &MethodTable {
		&self.methods
	}

	pub fn methods_mut(&mut self) -> &mut MethodTable {
		&mut self.methods
	}

	/// The modules this layer was extended with, oldest first.
	#[must_use]
	pub fn extended(&self) -> &[Gc<Class>] {
		&self.extended
	}

	/// Adds `module`, returning `false` if it was already present.
	pub fn extend(&mut self, module: Gc<Class>) -> bool {
		if self.extended.contains(&module) {
			false
		} else {
			self.extended.push(module);
			true
		}
	}
}
