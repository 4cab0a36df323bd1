//! Shared, lockable handles to heap values.

use crate::value::NamedType;
use crate::{ErrorKind, Result};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

/// A reference-counted, lockable handle.
///
/// Two `Gc`s are equal only if they point to the same allocation. Reads block until any writer is
/// done; writes never block, and instead fail with [`ErrorKind::AlreadyLocked`] if the value is
/// currently borrowed. A poisoned lock is treated as if it were never poisoned, as all mutations
/// leave the data in a consistent state before they can panic.
#[repr(transparent)]
pub struct Gc<T>(Arc<RwLock<T>>);

sa::assert_impl_all!(Gc<()>: Send, Sync);

impl<T> Gc<T> {
	/// Allocates `data` behind a new handle.
	pub fn new(data: T) -> Self {
		Self(Arc::new(RwLock::new(data)))
	}

	/// Gets immutable access to the data, blocking while a writer holds it.
	pub fn as_ref(&self) -> RwLockReadGuard<'_, T> {
		self.0.read().unwrap_or_else(PoisonError::into_inner)
	}

	/// Checks to see if `self` and `rhs` point to the same value.
	#[must_use]
	pub fn ptr_eq(&self, rhs: &Self) -> bool {
		Arc::ptr_eq(&self.0, &rhs.0)
	}

	/// Gets a unique id for the value, valid for as long as it is alive.
	#[must_use]
	pub fn id(&self) -> usize {
		Arc::as_ptr(&self.0) as *const () as usize
	}
}

impl<T: NamedType> Gc<T> {
	/// Gets mutable access to the data, returning an error if it's currently borrowed.
	pub fn as_mut(&self) -> Result<RwLockWriteGuard<'_, T>> {
		match self.0.try_write() {
			Ok(guard) => Ok(guard),
			Err(TryLockError::Poisoned(poisoned)) => Ok(poisoned.into_inner()),
			Err(TryLockError::WouldBlock) => Err(ErrorKind::AlreadyLocked(T::TYPENAME).into()),
		}
	}
}

impl<T: NamedType> NamedType for Gc<T> {
	const TYPENAME: crate::value::Typename = T::TYPENAME;
}

impl<T> Clone for Gc<T> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<T> PartialEq for Gc<T> {
	fn eq(&self, rhs: &Self) -> bool {
		self.ptr_eq(rhs)
	}
}

impl<T> Eq for Gc<T> {}

impl<T> Hash for Gc<T> {
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.id().hash(h);
	}
}

impl<T: NamedType> Debug for Gc<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Gc<{}>({:#x})", T::TYPENAME, self.id())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, NamedType)]
	struct Cell(i64);

	#[test]
	fn identity() {
		let gc = Gc::new(Cell(1));
		let other = Gc::new(Cell(1));

		assert_eq!(gc, gc.clone());
		assert_ne!(gc, other);
		assert_eq!(gc.id(), gc.clone().id());
	}

	#[test]
	fn writes_fail_while_borrowed() {
		let gc = Gc::new(Cell(1));

		let borrow = gc.as_ref();
		assert_matches!(gc.as_mut(), Err(crate::Error { kind: ErrorKind::AlreadyLocked("Cell"), .. }));
		drop(borrow);

		gc.as_mut().unwrap().0 = 2;
		assert_eq!(2, gc.as_ref().0);
	}
}
