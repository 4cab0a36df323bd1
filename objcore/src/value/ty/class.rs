use crate::value::ty::{Object, ObjectClass, RustFn, Singleton, Specialization, Text};
use crate::value::{Ancestor, Args, Gc, Member, MethodTable, Symbol, Visibility};
use crate::{ErrorKind, Result, Value};
use std::fmt::{self, Debug, Formatter};

/// Whether a [`Class`] can be instantiated and subclassed, or only included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
	Class,
	Module,
}

/// A class or module.
///
/// The ancestor linearization is computed once, when the class is built, and never changes
/// afterwards. Members can still be added and removed on any layer.
#[derive(NamedType)]
pub struct Class {
	name: Symbol,
	kind: ClassKind,
	superclass: Option<Gc<Class>>,
	includes: Vec<Gc<Class>>,
	ancestors: Vec<Ancestor>,
	methods: MethodTable,
	singleton: Option<Gc<Specialization>>,
	frozen: bool,
}

/// Builds a new [`Class`]; see [`Class::builder`].
#[must_use]
pub struct Builder {
	name: Symbol,
	kind: ClassKind,
	superclass: Option<Gc<Class>>,
	includes: Vec<Gc<Class>>,
	methods: MethodTable,
}

impl Class {
	/// Starts building a new class. Without a superclass, the class is a root of its own hierarchy.
	pub fn builder(name: impl Into<Symbol>) -> Builder {
		Builder::new(name.into(), ClassKind::Class)
	}

	/// Starts building a new module.
	pub fn module_builder(name: impl Into<Symbol>) -> Builder {
		Builder::new(name.into(), ClassKind::Module)
	}

	#[must_use]
	pub const fn name(&self) -> &Symbol {
		&self.name
	}

	#[must_use]
	pub const fn kind(&self) -> ClassKind {
		self.kind
	}

	#[must_use]
	pub fn is_module(&self) -> bool {
		self.kind == ClassKind::Module
	}

	#[must_use]
	pub const fn superclass(&self) -> Option<&Gc<Class>> {
		self.superclass.as_ref()
	}

	/// The modules directly included into this class, in the order they were included.
	#[must_use]
	pub fn includes(&self) -> &[Gc<Class>] {
		&self.includes
	}

	/// Every ancestor of this class, most specific first, excluding the class itself.
	#[must_use]
	pub fn ancestors(&self) -> &[Ancestor] {
		&self.ancestors
	}

	#[must_use]
	pub const fn methods(&self) -> &MethodTable {
		&self.methods
	}

	/// The class-level specialization layer, if any class-level members were ever defined.
	#[must_use]
	pub const fn singleton(&self) -> Option<&Gc<Specialization>> {
		self.singleton.as_ref()
	}

	#[must_use]
	pub const fn is_frozen(&self) -> bool {
		self.frozen
	}

	pub(crate) fn freeze(&mut self) {
		self.frozen = true;
	}

	pub(crate) fn singleton_or_init(&mut self) -> Gc<Specialization> {
		self.singleton.get_or_insert_with(|| Gc::new(Specialization::default())).clone()
	}
}

impl Debug for Class {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.debug_struct("Class")
			.field("name", &self.name)
			.field("kind", &self.kind)
			.field("ancestors", &self.ancestors)
			.field("methods", &self.methods)
			.finish()
	}
}

impl Builder {
	fn new(name: Symbol, kind: ClassKind) -> Self {
		Self { name, kind, superclass: None, includes: Vec::new(), methods: MethodTable::new() }
	}

	pub fn superclass(mut self, superclass: Gc<Class>) -> Self {
		self.superclass = Some(superclass);
		self
	}

	pub fn include(mut self, module: Gc<Class>) -> Self {
		self.includes.push(module);
		self
	}

	pub fn member(mut self, name: impl Into<Symbol>, member: Member) -> Self {
		self.methods.define(name.into(), member);
		self
	}

	pub fn public(self, name: impl Into<Symbol>, func: RustFn) -> Self {
		self.member(name, Member::new(Visibility::Public, func))
	}

	pub fn protected(self, name: impl Into<Symbol>, func: RustFn) -> Self {
		self.member(name, Member::new(Visibility::Protected, func))
	}

	pub fn private(self, name: impl Into<Symbol>, func: RustFn) -> Self {
		self.member(name, Member::new(Visibility::Private, func))
	}

	/// Declares a member without a native body.
	pub fn declare(self, name: impl Into<Symbol>, visibility: Visibility) -> Self {
		self.member(name, Member::declared(visibility))
	}

	/// Hides `name` from this class and everything that inherits from it.
	pub fn undef(self, name: impl Into<Symbol>) -> Self {
		self.member(name, Member::undefined())
	}

	/// Finishes the class, computing its ancestor linearization.
	pub fn finish(self) -> Result<Gc<Class>> {
		if let Some(superclass) = &self.superclass {
			if self.kind == ClassKind::Module {
				return Err(ErrorKind::Type(format!("module {} can't have a superclass", self.name)).into());
			}

			if superclass.is_module() {
				return Err(
					ErrorKind::Type(format!("superclass must be a Class (Module {} given)", superclass.name()))
						.into(),
				);
			}
		}

		for module in &self.includes {
			if !module.is_module() {
				return Err(
					ErrorKind::Type(format!("wrong argument type Class {} (expected Module)", module.name()))
						.into(),
				);
			}
		}

		let ancestors = linearize(self.superclass.as_ref(), &self.includes);
		trace!(target: "class", name=%self.name, ?ancestors, "built class");

		Ok(Gc::new(Class {
			name: self.name,
			kind: self.kind,
			superclass: self.superclass,
			includes: self.includes,
			ancestors,
			methods: self.methods,
			singleton: None,
			frozen: false,
		}))
	}
}

/// Latest include first, each followed by its own ancestors, then the superclass chain. Modules
/// that already appear in the result (or further up the superclass chain) are skipped.
fn linearize(superclass: Option<&Gc<Class>>, includes: &[Gc<Class>]) -> Vec<Ancestor> {
	let inherited = superclass.map(Gc::linearization).unwrap_or_default();
	let mut ancestors = Vec::new();

	for module in includes.iter().rev() {
		for node in module.linearization() {
			if !ancestors.contains(&node) && !inherited.contains(&node) {
				ancestors.push(node);
			}
		}
	}

	ancestors.extend(inherited);
	debug_assert!(
		ancestors.iter().enumerate().all(|(idx, node)| !ancestors[..idx].contains(node)),
		"duplicate ancestor in {ancestors:?}"
	);
	ancestors
}

impl Gc<Class> {
	#[must_use]
	pub fn name(&self) -> Symbol {
		self.as_ref().name().clone()
	}

	#[must_use]
	pub fn is_module(&self) -> bool {
		self.as_ref().is_module()
	}

	/// The class itself followed by all of its ancestors.
	#[must_use]
	pub fn linearization(&self) -> Vec<Ancestor> {
		let this = self.as_ref();
		let mut chain = Vec::with_capacity(this.ancestors.len() + 1);

		chain.push(match this.kind {
			ClassKind::Class => Ancestor::Concrete(self.clone()),
			ClassKind::Module => Ancestor::Mixin(self.clone()),
		});
		chain.extend(this.ancestors.iter().cloned());
		chain
	}

	/// Checks to see if `self` is `other`, inherits from it, or includes it.
	#[must_use]
	pub fn is_descendant_of(&self, other: &Self) -> bool {
		self.linearization().iter().any(|node| node.class() == Some(other))
	}

	/// Finds the nearest entry for `name` that instances of `self` would see.
	#[must_use]
	pub fn find_instance_member(&self, name: &str) -> Option<(Ancestor, Member)> {
		self.linearization().into_iter().find_map(|node| {
			let member = node.member(name)?;
			Some((node, member))
		})
	}

	fn as_mut_unfrozen(&self) -> Result<std::sync::RwLockWriteGuard<'_, Class>> {
		let class = self.as_mut()?;

		if class.is_frozen() {
			Err(ErrorKind::ValueFrozen(Value::Class(self.clone())).into())
		} else {
			Ok(class)
		}
	}

	fn undefined_method(&self, name: &str) -> crate::Error {
		ErrorKind::UndefinedMethod { object: Value::Class(self.clone()), attribute: Symbol::new(name) }
			.into()
	}

	pub fn define_method(
		&self,
		name: impl Into<Symbol>,
		visibility: Visibility,
		body: Option<RustFn>,
	) -> Result<()> {
		let name = name.into();
		debug!(target: "class", class=%self.name(), %name, ?visibility, "defining method");

		self.as_mut_unfrozen()?.methods.define(name, Member { visibility, body });
		Ok(())
	}

	/// Prevents instances from responding to `name`, even if an ancestor defines it.
	pub fn undef_method(&self, name: &str) -> Result<()> {
		match self.find_instance_member(name) {
			Some((_, member)) if member.is_defined() => {
				self.as_mut_unfrozen()?.methods.undefine(Symbol::new(name));
				Ok(())
			}
			_ => Err(self.undefined_method(name)),
		}
	}

	/// Removes `name` from this class only, so ancestors' versions become visible again.
	pub fn remove_method(&self, name: &str) -> Result<()> {
		let mut class = self.as_mut_unfrozen()?;

		if class.methods.get(name).map_or(false, Member::is_defined) {
			class.methods.remove(name);
			Ok(())
		} else {
			drop(class);
			Err(self.undefined_method(name))
		}
	}

	/// Changes the visibility of `name` for instances of `self`. Members inherited from an ancestor
	/// are copied into this class with the new visibility.
	pub fn set_visibility(&self, name: &str, visibility: Visibility) -> Result<()> {
		let (_, member) = self
			.find_instance_member(name)
			.filter(|(_, member)| member.is_defined())
			.ok_or_else(|| self.undefined_method(name))?;

		self.as_mut_unfrozen()?.methods.define(Symbol::new(name), Member { visibility, ..member });
		Ok(())
	}
}

impl crate::value::Convertible for Gc<Class> {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Class(class) => Some(class.clone()),
			_ => None,
		}
	}
}

/// The class of every module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleClass;

impl Singleton for ModuleClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Module", superclass ObjectClass::instance();
					public "name" => method funcs::name,
					public Intern::to_s => method funcs::name,
					public Intern::inspect => method funcs::name,
					public "ancestors" => method funcs::ancestors,
					public "include?" => method funcs::include,
					public "instance_methods" => method funcs::instance_methods,
					public "public_instance_methods" => method funcs::public_instance_methods,
					public "protected_instance_methods" => method funcs::protected_instance_methods,
					public "private_instance_methods" => method funcs::private_instance_methods,
				}
			})
			.clone()
	}
}

/// The class of every class.
#[derive(Debug, Clone, Copy)]
pub struct ClassClass;

impl Singleton for ClassClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Class", superclass ModuleClass::instance();
					public "new" => method funcs::new,
					public "superclass" => method funcs::superclass,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;
	use crate::members::{self, Filter};
	use crate::value::ty::List;

	pub fn name(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(class.name().as_str()).into())
	}

	pub fn ancestors(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		let ancestors = class
			.linearization()
			.iter()
			.filter_map(Ancestor::class)
			.cloned()
			.map(Value::Class)
			.collect::<Vec<_>>();

		Ok(List::from(ancestors).into())
	}

	pub fn include(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		let module = match &args[0] {
			Value::Class(module) if module.is_module() => module.clone(),
			other => {
				return Err(ErrorKind::Type(format!(
					"wrong argument type {} (expected Module)",
					other.class().name()
				))
				.into())
			}
		};

		Ok((!class.ptr_eq(&module) && class.is_descendant_of(&module)).into())
	}

	fn instance_methods_with(class: &Gc<Class>, filter: Filter, args: Args<'_>) -> Result<Value> {
		let all = args.optional_flag(true)?;

		Ok(members::instance_methods(class, filter, all).into())
	}

	pub fn instance_methods(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		instance_methods_with(&class, Filter::PublicOrProtected, args)
	}

	pub fn public_instance_methods(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		instance_methods_with(&class, Filter::Public, args)
	}

	pub fn protected_instance_methods(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		instance_methods_with(&class, Filter::Protected, args)
	}

	pub fn private_instance_methods(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		instance_methods_with(&class, Filter::Private, args)
	}

	pub fn new(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Object::instantiate(&class).map(Value::from)
	}

	pub fn superclass(class: Gc<Class>, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(class.as_ref().superclass().cloned().map_or(Value::Null, Value::Class))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn module(name: &str) -> Gc<Class> {
		Class::module_builder(name).finish().unwrap()
	}

	fn names(chain: &[Ancestor]) -> Vec<String> {
		chain.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn linearization_order() {
		let a = module("A");
		let b = Class::module_builder("B").include(a.clone()).finish().unwrap();
		let c = module("C");

		let base = Class::builder("Base").include(a).finish().unwrap();
		let child = Class::builder("Child").superclass(base).include(b).include(c).finish().unwrap();

		assert_eq!(vec!["Child", "C", "B", "Base", "A"], names(&child.linearization()));
		assert!(child.linearization()[0].is_concrete());
		assert!(!child.linearization()[1].is_concrete());
	}

	#[test]
	fn builder_validates_kinds() {
		let class = Class::builder("Klass").finish().unwrap();
		let module = module("Mod");

		assert_matches!(
			Class::builder("X").superclass(module.clone()).finish().unwrap_err().kind,
			ErrorKind::Type(_)
		);
		assert_matches!(
			Class::builder("X").include(class.clone()).finish().unwrap_err().kind,
			ErrorKind::Type(_)
		);
		assert_matches!(
			Class::module_builder("X").superclass(class).finish().unwrap_err().kind,
			ErrorKind::Type(_)
		);
	}

	#[test]
	fn undef_and_remove() {
		let noop = RustFn::new("foo", |_, _| Ok(Value::Null));
		let base = Class::builder("Base").public("foo", noop.clone()).finish().unwrap();
		let child = Class::builder("Child").superclass(base).public("foo", noop).finish().unwrap();

		child.remove_method("foo").unwrap();
		assert_eq!("Base", child.find_instance_member("foo").unwrap().0.to_string());
		assert_matches!(
			child.remove_method("foo").unwrap_err().kind,
			ErrorKind::UndefinedMethod { .. }
		);

		child.undef_method("foo").unwrap();
		assert!(!child.find_instance_member("foo").unwrap().1.is_defined());
		assert_matches!(child.undef_method("foo").unwrap_err().kind, ErrorKind::UndefinedMethod { .. });
	}

	#[test]
	fn visibility_of_inherited_members() {
		let base = Class::builder("Base").declare("foo", Visibility::Public).finish().unwrap();
		let child = Class::builder("Child").superclass(base.clone()).finish().unwrap();

		child.set_visibility("foo", Visibility::Private).unwrap();
		assert_eq!(Visibility::Private, child.as_ref().methods().get("foo").unwrap().visibility);
		assert_eq!(Visibility::Public, base.as_ref().methods().get("foo").unwrap().visibility);
		assert!(child.set_visibility("bar", Visibility::Private).is_err());
	}

	#[test]
	fn frozen_classes_reject_definitions() {
		let class = Class::builder("Frozen").finish().unwrap();
		class.as_mut().unwrap().freeze();

		assert_matches!(
			class.define_method("foo", Visibility::Public, None).unwrap_err().kind,
			ErrorKind::ValueFrozen(_)
		);
	}
}
