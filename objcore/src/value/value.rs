use crate::value::ty::{
	BigInteger, BooleanClass, Class, ClassClass, FloatClass, InstanceOf, IntegerClass, List, Map,
	ModuleClass, Null, NullClass, Object, RustFn, Singleton, Specialization, SymbolClass, Text,
};
use crate::value::{Ancestor, Convertible, Gc, NamedType, Symbol, Visibility};
use crate::{ErrorKind, Result};
use num_traits::ToPrimitive;
use std::fmt::{self, Debug, Formatter};

/// Any value the runtime can hold.
///
/// `Null`, `Boolean`, `Integer` and `Symbol` are *immediates*: they're stored inline, compared by
/// value, and can never carry members of their own. Everything else is reference counted, and
/// only [`Object`]s and [`Class`]es can be specialized.
#[derive(Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Boolean(bool),
	Integer(i64),
	BigInteger(BigInteger),
	Float(f64),
	Symbol(Symbol),
	Text(Text),
	List(List),
	Map(Map),
	Object(Gc<Object>),
	Class(Gc<Class>),
}

sa::assert_impl_all!(Value: Send, Sync);

impl Value {
	/// Checks to see if `self` is one of the immediate kinds, which never have a specialization
	/// layer.
	#[must_use]
	pub const fn is_immediate(&self) -> bool {
		matches!(self, Self::Null | Self::Boolean(_) | Self::Integer(_) | Self::Symbol(_))
	}

	/// Everything is truthy except `null` and `false`.
	#[must_use]
	pub const fn is_truthy(&self) -> bool {
		!matches!(self, Self::Null | Self::Boolean(false))
	}

	/// Checks to see if `self` and `rhs` are the exact same value, rather than just equal ones.
	#[must_use]
	pub fn is_identical(&self, rhs: &Self) -> bool {
		match (self, rhs) {
			(Self::Float(lhs), Self::Float(rhs)) => lhs.to_bits() == rhs.to_bits(),
			(Self::Text(lhs), Self::Text(rhs)) => lhs.ptr_eq(rhs),
			(Self::List(lhs), Self::List(rhs)) => lhs.ptr_eq(rhs),
			(Self::Map(lhs), Self::Map(rhs)) => lhs.ptr_eq(rhs),
			_ => self == rhs,
		}
	}

	/// Gets the class `self` was declared as, ignoring any specialization.
	#[must_use]
	pub fn class(&self) -> Gc<Class> {
		match self {
			Self::Null => NullClass::instance(),
			Self::Boolean(_) => BooleanClass::instance(),
			Self::Integer(_) | Self::BigInteger(_) => IntegerClass::instance(),
			Self::Float(_) => FloatClass::instance(),
			Self::Symbol(_) => SymbolClass::instance(),
			Self::Text(_) => <Text as InstanceOf>::Class::instance(),
			Self::List(_) => <List as InstanceOf>::Class::instance(),
			Self::Map(_) => <Map as InstanceOf>::Class::instance(),
			Self::Object(object) => object.as_ref().class().clone(),
			Self::Class(class) if class.is_module() => ModuleClass::instance(),
			Self::Class(_) => ClassClass::instance(),
		}
	}

	/// Gets `self`'s own specialization layer, if it has one.
	#[must_use]
	pub fn specialization(&self) -> Option<Gc<Specialization>> {
		match self {
			Self::Object(object) => object.as_ref().singleton().cloned(),
			Self::Class(class) => class.as_ref().singleton().cloned(),
			_ => None,
		}
	}

	/// Every layer a member lookup on `self` passes through, nearest first.
	///
	/// For objects, that's the specialization layer (followed by the modules it was extended with)
	/// and then the class's linearization. For classes, every specialization layer of the class and
	/// its superclasses comes first, then the linearization of `Class` (or `Module`).
	#[must_use]
	pub fn lookup_chain(&self) -> Vec<Ancestor> {
		let mut chain = Vec::new();

		match self {
			Self::Object(object) => {
				let (singleton, class) = {
					let object = object.as_ref();
					(object.singleton().cloned(), object.class().clone())
				};

				if let Some(singleton) = singleton {
					push_specialization(&mut chain, singleton);
				}

				chain.extend(class.linearization());
			}

			Self::Class(class) => {
				let mut current = Some(class.clone());

				while let Some(class) = current {
					let (singleton, superclass) = {
						let class = class.as_ref();
						(class.singleton().cloned(), class.superclass().cloned())
					};

					if let Some(singleton) = singleton {
						push_specialization(&mut chain, singleton);
					}

					current = superclass;
				}

				chain.extend(self.class().linearization());
			}

			_ => chain.extend(self.class().linearization()),
		}

		chain
	}

	/// Gets the specialization layer of `self`, creating it if it doesn't exist yet.
	fn specialization_or_init(&self) -> Result<Gc<Specialization>> {
		match self {
			Self::Object(object) => {
				let mut object = object.as_mut()?;

				if object.is_frozen() {
					drop(object);
					return Err(ErrorKind::ValueFrozen(self.clone()).into());
				}

				Ok(object.singleton_or_init())
			}
			Self::Class(class) => {
				let mut class = class.as_mut()?;

				if class.is_frozen() {
					drop(class);
					return Err(ErrorKind::ValueFrozen(self.clone()).into());
				}

				Ok(class.singleton_or_init())
			}
			_ => Err(ErrorKind::Type(format!("can't define singleton for {self:?}")).into()),
		}
	}

	/// Defines `name` on `self`'s specialization layer, so it shadows the class's version.
	pub fn define_singleton_method(
		&self,
		name: impl Into<Symbol>,
		visibility: Visibility,
		body: Option<RustFn>,
	) -> Result<()> {
		let name = name.into();
		debug!(target: "class", object=?self, %name, ?visibility, "defining singleton method");

		self
			.specialization_or_init()?
			.as_mut()?
			.methods_mut()
			.define(name, crate::value::Member { visibility, body });

		Ok(())
	}

	/// Makes `self` stop responding to `name`, even though an ancestor still defines it.
	pub fn undef_singleton_method(&self, name: &str) -> Result<()> {
		use crate::value::Probe;

		match self.find_member(name) {
			Some((_, member)) if member.is_defined() => {
				self.specialization_or_init()?.as_mut()?.methods_mut().undefine(Symbol::new(name));
				Ok(())
			}
			_ => Err(ErrorKind::UndefinedMethod { object: self.clone(), attribute: Symbol::new(name) }
				.into()),
		}
	}

	/// Changes the visibility of `name` for `self` alone.
	pub fn set_singleton_visibility(&self, name: &str, visibility: Visibility) -> Result<()> {
		use crate::value::Probe;

		let (_, member) = self.find_member(name).filter(|(_, member)| member.is_defined()).ok_or_else(
			|| ErrorKind::UndefinedMethod { object: self.clone(), attribute: Symbol::new(name) },
		)?;

		self
			.specialization_or_init()?
			.as_mut()?
			.methods_mut()
			.define(Symbol::new(name), crate::value::Member { visibility, ..member });

		Ok(())
	}

	/// Mixes `modules` into `self`'s specialization layer. Modules that were already added are
	/// skipped.
	pub fn extend(&self, modules: &[Gc<Class>]) -> Result<()> {
		if modules.is_empty() {
			return Err(ErrorKind::Argument("wrong number of arguments (given 0, expected 1+)".into()).into());
		}

		if let Some(class) = modules.iter().find(|module| !module.is_module()) {
			return Err(
				ErrorKind::Type(format!("wrong argument type Class {} (expected Module)", class.name())).into(),
			);
		}

		let singleton = self.specialization_or_init()?;
		let mut singleton = singleton.as_mut()?;

		for module in modules {
			if singleton.extend(module.clone()) {
				debug!(target: "class", object=?self, module=%module.name(), "extended");
			}
		}

		Ok(())
	}

	/// Prevents any further changes to `self`'s members. Values without a specialization layer are
	/// always frozen.
	pub fn freeze(&self) -> Result<()> {
		match self {
			Self::Object(object) => object.as_mut()?.freeze(),
			Self::Class(class) => class.as_mut()?.freeze(),
			_ => {}
		}

		Ok(())
	}

	#[must_use]
	pub fn is_frozen(&self) -> bool {
		match self {
			Self::Object(object) => object.as_ref().is_frozen(),
			Self::Class(class) => class.as_ref().is_frozen(),
			_ => true,
		}
	}

	#[must_use]
	pub fn is_a<T: Convertible>(&self) -> bool {
		T::is_a(self)
	}

	#[must_use]
	pub fn downcast<T: Convertible>(&self) -> Option<T> {
		T::downcast(self)
	}

	pub fn try_downcast<T: Convertible + NamedType>(&self) -> Result<T> {
		self.downcast().ok_or_else(|| {
			ErrorKind::Type(format!("{} expected, got {}", T::TYPENAME, self.class().name())).into()
		})
	}

	/// A debugging representation of `self`.
	#[must_use]
	pub fn inspect(&self) -> String {
		format!("{self:?}")
	}
}

fn push_specialization(chain: &mut Vec<Ancestor>, singleton: Gc<Specialization>) {
	let extended = singleton.as_ref().extended().to_vec();
	chain.push(Ancestor::Specialization(singleton));

	for module in extended.iter().rev() {
		for node in module.linearization() {
			if !chain.contains(&node) {
				chain.push(node);
			}
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Null => write!(f, "{:?}", Null),
			Self::Boolean(boolean) => Debug::fmt(boolean, f),
			Self::Integer(integer) => Debug::fmt(integer, f),
			Self::BigInteger(integer) => write!(f, "{integer}"),
			Self::Float(float) => f.write_str(&crate::convert::float::render(*float)),
			Self::Symbol(symbol) => Debug::fmt(symbol, f),
			Self::Text(text) => Debug::fmt(text, f),
			Self::List(list) => Debug::fmt(list, f),
			Self::Map(map) => Debug::fmt(map, f),
			Self::Object(object) => {
				let class = object.as_ref().class().name();
				write!(f, "#<{class}:{:#x}>", object.id())
			}
			Self::Class(class) => write!(f, "{}", class.name()),
		}
	}
}

impl From<bool> for Value {
	fn from(boolean: bool) -> Self {
		Self::Boolean(boolean)
	}
}

impl From<i64> for Value {
	fn from(integer: i64) -> Self {
		Self::Integer(integer)
	}
}

/// Integers that fit in an `i64` are always stored as one.
impl From<BigInteger> for Value {
	fn from(integer: BigInteger) -> Self {
		match integer.to_i64() {
			Some(small) => Self::Integer(small),
			None => Self::BigInteger(integer),
		}
	}
}

impl From<f64> for Value {
	fn from(float: f64) -> Self {
		Self::Float(float)
	}
}

impl From<Symbol> for Value {
	fn from(symbol: Symbol) -> Self {
		Self::Symbol(symbol)
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Self::Text(text.into())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Self::Text(text.into())
	}
}

impl From<Gc<Class>> for Value {
	fn from(class: Gc<Class>) -> Self {
		Self::Class(class)
	}
}
