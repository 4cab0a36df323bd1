use crate::value::ty::{Class, InstanceOf, ObjectClass, Singleton, Text};
use crate::value::{Args, Convertible, Gc, Symbol};
use crate::{Result, Value};

impl Convertible for Symbol {
	fn downcast(value: &Value) -> Option<Self> {
		match value {
			Value::Symbol(symbol) => Some(symbol.clone()),
			_ => None,
		}
	}
}

impl InstanceOf for Symbol {
	type Class = SymbolClass;
}

#[derive(Debug, Clone, Copy)]
pub struct SymbolClass;

impl Singleton for SymbolClass {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { "Symbol", superclass ObjectClass::instance();
					public Intern::to_s => method funcs::to_s,
					public Intern::to_sym => method funcs::to_sym,
					public Intern::inspect => method funcs::inspect,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;

	pub fn to_s(symbol: Symbol, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(symbol.as_str()).into())
	}

	pub fn to_sym(symbol: Symbol, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(symbol.into())
	}

	pub fn inspect(symbol: Symbol, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(format!("{symbol:?}")).into())
	}
}
