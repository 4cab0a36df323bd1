use crate::value::ty::{Class, Singleton};
use crate::value::{Args, Gc};
use crate::{Result, Value};

/// The module every [`ObjectClass`](crate::value::ty::ObjectClass) instance gets its reflection
/// and conversion members from.
#[derive(Debug, Clone, Copy)]
pub struct KernelModule;

impl Singleton for KernelModule {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { module "Kernel";
					public Intern::to_s => function funcs::to_s,
					public Intern::inspect => function funcs::inspect,
					public Intern::class => function funcs::class,
					public Intern::frozen => function funcs::frozen,
					public Intern::freeze => function funcs::freeze,
					public Intern::itself => function funcs::itself,
					public Intern::respond_to => function funcs::respond_to,
					public Intern::methods => function funcs::methods,
					public Intern::public_methods => function funcs::public_methods,
					public Intern::protected_methods => function funcs::protected_methods,
					public Intern::private_methods => function funcs::private_methods,
					public Intern::singleton_methods => function funcs::singleton_methods,
					public Intern::extend => function funcs::extend,
					public Intern::instance_of => function funcs::instance_of,
					public Intern::kind_of => function funcs::kind_of,
					public Intern::is_a => function funcs::kind_of,

					private Intern::Integer => function funcs::integer,
					private Intern::Float => function funcs::float,
					private Intern::List => function funcs::list,
					private Intern::Map => function funcs::map,
					private Intern::Text => function funcs::text,
				}
			})
			.clone()
	}
}

pub mod funcs {
	use super::*;
	use crate::convert;
	use crate::members::{self, lookup, Selector};
	use crate::value::ty::Text;
	use crate::value::{Probe, Symbol};
	use crate::ErrorKind;

	fn name_of(value: &Value) -> Result<Symbol> {
		match value {
			Value::Symbol(symbol) => Ok(symbol.clone()),
			Value::Text(text) => Ok(Symbol::new(text.as_str())),
			other => Err(ErrorKind::Type(format!("{other:?} is not a symbol nor a string")).into()),
		}
	}

	pub fn to_s(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(format!("#<{}>", obj.class().name())).into())
	}

	pub fn inspect(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Text::from(obj.inspect()).into())
	}

	pub fn class(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(Value::Class(obj.class()))
	}

	pub fn frozen(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(obj.is_frozen().into())
	}

	pub fn freeze(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		obj.freeze()?;
		Ok(obj.clone())
	}

	pub fn itself(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_no_arguments()?;

		Ok(obj.clone())
	}

	pub fn respond_to(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_range(1..=2)?;

		let name = name_of(&args[0])?;
		let include_private = args.get(1).map_or(false, Value::is_truthy);

		Ok(obj.respond_to(name.as_str(), include_private).into())
	}

	fn resolve_with(obj: &Value, selector: Selector, args: Args<'_>) -> Result<Value> {
		let all = args.optional_flag(true)?;

		Ok(members::resolve(obj, selector, all).into())
	}

	pub fn methods(obj: &Value, args: Args<'_>) -> Result<Value> {
		resolve_with(obj, Selector::All, args)
	}

	pub fn public_methods(obj: &Value, args: Args<'_>) -> Result<Value> {
		resolve_with(obj, Selector::Public, args)
	}

	pub fn protected_methods(obj: &Value, args: Args<'_>) -> Result<Value> {
		resolve_with(obj, Selector::Protected, args)
	}

	pub fn private_methods(obj: &Value, args: Args<'_>) -> Result<Value> {
		resolve_with(obj, Selector::Private, args)
	}

	pub fn singleton_methods(obj: &Value, args: Args<'_>) -> Result<Value> {
		let all = args.optional_flag(true)?;

		Ok(members::singleton_methods(obj, all).into())
	}

	pub fn extend(obj: &Value, args: Args<'_>) -> Result<Value> {
		let modules = args
			.positional()
			.iter()
			.map(|arg| match arg {
				Value::Class(module) => Ok(module.clone()),
				other => Err(ErrorKind::Type(format!(
					"wrong argument type {} (expected Module)",
					other.class().name()
				))
				.into()),
			})
			.collect::<Result<Vec<_>>>()?;

		obj.extend(&modules)?;
		Ok(obj.clone())
	}

	pub fn instance_of(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		lookup::instance_of(obj, &args[0]).map(Value::from)
	}

	pub fn kind_of(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		lookup::kind_of(obj, &args[0]).map(Value::from)
	}

	/// `Integer(value, radix = null)`
	pub fn integer(_: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_range(1..=2)?;

		let radix = match args.get(1) {
			None | Some(Value::Null) => None,
			Some(radix) => match convert::to_integer(radix, None)? {
				Value::Integer(radix) => Some(radix),
				other => return Err(ErrorKind::Argument(format!("invalid radix {other:?}")).into()),
			},
		};

		convert::to_integer(&args[0], radix)
	}

	pub fn float(_: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		convert::to_float(&args[0])
	}

	pub fn list(_: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		convert::to_sequence(&args[0])
	}

	pub fn map(_: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		convert::to_mapping(&args[0])
	}

	pub fn text(_: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		convert::to_text(&args[0])
	}
}
