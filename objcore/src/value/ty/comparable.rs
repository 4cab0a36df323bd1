use crate::value::ty::{Class, Singleton};
use crate::value::{Args, Gc, Intern, Probe};
use crate::{ErrorKind, Result, Value};
use std::cmp::Ordering;

/// Ordering members built on top of `<=>`.
#[derive(Debug, Clone, Copy)]
pub struct ComparableModule;

impl Singleton for ComparableModule {
	fn instance() -> Gc<Class> {
		use once_cell::sync::OnceCell;

		static INSTANCE: OnceCell<Gc<Class>> = OnceCell::new();

		INSTANCE
			.get_or_init(|| {
				create_class! { module "Comparable";
					public Intern::between => function funcs::between,
					public "clamp" => function funcs::clamp,
				}
			})
			.clone()
	}
}

/// Compares `obj` and `other` via `obj.<=>(other)`.
fn compare(obj: &Value, other: &Value) -> Result<Ordering> {
	match obj.invoke(Intern::op_cmp, Args::new(std::slice::from_ref(other)))? {
		Value::Integer(ordering) => Ok(ordering.cmp(&0)),
		_ => Err(ErrorKind::Argument(format!(
			"comparison of {} with {other:?} failed",
			obj.class().name()
		))
		.into()),
	}
}

pub mod funcs {
	use super::*;

	/// `between?(min, max)`
	pub fn between(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(2)?;

		let between =
			compare(obj, &args[0])? != Ordering::Less && compare(obj, &args[1])? != Ordering::Greater;

		Ok(between.into())
	}

	/// `clamp(min, max)`
	pub fn clamp(obj: &Value, args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(2)?;

		if compare(&args[0], &args[1])? == Ordering::Greater {
			return Err(ErrorKind::Argument("min argument must be less than or equal to max argument".into()).into());
		}

		if compare(obj, &args[0])? == Ordering::Less {
			Ok(args[0].clone())
		} else if compare(obj, &args[1])? == Ordering::Greater {
			Ok(args[1].clone())
		} else {
			Ok(obj.clone())
		}
	}
}
