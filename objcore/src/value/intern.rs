use crate::value::Symbol;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

macro_rules! define_interned {
	(@ $name:ident) => (stringify!($name));
	(@ $_name:ident $value:literal) => ($value);

	($($name:ident $($value:literal)?)*) => {
		/// Member names the runtime itself knows about.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[allow(non_camel_case_types)]
		#[non_exhaustive]
		pub enum Intern {
			$($name,)*
			#[doc(hidden)]
			__LAST,
		}

		impl Intern {
			pub const fn as_str(self) -> &'static str {
				const STRINGS: [&'static str; Intern::__LAST as usize] = [
					$(define_interned!(@ $name $($value)?)),*
				];

				STRINGS[self as usize]
			}

			#[allow(clippy::should_implement_trait)]
			pub fn from_str(s: &str) -> Option<Self> {
				match s {
					$(define_interned!(@ $name $($value)?) => Some(Self::$name),)*
					_ => None
				}
			}
		}
	};
}

define_interned! {
	to_int to_i to_f to_ary to_a to_hash to_s to_str to_sym
	inspect class freeze frozen "frozen?" extend itself
	op_cmp "<=>" between "between?"

	Integer Float List Map Text

	methods public_methods protected_methods private_methods singleton_methods
	respond_to "respond_to?" instance_of "instance_of?" kind_of "kind_of?" is_a "is_a?"
}

impl Intern {
	/// Gets the interned [`Symbol`] for `self`.
	pub fn as_symbol(self) -> Symbol {
		use once_cell::sync::OnceCell;

		const BLANK: OnceCell<Symbol> = OnceCell::new();
		static SYMBOLS: [OnceCell<Symbol>; Intern::__LAST as usize] = [BLANK; Intern::__LAST as usize];

		SYMBOLS[self as usize].get_or_init(|| Symbol::new(self.as_str())).clone()
	}
}

impl From<Intern> for Symbol {
	fn from(intern: Intern) -> Self {
		intern.as_symbol()
	}
}

impl Display for Intern {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Deref for Intern {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		self.as_str()
	}
}
