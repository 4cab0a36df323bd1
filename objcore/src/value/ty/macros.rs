/// Builds a builtin class or module out of native members.
///
/// Each member is written `<visibility> <name> => <kind> <func>`, where `kind` is either `method`
/// (the receiver is downcast for `func`) or `function` (`func` receives the raw `&Value`).
///
/// Builtins are constructed once, so any failure here is a bug and panics.
macro_rules! create_class {
	(@func $attr:expr, method $func:expr) => ($crate::value::ty::RustFn::method($attr, $func));
	(@func $attr:expr, function $func:expr) => ($crate::value::ty::RustFn::new($attr, $func));
	(@func $_attr:expr, $other:tt $_func:expr) => {
		compile_error!(concat!("Unknown function kind '", stringify!($other), "'; Please use `method` or `function`"))
	};

	(@members $name:expr, $builder:expr; $($vis:ident $attr:expr => $kind:tt $func:expr),* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::value::{Intern, ToValue};

		let builder = $builder;
		$(let builder = builder.$vis($attr, create_class!(@func $attr, $kind $func));)*

		builder.finish().expect(concat!("Class creation for '", $name, "' failed!"))
	}};

	(module $name:literal $(, include $include:expr)*; $($rest:tt)*) => {
		create_class!(@members $name,
			$crate::value::ty::Class::module_builder($name)
				$(.include($include))*;
			$($rest)*)
	};

	($name:literal $(, superclass $superclass:expr)? $(, include $include:expr)*; $($rest:tt)*) => {
		create_class!(@members $name,
			$crate::value::ty::Class::builder($name)
				$(.superclass($superclass))?
				$(.include($include))*;
			$($rest)*)
	};
}
