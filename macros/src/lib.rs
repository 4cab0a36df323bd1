use syn::{parse_macro_input, DeriveInput};
mod named_type;

/// Implements `NamedType` for a struct or enum, using its identifier as the typename.
///
/// Generics are forwarded, so `Foo<T>` gets the typename `"Foo"` for every `T`.
#[proc_macro_derive(NamedType)]
pub fn named_type(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	named_type::expand_named_type(input).into()
}
