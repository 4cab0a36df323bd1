use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn expand_named_type(input: DeriveInput) -> TokenStream {
	let name = input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	quote! {
		#[automatically_derived]
		impl #impl_generics crate::value::NamedType for #name #ty_generics #where_clause {
			const TYPENAME: crate::value::Typename = stringify!(#name);
		}
	}
}
