//! Describe derive macro implementation.
//!
//! Generates a `lesser::Describe` implementation whose shape is a record of
//! the struct's fields. Generated code only uses `::lesser` paths.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput, Field, Generics, Index, Member};

use crate::utils::{field_label, has_skip_attr, reject_lifetimes, validate_struct};

/// Main entry point for the Describe derive macro.
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_describe_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_describe_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct(input, "Describe")?;
    reject_lifetimes(&input.generics, "Describe")?;

    let generics = add_describe_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let container = quote! { #name #ty_generics };

    let entries = fields
        .iter()
        .enumerate()
        .map(|(index, field)| generate_field(&container, index, field))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::lesser::Describe for #name #ty_generics #where_clause {
            fn shape() -> ::lesser::Shape<Self> {
                ::lesser::Shape::record(::std::vec![#(#entries),*])
            }
        }
    })
}

/// Every type parameter must itself be described.
fn add_describe_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::lesser::Describe));
    }
    generics
}

/// One `Field` constructor for the record.
fn generate_field(container: &TokenStream2, index: usize, field: &Field) -> syn::Result<TokenStream2> {
    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    };
    let label = field_label(index, field);
    let ty = &field.ty;
    let offset = quote! { ::core::mem::offset_of!(#container, #member) };

    if label.starts_with('_') || has_skip_attr(field)? {
        return Ok(quote! {
            ::lesser::Field::discard::<#ty>(#label, #offset)
        });
    }

    Ok(quote! {
        ::lesser::Field::new::<#ty, _>(#label, #offset, |value: &Self| &value.#member)
    })
}
