//! Shared utilities for the derive.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Generics};

/// Validate that the input is a struct, returning its fields.
pub fn validate_struct<'a>(input: &'a DeriveInput, macro_name: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Reject lifetime parameters; described types are `'static`.
pub fn reject_lifetimes(generics: &Generics, macro_name: &str) -> syn::Result<()> {
    match generics.lifetimes().next() {
        Some(lifetime) => Err(syn::Error::new_spanned(
            lifetime,
            format!("{macro_name} derive does not support lifetime parameters"),
        )),
        None => Ok(()),
    }
}

/// Name of a field as reported in descriptors: the unraw identifier, or the
/// position for tuple structs.
pub fn field_label(index: usize, field: &Field) -> String {
    match &field.ident {
        Some(ident) => ident.unraw().to_string(),
        None => index.to_string(),
    }
}

/// Check for `#[lesser(skip)]`.
pub fn has_skip_attr(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("lesser") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown lesser attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
