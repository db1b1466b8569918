//! Shared utilities for the diagnostic derive macro.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{punctuated::Punctuated, token::Comma, Data, DeriveInput, Field, Fields, LitStr};

/// Validate that the input is a struct with named fields, returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Names interpolated by a format template, in first-use order.
///
/// `{{` escapes are skipped. Positional placeholders (`{}`, `{0}`) are
/// reported as `None` so the caller can reject them.
pub fn template_placeholders(template: &str) -> Vec<Option<String>> {
    let mut names: Vec<Option<String>> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            continue;
        }

        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }

        let entry = if name.is_empty() || name.starts_with(|ch: char| ch.is_ascii_digit()) {
            None
        } else {
            Some(name)
        };
        if !names.contains(&entry) {
            names.push(entry);
        }
    }

    names
}

/// Generate the named `format!` arguments a template needs.
///
/// Returns a `TokenStream` of the form `, field1 = self.field1, ...` (empty
/// when the template interpolates nothing), or an error spanned at the
/// template when it names something that is not a field.
pub fn generate_format_args<'a>(
    template: &LitStr,
    fields: impl Iterator<Item = &'a Field> + Clone,
) -> syn::Result<TokenStream2> {
    let mut args = Vec::new();

    for placeholder in template_placeholders(&template.value()) {
        let Some(name) = placeholder else {
            return Err(syn::Error::new_spanned(
                template,
                "positional placeholders are not supported; name a field instead",
            ));
        };

        let field = fields
            .clone()
            .filter_map(|f| f.ident.as_ref())
            .find(|ident| *ident == name.as_str())
            .ok_or_else(|| {
                syn::Error::new_spanned(template, format!("no field named `{name}` to interpolate"))
            })?;

        args.push(quote! { #field = self.#field });
    }

    Ok(quote! { #(, #args)* })
}
