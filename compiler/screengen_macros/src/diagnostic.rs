//! Diagnostic derive macro implementation.
//!
//! Generates `into_diagnostic()` and `From<T> for Diagnostic` from a struct
//! definition.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Field, Ident, LitStr};

use crate::utils::{generate_format_args, validate_struct_with_named_fields};

/// Main entry point for the Diagnostic derive macro.
pub fn derive_diagnostic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_diagnostic_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn derive_diagnostic_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // Parse #[diag(CODE, "message")] attribute
    let (error_code, message) = parse_diag_attribute(input)?;

    let fields = validate_struct_with_named_fields(input, "Diagnostic")?;

    let constructor = if error_code.to_string().starts_with('W') {
        quote! { warning }
    } else {
        quote! { error }
    };

    let message_args = generate_format_args(&message, fields.iter())?;
    let primary_span = generate_primary_span(fields.iter())?;
    let label_additions = generate_secondary_labels(fields.iter())?;
    let note_additions = generate_text_additions(fields.iter(), "note", &quote! { with_note })?;
    let help_additions =
        generate_text_additions(fields.iter(), "help", &quote! { with_suggestion })?;

    Ok(quote! {
        impl #name {
            /// Convert this value into a Diagnostic.
            pub fn into_diagnostic(self) -> ::screengen_diagnostic::Diagnostic {
                let mut diag = ::screengen_diagnostic::Diagnostic::#constructor(
                    ::screengen_diagnostic::ErrorCode::#error_code,
                )
                .with_message(format!(#message #message_args));

                #primary_span
                #(#label_additions)*
                #(#note_additions)*
                #(#help_additions)*

                diag
            }
        }

        impl From<#name> for ::screengen_diagnostic::Diagnostic {
            fn from(value: #name) -> Self {
                value.into_diagnostic()
            }
        }
    })
}

/// Parse the #[diag(CODE, "message")] attribute.
fn parse_diag_attribute(input: &syn::DeriveInput) -> syn::Result<(Ident, LitStr)> {
    for attr in &input.attrs {
        if attr.path().is_ident("diag") {
            return attr.parse_args_with(|input: syn::parse::ParseStream| {
                let code: Ident = input.parse()?;
                let _: syn::Token![,] = input.parse()?;
                let message: LitStr = input.parse()?;
                Ok((code, message))
            });
        }
    }

    Err(syn::Error::new_spanned(
        input,
        "missing #[diag(CODE, \"message\")] attribute",
    ))
}

fn field_ident(field: &Field) -> syn::Result<&Ident> {
    field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|a| a.path().is_ident(name))
}

/// Get the label message from a field's #[label("message")] attribute.
fn get_label_message(field: &Field) -> syn::Result<Option<LitStr>> {
    for attr in &field.attrs {
        if attr.path().is_ident("label") {
            let msg: LitStr = attr.parse_args()?;
            return Ok(Some(msg));
        }
    }
    Ok(None)
}

/// Generate code for the primary span field.
fn generate_primary_span<'a>(
    fields: impl Iterator<Item = &'a Field> + Clone,
) -> syn::Result<TokenStream2> {
    let mut primary = fields.clone().filter(|f| has_attr(f, "primary_span"));

    let Some(field) = primary.next() else {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "no field marked with #[primary_span]",
        ));
    };
    if let Some(extra) = primary.next() {
        return Err(syn::Error::new_spanned(
            extra,
            "only one field may be marked with #[primary_span]",
        ));
    }

    let field_name = field_ident(field)?;
    Ok(if let Some(msg) = get_label_message(field)? {
        let args = generate_format_args(&msg, fields)?;
        quote! {
            diag = diag.with_label(self.#field_name, format!(#msg #args));
        }
    } else {
        quote! {
            diag = diag.with_label(self.#field_name, "here");
        }
    })
}

/// Generate code to add labels for non-primary span fields.
fn generate_secondary_labels<'a>(
    fields: impl Iterator<Item = &'a Field> + Clone,
) -> syn::Result<Vec<TokenStream2>> {
    let mut additions = Vec::new();

    for field in fields.clone() {
        if has_attr(field, "primary_span") {
            continue;
        }
        if let Some(msg) = get_label_message(field)? {
            let field_name = field_ident(field)?;
            let args = generate_format_args(&msg, fields.clone())?;
            additions.push(quote! {
                diag = diag.with_secondary_label(self.#field_name, format!(#msg #args));
            });
        }
    }

    Ok(additions)
}

/// Generate code for text-only additions (`#[note]`, `#[help]`).
fn generate_text_additions<'a>(
    fields: impl Iterator<Item = &'a Field> + Clone,
    attr_name: &str,
    method: &TokenStream2,
) -> syn::Result<Vec<TokenStream2>> {
    let mut additions = Vec::new();

    for field in fields.clone() {
        for attr in &field.attrs {
            if attr.path().is_ident(attr_name) {
                let msg: LitStr = attr.parse_args()?;
                let args = generate_format_args(&msg, fields.clone())?;
                additions.push(quote! {
                    diag = diag.#method(format!(#msg #args));
                });
            }
        }
    }

    Ok(additions)
}
