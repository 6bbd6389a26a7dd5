//! Derive macros for Far Away action enums
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `far_away_core::Action` and generates
//!   classification helpers for the variants of an action enum
//!
//! # Example
//!
//! ```ignore
//! use far_away_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum PackingAction {
//!     #[list]
//!     DeleteItem { id: ItemId },
//!
//!     #[form]
//!     SubmitForm,
//!
//!     #[view]
//!     SetSortMode { mode: SortMode },
//! }
//!
//! assert!(PackingAction::SubmitForm.is_form_action());
//! assert_eq!(PackingAction::SubmitForm.name(), "submit_form");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident, Variant};

/// Variant categories understood by `#[derive(Action)]`
const CATEGORIES: [&str; 3] = ["list", "form", "view"];

/// Derive macro for action enums
///
/// Generates:
/// - `impl far_away_core::action::Action` with `name()` returning the
///   snake_case variant name (`TogglePacked` → `"toggle_packed"`)
/// - `is_list_action()` - true for variants marked `#[list]` (mutate the packing list)
/// - `is_form_action()` - true for variants marked `#[form]` (edit or submit the draft)
/// - `is_view_action()` - true for variants marked `#[view]` (change how the list is shown)
///
/// # Attributes
///
/// - `#[list]`, `#[form]`, `#[view]` - at most one per variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant carries more than one category attribute
#[proc_macro_derive(Action, attributes(list, form, view))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut list_arms = Vec::new();
    let mut form_arms = Vec::new();
    let mut view_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let marked: Vec<&str> = CATEGORIES
            .iter()
            .copied()
            .filter(|category| has_attribute(&variant.attrs, category))
            .collect();

        if marked.len() > 1 {
            return syn::Error::new_spanned(
                variant,
                format!("Variant cannot be marked with more than one of #[list], #[form], #[view] (found {})", marked.join(", ")),
            )
            .to_compile_error()
            .into();
        }

        let pattern = variant_pattern(variant);
        match marked.first() {
            Some(&"list") => list_arms.push(quote! { #pattern => true, }),
            Some(&"form") => form_arms.push(quote! { #pattern => true, }),
            Some(&"view") => view_arms.push(quote! { #pattern => true, }),
            _ => {},
        }

        let action_name = snake_case(&variant.ident);
        name_arms.push(quote! { #pattern => #action_name, });
    }

    let name_body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#name_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #name {
            /// Returns true if this action mutates the packing list
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_list_action(&self) -> bool {
                match self {
                    #(#list_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action edits or submits the draft form
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_form_action(&self) -> bool {
                match self {
                    #(#form_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action only changes how the list is viewed
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_view_action(&self) -> bool {
                match self {
                    #(#view_arms)*
                    _ => false,
                }
            }
        }

        impl ::far_away_core::action::Action for #name {
            fn name(&self) -> &'static str {
                #name_body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern ignoring the variant's fields
fn variant_pattern(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

/// `TogglePacked` → `toggle_packed`
fn snake_case(ident: &Ident) -> String {
    let mut out = String::new();
    for (i, ch) in ident.to_string().chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
