// ember-core-client/ember-proc-macros
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use proc_macro2::Ident;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Implements `From<&AppDependencies>` for an app service. Fields marked with `#[inject]` are
/// cloned from the field of the same name in `AppDependencies`, all other fields are
/// initialized with `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_initialization = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let is_injected = field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("inject"));

        Some(if is_injected {
            quote! { #ident: deps.#ident.clone() }
        } else {
            quote! { #ident: Default::default() }
        })
    });

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Generates a public `<Name>Dependencies` struct mirroring the fields of a domain service
/// together with a `From` conversion. Tests use it to assemble the service from mocks.
#[proc_macro_derive(DependenciesStruct)]
pub fn dependencies_struct(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err.to_compile_error().into(),
    };

    let idents = fields
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect::<Vec<&Ident>>();
    let types = fields.iter().map(|field| &field.ty);

    let name = &input.ident;
    let dependencies_struct_name = format_ident!("{}Dependencies", name);

    let expanded = quote! {
        pub struct #dependencies_struct_name {
            #(pub #idents: #types,)*
        }

        impl From<#dependencies_struct_name> for #name {
            fn from(deps: #dependencies_struct_name) -> Self {
                Self {
                    #(#idents: deps.#idents,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

fn named_fields(input: &DeriveInput) -> syn::Result<&Punctuated<Field, Comma>> {
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "This macro only supports structs.",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "This macro only supports structs with named fields.",
        ));
    };

    Ok(&fields.named)
}
