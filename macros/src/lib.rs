use std::collections::HashSet;

use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    parenthesized,
    parse::{Parse, ParseStream, Parser},
    punctuated::Punctuated,
    Ident, LitInt, Token,
};

/// A single `Name => (red, green, blue)` line of the catalog.
struct Entry {
    ident: Ident,
    red: u8,
    green: u8,
    blue: u8,
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=>]>()?;

        let content;
        parenthesized!(content in input);
        let red = content.parse::<LitInt>()?.base10_parse::<u8>()?;
        content.parse::<Token![,]>()?;
        let green = content.parse::<LitInt>()?.base10_parse::<u8>()?;
        content.parse::<Token![,]>()?;
        let blue = content.parse::<LitInt>()?.base10_parse::<u8>()?;

        Ok(Self {
            ident,
            red,
            green,
            blue,
        })
    }
}

/// Generate the `Named` enum and the matching associated constants on `Color`
/// from a table of `PascalCaseName => (red, green, blue)` entries. Samples are
/// 8-bit, so the generated colors have a depth of 24.
#[proc_macro]
pub fn named_colors(input: TokenStream) -> TokenStream {
    expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: proc_macro2::TokenStream) -> syn::Result<proc_macro2::TokenStream> {
    let entries = Punctuated::<Entry, Token![,]>::parse_terminated.parse2(input)?;

    if entries.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "The catalog must contain at least one named color.",
        ));
    }

    let mut seen = HashSet::new();
    for entry in entries.iter() {
        if !seen.insert(entry.ident.to_string()) {
            return Err(syn::Error::new(entry.ident.span(), "duplicate named color"));
        }
    }

    let count = entries.len();
    let variants = entries.iter().map(|e| &e.ident).collect::<Vec<_>>();
    let reds = entries.iter().map(|e| e.red).collect::<Vec<_>>();
    let greens = entries.iter().map(|e| e.green).collect::<Vec<_>>();
    let blues = entries.iter().map(|e| e.blue).collect::<Vec<_>>();

    let names = entries
        .iter()
        .map(|e| e.ident.to_string().to_case(Case::Flat))
        .collect::<Vec<_>>();

    let consts = entries
        .iter()
        .map(|e| format_ident!("{}", e.ident.to_string().to_case(Case::UpperSnake)))
        .collect::<Vec<_>>();

    let docs = entries
        .iter()
        .zip(names.iter())
        .map(|(e, name)| {
            format!(
                "Represents the color `#{:02x}{:02x}{:02x}`, also known as `{}`.",
                e.red, e.green, e.blue, name
            )
        })
        .collect::<Vec<_>>();

    Ok(quote! {
        /// A color from the catalog of named presets.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Named {
            #(
                #[doc = #docs]
                #variants,
            )*
        }

        impl Named {
            /// Every named preset, in catalog order.
            pub const ALL: [Named; #count] = [#(Named::#variants,)*];

            /// The flat lower-case name of the preset, e.g. `darkslategray`.
            pub const fn name(self) -> &'static str {
                match self {
                    #(Named::#variants => #names,)*
                }
            }

            /// The `(red, green, blue)` samples of the preset at a depth of 24.
            pub const fn rgb(self) -> (u8, u8, u8) {
                match self {
                    #(Named::#variants => (#reds, #greens, #blues),)*
                }
            }
        }

        impl crate::Color {
            #(
                #[doc = #docs]
                pub const #consts: crate::Color = crate::Color::from_rgb8(#reds, #greens, #blues);
            )*
        }
    })
}
