use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DataEnum, DeriveInput, Fields, Variant, parse_macro_input};

/// Derives `typedseq::Element` for an enum.
///
/// Generates a `<Enum>Kind` enum with one fieldless variant per variant of
/// the input, displayed as the variant name, and maps every value to the
/// kind of its variant. The enum must also implement `Display`.
///
/// A single-field tuple variant marked `#[element(length)]` forwards
/// `as_length` to its field, so it can act as a pre-size length.
///
/// ```ignore
/// #[derive(Debug, Clone, Element)]
/// enum Cell {
///     Text(String),
///     #[element(length)]
///     Count(u32),
///     Empty,
/// }
/// // CellKind::{Text, Count, Empty}
/// ```
#[proc_macro_derive(Element, attributes(element))]
pub fn derive_element(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;
    let vis = &input.vis;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(DataEnum { variants, .. }) if !variants.is_empty() => variants,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Element can only be derived for enums with at least one variant",
            )
            .to_compile_error()
            .into();
        }
    };

    let kind_name = format_ident!("{}Kind", enum_name);
    let kind_variants: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let kind_strings: Vec<_> = kind_variants.iter().map(|v| v.to_string()).collect();

    let kind_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let pattern = pattern(v);
        quote! { Self::#ident #pattern => #kind_name::#ident }
    });

    let mut length_arms = Vec::new();
    for v in variants {
        match length_variant(v) {
            Ok(false) => {}
            Ok(true) => {
                let ident = &v.ident;
                length_arms.push(quote! {
                    Self::#ident(inner) => ::typedseq::Element::as_length(inner)
                });
            }
            Err(e) => return e.to_compile_error().into(),
        }
    }

    let as_length = if length_arms.is_empty() {
        quote! {}
    } else {
        quote! {
            #[inline]
            #[allow(unreachable_patterns)]
            fn as_length(&self) -> ::std::option::Option<usize> {
                match self {
                    #(#length_arms,)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };

    let expanded = quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #kind_name {
            #(#kind_variants,)*
        }

        impl ::std::fmt::Display for #kind_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(match self {
                    #(#kind_name::#kind_variants => #kind_strings,)*
                })
            }
        }

        impl #impl_generics ::typedseq::Element for #enum_name #ty_generics #where_clause {
            type Kind = #kind_name;

            #[inline]
            fn kind(&self) -> Self::Kind {
                match self {
                    #(#kind_arms,)*
                }
            }

            #as_length
        }
    };

    TokenStream::from(expanded)
}

fn pattern(variant: &Variant) -> proc_macro2::TokenStream {
    match &variant.fields {
        Fields::Unit => quote! {},
        Fields::Unnamed(_) => quote! { (..) },
        Fields::Named(_) => quote! { { .. } },
    }
}

/// Returns whether the variant carries `#[element(length)]`, which is only
/// valid on single-field tuple variants.
fn length_variant(variant: &Variant) -> syn::Result<bool> {
    let mut marked = false;

    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("element")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("length") {
                marked = true;
                Ok(())
            } else {
                Err(meta.error("unknown element attribute, expected `length`"))
            }
        })?;
    }

    if marked && !matches!(&variant.fields, Fields::Unnamed(f) if f.unnamed.len() == 1) {
        return Err(syn::Error::new_spanned(
            &variant.ident,
            "#[element(length)] requires a single-field tuple variant",
        ));
    }

    Ok(marked)
}
