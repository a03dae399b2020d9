use crate::{
    attrs::{ContainerAttrs, FieldAttrs},
    util::{Wrapper, unwrap_wrapper},
};
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use std::collections::BTreeSet;
use syn::{Data, DeriveInput, Error, Fields, Ident, Visibility, ext::IdentExt};

// derive_sortable
pub fn derive_sortable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Sortable cannot be derived for generic structs",
        ));
    }

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            return Err(Error::new_spanned(
                &data.fields,
                "Sortable can only be derived for structs with named fields",
            ));
        }
    } else {
        return Err(Error::new_spanned(
            ident,
            "Sortable can only be derived for structs with named fields",
        ));
    };

    let container = ContainerAttrs::from_attrs(&input.attrs)?;
    let ident_str = ident.unraw().to_string();

    let mut seen = BTreeSet::new();
    let mut readers = Vec::new();
    let mut models = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = FieldAttrs::from_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }

        let Some(field_ident) = field.ident.as_ref() else {
            return Err(Error::new_spanned(field, "expected a named field"));
        };
        let rust_name = field_ident.unraw().to_string();
        let name = match (&attrs.rename, container.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(&rust_name),
            (None, None) => rust_name.clone(),
        };

        if name.is_empty() || name.contains(['.', ',']) || name.contains(char::is_whitespace) {
            return Err(Error::new_spanned(
                field_ident,
                format!("sort name '{name}' must not be empty or contain '.', ',' or whitespace"),
            ));
        }
        if !seen.insert(name.clone()) {
            return Err(Error::new_spanned(
                field_ident,
                format!("duplicate sort name '{name}'"),
            ));
        }

        let visibility = visibility_tokens(&field.vis);

        if attrs.nested {
            let link_fn = format_ident!("__orderly_link_{}", index);
            let (wrapper, inner_ty) = unwrap_wrapper(&field.ty);
            let project = match wrapper {
                Wrapper::Direct => quote! {
                    .map(|record| &record.#field_ident as &dyn ::core::any::Any)
                },
                Wrapper::Boxed => quote! {
                    .map(|record| &*record.#field_ident as &dyn ::core::any::Any)
                },
                Wrapper::Option => quote! {
                    .and_then(|record| record.#field_ident.as_ref())
                    .map(|inner| inner as &dyn ::core::any::Any)
                },
                Wrapper::OptionBoxed => quote! {
                    .and_then(|record| record.#field_ident.as_deref())
                    .map(|inner| inner as &dyn ::core::any::Any)
                },
            };

            readers.push(quote! {
                fn #link_fn(
                    record: &dyn ::core::any::Any,
                ) -> ::core::option::Option<&dyn ::core::any::Any> {
                    record.downcast_ref::<#ident>()#project
                }
            });
            models.push(quote! {
                ::orderly::model::FieldModel {
                    name: #name,
                    ident: #rust_name,
                    visibility: #visibility,
                    kind: ::orderly::model::FieldKind::Record {
                        model: <#inner_ty as ::orderly::traits::Sortable>::model,
                        link: #link_fn,
                    },
                }
            });
        } else {
            let read_fn = format_ident!("__orderly_read_{}", index);
            let field_ty = &field.ty;

            readers.push(quote! {
                fn #read_fn(
                    record: &dyn ::core::any::Any,
                ) -> ::core::option::Option<::orderly::value::Value> {
                    record
                        .downcast_ref::<#ident>()
                        .map(|record| ::orderly::traits::FieldValue::to_value(&record.#field_ident))
                }
            });
            models.push(quote! {
                ::orderly::model::FieldModel {
                    name: #name,
                    ident: #rust_name,
                    visibility: #visibility,
                    kind: ::orderly::model::FieldKind::Scalar {
                        kind: <#field_ty as ::orderly::traits::FieldValue>::KIND,
                        read: #read_fn,
                    },
                }
            });
        }
    }

    let model_static = Ident::new("__ORDERLY_MODEL", Span::call_site());

    Ok(quote! {
        impl ::orderly::traits::Sortable for #ident {
            fn model() -> &'static ::orderly::model::RecordModel {
                #(#readers)*

                static #model_static: ::orderly::model::RecordModel = ::orderly::model::RecordModel {
                    path: ::core::concat!(::core::module_path!(), "::", #ident_str),
                    name: #ident_str,
                    type_id: ::core::any::TypeId::of::<#ident>,
                    fields: &[#(#models),*],
                };

                &#model_static
            }
        }
    })
}

fn visibility_tokens(vis: &Visibility) -> TokenStream {
    match vis {
        Visibility::Public(_) => quote!(::orderly::model::Visibility::Public),
        Visibility::Restricted(_) => quote!(::orderly::model::Visibility::Restricted),
        Visibility::Inherited => quote!(::orderly::model::Visibility::Private),
    }
}
