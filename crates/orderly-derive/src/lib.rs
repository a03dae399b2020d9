use proc_macro::TokenStream;

mod attrs;
mod sortable;
mod util;


/// Derive the `Sortable` field registry for a struct with named fields.
///
/// Container attribute: `#[sort(rename_all = "PascalCase" | "camelCase" | "snake_case")]`.
/// Field attributes: `#[sort(rename = "..")]`, `#[sort(nested)]`, `#[sort(skip)]`.
#[proc_macro_derive(Sortable, attributes(sort))]
pub fn derive_sortable(input: TokenStream) -> TokenStream {
    sortable::derive_sortable(input.into()).into()
}
