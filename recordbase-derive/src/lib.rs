mod utils;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed, Ident};
use utils::{has_attribute, is_u64, validate_marker};

/// Implements `recordbase::Entity` for a struct.
///
/// The id field is the one marked `#[id]`, or the field called `id` when no
/// field is marked. It must be a `u64`.
#[proc_macro_derive(Entity, attributes(id))]
pub fn entity(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = &ast.ident;

    let fields = match &ast.data {
        Data::Struct(syn::DataStruct {
            fields: Fields::Named(FieldsNamed { named, .. }),
            ..
        }) => named,
        _ => {
            return syn::Error::new_spanned(name, "can only derive on a struct with named fields")
                .to_compile_error()
                .into()
        }
    };

    let id_field = match find_id_field(name, fields.iter()) {
        Ok(ident) => ident,
        Err(err) => return err.to_compile_error().into(),
    };

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::recordbase::Entity for #name #ty_generics #where_clause {
            fn id(&self) -> u64 {
                self.#id_field
            }

            fn set_id(&mut self, id: u64) {
                self.#id_field = id;
            }
        }
    };

    expanded.into()
}

/// Pick the identity field and check its attributes and type.
fn find_id_field<'a>(
    struct_name: &Ident,
    fields: impl Iterator<Item = &'a Field> + Clone,
) -> syn::Result<&'a Ident> {
    let mut marked = vec![];
    for field in fields.clone() {
        if let Some(attr) = has_attribute(field, "id") {
            validate_marker(attr)?;
            marked.push(field);
        }
    }

    let field = match marked.as_slice() {
        [field] => *field,
        [] => fields
            .into_iter()
            .find(|field| field.ident.as_ref().map_or(false, |ident| ident == "id"))
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    struct_name,
                    "no id field: mark a `u64` field with #[id] or name it `id`",
                )
            })?,
        [_, second, ..] => {
            return Err(syn::Error::new_spanned(
                &second.ident,
                "only one field may be marked #[id]",
            ))
        }
    };

    if !is_u64(&field.ty) {
        return Err(syn::Error::new_spanned(&field.ty, "the id field must be a `u64`"));
    }

    // Named fields always carry an ident.
    field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "id field must be named"))
}
