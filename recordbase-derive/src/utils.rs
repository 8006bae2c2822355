use syn::{Attribute, Field, Meta, Type};

/// This returns the attribute if a bare `#[name]` attribute was found.
pub fn has_attribute<'a>(field: &'a Field, attr_name: &str) -> Option<&'a Attribute> {
    field.attrs.iter().find(|attr| attr.path.is_ident(attr_name))
}

/// Make sure a marker attribute carries no arguments.
pub fn validate_marker(attr: &Attribute) -> syn::Result<()> {
    match attr.parse_meta()? {
        Meta::Path(_) => Ok(()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a bare attribute without arguments",
        )),
    }
}

/// Whether the type is spelled `u64` (optionally as `std::primitive::u64`).
pub fn is_u64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "u64" && segment.arguments.is_empty())
            .unwrap_or(false),
        _ => false,
    }
}
