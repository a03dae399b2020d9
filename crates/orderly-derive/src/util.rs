use syn::{GenericArgument, PathArguments, Type};

///
/// Wrapper
///
/// How a nested-record field holds its record.
///

#[derive(Clone, Copy)]
pub enum Wrapper {
    Direct,
    Option,
    Boxed,
    OptionBoxed,
}

/// Split `Option<T>`, `Box<T>` and `Option<Box<T>>` into the wrapper and `T`.
pub fn unwrap_wrapper(ty: &Type) -> (Wrapper, &Type) {
    if let Some(inner) = single_type_arg(ty, "Option") {
        match single_type_arg(inner, "Box") {
            Some(boxed) => (Wrapper::OptionBoxed, boxed),
            None => (Wrapper::Option, inner),
        }
    } else if let Some(inner) = single_type_arg(ty, "Box") {
        (Wrapper::Boxed, inner)
    } else {
        (Wrapper::Direct, ty)
    }
}

fn single_type_arg<'a>(ty: &'a Type, ident: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let segment = path.path.segments.last()?;
    if segment.ident != ident {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
