use convert_case::{Case, Casing};
use syn::{Attribute, Error, LitStr};

///
/// RenameRule
///

#[derive(Clone, Copy)]
pub enum RenameRule {
    Pascal,
    Camel,
    Snake,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self, Error> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            other => Err(Error::new_spanned(
                lit,
                format!(
                    "unsupported rename_all rule '{other}', expected \"PascalCase\", \"camelCase\" or \"snake_case\""
                ),
            )),
        }
    }

    pub fn apply(self, ident: &str) -> String {
        let case = match self {
            Self::Pascal => Case::Pascal,
            Self::Camel => Case::Camel,
            Self::Snake => Case::Snake,
        };

        ident.to_case(case)
    }
}

///
/// ContainerAttrs
///

#[derive(Default)]
pub struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("sort")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameRule::parse(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported container attribute, expected `rename_all`"))
                }
            })?;
        }

        Ok(out)
    }
}

///
/// FieldAttrs
///

#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub nested: bool,
    pub skip: bool,
}

impl FieldAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut out = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("sort")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("nested") {
                    out.nested = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported field attribute, expected `rename`, `nested` or `skip`",
                    ))
                }
            })?;
        }

        Ok(out)
    }
}
