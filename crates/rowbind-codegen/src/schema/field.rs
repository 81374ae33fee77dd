use super::{ColumnAttr, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field name
    pub(crate) ident: syn::Ident,

    /// The field's column binding, if it carries one.
    ///
    /// `None` covers every way a field stays invisible to the mapper: no
    /// `#[column]` attribute, an empty annotation, the `-` suppression
    /// marker, or a declared type outside the four supported kinds. The last
    /// case is a silent gap, not an error: the field is simply never
    /// populated.
    pub(crate) binding: Option<Binding>,
}

#[derive(Debug)]
pub(crate) struct Binding {
    /// Result-column name the field binds to
    pub(crate) column: syn::LitStr,

    /// Declared kind of the field
    pub(crate) kind: FieldKind,

    /// The field's declared type identifier (`i32`, `f64`, `String`, ...)
    pub(crate) ty: syn::Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Int,
    Float,
    Str,
    Bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    column = Some(ColumnAttr::from_ast(attr)?);
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let binding = column
            .filter(|attr| !attr.is_suppressed())
            .and_then(|attr| {
                let (kind, ty) = field_kind(&field.ty)?;
                Some(Binding {
                    column: attr.name,
                    kind,
                    ty,
                })
            });

        Ok(Self {
            ident: ident.clone(),
            binding,
        })
    }
}

/// Classifies a declared field type into one of the four supported kinds.
///
/// Only bare path types are recognized; anything else (references, options,
/// fully qualified paths, unsigned integers, ...) is unsupported and the
/// field receives no binding.
fn field_kind(ty: &syn::Type) -> Option<(FieldKind, syn::Ident)> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    let ident = path.path.get_ident()?.clone();

    let kind = match ident.to_string().as_str() {
        "i8" | "i16" | "i32" | "i64" | "isize" => FieldKind::Int,
        "f32" | "f64" => FieldKind::Float,
        "String" => FieldKind::Str,
        "bool" => FieldKind::Bool,
        _ => return None,
    };

    Some((kind, ident))
}
