use super::Field;

#[derive(Debug)]
pub(crate) struct Record {
    /// The record struct identifier
    pub(crate) ident: syn::Ident,

    /// All declared fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(item: &syn::ItemStruct) -> syn::Result<Self> {
        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "records with generic parameters are not supported",
            ));
        }

        let syn::Fields::Named(_) = &item.fields else {
            return Err(syn::Error::new_spanned(
                &item.fields,
                "record fields must be named",
            ));
        };

        let fields = item
            .fields
            .iter()
            .map(Field::from_ast)
            .collect::<syn::Result<_>>()?;

        Ok(Self {
            ident: item.ident.clone(),
            fields,
        })
    }
}
