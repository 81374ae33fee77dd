/// The parsed `#[column(...)]` attribute.
///
/// Allowed syntax:
///
/// #[column("name")]  -- bind the field to result column `name`
/// #[column("-")]     -- suppression marker: never populate the field
/// #[column("")]      -- same as no annotation: field stays invisible
#[derive(Debug)]
pub(crate) struct ColumnAttr {
    pub(crate) name: syn::LitStr,
}

impl ColumnAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<ColumnAttr> {
        attr.parse_args()
    }

    /// True if the annotation value is the `-` suppression marker or empty.
    pub(crate) fn is_suppressed(&self) -> bool {
        let name = self.name.value();
        name.is_empty() || name == "-"
    }
}

impl syn::parse::Parse for ColumnAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(syn::LitStr) {
            Ok(Self {
                name: input.parse()?,
            })
        } else {
            Err(lookahead.error())
        }
    }
}
