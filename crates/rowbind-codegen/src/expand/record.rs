use super::Expand;
use crate::schema::{Binding, FieldKind};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record_ident = &self.record.ident;

        let bindings = self.record.fields.iter().filter_map(|field| {
            let binding = field.binding.as_ref()?;
            let column = &binding.column;
            let kind = self.expand_field_kind(binding.kind);
            let store = self.expand_store_fn(&field.ident, binding);

            Some(quote! {
                #rowbind::ColumnBinding {
                    column: #column,
                    kind: #kind,
                    store: #store,
                },
            })
        });

        quote! {
            impl #rowbind::Record for #record_ident {
                fn bindings() -> &'static [#rowbind::ColumnBinding<Self>] {
                    const BINDINGS: &[#rowbind::ColumnBinding<#record_ident>] = &[
                        #( #bindings )*
                    ];
                    BINDINGS
                }
            }
        }
    }

    fn expand_field_kind(&self, kind: FieldKind) -> TokenStream {
        let rowbind = &self.rowbind;

        match kind {
            FieldKind::Int => quote!(#rowbind::FieldKind::Int),
            FieldKind::Float => quote!(#rowbind::FieldKind::Float),
            FieldKind::Str => quote!(#rowbind::FieldKind::Str),
            FieldKind::Bool => quote!(#rowbind::FieldKind::Bool),
        }
    }

    /// Expands the copy-back operation for one bound field: take the typed
    /// scratch slot, narrow to the field's declared width where needed, and
    /// write the field.
    fn expand_store_fn(&self, ident: &syn::Ident, binding: &Binding) -> TokenStream {
        let rowbind = &self.rowbind;
        let ty = &binding.ty;

        match binding.kind {
            // Narrowing below i64 is checked; an out-of-range value is a
            // mapping error, not a silent wrap.
            FieldKind::Int => quote! {
                |record, slot| {
                    let value = slot.to_i64()?;
                    record.#ident = value.try_into().map_err(|_| {
                        #rowbind::Error::mapping(format!(
                            "integer value {} out of range for field `{}`",
                            value,
                            stringify!(#ident),
                        ))
                    })?;
                    Ok(())
                }
            },
            FieldKind::Float => quote! {
                |record, slot| {
                    record.#ident = slot.to_f64()? as #ty;
                    Ok(())
                }
            },
            FieldKind::Str => quote! {
                |record, slot| {
                    record.#ident = slot.to_string()?;
                    Ok(())
                }
            },
            FieldKind::Bool => quote! {
                |record, slot| {
                    record.#ident = slot.to_bool()?;
                    Ok(())
                }
            },
        }
    }
}
