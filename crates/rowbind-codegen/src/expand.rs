mod record;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();

        wrap_in_const(quote! {
            #record_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let rowbind = quote!(_rowbind::codegen_support);

    Expand { record, rowbind }.expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
