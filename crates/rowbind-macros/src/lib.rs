extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowbind::Record` for a named-field struct.
///
/// Fields opt in to mapping with `#[column("name")]`; a field annotated
/// `#[column("-")]` is never populated, and unannotated fields are invisible
/// to the mapper.
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
