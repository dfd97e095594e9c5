mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `cas-error` for the given struct.
///
/// The message, labels, and help text of the error are given with the `error` attribute:
///
/// ```ignore
/// use cas_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not defined", name),
///     labels = ["this variable"],
///     help = "try assigning it a value first",
/// )]
/// pub struct UndefinedVariable {
///     pub name: String,
/// }
/// ```
///
/// | Tag       | Description                                                                 |
/// | --------- | --------------------------------------------------------------------------- |
/// | `message` | The message at the top of the report. Required.                             |
/// | `labels`  | An array of label texts, paired in order with the spans of the error.       |
/// | `help`    | Optional help text describing what the user can do to fix the error.        |
///
/// Each tag accepts an expression that evaluates to something implementing `ToString`. For
/// structs with named fields, the fields are in scope (by reference) while the expressions are
/// evaluated. Tuple structs are not supported.
///
/// The generated code refers to the `ariadne` and `cas_error` crates, so the crate deriving the
/// trait must depend on both.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl cas_error::ErrorKind for #name {
            #target
        }
    }.into()
}
