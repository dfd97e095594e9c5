use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The tags accepted by the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let slot = match ident.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
            };
            *slot = Some(input.parse()?);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let mut error_args = None;
        for attr in &attributes {
            if attr.path().is_ident("error") {
                error_args = Some(attr.parse_args::<ErrorArgs>()?);
            }
        }

        let error_args = error_args.ok_or_else(|| {
            syn::Error::new_spanned(&item.ident, "missing `#[error(...)]` attribute")
        })?;
        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "the `message` tag is required"));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ErrorKindTarget {
    /// Creates a `let` statement that brings the named fields of the struct into scope.
    fn destructure(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let fields = fields.named.iter().map(|field| &field.ident);
                quote! {
                    #[allow(unused_variables)]
                    let #name { #(#fields),* } = self;
                }
            },
            Fields::Unnamed(_) => quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => quote! {},
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure = self.destructure();
        let message = &self.error_args.message;
        let labels = match &self.error_args.labels {
            Some(labels) => quote! {
                (#labels).into_iter().map(|label| label.to_string()).collect::<Vec<String>>()
            },
            None => quote! { Vec::<String>::new() },
        };
        let help = self.error_args.help.as_ref().map(|help| quote! {
            builder.set_help(#help);
        });

        tokens.extend(quote! {
            fn message(&self) -> String {
                #destructure
                (#message).to_string()
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #destructure

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message);

                let labels: Vec<String> = #labels;
                for (text, span) in labels.into_iter().zip(spans) {
                    let mut label = ariadne::Label::new((src_id, span.clone()))
                        .with_color(cas_error::EXPR);
                    if !text.is_empty() {
                        label = label.with_message(text);
                    }
                    builder.add_label(label);
                }

                #help
                builder.finish()
            }
        });
    }
}
