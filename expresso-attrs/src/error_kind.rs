use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The tags of an `#[error(...)]` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Collects the `tag = expr` pairs of the given attribute. Each tag may appear at most once.
    fn from_attribute(attr: &Attribute) -> Result<Self> {
        let pairs = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        let mut args = Self::default();

        for MetaNameValue { path, value, .. } in pairs {
            let slot = match path.get_ident().map(Ident::to_string).as_deref() {
                Some("message") => &mut args.message,
                Some("labels") => &mut args.labels,
                Some("help") => &mut args.help,
                _ => {
                    let tag = path.to_token_stream().to_string();
                    return Err(syn::Error::new_spanned(&path, format!("unknown tag `{}`", tag)));
                },
            };

            if slot.replace(value).is_some() {
                return Err(syn::Error::new_spanned(&path, "tag given more than once"));
            }
        }

        Ok(args)
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,

    /// Names of the struct's fields, brought into scope for the tag expressions.
    pub field_names: Vec<Ident>,

    /// Whether the struct has named fields.
    pub has_named_fields: bool,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;

        let (field_names, has_named_fields) = match &item.fields {
            Fields::Named(fields) => (fields.named.iter().filter_map(|field| field.ident.clone()).collect(), true),
            Fields::Unit => (Vec::new(), false),
            Fields::Unnamed(_) => return Err(syn::Error::new_spanned(
                &item.ident,
                "`ErrorKind` cannot be derived for tuple structs",
            )),
        };

        let error_args = item.attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .map(ErrorArgs::from_attribute)
            .transpose()?
            .unwrap_or_default();

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` tag in `error` attribute"));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            field_names,
            has_named_fields,
            error_args,
        })
    }
}

impl ErrorKindTarget {
    /// Generates one method of the [`ErrorKind`] trait, with the struct's fields in scope.
    fn method(&self, name: &str, output: TokenStream2, body: TokenStream2) -> TokenStream2 {
        let method = Ident::new(name, proc_macro2::Span::call_site());
        let ty = &self.name;
        let fields = &self.field_names;
        let destructure = self.has_named_fields.then(|| quote! { let #ty { #(#fields),* } = self; });

        quote! {
            #[allow(unused_variables)]
            fn #method(&self) -> #output {
                #destructure
                #body
            }
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let ErrorArgs { message, labels, help } = &self.error_args;

        if let Some(e) = message {
            tokens.extend(self.method("message", quote! { String }, quote! { (#e).to_string() }));
        }
        if let Some(e) = labels {
            tokens.extend(self.method(
                "labels",
                quote! { Vec<String> },
                quote! { (#e).into_iter().map(|label| label.to_string()).collect() },
            ));
        }
        if let Some(e) = help {
            tokens.extend(self.method("help", quote! { Option<String> }, quote! { Some((#e).to_string()) }));
        }
    }
}
