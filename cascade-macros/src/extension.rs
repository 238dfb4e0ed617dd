//! Extension-related macros.
//!
//! This module contains:
//! - `#[extension]` - Attribute macro deriving a capability surface from an impl block

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, LitStr, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[extension]` macro.
pub(crate) struct ExtensionArgs {
    pub args: Type,
    pub output: Type,
    pub configurable: bool,
    pub loggable: bool,
}

impl Parse for ExtensionArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = None;
        let mut output = None;
        let mut configurable = false;
        let mut loggable = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "args" => {
                    input.parse::<Token![=]>()?;
                    args = Some(input.parse::<Type>()?);
                }
                "output" => {
                    input.parse::<Token![=]>()?;
                    output = Some(input.parse::<Type>()?);
                }
                "configurable" => configurable = true,
                "loggable" => loggable = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let args = args.ok_or_else(|| input.error("missing `args = Type`"))?;
        let output = output.ok_or_else(|| input.error("missing `output = Type`"))?;

        Ok(ExtensionArgs {
            args,
            output,
            configurable,
            loggable,
        })
    }
}

/// What `#[capability(...)]` asked for on one method.
#[derive(Default)]
struct CapabilityAttr {
    skip: bool,
    name: Option<String>,
}

impl CapabilityAttr {
    /// Parses and strips every `#[capability]` attribute from `attrs`.
    fn take(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut parsed = CapabilityAttr::default();
        let mut kept = Vec::with_capacity(attrs.len());

        for attr in attrs.drain(..) {
            if !attr.path().is_ident("capability") {
                kept.push(attr);
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `name = \"...\"`"))
                }
            })?;
        }

        *attrs = kept;
        Ok(parsed)
    }
}

/// A public `&self` method with exactly one argument.
fn is_capability(method: &ImplItemFn) -> bool {
    let sig = &method.sig;
    let shared_receiver = matches!(
        sig.inputs.first(),
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some()
                && receiver.mutability.is_none()
                && receiver.colon_token.is_none()
    );

    matches!(method.vis, Visibility::Public(_))
        && shared_receiver
        && sig.inputs.len() == 2
        && matches!(sig.inputs.last(), Some(FnArg::Typed(_)))
        && sig.generics.params.is_empty()
        && sig.asyncness.is_none()
}

/// Implementation of the `#[extension]` macro.
pub fn extension_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as ExtensionArgs);
    let input = parse_macro_input!(item as ItemImpl);

    expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(args: ExtensionArgs, mut input: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[extension] must be placed on an inherent impl block",
        ));
    }

    let mut bindings: Vec<TokenStream2> = Vec::new();
    for item in input.items.iter_mut() {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        let capability = CapabilityAttr::take(&mut method.attrs)?;
        if capability.skip || !is_capability(method) {
            continue;
        }

        let ident = &method.sig.ident;
        let name = capability.name.unwrap_or_else(|| ident.to_string());
        bindings.push(quote! {
            .bind(#name, &self, Self::#ident)
        });
    }

    let arg_type = &args.args;
    let output_type = &args.output;
    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let configuration = args.configurable.then(|| {
        quote! {
            fn configuration(&self) -> ::core::option::Option<&dyn ::cascade::Configurable> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let use_logger = args.loggable.then(|| {
        quote! {
            fn use_logger(&mut self, logger: &::cascade::Logger) {
                self.adopt_logger(logger);
            }
        }
    });

    Ok(quote! {
        #input

        impl #impl_generics ::cascade::Extension<#arg_type, #output_type> for #self_ty #where_clause {
            fn capabilities(
                self: ::std::sync::Arc<Self>,
            ) -> ::cascade::Capabilities<#arg_type, #output_type> {
                ::cascade::Capabilities::new()
                    #(#bindings)*
            }

            #configuration
            #use_logger
        }
    })
}
