//! Procedural macros for slotwatch.
//!
//! - `#[observer]`: turns the callback-shaped methods of an inherent `impl`
//!   block (`(Option<&V>, &V)` returning `()` or `Result`) into callbacks
//!   addressable by name. Other fns are left alone. Methods taking `&self`
//!   implement `slotwatch::Observer`, associated functions implement
//!   `slotwatch::StaticObserver`.
//!
//! Usage:
//! ```rust,ignore
//! use slotwatch::{Callback, Value, observer};
//!
//! struct Thermostat;
//!
//! #[observer]
//! impl Thermostat {
//!     fn on_change(&self, previous: Option<&Value>, current: &Value) {
//!         println!("{previous:?} -> {current}");
//!     }
//!
//!     fn audit(previous: Option<&Value>, current: &Value) -> slotwatch::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let bound = Callback::method(Arc::new(Thermostat), "on_change");
//! let fixed = Callback::static_method::<Thermostat>("audit");
//! ```
//!
//! The slot value type defaults to `slotwatch::Value`; pass another one as
//! the attribute argument: `#[observer(u32)]`.
use proc_macro::TokenStream;
use quote::quote;
use syn::{
    FnArg, GenericArgument, ImplItem, ItemImpl, PathArguments, ReturnType, Signature, Type,
    parse_macro_input, parse_quote, spanned::Spanned,
};

#[proc_macro_attribute]
pub fn observer(attr: TokenStream, item: TokenStream) -> TokenStream {
    let value_ty: Type = if attr.is_empty() {
        parse_quote!(::slotwatch::Value)
    } else {
        parse_macro_input!(attr as Type)
    };
    let input = parse_macro_input!(item as ItemImpl);

    match expand(&value_ty, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(value_ty: &Type, input: &ItemImpl) -> syn::Result<proc_macro2::TokenStream> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "#[observer] must be placed on an inherent impl block",
        ));
    }

    let mut instance_arms = Vec::new();
    let mut static_arms = Vec::new();

    for item in &input.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };

        if !is_callback_signature(&method.sig) {
            continue;
        }

        let ident = &method.sig.ident;
        let name = ident.to_string();

        match method.sig.receiver() {
            Some(receiver) if receiver.reference.is_some() && receiver.mutability.is_none() => {
                instance_arms.push(quote! {
                    #name => ::slotwatch::CallbackOutput::into_result(self.#ident(previous, current)),
                });
            }
            Some(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "observer methods must take `&self`",
                ));
            }
            None => {
                static_arms.push(quote! {
                    #name => ::slotwatch::CallbackOutput::into_result(Self::#ident(previous, current)),
                });
            }
        }
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let not_found = quote! {
        _ => ::core::result::Result::Err(::slotwatch::Error::MethodNotFound {
            target: ::std::any::type_name::<Self>().into(),
            method: method.into(),
        }),
    };

    let observer_impl = (!instance_arms.is_empty()).then(|| {
        quote! {
            impl #impl_generics ::slotwatch::Observer<#value_ty> for #self_ty #where_clause {
                fn call_method(
                    &self,
                    method: &str,
                    previous: ::core::option::Option<&#value_ty>,
                    current: &#value_ty,
                ) -> ::slotwatch::Result<()> {
                    match method {
                        #(#instance_arms)*
                        #not_found
                    }
                }
            }
        }
    });

    let static_impl = (!static_arms.is_empty()).then(|| {
        quote! {
            impl #impl_generics ::slotwatch::StaticObserver<#value_ty> for #self_ty #where_clause {
                fn call_static(
                    method: &str,
                    previous: ::core::option::Option<&#value_ty>,
                    current: &#value_ty,
                ) -> ::slotwatch::Result<()> {
                    match method {
                        #(#static_arms)*
                        #not_found
                    }
                }
            }
        }
    });

    Ok(quote! {
        #input
        #observer_impl
        #static_impl
    })
}

/// `(previous: Option<&_>, current: &_)` returning `()` or a `Result`.
fn is_callback_signature(sig: &Signature) -> bool {
    let mut typed = sig.inputs.iter().filter_map(|arg| match arg {
        FnArg::Typed(pat) => Some(&*pat.ty),
        FnArg::Receiver(_) => None,
    });
    let (Some(previous), Some(current), None) = (typed.next(), typed.next(), typed.next()) else {
        return false;
    };
    is_option_of_ref(previous)
        && matches!(current, Type::Reference(_))
        && returns_unit_or_result(&sig.output)
}

fn is_option_of_ref(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(last) = path.path.segments.last() else {
        return false;
    };
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return false;
    };
    last.ident == "Option"
        && args.args.len() == 1
        && matches!(
            args.args.first(),
            Some(GenericArgument::Type(Type::Reference(_)))
        )
}

fn returns_unit_or_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Tuple(tuple) => tuple.elems.is_empty(),
            Type::Path(path) => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Result"),
            _ => false,
        },
    }
}
