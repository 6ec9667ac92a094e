//! Internal proc-macros for typedarray's named array types.
//!
//! This crate is internal to typedarray and not intended for external use.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Ident, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the array_wrapper! macro.
/// Format: array_wrapper!(WrapperName, ElementType)
struct ArrayWrapperArgs {
    wrapper_name: Ident,
    _comma: Token![,],
    element_type: Type,
}

impl Parse for ArrayWrapperArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Self {
            wrapper_name: input.parse()?,
            _comma: input.parse()?,
            element_type: input.parse()?,
        })
    }
}

/// Generates the plumbing for a named newtype over `TypedArray<T>`.
///
/// # Usage
/// ```ignore
/// pub struct DoubleArray(TypedArray<f64>);
/// array_wrapper!(DoubleArray, f64);
/// ```
///
/// This generates:
/// - constructors `new`, `with_len`, `with_options` and `into_inner`
/// - `Deref` / `DerefMut` to the inner `TypedArray<T>`
/// - `AnyArray`
/// - `ArrayAccess`
/// - conversions from `TypedArray<T>`, `Vec<T>`, `&[T]` and iterators, and back into `TypedArray<T>`
/// - `IntoIterator` for references
#[proc_macro]
pub fn array_wrapper(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as ArrayWrapperArgs);
    let wrapper = &args.wrapper_name;
    let t = &args.element_type;

    let expanded = quote! {
        impl #wrapper {
            pub fn new() -> Self {
                Self(crate::TypedArray::new())
            }

            /// Creates an array of `len` zeroed elements.
            pub fn with_len<L: crate::ArrayIndex>(len: L) -> crate::Result<Self> {
                crate::TypedArray::with_len(len).map(Self)
            }

            pub fn with_options(options: crate::ArrayOptions) -> crate::Result<Self> {
                crate::TypedArray::with_options(options).map(Self)
            }

            pub fn into_inner(self) -> crate::TypedArray<#t> {
                self.0
            }
        }

        impl ::std::ops::Deref for #wrapper {
            type Target = crate::TypedArray<#t>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for #wrapper {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl crate::AnyArray for #wrapper {
            #[inline]
            fn kind(&self) -> crate::ElementKind {
                crate::AnyArray::kind(&self.0)
            }

            #[inline]
            fn len(&self) -> usize {
                crate::AnyArray::len(&self.0)
            }

            #[inline]
            fn set_len_dyn(&mut self, len: i64) -> crate::Result<()> {
                crate::AnyArray::set_len_dyn(&mut self.0, len)
            }

            #[inline]
            fn get_dyn(&self, index: i64) -> crate::Result<crate::Number> {
                crate::AnyArray::get_dyn(&self.0, index)
            }

            #[inline]
            fn set_dyn(&mut self, index: i64, value: crate::Number) -> crate::Result<()> {
                crate::AnyArray::set_dyn(&mut self.0, index, value)
            }

            #[inline]
            fn set_wrapping_dyn(
                &mut self,
                index: i64,
                value: crate::Number,
            ) -> crate::Result<()> {
                crate::AnyArray::set_wrapping_dyn(&mut self.0, index, value)
            }
        }

        impl crate::ArrayAccess for #wrapper {
            type T = #t;

            #[inline]
            fn as_typed(&self) -> &crate::TypedArray<#t> {
                &self.0
            }

            #[inline]
            fn as_typed_mut(&mut self) -> &mut crate::TypedArray<#t> {
                &mut self.0
            }
        }

        impl From<crate::TypedArray<#t>> for #wrapper {
            #[inline]
            fn from(array: crate::TypedArray<#t>) -> Self {
                Self(array)
            }
        }

        impl From<#wrapper> for crate::TypedArray<#t> {
            #[inline]
            fn from(array: #wrapper) -> Self {
                array.0
            }
        }

        impl From<Vec<#t>> for #wrapper {
            #[inline]
            fn from(values: Vec<#t>) -> Self {
                Self(crate::TypedArray::from(values))
            }
        }

        impl From<&[#t]> for #wrapper {
            #[inline]
            fn from(values: &[#t]) -> Self {
                Self(crate::TypedArray::from_slice(values))
            }
        }

        impl FromIterator<#t> for #wrapper {
            fn from_iter<It: IntoIterator<Item = #t>>(iter: It) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl<'a> IntoIterator for &'a #wrapper {
            type Item = #t;
            type IntoIter = ::std::iter::Copied<::std::slice::Iter<'a, #t>>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };

    TokenStream::from(expanded)
}
