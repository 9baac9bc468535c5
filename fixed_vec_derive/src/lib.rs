use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, GenericParam, parse_macro_input, parse_quote};

/// Derives `fixed_vec::NamedFixedVec` plus the elementwise operators it
/// requires for a struct whose named fields all share the struct's first
/// type parameter.
///
/// ```ignore
/// #[derive(Debug, Copy, Clone, NamedFixedVec)]
/// struct State<T> {
///     x: T,
///     y: T,
///     angle: T,
/// }
/// ```
#[proc_macro_derive(NamedFixedVec)]
pub fn named_fixed_vec_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => &fields_named.named,
            _ => {
                return Err(Error::new_spanned(
                    name,
                    "NamedFixedVec can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(Error::new_spanned(
                name,
                "NamedFixedVec can only be derived for structs",
            ));
        }
    };

    let elem = input
        .generics
        .params
        .iter()
        .find_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .ok_or_else(|| {
            Error::new_spanned(
                &input.generics,
                "NamedFixedVec requires a type parameter for the element type",
            )
        })?;

    let mut generics = input.generics.clone();
    generics.make_where_clause().predicates.push(parse_quote! {
        #elem: Copy
            + ::std::ops::Add<Output = #elem>
            + ::std::ops::Sub<Output = #elem>
            + ::std::ops::Mul<Output = #elem>
            + ::std::ops::AddAssign
            + ::std::ops::SubAssign
    });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let n_literal = syn::Index::from(fields.len());
    let field_names: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_indexes: Vec<_> = (0..fields.len()).map(syn::Index::from).collect();

    Ok(quote! {
        impl #impl_generics ::fixed_vec::NamedFixedVec<#elem, #n_literal> for #name #ty_generics #where_clause {
            fn to_fixed(&self) -> ::fixed_vec::FixedVector<#elem, #n_literal> {
                ::fixed_vec::FixedVector::from_array([
                    #(self.#field_names),*
                ])
            }

            fn from_fixed(v: &::fixed_vec::FixedVector<#elem, #n_literal>) -> Self {
                Self {
                    #(#field_names: v[#field_indexes]),*
                }
            }
        }

        impl #impl_generics ::std::ops::Add for #name #ty_generics #where_clause {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self {
                    #(#field_names: self.#field_names + rhs.#field_names),*
                }
            }
        }

        impl #impl_generics ::std::ops::Sub for #name #ty_generics #where_clause {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self {
                    #(#field_names: self.#field_names - rhs.#field_names),*
                }
            }
        }

        impl #impl_generics ::std::ops::AddAssign for #name #ty_generics #where_clause {
            fn add_assign(&mut self, rhs: Self) {
                #(self.#field_names += rhs.#field_names;)*
            }
        }

        impl #impl_generics ::std::ops::SubAssign for #name #ty_generics #where_clause {
            fn sub_assign(&mut self, rhs: Self) {
                #(self.#field_names -= rhs.#field_names;)*
            }
        }

        // `scalar * state` is not derivable (orphan rule).
        impl #impl_generics ::std::ops::Mul<#elem> for #name #ty_generics #where_clause {
            type Output = Self;

            fn mul(self, rhs: #elem) -> Self {
                Self {
                    #(#field_names: rhs * self.#field_names),*
                }
            }
        }
    })
}
