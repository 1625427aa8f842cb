use proc_macro::TokenStream;
use quote::quote;

fn error(tokens: impl quote::ToTokens, message: &str) -> proc_macro2::TokenStream {
    syn::Error::new_spanned(tokens, message).to_compile_error()
}

/// Generate a color model from a struct with exactly three named fields.
///
/// The fields are made public and the struct gets the usual value derives,
/// a `const fn new`, `to_tuple` and conversions to and from a tuple of the
/// three field types.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return error(&input.ident, "Model fields must be named.").into();
    }

    if input.fields.len() != 3 {
        return error(
            &input.ident,
            "Models must have exactly 3 fields, one for each component of the color.",
        )
        .into();
    }

    if !input.generics.params.is_empty() {
        return error(&input.generics, "Models can not be generic.").into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    let (field1, field2, field3) = (&field_names[0], &field_names[1], &field_names[2]);
    let (type1, type2, type3) = (&field_types[0], &field_types[1], &field_types[2]);

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    });

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new model from its three components.
            pub const fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components as a tuple.
            pub const fn to_tuple(&self) -> (#type1, #type2, #type3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#type1, #type2, #type3)> for #struct_name {
            fn from((#field1, #field2, #field3): (#type1, #type2, #type3)) -> Self {
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for (#type1, #type2, #type3) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
