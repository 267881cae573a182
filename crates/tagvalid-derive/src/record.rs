//! `#[derive(Record)]` implementation

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::visit_mut::{self, VisitMut};
use syn::{
    parse_quote, Data, DeriveInput, Error, Field, Fields, GenericParam, Lifetime, Lit, LitStr,
    Result, Token, Type, Visibility,
};

/// One `key = "value"` entry from a `#[tag(...)]` attribute
struct TagEntry {
    key: String,
    value: LitStr,
}

/// Everything the derive needs to know about one field
struct FieldSpec<'f> {
    ident: &'f Ident,
    name: String,
    ty: &'f Type,
    exported: bool,
    tags: Vec<TagEntry>,
    /// `#[tag(opaque)]`: the value is never converted, rules see `Kind::Other`
    opaque: bool,
}

/// Rewrites the struct's own lifetimes to `'static` so a field type can be
/// named inside a `static` and passed to `TypeId`
struct EraseLifetimes<'g> {
    lifetimes: &'g [Ident],
}

impl VisitMut for EraseLifetimes<'_> {
    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if self.lifetimes.contains(&lifetime.ident) {
            *lifetime = Lifetime::new("'static", lifetime.span());
        }
        visit_mut::visit_lifetime_mut(self, lifetime);
    }
}

/// Generate the `Record` and `ToFieldValue` impls
pub fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(Error::new(
                    name.span(),
                    "#[derive(Record)] requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new(
                name.span(),
                "#[derive(Record)] can only be applied to structs",
            ));
        }
    };

    let specs = fields.iter().map(field_spec).collect::<Result<Vec<_>>>()?;

    let lifetimes: Vec<Ident> = input
        .generics
        .lifetimes()
        .map(|param| param.lifetime.ident.clone())
        .collect();
    let descriptors = specs.iter().map(|spec| descriptor_expr(spec, &lifetimes));
    let values = specs.iter().map(value_expr);

    let table = descriptor_table(input, descriptors.collect());

    // descriptor tables are keyed by TypeId
    let mut generics = input.generics.clone();
    let type_params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause.predicates.push(parse_quote!(#param: 'static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tagvalid::Record for #name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #name_str
            }

            fn descriptors(&self) -> &[::tagvalid::FieldDescriptor] {
                #table
            }

            fn field_values(&self) -> ::std::vec::Vec<::tagvalid::FieldValue<'_>> {
                ::std::vec![#(#values),*]
            }
        }

        impl #impl_generics ::tagvalid::ToFieldValue for #name #ty_generics #where_clause {
            fn field_kind() -> ::tagvalid::Kind {
                ::tagvalid::Kind::Record
            }

            fn to_field_value(&self) -> ::tagvalid::FieldValue<'_> {
                ::tagvalid::FieldValue::Opaque(::tagvalid::Kind::Record)
            }

            fn as_record(&self) -> ::std::option::Option<&dyn ::tagvalid::Record> {
                ::std::option::Option::Some(self)
            }
        }
    })
}

/// Body of `descriptors()`: a `static` for plain structs, the shared
/// registry for structs generic over types or constants
fn descriptor_table(input: &DeriveInput, descriptors: Vec<TokenStream>) -> TokenStream {
    let generics = &input.generics;
    if generics.type_params().next().is_none() && generics.const_params().next().is_none() {
        return quote! {
            static DESCRIPTORS: ::tagvalid::__private::Lazy<
                ::std::vec::Vec<::tagvalid::FieldDescriptor>,
            > = ::tagvalid::__private::Lazy::new(|| ::std::vec![#(#descriptors),*]);
            &DESCRIPTORS
        };
    }

    let name = &input.ident;
    let key_args = generics.params.iter().map(|param| match param {
        GenericParam::Lifetime(_) => quote!('static),
        GenericParam::Type(param) => {
            let ident = &param.ident;
            quote!(#ident)
        }
        GenericParam::Const(param) => {
            let ident = &param.ident;
            quote!({ #ident })
        }
    });

    quote! {
        ::tagvalid::__private::shared_table::<#name<#(#key_args),*>>(
            || ::std::vec![#(#descriptors),*]
        )
    }
}

fn descriptor_expr(spec: &FieldSpec<'_>, lifetimes: &[Ident]) -> TokenStream {
    let mut declared = spec.ty.clone();
    EraseLifetimes { lifetimes }.visit_type_mut(&mut declared);

    let name = &spec.name;
    let exported = spec.exported;
    let tag_calls = spec.tags.iter().map(|TagEntry { key, value }| {
        quote! { .tag(#key, #value) }
    });

    quote! {
        ::tagvalid::FieldDescriptor::new::<#declared>(#name)
            .exported(#exported)
            #(#tag_calls)*
    }
}

fn value_expr(spec: &FieldSpec<'_>) -> TokenStream {
    if spec.opaque {
        return quote! {
            ::tagvalid::FieldValue::Opaque(::tagvalid::Kind::Other)
        };
    }

    let ident = spec.ident;
    let ty = spec.ty;
    quote! {
        <#ty as ::tagvalid::ToFieldValue>::to_field_value(&self.#ident)
    }
}

fn field_spec(field: &Field) -> Result<FieldSpec<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;

    let mut spec = FieldSpec {
        ident,
        name: ident.unraw().to_string(),
        ty: &field.ty,
        exported: matches!(field.vis, Visibility::Public(_)),
        tags: Vec::new(),
        opaque: false,
    };
    parse_tags(field, &mut spec)?;
    Ok(spec)
}

/// Collect every `#[tag(...)]` entry on a field, in order
fn parse_tags(field: &Field, spec: &mut FieldSpec<'_>) -> Result<()> {
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("tag")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("opaque") && !meta.input.peek(Token![=]) {
                spec.opaque = true;
                return Ok(());
            }

            let key = match meta.path.get_ident() {
                Some(ident) => ident.unraw().to_string(),
                None => {
                    return Err(Error::new_spanned(
                        &meta.path,
                        "tag keys must be plain identifiers",
                    ));
                }
            };
            let value = match meta.value()?.parse::<Lit>()? {
                Lit::Str(value) => value,
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "tag values must be string literals",
                    ));
                }
            };

            spec.tags.push(TagEntry { key, value });
            Ok(())
        })?;
    }

    Ok(())
}
