use crate::utils::{apply_derives, ensure_leading_field};
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// 基础类型使用的占位集合名，与 `record_domain::UNSET_COLLECTION` 保持一致
const UNSET_COLLECTION: &str = "object";

/// #[record] 宏实现
/// - 若缺失则追加字段 `#[serde(flatten)] base: BaseRecord`，并置于字段最前
/// - 自动实现 `::record_domain::Record`（COLLECTION/TYPE_TAG/new/base）
/// - 参数：`#[record(collection = "...", tag = "...", debug = true|false)]`
///   - `collection` 必填，且不能是占位名 `"object"`
///   - `tag` 默认取结构体名
///   - `debug` 默认 `true`（派生 Debug）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as RecordAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[record] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let collection = match cfg.collection {
        Some(lit) if lit.value().is_empty() || lit.value() == UNSET_COLLECTION => {
            return syn::Error::new(
                lit.span(),
                "collection must name the record's own collection, not the base placeholder",
            )
            .to_compile_error()
            .into();
        }
        Some(lit) => lit,
        None => {
            return syn::Error::new(
                proc_macro2::Span::call_site(),
                "#[record] requires `collection = \"...\"`",
            )
            .to_compile_error()
            .into();
        }
    };

    let tag = cfg
        .tag
        .unwrap_or_else(|| LitStr::new(&st.ident.to_string(), st.ident.span()));

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    ensure_leading_field(
        fields_named,
        "base",
        syn::parse_quote! {
            #[serde(flatten)]
            base: ::record_domain::BaseRecord
        },
    );

    // 除 base 外的字段在 new() 中取默认值
    let defaulted: Vec<&syn::Ident> = fields_named
        .named
        .iter()
        .filter_map(|f| f.ident.as_ref())
        .filter(|i| *i != "base")
        .collect();

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let record_impl = quote! {
        impl #impl_generics ::record_domain::Record for #ident #ty_generics #where_clause {
            const COLLECTION: &'static str = #collection;
            const TYPE_TAG: &'static str = #tag;

            fn new() -> Self {
                Self {
                    base: ::record_domain::BaseRecord::generate(
                        <Self as ::record_domain::Record>::TYPE_TAG,
                    ),
                    #( #defaulted: ::core::default::Default::default(), )*
                }
            }

            fn base(&self) -> &::record_domain::BaseRecord { &self.base }
        }
    };

    apply_derives(&mut st.attrs, required);

    let expanded = quote! {
        #st

        #record_impl
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct RecordAttrConfig {
    collection: Option<LitStr>,
    tag: Option<LitStr>,
    derive_debug: Option<bool>,
}

impl Parse for RecordAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            collection: None,
            tag: None,
            derive_debug: None,
        };

        let elems = Punctuated::<RecordAttrElem, Token![,]>::parse_terminated(input)?;
        for elem in elems.into_iter() {
            match elem {
                RecordAttrElem::Collection(lit) => {
                    if cfg.collection.is_some() {
                        return Err(duplicate(lit.span(), "collection"));
                    }
                    cfg.collection = Some(lit);
                }
                RecordAttrElem::Tag(lit) => {
                    if cfg.tag.is_some() {
                        return Err(duplicate(lit.span(), "tag"));
                    }
                    cfg.tag = Some(lit);
                }
                RecordAttrElem::Debug(b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(duplicate(b.span, "debug"));
                    }
                    cfg.derive_debug = Some(b.value);
                }
            }
        }

        Ok(cfg)
    }
}

fn duplicate(span: proc_macro2::Span, key: &str) -> syn::Error {
    syn::Error::new(span, format!("duplicate key '{key}' in attribute"))
}

enum RecordAttrElem {
    Collection(LitStr),
    Tag(LitStr),
    Debug(syn::LitBool),
}

impl Parse for RecordAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "collection" {
            Ok(RecordAttrElem::Collection(input.parse()?))
        } else if key == "tag" {
            Ok(RecordAttrElem::Tag(input.parse()?))
        } else if key == "debug" {
            Ok(RecordAttrElem::Debug(input.parse()?))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'collection', 'tag' or 'debug'",
            ))
        }
    }
}
