use quote::ToTokens;
use std::collections::HashSet;
use syn::{Attribute, Field, FieldsNamed, Path, Token, punctuated::Punctuated};

/// 把 `required` 中的派生合并进已有的 `#[derive(...)]`，去重且 required 在前；
/// 其余属性保持原有顺序跟随其后。
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.drain(..) {
        if !attr.path().is_ident("derive") {
            retained.push(attr);
            continue;
        }
        // 无法解析的 derive 原样保留，交由编译器报错
        match attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            Ok(list) => existing.extend(list),
            Err(_) => retained.push(attr),
        }
    }

    let mut seen = HashSet::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

// `Serialize` 与 `serde::Serialize` 视为同一派生
fn derive_key(p: &Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}

/// 确保具名字段中存在 `name` 字段并置于最前：
/// 已存在则复用用户定义，否则插入 `field`。
pub(crate) fn ensure_leading_field(fields_named: &mut FieldsNamed, name: &str, field: Field) {
    let old_named = std::mem::take(&mut fields_named.named);
    let (leading, rest): (Vec<Field>, Vec<Field>) = old_named
        .into_iter()
        .partition(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false));

    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();
    new_named.push(leading.into_iter().next().unwrap_or(field));
    new_named.extend(rest);
    fields_named.named = new_named;
}
