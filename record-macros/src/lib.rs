use proc_macro::TokenStream;

mod record;
mod utils;

/// 记录宏
/// - 追加字段：`#[serde(flatten)] base: BaseRecord`（若缺失）并置于字段最前
/// - 合并派生：`Debug`（可通过 `debug = false` 关闭）、`Serialize`、`Deserialize`
/// - 自动实现 `::record_domain::Record`：`new()` 生成新标识、版本 0，其余字段取默认值
/// - 参数：`#[record(collection = "nodes", tag = "Node")]`，`collection` 必填，`tag` 默认结构体名
#[proc_macro_attribute]
pub fn record(attr: TokenStream, item: TokenStream) -> TokenStream {
    record::expand(attr, item)
}
