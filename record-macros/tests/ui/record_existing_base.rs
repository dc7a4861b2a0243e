use record_domain::{BaseRecord, Record};
use record_macros::record;
use serde::{Deserialize, Serialize};

#[record(collection = "policies")]
#[derive(Serialize, Deserialize)]
struct Policy {
    label: String,
    #[serde(flatten)]
    base: BaseRecord,
}

fn main() {
    let policy = Policy::new();
    assert_eq!(policy.type_tag(), "Policy");
    assert!(policy.label.is_empty());
}
