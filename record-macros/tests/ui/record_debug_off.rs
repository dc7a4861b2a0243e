use record_domain::Record;
use record_macros::record;

#[record(collection = "brokers", debug = false)]
struct Broker {
    endpoint: String,
}

impl std::fmt::Debug for Broker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Broker({})", self.identity())
    }
}

fn main() {
    let broker = Broker::new();
    let _ = format!("{:?}", broker); // 手写 Debug 可编译说明未自动派生
    assert!(broker.endpoint.is_empty());
}
