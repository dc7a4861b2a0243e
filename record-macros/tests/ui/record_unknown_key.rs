use record_macros::record;

#[record(collection = "nodes", table = "x")]
struct Node {
    hostname: String,
}

fn main() {}
