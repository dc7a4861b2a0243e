use record_macros::record;

#[record(tag = "Node")]
struct Node {
    hostname: String,
}

fn main() {}
