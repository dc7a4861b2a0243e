use record_macros::record;

#[record(collection = "object")]
struct Node {
    hostname: String,
}

fn main() {}
