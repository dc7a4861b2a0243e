use record_macros::record;

#[record(collection = "nodes", collection = "models")]
struct Node {
    hostname: String,
}

fn main() {}
