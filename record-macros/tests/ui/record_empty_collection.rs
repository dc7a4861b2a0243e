use record_macros::record;

#[record(collection = "")]
struct Node {
    hostname: String,
}

fn main() {}
