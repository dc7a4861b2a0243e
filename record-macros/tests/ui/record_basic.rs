use record_domain::Record;
use record_macros::record;

#[record(collection = "nodes")]
#[derive(Clone, PartialEq)]
struct Node {
    hostname: String,
    cores: u32,
}

#[record(collection = "images", tag = "image.esxi")]
struct EsxiImage {
    path: String,
}

fn main() {
    let node = Node::new();
    assert_eq!(Node::COLLECTION, "nodes");
    assert_eq!(node.type_tag(), "Node");
    assert_eq!(node.version(), 0);
    assert_eq!(node.cores, 0);
    let _ = format!("{:?}", node.clone());

    let image = EsxiImage::new();
    assert_eq!(image.type_tag(), "image.esxi");
    assert!(image.path.is_empty());
}
