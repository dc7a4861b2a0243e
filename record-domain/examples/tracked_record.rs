//! Tracked 记录使用示例
//!
//! 演示记录从创建、绑定协作者，到 update/refresh 的完整生命周期，
//! 以及通过类型标签注册表还原具体变体。
//!
//! 运行示例：
//! ```bash
//! cargo run -p record-domain --example tracked_record
//! ```

use record_domain::{
    InMemoryCollaborator, Record, RecordRegistry, RecordResult, RefreshOutcome, Tracked,
};
use record_macros::record;
use std::sync::Arc;

// ============================================================================
// 记录变体定义
// ============================================================================

#[record(collection = "nodes")]
#[derive(Clone)]
struct Node {
    hostname: String,
    tags: Vec<String>,
}

#[record(collection = "policies")]
#[derive(Clone)]
struct Policy {
    label: String,
    max_count: u32,
}

#[derive(Debug)]
enum Stored {
    Node(Node),
    Policy(Policy),
}

impl From<Node> for Stored {
    fn from(n: Node) -> Self {
        Stored::Node(n)
    }
}

impl From<Policy> for Stored {
    fn from(p: Policy) -> Self {
        Stored::Policy(p)
    }
}

#[tokio::main]
async fn main() -> RecordResult<()> {
    println!("=== Tracked 记录示例 ===\n");

    // 1. 新建记录：未绑定协作者时 update/refresh 不做任何事
    let mut node = Tracked::new(Node::new());
    node.hostname = "esx-01".into();
    println!("1. 新建记录 identity={} version={}", node.identity(), node.version());
    println!("   detached update -> {}\n", node.update().await?);

    // 2. 绑定协作者后写入：版本由协作者分配
    let store = Arc::new(InMemoryCollaborator::new());
    node.attach(&store);
    node.update().await?;
    println!("2. 写入后 version={}", node.version());
    node.tags.push("lab".into());
    node.update().await?;
    println!("   再次写入后 version={}\n", node.version());

    // 3. 另一个句柄加载、修改，原句柄 refresh 后可见
    if let Some(mut other) = Tracked::<Node>::load(&store, node.identity()).await? {
        other.hostname = "esx-01.lab".into();
        other.update().await?;
    }
    let outcome = node.refresh_outcome().await?;
    println!("3. refresh -> {:?}, hostname={}\n", outcome, node.hostname);
    assert_eq!(outcome, RefreshOutcome::Refreshed);

    // 4. 通过注册表按类型标签还原
    let mut policy = Tracked::attached(Policy::new(), &store);
    policy.label = "esxi-lab".into();
    policy.max_count = 4;
    policy.update().await?;

    let registry = RecordRegistry::<Stored>::new()
        .register::<Node>()
        .register::<Policy>();
    let restored = registry
        .fetch(store.as_ref(), Policy::COLLECTION, policy.identity())
        .await?;
    println!("4. registry -> {:?}", restored);

    Ok(())
}
