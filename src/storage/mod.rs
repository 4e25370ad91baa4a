//! 存储模块
//!
//! 基于 JSON 的图快照持久化

mod snapshot;

pub use snapshot::{load_graph, save_graph, SNAPSHOT_FILE_EXT};
