//! DepthGraph - 带遍历时间戳的无向邻接表图
//!
//! 轻量的内存图库，支持：
//! - 无向邻接表，邻居按字典序排序去重
//! - 递归深度优先遍历，共享时钟记录发现/完成时间戳
//! - 确定性的邻接表文本渲染
//! - 边列表 / JSON Lines 批量导入和 JSON 快照

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod storage;
pub mod types;

// 重导出常用类型
pub use algorithm::DfsTraversal;
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId};
pub use types::{Timestamp, VisitState};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
