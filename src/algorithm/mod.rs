//! 图算法模块
//!
//! 包含带时间戳的深度优先遍历

mod dfs;

pub use dfs::DfsTraversal;
