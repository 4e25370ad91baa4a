//! 通用类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 遍历时间戳（逻辑时钟值，0 表示尚未赋值）
pub type Timestamp = u64;

/// 顶点的遍历状态
///
/// 状态只能单向推进：Unvisited -> InProgress -> Done，
/// 除非显式重置，每个顶点在一次遍历中最多经历一轮完整的状态变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitState {
    /// 尚未被发现
    Unvisited,
    /// 已发现，邻域探索中
    InProgress,
    /// 邻域探索完毕
    Done,
}

impl VisitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitState::Unvisited => "Unvisited",
            VisitState::InProgress => "InProgress",
            VisitState::Done => "Done",
        }
    }
}

impl Default for VisitState {
    fn default() -> Self {
        VisitState::Unvisited
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
