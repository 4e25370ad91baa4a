//! 顶点定义
//!
//! 有名字的节点，携带邻居列表和遍历元数据（发现/完成时间戳、访问状态）

use crate::types::{Timestamp, VisitState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一，字符串）
///
/// 派生的 `Ord` 即内部字符串的字典序，邻居列表按它保持升序
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub String);

impl VertexId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 邻居 ID 列表，始终升序且无重复
    neighbors: Vec<VertexId>,
    /// 遍历状态
    state: VisitState,
    /// 发现时间（首次被访问时的时钟值）
    discovery_time: Timestamp,
    /// 完成时间（邻域全部探索完毕时的时钟值）
    finish_time: Timestamp,
}

impl Vertex {
    /// 创建新顶点：空邻居列表，未访问，两个时间戳均为 0
    pub fn new<I: Into<VertexId>>(id: I) -> Self {
        Self {
            id: id.into(),
            neighbors: Vec::new(),
            state: VisitState::Unvisited,
            discovery_time: 0,
            finish_time: 0,
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> &VertexId {
        &self.id
    }

    /// 邻居 ID 列表（升序）
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// 顶点的度（邻居数量）
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// 检查某个 ID 是否已在邻居列表中
    pub fn contains_neighbor(&self, id: &VertexId) -> bool {
        self.neighbors.binary_search(id).is_ok()
    }

    /// 获取遍历状态
    pub fn state(&self) -> VisitState {
        self.state
    }

    /// 获取发现时间（0 表示尚未被发现）
    pub fn discovery_time(&self) -> Timestamp {
        self.discovery_time
    }

    /// 获取完成时间（0 表示邻域尚未探索完毕）
    pub fn finish_time(&self) -> Timestamp {
        self.finish_time
    }

    /// 向邻居列表插入一个 ID，保持升序
    ///
    /// 幂等：ID 已存在时不做任何修改并返回 false。
    /// 只修改本顶点，另一端的对称插入由图负责
    pub fn add_neighbor<I: Into<VertexId>>(&mut self, id: I) -> bool {
        let id = id.into();
        match self.neighbors.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.neighbors.insert(pos, id);
                true
            }
        }
    }

    /// 标记为已发现并记录发现时间
    pub(crate) fn mark_discovered(&mut self, time: Timestamp) {
        self.state = VisitState::InProgress;
        self.discovery_time = time;
    }

    /// 标记为探索完毕并记录完成时间
    pub(crate) fn mark_finished(&mut self, time: Timestamp) {
        self.state = VisitState::Done;
        self.finish_time = time;
    }

    /// 清除遍历元数据，回到未访问状态
    pub(crate) fn reset_traversal(&mut self) {
        self.state = VisitState::Unvisited;
        self.discovery_time = 0;
        self.finish_time = 0;
    }
}
