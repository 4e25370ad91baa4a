//! 图数据结构
//!
//! 基于邻接表的无向图：顶点表 + 对称的邻居关系

use super::vertex::{Vertex, VertexId};
use crate::algorithm::DfsTraversal;
use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 无向图（邻接表表示）
///
/// 顶点表按插入顺序迭代，邻居关系由 `add_edge` 保证对称。
/// 邻居列表中出现的每个 ID 都必然是顶点表的键：
/// 边插入只接受已存在的端点，且不存在删除操作
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// 顶点 ID 到顶点的映射（保持插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// ID 已存在时不修改图并返回 false
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertices.contains_key(vertex.id()) {
            debug!("顶点已存在，拒绝插入: {}", vertex.id());
            return false;
        }

        self.vertices.insert(vertex.id().clone(), vertex);
        true
    }

    /// 获取顶点
    pub fn vertex(&self, id: &VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// 获取顶点（可变引用，遍历内部使用）
    pub(crate) fn vertex_mut(&mut self, id: &VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    /// 检查顶点是否存在
    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 按插入顺序迭代顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.keys()
    }

    /// 按插入顺序迭代顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    ///
    /// 两个端点都已存在时才成功：在两端对称插入邻居并返回 true，
    /// 否则不修改图并返回 false。重复的边不会产生重复的邻居记录。
    /// 允许自环（u == v），去重后的邻居列表只保留一条记录
    pub fn add_edge(&mut self, u: &VertexId, v: &VertexId) -> bool {
        if !self.vertices.contains_key(u) || !self.vertices.contains_key(v) {
            debug!("端点不存在，拒绝插入边: {} - {}", u, v);
            return false;
        }

        if u == v {
            if let Some(vertex) = self.vertices.get_mut(u) {
                vertex.add_neighbor(u.clone());
            }
            return true;
        }

        if let Some(vertex) = self.vertices.get_mut(u) {
            vertex.add_neighbor(v.clone());
        }
        if let Some(vertex) = self.vertices.get_mut(v) {
            vertex.add_neighbor(u.clone());
        }
        true
    }

    /// 获取无向边数量
    ///
    /// 普通边在两端各记一条邻居，自环只记一条
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.vertices.values().map(|v| v.degree()).sum();
        let loops = self
            .vertices
            .values()
            .filter(|v| v.contains_neighbor(v.id()))
            .count();
        (entries + loops) / 2
    }

    // ==================== 遍历 ====================

    /// 从指定顶点运行深度优先遍历
    ///
    /// 每次调用都使用新的遍历时钟（从 1 开始）。
    /// 只有从起点可达的顶点会获得非零时间戳；
    /// 覆盖多个连通分量需要调用方对未发现的顶点逐一发起遍历
    pub fn run_dfs(&mut self, start: &VertexId) -> Result<()> {
        let mut traversal = DfsTraversal::new();
        traversal.run(self, start)
    }

    /// 清除所有顶点的遍历元数据，使图可以重新遍历
    pub fn reset_traversal(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset_traversal();
        }
    }

    // ==================== 展示 ====================

    /// 渲染邻接表报告
    ///
    /// 每个顶点一行，按插入顺序排列；邻居按升序以空格分隔，
    /// 之后是两个空格和发现时间/完成时间
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Adjacency list:\n");
        out.push_str("Format:\n");
        out.push_str("vertexID: neighborhood_list  time_of_discovery/time_of_exploration\n");

        for vertex in self.vertices.values() {
            out.push_str(vertex.id().as_str());
            out.push_str(": ");
            for neighbor in vertex.neighbors() {
                out.push_str(neighbor.as_str());
                out.push(' ');
            }
            out.push_str(&format!(
                " {}/{}\n",
                vertex.discovery_time(),
                vertex.finish_time()
            ));
        }

        out
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
