//! 深度优先遍历
//!
//! 递归访问 + 共享遍历时钟，为每个被发现的顶点记录发现/完成时间戳

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::types::{Timestamp, VisitState};
use tracing::debug;

/// 深度优先遍历驱动器
///
/// 持有整条递归访问链共享的遍历时钟。`run` 每次把时钟重置为 1；
/// 想让多个连通分量的时间戳全局可比，就用同一个驱动器
/// 反复调用 `resume`，时钟会持续累加
#[derive(Debug)]
pub struct DfsTraversal {
    /// 遍历时钟，每次记录时间戳后加一
    clock: Timestamp,
    /// 累计发现的顶点数
    visited: usize,
}

impl DfsTraversal {
    /// 创建新驱动器，时钟从 1 开始
    pub fn new() -> Self {
        Self {
            clock: 1,
            visited: 0,
        }
    }

    /// 当前时钟值
    pub fn clock(&self) -> Timestamp {
        self.clock
    }

    /// 累计发现的顶点数
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// 从起点运行遍历，时钟重置为 1
    ///
    /// 起点不存在时返回 `Error::VertexNotFound`，图保持原样
    pub fn run(&mut self, graph: &mut Graph, start: &VertexId) -> Result<()> {
        self.clock = 1;
        self.visited = 0;
        self.resume(graph, start)
    }

    /// 从起点继续遍历，不重置时钟
    pub fn resume(&mut self, graph: &mut Graph, start: &VertexId) -> Result<()> {
        if !graph.contains_vertex(start) {
            return Err(Error::VertexNotFound(start.to_string()));
        }

        let before = self.visited;
        self.visit(graph, start)?;
        debug!(
            "深度优先遍历完成: 起点 {}, 本次发现 {} 个顶点, 时钟 {}",
            start,
            self.visited - before,
            self.clock
        );
        Ok(())
    }

    /// 递归访问过程
    ///
    /// 非 Unvisited 的顶点直接跳过，时间戳一经赋值不再改变
    fn visit(&mut self, graph: &mut Graph, id: &VertexId) -> Result<()> {
        let neighbors = {
            let vertex = graph
                .vertex_mut(id)
                .ok_or_else(|| Error::VertexNotFound(id.to_string()))?;

            if vertex.state() != VisitState::Unvisited {
                return Ok(());
            }

            vertex.mark_discovered(self.clock);
            vertex.neighbors().to_vec()
        };
        self.clock += 1;
        self.visited += 1;

        // 邻居列表本身有序，按升序深入仍未发现的顶点
        for neighbor in &neighbors {
            let unvisited = graph
                .vertex(neighbor)
                .map(|v| v.state() == VisitState::Unvisited)
                .unwrap_or(false);
            if unvisited {
                self.visit(graph, neighbor)?;
            }
        }

        let vertex = graph
            .vertex_mut(id)
            .ok_or_else(|| Error::VertexNotFound(id.to_string()))?;
        vertex.mark_finished(self.clock);
        self.clock += 1;

        Ok(())
    }
}

impl Default for DfsTraversal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;
    use crate::types::Timestamp;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SAMPLE_EDGES: [(&str, &str); 12] = [
        ("A", "B"),
        ("A", "E"),
        ("B", "F"),
        ("C", "G"),
        ("D", "E"),
        ("D", "H"),
        ("E", "H"),
        ("F", "G"),
        ("F", "I"),
        ("F", "J"),
        ("G", "J"),
        ("H", "I"),
    ];

    /// 十个顶点的样例图：A..J 加十二条无向边
    fn build_sample_graph() -> Graph {
        let mut graph = Graph::new();
        for id in 'A'..='J' {
            graph.add_vertex(Vertex::new(id.to_string()));
        }
        for (u, v) in SAMPLE_EDGES {
            assert!(graph.add_edge(&VertexId::from(u), &VertexId::from(v)));
        }
        graph
    }

    /// 两个不连通的分量：A-B 和 C-D
    fn build_two_components() -> Graph {
        let mut graph = Graph::new();
        for id in ["A", "B", "C", "D"] {
            graph.add_vertex(Vertex::new(id));
        }
        graph.add_edge(&VertexId::from("A"), &VertexId::from("B"));
        graph.add_edge(&VertexId::from("C"), &VertexId::from("D"));
        graph
    }

    fn interval(graph: &Graph, id: &str) -> (Timestamp, Timestamp) {
        let vertex = graph.vertex(&VertexId::from(id)).unwrap();
        (vertex.discovery_time(), vertex.finish_time())
    }

    /// 两个区间要么互不相交，要么一个完全嵌套在另一个里面
    fn nested_or_disjoint(a: (Timestamp, Timestamp), b: (Timestamp, Timestamp)) -> bool {
        let disjoint = a.1 < b.0 || b.1 < a.0;
        let a_inside_b = b.0 < a.0 && a.1 < b.1;
        let b_inside_a = a.0 < b.0 && b.1 < a.1;
        disjoint || a_inside_b || b_inside_a
    }

    #[test]
    fn test_sample_graph_timestamps() {
        let mut graph = build_sample_graph();
        graph.run_dfs(&VertexId::from("A")).unwrap();

        // 从 A 出发、按字母序探索邻居得到的确定性时间戳
        let expected = [
            ("A", 1, 20),
            ("B", 2, 19),
            ("C", 5, 6),
            ("D", 12, 15),
            ("E", 13, 14),
            ("F", 3, 18),
            ("G", 4, 9),
            ("H", 11, 16),
            ("I", 10, 17),
            ("J", 7, 8),
        ];
        for (id, discovery, finish) in expected {
            let vertex = graph.vertex(&VertexId::from(id)).unwrap();
            assert_eq!(vertex.discovery_time(), discovery, "顶点 {} 的发现时间", id);
            assert_eq!(vertex.finish_time(), finish, "顶点 {} 的完成时间", id);
            assert_eq!(vertex.state(), VisitState::Done);
        }
    }

    #[test]
    fn test_discovery_before_finish() {
        let mut graph = build_sample_graph();
        graph.run_dfs(&VertexId::from("A")).unwrap();

        for vertex in graph.vertices() {
            assert!(
                vertex.discovery_time() < vertex.finish_time(),
                "顶点 {} 的区间非法",
                vertex.id()
            );
        }
    }

    #[test]
    fn test_intervals_nested_or_disjoint() {
        let mut graph = build_sample_graph();
        graph.run_dfs(&VertexId::from("A")).unwrap();

        let ids: Vec<String> = graph.vertex_ids().map(|id| id.to_string()).collect();
        for (i, x) in ids.iter().enumerate() {
            for y in ids.iter().skip(i + 1) {
                let a = interval(&graph, x);
                let b = interval(&graph, y);
                assert!(
                    nested_or_disjoint(a, b),
                    "顶点 {} 和 {} 的区间部分重叠: {:?} vs {:?}",
                    x,
                    y,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_unreachable_vertex_keeps_zero() {
        let mut graph = build_two_components();
        graph.run_dfs(&VertexId::from("A")).unwrap();

        for id in ["C", "D"] {
            let vertex = graph.vertex(&VertexId::from(id)).unwrap();
            assert_eq!(vertex.state(), VisitState::Unvisited);
            assert_eq!(vertex.discovery_time(), 0);
            assert_eq!(vertex.finish_time(), 0);
        }
    }

    #[test]
    fn test_second_run_without_reset_changes_nothing() {
        let mut graph = build_sample_graph();
        graph.run_dfs(&VertexId::from("A")).unwrap();

        let before: Vec<(Timestamp, Timestamp)> = graph
            .vertices()
            .map(|v| (v.discovery_time(), v.finish_time()))
            .collect();

        // 所有顶点都已 Done，换个起点再跑一遍不会访问任何顶点
        graph.run_dfs(&VertexId::from("B")).unwrap();

        let after: Vec<(Timestamp, Timestamp)> = graph
            .vertices()
            .map(|v| (v.discovery_time(), v.finish_time()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_resume_accumulates_clock_across_components() {
        let mut graph = build_two_components();
        let mut traversal = DfsTraversal::new();

        traversal.run(&mut graph, &VertexId::from("A")).unwrap();
        traversal.resume(&mut graph, &VertexId::from("C")).unwrap();

        assert_eq!(interval(&graph, "A"), (1, 4));
        assert_eq!(interval(&graph, "B"), (2, 3));
        // 第二个分量接着第一个分量的时钟继续计数
        assert_eq!(interval(&graph, "C"), (5, 8));
        assert_eq!(interval(&graph, "D"), (6, 7));
        assert_eq!(traversal.clock(), 9);
        assert_eq!(traversal.visited_count(), 4);
    }

    #[test]
    fn test_run_resets_clock() {
        let mut graph = build_two_components();
        let mut traversal = DfsTraversal::new();

        traversal.run(&mut graph, &VertexId::from("A")).unwrap();
        // run 重新从 1 开始计时，第二个分量的时间戳与第一个分量不可比
        traversal.run(&mut graph, &VertexId::from("C")).unwrap();

        assert_eq!(interval(&graph, "C"), (1, 4));
        assert_eq!(interval(&graph, "D"), (2, 3));
        assert_eq!(traversal.visited_count(), 2);
    }

    #[test]
    fn test_unknown_start_leaves_graph_untouched() {
        let mut graph = build_two_components();
        let mut traversal = DfsTraversal::new();

        let result = traversal.run(&mut graph, &VertexId::from("X"));
        assert!(matches!(result, Err(Error::VertexNotFound(_))));

        for vertex in graph.vertices() {
            assert_eq!(vertex.state(), VisitState::Unvisited);
            assert_eq!(vertex.discovery_time(), 0);
        }
    }

    #[test]
    fn test_random_graph_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = Graph::new();

        let ids: Vec<String> = (0..24).map(|i| format!("v{:02}", i)).collect();
        for id in &ids {
            graph.add_vertex(Vertex::new(id.clone()));
        }
        for (i, u) in ids.iter().enumerate() {
            for v in ids.iter().skip(i + 1) {
                if rng.gen_bool(0.12) {
                    graph.add_edge(&VertexId::from(u.clone()), &VertexId::from(v.clone()));
                }
            }
        }

        graph.run_dfs(&VertexId::from(ids[0].clone())).unwrap();

        // 邻接关系对称
        for vertex in graph.vertices() {
            for neighbor in vertex.neighbors() {
                let other = graph.vertex(neighbor).unwrap();
                assert!(other.contains_neighbor(vertex.id()));
            }
        }

        // 已发现的顶点区间合法且两两嵌套或不相交，未发现的保持全零
        let discovered: Vec<(Timestamp, Timestamp)> = graph
            .vertices()
            .filter(|v| v.state() == VisitState::Done)
            .map(|v| (v.discovery_time(), v.finish_time()))
            .collect();
        for &(discovery, finish) in &discovered {
            assert!(discovery < finish);
        }
        for (i, &a) in discovered.iter().enumerate() {
            for &b in discovered.iter().skip(i + 1) {
                assert!(nested_or_disjoint(a, b));
            }
        }
        for vertex in graph.vertices() {
            if vertex.state() == VisitState::Unvisited {
                assert_eq!(vertex.discovery_time(), 0);
                assert_eq!(vertex.finish_time(), 0);
            }
        }
    }
}
