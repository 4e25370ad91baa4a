//! 数据导入模块
//!
//! 支持从边列表、JSON Lines 批量导入图数据

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex, VertexId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边列表导入器
pub struct EdgeListImporter<'a> {
    graph: &'a mut Graph,
}

impl<'a> EdgeListImporter<'a> {
    /// 创建导入器
    pub fn new(graph: &'a mut Graph) -> Self {
        Self { graph }
    }

    /// 从边列表文件导入
    ///
    /// 每行一条 `SRC,DST` 记录，空行和 `#` 注释行跳过，
    /// 端点不存在时自动创建顶点
    pub fn import_edge_list<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut stats = ImportStats::default();

        for line in reader.lines() {
            if let Ok(line) = line {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                match self.parse_and_import_pair(line) {
                    Ok(created) => {
                        stats.vertices_imported += created;
                        stats.edges_imported += 1;
                    }
                    Err(_) => stats.errors += 1,
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            "边列表导入完成: {} 个新顶点, {} 条边, {} 个错误",
            stats.vertices_imported, stats.edges_imported, stats.errors
        );
        Ok(stats)
    }

    /// 解析并导入单条边记录
    fn parse_and_import_pair(&mut self, line: &str) -> Result<usize> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::ImportError(format!("边列表格式错误: {}", line)));
        }

        let src = parts[0].trim();
        let dst = parts[1].trim();
        if src.is_empty() || dst.is_empty() {
            return Err(Error::ImportError(format!("端点标识为空: {}", line)));
        }

        self.import_pair(src, dst)
    }

    /// 从 JSON Lines 导入
    ///
    /// 每行一个 `{"src": ..., "dst": ...}` 对象
    pub fn import_jsonl<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut stats = ImportStats::default();

        for line in reader.lines() {
            if let Ok(line) = line {
                if line.trim().is_empty() {
                    continue;
                }
                match self.parse_and_import_json(&line) {
                    Ok(created) => {
                        stats.vertices_imported += created;
                        stats.edges_imported += 1;
                    }
                    Err(_) => stats.errors += 1,
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            "JSON Lines 导入完成: {} 个新顶点, {} 条边, {} 个错误",
            stats.vertices_imported, stats.edges_imported, stats.errors
        );
        Ok(stats)
    }

    /// 解析并导入 JSON 记录
    fn parse_and_import_json(&mut self, line: &str) -> Result<usize> {
        let record: EdgeRecord = serde_json::from_str(line)
            .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))?;

        if record.src.is_empty() || record.dst.is_empty() {
            return Err(Error::ImportError(format!("端点标识为空: {}", line)));
        }

        self.import_pair(&record.src, &record.dst)
    }

    /// 补齐端点并插入边，返回新建顶点数
    fn import_pair(&mut self, src: &str, dst: &str) -> Result<usize> {
        let created = self.ensure_vertex(src) + self.ensure_vertex(dst);
        self.graph
            .add_edge(&VertexId::new(src), &VertexId::new(dst));
        Ok(created)
    }

    /// 顶点不存在时创建
    fn ensure_vertex(&mut self, id: &str) -> usize {
        let id = VertexId::new(id);
        if self.graph.contains_vertex(&id) {
            0
        } else {
            self.graph.add_vertex(Vertex::new(id));
            1
        }
    }
}

/// 边记录（JSON 格式）
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    src: String,
    dst: String,
}

/// 从边列表文件导入
pub fn import_edge_list<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<ImportStats> {
    let mut importer = EdgeListImporter::new(graph);
    importer.import_edge_list(path)
}

/// 从 JSON Lines 导入
pub fn import_jsonl<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<ImportStats> {
    let mut importer = EdgeListImporter::new(graph);
    importer.import_jsonl(path)
}
