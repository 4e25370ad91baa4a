//! 图快照
//!
//! 把整张图连同遍历时间戳序列化成 JSON 文件，加载后可原样恢复

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// 快照文件扩展名
pub const SNAPSHOT_FILE_EXT: &str = "json";

/// 把图写入 JSON 快照文件
///
/// 目标目录不存在时自动创建
pub fn save_graph<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)
        .map_err(|e| Error::SerializationError(format!("写入快照失败: {}", e)))?;
    writer.flush()?;

    info!(
        "快照已保存: {} ({} 个顶点, {} 条边)",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

/// 从 JSON 快照文件恢复图
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::StorageError(format!(
            "快照文件不存在: {}",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let graph: Graph = serde_json::from_reader(reader)
        .map_err(|e| Error::SerializationError(format!("解析快照失败: {}", e)))?;

    info!(
        "快照已加载: {} ({} 个顶点, {} 条边)",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
