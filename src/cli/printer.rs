//! 结果打印器
//!
//! 提供表格和垂直格式的顶点输出

use crate::algorithm::DfsTraversal;
use crate::graph::Graph;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式 (\G)
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印顶点表
    ///
    /// 按插入顺序列出每个顶点的邻居和遍历时间戳
    pub fn print_vertices(&self, graph: &Graph, execution_time_ms: u64) -> String {
        let columns = ["id", "neighborhood", "discovery", "finish", "state"];
        let rows: Vec<Vec<String>> = graph
            .vertices()
            .map(|vertex| {
                let neighborhood = vertex
                    .neighbors()
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                vec![
                    vertex.id().to_string(),
                    neighborhood,
                    vertex.discovery_time().to_string(),
                    vertex.finish_time().to_string(),
                    vertex.state().to_string(),
                ]
            })
            .collect();

        if rows.is_empty() {
            return format!("Empty set ({} ms)\n", execution_time_ms);
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(&columns, &rows),
            PrintMode::Vertical => self.format_vertical(&columns, &rows),
        };

        format!(
            "{}\n{} row(s) in set ({} ms)\n",
            output,
            rows.len(),
            execution_time_ms
        )
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, graph: &Graph, traversal: &DfsTraversal) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
        table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
        table.add_row(row!["Traversal Clock", traversal.clock().to_string()]);
        table.add_row(row!["Vertices Visited", traversal.visited_count().to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   DepthGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

图构建:
  vertex, v <ID>         添加顶点
                         示例: vertex A
  edge, e <U> <V>        添加无向边（两端必须已存在）
                         示例: edge A B

遍历:
  dfs <起点>             重新从 1 计时并深度优先遍历
  resume <起点>          沿用当前时钟继续遍历其他分量
  reset                  清除所有遍历标记和时间戳

查看:
  show, p                打印邻接表和时间戳
  table                  以表格显示所有顶点
  format <table|vertical>
                         切换表格显示模式
  stats, info            显示图统计信息

数据:
  import <文件> [edgelist|jsonl]
                         从文件批量导入边
  save <文件>            保存 JSON 快照
  load <文件>            加载 JSON 快照

控制台:
  tee [-o] <file>        输出到文件 (-o 覆盖)
  notee                  停止输出到文件
  clear                  清屏
  help, h, ?             显示帮助
  quit, exit, q          退出程序

提示: 在命令末尾加 \G 可垂直显示结果

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 检查命令是否以 \G 结尾（垂直显示）
pub fn check_vertical_display(input: &str) -> (String, bool) {
    let trimmed = input.trim();
    if trimmed.ends_with("\\G") || trimmed.ends_with("\\g") {
        let clean_input = trimmed[..trimmed.len() - 2].trim().to_string();
        (clean_input, true)
    } else {
        (trimmed.to_string(), false)
    }
}
