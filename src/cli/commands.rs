//! 控制台命令处理
//!
//! 解析并执行交互式控制台的命令

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::DfsTraversal;
use crate::cli::printer::{check_vertical_display, PrintMode, Printer};
use crate::graph::{Graph, Vertex, VertexId};
use crate::{import, storage};

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台状态
///
/// 持有会话内的图、遍历驱动器和输出配置
pub struct ConsoleState {
    /// 当前图
    pub graph: Graph,
    /// 会话遍历驱动器，resume 沿用它的时钟
    pub traversal: DfsTraversal,
    /// 结果打印器
    pub printer: Printer,
    /// 输出到文件
    pub tee_file: Option<File>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            graph: Graph::new(),
            traversal: DfsTraversal::new(),
            printer: Printer::default(),
            tee_file: None,
        }
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入输出（同时写入 stdout 和 tee 文件）
    pub fn write_output(&mut self, content: &str) {
        print!("{}", content);
        if let Some(ref mut file) = self.tee_file {
            let _ = file.write_all(content.as_bytes());
        }
    }
}

/// 解析并执行控制台命令
pub fn execute_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let (input, vertical_once) = check_vertical_display(input);
    if input.is_empty() {
        return CommandResult::Continue;
    }

    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args = parts.get(1).copied().unwrap_or("").trim();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "vertex" | "v" => match args.split_whitespace().next() {
            Some(id) => {
                if state.graph.add_vertex(Vertex::new(id)) {
                    CommandResult::Message(format!("顶点 {} 已添加", id))
                } else {
                    CommandResult::Error(format!("顶点 {} 已存在", id))
                }
            }
            None => CommandResult::Error("用法: vertex <ID>".to_string()),
        },

        "edge" | "e" => {
            let endpoints: Vec<&str> = args.split_whitespace().collect();
            if endpoints.len() != 2 {
                return CommandResult::Error("用法: edge <U> <V>".to_string());
            }
            let u = VertexId::new(endpoints[0]);
            let v = VertexId::new(endpoints[1]);
            if !state.graph.contains_vertex(&u) {
                return CommandResult::Error(format!("顶点不存在: {}", u));
            }
            if !state.graph.contains_vertex(&v) {
                return CommandResult::Error(format!("顶点不存在: {}", v));
            }
            state.graph.add_edge(&u, &v);
            CommandResult::Message(format!("边 {} - {} 已添加", u, v))
        }

        "dfs" => match args.split_whitespace().next() {
            Some(start) => {
                let timer = Instant::now();
                let start = VertexId::new(start);
                // 每次 dfs 都换一个新驱动器，时钟从 1 重新开始
                state.traversal = DfsTraversal::new();
                match state.traversal.run(&mut state.graph, &start) {
                    Ok(_) => CommandResult::Message(format!(
                        "遍历完成: 发现 {} 个顶点, 时钟 {} ({} ms)",
                        state.traversal.visited_count(),
                        state.traversal.clock(),
                        timer.elapsed().as_millis()
                    )),
                    Err(e) => CommandResult::Error(format!("遍历失败: {}", e)),
                }
            }
            None => CommandResult::Error("用法: dfs <起点>".to_string()),
        },

        "resume" => match args.split_whitespace().next() {
            Some(start) => {
                let timer = Instant::now();
                let start = VertexId::new(start);
                match state.traversal.resume(&mut state.graph, &start) {
                    Ok(_) => CommandResult::Message(format!(
                        "遍历继续: 累计 {} 个顶点, 时钟 {} ({} ms)",
                        state.traversal.visited_count(),
                        state.traversal.clock(),
                        timer.elapsed().as_millis()
                    )),
                    Err(e) => CommandResult::Error(format!("遍历失败: {}", e)),
                }
            }
            None => CommandResult::Error("用法: resume <起点>".to_string()),
        },

        "reset" => {
            state.graph.reset_traversal();
            state.traversal = DfsTraversal::new();
            CommandResult::Message("遍历标记和时间戳已清除".to_string())
        }

        "show" | "p" | "print" => CommandResult::Message(state.graph.render()),

        "table" => {
            let timer = Instant::now();
            let output = if vertical_once {
                Printer::new(PrintMode::Vertical)
                    .print_vertices(&state.graph, timer.elapsed().as_millis() as u64)
            } else {
                state
                    .printer
                    .print_vertices(&state.graph, timer.elapsed().as_millis() as u64)
            };
            CommandResult::Message(output)
        }

        "format" => match args {
            "table" => {
                state.printer.set_mode(PrintMode::Table);
                CommandResult::Message("Print mode set to table".to_string())
            }
            "vertical" => {
                state.printer.set_mode(PrintMode::Vertical);
                CommandResult::Message("Print mode set to vertical".to_string())
            }
            _ => CommandResult::Error("Usage: format <table|vertical>".to_string()),
        },

        "stats" | "info" => {
            CommandResult::Message(state.printer.print_stats(&state.graph, &state.traversal))
        }

        "import" => {
            let import_args: Vec<&str> = args.split_whitespace().collect();
            if import_args.is_empty() {
                return CommandResult::Error("用法: import <文件> [edgelist|jsonl]".to_string());
            }
            let path = import_args[0];
            let format_name = import_args.get(1).copied().unwrap_or("edgelist");
            let result = match format_name {
                "edgelist" => import::import_edge_list(&mut state.graph, path),
                "jsonl" => import::import_jsonl(&mut state.graph, path),
                _ => return CommandResult::Error(format!("未知导入格式: {}", format_name)),
            };
            match result {
                Ok(stats) => CommandResult::Message(format!(
                    "导入完成: {} 个新顶点, {} 条边, {} 个错误 ({} ms)",
                    stats.vertices_imported, stats.edges_imported, stats.errors, stats.duration_ms
                )),
                Err(e) => CommandResult::Error(format!("导入失败: {}", e)),
            }
        }

        "save" => match args.split_whitespace().next() {
            Some(path) => {
                let path = snapshot_path(path);
                match storage::save_graph(&state.graph, &path) {
                    Ok(_) => CommandResult::Message(format!("快照已保存: {}", path.display())),
                    Err(e) => CommandResult::Error(format!("保存失败: {}", e)),
                }
            }
            None => CommandResult::Error("用法: save <文件>".to_string()),
        },

        "load" => match args.split_whitespace().next() {
            Some(path) => {
                let path = snapshot_path(path);
                match storage::load_graph(&path) {
                    Ok(graph) => {
                        // 时钟状态不随快照保存，加载后从新驱动器开始
                        state.graph = graph;
                        state.traversal = DfsTraversal::new();
                        CommandResult::Message(format!(
                            "快照已加载: {} 个顶点, {} 条边",
                            state.graph.vertex_count(),
                            state.graph.edge_count()
                        ))
                    }
                    Err(e) => CommandResult::Error(format!("加载失败: {}", e)),
                }
            }
            None => CommandResult::Error("用法: load <文件>".to_string()),
        },

        "tee" => {
            let tee_args: Vec<&str> = args.split_whitespace().collect();
            let (overwrite, filename) = if tee_args.first() == Some(&"-o") {
                (true, tee_args.get(1).copied())
            } else {
                (false, tee_args.first().copied())
            };

            if let Some(filename) = filename {
                let path = PathBuf::from(filename);
                let file = if overwrite {
                    File::create(&path)
                } else {
                    File::options().create(true).append(true).open(&path)
                };

                match file {
                    Ok(f) => {
                        state.tee_file = Some(f);
                        CommandResult::Message(format!("Logging to {}", filename))
                    }
                    Err(e) => CommandResult::Error(format!("Cannot open file: {}", e)),
                }
            } else {
                CommandResult::Error("Usage: tee [-o] <filename>".to_string())
            }
        }

        "notee" => {
            if let Some(file) = state.tee_file.take() {
                drop(file);
                CommandResult::Message("Stopped logging".to_string())
            } else {
                CommandResult::Message("No active logging".to_string())
            }
        }

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("Unknown command: {}. Type 'help' for help.", cmd)),
    }
}

/// 无扩展名的快照路径补上默认扩展名
fn snapshot_path(arg: &str) -> PathBuf {
    let mut path = PathBuf::from(arg);
    if path.extension().is_none() {
        path.set_extension(storage::SNAPSHOT_FILE_EXT);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_edge() -> ConsoleState {
        let mut state = ConsoleState::new();
        execute_command("vertex A", &mut state);
        execute_command("vertex B", &mut state);
        execute_command("edge A B", &mut state);
        state
    }

    #[test]
    fn test_vertex_and_edge_commands() {
        let state = state_with_edge();
        assert_eq!(state.graph.vertex_count(), 2);
        assert_eq!(state.graph.edge_count(), 1);
    }

    #[test]
    fn test_duplicate_vertex_reports_error() {
        let mut state = ConsoleState::new();
        execute_command("vertex A", &mut state);
        let result = execute_command("vertex A", &mut state);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_edge_requires_existing_endpoints() {
        let mut state = ConsoleState::new();
        execute_command("vertex A", &mut state);
        let result = execute_command("edge A Z", &mut state);
        assert!(matches!(result, CommandResult::Error(_)));
        assert_eq!(state.graph.edge_count(), 0);
    }

    #[test]
    fn test_dfs_resume_and_reset() {
        let mut state = state_with_edge();
        execute_command("vertex C", &mut state);
        execute_command("vertex D", &mut state);
        execute_command("edge C D", &mut state);

        execute_command("dfs A", &mut state);
        execute_command("resume C", &mut state);

        // resume 沿用 dfs 留下的时钟，第二个分量从 5 开始
        let c = state.graph.vertex(&VertexId::from("C")).unwrap();
        assert_eq!((c.discovery_time(), c.finish_time()), (5, 8));
        assert_eq!(state.traversal.visited_count(), 4);

        execute_command("reset", &mut state);
        let a = state.graph.vertex(&VertexId::from("A")).unwrap();
        assert_eq!(a.discovery_time(), 0);
        assert_eq!(state.traversal.clock(), 1);
    }

    #[test]
    fn test_dfs_unknown_start() {
        let mut state = state_with_edge();
        let result = execute_command("dfs X", &mut state);
        assert!(matches!(result, CommandResult::Error(_)));
    }

    #[test]
    fn test_show_renders_adjacency_list() {
        let mut state = state_with_edge();
        let result = execute_command("show", &mut state);
        match result {
            CommandResult::Message(output) => {
                assert!(output.contains("Adjacency list:"));
                assert!(output.contains("A: B  0/0"));
            }
            _ => panic!("expected message"),
        }
    }

    #[test]
    fn test_save_load_default_snapshot_extension() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("session");

        let mut state = state_with_edge();
        let result = execute_command(&format!("save {}", base.display()), &mut state);
        assert!(matches!(result, CommandResult::Message(_)));
        // 无扩展名的参数落到 session.json
        assert!(base.with_extension("json").exists());

        let mut restored = ConsoleState::new();
        execute_command(&format!("load {}", base.display()), &mut restored);
        assert_eq!(restored.graph.vertex_count(), 2);
        assert_eq!(restored.graph.edge_count(), 1);
    }

    #[test]
    fn test_quit_and_unknown() {
        let mut state = ConsoleState::new();
        assert!(matches!(
            execute_command("quit", &mut state),
            CommandResult::Exit
        ));
        assert!(matches!(
            execute_command("frobnicate", &mut state),
            CommandResult::Error(_)
        ));
    }
}
