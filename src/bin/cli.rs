//! DepthGraph CLI 工具
//!
//! 交互式命令行界面

use clap::Parser;
use colored::Colorize;
use depthgraph::cli::commands::{execute_command, CommandResult, ConsoleState};
use depthgraph::cli::completer::CommandCompleter;
use depthgraph::storage;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "depthgraph-cli")]
#[command(about = "DepthGraph 命令行工具")]
struct Args {
    /// 启动时加载的快照文件
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志详细程度 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut state = ConsoleState::new();

    if let Some(ref path) = args.snapshot {
        state.graph = storage::load_graph(path)?;
    }

    // 单个命令模式
    if let Some(command) = args.execute {
        match execute_command(&command, &mut state) {
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Error(msg) => {
                eprintln!("{} {}", "错误:".red(), msg);
                std::process::exit(1);
            }
            _ => {}
        }
        return Ok(());
    }

    // 交互模式
    println!("{}", "DepthGraph CLI - 带遍历时间戳的邻接表图".bold());
    println!("=========================================");
    println!("  顶点数: {}", state.graph.vertex_count());
    println!("  边数: {}", state.graph.edge_count());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let config = Config::builder().auto_add_history(true).build();
    let mut editor: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    editor.set_helper(Some(CommandCompleter::new()));

    // 历史记录存放在用户主目录
    let history_path = dirs::home_dir().map(|dir| dir.join(".depthgraph_history"));
    if let Some(ref path) = history_path {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("depthgraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match execute_command(line, &mut state) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Message(msg) => {
                        let output = format!("{}\n", msg);
                        state.write_output(&output);
                    }
                    CommandResult::Error(msg) => {
                        eprintln!("{} {}", "错误:".red(), msg);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("读取输入失败: {}", e);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = editor.save_history(path);
    }

    println!("再见！");
    Ok(())
}

/// 根据 -v 数量初始化日志，输出到 stderr
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
