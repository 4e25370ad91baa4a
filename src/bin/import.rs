//! DepthGraph 数据导入工具
//!
//! 从边列表或 JSON Lines 文件批量导入图数据

use clap::Parser;
use depthgraph::graph::{Graph, VertexId};
use depthgraph::import::EdgeListImporter;
use depthgraph::storage;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "depthgraph-import")]
#[command(about = "DepthGraph 数据导入工具")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: edgelist, jsonl
    #[arg(short, long, default_value = "edgelist")]
    format: String,

    /// 导入后从该顶点开始深度优先遍历
    #[arg(short, long)]
    start: Option<String>,

    /// 遍历后保存快照到该文件
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 日志详细程度 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("DepthGraph 数据导入工具");
    println!("========================");
    println!("输入文件: {:?}", args.input);
    println!("格式: {}", args.format);

    let mut graph = Graph::new();

    println!("\n开始导入...");

    let mut importer = EdgeListImporter::new(&mut graph);
    let stats = match args.format.as_str() {
        "edgelist" => importer.import_edge_list(&args.input)?,
        "jsonl" | "json" => importer.import_jsonl(&args.input)?,
        _ => {
            eprintln!("不支持的格式: {}", args.format);
            std::process::exit(1);
        }
    };

    println!("\n导入完成!");
    println!("  新建顶点: {}", stats.vertices_imported);
    println!("  处理边数: {}", stats.edges_imported);
    println!("  错误数: {}", stats.errors);
    println!("  耗时: {} ms", stats.duration_ms);
    println!("\n当前图大小:");
    println!("  顶点数: {}", graph.vertex_count());
    println!("  边数: {}", graph.edge_count());

    // 可选：导入后直接遍历并打印邻接表
    if let Some(ref start) = args.start {
        graph.run_dfs(&VertexId::new(start.as_str()))?;
        println!();
        print!("{}", graph.render());
    }

    if let Some(ref output) = args.output {
        storage::save_graph(&graph, output)?;
        println!("\n快照已保存: {}", output.display());
    }

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
