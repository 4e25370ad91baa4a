//! DepthGraph 演示程序
//!
//! 构建样例图并运行带时间戳的深度优先遍历

use clap::Parser;
use depthgraph::algorithm::DfsTraversal;
use depthgraph::cli::printer::Printer;
use depthgraph::graph::{Graph, Vertex, VertexId};
use tracing_subscriber::EnvFilter;

/// 样例图的边，两个字母各表示一个端点
const SAMPLE_EDGES: [&str; 12] = [
    "AB", "AE", "BF", "CG", "DE", "DH", "EH", "FG", "FI", "FJ", "GJ", "HI",
];

#[derive(Parser, Debug)]
#[command(name = "depthgraph-demo")]
#[command(about = "DepthGraph 深度优先遍历演示")]
struct Args {
    /// 遍历起点
    #[arg(short, long, default_value = "A")]
    start: String,

    /// 日志详细程度 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut graph = build_sample_graph();

    println!("DepthGraph 演示");
    println!("================");
    println!("顶点数: {}", graph.vertex_count());
    println!("边数: {}", graph.edge_count());
    println!("起点: {}", args.start);
    println!();

    let mut traversal = DfsTraversal::new();
    traversal.run(&mut graph, &VertexId::new(args.start.as_str()))?;

    print!("{}", graph.render());
    println!();
    print!("{}", Printer::default().print_stats(&graph, &traversal));

    Ok(())
}

/// 构建演示用的十顶点样例图
fn build_sample_graph() -> Graph {
    let mut graph = Graph::new();
    for id in 'A'..='J' {
        graph.add_vertex(Vertex::new(id.to_string()));
    }
    for edge in SAMPLE_EDGES {
        let (u, v) = edge.split_at(1);
        graph.add_edge(&VertexId::new(u), &VertexId::new(v));
    }
    graph
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
