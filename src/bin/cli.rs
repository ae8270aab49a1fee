//! wgraph CLI 工具
//!
//! 在命令行给出的图上运行一个算法并输出结果树

use anyhow::Context;
use clap::{Parser, Subcommand};
use wgraph::algorithm::{AlgorithmOptions, Algorithms, QueueBackend};
use wgraph::cli::{parse_edge, AlgorithmReport, OutputFormat, Printer};
use wgraph::graph::Graph;
use wgraph::metrics::{global_metrics, AlgorithmKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wgraph-cli")]
#[command(about = "wgraph 命令行工具")]
struct Args {
    /// 顶点数
    #[arg(short = 'n', long)]
    vertices: usize,

    /// 边，格式 U-V 或 U-V:W（可重复）
    #[arg(short, long = "edge", value_name = "U-V[:W]")]
    edges: Vec<String>,

    /// 优先队列实现: linear, heap
    #[arg(short, long, default_value = "linear")]
    backend: QueueBackend,

    /// 输出格式: text, table, json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// 输出算法指标
    #[arg(long)]
    stats: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 广度优先搜索树
    Bfs {
        /// 起点
        #[arg(short, long, default_value = "0")]
        start: usize,
    },
    /// 深度优先搜索森林
    Dfs {
        /// 起点
        #[arg(short, long, default_value = "0")]
        start: usize,
    },
    /// Dijkstra 最短路径树
    Dijkstra {
        /// 起点
        #[arg(short, long, default_value = "0")]
        start: usize,
    },
    /// Prim 最小生成树
    Prim,
    /// Kruskal 最小生成森林
    Kruskal,
}

impl Command {
    fn kind_and_start(&self) -> (AlgorithmKind, Option<usize>) {
        match *self {
            Command::Bfs { start } => (AlgorithmKind::Bfs, Some(start)),
            Command::Dfs { start } => (AlgorithmKind::Dfs, Some(start)),
            Command::Dijkstra { start } => (AlgorithmKind::Dijkstra, Some(start)),
            Command::Prim => (AlgorithmKind::Prim, None),
            Command::Kruskal => (AlgorithmKind::Kruskal, None),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut graph = Graph::new(args.vertices).context("无法创建图")?;
    for text in &args.edges {
        let (from, to, weight) = parse_edge(text)?;
        graph
            .add_edge(from, to, weight)
            .with_context(|| format!("无法添加边 '{}'", text))?;
    }

    let algorithms = Algorithms::with_options(AlgorithmOptions {
        queue_backend: args.backend,
        ..AlgorithmOptions::default()
    });

    let (kind, start) = args.command.kind_and_start();
    let tree = algorithms
        .run(kind, &graph, start.unwrap_or(0))
        .with_context(|| format!("{} 运行失败", kind))?;

    let printer = Printer::new(args.format);
    let report = AlgorithmReport::from_tree(kind, start, &tree);
    print!("{}", printer.render_report(&report, &tree)?);

    if args.stats {
        println!();
        println!("{}", printer.print_stats(&global_metrics().snapshot())?);
    }

    Ok(())
}
