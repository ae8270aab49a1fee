//! wgraph 演示程序
//!
//! 构建 5 个顶点的样例图，输出 Kruskal、Prim 和 Dijkstra 的结果

use anyhow::Context;
use colored::Colorize;
use wgraph::algorithm::Algorithms;
use wgraph::graph::Graph;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut graph = Graph::new(5)?;
    for (from, to, weight) in [(0, 1, 1), (0, 4, 4), (1, 2, 2), (1, 3, 5), (2, 3, 1), (3, 4, 3)] {
        graph
            .add_edge(from, to, weight)
            .with_context(|| format!("添加边 {}-{} 失败", from, to))?;
    }

    let algorithms = Algorithms::new();

    println!("{}", "Original Graph:".bold().cyan());
    graph.print_all();

    println!("\n{}", "Kruskal's MST:".bold().cyan());
    let mst_kruskal = algorithms.kruskal(&graph)?;
    mst_kruskal.print_graph();

    println!("\n{}", "Prim's MST:".bold().cyan());
    let mst_prim = algorithms.prim(&graph)?;
    mst_prim.print_graph();

    println!("\n{}", "Dijkstra's Shortest Paths from Node 0:".bold().cyan());
    let shortest_paths = algorithms.dijkstra(&graph, 0)?;
    shortest_paths.print_graph();

    Ok(())
}
