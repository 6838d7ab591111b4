// 绘制示例：带权重的无向小图，输出 DOT 和 JSON
//
// 运行: cargo run --example plot_demo

use graft::{assemble, plot, DotExport, GraphData, JsonExport, PlotOptions, Renderer};

fn main() -> graft::Result<()> {
    let graph = GraphData::new(4, vec![(0, 1), (1, 0), (1, 2), (2, 3), (3, 0)])
        .with_undirected(true)
        .with_edge_attr(vec![0.5, 0.5, 2.0, 1.0, 4.0]);

    let options = PlotOptions::new()
        .with_node_names(["alpha", "beta", "gamma", "delta"])
        .with_node_color(["a", "b", "a", "c"])
        .with_node_size(vec![1.0, 3.0, 2.0, 5.0])
        .with_width_scale(3.0)
        .with_layout_option("max_iter", 500);

    println!("=== DOT ===");
    println!("{}", plot(&graph, &options, &DotExport)?);

    let config = assemble(&graph, &options)?;
    println!("=== JSON ===");
    println!("{}", JsonExport.render(&config)?);

    Ok(())
}
