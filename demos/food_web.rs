use petgraph::graph::DiGraph;
use trophic::{trophic_levels_weighted, TrophicAnalysis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Weighted food web from Figure 5 of Levine (1980).
    // Edge weights are the fraction of the predator's diet.
    let mut web = DiGraph::<&str, f64>::new();
    let producer = web.add_node("producer");
    let grazer = web.add_node("grazer");
    let top = web.add_node("top predator");
    let omnivore = web.add_node("omnivore");
    let mid = web.add_node("mid predator");

    web.add_edge(producer, grazer, 1.0);
    web.add_edge(producer, top, 0.2);
    web.add_edge(producer, omnivore, 0.8);
    web.add_edge(grazer, top, 0.2);
    web.add_edge(grazer, mid, 0.3);
    web.add_edge(omnivore, top, 0.6);
    web.add_edge(omnivore, mid, 0.7);
    web.add_edge(mid, omnivore, 0.2);

    let levels = trophic_levels_weighted(&web, |e| *e.weight())?;
    for node in web.node_indices() {
        println!("{:>14}: {:.4}", web[node], levels[node.index()]);
    }

    let report = TrophicAnalysis::new()
        .with_cannibalism(false)
        .run(&web, |e| *e.weight())?;
    println!("basal nodes: {:?}", report.basal_nodes());
    println!("trophic coherence q = {:.4}", report.coherence);

    Ok(())
}
