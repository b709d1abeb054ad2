//! Basic create -> connect -> traverse flow.

use adjgraph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    let mut graph = Graph::new();

    // Nodes exist before they are registered as vertices
    let a = graph.create_node("A");
    let b = graph.create_node("B");
    let c = graph.create_node("C");
    let d = graph.create_node("D");
    graph.add_vertices([a, b, c, d]);

    // Connect them into a path A - B - C - D
    graph.add_edge(a, b)?;
    graph.add_edge(b, c)?;
    graph.add_edge(c, d)?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    println!("DFS from A: {:?}", graph.depth_first_search(a));
    println!("BFS from A: {:?}", graph.breadth_first_search(a));
    println!("Shortest A -> D: {:?}", graph.shortest_path(a, d));

    // An isolated vertex is reachable only from itself
    let e = graph.insert("E");
    println!("BFS from E: {:?}", graph.breadth_first_search(e));
    println!("Shortest A -> E: {:?}", graph.shortest_path(a, e));

    // Edges to unregistered nodes are rejected
    let x = graph.create_node("X");
    if let Err(err) = graph.add_edge(a, x) {
        println!("Rejected: {}", err);
    }

    graph.remove_vertex(b);
    println!("After removing B, BFS from A: {:?}", graph.breadth_first_search(a));

    Ok(())
}
