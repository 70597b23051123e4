use lca_fast::{graph::four_adjacency_graph, LcaIndex, Node, Result, Tree};

fn lca(index: &LcaIndex, u: Node, v: Node) -> Result<()> {
    println!("LCA of {} and {} is {}", u, v, index.lca(u, v)?);
    Ok(())
}

fn main() -> Result<()> {
    let tree = Tree::from_parents(vec![5, 5, 6, 6, 6, 7, 7, 7])?;
    println!("Tree:\n{:?}", tree);
    let index = LcaIndex::build(&tree)?;
    for (u, v) in [(0, 0), (0, 1), (2, 3), (2, 4), (5, 6), (0, 2), (2, 6)] {
        lca(&index, u, v)?;
    }
    match index.lca(8, 0) {
        Ok(w) => println!("Unexpected answer {}", w),
        Err(e) => println!("Querying a missing node fails: {}", e),
    }

    let tree = Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6])?;
    let index = LcaIndex::build(&tree)?;
    let g = four_adjacency_graph(2, 2);
    println!(
        "LCA of the edges {:?} of a 2x2 grid: {:?}",
        g.edges().collect::<Vec<_>>(),
        index.lca_edges(&g)?
    );
    println!(
        "LCA of pairs (0, 0), (0, 3), (1, 0), (3, 0): {:?}",
        index.lca_pairs(&[0, 0, 1, 3], &[0, 3, 0, 0])?
    );
    Ok(())
}
