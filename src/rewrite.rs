//! Edge-terminal rewrite (`SPEC_FULL.md` §4.2): moves `node_terminal` from
//! each node onto every edge that points at it, so minimization can merge
//! leaves that differ only in terminality. Must run before [`crate::minimize`].

use crate::node::{Arena, NodeId, ALPHABET_SIZE};

pub fn rewrite(arena: &mut Arena, root: NodeId) {
  let mut visited = vec![false; arena.len()];
  rewrite_node(arena, root, &mut visited);
}

fn rewrite_node(arena: &mut Arena, node: NodeId, visited: &mut Vec<bool>) {
  if visited[node as usize] {
    return;
  }
  visited[node as usize] = true;

  for i in 0..ALPHABET_SIZE {
    if let Some(child) = arena.get(node).children[i] {
      let child_terminal = arena.get(child).node_terminal;
      arena.get_mut(node).edge_terminal[i] = child_terminal;
      rewrite_node(arena, child, visited);
    }
  }
}
