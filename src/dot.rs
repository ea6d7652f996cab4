//! Graphviz export (`SPEC_FULL.md` §4.8), for small DAWGs only.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::BuildError;
use crate::node::{index_letter, Arena, NodeId, ALPHABET_SIZE};

/// Writes a `digraph DAWG { ... }` description of every node reachable
/// from `root`, numbered in BFS assignment order. The root is rendered as
/// a double circle; terminal edges are green with extra pen width.
pub fn export_dot(arena: &Arena, root: NodeId, path: &Path) -> Result<(), BuildError> {
  write_dot(arena, root, path).map_err(|source| BuildError::OutputWrite {
    path: path.to_path_buf(),
    source,
  })
}

fn write_dot(arena: &Arena, root: NodeId, path: &Path) -> io::Result<()> {
  let mut ids = std::collections::HashMap::new();
  let mut order = Vec::new();
  let mut queue = std::collections::VecDeque::new();

  ids.insert(root, 0usize);
  order.push(root);
  queue.push_back(root);

  while let Some(node) = queue.pop_front() {
    for child in arena.get(node).children.into_iter().flatten() {
      if !ids.contains_key(&child) {
        ids.insert(child, order.len());
        order.push(child);
        queue.push_back(child);
      }
    }
  }

  let mut out = File::create(path)?;
  writeln!(out, "digraph DAWG {{")?;
  writeln!(out, "  rankdir=TB;")?;
  writeln!(out, "  node [shape=circle width=0.3 fontsize=10];")?;
  writeln!(out, "  edge [fontsize=12];")?;
  writeln!(out, "  n0 [label=\"\" shape=doublecircle];")?;
  for (i, _) in order.iter().enumerate().skip(1) {
    writeln!(out, "  n{i} [label=\"{i}\"];")?;
  }

  for &node in &order {
    let parent_id = ids[&node];
    let data = arena.get(node);
    for i in 0..ALPHABET_SIZE {
      let Some(child) = data.children[i] else {
        continue;
      };
      let child_id = ids[&child];
      let letter = index_letter(i);
      if data.edge_terminal[i] {
        writeln!(
          out,
          "  n{parent_id} -> n{child_id} [label=\"{letter}\" color=green fontcolor=green penwidth=2.0];"
        )?;
      } else {
        writeln!(out, "  n{parent_id} -> n{child_id} [label=\"{letter}\"];")?;
      }
    }
  }

  writeln!(out, "}}")?;
  Ok(())
}
