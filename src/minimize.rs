//! DAWG minimization (`SPEC_FULL.md` §4.3): bottom-up, signature-based node
//! canonicalization. Must run after [`crate::rewrite::rewrite`].

use std::collections::HashMap;

use crate::node::{Arena, NodeId, ALPHABET_SIZE};

/// The structural fingerprint of a node: its (already-canonicalized) child
/// references plus its 26 edge-terminal bits. Two nodes with an equal
/// signature accept the same right-language and can share one
/// representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Signature {
  children: [Option<NodeId>; ALPHABET_SIZE],
  edge_terminal: [bool; ALPHABET_SIZE],
}

impl Signature {
  fn of(arena: &Arena, id: NodeId) -> Self {
    let node = arena.get(id);
    Signature {
      children: node.children,
      edge_terminal: node.edge_terminal,
    }
  }
}

/// Canonicalizes every node reachable from `root`, except `root` itself
/// (the root is never submitted to the equivalence table, per §4.3
/// "Root handling" — it always keeps its own identity so the flattener's
/// "index 0 is root's block" invariant holds).
pub fn compress(arena: &mut Arena, root: NodeId) {
  let mut table: HashMap<Signature, NodeId> = HashMap::with_capacity(arena.len());
  let mut canonical_of: Vec<Option<NodeId>> = vec![None; arena.len()];

  for i in 0..ALPHABET_SIZE {
    if let Some(child) = arena.get(root).children[i] {
      let canonical = compress_node(arena, child, &mut canonical_of, &mut table);
      arena.get_mut(root).children[i] = Some(canonical);
    }
  }
}

/// Recursively canonicalizes `id`'s children, then looks `id` up by
/// signature in `table`: the first node ever seen with a given signature
/// becomes that signature's canonical representative (ties broken by
/// traversal order, per §4.3 "Tie-breaking"); later nodes with the same
/// signature are discarded in favor of it.
///
/// `canonical_of` memoizes the result per node id. Because the arena is a
/// tree until the first merge happens, no node is ever offered to this
/// function twice in practice — but the memo makes the function correct
/// (not merely fast) if minimization is ever driven over a graph that
/// already has shared nodes, per the "depth-first, post-order... a `visited`
/// flag... because sharing is now possible" traversal note in §4.3.
fn compress_node(
  arena: &mut Arena,
  id: NodeId,
  canonical_of: &mut Vec<Option<NodeId>>,
  table: &mut HashMap<Signature, NodeId>,
) -> NodeId {
  if let Some(canonical) = canonical_of[id as usize] {
    return canonical;
  }

  for i in 0..ALPHABET_SIZE {
    if let Some(child) = arena.get(id).children[i] {
      let canonical_child = compress_node(arena, child, canonical_of, table);
      arena.get_mut(id).children[i] = Some(canonical_child);
    }
  }

  let signature = Signature::of(arena, id);
  let canonical = *table.entry(signature).or_insert(id);
  canonical_of[id as usize] = Some(canonical);
  canonical
}

/// Number of distinct nodes reachable from `root` (including root).
/// Post-minimization this is the DAWG node count; the arena itself may
/// still hold unreachable leftovers from nodes that got merged away.
pub fn count_reachable(arena: &Arena, root: NodeId) -> usize {
  let mut seen = vec![false; arena.len()];
  let mut stack = vec![root];
  seen[root as usize] = true;
  let mut count = 0;

  while let Some(id) = stack.pop() {
    count += 1;
    for child in arena.get(id).children.into_iter().flatten() {
      if !seen[child as usize] {
        seen[child as usize] = true;
        stack.push(child);
      }
    }
  }

  count
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::node::letter_index;
  use crate::rewrite::rewrite;
  use crate::trie::TrieBuilder;

  fn built(words: &[&str]) -> TrieBuilder {
    let mut trie = TrieBuilder::new();
    for w in words {
      trie.insert(w);
    }
    rewrite(&mut trie.arena, trie.root());
    trie
  }

  #[test]
  fn all_leaves_merge_into_one_sink() {
    let mut trie = built(&["a", "b", "c"]);
    compress(&mut trie.arena, trie.root());

    let root = trie.arena.get(trie.root());
    let a = root.children[letter_index('a')].unwrap();
    let b = root.children[letter_index('b')].unwrap();
    let c = root.children[letter_index('c')].unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(count_reachable(&trie.arena, trie.root()), 2); // root + sink
  }

  #[test]
  fn shared_suffix_collapses() {
    let mut trie = built(&["car", "cars", "bat", "bats"]);
    compress(&mut trie.arena, trie.root());

    let root = trie.arena.get(trie.root());
    let c = root.children[letter_index('c')].unwrap();
    let a1 = trie.arena.get(c).children[letter_index('a')].unwrap();
    let r = trie.arena.get(a1).children[letter_index('r')].unwrap();
    let s1 = trie.arena.get(r).children[letter_index('s')].unwrap();

    let b = root.children[letter_index('b')].unwrap();
    let a2 = trie.arena.get(b).children[letter_index('a')].unwrap();
    let t = trie.arena.get(a2).children[letter_index('t')].unwrap();
    let s2 = trie.arena.get(t).children[letter_index('s')].unwrap();

    assert_eq!(s1, s2, "the merged leaf after 's' must be shared");
  }

  #[test]
  fn root_is_never_canonicalized_away() {
    // two single-letter words: root's own shape is irrelevant, but the
    // root id itself must remain stable and distinct from any leaf.
    let mut trie = built(&["a"]);
    let root_before = trie.root();
    compress(&mut trie.arena, trie.root());
    assert_eq!(trie.root(), root_before);
  }

  #[test]
  fn minimality_matches_distinct_suffix_classes() {
    // "jumping" and "running" share a "ing" suffix class; the trailing
    // 'g' leaves collapse into one canonical sink regardless.
    let mut trie = built(&["jumping", "running"]);
    compress(&mut trie.arena, trie.root());
    // j-u-m-p-i-n-g and r-u-n-n-i-n-g share only the final three letters
    // ("i","n","g"); expect 7 + 7 - 3 + 1(root) = 12 nodes.
    assert_eq!(count_reachable(&trie.arena, trie.root()), 12);
  }
}
