//! Trie construction (`SPEC_FULL.md` §4.1).

use crate::node::{letter_index, Arena, NodeId};

pub struct TrieBuilder {
  pub arena: Arena,
}

impl TrieBuilder {
  pub fn new() -> Self {
    TrieBuilder {
      arena: Arena::new(),
    }
  }

  pub fn root(&self) -> NodeId {
    Arena::ROOT
  }

  /// Walks the trie from the root, creating missing children, and marks the
  /// final node as terminal. `word` must be non-empty and lowercase
  /// `a`..`z`; enforcing that is the loader's job (§4.7), not this one's.
  pub fn insert(&mut self, word: &str) {
    debug_assert!(!word.is_empty());
    debug_assert!(word.chars().all(|c| c.is_ascii_lowercase()));

    let mut current = self.root();
    for c in word.chars() {
      let i = letter_index(c);
      let next = match self.arena.get(current).children[i] {
        Some(child) => child,
        None => {
          let child = self.arena.alloc();
          self.arena.get_mut(current).children[i] = Some(child);
          child
        }
      };
      current = next;
    }
    self.arena.get_mut(current).node_terminal = true;
  }

  /// Number of distinct nodes reachable from root, including root. Before
  /// any compression has happened the trie is a tree, so every allocated
  /// node is reachable exactly once and this is just the arena size.
  pub fn count_nodes(&self) -> usize {
    self.arena.len()
  }
}

impl Default for TrieBuilder {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_trie_has_only_root() {
    let trie = TrieBuilder::new();
    assert_eq!(trie.count_nodes(), 1);
    assert!(trie.arena.get(trie.root()).is_leaf());
  }

  #[test]
  fn insert_single_letter_word() {
    let mut trie = TrieBuilder::new();
    trie.insert("a");
    assert_eq!(trie.count_nodes(), 2);
    let root = trie.arena.get(trie.root());
    let child = root.children[letter_index('a')].expect("a-edge");
    assert!(trie.arena.get(child).node_terminal);
    assert!(trie.arena.get(child).is_leaf());
  }

  #[test]
  fn insert_is_idempotent() {
    let mut a = TrieBuilder::new();
    a.insert("hello");
    a.insert("hello");

    let mut b = TrieBuilder::new();
    b.insert("hello");

    assert_eq!(a.count_nodes(), b.count_nodes());
  }

  #[test]
  fn shared_prefixes_share_nodes() {
    let mut trie = TrieBuilder::new();
    trie.insert("cat");
    trie.insert("car");
    // root -> c -> a -> {t, r}: 5 nodes total.
    assert_eq!(trie.count_nodes(), 5);
  }

  #[test]
  fn insertion_order_does_not_affect_node_count() {
    let mut forward = TrieBuilder::new();
    for w in ["cat", "cats", "car", "cars"] {
      forward.insert(w);
    }

    let mut backward = TrieBuilder::new();
    for w in ["cars", "car", "cats", "cat"] {
      backward.insert(w);
    }

    assert_eq!(forward.count_nodes(), backward.count_nodes());
  }
}
