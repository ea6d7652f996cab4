//! Drives the core build pipeline end to end — trie, rewrite, minimize,
//! flatten — independent of the CLI's I/O and reporting (`SPEC_FULL.md`
//! §2 "Data flow"). `main` calls [`compress_trie`] directly so its single
//! in-memory arena can be reused for Graphviz export and flattening; `build`
//! wraps the whole pipeline (including trie construction and flattening)
//! for property tests that only need a word list in and a packed image out.

use crate::error::BuildError;
use crate::flatten;
use crate::minimize;
use crate::rewrite;
use crate::trie::TrieBuilder;

pub struct BuildStats {
  pub trie_nodes: usize,
  pub dawg_nodes: usize,
}

/// Runs the rewrite and minimize phases on an already-populated trie and
/// returns the node-count statistics for both phases. `main` calls this
/// directly (rather than going through [`build`]) so it can export Graphviz
/// and flatten the same compressed arena afterwards without rebuilding it.
pub fn compress_trie(trie: &mut TrieBuilder) -> BuildStats {
  let trie_nodes = trie.count_nodes();
  rewrite::rewrite(&mut trie.arena, trie.root());
  minimize::compress(&mut trie.arena, trie.root());
  let dawg_nodes = minimize::count_reachable(&trie.arena, trie.root());
  BuildStats { trie_nodes, dawg_nodes }
}

pub fn build<'w>(words: impl IntoIterator<Item = &'w str>) -> Result<(BuildStats, Vec<u32>), BuildError> {
  let mut trie = TrieBuilder::new();
  for word in words {
    trie.insert(word);
  }

  let stats = compress_trie(&mut trie);
  let image = flatten::flatten(&trie.arena, trie.root())?;
  Ok((stats, image))
}
