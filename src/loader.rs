//! Word-list loading (`SPEC_FULL.md` §4.7 / §6 "Input file").

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::BuildError;
use crate::trie::TrieBuilder;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
  pub words_loaded: usize,
  pub words_skipped: usize,
}

/// Reads `path` one line at a time, inserting every clean word into a fresh
/// trie. A line's trailing whitespace is stripped first; if what remains is
/// non-empty and entirely ASCII letters it is lowercased and inserted,
/// otherwise it's counted as skipped. Blank lines are ignored silently.
pub fn load(path: &Path) -> Result<(TrieBuilder, LoadStats), BuildError> {
  let file = File::open(path).map_err(|source| BuildError::InputOpen {
    path: path.to_path_buf(),
    source,
  })?;

  let mut trie = TrieBuilder::new();
  let mut stats = LoadStats::default();

  for line in BufReader::new(file).lines() {
    let line = line.map_err(|source| BuildError::InputOpen {
      path: path.to_path_buf(),
      source,
    })?;
    let body = line.trim_end_matches([' ', '\t', '\r', '\n']);
    if body.is_empty() {
      continue;
    }

    match clean_word(body) {
      Some(word) => {
        trie.insert(&word);
        stats.words_loaded += 1;
      }
      None => stats.words_skipped += 1,
    }
  }

  Ok((trie, stats))
}

/// Lowercases `body` if it is entirely ASCII letters, otherwise rejects it.
fn clean_word(body: &str) -> Option<String> {
  if body.chars().all(|c| c.is_ascii_alphabetic()) {
    Some(body.to_ascii_lowercase())
  } else {
    None
  }
}
