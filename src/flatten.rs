//! Flattening (`SPEC_FULL.md` §4.4): assigns every reachable DAWG node a
//! contiguous child block in a single `Vec<u32>`, via a two-pass BFS.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::entry::{pack, MAX_ENTRIES};
use crate::error::BuildError;
use crate::node::{Arena, NodeId, ALPHABET_SIZE};

pub fn flatten(arena: &Arena, root: NodeId) -> Result<Vec<u32>, BuildError> {
  let mut offsets: HashMap<NodeId, u32> = HashMap::new();
  let mut size: u64 = arena.get(root).child_count() as u64;
  check_capacity(size)?;
  if size == 0 {
    // Empty word set: root has no children, so no child block is ever
    // emitted (SPEC_FULL.md §7/§8: empty input produces a zero-byte image).
    return Ok(Vec::new());
  }

  // Pass 1: offset assignment.
  let mut queue: VecDeque<NodeId> = VecDeque::new();
  queue.push_back(root);
  while let Some(parent) = queue.pop_front() {
    for i in 0..ALPHABET_SIZE {
      let Some(child) = arena.get(parent).children[i] else {
        continue;
      };
      if offsets.contains_key(&child) {
        continue;
      }
      let child_count = arena.get(child).child_count();
      if child_count > 0 {
        offsets.insert(child, size as u32);
        size += child_count as u64;
        check_capacity(size)?;
        queue.push_back(child);
      } else {
        offsets.insert(child, 0);
      }
    }
  }

  let mut image = vec![0u32; size as usize];

  // Pass 2: entry emission, same BFS order as pass 1.
  let mut visited: HashSet<NodeId> = HashSet::new();
  visited.insert(root);
  queue.push_back(root);
  while let Some(parent) = queue.pop_front() {
    let node = arena.get(parent);
    let base = if parent == root { 0 } else { offsets[&parent] };

    let existing: Vec<usize> = (0..ALPHABET_SIZE)
      .filter(|&i| node.children[i].is_some())
      .collect();
    let last = *existing.last().expect("parent was enqueued because it has children");

    for (slot, &i) in existing.iter().enumerate() {
      let child = node.children[i].expect("filtered above");
      let next = offsets[&child];
      let entry = pack(
        (i + 1) as u8,
        node.edge_terminal[i],
        i == last,
        next,
      );
      image[base as usize + slot] = entry;

      if arena.get(child).child_count() > 0 && visited.insert(child) {
        queue.push_back(child);
      }
    }
  }

  Ok(image)
}

fn check_capacity(size: u64) -> Result<(), BuildError> {
  if size > MAX_ENTRIES {
    Err(BuildError::CapacityOverflow { needed: size })
  } else {
    Ok(())
  }
}
