mod dot;
mod entry;
mod error;
mod flatten;
mod loader;
mod minimize;
mod node;
mod persist;
mod pipeline;
mod rewrite;
mod trie;
mod walk;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use crate::error::BuildError;

const OUTPUT_PATH: &str = "dawg.bin";
const DOT_PATH: &str = "dawg.dot";
const SMALL_DISPLAY_THRESHOLD: usize = 100;

/// Builds a packed Directed Acyclic Word Graph from a word list.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Path to the input word list, one word per line.
  #[arg(default_value = "words.txt")]
  input: PathBuf,
}

fn main() -> ExitCode {
  env_logger::init();
  let args = Args::parse();

  match run(&args.input) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}

fn run(input: &PathBuf) -> Result<(), BuildError> {
  println!("Loading words from: {}", input.display());
  let (mut trie, stats) = loader::load(input)?;
  println!("Words loaded: {}", stats.words_loaded);
  if stats.words_skipped > 0 {
    println!("Words skipped (non-alpha): {}", stats.words_skipped);
  }
  println!();

  println!("--- Before compression ---");
  println!("Trie nodes: {}\n", trie.count_nodes());

  println!("Compressing...");
  let build_stats = pipeline::compress_trie(&mut trie);

  println!("\n--- After compression ---");
  println!("DAWG nodes: {}", build_stats.dawg_nodes);
  let reduction = if build_stats.trie_nodes > 0 {
    100.0 * (1.0 - build_stats.dawg_nodes as f64 / build_stats.trie_nodes as f64)
  } else {
    0.0
  };
  println!(
    "Compression: {} -> {} nodes ({reduction:.1}% reduction)\n",
    build_stats.trie_nodes, build_stats.dawg_nodes
  );

  if build_stats.dawg_nodes <= SMALL_DISPLAY_THRESHOLD {
    dot::export_dot(&trie.arena, trie.root(), &PathBuf::from(DOT_PATH))?;
    println!("Graphviz file written: {DOT_PATH}");
  } else {
    info!(
      "skipping Graphviz export: {} nodes exceeds the {SMALL_DISPLAY_THRESHOLD}-node display threshold",
      build_stats.dawg_nodes
    );
  }

  println!("--- Flattening DAWG ---");
  let image = flatten::flatten(&trie.arena, trie.root())?;
  println!(
    "Packed DAWG: {} entries ({} bytes)",
    image.len(),
    image.len() * 4
  );

  let output = PathBuf::from(OUTPUT_PATH);
  persist::write_packed(&output, &image).map_err(|source| BuildError::OutputWrite {
    path: output.clone(),
    source,
  })?;
  println!(
    "\nBinary file written: {} ({} bytes)",
    output.display(),
    image.len() * 4
  );

  let read_back = persist::read_packed(&output).map_err(|source| BuildError::InputOpen {
    path: output.clone(),
    source,
  })?;
  let verified = walk::enumerate(&read_back).len();
  println!("\n--- Verifying binary file: {} ---", output.display());
  println!("Words found in binary: {verified}");

  Ok(())
}
