use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make the build pipeline fail, per `SPEC_FULL.md` §7.
///
/// Allocation failure is deliberately absent: the spec treats it as fatal
/// and leaves recovery to the host allocator, so it surfaces as an ordinary
/// Rust abort rather than a typed error.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("could not open input file `{path}`: {source}")]
  InputOpen {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("could not write output file `{path}`: {source}")]
  OutputWrite {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(
    "packed image would need {needed} entries, exceeding the 2^25 entry / 25-bit next-pointer limit"
  )]
  CapacityOverflow { needed: u64 },
}
