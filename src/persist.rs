//! Persistence (`SPEC_FULL.md` §4.6): the packed image as a raw sequence of
//! little-endian 32-bit words, no header, no footer, no length prefix.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

pub fn write_packed(path: &Path, image: &[u32]) -> io::Result<()> {
  let file = File::create(path)?;
  let mut writer = BufWriter::new(file);
  for &entry in image {
    writer.write_u32::<LittleEndian>(entry)?;
  }
  Ok(())
}

/// Reads back every little-endian `u32` in the file; entry count is
/// inferred from file size, so this simply reads until EOF.
pub fn read_packed(path: &Path) -> io::Result<Vec<u32>> {
  let file = File::open(path)?;
  let mut reader = BufReader::new(file);
  let mut image = Vec::new();

  loop {
    match reader.read_u32::<LittleEndian>() {
      Ok(entry) => image.push(entry),
      Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
      Err(e) => return Err(e),
    }
  }

  Ok(image)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile_path::temp_path;

  mod tempfile_path {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    /// A scratch file path under the OS temp dir, unique per call so
    /// parallel tests never collide.
    pub fn temp_path(label: &str) -> PathBuf {
      let n = COUNTER.fetch_add(1, Ordering::Relaxed);
      std::env::temp_dir().join(format!("dawg-builder-test-{label}-{}-{}", std::process::id(), n))
    }
  }

  #[test]
  fn round_trips_entries() {
    let path = temp_path("round-trip");
    let image = vec![0x0000_0061, 0xDEAD_BEEF, 0];
    write_packed(&path, &image).unwrap();
    let read_back = read_packed(&path).unwrap();
    assert_eq!(read_back, image);
    std::fs::remove_file(&path).ok();
  }

  #[test]
  fn empty_image_is_zero_byte_file() {
    let path = temp_path("empty");
    write_packed(&path, &[]).unwrap();
    let metadata = std::fs::metadata(&path).unwrap();
    assert_eq!(metadata.len(), 0);
    assert!(read_packed(&path).unwrap().is_empty());
    std::fs::remove_file(&path).ok();
  }

  #[test]
  fn open_failure_surfaces_as_io_error() {
    let path = temp_path("missing");
    assert!(read_packed(&path).is_err());
  }
}
