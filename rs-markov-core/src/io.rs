use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a corpus file and returns one entry per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Blank lines are kept; seeding skips them
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}
