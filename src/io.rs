use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::nucleotide::Nucleotide;

/// Writes the symbols as plain ASCII with no separators and no trailing newline.
pub fn write_sequence<W: Write>(sequence: &[Nucleotide], writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for chunk in sequence.chunks(1 << 16) {
        let bytes = chunk.iter().map(|symbol| symbol.to_byte()).collect::<Vec<u8>>();
        writer.write_all(&bytes)?;
    }
    writer.flush()?;
    Ok(())
}
