use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const WORD_BYTES: usize = 4;

/// Reads the whole binary image, packs it into little-endian words and writes
/// the hex image in one shot, overwriting any existing output file.
pub fn convert_file(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;
    let words = pack_words(&data);
    tracing::info!("Packed {} bytes into {} words", data.len(), words.len());

    fs::write(output, render_hex_lines(&words))
        .with_context(|| format!("failed to write hex file to {}", output.display()))?;
    tracing::info!("Hex image written to {}", output.display());
    Ok(())
}

/// Appends zero bytes until the image length is a multiple of the word size.
pub fn pad_binary(mut data: Vec<u8>) -> Vec<u8> {
    if !data.len().is_multiple_of(WORD_BYTES) {
        data.resize(data.len().next_multiple_of(WORD_BYTES), 0);
    }
    data
}

/// Packs each consecutive 4-byte group into a word, first byte least significant.
pub fn pack_words(data: &[u8]) -> Vec<u32> {
    let padded = pad_binary(data.to_vec());
    padded
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

pub fn render_hex_lines(words: &[u32]) -> String {
    let mut lines = String::with_capacity(words.len() * (WORD_BYTES * 2 + 1));
    for word in words {
        lines.push_str(&format!("{word:08x}\n"));
    }
    lines
}
