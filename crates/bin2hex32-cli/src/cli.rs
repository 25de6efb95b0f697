use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bin2hex32",
    version,
    about = "Converts a binary image into 32-bit little-endian hex words"
)]
pub struct Cli {
    /// Binary image to convert.
    pub input: PathBuf,
    /// Destination hex file, one 8-digit word per line.
    pub output: PathBuf,
}
