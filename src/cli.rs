use clap::Parser;
use std::path::PathBuf;

/// Default texture directory used when no argument is given, matching the
/// resource layout this tool was written for.
pub const DEFAULT_TEXTURE_DIR: &str = "src/main/resources/textures";

#[derive(Parser, Debug)]
#[command(name = "nbt2texture")]
#[command(author, version, about, long_about = None)]
#[command(about = "Flatten NBT-annotated potion texture filenames")]
pub struct Args {
    /// Directory containing the texture files to rename
    #[arg(default_value = DEFAULT_TEXTURE_DIR)]
    pub target_dir: PathBuf,

    /// Simulate changes without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
