pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod scanner;

pub use error::{AppError, ExitCode};
pub use parser::{is_candidate, parse_texture_name, ParseError, ParsedTexture};
pub use rename::{
    build_flat_name, rename_textures, RenameError, RenameOperation, RenameOptions, RenameResult,
};
pub use scanner::{scan_files, FileEntry, ScannerError};
