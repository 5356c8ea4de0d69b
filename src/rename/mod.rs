mod engine;
mod name_builder;
mod types;

pub use engine::{rename_textures, RenameError, RenameOptions};
pub use name_builder::build_flat_name;
pub use types::{RenameOperation, RenameResult};
