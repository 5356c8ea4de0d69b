use thiserror::Error;

/// Fields extracted from an NBT-annotated texture filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTexture {
    pub item_type: String,
    pub potion_type: String,
    pub original_name: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Filename does not match the expected texture pattern: {0}")]
    UnrecognizedPattern(String),
}
