use std::path::PathBuf;

/// A single rename operation
#[derive(Debug, Clone)]
pub struct RenameOperation {
    /// Full path to the source file
    pub source_path: PathBuf,
    /// Original filename
    pub source_name: String,
    /// Full path to the destination
    pub destination_path: PathBuf,
    /// Flattened filename
    pub destination_name: String,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
        }
    }
}

/// Result of a rename pass over one directory
#[derive(Debug, Clone)]
pub struct RenameResult {
    /// Operations performed (or planned, in a dry run)
    pub operations: Vec<RenameOperation>,
    /// Candidate names that failed the pattern and were left untouched
    pub skipped: Vec<String>,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl RenameResult {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            skipped: Vec::new(),
            dry_run,
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn add_skipped(&mut self, name: String) {
        self.skipped.push(name);
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.skipped.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}
