use crate::rename::RenameResult;
use std::io::{self, Write};

/// Display dry run results in a formatted output
pub fn display_dry_run(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "              DRY RUN")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;
    writeln!(writer, "Operations: {}", result.operations.len())?;
    writeln!(writer)?;

    if result.operations.is_empty() {
        writeln!(writer, "No files to rename.")?;
    } else {
        writeln!(writer, "Planned changes:")?;
        writeln!(writer)?;

        for (i, op) in result.operations.iter().enumerate() {
            writeln!(writer, "  {}.", i + 1)?;
            writeln!(writer, "     From: {}", op.source_name)?;
            writeln!(writer, "     To:   {}", op.destination_name)?;
            writeln!(writer)?;
        }
    }

    if !result.skipped.is_empty() {
        writeln!(writer, "Skipped (pattern mismatch):")?;
        for name in &result.skipped {
            writeln!(writer, "  - {}", name)?;
        }
        writeln!(writer)?;
    }

    // Summary
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "Summary:")?;
    writeln!(
        writer,
        "  {} files would be renamed",
        result.operations.len()
    )?;

    if !result.skipped.is_empty() {
        writeln!(writer, "  {} files would be skipped", result.skipped.len())?;
    }

    writeln!(writer)?;
    writeln!(writer, "Run without --dry to apply these changes.")?;

    Ok(())
}

/// Display execution results (non-dry-run)
pub fn display_execution_result(result: &RenameResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Successfully renamed {} files.",
        result.operations.len()
    )?;

    if !result.skipped.is_empty() {
        writeln!(
            writer,
            "  {} files were skipped (pattern mismatch).",
            result.skipped.len()
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::RenameOperation;
    use std::path::PathBuf;

    fn create_test_result(dry_run: bool) -> RenameResult {
        let mut result = RenameResult::new(dry_run);

        result.add_operation(RenameOperation::new(
            PathBuf::from(
                "/textures/minecraft__arrow__{potion__'minecraft__healing'}_tipped.png",
            ),
            "minecraft__arrow__healing.png".to_string(),
        ));

        result.add_skipped("minecraft__potion__{garbage}weird.png".to_string());

        result
    }

    #[test]
    fn test_display_dry_run() {
        let result = create_test_result(true);
        let mut output = Vec::new();

        display_dry_run(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("minecraft__arrow__healing.png"));
        assert!(output_str.contains("minecraft__potion__{garbage}weird.png"));
        assert!(output_str.contains("1 files would be renamed"));
        assert!(output_str.contains("1 files would be skipped"));
    }

    #[test]
    fn test_display_dry_run_empty() {
        let result = RenameResult::new(true);
        let mut output = Vec::new();

        display_dry_run(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("DRY RUN"));
        assert!(output_str.contains("No files to rename"));
    }

    #[test]
    fn test_display_execution_result() {
        let result = create_test_result(false);
        let mut output = Vec::new();

        display_execution_result(&result, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();

        assert!(output_str.contains("Successfully renamed 1 files"));
        assert!(output_str.contains("1 files were skipped"));
    }
}
