mod cli;
mod error;
mod logging;
mod output;
mod parser;
mod progress;
mod rename;
mod scanner;

use clap::Parser;
use cli::Args;
use error::AppError;
use output::{display_dry_run, display_execution_result};
use progress::Progress;
use rename::{rename_textures, RenameOptions};
use scanner::{scan_files, ScannerError};
use tracing::{error, info, warn};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new_with_verbosity(args.verbose > 0);

    progress.scan_start(&args.target_dir);
    let entries = match scan_files(&args.target_dir) {
        Ok(entries) => entries,
        Err(ScannerError::PathNotFound(path)) => {
            // Reported condition, not a failure: nothing was processed
            warn!("Target directory does not exist: {}", path.display());
            println!("Directory '{}' does not exist.", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    progress.scan_complete(entries.len());

    info!("Found {} files in {}", entries.len(), args.target_dir.display());

    let options = RenameOptions { dry_run: args.dry };

    let result = rename_textures(&args.target_dir, &entries, &options, &mut progress)?;

    if args.dry {
        display_dry_run(&result, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    } else {
        display_execution_result(&result, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    Ok(())
}
