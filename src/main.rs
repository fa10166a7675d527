use clap::Parser;
use file_organizer::cli::{Args, run_cli};
use file_organizer::logging::{self, DEFAULT_LOG_PATH};
use file_organizer::output::OutputFormatter;
use std::path::Path;

fn main() {
    let args = Args::parse();
    let log_path = Path::new(DEFAULT_LOG_PATH);

    if let Err(e) = logging::init(log_path) {
        OutputFormatter::warning(&format!("Activity log unavailable: {}", e));
    }

    run_cli(&args.directory, log_path);
}
