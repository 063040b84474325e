use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use compedia::{Archive, Error, Progress};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input archive path
    #[arg(index = 1)]
    input: PathBuf,

    /// Output directory, created if missing
    #[arg(index = 2, required_unless_present = "list")]
    output: Option<PathBuf>,

    /// List archive entries instead of extracting them
    #[arg(short, long, default_value = "false")]
    list: bool,

    /// Only print the final summary
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

/// Distinct status per fatal error kind. Clap exits with 2 on usage errors.
fn exit_status(error: &Error) -> u8 {
    match error {
        Error::MissingSource(_) => 3,
        Error::TruncatedHeader(_) | Error::UnsupportedFormat(_) => 4,
        Error::MalformedEntry { .. } => 5,
        _ => 1,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(exit_status(&error))
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    if !args.input.is_file() {
        return Err(Error::MissingSource(args.input.display().to_string()));
    }
    let file = File::open(&args.input)?;
    // SAFETY: mapped read only, and nothing in this process writes to the archive
    let map = unsafe { memmap2::Mmap::map(&file)? };
    log::debug!("mapped {} ({:#x} bytes)", args.input.display(), map.len());
    let archive = Archive::new(&map[..])?;

    match args.output {
        Some(output) if !args.list => extract(&archive, &output, args.quiet),
        _ => list(&archive),
    }
}

fn list(archive: &Archive) -> Result<(), Error> {
    let mut count = 0;
    for entry in archive.entries() {
        let entry = entry?;
        println!("{:#010x} {:>10} {entry}", entry.start, entry.length);
        count += 1;
    }
    println!("{count} entries");
    Ok(())
}

fn extract(archive: &Archive, output: &Path, quiet: bool) -> Result<(), Error> {
    let start = Instant::now();
    fs::create_dir_all(output)?;
    log::debug!("extracting to {}", output.display());
    let summary = archive.extract_all(output, |progress| match progress {
        Progress::Exporting(path) => {
            if !quiet {
                println!("Exporting file: {}", path.display());
            }
        }
        Progress::Failed { path, error } => {
            eprintln!("Failed to export file {}: {error}", path.display());
        }
    })?;
    println!(
        "Finished writing {} files in {} seconds",
        summary.written,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
