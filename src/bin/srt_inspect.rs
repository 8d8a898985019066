use log::{error, info};
use moviequote::subtitles::extract_local_subtitle_entries;
use moviequote::SubtitleEntry;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: srt_inspect <file.srt> [--json]");
        println!("Example: srt_inspect tests/testdata/sample.srt --json");
        return ExitCode::FAILURE;
    }
    let file_path = &args[1];
    let as_json = args.iter().skip(2).any(|a| a == "--json");

    match inspect(file_path, as_json) {
        Ok(count) => {
            info!("{} entries in {}", count, file_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Inspection of {} failed: {}", file_path, e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn inspect(path: &str, as_json: bool) -> Result<usize, Box<dyn std::error::Error>> {
    let entries = extract_local_subtitle_entries(path)?;
    if entries.is_empty() {
        return Err(moviequote::ImportError::NoEntries.into());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_entries(&entries);
    }
    Ok(entries.len())
}

fn print_entries(entries: &[SubtitleEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        println!("{:>5}  {} --> {}  {}", i + 1, entry.start, entry.end, entry.text);
    }
}
