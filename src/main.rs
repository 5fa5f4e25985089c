use shapefile_reader::{ParseOptions, ParseOutcome, Shapefile, ShapefileReader};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-shapefile> [--limit <N>] [--strict]", args[0]);
        std::process::exit(1);
    }

    let shp_path = &args[1];
    let strict = args.iter().any(|arg| arg == "--strict");
    let mut limit: Option<usize> = None;
    // Parse --limit argument
    if let Some(limit_idx) = args.iter().position(|arg| arg == "--limit") {
        match args.get(limit_idx + 1).map(|s| s.parse::<usize>()) {
            Some(Ok(n)) if n > 0 => limit = Some(n),
            Some(_) => {
                eprintln!("ERROR: --limit expects a positive integer.");
                std::process::exit(1);
            }
            None => {
                eprintln!("ERROR: --limit flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    let options = ParseOptions { strict_record_length: strict };

    println!("Reading shapefile: {}", shp_path);
    println!("{}", "=".repeat(60));

    match ShapefileReader::with_options(shp_path, options) {
        Ok(reader) => {
            let header = reader.header();
            println!("  Shape type: {}", header.shape_type);
            println!("  Version: {}", header.version);
            println!("  File length: {} bytes", header.file_length_bytes());
            println!(
                "  Bounding box: x=[{}, {}] y=[{}, {}]",
                header.bbox.min_x, header.bbox.max_x, header.bbox.min_y, header.bbox.max_y
            );
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to open shapefile");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }

    println!("\nShapes:");
    let mut session = Shapefile::with_options(options);
    let mut count = 0usize;
    let result = session.parse(shp_path, |shape| {
        count += 1;
        println!("  {}. {}", count, shape);
        limit.is_none_or(|n| count < n)
    });

    match result {
        Ok(ParseOutcome::Completed { records }) => println!("\nDone: {} records.", records),
        Ok(ParseOutcome::Stopped { .. }) => println!("\nStopped after {} records.", count),
        Err(_) => {
            eprintln!("\nERROR: {}", session.last_error().unwrap_or("unknown error"));
            std::process::exit(1);
        }
    }
}
