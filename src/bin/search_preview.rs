//! Search Preview
//!
//! Runs a search against a document fixture and prints the per-page match
//! counts and highlight rectangles, exactly as the viewer would place them.
//!
//! Usage:
//!   cargo run --bin search_preview -- fixture.json "query"
//!   cargo run --bin search_preview -- fixture.json "query" --scale 0.5 --verbose

use pageturn::document::{DocumentSource, InMemoryDocument};
use pageturn::overlay::MemoryOverlays;
use pageturn::search::SearchOutcome;
use pageturn::session::ViewerSession;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "Usage: search_preview <fixture.json> <query> [--scale FACTOR] [--verbose]";

struct PreviewConfig {
    fixture: PathBuf,
    query: String,
    scale: f64,
    verbose: bool,
}

impl PreviewConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        match Self::parse(&args) {
            Ok(config) => config,
            Err(message) => {
                eprintln!("{}", message);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
    }

    fn parse(args: &[String]) -> Result<Self, String> {
        let mut positional = Vec::new();
        let mut scale = 1.0_f64;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--scale" => {
                    i += 1;
                    scale = match args.get(i).map(|raw| raw.parse::<f64>()) {
                        Some(Ok(value)) => value,
                        Some(Err(_)) => {
                            return Err(format!("--scale is not a number: {:?}", args[i]))
                        }
                        None => return Err("--scale needs a value".to_string()),
                    };
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        if positional.len() < 2 {
            return Err("expected a fixture path and a query".to_string());
        }

        Ok(Self {
            fixture: PathBuf::from(&positional[0]),
            query: positional[1].clone(),
            scale,
            verbose,
        })
    }
}

fn run_preview(config: &PreviewConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(&config.fixture)?;
    let doc: InMemoryDocument = serde_json::from_str(&json)?;

    // Every page displays at its native size times the requested scale.
    let mut overlays = MemoryOverlays::new();
    let page_count = doc.page_count()?;
    for page in 1..=page_count as u32 {
        let size = doc.page_size(page)?;
        overlays.set_display_size(page, size.width * config.scale, size.height * config.scale);
    }

    let mut session = ViewerSession::open(doc)?;

    println!("Search Preview");
    println!("==============");
    println!("Fixture: {}", config.fixture.display());
    println!("Pages: {}", session.page_count());
    println!("Display scale: {}", config.scale);
    println!();

    match session.search(&mut overlays, &config.query)? {
        SearchOutcome::Cleared => println!("Blank query: overlays cleared."),
        SearchOutcome::NoDocument => println!("No document available."),
        SearchOutcome::NoMatches => println!("No matches for {:?}.", config.query),
        SearchOutcome::Matches(summary) => {
            println!(
                "{} matches on {} page(s) for {:?}",
                summary.total_matches(),
                summary.matching_page_count(),
                config.query
            );
            println!("Viewing page {}", session.current_page());
            println!();
            for entry in &summary.pages {
                println!("Page {}: {} matches", entry.page, entry.match_count);
                if config.verbose {
                    for rect in overlays.rectangles(entry.page) {
                        println!(
                            "  rect left={:.2} top={:.2} width={:.2} height={:.2}",
                            rect.left, rect.top, rect.width, rect.height
                        );
                    }
                }
            }
        },
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let config = PreviewConfig::from_args();

    if let Err(e) = run_preview(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_positional_and_flags() {
        let config =
            PreviewConfig::parse(&args(&["doc.json", "term", "--scale", "0.5", "-v"])).unwrap();
        assert_eq!(config.fixture, PathBuf::from("doc.json"));
        assert_eq!(config.query, "term");
        assert_eq!(config.scale, 0.5);
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_defaults_without_flags() {
        let config = PreviewConfig::parse(&args(&["doc.json", "term"])).unwrap();
        assert_eq!(config.scale, 1.0);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_rejects_bad_scale() {
        assert!(PreviewConfig::parse(&args(&["doc.json", "term", "--scale", "0,5"])).is_err());
        assert!(PreviewConfig::parse(&args(&["doc.json", "term", "--scale"])).is_err());
    }

    #[test]
    fn test_parse_requires_fixture_and_query() {
        assert!(PreviewConfig::parse(&args(&["doc.json"])).is_err());
    }
}
