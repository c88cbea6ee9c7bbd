use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use mushaf::assembly::Assembly;
use mushaf::interface::Reader;
use mushaf::loader;
use mushaf::locator::{Query, QueryKind};
use mushaf::numerals::NumeralStyle;
use mushaf::settings::Settings;
use mushaf::MushafError;

const USAGE: &str = "Usage: mushaf [--json] <auto|chapter|chapter-verse|page|juz|hizb> <query...>";

fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };
    if args.len() < 2 {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }
    let kind: QueryKind = match args[0].parse() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let query = Query::new(kind, args[1..].join(" "));

    let reader = match loader::load_from_path(&settings.corpus_path) {
        Ok(index) => Reader::new(index),
        Err(e) => {
            error!(path = %settings.corpus_path.display(), error = %e, "corpus could not be loaded");
            return ExitCode::FAILURE;
        }
    };

    match reader.lookup(&query) {
        Ok(assembly) if json => match serde_json::to_string_pretty(&assembly) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        Ok(assembly) => print_passage(&reader, &assembly, settings.numerals),
        Err(MushafError::Ambiguous { query, candidates }) => {
            eprintln!("'{query}' matches more than one chapter:");
            for number in candidates {
                if let Ok(chapter) = reader.index().chapter_by_number(number) {
                    eprintln!("  {chapter}");
                }
            }
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn print_passage(reader: &Reader, assembly: &Assembly, style: NumeralStyle) {
    let mut current = None;
    for element in assembly.elements() {
        if current != Some(element.chapter_number()) {
            current = Some(element.chapter_number());
            if let Ok(chapter) = reader.index().chapter_by_number(element.chapter_number()) {
                println!("\n== {chapter}");
            }
        }
        let marker = element.marker(style).unwrap_or_default();
        if element.is_heading() {
            println!("   {} {}", element.text(), marker);
        } else {
            println!("{} {}", element.text(), marker);
        }
    }
}
