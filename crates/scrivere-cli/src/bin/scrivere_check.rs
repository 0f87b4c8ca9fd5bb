// scrivere-check: Report spelling and formality suggestions for text.
//
// Checks the text given as arguments (joined with spaces), or the whole of
// stdin when no text is given, and prints one suggestion per line followed
// by word and character counts.
//
// Usage:
//   scrivere-check [-r RULES] [TEXT...]
//
// Options:
//   -r, --rules PATH   JSON rules file replacing the built-in tables
//   -h, --help         Print help

use std::io::{self, Write};

fn main() {
    scrivere_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = scrivere_cli::parse_rules_path(&args);

    if scrivere_cli::wants_help(&args) {
        println!("scrivere-check: Report spelling and formality suggestions.");
        println!();
        println!("Usage: scrivere-check [-r RULES] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, checks them as one text.");
        println!("Otherwise reads the text from stdin.");
        println!();
        println!("Options:");
        println!("  -r, --rules PATH   JSON rules file replacing the built-in tables");
        println!("  -h, --help         Print this help");
        return;
    }

    let handle =
        scrivere_cli::load_handle(rules_path.as_deref()).unwrap_or_else(|e| scrivere_cli::fatal(&e));

    let text = if args.is_empty() {
        scrivere_cli::read_input(None).unwrap_or_else(|e| scrivere_cli::fatal(&e))
    } else {
        args.join(" ")
    };

    let report = handle
        .check_grammar(&text)
        .unwrap_or_else(|e| scrivere_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for s in &report.suggestions {
        let _ = writeln!(
            out,
            "{:>4} {:<9} {} -> {}",
            s.position,
            s.kind.as_str(),
            s.original,
            s.suggestion
        );
    }
    let _ = writeln!(
        out,
        "{} suggestions, {} words, {} characters",
        report.suggestions.len(),
        report.word_count,
        report.character_count
    );
}
