// scrivere-layout: Show how a document is wrapped and paginated.
//
// Reads the document body from FILE (or stdin) and prints one layout line
// per output line as `PAGE Y TEXT`.
//
// Usage:
//   scrivere-layout [-w WIDTH] [--legacy-breaks] TITLE [FILE]
//
// Options:
//   -w, --width N        Wrap width in characters (default: 80)
//       --legacy-breaks  Check for page breaks once per input line
//   -h, --help           Print help

use std::io::{self, Write};

use scrivere_it::layout::BreakPolicy;

fn main() {
    scrivere_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (width, mut args) = scrivere_cli::take_option(&args, "--width", "-w");
    let legacy = scrivere_cli::take_flag(&mut args, "--legacy-breaks");

    if scrivere_cli::wants_help(&args) || args.is_empty() {
        println!("scrivere-layout: Show how a document is wrapped and paginated.");
        println!();
        println!("Usage: scrivere-layout [-w WIDTH] [--legacy-breaks] TITLE [FILE]");
        println!();
        println!("Reads the body from FILE, or from stdin when FILE is absent or '-'.");
        println!();
        println!("Options:");
        println!("  -w, --width N        Wrap width in characters (default: 80)");
        println!("      --legacy-breaks  Check for page breaks once per input line");
        println!("  -h, --help           Print this help");
        return;
    }

    let mut handle = scrivere_it::handle::ScrivereHandle::new();
    if let Some(w) = width {
        let w: usize = w
            .parse()
            .unwrap_or_else(|_| scrivere_cli::fatal("invalid number for --width"));
        handle
            .set_page_width_chars(w)
            .unwrap_or_else(|e| scrivere_cli::fatal(&e.to_string()));
    }
    if legacy {
        handle.set_break_policy(BreakPolicy::InputLine);
    }

    let title = &args[0];
    let content = scrivere_cli::read_input(args.get(1).map(String::as_str))
        .unwrap_or_else(|e| scrivere_cli::fatal(&e));

    let layout = handle.layout(title, &content);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in &layout.lines {
        let _ = writeln!(out, "{:>3} {:>6.1} {}", line.page, line.y, line.text);
    }
    let _ = writeln!(out, "{} pages", layout.page_count);
}
