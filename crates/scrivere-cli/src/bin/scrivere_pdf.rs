// scrivere-pdf: Export a document to PDF.
//
// Usage:
//   scrivere-pdf [-o OUT] TITLE [FILE]
//
// Options:
//   -o, --output PATH   Output file (default: TITLE.pdf)
//   -h, --help          Print help

use scrivere_cli::pdf::{self, PdfOptions};

fn main() {
    scrivere_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (output, args) = scrivere_cli::take_option(&args, "--output", "-o");

    if scrivere_cli::wants_help(&args) || args.is_empty() {
        println!("scrivere-pdf: Export a document to PDF.");
        println!();
        println!("Usage: scrivere-pdf [-o OUT] TITLE [FILE]");
        println!();
        println!("Reads the body from FILE, or from stdin when FILE is absent or '-'.");
        println!();
        println!("Options:");
        println!("  -o, --output PATH   Output file (default: TITLE.pdf)");
        println!("  -h, --help          Print this help");
        return;
    }

    let handle = scrivere_it::handle::ScrivereHandle::new();
    let title = &args[0];
    let content = scrivere_cli::read_input(args.get(1).map(String::as_str))
        .unwrap_or_else(|e| scrivere_cli::fatal(&e));

    let layout = handle.layout(title, &content);
    let bytes = pdf::render(&layout, &PdfOptions::default());

    let output = output.unwrap_or_else(|| scrivere_cli::pdf_file_name(&layout.lines[0].text));
    std::fs::write(&output, bytes)
        .unwrap_or_else(|e| scrivere_cli::fatal(&format!("failed to write {output}: {e}")));
    eprintln!("{output}: {} pages", layout.page_count);
}
