// Check a letter template for informal wording and lay it out.
//
// Run: cargo run -p scrivere-it --features handle --example check_letter

use scrivere_it::handle::ScrivereHandle;

fn main() {
    let handle = ScrivereHandle::new();
    let text = "Ciao Marco,\nok per domani, ma perchè non vuoi venire in ufficio?";

    match handle.check_grammar(text) {
        Ok(report) => {
            println!(
                "{} words, {} characters",
                report.word_count, report.character_count
            );
            for s in &report.suggestions {
                println!("  [{}] {} -> {} ({})", s.position, s.original, s.suggestion, s.kind);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }

    let layout = handle.layout("Promemoria", text);
    for line in &layout.lines {
        println!("p{} y={:>5.1} {}", line.page, line.y, line.text);
    }
}
