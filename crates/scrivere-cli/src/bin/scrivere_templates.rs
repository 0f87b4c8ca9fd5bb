// scrivere-templates: List letter templates or print one.
//
// Usage:
//   scrivere-templates            List template ids and names
//   scrivere-templates ID         Print the template body
//   scrivere-templates -p ID      Print the template placeholders

use std::io::{self, Write};

fn main() {
    scrivere_cli::init_logging();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let placeholders = scrivere_cli::take_flag(&mut args, "-p");

    if scrivere_cli::wants_help(&args) {
        println!("scrivere-templates: List letter templates or print one.");
        println!();
        println!("Usage: scrivere-templates [-p] [ID]");
        println!();
        println!("Without ID, lists all templates. With ID, prints its body.");
        println!();
        println!("Options:");
        println!("  -p           Print the placeholders instead of the body");
        println!("  -h, --help   Print this help");
        return;
    }

    let handle = scrivere_it::handle::ScrivereHandle::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match args.first() {
        None => {
            for t in handle.templates() {
                let _ = writeln!(out, "{} {:<24} {}", t.icon, t.id, t.name);
            }
        }
        Some(id) => {
            let t = handle
                .template(id)
                .unwrap_or_else(|e| scrivere_cli::fatal(&e.to_string()));
            if placeholders {
                for p in t.placeholders() {
                    let _ = writeln!(out, "[{p}]");
                }
            } else {
                let _ = writeln!(out, "{}", t.body);
            }
        }
    }
}
