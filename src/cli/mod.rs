//! Flag-driven CLI mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn run(args: &[String]) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            prompts::error(&msg);
            eprintln!("Try 'randstr --help'");
            std::process::exit(2);
        }
    }
}

pub fn print_help() {
    box_top("Randstr");
    box_line_center("Random string generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI screen with");
    box_line("     class toggles, a strength meter, and generation history.");
    box_line("  2) Client: Pass flags directly (e.g., -l 32 -n 5) to generate");
    box_line("     strings without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  randstr [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Generation:");
    box_opt("  -l, --length <N>", "Characters per string, 4 to 64 (default: 16)");
    box_opt("  -n, --number <N>", "How many strings to generate (default: 1)");
    box_opt("  -s, --symbols", "Include symbols (!@#$%^&*()_+-=[]{}|;:,.<>?)");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("      --strength", "Print the strength score after generating");
    box_opt("  -q, --quiet", "Suppress everything except generated strings");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("With every class excluded, generation falls back to lowercase.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  randstr                  Interactive mode");
    box_line("  randstr -l 32            One string, 32 characters");
    box_line("  randstr -l 20 -n 3 -s    Three 20-character strings with symbols");
    box_line("  randstr --no-upper --no-digits    Lowercase only");
    box_line("  randstr -l 24 -b         24 characters, straight to clipboard");
    box_line("");
    box_bottom();
    println!();
}
