//! TUI screen rendering.

use crate::generator::charset::CharClass;
use crate::generator::history::CAPACITY;
use crate::generator::strength::{MAX_SCORE, Tier};
use crate::rand;
use crate::session::Session;
use crate::terminal::{
    DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_rule,
    box_top,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Weak => RED,
        Tier::Medium => YELLOW,
        Tier::Strong => GREEN,
    }
}

/// Proportional strength meter: one segment per score point.
fn meter(score: u8, color: &str) -> String {
    let mut bar = String::from("[");
    for i in 0..MAX_SCORE {
        if i < score {
            bar.push_str(color);
            bar.push_str("██");
            bar.push_str(RESET);
        } else {
            bar.push_str(DIM);
            bar.push_str("░░");
            bar.push_str(RESET);
        }
        if i + 1 < MAX_SCORE {
            bar.push(' ');
        }
    }
    bar.push(']');
    bar
}

pub fn print_screen(session: &Session, status: &str) {
    let strength = session.strength();
    let color = tier_color(strength.tier);
    let config = session.config();

    box_top("Randstr");
    box_line("Generated:");
    box_line(&format!("  {}", session.current()));
    box_rule();
    box_line(&format!(
        "Strength: {}{}{} {} {}/{}",
        color,
        strength.tier.label(),
        RESET,
        meter(strength.score, color),
        strength.score,
        MAX_SCORE,
    ));
    box_line(&format!(
        "{:.1} bits • {}",
        session.entropy_bits(),
        rand::source_name()
    ));
    box_rule();
    for (i, class) in CharClass::ALL.iter().enumerate() {
        let mark = if config.is_enabled(*class) { "x" } else { " " };
        box_line(&format!("  {}) [{}] {}", i + 1, mark, class.label()));
    }
    box_line(&format!("  5) Length: {}", config.length));
    box_line("  6) Copy to clipboard");
    box_line(&format!("  7) History ({})", session.history().len()));
    box_bottom();

    if !status.is_empty() {
        println!("{status}");
    }
    println!();
}

pub fn print_history(session: &Session) {
    box_top("History");
    if session.history().is_empty() {
        box_line_center("(nothing generated yet)");
    } else {
        box_line(&format!(
            "Most recent first, up to {} entries retained",
            CAPACITY
        ));
        box_line("");
        for (i, entry) in session.history().iter().enumerate() {
            box_line(&format!("  {:>2}) {}", i + 1, entry));
        }
    }
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Randstr");
    box_line_center("Random string generator");
    box_line("");
    box_line("Strings are drawn uniformly from the enabled character classes");
    box_line("using a /dev/urandom-backed source. With every class disabled,");
    box_line("generation falls back to lowercase letters.");
    box_line("");
    box_line("KEYS:");
    box_opt("  Enter", "Generate a new string");
    box_opt("  1-4", "Toggle a character class (regenerates)");
    box_opt("  5", "Set length, 4 to 64 (regenerates)");
    box_opt("  6", "Copy the current string to the clipboard");
    box_opt("  7", "Show history and copy past entries");
    box_opt("  h", "This help");
    box_opt("  q / Esc", "Quit");
    box_line("");
    box_line("Strength adds one point per enabled class, one at length 20,");
    box_line("and one at length 30; 0-2 is Weak, 3-4 Medium, 5-6 Strong.");
    box_line("");
    box_bottom();
    println!();
}
