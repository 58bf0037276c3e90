//! Terminal utilities: box drawing, ANSI helpers, raw mode management.

use std::io::{self, Write};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const DIM: &str = "\x1b[90m";

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Box drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Box top with optional title: ┌─ Title ─────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let lead = format!("─ {} ", title);
        println!("┌{}{}┐", lead, "─".repeat(BOX_WIDTH - 2 - lead.chars().count()));
    }
}

/// Box content line, left-aligned: │ content │
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    if width <= inner {
        println!("│ {}{} │", content, " ".repeat(inner - width));
    } else {
        println!("│ {} │", content);
    }
}

/// Box content line, centered.
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    if width <= inner {
        let left = (inner - width) / 2;
        let right = inner - width - left;
        println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(right));
    } else {
        println!("│ {} │", content);
    }
}

/// Horizontal rule inside a box.
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Help option line: flag column plus wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => {
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(desc_col.saturating_sub(first.len())));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    for line in lines.iter().skip(1) {
        println!(
            "│ {}{}{} │",
            " ".repeat(flag_col),
            line,
            " ".repeat(desc_col.saturating_sub(line.len()))
        );
    }
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Raw mode
// ============================================================================

/// Guard that disables raw mode when dropped, so input handling can't
/// leave the terminal wedged on early return or panic.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::console_width;

    #[test]
    fn console_width_skips_ansi_sequences() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width("\x1b[38;5;9mred\x1b[0m"), 3);
        assert_eq!(console_width(""), 0);
    }
}
