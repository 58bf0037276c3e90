//! Raw-mode line input.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read an editable line. Returns `None` if the user cancelled with Esc
/// or Ctrl+Q.
pub fn get_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, false)
}

/// Read a number. Only digits are accepted while editing; cancelling or
/// clearing the field yields `None`.
pub fn get_number(prompt: &str, initial: usize) -> Option<usize> {
    let seed = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &seed, true).and_then(|s| s.trim().parse().ok())
}

fn edit_line(prompt: &str, initial: &str, numeric: bool) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut last_len = input.len();
    let mut cancelled = false;

    // Guard keeps raw mode scoped to this prompt even on panic.
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    print!("{}: {}", prompt, initial);
    flush();

    loop {
        let Ok(event) = read() else { break };
        let Event::Key(key) = event else { continue };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors; restore the terminal first.
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    input.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < input.len() {
                    input.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => {
                if cursor < input.len() {
                    cursor += 1;
                }
            }
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !numeric || c.is_ascii_digit() => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, text);
        // Park the cursor where the next insertion lands.
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        last_len = input.len();
    }

    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.iter().collect())
    }
}
