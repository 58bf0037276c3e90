//! Interactive session screen.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::generator::charset::CharClass;
use crate::session::Session;
use crate::terminal::{RED, RESET, clear, reset_terminal};

use super::input::{get_input, get_number};
use super::text::{enter_prompt, print_help, print_history, print_screen};

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut session = Session::new();
    // Lives for the whole screen: some backends drop the selection when
    // the owning context goes away.
    let mut clipboard: Option<ClipboardContext> = None;
    let mut status = String::new();

    loop {
        clear();
        print_screen(&session, &status);
        status.clear();

        let input = match get_input(enter_prompt(), "") {
            Some(s) => s,
            None => break, // Esc
        };

        match input.trim() {
            "" => {
                session.regenerate();
            }
            "1" => toggle(&mut session, CharClass::Upper),
            "2" => toggle(&mut session, CharClass::Lower),
            "3" => toggle(&mut session, CharClass::Digit),
            "4" => toggle(&mut session, CharClass::Symbol),
            "5" => {
                if let Some(length) = get_number("New length (4-64)", session.config().length) {
                    match session.set_length(length) {
                        Ok(()) => {
                            session.regenerate();
                        }
                        Err(e) => status = format!("{RED}{e}{RESET}"),
                    }
                }
            }
            "6" => status = copy_to_clipboard(&mut clipboard, session.current()),
            "7" => history_menu(&session, &mut clipboard, &mut status),
            "h" | "help" => {
                clear();
                print_help();
                let _ = get_input("Press Enter to return", "");
            }
            "q" | "quit" | "exit" => break,
            _ => status = format!("{RED}Invalid selection{RESET}"),
        }
    }

    clear();
}

/// Flip a class and regenerate, so the display always reflects the
/// configuration it was drawn from.
fn toggle(session: &mut Session, class: CharClass) {
    let enabled = session.config().is_enabled(class);
    session.set_class(class, !enabled);
    session.regenerate();
}

fn history_menu(session: &Session, clipboard: &mut Option<ClipboardContext>, status: &mut String) {
    loop {
        clear();
        print_history(session);
        if !status.is_empty() {
            println!("{status}");
            status.clear();
        }

        if session.history().is_empty() {
            let _ = get_input("Press Enter to return", "");
            return;
        }

        let Some(choice) = get_number("Entry to copy (Enter to return)", 0) else {
            return;
        };
        if choice == 0 {
            return;
        }

        match session.history().get(choice - 1) {
            Some(entry) => *status = copy_to_clipboard(clipboard, entry),
            None => *status = format!("{RED}No entry {choice}{RESET}"),
        }
    }
}

fn copy_to_clipboard(clipboard: &mut Option<ClipboardContext>, text: &str) -> String {
    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => return format!("{RED}Clipboard unavailable: {e}{RESET}"),
        }
    }
    let Some(ctx) = clipboard.as_mut() else {
        return String::new();
    };

    match ctx.set_contents(text.to_string()) {
        Ok(()) => {
            // Some clipboard backends only latch the value on read-back.
            if let Ok(mut echoed) = ctx.get_contents() {
                echoed.zeroize();
            }
            String::from("Copied to clipboard")
        }
        Err(e) => format!("{RED}Clipboard error: {e}{RESET}"),
    }
}
