use std::env;

mod cli;
mod config;
mod exits;
mod generator;
mod rand;
mod session;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        tui::run();
    } else {
        cli::run(&args);
    }
}
