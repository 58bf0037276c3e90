//! CLI context - bundles flags, configuration, and clipboard state.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::config::{self, Config};
use crate::generator::strength::MAX_SCORE;
use crate::session::Session;

/// Early exit - not an error, just done.
pub struct Done;

pub struct Context {
    flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    /// Parse command-line arguments into a context.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;
        Ok(Self {
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        let config = self.build_config()?;
        self.handle_clipboard();
        self.generate_output(config);
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            super::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("randstr {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply class and length flags to the default configuration.
    fn build_config(&self) -> Result<Config, Done> {
        let mut cfg = Config::default();
        cfg.upper = !self.flags.no_upper;
        cfg.lower = !self.flags.no_lower;
        cfg.digit = !self.flags.no_digits;
        cfg.symbol = self.flags.symbols;

        if let Some(length) = self.flags.length {
            if let Err(e) = config::validate_length(length) {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
            cfg.length = length;
        }

        Ok(cfg)
    }

    fn handle_clipboard(&mut self) {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => prompts::warn(&format!(
                    "Clipboard unavailable ({e}), printing to stdout instead"
                )),
            }
        }
    }

    /// Generate strings through a session and hand them off.
    fn generate_output(&mut self, config: Config) {
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut session = Session::with_config(config);

        // The session already generated once on construction.
        let mut values = Vec::with_capacity(count);
        values.push(session.current().to_string());
        for _ in 1..count {
            values.push(session.regenerate().to_string());
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = values.join("\n");
            match ctx.set_contents(joined.clone()) {
                Ok(()) => {
                    if let Ok(mut echoed) = ctx.get_contents() {
                        echoed.zeroize();
                    }
                    prompts::clipboard_copied(count);
                }
                Err(e) => prompts::error(&format!("Clipboard error: {e}")),
            }
            joined.zeroize();
        } else {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for value in &values {
                let _ = writeln!(out, "{value}");
            }
        }

        if self.flags.strength && !quiet::enabled() {
            let strength = session.strength();
            println!(
                "Strength: {} ({}/{}) • {:.1} bits",
                strength.tier.label(),
                strength.score,
                MAX_SCORE,
                session.entropy_bits(),
            );
        }

        for value in values.iter_mut() {
            value.zeroize();
        }
    }
}
