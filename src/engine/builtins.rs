//! Commands every session carries: `theme`, `help` and `clear`.

use std::sync::Arc;

use super::ansi::{CLEAR_SCREEN, CURSOR_HOME};
use super::command::{Command, Leaf};
use super::output::Output;
use crate::config::ColorScheme;

/// Top-level `(name, description)` listing shown by `help`
pub type Catalog = Arc<Vec<(String, String)>>;

pub const HELP_NAME: &str = "help";
pub const HELP_DESCRIPTION: &str = "List all commands";

/// `help`: list every top-level command
pub fn help(catalog: Catalog) -> Command {
    Command::leaf(HELP_NAME, HELP_DESCRIPTION, move |out: Output, _args: Vec<String>| {
        let catalog = catalog.clone();
        async move {
            out.write("\r\nCommands:\r\n");
            for (name, description) in catalog.iter() {
                out.write(&format!("  {} - {}\r\n", name, description));
            }
            Ok(())
        }
    })
}

/// `clear`: clear the screen.
///
/// A bare `clear` line never reaches this entry (the session handles it
/// directly); it only runs for `clear <args>`.
pub fn clear() -> Command {
    Command::leaf("clear", "Clear the terminal screen", |out: Output, _args: Vec<String>| async move {
        out.write(CLEAR_SCREEN);
        out.write(CURSOR_HOME);
        Ok(())
    })
}

/// `theme list` / `theme set <name>`
pub fn theme() -> Command {
    let list = Leaf::new("list", "List available themes", |out: Output, _args: Vec<String>| async move {
        out.write("\r\nAvailable themes:\r\n");
        for name in ColorScheme::list() {
            out.write(&format!("  {}\r\n", name));
        }
        Ok(())
    });

    let set = Leaf::new("set", "Set terminal theme", |out: Output, args: Vec<String>| async move {
        let Some(name) = args.first() else {
            out.write("\r\nUsage: theme set <theme-name>");
            out.write("\r\nUse \"theme list\" to see available themes");
            return Ok(());
        };
        match ColorScheme::find(name) {
            Some(scheme) => {
                out.set_theme(&scheme);
                out.write(&format!("\r\nTheme set to \"{}\"", scheme.name));
            }
            None => {
                out.write(&format!("\r\nTheme \"{}\" not found", name));
                out.write("\r\nUse \"theme list\" to see available themes");
            }
        }
        Ok(())
    });

    Command::group("theme", "List or set terminal theme", vec![list, set])
}
