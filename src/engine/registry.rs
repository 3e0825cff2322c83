//! Command registry
//!
//! Ordered list of top-level commands. Lookup is a linear, case-sensitive,
//! first-match scan: duplicates are allowed and the earliest registration
//! shadows later ones.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::builtins;
use super::command::Command;
use crate::error::{Result, SessionError};

#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `commands` followed by the built-ins
    /// (`theme`, `help`, `clear`).
    pub fn with_builtins(commands: Vec<Command>) -> Result<Self> {
        let mut registry = Self::new();
        for command in commands {
            registry.register(command)?;
        }

        registry.register(builtins::theme())?;
        let clear = builtins::clear();

        // `help` lists itself and `clear`, which are registered after it is built
        let catalog: Vec<(String, String)> = registry
            .list_top()
            .chain([
                (builtins::HELP_NAME, builtins::HELP_DESCRIPTION),
                (clear.name(), clear.description()),
            ])
            .map(|(name, description)| (name.to_string(), description.to_string()))
            .collect();

        registry.register(builtins::help(Arc::new(catalog)))?;
        registry.register(clear)?;

        Ok(registry)
    }

    /// Append a command.
    ///
    /// Only the shape of the command is checked; a name that is already
    /// registered is accepted and simply never matched.
    pub fn register(&mut self, command: Command) -> Result<()> {
        validate_name(command.name())?;

        if let Command::Group(group) = &command {
            if group.subcommands().is_empty() {
                return Err(SessionError::EmptyGroup(group.name().to_string()));
            }
            let mut seen = HashSet::new();
            for leaf in group.subcommands() {
                validate_name(leaf.name())?;
                if !seen.insert(leaf.name()) {
                    return Err(SessionError::DuplicateSubcommand {
                        group: group.name().to_string(),
                        name: leaf.name().to_string(),
                    });
                }
            }
        }

        if self.resolve(command.name()).is_some() {
            debug!("Command '{}' is shadowed by an earlier registration", command.name());
        }
        self.commands.push(command);
        Ok(())
    }

    /// First command named exactly `name`
    pub fn resolve(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// `(name, description)` of every top-level command, in registration order
    pub fn list_top(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.commands
            .iter()
            .map(|command| (command.name(), command.description()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// Names are matched against whitespace-split tokens
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(SessionError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command::Leaf;
    use crate::engine::output::{CaptureSurface, Output};

    fn leaf(name: &str, description: &str) -> Command {
        Command::leaf(name, description, |_: Output, _: Vec<String>| async { Ok(()) })
    }

    fn sub(name: &str) -> Leaf {
        Leaf::new(name, "", |_: Output, _: Vec<String>| async { Ok(()) })
    }

    #[test]
    fn test_first_match_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(leaf("ping", "first")).unwrap();
        registry.register(leaf("ping", "second")).unwrap();

        assert_eq!(registry.resolve("ping").map(Command::description), Some("first"));
        assert!(registry.resolve("PING").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_builtins_follow_user_commands() {
        let registry = CommandRegistry::with_builtins(vec![leaf("deploy", "Ship it")]).unwrap();
        let names: Vec<&str> = registry.list_top().map(|(name, _)| name).collect();
        assert_eq!(names, ["deploy", "theme", "help", "clear"]);
    }

    #[test]
    fn test_help_catalog_matches_registry() {
        let registry = CommandRegistry::with_builtins(vec![leaf("deploy", "Ship it")]).unwrap();
        let Some(Command::Leaf(help)) = registry.resolve("help") else {
            panic!("help is not a leaf");
        };

        let surface = CaptureSurface::default();
        let result = futures::executor::block_on(help.handler().invoke(Output::new(surface.clone()), vec![]));
        assert!(result.is_ok());

        let expected: String = registry
            .list_top()
            .map(|(name, description)| format!("  {} - {}\r\n", name, description))
            .collect();
        assert_eq!(surface.contents(), format!("\r\nCommands:\r\n{}", expected));
    }

    #[test]
    fn test_rejects_malformed_names() {
        let mut registry = CommandRegistry::new();
        assert_eq!(
            registry.register(leaf("", "")),
            Err(SessionError::InvalidName(String::new()))
        );
        assert_eq!(
            registry.register(leaf("two words", "")),
            Err(SessionError::InvalidName("two words".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_malformed_groups() {
        let mut registry = CommandRegistry::new();
        assert_eq!(
            registry.register(Command::group("empty", "", vec![])),
            Err(SessionError::EmptyGroup("empty".to_string()))
        );
        assert_eq!(
            registry.register(Command::group("dup", "", vec![sub("a"), sub("a")])),
            Err(SessionError::DuplicateSubcommand {
                group: "dup".to_string(),
                name: "a".to_string(),
            })
        );
        assert!(registry.register(Command::group("ok", "", vec![sub("a"), sub("b")])).is_ok());
    }
}
