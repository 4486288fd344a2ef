//! Command registry
//!
//! Centralized registry for all available commands.
//! This allows loose coupling between command implementations and the dispatcher.

use super::{Command, string, key, search, admin};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available commands
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new command registry and register all commands
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        // Register string commands
        registry.register(Arc::new(string::SetCommand));
        registry.register(Arc::new(string::GetCommand));

        // Register key commands
        registry.register(Arc::new(key::DeleteCommand));
        registry.register(Arc::new(key::ExistsCommand));

        // Register search commands
        registry.register(Arc::new(search::KeysCommand));

        // Register admin commands
        registry.register(Arc::new(admin::ClearCommand));
        registry.register(Arc::new(admin::SizeCommand));
        registry.register(Arc::new(admin::InfoCommand));
        registry.register(Arc::new(admin::HelpCommand));

        registry
    }

    /// Register a command under its name and aliases
    fn register(&mut self, command: Arc<dyn Command>) {
        for alias in command.aliases() {
            self.commands.insert(alias.to_uppercase(), command.clone());
        }
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// Get a command by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_uppercase()).cloned()
    }

    /// Check if a command exists
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_uppercase())
    }

    /// Get all command names, aliases included
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::new();
        assert!(registry.has_command("set"));
        assert!(registry.has_command("Get"));
        assert!(registry.has_command("KEYS"));
        assert!(!registry.has_command("EXPIRE"));
    }

    #[test]
    fn test_aliases_resolve_to_same_command() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.get("del").map(|c| c.name()), Some("DELETE"));
        assert_eq!(registry.get("flushdb").map(|c| c.name()), Some("CLEAR"));
        assert_eq!(registry.get("dbsize").map(|c| c.name()), Some("SIZE"));
    }

    #[test]
    fn test_command_names() {
        let names = CommandRegistry::new().command_names();
        for expected in ["SET", "GET", "DELETE", "EXISTS", "KEYS", "CLEAR", "SIZE", "INFO", "HELP"] {
            assert!(names.iter().any(|n| n == expected), "missing {}", expected);
        }
    }
}
