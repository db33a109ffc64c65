//! Command dispatch: turning a typed line into a builtin call or a spawn.
//!
//! ```text
//! "Edit notes.txt &"
//!        │ CommandLine::parse
//!        ▼
//! name="edit" args=["notes.txt"] background=true
//!        │ CommandDispatcher::resolve (aliases → builtins → applications)
//!        ▼
//! Dispatch::Builtin(tool) | Dispatch::Application(descriptor) | Dispatch::Unknown
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::apps::{AppDescriptor, AppRegistry};
use crate::tools::{Tool, ToolArgs, ToolRegistry};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Lower-cased command name, before alias resolution.
    pub name: String,
    pub args: ToolArgs,
    /// A trailing `&` token was given.
    pub background: bool,
}

impl CommandLine {
    /// Split on whitespace. Returns `None` for a blank line or a lone `&`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words: Vec<&str> = line.split_whitespace().collect();
        let background = words.last() == Some(&"&");
        if background {
            words.pop();
        }

        let (name, rest) = words.split_first()?;
        Some(Self {
            name: name.to_lowercase(),
            args: ToolArgs::from_words(rest.iter().copied()),
            background,
        })
    }
}

/// Aliases every kernel starts with.
pub fn default_aliases() -> BTreeMap<String, String> {
    [
        ("?", "help"),
        ("quit", "exit"),
        ("shutdown", "exit"),
        ("ver", "version"),
        ("chdir", "cd"),
        ("ls", "dir"),
        ("mkdir", "md"),
        ("rmdir", "rd"),
        ("cat", "type"),
        ("del", "delete"),
        ("rm", "delete"),
        ("tasks", "ps"),
        ("banana", "edit"),
    ]
    .into_iter()
    .map(|(alias, target)| (alias.to_string(), target.to_string()))
    .collect()
}

/// What a command name resolved to.
#[derive(Clone)]
pub enum Dispatch {
    Builtin(Arc<dyn Tool>),
    Application(AppDescriptor),
    Unknown(String),
}

impl std::fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dispatch::Builtin(tool) => f.debug_tuple("Builtin").field(&tool.name()).finish(),
            Dispatch::Application(app) => f.debug_tuple("Application").field(&app.name).finish(),
            Dispatch::Unknown(name) => f.debug_tuple("Unknown").field(name).finish(),
        }
    }
}

/// The command catalog: builtins, applications and aliases.
#[derive(Debug, Clone, Default)]
pub struct CommandDispatcher {
    pub tools: ToolRegistry,
    pub apps: AppRegistry,
    pub aliases: BTreeMap<String, String>,
}

impl CommandDispatcher {
    pub fn new(tools: ToolRegistry, apps: AppRegistry, aliases: BTreeMap<String, String>) -> Self {
        Self { tools, apps, aliases }
    }

    /// Add or replace aliases. Keys and targets are lower-cased.
    pub fn extend_aliases<I>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (alias, target) in aliases {
            self.aliases.insert(alias.to_lowercase(), target.to_lowercase());
        }
    }

    /// Resolve a command name through aliases, then builtins, then applications.
    pub fn resolve(&self, name: &str) -> Dispatch {
        let name = self.aliases.get(name).map(String::as_str).unwrap_or(name);
        if let Some(tool) = self.tools.get(name) {
            Dispatch::Builtin(tool)
        } else if let Some(app) = self.apps.get(name) {
            Dispatch::Application(*app)
        } else {
            Dispatch::Unknown(name.to_string())
        }
    }
}
