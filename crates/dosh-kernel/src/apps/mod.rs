//! Applications: commands that run as processes.
//!
//! An application is registered at startup as an [`AppDescriptor`] whose
//! factory builds a fresh [`Task`] from the command arguments. The kernel
//! wraps that task in a process; it never runs inside the dispatcher.

mod countdown;
mod editor;

use std::collections::BTreeMap;

use crate::scheduler::Task;
use crate::tools::ToolArgs;

pub use countdown::Countdown;
pub use editor::Editor;

/// Builds a task from command arguments.
pub type AppFactory = fn(&ToolArgs) -> Box<dyn Task>;

/// A registered application.
#[derive(Clone, Copy)]
pub struct AppDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether `name args &` may start it without the foreground.
    pub allow_background: bool,
    pub factory: AppFactory,
}

impl std::fmt::Debug for AppDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppDescriptor")
            .field("name", &self.name)
            .field("allow_background", &self.allow_background)
            .finish()
    }
}

/// Name → application descriptor.
#[derive(Debug, Default, Clone)]
pub struct AppRegistry {
    apps: BTreeMap<String, AppDescriptor>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, app: AppDescriptor) {
        self.apps.insert(app.name.to_lowercase(), app);
    }

    pub fn get(&self, name: &str) -> Option<&AppDescriptor> {
        self.apps.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// Descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.values()
    }
}

/// Register the shipped applications.
pub fn register_apps(registry: &mut AppRegistry) {
    registry.register(AppDescriptor {
        name: "edit",
        description: "Line editor (:wq saves, :q quits)",
        allow_background: false,
        factory: |args| Box::new(Editor::new(args.get(0).map(str::to_string))),
    });
    registry.register(AppDescriptor {
        name: "countdown",
        description: "Count down from n (default 3), one tick per step",
        allow_background: true,
        factory: |args| Box::new(Countdown::from_arg(args.get(0))),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_apps() {
        let mut registry = AppRegistry::new();
        register_apps(&mut registry);

        let edit = registry.get("edit").unwrap();
        assert!(!edit.allow_background);
        assert!(registry.get("countdown").unwrap().allow_background);
        assert!(!registry.contains("banana"));

        let names: Vec<_> = registry.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["countdown", "edit"]);
    }
}
