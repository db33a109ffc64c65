//! edit: a line-at-a-time text editor.
//!
//! Every input line is appended to the buffer, except the commands `:wq`
//! (save and quit) and `:q` (quit without saving). Saving joins the buffer
//! with `\n`.

use async_trait::async_trait;
use dosh_types::VfsError;

use crate::scheduler::{Step, Task, TaskContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Editing,
}

/// Editor state, carried across steps.
#[derive(Debug)]
pub struct Editor {
    filename: Option<String>,
    /// Cleared when the file could not be loaded for a reason other than absence.
    can_save: bool,
    buffer: Vec<String>,
    phase: Phase,
}

impl Editor {
    pub fn new(filename: Option<String>) -> Self {
        Self {
            filename,
            can_save: true,
            buffer: Vec::new(),
            phase: Phase::Start,
        }
    }

    async fn load(&mut self, ctx: &mut TaskContext<'_>, filename: &str) {
        let loaded = ctx.vfs().read(filename).await;
        match loaded {
            Ok(content) => {
                self.buffer = content.lines().map(str::to_string).collect();
                ctx.print(format!("Loaded {} lines from '{}'.", self.buffer.len(), filename));
            }
            Err(VfsError::NotFound(_)) => ctx.print(format!("New file: '{}'", filename)),
            Err(e) => {
                ctx.eprint(format!("edit: {}", e));
                self.can_save = false;
            }
        }
    }

    async fn save(&mut self, ctx: &mut TaskContext<'_>) {
        let Some(filename) = self.filename.clone().filter(|_| self.can_save) else {
            ctx.eprint("edit: file cannot be saved");
            return;
        };
        let saved = ctx.vfs().write(&filename, &self.buffer.join("\n")).await;
        match saved {
            Ok(()) => ctx.print(format!("File '{}' saved successfully.", filename)),
            Err(e) => ctx.eprint(format!("edit: {}", e)),
        }
    }
}

#[async_trait]
impl Task for Editor {
    async fn step(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        match self.phase {
            Phase::Start => {
                let Some(filename) = self.filename.clone() else {
                    ctx.print("Usage: edit <filename>");
                    return Step::Completed;
                };
                self.load(ctx, &filename).await;
                ctx.print("--- Editor ---");
                ctx.print("Enter text line by line. Type ':wq' to save and quit, or ':q' to quit without saving.");
                self.phase = Phase::Editing;
                Step::SuspendForInput
            }
            Phase::Editing => {
                let Some(line) = ctx.take_input() else {
                    return Step::SuspendForInput;
                };
                match line.as_str() {
                    ":wq" => {
                        self.save(ctx).await;
                        ctx.print("Exiting editor.");
                        Step::Completed
                    }
                    ":q" => {
                        ctx.print("Exiting editor.");
                        Step::Completed
                    }
                    _ => {
                        self.buffer.push(line);
                        Step::SuspendForInput
                    }
                }
            }
        }
    }
}
