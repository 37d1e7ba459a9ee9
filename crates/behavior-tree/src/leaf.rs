//! Built-in leaf behaviors.

use crate::{Behavior, Context, Status};

/// Writes a fixed message to standard output and succeeds.
///
/// A debugging aid for sketching trees before real actions exist.
#[derive(Debug, Clone)]
pub struct Println {
    message: String,
}

impl Println {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Behavior for Println {
    fn execute(&self, ctx: &Context<'_>) -> Status {
        ctx.scoped("Action:Println", |_| {
            println!("{}", self.message);
            Status::Success
        })
    }
}
