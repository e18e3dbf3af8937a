//! The sink trait and the recording implementation used in tests.

use crate::command::DrawCommand;

/// Receiver for overlay draw commands.
///
/// Implement this once per rendering backend. Submission order is
/// meaningful for backends that batch by state; the overlay emits all
/// commands for one slot before moving to the next.
pub trait DrawSink {
    /// Accept one command.
    fn submit(&mut self, command: DrawCommand);
}

/// A sink that stores every submitted command, for test assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Commands in submission order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSink for RecordingSink {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
