/// The Elm Architecture (TEA) pattern for the quote client
///
/// All state lives in [`Model`]; user input and API results arrive as
/// [`Message`]s; [`update`] is the only place the model changes and it returns
/// [`Command`]s describing side effects for the [`CommandExecutor`].

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::{Command, CommandExecutor, NetworkCommand, SystemCommand};
pub use message::{Message, QuoteMessage, SystemMessage, UIMessage};
pub use model::{HistoryModal, Model, UiState};
pub use update::update;

/// Result of processing a TEA update cycle
#[derive(Debug)]
pub struct UpdateResult<M> {
    pub model: M,
    pub commands: Vec<Command>,
}

impl<M> UpdateResult<M> {
    pub fn new(model: M, commands: Vec<Command>) -> Self {
        Self { model, commands }
    }

    pub fn just_model(model: M) -> Self {
        Self {
            model,
            commands: Vec::new(),
        }
    }

    pub fn with_command(model: M, command: Command) -> Self {
        Self {
            model,
            commands: vec![command],
        }
    }
}
