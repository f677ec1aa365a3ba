/// Command system for TEA pattern
///
/// Commands represent side effects requested by [`crate::tea::update`]. Network
/// commands run as spawned tasks and report back through the message channel;
/// clipboard commands run in place on the UI task.
use crate::api::QuoteClient;
use crate::clipboard::ClipboardManager;
use crate::tea::message::QuoteMessage;
use crate::tea::Message;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// Send a message back to the update loop
    SendMessage(Message),

    /// Network operations
    Network(NetworkCommand),

    /// System operations
    System(SystemCommand),
}

/// Network operation commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkCommand {
    /// Fetch today's quote
    FetchTodayQuote { request_id: u64 },

    /// Fetch the most recent quotes
    FetchRecentQuotes { request_id: u64, limit: u32 },
}

/// System operation commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemCommand {
    /// Copy to clipboard
    CopyToClipboard(String),
}

/// Command executor that turns commands into effects
pub struct CommandExecutor {
    message_sender: mpsc::UnboundedSender<Message>,
    client: Arc<QuoteClient>,
    clipboard: ClipboardManager,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(
        message_sender: mpsc::UnboundedSender<Message>,
        client: Arc<QuoteClient>,
        clipboard: ClipboardManager,
    ) -> Self {
        Self {
            message_sender,
            client,
            clipboard,
        }
    }

    /// Execute a command
    ///
    /// Must be called from within a tokio runtime; network commands are spawned
    /// and never block the caller.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SendMessage(message) => self.send(message),
            Command::Network(net_command) => self.execute_network_command(net_command),
            Command::System(sys_command) => self.execute_system_command(sys_command),
        }
    }

    fn execute_network_command(&self, command: NetworkCommand) {
        let client = Arc::clone(&self.client);
        let sender = self.message_sender.clone();

        // No cancellation: superseded requests finish and are dropped by request id
        tokio::spawn(async move {
            let message = match command {
                NetworkCommand::FetchTodayQuote { request_id } => QuoteMessage::TodayLoaded {
                    request_id,
                    result: client.fetch_today_quote().await,
                },
                NetworkCommand::FetchRecentQuotes { request_id, limit } => {
                    QuoteMessage::HistoryLoaded {
                        request_id,
                        result: client.fetch_recent_quotes(limit).await,
                    }
                }
            };

            if let Err(e) = sender.send(Message::Quote(message)) {
                tracing::error!("Failed to send network result message: {}", e);
            }
        });
    }

    fn execute_system_command(&mut self, command: SystemCommand) {
        match command {
            SystemCommand::CopyToClipboard(text) => self.clipboard.copy_to_clipboard(&text),
        }
    }

    fn send(&self, message: Message) {
        if let Err(e) = self.message_sender.send(message) {
            tracing::error!("Failed to send message: {}", e);
        }
    }
}

/// Helper functions for creating common commands
impl Command {
    /// Create a command to send a message
    pub fn message(msg: Message) -> Self {
        Command::SendMessage(msg)
    }

    /// Create a network command
    pub fn network(command: NetworkCommand) -> Self {
        Command::Network(command)
    }

    /// Create a system command
    pub fn system(command: SystemCommand) -> Self {
        Command::System(command)
    }
}
