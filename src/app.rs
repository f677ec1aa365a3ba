use crate::api::QuoteClient;
use crate::clipboard::ClipboardManager;
use crate::config::Config;
use crate::keyboard::action_for_key;
use crate::tea::{
    update, Command, CommandExecutor, Message, Model, QuoteMessage, SystemMessage, UIMessage,
};
use crate::theme::Theme;
use crate::ui::{self, ViewError, ViewRegions};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Interactive quote client
pub struct App {
    model: Model,
    executor: CommandExecutor,
    message_receiver: mpsc::UnboundedReceiver<Message>,
    initialized: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.base_url()?;
        tracing::info!("Using quote API at {}", base_url);

        let client = QuoteClient::new(base_url, config.request_timeout())?;
        Ok(Self::with_parts(
            Model::new(config.history_limit, Theme::from_name(config.theme)),
            client,
            ClipboardManager::new(),
        ))
    }

    /// Assemble an app from prepared parts
    pub fn with_parts(model: Model, client: QuoteClient, clipboard: ClipboardManager) -> Self {
        let (sender, message_receiver) = mpsc::unbounded_channel();
        Self {
            model,
            executor: CommandExecutor::new(sender, Arc::new(client), clipboard),
            message_receiver,
            initialized: false,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Bind the view to `area` and request today's quote; only the first call has any effect
    pub fn initialize(&mut self, area: Rect) -> Result<(), ViewError> {
        if self.initialized {
            tracing::warn!("App already initialized");
            return Ok(());
        }

        ViewRegions::bind(area)?;
        self.dispatch(SystemMessage::Resize(area.width, area.height).into());
        self.executor
            .execute(Command::message(QuoteMessage::LoadToday.into()));
        self.initialized = true;

        tracing::info!("Initialized at {}x{}", area.width, area.height);
        Ok(())
    }

    /// Run a message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, message: Message) {
        let model = std::mem::take(&mut self.model);
        let result = update(model, message);
        self.model = result.model;

        for command in result.commands {
            self.executor.execute(command);
        }
    }

    /// Dispatch every message that has already arrived
    pub fn process_pending_messages(&mut self) {
        while let Ok(message) = self.message_receiver.try_recv() {
            self.dispatch(message);
        }
    }

    /// Wait for the next message from a command and dispatch it
    pub async fn next_message(&mut self) -> Option<()> {
        let message = self.message_receiver.recv().await?;
        self.dispatch(message);
        Some(())
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "daily-quote requires a terminal (TTY) to run interactively. Use a subcommand such as `daily-quote today` instead."
            ));
        }

        // Setup terminal
        enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        self.initialize(terminal.size()?)?;

        loop {
            self.process_pending_messages();

            // Draw UI
            terminal.draw(|f| ui::render(f, &self.model))?;

            // Handle events
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Some(message) = Self::translate_event(event::read()?) {
                    self.dispatch(message);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.dispatch(SystemMessage::Tick.into());
                last_tick = Instant::now();
            }

            if self.model.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn translate_event(event: Event) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                action_for_key(&key).map(|action| action.message())
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(
                    UIMessage::Click {
                        column: mouse.column,
                        row: mouse.row,
                    }
                    .into(),
                )
            }
            Event::Resize(width, height) => Some(SystemMessage::Resize(width, height).into()),
            _ => None,
        }
    }
}
