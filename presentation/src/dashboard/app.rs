//! Dashboard main loop

use super::state::DashboardState;
use super::widget::DashboardWidget;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use pricing_application::PipelineContext;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Interactive single-page dashboard
pub struct DashboardApp {
    context: Arc<PipelineContext>,
}

impl DashboardApp {
    pub fn new(context: Arc<PipelineContext>) -> Self {
        Self { context }
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = DashboardState::new(self.context.catalog());
        let mut event_stream = EventStream::new();

        let result = loop {
            if let Err(e) = terminal.draw(|frame| {
                frame.render_widget(DashboardWidget::new(&state), frame.area());
            }) {
                break Err(e);
            }

            if state.should_quit {
                break Ok(());
            }

            match event_stream.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    state.handle_key(key, &self.context);
                    if let Some(estimate) = &state.estimate {
                        debug!("Dashboard estimate: {:?}", estimate);
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => break Err(e),
                None => break Ok(()),
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
