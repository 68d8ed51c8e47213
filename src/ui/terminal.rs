use {
    crate::{feed::FeedView, history::EventsHistory},
    chrono::Local,
    ratatui::{backend::CrosstermBackend, Terminal},
    std::time::Duration,
};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI event loop
///
/// Fetches once on start and again on 'r'; 'q' or Esc quits. A failed fetch
/// keeps the previous view and reports the error in the status bar.
pub async fn run_ui(history: EventsHistory) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen keeps stderr logs out of the feed
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    terminal.clear()?;

    let mut view = FeedView::Loading;
    let mut status = "Fetching...".to_string();
    let mut needs_refresh = true;

    let result = async {
        loop {
            let area = terminal.size()?;
            terminal.draw(|f| crate::ui::layout::render_layout(f, area, &view, &status))?;

            if needs_refresh {
                needs_refresh = false;
                match history.refresh(&Local).await {
                    Ok(next) => {
                        status = match &next {
                            FeedView::Loading => "Waiting for PACKAGE_ID".to_string(),
                            _ => format!("Updated {}", Local::now().format("%-I:%M:%S %p")),
                        };
                        view = next;
                    }
                    Err(e) => {
                        log::error!("❌ Refresh failed: {}", e);
                        status = format!("Error: {}", e);
                    }
                }
                continue;
            }

            if crossterm::event::poll(POLL_INTERVAL)? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    match key.code {
                        crossterm::event::KeyCode::Char('q') | crossterm::event::KeyCode::Esc => {
                            break;
                        }
                        crossterm::event::KeyCode::Char('r') => {
                            status = "Fetching...".to_string();
                            needs_refresh = true;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok::<(), Box<dyn std::error::Error>>(())
    }
    .await;

    // Cleanup - restore terminal state even when the loop failed
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;
    result
}
