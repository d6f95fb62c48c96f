//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{AnalyzingDialog, ErrorDialog, FormDialog, InfoDialog},
    HelpPanel, SectionView, Sidebar, StatusBar,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::SUCCESS_ANALYSIS_DONE;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(config);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout so the loop can poll the analysis task
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let _handled = handle_events(Event::Key(key), app)?;
                    }
                }
                Event::Resize(_, _) => {
                    // Handled implicitly on the next draw
                }
                _ => {}
            }
        }

        // If a background analysis task finished, collect its results
        if let Some(handle_ref) = app.analysis_task.as_ref() {
            if handle_ref.is_finished() {
                if let Some(handle) = app.analysis_task.take() {
                    match handle.await {
                        Ok(results) => {
                            log::info!("analysis finished with {} result entries", results.len());
                            app.results = Some(results);
                            app.info_message = Some(SUCCESS_ANALYSIS_DONE.to_string());
                        }
                        Err(join_err) => {
                            app.error_message = Some(format!("Analysis task error: {join_err}"));
                        }
                    }
                    app.analyzing = false;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0], app.config.ui.sidebar_width);

    // Render components
    Sidebar::render(f, top_chunks[0], app);
    SectionView::render(f, top_chunks[1], app);
    StatusBar::render(f, chunks[1], app);

    // Render the activity dialog while the analysis task runs
    if app.analyzing {
        AnalyzingDialog::render(f, app);
    }

    // Render overlays - error messages have priority over info messages
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    } else if app.info_message.is_some() {
        InfoDialog::render(f, app);
    }

    if app.form.is_some() {
        FormDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
