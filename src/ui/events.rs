//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEventKind};

use super::app::{App, Section};
use crate::ui::forms::FieldKind;

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle an open form dialog
            if app.form.is_some() {
                return handle_form_mode(key, app);
            }

            // Handle error/info message dialogs
            if app.error_message.is_some() || app.info_message.is_some() {
                return handle_message_dialog(key, app);
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle normal navigation and actions
            return handle_normal_mode(key, app);
        }
    }
    Ok(false)
}

/// Handle events while a form dialog is open
fn handle_form_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            if let Some(form) = app.form.as_mut() {
                if let Some(field) = form.state.active_field_mut() {
                    field.push_char(c);
                }
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(form) = app.form.as_mut() {
                if let Some(field) = form.state.active_field_mut() {
                    field.pop_char();
                }
            }
            Ok(true)
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.form.as_mut() {
                form.state.focus_next();
            }
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = app.form.as_mut() {
                form.state.focus_prev();
            }
            Ok(true)
        }
        KeyCode::Left | KeyCode::Right => {
            // Cycle the options of a select field; other fields ignore
            if let Some(form) = app.form.as_mut() {
                if let Some(field) = form.state.active_field_mut() {
                    if matches!(field.kind, FieldKind::Select { .. }) {
                        if key.code == KeyCode::Right {
                            field.cycle_next();
                        } else {
                            field.cycle_prev();
                        }
                    }
                }
            }
            Ok(true)
        }
        KeyCode::Enter => {
            app.submit_form();
            Ok(true)
        }
        KeyCode::Esc => {
            app.cancel_form();
            Ok(true)
        }
        _ => Ok(false), // Ignore all other keys while a form is open
    }
}

/// Handle events when error or info message dialogs are shown
fn handle_message_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.error_message = None;
            app.info_message = None;
            Ok(true)
        }
        _ => Ok(false), // Ignore all other keys when message dialog is shown
    }
}

/// Handle events when help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::PageUp => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(10);
            true
        }
        KeyCode::PageDown => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(10);
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::End => {
            app.help_scroll_offset = usize::MAX; // Will be clamped in UI
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events in normal mode
fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> Result<bool, anyhow::Error> {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c')
        && key
            .modifiers
            .contains(crossterm::event::KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return Ok(true);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_row();
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_row();
            Ok(true)
        }
        KeyCode::Char('K') => {
            app.previous_section();
            Ok(true)
        }
        KeyCode::Char('J') => {
            app.next_section();
            Ok(true)
        }
        KeyCode::Char('a') => {
            // Open the input form for the current section
            app.open_form();
            Ok(true)
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            // Edit the selected record (or the section's singleton)
            app.open_edit_form();
            Ok(true)
        }
        KeyCode::Char('r') => {
            app.run_analysis();
            Ok(true)
        }
        KeyCode::Char('d') => {
            // Remove the selected output request; records themselves have no
            // delete operation, re-submission overwrites them instead
            if app.section == Section::Analysis {
                app.remove_selected_request();
            }
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Ok(true)
        }
        _ => Ok(false),
    }
}
