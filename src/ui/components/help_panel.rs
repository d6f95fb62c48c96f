//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &mut App) {
        // Adaptive help panel size based on terminal size
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);

        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
PENSTOCK - Hydraulic Network Dashboard
======================================

NAVIGATION
----------
j/k         Navigate table rows (down/up)
J/K         Navigate sections (down/up)
Esc         Cancel action or close dialogs

DATA ENTRY
----------
a           Open the input form for the current section
e/Enter     Edit the selected record (pre-filled form)
Tab         Next form field
Shift+Tab   Previous form field
Left/Right  Change a material option
Enter       Submit the form

Re-submitting a record with the same key overwrites it.
Records live only for this session; nothing is saved to disk.

NETWORK ANALYSIS
----------------
a           Add an output request (NODE <n> or ELEM <id>)
d           Remove the selected output request
r           Run the analysis

CSV PREVIEW
-----------
a           Load a CSV file by path (displayed verbatim)

GENERAL CONTROLS
----------------
?           Toggle help panel
q           Quit application
Ctrl+C      Quit application

HELP PANEL SCROLLING
--------------------
j/k or ↑↓   Scroll help content
Home/End    Jump to top/bottom

SECTIONS
--------
Nodes, Conduits, Surge Tank, Orifice, Reservoir,
Flow Schedule, Computational Parameters,
Network Analysis, CSV Preview

Press 'Esc' or '?' to close this help panel
";

        // Apply scroll offset to the content
        let lines: Vec<&str> = help_content.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_area.height.saturating_sub(2) as usize;

        // Clamp the scroll offset so End lands on the last page
        let max_offset = total_lines.saturating_sub(visible_height);
        if app.help_scroll_offset > max_offset {
            app.help_scroll_offset = max_offset;
        }

        let visible: Vec<&str> = lines
            .into_iter()
            .skip(app.help_scroll_offset)
            .take(visible_height)
            .collect();

        let help_paragraph = Paragraph::new(visible.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("❓ Help")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help_paragraph, help_area);
    }
}
