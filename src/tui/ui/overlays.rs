//! Overlay rendering
//!
//! Help and skill details popups drawn on top of the grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::super::app::App;
use super::{bold, category_color, colors};

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let section = |title: &'static str| Line::from(Span::styled(title, bold(colors::BLUE)));
    let key = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10}"), Style::default().fg(colors::YELLOW)),
            Span::styled(what, Style::default().fg(colors::TEXT)),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", bold(colors::MAUVE))),
        Line::from(""),
        section("Pages"),
        key("←/→ h/l", "Previous/next page"),
        key("drag", "Swipe to change page"),
        key("j/k ↑/↓", "Move between cards"),
        key("g/G", "First/last card"),
        Line::from(""),
        section("Search & filter"),
        key("/ Ctrl+K", "Focus search"),
        key("Esc", "Clear search, then filter"),
        key("1-9", "Pick category (again clears)"),
        key("c", "Cycle categories"),
        key("t", "Cycle popular tags"),
        key("x / 0", "Clear tag filter"),
        key("Tab / s", "Next / search suggestion"),
        Line::from(""),
        section("Cards"),
        key("Enter", "Show details"),
        key("f", "Like / unlike"),
        key("b", "Add to / remove from bag"),
        key("r", "Show install command"),
        key("o", "Show docs link"),
        Line::from(""),
        key("?", "Toggle help"),
        key("q", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::MAUVE))
            .title(Span::styled(" Help ", bold(colors::MAUVE))),
    );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render the selected skill's details
pub fn render_details_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(skill) = app.selected_skill() else {
        return;
    };
    let popup_area = centered_rect(70, 70, area);

    let label = |name: &'static str| Span::styled(format!("{name:<10}"), Style::default().fg(colors::SUBTEXT0));

    let liked = if app.selection.is_liked(&skill.id) {
        Span::styled("♥ liked", Style::default().fg(colors::RED))
    } else {
        Span::styled("not liked", Style::default().fg(colors::SURFACE1))
    };
    let bagged = if app.selection.in_cart(&skill.id) {
        Span::styled("in bag", Style::default().fg(colors::GREEN))
    } else {
        Span::styled("not in bag", Style::default().fg(colors::SURFACE1))
    };

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", skill.icon)),
            Span::styled(
                skill.name.as_str(),
                bold(colors::BLUE).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            skill.description.as_str(),
            Style::default().fg(colors::TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            label("Category"),
            Span::styled(
                skill.category.name(),
                Style::default().fg(category_color(skill.category)),
            ),
        ]),
        Line::from(vec![
            label("Stars"),
            Span::styled(
                skill.popularity.to_string(),
                Style::default().fg(colors::YELLOW),
            ),
        ]),
        Line::from(vec![
            label("Tags"),
            Span::styled(skill.tags.join(", "), Style::default().fg(colors::TEAL)),
        ]),
        Line::from(vec![
            label("Repo"),
            Span::styled(skill.repo_url(), Style::default().fg(colors::BLUE)),
        ]),
        Line::from(vec![
            label("Install"),
            Span::styled(
                skill.install_command.as_str(),
                Style::default().fg(colors::GREEN),
            ),
        ]),
        Line::from(vec![label("Status"), liked, Span::raw("  "), bagged]),
        Line::from(""),
        Line::from(Span::styled(
            "f like · b bag · r run · o docs · Esc close",
            Style::default().fg(colors::SUBTEXT0),
        )),
    ];

    let popup = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BLUE))
            .title(Span::styled(" Details ", bold(colors::BLUE))),
    );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 80, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 5);
    }
}
