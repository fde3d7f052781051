//! UI rendering for the TUI

mod overlays;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, InputMode};
use crate::filter::PageMarker;
use crate::models::{Category, Skill};
use crate::navigation::PageCursor;

/// Catppuccin Mocha color palette
mod colors {
    use ratatui::style::Color;

    pub const SURFACE0: Color = Color::Rgb(49, 50, 68);
    pub const SURFACE1: Color = Color::Rgb(69, 71, 90);
    pub const TEXT: Color = Color::Rgb(205, 214, 244);
    pub const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
    pub const BLUE: Color = Color::Rgb(137, 180, 250);
    pub const GREEN: Color = Color::Rgb(166, 227, 161);
    pub const YELLOW: Color = Color::Rgb(249, 226, 175);
    pub const MAUVE: Color = Color::Rgb(203, 166, 247);
    pub const PEACH: Color = Color::Rgb(250, 179, 135);
    pub const TEAL: Color = Color::Rgb(148, 226, 213);
    pub const RED: Color = Color::Rgb(243, 139, 168);
    pub const PINK: Color = Color::Rgb(245, 194, 231);
    pub const SKY: Color = Color::Rgb(137, 220, 235);
}

/// Terminal color for a category accent
fn category_color(category: Category) -> Color {
    match category.color() {
        "blue" => colors::BLUE,
        "pink" => colors::PINK,
        "orange" => colors::PEACH,
        "emerald" => colors::GREEN,
        "violet" => colors::MAUVE,
        "cyan" => colors::SKY,
        "lime" => colors::TEAL,
        "yellow" => colors::YELLOW,
        _ => colors::TEXT,
    }
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Length(1), // Active filter + popular tags
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Page index
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_search_bar(frame, app, chunks[1]);
    render_filter_bar(frame, app, chunks[2]);
    render_cards(frame, app, chunks[3]);
    render_pagination(frame, app, chunks[4]);
    render_footer(frame, app, chunks[5]);

    if app.show_help {
        overlays::render_help_overlay(frame, area);
    }

    if app.show_details_popup {
        overlays::render_details_popup(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = app.grid.catalog();
    let categories = catalog.category_counts().len();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} skills", catalog.len()),
            Style::default().fg(colors::TEXT),
        ),
        Span::styled(" · ", Style::default().fg(colors::SURFACE1)),
        Span::styled(
            format!("{categories} categories"),
            Style::default().fg(colors::TEXT),
        ),
        Span::styled(" · ", Style::default().fg(colors::SURFACE1)),
        Span::styled(
            format!("♥ {}", app.selection.liked().len()),
            Style::default().fg(colors::RED),
        ),
        Span::styled(" · ", Style::default().fg(colors::SURFACE1)),
        Span::styled(
            format!("bag {}", app.selection.cart().len()),
            Style::default().fg(colors::GREEN),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::SURFACE1))
            .title(Span::styled(" skillsmp ", bold(colors::MAUVE))),
    );

    frame.render_widget(header, area);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Search;
    let border_color = if focused {
        colors::YELLOW
    } else {
        colors::SURFACE1
    };

    let query = app.grid.raw_query();
    let mut spans = vec![Span::styled(" / ", Style::default().fg(colors::BLUE))];
    if query.is_empty() && !focused {
        spans.push(Span::styled(
            "Search skills, tags, descriptions... (/ or Ctrl+K)",
            Style::default().fg(colors::SUBTEXT0),
        ));
    } else {
        spans.push(Span::styled(query, Style::default().fg(colors::TEXT)));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(colors::YELLOW)));
        }
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if app.grid.is_debouncing() {
        block = block.title_bottom(
            Line::from(Span::styled(" searching... ", Style::default().fg(colors::SUBTEXT0)))
                .alignment(Alignment::Right),
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.grid.tag();

    let mut spans = vec![Span::styled(" Filter: ", Style::default().fg(colors::SUBTEXT0))];
    match active {
        Some(tag) => {
            let color = Category::from_name(tag)
                .map(category_color)
                .unwrap_or(colors::TEAL);
            spans.push(Span::styled(tag, bold(color)));
            spans.push(Span::styled(" (x clear)", Style::default().fg(colors::SURFACE1)));
        }
        None => spans.push(Span::styled("All", bold(colors::TEXT))),
    }

    spans.push(Span::styled("  │ ", Style::default().fg(colors::SURFACE1)));
    for tag in &app.popular_tags {
        let style = if active == Some(tag.as_str()) {
            bold(colors::TEAL).add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(colors::TEAL)
        };
        spans.push(Span::styled(format!("#{tag}"), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.grid.view();
    let title = format!(
        " Page {}/{} · {} matches ",
        view.current_page + 1,
        view.total_pages,
        view.match_count
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SURFACE1))
        .title(Span::styled(title, Style::default().fg(colors::BLUE)));

    // Loading placeholders until the typed query settles
    if app.grid.is_debouncing() {
        let items: Vec<ListItem> = (0..app.grid.placeholder_count())
            .map(|_| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        "  ░░░░░░░░░░░░░░░░",
                        Style::default().fg(colors::SURFACE0),
                    )),
                    Line::from(Span::styled(
                        "    ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
                        Style::default().fg(colors::SURFACE0),
                    )),
                ])
            })
            .collect();
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    if view.items.is_empty() {
        frame.render_widget(empty_state(app).block(block), area);
        return;
    }

    let items: Vec<ListItem> = view
        .items
        .iter()
        .map(|skill| skill_card(app, skill))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::SURFACE0))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// "No skills found" with ways out: clear the search, show all, or try a popular term
fn empty_state(app: &App) -> Paragraph<'static> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(colors::BLUE));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(colors::SUBTEXT0));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("No skills found", bold(colors::TEXT))),
        Line::from(""),
    ];

    let mut actions = Vec::new();
    if !app.grid.query().is_empty() {
        actions.extend([key("Esc"), hint(" clear search  ")]);
    }
    if app.grid.tag().is_some() {
        actions.extend([key("x"), hint(" show all")]);
    }
    if !actions.is_empty() {
        lines.push(Line::from(actions));
    }

    let suggestions = app.suggestions();
    if !suggestions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(hint("Try searching")));
        let mut terms = Vec::new();
        for (i, term) in suggestions.into_iter().enumerate() {
            let style = if i == app.suggestion_index {
                bold(colors::TEAL).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(colors::TEAL)
            };
            terms.push(Span::styled(term, style));
            terms.push(Span::raw("  "));
        }
        lines.push(Line::from(terms));
        lines.push(Line::from(vec![
            key("Tab"),
            hint(" next  "),
            key("s"),
            hint(" search"),
        ]));
    }

    Paragraph::new(lines).alignment(Alignment::Center)
}

fn skill_card<'a>(app: &App, skill: &'a Skill) -> ListItem<'a> {
    let accent = category_color(skill.category);

    let mut title = vec![
        Span::raw(format!(" {} ", skill.icon)),
        Span::styled(skill.name.as_str(), bold(colors::TEXT)),
        Span::styled(
            format!("  {}", skill.category.name()),
            Style::default().fg(accent),
        ),
        Span::styled(
            format!("  ★ {}", skill.popularity),
            Style::default().fg(colors::YELLOW),
        ),
    ];
    if app.selection.is_liked(&skill.id) {
        title.push(Span::styled("  ♥", Style::default().fg(colors::RED)));
    }
    if app.selection.in_cart(&skill.id) {
        title.push(Span::styled("  [bag]", Style::default().fg(colors::GREEN)));
    }

    let tags = skill
        .tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");

    ListItem::new(vec![
        Line::from(title),
        Line::from(vec![
            Span::styled(
                format!("    {}", skill.description),
                Style::default().fg(colors::SUBTEXT0),
            ),
            Span::styled(format!("  {tags}"), Style::default().fg(colors::TEAL)),
        ]),
    ])
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.grid.current_page();
    let total = app.grid.total_pages();
    if app.grid.is_debouncing() || total <= 1 {
        return;
    }

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(colors::BLUE)
        } else {
            Style::default().fg(colors::SURFACE1)
        }
    };

    let mut spans = vec![Span::styled("‹ ", arrow_style(current > 0))];
    for marker in app.grid.pagination_items() {
        match marker {
            PageMarker::Page(p) if p == current => {
                spans.push(Span::styled(
                    format!("[{}]", p + 1),
                    bold(colors::MAUVE),
                ));
            }
            PageMarker::Page(p) => {
                spans.push(Span::styled(
                    format!("{}", p + 1),
                    Style::default().fg(colors::TEXT),
                ));
            }
            PageMarker::Ellipsis => {
                spans.push(Span::styled("…", Style::default().fg(colors::SUBTEXT0)));
            }
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("›", arrow_style(current + 1 < total)));

    let pagination = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(pagination, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    // Show status message if present (takes priority)
    if let Some(status) = &app.status_message {
        let color = if status.is_error {
            colors::RED
        } else {
            colors::GREEN
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(&status.text, Style::default().fg(color)),
        ]))
        .style(Style::default().bg(colors::SURFACE0));

        frame.render_widget(footer, area);
        return;
    }

    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            (" ←/→", " page "),
            (" j/k", " card "),
            (" /", " search "),
            (" c", " category "),
            (" t", " tag "),
            (" f", " like "),
            (" b", " bag "),
            (" r", " run "),
            (" ?", " help"),
        ],
        InputMode::Search => &[(" Enter/Esc", " done "), (" Backspace", " delete")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(colors::BLUE)),
                Span::styled(*label, Style::default().fg(colors::SUBTEXT0)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE0));
    frame.render_widget(footer, area);
}
