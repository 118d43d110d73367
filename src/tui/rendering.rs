use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::{BrowseLayout, centered_panel};
use super::theme::Palette;
use crate::models::{ResourceItem, Theme};
use crate::utils::favicon_url;
use crate::views::{CategoryView, DashboardView, ResolvedView};

/// Everything the browse screen needs for one frame, borrowed from the app.
pub struct BrowseContext<'a> {
    pub username: &'a str,
    pub clock: &'a str,
    pub theme: Theme,
    pub query: &'a str,
    pub screen: &'a ResolvedView<'a>,
    /// All catalog categories as (id, title), for the sidebar.
    pub categories: &'a [(String, String)],
    /// Hovered sidebar row (0 = Dashboard).
    pub nav_idx: usize,
    pub active_category: Option<&'a str>,
    pub selected_item: usize,
    pub status_message: Option<&'a StatusMessage>,
    pub total_resources: usize,
}

fn fill_background(frame: &mut Frame, palette: &Palette) {
    let backdrop = Block::default().style(Style::default().bg(palette.bg).fg(palette.fg));
    frame.render_widget(backdrop, frame.area());
}

fn bordered(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title(title.to_string())
}

/// Render the full browse screen (dashboard or category detail).
pub fn render_browse(frame: &mut Frame, palette: &Palette, ctx: &BrowseContext) {
    fill_background(frame, palette);
    let layout = BrowseLayout::new(frame.area());

    render_header(frame, layout.header_area, palette, ctx);
    render_sidebar(frame, layout.sidebar_area, palette, ctx);
    render_search_bar(frame, layout.search_area, palette, ctx.query);
    match ctx.screen {
        ResolvedView::Dashboard(view) => {
            render_dashboard(frame, layout.content_area, palette, view);
        }
        ResolvedView::Category(view) => {
            render_category(frame, layout.content_area, palette, view, ctx.selected_item);
        }
    }
    render_status_bar(frame, layout.status_area, palette, ctx);
}

fn render_header(frame: &mut Frame, area: Rect, palette: &Palette, ctx: &BrowseContext) {
    let block =
        Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(inner);

    let left = Line::from(vec![
        Span::styled(
            " devdash",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", ctx.username), Style::default().fg(palette.fg)),
    ]);
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let theme_tag = match ctx.theme {
        Theme::Light => "[light]",
        Theme::Dark => "[dark]",
    };
    let right = Line::from(vec![
        Span::styled(ctx.clock.to_string(), Style::default().fg(palette.fg)),
        Span::styled(format!(" {theme_tag} "), Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
}

fn render_sidebar(frame: &mut Frame, area: Rect, palette: &Palette, ctx: &BrowseContext) {
    let dashboard_row = ("Dashboard".to_string(), ctx.active_category.is_none());
    let category_rows = ctx
        .categories
        .iter()
        .map(|(id, title)| (title.clone(), ctx.active_category == Some(id.as_str())));

    let items: Vec<ListItem> = std::iter::once(dashboard_row)
        .chain(category_rows)
        .enumerate()
        .map(|(idx, (label, is_active))| {
            let marker = if is_active { "●" } else { " " };
            let style = if idx == ctx.nav_idx {
                Style::default()
                    .fg(palette.accent_fg)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(format!(" {marker} {label}")).style(style)
        })
        .collect();

    let list = List::new(items).block(bordered(" Categories ", palette));
    frame.render_widget(list, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, palette: &Palette, query: &str) {
    let line = if query.is_empty() {
        Line::from(Span::styled("Search resources...", Style::default().fg(palette.muted)))
    } else {
        Line::from(vec![
            Span::styled(query.to_string(), Style::default().fg(palette.fg)),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ])
    };

    let paragraph = Paragraph::new(line).block(bordered(" Search ", palette));
    frame.render_widget(paragraph, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, palette: &Palette, view: &DashboardView) {
    let title = if view.filtering {
        format!(" Results ({}) ", view.total_matches)
    } else {
        " Dashboard ".to_string()
    };

    if view.sections.is_empty() {
        let message =
            if view.filtering { "No resources match your search" } else { "The catalog is empty" };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(palette.muted))
            .block(bordered(&title, palette));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut items: Vec<ListItem> = Vec::new();
    for section in &view.sections {
        let header = format!(" {} ({})", section.title, section.total_matches);
        items.push(ListItem::new(header).style(
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));

        for item in &section.items {
            let mut spans = vec![Span::styled(
                format!("   {}", item.display_name()),
                Style::default().fg(palette.fg),
            )];
            if let Some(desc) = item.description.as_deref() {
                spans.push(Span::styled(format!("  {desc}"), Style::default().fg(palette.muted)));
            }
            items.push(ListItem::new(Line::from(spans)));
        }

        if section.hidden_count() > 0 {
            items.push(
                ListItem::new(format!("   … {} more in {}", section.hidden_count(), section.title))
                    .style(Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC)),
            );
        }
        items.push(ListItem::new(""));
    }

    let list = List::new(items).block(bordered(&title, palette));
    frame.render_widget(list, area);
}

fn render_category(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    view: &CategoryView,
    selected_item: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = if view.filtering {
        format!(" {} ({}/{}) ", view.title, view.items.len(), view.total_in_category)
    } else {
        format!(" {} ({}) ", view.title, view.items.len())
    };

    if view.items.is_empty() {
        let message = if view.filtering {
            "No resources match your search"
        } else {
            "This category is empty"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(palette.muted))
            .block(bordered(&title, palette));
        frame.render_widget(paragraph, chunks[0]);
    } else {
        let items: Vec<ListItem> = view
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let style = if idx == selected_item {
                    Style::default()
                        .fg(palette.accent_fg)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.fg)
                };
                ListItem::new(format!(" {}", item.display_name())).style(style)
            })
            .collect();

        let list = List::new(items).block(bordered(&title, palette));
        frame.render_widget(list, chunks[0]);
    }

    render_resource_details(frame, chunks[1], palette, view.items.get(selected_item).copied());
}

fn render_resource_details(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    item: Option<&ResourceItem>,
) {
    let content = if let Some(item) = item {
        let icon = favicon_url(&item.url).unwrap_or_else(|| "none".to_string());
        let label = Style::default().fg(palette.muted);

        let mut lines = vec![
            Line::from(vec![Span::styled("Name: ", label), Span::raw(item.display_name())]),
            Line::from(vec![Span::styled("URL:  ", label), Span::raw(item.url.clone())]),
            Line::from(vec![Span::styled("Icon: ", label), Span::raw(icon)]),
            Line::from(""),
        ];
        if let Some(desc) = item.description.as_deref() {
            for line in desc.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }
        Text::from(lines)
    } else {
        Text::from("No resource selected")
    };

    let paragraph = Paragraph::new(content)
        .block(bordered(" Details ", palette))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, palette: &Palette, ctx: &BrowseContext) {
    let (text, style) = if let Some(message) = ctx.status_message {
        let color = match message.message_type {
            MessageType::Success => palette.accent,
            MessageType::Error => palette.error,
        };
        (format!(" {} ", message.text), Style::default().fg(color))
    } else {
        let mut parts: Vec<String> = vec![];

        match ctx.screen {
            ResolvedView::Dashboard(view) => {
                if view.filtering {
                    parts.push(format!(
                        "{} matches in {} categories",
                        view.total_matches,
                        view.sections.len()
                    ));
                } else {
                    parts.push(format!(
                        "{} resources in {} categories",
                        ctx.total_resources,
                        ctx.categories.len()
                    ));
                }
                parts.push("↑/↓: navigate".to_string());
                parts.push("Enter: open".to_string());
            }
            ResolvedView::Category(view) => {
                if view.items.is_empty() {
                    parts.push("No matches".to_string());
                } else {
                    parts.push(format!(
                        "resource {}/{}",
                        ctx.selected_item + 1,
                        view.items.len()
                    ));
                }
                parts.push("Ctrl+Y: copy URL".to_string());
                if ctx.query.is_empty() {
                    parts.push("Esc: back".to_string());
                }
            }
        }

        if !ctx.query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+T: theme".to_string());
        parts.push("Ctrl+L: logout".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(palette.muted))
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// Render the startup loading screen.
pub fn render_loading(frame: &mut Frame, palette: &Palette) {
    fill_background(frame, palette);
    let panel = centered_panel(frame.area(), 40, 7);

    let lines = vec![
        Line::from(Span::styled(
            "devdash",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Loading resources...", Style::default().fg(palette.fg))),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(bordered("", palette));
    frame.render_widget(paragraph, panel);
}

/// Render the username gate.
pub fn render_gate(frame: &mut Frame, palette: &Palette, input: &str, error: Option<&str>) {
    fill_background(frame, palette);
    let panel = centered_panel(frame.area(), 48, 10);

    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to devdash",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Pick a username to continue", Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(palette.accent)),
            Span::styled(input.to_string(), Style::default().fg(palette.fg)),
            Span::styled("▌", Style::default().fg(palette.accent)),
        ]),
    ];
    match error {
        Some(message) => lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.error),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: continue | Ctrl+C: quit",
        Style::default().fg(palette.muted),
    )));

    let paragraph = Paragraph::new(Text::from(lines)).block(bordered(" Sign in ", palette));
    frame.render_widget(paragraph, panel);
}

/// Render the recoverable-error screen.
pub fn render_fault(frame: &mut Frame, palette: &Palette, detail: &str, show_detail: bool) {
    fill_background(frame, palette);
    let height = if show_detail { 16 } else { 9 };
    let panel = centered_panel(frame.area(), 64, height);

    let mut lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw("The view failed to render. Your session is intact.")),
        Line::from(""),
        Line::from(Span::styled(
            "r: try again | R: reload | d: details | Ctrl+C: quit",
            Style::default().fg(palette.muted),
        )),
    ];
    if show_detail {
        lines.push(Line::from(""));
        for line in detail.lines().take(8) {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(palette.muted),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error))
        .title(" Error ");
    let paragraph = Paragraph::new(Text::from(lines)).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, panel);
}
