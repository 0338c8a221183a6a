//! TUI views.
//!
//! Render functions for the header, the four views, the footer, and the
//! tool detail overlay. Everything here is a pure projection of `App`.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{ActiveView, App, ContactForm, InteractionMode, ProposalForm};
use super::colors;
use super::input::TextInput;
use crate::catalog::Tool;
use crate::content::AnnouncementVariant;

const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Geoscience research and education are in the middle of a transformational \
     moment. New sensing technologies, cloud platforms, and unprecedented data \
     access are reshaping how we explore the subsurface and understand Earth \
     systems. This catalogue curates open-source software, datasets, and \
     learning materials so that anyone, from first-year students to senior \
     researchers, can build modern workflows without licensing barriers.",
    "The project emphasizes open access, reproducibility, and community \
     collaboration. The listed resources span interactive teaching notebooks, \
     processing pipelines, numerical modelling tools, and entire curricula \
     shared openly by their authors.",
    "The catalogue builds on the seminal awesome-open-geoscience compilation \
     and is kept current by the maintainer team as new open tools emerge. \
     Propose additions from the Contribute page.",
];

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    match app.active_view {
        ActiveView::Browse => render_browse(app, frame, chunks[1]),
        ActiveView::About => render_about(app, frame, chunks[1]),
        ActiveView::Contribute => render_contribute(app, frame, chunks[1]),
        ActiveView::Contact => render_contact(app, frame, chunks[1]),
    }

    render_footer(app, frame, chunks[2]);

    if app.detail_open
        && let Some(tool) = app.selected_tool()
    {
        render_detail(tool, frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "geocat",
            Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" v{} · built {} ", env!("CARGO_PKG_VERSION"), env!("GEOCAT_BUILD_TIMESTAMP")),
            Style::default().fg(colors::DIM),
        ),
        Span::raw("  "),
    ];

    for view in [
        ActiveView::Browse,
        ActiveView::About,
        ActiveView::Contribute,
        ActiveView::Contact,
    ] {
        let style = if view == app.active_view {
            Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(format!(" {} ", view.name()), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" open geoscience tools "));
    frame.render_widget(header, area);
}

fn render_browse(app: &App, frame: &mut Frame, area: Rect) {
    let banner_active = app.announcement.is_active();

    let mut constraints = Vec::new();
    if banner_active {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3)); // search box
    if app.show_tags {
        constraints.push(Constraint::Length(1)); // tag bar
    }
    constraints.push(Constraint::Length(1)); // counts line
    constraints.push(Constraint::Min(1)); // list
    constraints.push(Constraint::Length(1)); // pager hints

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    if banner_active {
        frame.render_widget(announcement_line(app), chunks[idx]);
        idx += 1;
    }

    let search_style = if app.mode == InteractionMode::Search {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default()
    };
    let search = Paragraph::new(app.search_input.content()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search (/) "),
    );
    frame.render_widget(search, chunks[idx]);
    idx += 1;

    if app.show_tags {
        frame.render_widget(Paragraph::new(tag_bar_line(app)), chunks[idx]);
        idx += 1;
    }

    frame.render_widget(Paragraph::new(counts_line(app)), chunks[idx]);
    idx += 1;

    let visible = app.view.visible();
    if visible.is_empty() {
        let empty = Paragraph::new("No tools found matching your criteria.")
            .style(Style::default().fg(colors::DIM))
            .block(Block::default().borders(Borders::ALL).title(" Tools "));
        frame.render_widget(empty, chunks[idx]);
    } else {
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, tool)| tool_line(tool, app.selected == Some(i)))
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Tools ({}) ", app.view.filtered_len())),
        );
        frame.render_widget(list, chunks[idx]);
    }
    idx += 1;

    frame.render_widget(Paragraph::new(pager_line(app)), chunks[idx]);
}

/// One list row: icon, name, hostname, stars, tags.
fn tool_line(tool: &Tool, selected: bool) -> ListItem<'static> {
    let mut spans = vec![
        Span::raw(format!("{} ", tool.icon)),
        Span::styled(
            tool.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(host) = tool.hostname() {
        spans.push(Span::styled(
            format!("  {}", host),
            Style::default().fg(colors::DIM),
        ));
    }

    if let Some(stars) = tool.stars {
        spans.push(Span::styled(
            format!("  ★{}", stars),
            Style::default().fg(colors::STARS),
        ));
    }

    for tag in &tool.tags {
        spans.push(Span::styled(
            format!("  [{}]", tag),
            Style::default().fg(colors::TAG),
        ));
    }

    let style = if selected {
        Style::default()
            .bg(ratatui::style::Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(spans)).style(style)
}

fn announcement_line(app: &App) -> Paragraph<'_> {
    let color = match app.announcement.variant {
        AnnouncementVariant::Info => colors::HEADER,
        AnnouncementVariant::Success => colors::SUCCESS,
        AnnouncementVariant::Warning => colors::WARNING,
    };

    let mut spans = vec![Span::styled("📣 ", Style::default().fg(color))];
    if let Some(title) = &app.announcement.title {
        spans.push(Span::styled(
            format!("{}: ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(app.announcement.message.clone(), Style::default().fg(color)));
    if let Some((text, url)) = app.announcement.cta() {
        spans.push(Span::styled(
            format!("  ({}: {})", text, url),
            Style::default().fg(colors::DIM),
        ));
    }

    Paragraph::new(Line::from(spans))
}

fn tag_bar_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::styled("Tags: ", Style::default().fg(colors::DIM))];

    let applied = app.view.selected_tag();
    let entries = std::iter::once("All".to_string()).chain(app.view.tags().iter().cloned());

    for (i, entry) in entries.enumerate() {
        let is_cursor = i == app.tag_cursor;
        let is_applied = match (i, applied) {
            (0, None) => true,
            (0, Some(_)) => false,
            (_, Some(tag)) => entry == tag,
            (_, None) => false,
        };

        let mut style = Style::default().fg(colors::TAG);
        if is_applied {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if is_cursor {
            style = style
                .bg(ratatui::style::Color::DarkGray)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", entry), style));
    }

    Line::from(spans)
}

fn counts_line(app: &App) -> Line<'static> {
    let mut text = format!(
        "Showing {} of {} tools",
        app.view.visible().len(),
        app.view.filtered_len()
    );
    let query = app.view.search_query().trim();
    if !query.is_empty() {
        text.push_str(&format!(" for \"{}\"", query));
    }
    if let Some(tag) = app.view.selected_tag() {
        text.push_str(&format!(" tagged \"{}\"", tag));
    }
    Line::from(Span::styled(text, Style::default().fg(colors::DIM)))
}

fn pager_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    if app.view.can_show_more() {
        spans.push(Span::styled("m", Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(" show more  ", Style::default().fg(colors::DIM)));
    }
    if app.view.can_show_less() {
        spans.push(Span::styled("u", Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(" show less", Style::default().fg(colors::DIM)));
    }
    Line::from(spans)
}

fn render_about(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::raw(paragraph));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        "Team",
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    )));
    for person in &app.contributors {
        let mut text = format!("{}  {} · {} · @{}", person.initials(), person.name, person.role, person.github);
        if let Some(tenure) = person.tenure() {
            text.push_str(&format!(" · {}", tenure));
        }
        lines.push(Line::raw(text));
    }

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.about_scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(" About "));
    frame.render_widget(about, area);
}

fn render_contribute(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let checklist = Paragraph::new(
        "Propose a tool, dataset, or course for the catalogue.\n\
         · Link to the canonical repo or docs.\n\
         · Mention licenses and the maintainer or sponsoring institution.\n\
         · Suggest tags (e.g. \"geology\", \"remote sensing\", \"python\").",
    )
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title(" Share a Tool or Dataset "));
    frame.render_widget(checklist, chunks[0]);

    let form = &app.proposal_form;
    let editing = app.mode == InteractionMode::Form;
    for (i, (label, field)) in ProposalForm::labels().into_iter().zip(form.fields()).enumerate() {
        render_form_field(frame, chunks[1 + i], label, field, editing && form.focus == i);
    }

    render_status_line(app, frame, chunks[5]);
}

fn render_contact(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let intro = Paragraph::new(
        "Questions, data corrections, or partnership ideas? Send a message and \
         we'll get back within two business days.",
    )
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title(" Contact the Team "));
    frame.render_widget(intro, chunks[0]);

    let form = &app.contact_form;
    let editing = app.mode == InteractionMode::Form;
    for (i, (label, field)) in ContactForm::labels().into_iter().zip(form.fields()).enumerate() {
        render_form_field(frame, chunks[1 + i], label, field, editing && form.focus == i);
    }

    render_status_line(app, frame, chunks[4]);
}

fn render_form_field(frame: &mut Frame, area: Rect, label: &str, field: &TextInput, focused: bool) {
    let border = if focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(field.content()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", label)),
    );
    frame.render_widget(widget, area);
}

fn render_status_line(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(status) = &app.status {
        let color = if status.is_error { colors::ERROR } else { colors::SUCCESS };
        let line = Paragraph::new(status.text.as_str()).style(Style::default().fg(color));
        frame.render_widget(line, area);
    }
}

fn render_detail(tool: &Tool, frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let mut lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", tool.icon)),
            Span::styled(
                tool.name.clone(),
                Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Link: ", Style::default().fg(colors::DIM)),
            Span::raw(tool.link.clone()),
        ]),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(colors::DIM)),
            Span::raw(tool.category.clone()),
        ]),
    ];

    if let Some(stars) = tool.stars {
        lines.push(Line::from(vec![
            Span::styled("Stars: ", Style::default().fg(colors::DIM)),
            Span::styled(format!("★{}", stars), Style::default().fg(colors::STARS)),
        ]));
    }

    if !tool.tags.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(colors::DIM)),
            Span::styled(tool.tags.join(", "), Style::default().fg(colors::TAG)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(tool.description.clone()));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Tool "));

    frame.render_widget(Clear, area);
    frame.render_widget(detail, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = match (app.active_view, app.mode) {
        (_, InteractionMode::Search) => "type to filter · enter/esc done",
        (_, InteractionMode::Form) => "tab next field · ctrl-s send · esc done",
        (ActiveView::Browse, _) => {
            "/ search · t tags · m more · u less · c clear · ↑↓ select · enter details · tab views · q quit"
        }
        (ActiveView::About, _) => "↑↓ scroll · tab views · q quit",
        (ActiveView::Contribute, _) | (ActiveView::Contact, _) => "i edit form · tab views · q quit",
    };
    let footer = Paragraph::new(text).style(Style::default().fg(colors::DIM));
    frame.render_widget(footer, area);
}

/// Centered sub-rectangle, percent-sized.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
