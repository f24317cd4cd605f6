use crate::app::{App, Focus, NoteItem, PanelAreas};
use epigraph_view_engine::highlight::PanelId;
use epigraph_view_engine::rendering::{self, RenderFragment, StyleId, TaggedSpan};
use epigraph_view_engine::view::TranslationView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const HIGHLIGHT: Style = Style::new().bg(Color::Yellow).fg(Color::Black);
const MARK: Style = Style::new().fg(Color::DarkGray);

pub fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(outer[0]);

    draw_records(f, app, columns[0]);

    if app.view.is_some() {
        draw_record(f, app, columns[1]);
    } else {
        let message = app
            .load_error
            .clone()
            .unwrap_or_else(|| "Select a record to view it".to_string());
        let placeholder = Paragraph::new(message).block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, columns[1]);
        app.panels = Default::default();
    }

    draw_status(f, app, outer[1]);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_records(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .records
        .iter()
        .map(|r| ListItem::new(Line::from(Span::raw(r.display_name().to_string()))))
        .collect();

    let list = List::new(items)
        .block(pane_block("Records".into(), app.focus == Focus::Records))
        .highlight_style(HIGHLIGHT);

    f.render_stateful_widget(list, area, &mut app.record_list_state);
}

fn draw_record(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(translation_count) = app.view.as_ref().map(|v| v.translations.len()) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(if translation_count > 0 { 35 } else { 0 }),
            Constraint::Min(3),
        ])
        .split(area);
    let columns = if translation_count > 0 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, translation_count as u32); translation_count])
            .split(rows[1])
            .to_vec()
    } else {
        Vec::new()
    };

    // Areas first so the cursors can be scrolled into view before drawing
    let inner = |r: Rect| Block::default().borders(Borders::ALL).inner(r);
    app.panels = PanelAreas {
        transcription: inner(rows[0]),
        translations: columns.iter().map(|c| inner(*c)).collect(),
        notes: inner(rows[2]),
    };
    app.scroll_to_cursors();

    let app = &*app;
    let Some(view) = &app.view else {
        return;
    };

    // Transcription
    let title = view.title.clone().unwrap_or_else(|| "Transcription".to_string());
    let block = pane_block(title, app.focus == Focus::Transcription);
    let lines: Vec<Line> = view
        .transcription
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let selected = app.focus == Focus::Transcription && i == app.transcription_cursor;
            let lit = line
                .number
                .is_some_and(|n| app.highlights.is_line_highlighted(PanelId::Transcription, n));
            transcription_line(line, app.show_markers, lit, selected)
        })
        .collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_rows(app.scroll.transcription), 0));
    f.render_widget(paragraph, rows[0]);

    // Translations, side by side
    for (k, (translation, column)) in view.translations.iter().zip(columns.iter()).enumerate() {
        let block = pane_block(translation.heading(k), app.focus == Focus::Translation(k));
        let cursor = app.translation_cursors.get(k).copied().unwrap_or(0);
        let offset = app.scroll.translations.get(k).copied().unwrap_or(0);
        let lines = translation_lines(app, k, translation, cursor);
        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((scroll_rows(offset), 0));
        f.render_widget(paragraph, *column);
    }

    // Notes
    let block = pane_block("Notes".into(), app.focus == Focus::Notes);
    let notes: Vec<Line> = app
        .note_items()
        .into_iter()
        .enumerate()
        .filter_map(|(row, item)| {
            let note = app.note(item)?;
            let (panel, origin) = match item {
                NoteItem::Apparatus(_) => (PanelId::Transcription, "app".to_string()),
                NoteItem::Translation { translation, .. } => (
                    PanelId::Translation(translation),
                    view.translations[translation].heading(translation),
                ),
            };
            let range = note
                .range
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string());
            let mut style = Style::default();
            if app.highlights.is_note_highlighted(panel, note) {
                style = HIGHLIGHT;
            }
            if app.focus == Focus::Notes && row == app.notes_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            Some(Line::from(vec![
                Span::styled(format!("[{origin} {range}] "), MARK),
                Span::styled(note.text.clone(), style),
            ]))
        })
        .collect();
    let paragraph = Paragraph::new(notes)
        .block(block)
        .scroll((scroll_rows(app.scroll.notes), 0));
    f.render_widget(paragraph, rows[2]);
}

fn scroll_rows(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn translation_lines(app: &App, k: usize, translation: &TranslationView, cursor: usize) -> Vec<Line<'static>> {
    translation
        .lines
        .lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut style = Style::default();
            if app.highlights.is_line_highlighted(PanelId::Translation(k), line.number) {
                style = HIGHLIGHT;
            }
            let marker = if app.focus == Focus::Translation(k) && i == cursor {
                '>'
            } else {
                ' '
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:>3} ", line.number), MARK),
                Span::styled(line.text.clone(), style),
            ])
        })
        .collect()
}

/// One transcription line: gutter, then its fragments with whitespace collapsed.
pub fn transcription_line(
    line: &rendering::Line,
    show_markers: bool,
    highlighted: bool,
    selected: bool,
) -> Line<'static> {
    let marker = if selected { '>' } else { ' ' };
    let number = line.number.map(|n| n.to_string()).unwrap_or_default();
    let base = if highlighted {
        HIGHLIGHT
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    for fragment in &line.segments {
        push_fragment(fragment, base, show_markers, &mut spans);
    }
    if let Some(first) = spans.first_mut() {
        first.content = first.content.trim_start().to_string().into();
    }

    let mut out = vec![Span::styled(format!("{marker}{number:>3} "), MARK)];
    out.extend(spans);
    Line::from(out)
}

fn push_fragment(
    fragment: &RenderFragment,
    style: Style,
    show_markers: bool,
    out: &mut Vec<Span<'static>>,
) {
    match fragment {
        RenderFragment::Text(text) => {
            let collapsed = collapse_whitespace(text);
            if !collapsed.is_empty() {
                out.push(Span::styled(collapsed, style));
            }
        }
        RenderFragment::Mark(_) | RenderFragment::Continuation => {
            let mut display = String::new();
            fragment.push_display(&mut display);
            out.push(Span::styled(display, style.patch(MARK)));
        }
        RenderFragment::LineNumber(_) => {}
        RenderFragment::Span(span) => push_span(span, style, show_markers, out),
    }
}

fn push_span(span: &TaggedSpan, style: Style, show_markers: bool, out: &mut Vec<Span<'static>>) {
    let style = if show_markers {
        style.fg(style_color(span.style))
    } else {
        style
    };
    for child in &span.children {
        push_fragment(child, style, show_markers, out);
    }
}

fn style_color(style: StyleId) -> Color {
    let (r, g, b) = style.rgb();
    Color::Rgb(r, g, b)
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Tooltips of the interactive spans on a line, outermost first.
pub fn line_tooltips(line: &rendering::Line) -> Vec<String> {
    fn collect(fragment: &RenderFragment, out: &mut Vec<String>) {
        if let RenderFragment::Span(span) = fragment {
            if let Some(tip) = span.tag.tooltip() {
                out.push(tip);
            }
            for child in &span.children {
                collect(child, out);
            }
        }
    }
    let mut out = Vec::new();
    for fragment in &line.segments {
        collect(fragment, &mut out);
    }
    out.dedup();
    out
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let tooltips = match (&app.view, app.focus) {
        (Some(view), Focus::Transcription) if app.show_markers => view
            .transcription
            .lines()
            .get(app.transcription_cursor)
            .map(line_tooltips)
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    let info = if tooltips.is_empty() {
        Line::from("")
    } else {
        Line::from(Span::styled(tooltips.join(" | "), MARK))
    };

    let markers = if app.show_markers { "on" } else { "off" };
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab/Shift-Tab: Pane | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("Enter: Follow note | "),
        Span::raw(format!("m: Markers ({markers})")),
    ]);

    f.render_widget(Paragraph::new(vec![info, help_text]), area);
}
