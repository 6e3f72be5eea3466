use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Item, ItemStyle};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Rows taken by one item, including spacing
fn item_stride(style: ItemStyle) -> u16 {
    match style {
        // One row plus a gap
        ItemStyle::Filled => 2,
        // Three-row box
        ItemStyle::Outlined => 3,
    }
}

/// Render the item list, scrolled so the highlighted row stays visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let items = app.display_items();

    if items.is_empty() {
        let empty = Paragraph::new(format!(
            " List is empty. Press a to {}.",
            app.labels().add_button.to_lowercase()
        ))
        .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let style = app.theme.item_style;
    let stride = item_stride(style);
    let visible = ((area.height + stride - 1) / stride).max(1) as usize;

    // Clamp scroll
    let highlighted = app.highlighted_row();
    if highlighted < app.scroll {
        app.scroll = highlighted;
    } else if highlighted >= app.scroll + visible {
        app.scroll = highlighted + 1 - visible;
    }
    app.scroll = app.scroll.min(items.len().saturating_sub(1));

    for (row, (index, item)) in items
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(visible)
        .enumerate()
    {
        let y = area.y + row as u16 * stride;
        let height = match style {
            ItemStyle::Filled => 1,
            ItemStyle::Outlined => 3,
        }
        .min(area.y + area.height - y);
        let row_area = Rect::new(area.x + 1, y, area.width.saturating_sub(2), height);
        render_item(frame, app, item, index, index == highlighted, row_area);
    }
}

fn render_item(frame: &mut Frame, app: &App, item: &Item, index: usize, is_cursor: bool, area: Rect) {
    let theme = &app.theme;
    let dragging = is_cursor && app.mode == Mode::Drag;
    let row_bg = match (theme.item_style, is_cursor) {
        (_, true) => theme.selection_bg,
        (ItemStyle::Filled, false) => theme.item_bg,
        (ItemStyle::Outlined, false) => theme.background,
    };

    let line_area = match theme.item_style {
        ItemStyle::Filled => area,
        ItemStyle::Outlined => {
            let border = if is_cursor { theme.highlight } else { theme.border };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border).bg(theme.background))
                .style(Style::default().bg(row_bg));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        }
    };
    if line_area.height == 0 {
        return;
    }

    let marker = if dragging { "\u{2261} " } else { "  " };
    let number = format!("{}{:>2}  ", marker, index + 1);
    let button = format!(" [{}] ", app.labels().edit_button);
    let width = line_area.width as usize;
    let fixed = unicode::display_width(&number) + unicode::display_width(&button);
    let content = unicode::truncate_to_width(&item.content, width.saturating_sub(fixed));
    let padding = width
        .saturating_sub(fixed)
        .saturating_sub(unicode::display_width(&content));

    let mut content_style = Style::default().fg(theme.text_bright).bg(row_bg);
    if is_cursor {
        content_style = content_style.add_modifier(Modifier::BOLD);
    }
    if dragging {
        content_style = content_style.fg(theme.highlight);
    }

    let mut spans = vec![
        Span::styled(number, Style::default().fg(theme.dim).bg(row_bg)),
        Span::styled(content, content_style),
        Span::styled(" ".repeat(padding), Style::default().bg(row_bg)),
    ];
    if fixed <= width {
        spans.push(Span::styled(
            button,
            Style::default().fg(if is_cursor { theme.highlight } else { theme.dim }).bg(row_bg),
        ));
    }

    let line_area = Rect::new(line_area.x, line_area.y, line_area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), line_area);
}
