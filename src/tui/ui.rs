use crate::notify::Variant;
use crate::product::CardProduct;
use crate::tui::app::App;
use crate::tui::card::{truncate, ProductCard, CARD_HEIGHT, CARD_WIDTH};
use crate::tui::colors;
use crate::tui::grid::GridState;
use crate::view::{Screen, EMPTY_MESSAGE, LOADING_MESSAGE};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Below this width the search box moves out of the header into its own row
pub const COMPACT_WIDTH: u16 = 80;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let compact = area.width < COMPACT_WIDTH;

    let mut constraints = vec![Constraint::Length(3)]; // Header
    if compact {
        constraints.push(Constraint::Length(3)); // Search bar
    }
    constraints.extend([
        Constraint::Length(1), // Hero
        Constraint::Min(5),    // Products
        Constraint::Length(1), // Footer
        Constraint::Length(1), // Status bar
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (search_area, rest) = match draw_header(frame, app, chunks[0], compact) {
        Some(search_area) => (search_area, &chunks[1..]),
        None => {
            draw_search_bar(frame, app, chunks[1]);
            (chunks[1], &chunks[2..])
        }
    };

    draw_hero(frame, rest[0]);
    draw_products(frame, app, rest[1]);
    draw_footer(frame, rest[2]);
    draw_status_bar(frame, app, rest[3]);
    draw_toasts(frame, app, area);

    if app.search.focused {
        // Border (1) + space (1) + search icon (2) + space (1)
        let cursor_x = search_area.x
            + 5
            + app.search.cursor_column(app.view.search_text());
        let cursor_x = cursor_x.min(search_area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(cursor_x, search_area.y + 1));
    }
}

/// Draw the header. On wide terminals the search box fills the header
/// height in place of a bottom rule, and its area is returned.
fn draw_header(frame: &mut Frame, app: &App, area: Rect, compact: bool) -> Option<Rect> {
    let logo = Line::from(vec![
        Span::styled(
            " \u{1F6D2} QKart",
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD),
        ),
    ]);

    if compact {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(logo), inner);
        return None;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(14),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(logo), Rect { height: 1, y: cols[0].y + 1, ..cols[0] });
    draw_search_bar(frame, app, cols[1]);
    Some(cols[1])
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(colors::BRAND)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if app.view.search_text().is_empty() {
        Line::from(vec![
            Span::raw(" \u{1F50D} "),
            Span::styled(
                "Search for items/categories",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(format!(" \u{1F50D} {}", app.view.search_text()))
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_hero(frame: &mut Frame, area: Rect) {
    let hero = Line::from(vec![
        Span::raw("India’s "),
        Span::styled(
            "FASTEST DELIVERY",
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to your door step"),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(Paragraph::new(hero), area);
}

fn draw_products(frame: &mut Frame, app: &mut App, area: Rect) {
    let screen = app.view.screen();
    match screen {
        Screen::Loading => {
            let frame_idx = (frame.count() / 2) % SPINNER.len();
            draw_centered_message(
                frame,
                area,
                SPINNER[frame_idx],
                colors::BRAND,
                LOADING_MESSAGE,
            );
        }
        Screen::Empty => {
            draw_centered_message(frame, area, "\u{2639}", Color::Gray, EMPTY_MESSAGE);
        }
        Screen::Grid(_) => {
            let highlight = !app.search.focused;
            draw_grid(frame, &mut app.grid, &screen.cards(), highlight, area);
        }
    }
}

fn draw_centered_message(frame: &mut Frame, area: Rect, icon: &str, color: Color, message: &str) {
    let top = area.y + area.height.saturating_sub(2) / 2;
    let lines = vec![
        Line::from(Span::styled(icon.to_string(), Style::default().fg(color)))
            .alignment(Alignment::Center),
        Line::from(message.to_string()).alignment(Alignment::Center),
    ];
    let target = Rect::new(area.x, top, area.width, 2.min(area.height));
    frame.render_widget(Paragraph::new(lines), target);
}

fn draw_grid(
    frame: &mut Frame,
    grid: &mut GridState,
    cards: &[CardProduct],
    highlight: bool,
    area: Rect,
) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    grid.set_layout(columns, visible_rows);

    let card_width = area.width / columns as u16;
    let first = grid.scroll_row * columns;

    for (slot, card) in cards.iter().enumerate().skip(first).take(columns * visible_rows) {
        let visual = slot - first;
        let row = (visual / columns) as u16;
        let col = (visual % columns) as u16;

        let card_area = Rect::new(
            area.x + col * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
        );
        let selected = highlight && grid.selected == Some(slot);
        frame.render_widget(ProductCard::new(card).selected(selected), card_area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            " QKart ",
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "is your one stop solution to buy the latest trending items with India's Fastest Delivery to your doorstep",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .style(Style::default().bg(colors::BAR_BG));

    frame.render_widget(footer, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.view.is_loading() {
        format!(" {}", LOADING_MESSAGE)
    } else {
        format!(" {}", app.status_message)
    };

    let right_text = if app.search.focused {
        " Tab:Products  Esc:Clear  F5:Reload  Ctrl+Q:Quit "
    } else {
        " \u{2190}\u{2191}\u{2193}\u{2192}:Move  Enter:Add to cart  o:Image  /:Search  F5:Reload  Ctrl+Q:Quit "
    };

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.chars().count();
    let right_len = right_text.chars().count();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        // Not enough space, just show left text
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}

/// Toasts stack in the top-right corner, newest at the bottom
fn draw_toasts(frame: &mut Frame, app: &App, area: Rect) {
    let width = 48.min(area.width);
    let mut y = area.y + 1;

    for toast in app.toasts.visible() {
        let (border, title) = match toast.notification.variant {
            Variant::Error => (Color::Red, " Error "),
            Variant::Info => (colors::BRAND, " Info "),
        };
        let text = truncate(&toast.notification.message, (width as usize).saturating_sub(2) * 3);
        let height = 5.min(area.height.saturating_sub(y));
        if height < 3 {
            break;
        }

        let toast_area = Rect::new(area.right().saturating_sub(width + 1), y, width, height);
        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .title(title),
                )
                .style(Style::default().fg(Color::White)),
            toast_area,
        );
        y += height;
    }
}
