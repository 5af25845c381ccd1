//! Product card widget

use crate::product::{format_cost, CardProduct};
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 7;

/// One product tile: name, category, cost, rating and an add-to-cart button
pub struct ProductCard<'a> {
    product: &'a CardProduct,
    selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a CardProduct) -> Self {
        Self {
            product,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(colors::BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let p = self.product;
        let category_color = colors::color_for_category(&p.category);

        let button_style = if self.selected {
            Style::default()
                .fg(Color::Black)
                .bg(colors::BRAND)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::BRAND)
        };

        let lines = vec![
            Line::from(Span::styled(
                truncate(&p.name, width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(
                    &format!("{} {}", colors::icon_for_category(&p.category), p.category),
                    width,
                ),
                Style::default().fg(category_color),
            )),
            Line::from(Span::styled(
                format_cost(p.cost),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                p.rating.to_string(),
                Style::default().fg(colors::STAR),
            )),
            Line::from(Span::styled(
                format!("{:^width$}", "\u{1F6D2} ADD TO CART", width = width.saturating_sub(1)),
                button_style,
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Cut `text` to `max` display columns, ending with an ellipsis if cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Rating;

    fn iphone() -> CardProduct {
        CardProduct {
            name: "iPhone XR".into(),
            category: "Phones".into(),
            cost: 100.0,
            rating: Rating::new(4),
            image: "https://i.imgur.com/lulqWzW.jpg".into(),
            id: "v4sLtEcMpzabRyfx".into(),
        }
    }

    fn rendered_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_name_cost_and_rating() {
        let card = iphone();
        let area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        ProductCard::new(&card).render(area, &mut buf);

        let text = rendered_text(&buf);
        assert!(text.contains("iPhone XR"));
        assert!(text.contains("$100"));
        assert!(text.contains("★★★★☆"));
        assert!(text.contains("ADD TO CART"));
    }

    #[test]
    fn truncates_long_names() {
        assert_eq!(truncate("Basketball", 20), "Basketball");
        assert_eq!(truncate("Basketball", 5), "Bask…");
        assert_eq!(truncate("Basketball", 0), "");
    }
}
