use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0, 163, 108);
pub const BAR_BG: Color = Color::Rgb(40, 40, 50);
pub const STAR: Color = Color::Yellow;

pub fn color_for_category(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "phones" | "electronics" | "computers" => Color::LightBlue,
        "fashion" | "clothing" | "apparel" => Color::Magenta,
        "sports" | "fitness" => Color::LightRed,
        "home & kitchen" | "kitchen" | "home" => Color::LightYellow,
        "books" => Color::Cyan,
        "toys" | "games" => Color::LightMagenta,
        "grocery" | "food" => Color::Green,
        _ => Color::Gray,
    }
}

pub fn icon_for_category(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "phones" => "\u{1F4F1}",                   // mobile phone
        "electronics" | "computers" => "\u{1F4BB}", // laptop
        "fashion" | "clothing" | "apparel" => "\u{1F455}", // t-shirt
        "sports" | "fitness" => "\u{26BD}",        // soccer ball
        "home & kitchen" | "kitchen" | "home" => "\u{1F3E0}", // house
        "books" => "\u{1F4DA}",                    // books
        "toys" | "games" => "\u{1F3B2}",           // die
        "grocery" | "food" => "\u{1F34E}",         // apple
        _ => "\u{1F6CD}\u{FE0F}",                  // shopping bags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(color_for_category("Phones"), color_for_category("phones"));
        assert_eq!(icon_for_category("SPORTS"), "\u{26BD}");
        assert_eq!(color_for_category("Unknown"), Color::Gray);
    }
}
