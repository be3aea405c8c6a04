use crossterm::style::Color;

pub fn header_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn highlight_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
