use crossterm::style::Color;

pub struct Theme {
    pub prompt: Color, // Green
    pub label: Color,  // Blue
    pub error: Color,  // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    prompt: Color::Green,
    label: Color::Blue,
    error: Color::Red,
};
