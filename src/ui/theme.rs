use crossterm::style::Color;

pub struct Theme {
    pub header: Color,   // Yellow
    pub border: Color,   // Grey
    pub truth: Color,    // Green
    pub falsity: Color,  // Red
    pub title: Color,    // Blue
    pub error: Color,    // Red
    pub location: Color, // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    header: Color::Rgb { r: 249, g: 226, b: 175 },
    border: Color::Rgb { r: 108, g: 112, b: 134 },
    truth: Color::Rgb { r: 166, g: 227, b: 161 },
    falsity: Color::Rgb { r: 243, g: 139, b: 168 },
    title: Color::Rgb { r: 137, g: 180, b: 250 },
    error: Color::Rgb { r: 243, g: 139, b: 168 },
    location: Color::Rgb { r: 108, g: 112, b: 134 },
};
