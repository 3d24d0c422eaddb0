//! Text label shapes and their style model.

mod text;

pub use text::TextShape;

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Unique identifier for shapes within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out session-unique shape ids.
///
/// A monotonic counter owned by the edit session, so ids are never reused
/// within a session and tests see deterministic values.
#[derive(Debug, Clone)]
pub struct ShapeIdGen {
    next: u64,
}

impl ShapeIdGen {
    /// Create a generator starting at id 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Produce the next unique id.
    pub fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}

impl Default for ShapeIdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub fn blue() -> Self {
        Self::new(0, 0, 255, 255)
    }

    pub fn green() -> Self {
        Self::new(0, 128, 0, 255)
    }

    /// Parse a toolbar color value: a CSS color name from the palette or a
    /// `#rgb` / `#rrggbb` / `#rrggbbaa` hex string. Returns `None` for
    /// anything else.
    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "black" => return Some(Self::black()),
            "red" => return Some(Self::red()),
            "blue" => return Some(Self::blue()),
            "green" => return Some(Self::green()),
            "white" => return Some(Self::new(255, 255, 255, 255)),
            _ => {}
        }

        let hex = value.strip_prefix('#')?.trim();
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(&hex[0..1])? * 17;
                let g = channel(&hex[1..2])? * 17;
                let b = channel(&hex[2..3])? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                Some(Self::new(r, g, b, 255))
            }
            8 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                let a = channel(&hex[6..8])?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Font family options offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// Arial sans-serif (default).
    #[default]
    Arial,
    /// Times New Roman serif.
    TimesNewRoman,
    /// Courier New monospace.
    CourierNew,
    /// Georgia serif.
    Georgia,
}

impl FontFamily {
    /// Get the font family name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
        }
    }

    /// Get all available font families.
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Arial,
            FontFamily::TimesNewRoman,
            FontFamily::CourierNew,
            FontFamily::Georgia,
        ]
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Get the alignment name as used by the renderer.
    pub fn name(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Style properties for text shapes.
///
/// Bold and italic are stored as independent flags; the combined font-style
/// string the renderer consumes is derived in [`TextStyle::font_style_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family.
    pub font_family: FontFamily,
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill color.
    pub fill: SerializableColor,
    /// Bold flag.
    pub bold: bool,
    /// Italic flag.
    pub italic: bool,
    /// Underline flag.
    pub underline: bool,
    /// Horizontal alignment.
    pub align: TextAlign,
}

impl TextStyle {
    /// Default font size in pixels.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;

    /// Combined font-style string for the render boundary.
    pub fn font_style_name(&self) -> &'static str {
        match (self.bold, self.italic) {
            (true, true) => "bold italic",
            (true, false) => "bold",
            (false, true) => "italic",
            (false, false) => "normal",
        }
    }

    /// Text-decoration string for the render boundary (empty = none).
    pub fn text_decoration_name(&self) -> &'static str {
        if self.underline { "underline" } else { "" }
    }

    /// Get the fill as a peniko Color for the renderer.
    pub fn fill_color(&self) -> Color {
        self.fill.into()
    }

    /// Merge a toolbar delta onto this style. `None` fields are untouched.
    pub fn apply(&mut self, delta: &StyleDelta) {
        if let Some(font) = delta.font {
            self.font_family = font;
        }
        if let Some(size) = delta.size {
            self.font_size = size;
        }
        if let Some(color) = delta.color {
            self.fill = color;
        }
        if let Some(bold) = delta.bold {
            self.bold = bold;
        }
        if let Some(italic) = delta.italic {
            self.italic = italic;
        }
        if let Some(underline) = delta.underline {
            self.underline = underline;
        }
        if let Some(align) = delta.align {
            self.align = align;
        }
    }

    /// Copy of this style with a delta merged on.
    pub fn merged(&self, delta: &StyleDelta) -> Self {
        let mut style = self.clone();
        style.apply(delta);
        style
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size: Self::DEFAULT_FONT_SIZE,
            fill: SerializableColor::black(),
            bold: false,
            italic: false,
            underline: false,
            align: TextAlign::default(),
        }
    }
}

/// A partial style change emitted by the toolbar.
///
/// `None` fields leave the corresponding style field untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleDelta {
    pub font: Option<FontFamily>,
    pub size: Option<f64>,
    pub color: Option<SerializableColor>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub align: Option<TextAlign>,
}

impl StyleDelta {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.align.is_none()
    }

    pub fn with_font(mut self, font: FontFamily) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: SerializableColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }
}
