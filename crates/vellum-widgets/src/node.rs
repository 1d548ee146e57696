//! Node records for scene objects.
//!
//! A scene object materializes into a small tree: a [`RootNode`] for the box
//! and, for text-bearing objects, a [`TextNode`] under it.  Nodes hold
//! CSS-like inline style values.  Field bindings write these values; painting
//! reads them.

use ratatui::style::{Color, Modifier, Style};

/// Horizontal text alignment (`text-align`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `left`
    Left,
    /// `center`
    Center,
    /// `right`
    Right,
}

impl TextAlign {
    /// Offset of a line `used` cells wide inside a block `available` cells wide.
    pub fn offset(self, available: u16, used: u16) -> u16 {
        let free = available.saturating_sub(used);
        match self {
            TextAlign::Left => 0,
            TextAlign::Center => free / 2,
            TextAlign::Right => free,
        }
    }
}

/// Flex axis placement (`justify-content` / `align-items`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexAlign {
    /// `flex-start`
    Start,
    /// `center`
    Center,
    /// `flex-end`
    End,
}

impl FlexAlign {
    /// Offset of a run of `used` cells inside `available` cells.
    pub fn offset(self, available: u16, used: u16) -> u16 {
        let free = available.saturating_sub(used);
        match self {
            FlexAlign::Start => 0,
            FlexAlign::Center => free / 2,
            FlexAlign::End => free,
        }
    }
}

/// `font-style`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// `normal`
    Normal,
    /// `italic`
    Italic,
}

/// `text-decoration`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    /// `none`
    None,
    /// `underline`
    Underline,
}

/// Which node of a box a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The box itself, outside the text.
    Root,
    /// The text node.
    Text,
    /// Anything else in the scene.
    Outside,
}

/// The root node of a scene box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootNode {
    /// Class name carried for styling and debugging.
    pub class_name: String,
    /// Background fill (hex color, RGB or RGBA).
    pub background: Option<String>,
    /// `text-align`
    pub text_align: Option<TextAlign>,
    /// `justify-content` (horizontal placement of the text node).
    pub justify_content: Option<FlexAlign>,
    /// `align-items` (vertical placement of the text node).
    pub align_items: Option<FlexAlign>,
    /// The text child, once created.
    pub text: Option<TextNode>,
}

impl RootNode {
    /// Create an empty root with the given class name.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            background: None,
            text_align: None,
            justify_content: None,
            align_items: None,
            text: None,
        }
    }

    /// Attach `text` as the text child, replacing any previous one.
    pub fn append_text(&mut self, text: TextNode) -> &mut TextNode {
        self.text.insert(text)
    }

    /// The text child, if attached.
    pub fn text_node(&self) -> Option<&TextNode> {
        self.text.as_ref()
    }

    /// The text child, if attached.
    pub fn text_node_mut(&mut self) -> Option<&mut TextNode> {
        self.text.as_mut()
    }

    /// Background as a terminal color. Transparent or unparsable fills give `None`.
    pub fn background_color(&self) -> Option<Color> {
        let (r, g, b, a) = parse_hex_color(self.background.as_deref()?)?;
        (a > 0).then_some(Color::Rgb(r, g, b))
    }
}

/// The text node of a scene box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    /// Displayed text.
    pub content: String,
    /// Whether the node accepts direct input.
    pub editable: bool,
    /// Whether the node has keyboard focus.
    pub focused: bool,
    /// `font-family`
    pub font_family: Option<String>,
    /// `font-size` in px.
    pub font_size: Option<i64>,
    /// `color` (hex).
    pub color: Option<String>,
    /// `font-weight`
    pub font_weight: Option<u16>,
    /// `font-style`
    pub font_style: Option<FontStyle>,
    /// `text-decoration`
    pub text_decoration: Option<TextDecoration>,
    /// `word-break`, verbatim.
    pub word_break: Option<String>,
}

impl TextNode {
    /// Create an empty text node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminal style for the glyphs of this node.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some((r, g, b, _)) = self.color.as_deref().and_then(parse_hex_color) {
            style = style.fg(Color::Rgb(r, g, b));
        }
        if self.font_weight.is_some_and(|w| w >= 600) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.font_style == Some(FontStyle::Italic) {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.text_decoration == Some(TextDecoration::Underline) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    /// Whether lines may break between any two characters.
    pub fn breaks_anywhere(&self) -> bool {
        matches!(
            self.word_break.as_deref(),
            Some("break-all" | "break-word" | "anywhere")
        )
    }
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` into RGBA bytes.
///
/// Missing alpha means opaque.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = hex.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
    match hex.len() {
        3 => Some((short(0)?, short(1)?, short(2)?, 255)),
        4 => Some((short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            255,
        )),
        8 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}
