//! In-place editable text box.
//!
//! A [`TextBox`] is a scene box that renders styled text and can be switched
//! into edit mode, where it takes keyboard input directly.  Its fields live in
//! the box's [`StateBag`](crate::state::StateBag) and are projected onto the
//! node tree by bindings, so a field changed from a property panel, a style
//! command, or a finished edit is displayed the same way.
//!
//! # Edit mode
//!
//! [`TextBox::editable`] claims the shared [`EditSession`], loads the text into
//! an editing buffer and selects all of it.  While editing:
//!
//! - Ctrl/Cmd + B, I, or U is swallowed: text boxes carry one style for the
//!   whole text, set through style commands, never inline.
//! - Ctrl/Cmd + Enter commits and asks the parent to select the box
//!   ([`Message::Select`]).  Esc commits without selecting.
//! - A pointer-down anywhere other than the box commits.
//! - Pastes insert plain text only.
//!
//! [`TextBox::blur`] copies the buffer back into the `text` field and
//! releases the session.
//!
//! Which inputs the box wants is derived from its state by
//! [`TextBox::listeners`]; the parent routes events accordingly.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use tracing::{debug, trace, warn};
use vellum_core::{Command, Component, EditSession, ObjectId, SessionError};

use crate::clipboard::ClipboardData;
use crate::key::{Binding, KeyCombination, COMMAND};
use crate::node::{
    FlexAlign, FontStyle, HitTarget, RootNode, TextAlign, TextDecoration, TextNode,
};
use crate::runeutil::{char_width, locate, wrap_lines, LineRange};
use crate::state::{FieldError, Handler, Value};
use crate::styled_box::{BoxCore, StyledBox, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::text_edit::TextEditState;

/// The `type` attribute of text boxes.
pub const TYPE_NAME: &str = "TextBox";
/// The class name given to the root node.
pub const CLASS_NAME: &str = "vs-textbox";

/// Default `text`.
pub const DEFAULT_TEXT: &str = "Text";
/// Default `fontFamily`.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
/// Default `color` (fully transparent fill).
pub const DEFAULT_COLOR: &str = "#FFFFFF00";
/// Default `textColor`.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Default `size` in px.
pub const DEFAULT_SIZE: i64 = 14;
/// Default `align`.
pub const DEFAULT_ALIGN: &str = "center";
/// Default `verticalAlign`.
pub const DEFAULT_VERTICAL_ALIGN: &str = "middle";
/// Default `wordBreak`.
pub const DEFAULT_WORD_BREAK: &str = "normal";

const BOOLEAN_FIELDS: [&str; 3] = ["bold", "italic", "underline"];

/// Fields stored as strings; other kinds are kept in their display form.
const STRING_FIELDS: [&str; 8] = [
    "text",
    "fontFamily",
    "color",
    "textColor",
    "align",
    "verticalAlign",
    "wordBreak",
    "className",
];

const BINDINGS: [(&str, Handler<RootNode>); 11] = [
    ("fontFamily", on_font_family),
    ("size", on_size),
    ("text", on_text),
    ("textColor", on_text_color),
    ("bold", on_bold),
    ("italic", on_italic),
    ("underline", on_underline),
    ("align", on_align),
    ("verticalAlign", on_vertical_align),
    ("wordBreak", on_word_break),
    ("className", on_class_name),
];

/// Initial field values for a [`TextBox`].
///
/// ```rust,ignore
/// let options = TextBoxOptions::default()
///     .with_text("Title")
///     .with_bold(true)
///     .at(2, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBoxOptions {
    /// `text`
    pub text: String,
    /// `fontFamily`
    pub font_family: String,
    /// `color`: box fill, RGBA hex.
    pub color: String,
    /// `textColor`: glyph color, RGB hex.
    pub text_color: String,
    /// `size` in px.
    pub size: i64,
    /// `bold`
    pub bold: bool,
    /// `italic`
    pub italic: bool,
    /// `underline`
    pub underline: bool,
    /// `align`: left, center, or right.
    pub align: String,
    /// `verticalAlign`: top, middle, or bottom.
    pub vertical_align: String,
    /// `wordBreak`, a CSS word-break value.
    pub word_break: String,
    /// Left edge in scene cells.
    pub x: u16,
    /// Top edge in scene cells.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
    /// Additional fields, stored untouched. Applied last, so a known key
    /// here overrides the typed field.
    pub extra: BTreeMap<String, Value>,
}

impl Default for TextBoxOptions {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            color: DEFAULT_COLOR.to_owned(),
            text_color: DEFAULT_TEXT_COLOR.to_owned(),
            size: DEFAULT_SIZE,
            bold: false,
            italic: false,
            underline: false,
            align: DEFAULT_ALIGN.to_owned(),
            vertical_align: DEFAULT_VERTICAL_ALIGN.to_owned(),
            word_break: DEFAULT_WORD_BREAK.to_owned(),
            x: 0,
            y: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            extra: BTreeMap::new(),
        }
    }
}

impl TextBoxOptions {
    /// Set the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the box fill color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the glyph color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the font size.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline.
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set horizontal alignment.
    pub fn with_align(mut self, align: impl Into<String>) -> Self {
        self.align = align.into();
        self
    }

    /// Set vertical alignment.
    pub fn with_vertical_align(mut self, align: impl Into<String>) -> Self {
        self.vertical_align = align.into();
        self
    }

    /// Set the word-break mode.
    pub fn with_word_break(mut self, mode: impl Into<String>) -> Self {
        self.word_break = mode.into();
        self
    }

    /// Place the top-left corner.
    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size in cells.
    pub fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Add a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    fn into_fields(self) -> Vec<(String, Value)> {
        let mut fields: Vec<(String, Value)> = vec![
            ("text".into(), self.text.into()),
            ("fontFamily".into(), self.font_family.into()),
            ("color".into(), self.color.into()),
            ("textColor".into(), self.text_color.into()),
            ("size".into(), self.size.into()),
            ("bold".into(), self.bold.into()),
            ("italic".into(), self.italic.into()),
            ("underline".into(), self.underline.into()),
            ("align".into(), self.align.into()),
            ("verticalAlign".into(), self.vertical_align.into()),
            ("wordBreak".into(), self.word_break.into()),
            ("x".into(), i64::from(self.x).into()),
            ("y".into(), i64::from(self.y).into()),
            ("width".into(), i64::from(self.width).into()),
            ("height".into(), i64::from(self.height).into()),
        ];
        fields.extend(self.extra);
        fields
    }
}

/// Messages for a [`TextBox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Enter edit mode.
    Edit,
    /// Leave edit mode, keeping the edited text.
    Commit,
    /// A key press. Ignored outside edit mode.
    Key(KeyEvent),
    /// A pointer went down at a scene cell, anywhere in the scene.
    PointerDown {
        /// Scene column.
        column: u16,
        /// Scene row.
        row: u16,
    },
    /// Clipboard content pasted into the box.
    Paste(ClipboardData),
    /// Run a named style command.
    Apply(String),
    /// Outbound: the box asks its parent to select it.
    Select(ObjectId),
}

/// Inputs the box currently wants routed to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Listeners {
    /// Key presses, through the edit-mode key filter.
    pub key_filter: bool,
    /// Every pointer-down in the scene, so clicks elsewhere commit.
    pub pointer_guard: bool,
    /// Paste events.
    pub paste: bool,
}

/// Key bindings active while editing.
#[derive(Debug, Clone)]
pub struct TextBoxKeys {
    /// Inline formatting shortcuts, swallowed.
    pub formatting: Binding,
    /// Commit and select the box.
    pub commit_select: Binding,
    /// Commit.
    pub commit: Binding,
    /// Select the whole text.
    pub select_all: Binding,
}

impl Default for TextBoxKeys {
    fn default() -> Self {
        Self {
            formatting: Binding::with_keys(
                vec![
                    KeyCombination::command(KeyCode::Char('b')),
                    KeyCombination::command(KeyCode::Char('i')),
                    KeyCombination::command(KeyCode::Char('u')),
                ],
                "inline formatting (ignored)",
            ),
            commit_select: Binding::new(
                KeyCombination::command(KeyCode::Enter),
                "finish editing and select",
            ),
            commit: Binding::new(KeyCombination::new(KeyCode::Esc), "finish editing"),
            select_all: Binding::new(KeyCombination::command(KeyCode::Char('a')), "select all"),
        }
    }
}

/// An editable text box.
#[derive(Debug)]
pub struct TextBox {
    core: BoxCore,
    session: EditSession,
    buffer: TextEditState,
    goal_column: Option<usize>,
    keys: TextBoxKeys,
}

impl TextBox {
    /// Create a text box from `options`, sharing `session` with every other
    /// editable object of the scene.
    ///
    /// Fails when a pass-through field has the wrong kind, for example a
    /// non-numeric `size`.
    pub fn new(options: TextBoxOptions, session: EditSession) -> Result<Self, FieldError> {
        let mut core = BoxCore::new(TYPE_NAME, CLASS_NAME);
        for (key, value) in options.into_fields() {
            let value = check_kind(&key, value)?;
            core.set(&key, value)?;
        }
        for (key, handler) in BINDINGS {
            core.bind(key, handler);
        }
        core.declare_number("size")?;
        Ok(Self {
            core,
            session,
            buffer: TextEditState::new(),
            goal_column: None,
            keys: TextBoxKeys::default(),
        })
    }

    /// Replace the edit-mode key bindings.
    pub fn with_keys(mut self, keys: TextBoxKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Assign a field through the single setter.
    ///
    /// Returns whether the stored value changed.  Numeric fields coerce
    /// strings, string fields store the display form of any value, and
    /// boolean fields only accept booleans.
    pub fn set(&mut self, key: &str, value: Value) -> Result<bool, FieldError> {
        let value = check_kind(key, value)?;
        let changed = self.core.set(key, value)?;
        if changed && key == "text" && self.is_editing() {
            let text = self.text().to_owned();
            self.buffer.set_value(&text);
        }
        Ok(changed)
    }

    /// Assign a field from its textual form, as a property panel would.
    pub fn set_attr(&mut self, name: &str, raw: &str) -> Result<bool, FieldError> {
        let value = if BOOLEAN_FIELDS.contains(&name) {
            match raw.trim() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => {
                    return Err(FieldError::TypeMismatch {
                        field: name.to_owned(),
                        expected: "boolean",
                        found: "string",
                    })
                }
            }
        } else {
            Value::from(raw)
        };
        self.set(name, value)
    }

    /// The committed text.
    pub fn text(&self) -> &str {
        self.core.state().str("text").unwrap_or(DEFAULT_TEXT)
    }

    /// The font family.
    pub fn font_family(&self) -> &str {
        self.core.state().str("fontFamily").unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// The box fill color.
    pub fn color(&self) -> &str {
        self.core.state().str("color").unwrap_or(DEFAULT_COLOR)
    }

    /// The glyph color.
    pub fn text_color(&self) -> &str {
        self.core.state().str("textColor").unwrap_or(DEFAULT_TEXT_COLOR)
    }

    /// The font size in px.
    pub fn size(&self) -> i64 {
        self.core.state().int("size").unwrap_or(DEFAULT_SIZE)
    }

    /// Whether the text is bold.
    pub fn bold(&self) -> bool {
        self.core.state().bool("bold").unwrap_or(false)
    }

    /// Whether the text is italic.
    pub fn italic(&self) -> bool {
        self.core.state().bool("italic").unwrap_or(false)
    }

    /// Whether the text is underlined.
    pub fn underline(&self) -> bool {
        self.core.state().bool("underline").unwrap_or(false)
    }

    /// Horizontal alignment.
    pub fn align(&self) -> &str {
        self.core.state().str("align").unwrap_or(DEFAULT_ALIGN)
    }

    /// Vertical alignment.
    pub fn vertical_align(&self) -> &str {
        self.core
            .state()
            .str("verticalAlign")
            .unwrap_or(DEFAULT_VERTICAL_ALIGN)
    }

    /// The word-break mode.
    pub fn word_break(&self) -> &str {
        self.core.state().str("wordBreak").unwrap_or(DEFAULT_WORD_BREAK)
    }

    /// The text node, once rendered.
    pub fn text_node(&self) -> Option<&TextNode> {
        self.core.root().and_then(RootNode::text_node)
    }

    /// The editing buffer.
    pub fn buffer(&self) -> &TextEditState {
        &self.buffer
    }

    /// Whether the box is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.text_node().is_some_and(|node| node.editable)
    }

    /// Inputs the box wants in its current state.
    pub fn listeners(&self) -> Listeners {
        let editing = self.is_editing();
        Listeners {
            key_filter: editing,
            pointer_guard: editing,
            paste: editing,
        }
    }

    /// Enter edit mode.
    ///
    /// Renders the box if needed, claims the edit session, and selects the
    /// whole text.  Fails while another object is being edited.
    pub fn editable(&mut self) -> Result<(), SessionError> {
        if self.is_editing() {
            return Ok(());
        }
        let id = self.id();
        self.session
            .begin(id)
            .inspect_err(|err| debug!(%id, %err, "edit rejected"))?;
        self.render();

        let text = self.text().to_owned();
        self.buffer.set_value(&text);
        self.buffer.select_all();
        self.goal_column = None;
        if let Some(node) = self.text_node_mut() {
            node.editable = true;
            node.focused = true;
            node.content = text;
        }
        debug!(%id, "edit started");
        Ok(())
    }

    /// Leave edit mode, committing the buffer to `text`.
    ///
    /// Returns whether the box was editing.
    pub fn blur(&mut self) -> bool {
        let Some(node) = self.text_node_mut().filter(|node| node.editable) else {
            return false;
        };
        node.editable = false;
        node.focused = false;
        let committed = node.content.clone();

        self.buffer.clear_selection();
        self.goal_column = None;
        if let Err(err) = self.set("text", committed.into()) {
            warn!(id = %self.id(), %err, "commit failed");
        }
        self.session.end(self.id());
        debug!(id = %self.id(), text = self.text(), "edit committed");
        true
    }

    /// Insert pasted plain text at the caret.
    ///
    /// Returns whether anything was inserted.  Ignored outside edit mode and
    /// when the clipboard holds no plain text.
    pub fn paste(&mut self, data: &ClipboardData) -> bool {
        if !self.listeners().paste {
            trace!(id = %self.id(), "paste ignored outside edit mode");
            return false;
        }
        let Some(text) = data.plain_text() else {
            return false;
        };
        let inserted = self.buffer.insert_str(&text);
        self.goal_column = None;
        self.sync_content();
        debug!(id = %self.id(), inserted, "pasted");
        true
    }

    /// Which node the scene cell `(column, row)` falls on.
    pub fn hit(&self, column: u16, row: u16) -> HitTarget {
        let position = Position::new(column, row);
        let rect = self.rect();
        let Some(node) = self.text_node() else {
            return HitTarget::Outside;
        };
        if !rect.contains(position) {
            return HitTarget::Outside;
        }
        let chars: Vec<char> = node.content.chars().collect();
        match self.layout(&chars, rect) {
            Some(layout) if layout.block.contains(position) => HitTarget::Text,
            _ => HitTarget::Root,
        }
    }

    fn text_node_mut(&mut self) -> Option<&mut TextNode> {
        self.core.root_mut().and_then(RootNode::text_node_mut)
    }

    fn sync_content(&mut self) {
        let value = self.buffer.value();
        if let Some(node) = self.text_node_mut() {
            node.content = value;
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        if !self.listeners().key_filter || key.kind == KeyEventKind::Release {
            return Command::none();
        }
        if self.keys.formatting.matches(&key) {
            trace!(id = %self.id(), ?key, "formatting shortcut swallowed");
            return Command::none();
        }
        if self.keys.commit_select.matches(&key) {
            self.blur();
            return Command::message(Message::Select(self.id()));
        }
        if self.keys.commit.matches(&key) {
            self.blur();
            return Command::none();
        }
        if self.keys.select_all.matches(&key) {
            self.buffer.select_all();
            return Command::none();
        }

        let word = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let vertical = matches!(key.code, KeyCode::Up | KeyCode::Down);
        let edited = match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(COMMAND | KeyModifiers::ALT) => {
                self.buffer.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.buffer.insert_char('\n');
                true
            }
            KeyCode::Backspace if word => self.buffer.delete_word_back(),
            KeyCode::Backspace => self.buffer.delete_back(),
            KeyCode::Delete => self.buffer.delete_forward(),
            KeyCode::Left if word => {
                self.buffer.word_left();
                false
            }
            KeyCode::Left => {
                self.buffer.move_left();
                false
            }
            KeyCode::Right if word => {
                self.buffer.word_right();
                false
            }
            KeyCode::Right => {
                self.buffer.move_right();
                false
            }
            KeyCode::Up => {
                self.move_vertical(false);
                false
            }
            KeyCode::Down => {
                self.move_vertical(true);
                false
            }
            KeyCode::Home => {
                self.buffer.move_home();
                false
            }
            KeyCode::End => {
                self.buffer.move_end();
                false
            }
            _ => false,
        };
        if !vertical {
            self.goal_column = None;
        }
        if edited {
            self.sync_content();
        }
        Command::none()
    }

    fn on_pointer_down(&mut self, column: u16, row: u16) {
        if !self.listeners().pointer_guard {
            return;
        }
        match self.hit(column, row) {
            HitTarget::Outside => {
                self.blur();
            }
            HitTarget::Text => {
                if let Some(pos) = self.caret_at(column, row) {
                    self.buffer.set_cursor(pos);
                    self.goal_column = None;
                }
            }
            HitTarget::Root => {}
        }
    }

    /// Move the caret one wrapped line up or down, keeping its display
    /// column across consecutive moves.
    fn move_vertical(&mut self, down: bool) {
        let chars = self.buffer.chars();
        let Some(layout) = self.layout(chars, self.rect()) else {
            return;
        };
        let (row, col) = locate(&layout.lines, self.buffer.cursor());
        let line = layout.lines[row];
        let goal = *self
            .goal_column
            .get_or_insert_with(|| width_of(&chars[line.start..line.start + col]));

        let target = if down {
            Some(row + 1).filter(|&r| r < layout.lines.len())
        } else {
            row.checked_sub(1)
        };
        let pos = match target {
            Some(target) => {
                let line = layout.lines[target];
                let mut pos = line.start;
                let mut used = 0;
                for &c in &chars[line.start..line.end] {
                    used += char_width(c);
                    if used > goal {
                        break;
                    }
                    pos += 1;
                }
                // the end of a soft-wrapped line is the start of the next
                let wrapped = layout
                    .lines
                    .get(target + 1)
                    .is_some_and(|next| next.start == line.end);
                if wrapped && pos == line.end && pos > line.start {
                    pos - 1
                } else {
                    pos
                }
            }
            None if down => chars.len(),
            None => 0,
        };
        self.buffer.set_cursor(pos);
    }

    fn caret_at(&self, column: u16, row: u16) -> Option<usize> {
        let chars = self.buffer.chars();
        let layout = self.layout(chars, self.rect())?;
        let offset = usize::from(row.checked_sub(layout.block.y)?);
        let target = (layout.first_row + offset).min(layout.lines.len().saturating_sub(1));
        let line = *layout.lines.get(target)?;
        let mut x = layout.line_x(target);
        let mut pos = line.start;
        for &c in &chars[line.start..line.end] {
            let w = cells(char_width(c));
            if column < x.saturating_add(w) {
                break;
            }
            x = x.saturating_add(w);
            pos += 1;
        }
        Some(pos)
    }

    /// Place `chars` inside `area` according to the node's alignment.
    fn layout(&self, chars: &[char], area: Rect) -> Option<Layout> {
        let root = self.core.root()?;
        let breaks_anywhere = root.text_node().is_some_and(TextNode::breaks_anywhere);
        let lines = wrap_lines(chars, usize::from(area.width), breaks_anywhere);
        let widths: Vec<u16> = lines
            .iter()
            .map(|line| cells(width_of(&chars[line.start..line.end])).min(area.width))
            .collect();
        let rows = cells(lines.len()).min(area.height);

        let editing = self.is_editing();
        let first_row = if editing {
            let (caret_row, _) = locate(&lines, self.buffer.cursor());
            (caret_row + 1).saturating_sub(usize::from(rows.max(1)))
        } else {
            0
        };
        let block_width = widths
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(u16::from(editing))
            .min(area.width);

        let justify = root.justify_content.unwrap_or(FlexAlign::Start);
        let align = root.align_items.unwrap_or(FlexAlign::Start);
        let block = Rect::new(
            area.x + justify.offset(area.width, block_width),
            area.y + align.offset(area.height, rows),
            block_width,
            rows,
        );
        Some(Layout {
            lines,
            widths,
            block,
            first_row,
            text_align: root.text_align.unwrap_or(TextAlign::Left),
        })
    }
}

impl StyledBox for TextBox {
    fn core(&self) -> &BoxCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BoxCore {
        &mut self.core
    }

    fn render(&mut self) -> &RootNode {
        self.core.render_with(|root| {
            root.append_text(TextNode::new());
        })
    }

    /// Base commands first, then `Smaller`, `Bigger`, `Bold`, `Italic`, and
    /// `Underline`.
    fn apply(&mut self, command: &str) -> bool {
        let base = self.core.apply(command);
        let result = match command {
            "Smaller" => {
                let size = self.size();
                if size > 1 {
                    self.set("size", (size - 1).into())
                } else {
                    Ok(false)
                }
            }
            "Bigger" => match self.size().checked_add(1) {
                Some(size) => self.set("size", size.into()),
                None => Ok(false),
            },
            "Bold" => self.set("bold", (!self.bold()).into()),
            "Italic" => self.set("italic", (!self.italic()).into()),
            "Underline" => self.set("underline", (!self.underline()).into()),
            _ => {
                trace!(id = %self.id(), command, "unknown style command");
                return base;
            }
        };
        match result {
            Ok(_) => {
                debug!(id = %self.id(), command, "style command applied");
                true
            }
            Err(err) => {
                warn!(id = %self.id(), command, %err, "style command failed");
                base
            }
        }
    }
}

impl Component for TextBox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Edit => {
                // rejection is logged by `editable`
                let _ = self.editable();
                Command::none()
            }
            Message::Commit => {
                self.blur();
                Command::none()
            }
            Message::Key(key) => self.on_key(key),
            Message::PointerDown { column, row } => {
                self.on_pointer_down(column, row);
                Command::none()
            }
            Message::Paste(data) => {
                self.paste(&data);
                Command::none()
            }
            Message::Apply(command) => {
                self.apply(&command);
                Command::none()
            }
            Message::Select(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let Some(root) = self.core.root() else {
            return;
        };
        let area = area.intersection(frame.area());
        let editing = self.is_editing();
        let buf = frame.buffer_mut();
        if let Some(background) = root.background_color() {
            buf.set_style(area, Style::default().bg(background));
        }
        let Some(node) = root.text_node() else {
            return;
        };
        let chars: Vec<char> = node.content.chars().collect();
        let Some(layout) = self.layout(&chars, area) else {
            return;
        };

        let style = node.style();
        let selection = if editing {
            self.buffer.selection()
        } else {
            None
        };
        let mut glyph = [0; 4];
        for (offset, row) in layout.visible_rows().enumerate() {
            let line = layout.lines[row];
            let y = layout.block.y + cells(offset);
            let mut x = layout.line_x(row);
            for (i, &c) in chars.iter().enumerate().take(line.end).skip(line.start) {
                let w = cells(char_width(c));
                if w == 0 {
                    continue;
                }
                if x.saturating_add(w) > area.right() {
                    break;
                }
                let selected = selection.is_some_and(|(start, end)| (start..end).contains(&i));
                let style = if selected {
                    style.add_modifier(Modifier::REVERSED)
                } else {
                    style
                };
                buf.set_stringn(x, y, c.encode_utf8(&mut glyph), usize::from(w), style);
                x += w;
            }
        }

        if editing {
            let (row, col) = locate(&layout.lines, self.buffer.cursor());
            if layout.visible_rows().contains(&row) {
                let line = layout.lines[row];
                let x = layout
                    .line_x(row)
                    .saturating_add(cells(width_of(&chars[line.start..line.start + col])))
                    .min(area.right().saturating_sub(1));
                let y = layout.block.y + cells(row - layout.first_row);
                frame.set_cursor_position(Position::new(x, y));
            }
        }
    }

    fn focused(&self) -> bool {
        self.is_editing()
    }
}

struct Layout {
    lines: Vec<LineRange>,
    widths: Vec<u16>,
    block: Rect,
    first_row: usize,
    text_align: TextAlign,
}

impl Layout {
    fn line_x(&self, row: usize) -> u16 {
        let width = self.widths.get(row).copied().unwrap_or(0);
        self.block.x + self.text_align.offset(self.block.width, width)
    }

    fn visible_rows(&self) -> std::ops::Range<usize> {
        let end = (self.first_row + usize::from(self.block.height)).min(self.lines.len());
        self.first_row..end
    }
}

fn width_of(chars: &[char]) -> usize {
    chars.iter().map(|&c| char_width(c)).sum()
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn check_kind(key: &str, value: Value) -> Result<Value, FieldError> {
    if BOOLEAN_FIELDS.contains(&key) && value.as_bool().is_none() {
        return Err(FieldError::TypeMismatch {
            field: key.to_owned(),
            expected: "boolean",
            found: value.type_name(),
        });
    }
    match value {
        Value::Int(_) | Value::Bool(_) if STRING_FIELDS.contains(&key) => {
            Ok(Value::Str(value.to_string()))
        }
        value => Ok(value),
    }
}

fn on_font_family(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.font_family = Some(value.to_string());
    }
}

fn on_size(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.font_size = value.as_int();
    }
}

fn on_text(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.content = value.to_string();
    }
}

fn on_text_color(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.color = Some(value.to_string());
    }
}

fn on_bold(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.font_weight = Some(if value.as_bool() == Some(true) { 700 } else { 400 });
    }
}

fn on_italic(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.font_style = Some(if value.as_bool() == Some(true) {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        });
    }
}

fn on_underline(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.text_decoration = Some(if value.as_bool() == Some(true) {
            TextDecoration::Underline
        } else {
            TextDecoration::None
        });
    }
}

fn on_align(value: &Value, root: &mut RootNode) {
    let (text_align, justify) = match value.as_str() {
        Some("left") => (TextAlign::Left, FlexAlign::Start),
        Some("right") => (TextAlign::Right, FlexAlign::End),
        Some("center") => (TextAlign::Center, FlexAlign::Center),
        _ => return,
    };
    root.text_align = Some(text_align);
    root.justify_content = Some(justify);
}

fn on_vertical_align(value: &Value, root: &mut RootNode) {
    root.align_items = match value.as_str() {
        Some("top") => Some(FlexAlign::Start),
        Some("bottom") => Some(FlexAlign::End),
        Some("middle") => Some(FlexAlign::Center),
        _ => return,
    };
}

fn on_word_break(value: &Value, root: &mut RootNode) {
    if let Some(node) = root.text_node_mut() {
        node.word_break = Some(value.to_string());
    }
}

fn on_class_name(value: &Value, root: &mut RootNode) {
    root.class_name = value.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use vellum_core::testing::buffer_to_string;

    fn text_box() -> TextBox {
        TextBox::new(TextBoxOptions::default(), EditSession::new()).unwrap()
    }

    fn press(tb: &mut TextBox, code: KeyCode, modifiers: KeyModifiers) -> Command<Message> {
        tb.update(Message::Key(KeyEvent::new(code, modifiers)))
    }

    fn type_str(tb: &mut TextBox, s: &str) {
        for c in s.chars() {
            press(tb, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    fn draw(tb: &TextBox, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                tb.view(frame, area);
            })
            .unwrap();
        terminal
    }

    fn screen(tb: &TextBox, width: u16, height: u16) -> String {
        buffer_to_string(draw(tb, width, height).backend().buffer())
    }

    #[test]
    fn unset_fields_take_defaults() {
        let tb = text_box();
        assert_eq!(tb.text(), "Text");
        assert_eq!(tb.font_family(), "sans-serif");
        assert_eq!(tb.color(), "#FFFFFF00");
        assert_eq!(tb.text_color(), "#000000");
        assert_eq!(tb.size(), 14);
        assert!(!tb.bold());
        assert!(!tb.italic());
        assert!(!tb.underline());
        assert_eq!(tb.align(), "center");
        assert_eq!(tb.vertical_align(), "middle");
        assert_eq!(tb.word_break(), "normal");
        assert_eq!(tb.core().type_name(), "TextBox");
        assert_eq!(tb.core().class_name(), "vs-textbox");
        assert!(!tb.is_editing());
    }

    #[test]
    fn options_override_defaults_and_pass_extras_through() {
        let options = TextBoxOptions::default()
            .with_text("Title")
            .with_bold(true)
            .at(3, 4)
            .with_extra("layer", "top");
        let tb = TextBox::new(options, EditSession::new()).unwrap();
        assert_eq!(tb.text(), "Title");
        assert!(tb.bold());
        assert_eq!(tb.rect(), Rect::new(3, 4, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(tb.core().state().str("layer"), Some("top"));
    }

    #[test]
    fn numeric_string_size_is_stored_as_integer() {
        let options = TextBoxOptions::default().with_extra("size", "20");
        let mut tb = TextBox::new(options, EditSession::new()).unwrap();
        assert_eq!(tb.size(), 20);

        tb.set_attr("size", "16").unwrap();
        assert_eq!(tb.size(), 16);
        tb.set("size", "16.7".into()).unwrap();
        assert_eq!(tb.size(), 16);
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let mut tb = text_box();
        let err = tb.set_attr("size", "large").unwrap_err();
        assert!(matches!(err, FieldError::NotANumber { .. }));
        assert_eq!(tb.size(), 14);

        let options = TextBoxOptions::default().with_extra("size", "large");
        assert!(TextBox::new(options, EditSession::new()).is_err());
    }

    #[test]
    fn boolean_fields_only_take_booleans() {
        let mut tb = text_box();
        assert!(tb.set_attr("bold", "true").unwrap());
        assert!(tb.bold());
        assert!(tb.set_attr("bold", "maybe").is_err());
        assert!(tb.set("italic", "yes".into()).is_err());
        assert!(!tb.italic());
    }

    #[test]
    fn render_reflects_current_state() {
        let mut tb = text_box();
        let root = tb.render().clone();
        assert_eq!(root.class_name, "vs-textbox");
        assert_eq!(root.background.as_deref(), Some("#FFFFFF00"));
        assert_eq!(root.text_align, Some(TextAlign::Center));
        assert_eq!(root.justify_content, Some(FlexAlign::Center));
        assert_eq!(root.align_items, Some(FlexAlign::Center));

        let node = root.text_node().unwrap();
        assert_eq!(node.content, "Text");
        assert_eq!(node.font_family.as_deref(), Some("sans-serif"));
        assert_eq!(node.font_size, Some(14));
        assert_eq!(node.color.as_deref(), Some("#000000"));
        assert_eq!(node.font_weight, Some(400));
        assert_eq!(node.font_style, Some(FontStyle::Normal));
        assert_eq!(node.text_decoration, Some(TextDecoration::None));
        assert_eq!(node.word_break.as_deref(), Some("normal"));
        assert!(!node.editable);
    }

    #[test]
    fn render_is_idempotent() {
        let mut tb = text_box();
        let first = tb.render().clone();
        assert_eq!(tb.render(), &first);
    }

    #[test]
    fn setter_fires_bindings_after_render() {
        let mut tb = text_box();
        tb.render();
        tb.set("bold", true.into()).unwrap();
        tb.set("align", "left".into()).unwrap();
        tb.set("verticalAlign", "bottom".into()).unwrap();
        tb.set("textColor", "#ff0000".into()).unwrap();

        let root = tb.core().root().unwrap();
        assert_eq!(root.text_node().unwrap().font_weight, Some(700));
        assert_eq!(root.text_node().unwrap().color.as_deref(), Some("#ff0000"));
        assert_eq!(root.text_align, Some(TextAlign::Left));
        assert_eq!(root.justify_content, Some(FlexAlign::Start));
        assert_eq!(root.align_items, Some(FlexAlign::End));
    }

    #[test]
    fn unknown_alignment_values_are_ignored() {
        let mut tb = text_box();
        tb.render();
        tb.set("align", "justify".into()).unwrap();
        tb.set("verticalAlign", "baseline".into()).unwrap();
        let root = tb.core().root().unwrap();
        assert_eq!(tb.align(), "justify");
        assert_eq!(root.text_align, Some(TextAlign::Center));
        assert_eq!(root.align_items, Some(FlexAlign::Center));
    }

    #[test]
    fn smaller_stops_at_one() {
        let mut tb = text_box();
        tb.set("size", 5.into()).unwrap();
        assert!(tb.apply("Smaller"));
        assert_eq!(tb.size(), 4);

        tb.set("size", 1.into()).unwrap();
        assert!(tb.apply("Smaller"));
        assert_eq!(tb.size(), 1);
    }

    #[test]
    fn bigger_always_grows() {
        let mut tb = text_box();
        assert!(tb.apply("Bigger"));
        assert_eq!(tb.size(), 15);
        tb.set("size", "99".into()).unwrap();
        tb.apply("Bigger");
        assert_eq!(tb.size(), 100);
    }

    #[test]
    fn bigger_at_the_integer_limit_keeps_the_size() {
        let mut tb = text_box();
        tb.render();
        tb.set("size", i64::MAX.into()).unwrap();
        assert!(tb.apply("Bigger"));
        assert_eq!(tb.size(), i64::MAX);
        assert_eq!(tb.text_node().unwrap().font_size, Some(i64::MAX));
    }

    #[test]
    fn string_fields_store_the_display_form() {
        let mut tb = text_box();
        tb.render();
        assert!(tb.set("text", 5i64.into()).unwrap());
        assert_eq!(tb.text(), "5");
        assert_eq!(tb.text_node().unwrap().content, "5");

        tb.set("textColor", true.into()).unwrap();
        assert_eq!(tb.text_color(), "true");
    }

    #[test]
    fn editing_keeps_non_string_text() {
        let mut tb = text_box();
        tb.render();
        tb.set("text", 42i64.into()).unwrap();
        tb.editable().unwrap();
        assert_eq!(tb.buffer().value(), "42");
        assert!(tb.blur());
        assert_eq!(tb.text(), "42");
        assert_eq!(tb.core().state().str("text"), Some("42"));
        assert_eq!(tb.text_node().unwrap().content, tb.text());
    }

    #[test]
    fn style_toggles_flip_once_per_call() {
        let mut tb = text_box();
        tb.render();
        assert!(tb.apply("Bold"));
        assert!(tb.bold());
        assert!(tb.apply("Bold"));
        assert!(!tb.bold());

        tb.apply("Italic");
        tb.apply("Underline");
        assert!(tb.italic());
        assert!(tb.underline());
        let node = tb.text_node().unwrap();
        assert_eq!(node.font_style, Some(FontStyle::Italic));
        assert_eq!(node.text_decoration, Some(TextDecoration::Underline));
    }

    #[test]
    fn unrecognized_command_changes_nothing() {
        let mut tb = text_box();
        let before = tb.core().state().clone();
        assert!(!tb.apply("Unrecognized"));
        assert_eq!(tb.core().state(), &before);
    }

    #[test]
    fn edit_then_blur_commits_typed_text() {
        let mut tb = text_box();
        tb.editable().unwrap();
        assert!(tb.is_editing());
        assert_eq!(tb.buffer().selection(), Some((0, 4)));

        type_str(&mut tb, "Hi");
        assert_eq!(tb.text_node().unwrap().content, "Hi");
        assert_eq!(tb.text(), "Text");

        assert!(tb.blur());
        assert_eq!(tb.text(), "Hi");
        assert_eq!(tb.text_node().unwrap().content, tb.text());
        assert!(!tb.text_node().unwrap().editable);
        assert!(!tb.text_node().unwrap().focused);
        assert_eq!(tb.buffer().selection(), None);
        assert!(!tb.blur());
    }

    #[test]
    fn session_tracks_the_editing_box() {
        let session = EditSession::new();
        let mut tb = TextBox::new(TextBoxOptions::default(), session.clone()).unwrap();
        assert_eq!(session.active(), None);
        tb.editable().unwrap();
        assert_eq!(session.active(), Some(tb.id()));
        tb.blur();
        assert_eq!(session.active(), None);
    }

    #[test]
    fn second_box_cannot_edit_while_first_is_editing() {
        let session = EditSession::new();
        let mut first = TextBox::new(TextBoxOptions::default(), session.clone()).unwrap();
        let mut second = TextBox::new(TextBoxOptions::default(), session.clone()).unwrap();
        first.editable().unwrap();
        let err = second.editable().unwrap_err();
        assert_eq!(
            err,
            SessionError::AlreadyEditing {
                active: first.id(),
                requested: second.id()
            }
        );
        assert!(!second.is_editing());

        first.blur();
        second.editable().unwrap();
        assert_eq!(session.active(), Some(second.id()));
    }

    #[test]
    fn pointer_down_outside_commits() {
        let mut tb = text_box();
        tb.editable().unwrap();
        type_str(&mut tb, "Moved");
        tb.update(Message::PointerDown { column: 40, row: 10 });
        assert!(!tb.is_editing());
        assert_eq!(tb.text(), "Moved");
    }

    #[test]
    fn pointer_down_on_the_box_keeps_editing() {
        let mut tb = text_box();
        tb.editable().unwrap();
        assert_eq!(tb.hit(0, 0), HitTarget::Root);
        tb.update(Message::PointerDown { column: 0, row: 0 });
        assert!(tb.is_editing());

        assert_eq!(tb.hit(7, 1), HitTarget::Text);
        tb.update(Message::PointerDown { column: 7, row: 1 });
        assert!(tb.is_editing());
        assert_eq!(tb.buffer().cursor(), 1);
        assert_eq!(tb.buffer().selection(), None);
    }

    #[test]
    fn pointer_down_is_ignored_when_not_editing() {
        let mut tb = text_box();
        tb.render();
        tb.update(Message::PointerDown { column: 40, row: 10 });
        assert!(!tb.is_editing());
        assert_eq!(tb.text(), "Text");
    }

    #[test]
    fn modifier_enter_commits_and_selects_once() {
        let mut tb = text_box();
        tb.editable().unwrap();
        type_str(&mut tb, "Done");
        let cmd = press(&mut tb, KeyCode::Enter, KeyModifiers::CONTROL);
        assert_eq!(cmd.into_messages(), vec![Message::Select(tb.id())]);
        assert!(!tb.is_editing());
        assert_eq!(tb.text(), "Done");

        let cmd = press(&mut tb, KeyCode::Enter, KeyModifiers::CONTROL);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_key_enter_also_commits() {
        let mut tb = text_box();
        tb.editable().unwrap();
        let cmd = press(&mut tb, KeyCode::Enter, KeyModifiers::SUPER);
        assert_eq!(cmd.into_messages().len(), 1);
        assert!(!tb.is_editing());
    }

    #[test]
    fn formatting_shortcuts_are_swallowed() {
        let mut tb = text_box();
        tb.editable().unwrap();
        press(&mut tb, KeyCode::Char('b'), KeyModifiers::CONTROL);
        press(&mut tb, KeyCode::Char('I'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        press(&mut tb, KeyCode::Char('u'), KeyModifiers::SUPER);
        assert_eq!(tb.text_node().unwrap().content, "Text");
        assert_eq!(tb.buffer().selection(), Some((0, 4)));
        assert!(!tb.bold());
        assert!(!tb.italic());
        assert!(!tb.underline());
    }

    #[test]
    fn enter_inserts_newline_and_escape_commits() {
        let mut tb = text_box();
        tb.editable().unwrap();
        type_str(&mut tb, "a");
        press(&mut tb, KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut tb, "b");
        let cmd = press(&mut tb, KeyCode::Esc, KeyModifiers::NONE);
        assert!(cmd.is_none());
        assert_eq!(tb.text(), "a\nb");
    }

    #[test]
    fn keys_are_ignored_outside_edit_mode() {
        let mut tb = text_box();
        tb.render();
        type_str(&mut tb, "zzz");
        assert_eq!(tb.text_node().unwrap().content, "Text");
    }

    #[test]
    fn backspace_and_select_all() {
        let mut tb = text_box();
        tb.editable().unwrap();
        press(&mut tb, KeyCode::End, KeyModifiers::NONE);
        press(&mut tb, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(tb.text_node().unwrap().content, "Tex");
        press(&mut tb, KeyCode::Char('a'), KeyModifiers::CONTROL);
        press(&mut tb, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(tb.text_node().unwrap().content, "");
    }

    #[test]
    fn up_and_down_move_across_lines() {
        let mut tb = TextBox::new(
            TextBoxOptions::default().with_text("abc\ndef"),
            EditSession::new(),
        )
        .unwrap();
        tb.editable().unwrap();
        press(&mut tb, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 7);

        press(&mut tb, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 3);
        press(&mut tb, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 7);

        press(&mut tb, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 6);
        press(&mut tb, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 2);
        press(&mut tb, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 0);
        // the column is remembered across vertical moves
        press(&mut tb, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(tb.buffer().cursor(), 6);
    }

    #[test]
    fn paste_inserts_plain_text_over_selection() {
        let mut tb = text_box();
        tb.editable().unwrap();
        let data = ClipboardData::new()
            .with(crate::clipboard::HTML, "<b>rich</b>")
            .with(crate::clipboard::PLAIN_TEXT, "plain\r\ntext");
        tb.update(Message::Paste(data));
        assert_eq!(tb.text_node().unwrap().content, "plain\ntext");
        tb.blur();
        assert_eq!(tb.text(), "plain\ntext");
    }

    #[test]
    fn paste_uses_legacy_entry_and_ignores_rich_only() {
        let mut tb = text_box();
        tb.editable().unwrap();
        assert!(!tb.paste(&ClipboardData::new().with(crate::clipboard::HTML, "<i>x</i>")));
        assert_eq!(tb.text_node().unwrap().content, "Text");
        assert!(tb.paste(&ClipboardData::new().with(crate::clipboard::LEGACY_TEXT, "old")));
        assert_eq!(tb.text_node().unwrap().content, "old");
    }

    #[test]
    fn paste_is_ignored_outside_edit_mode() {
        let mut tb = text_box();
        tb.render();
        assert!(!tb.paste(&ClipboardData::plain("nope")));
        assert_eq!(tb.text_node().unwrap().content, "Text");
    }

    #[test]
    fn listeners_follow_edit_state() {
        let mut tb = text_box();
        assert_eq!(tb.listeners(), Listeners::default());
        tb.editable().unwrap();
        assert_eq!(
            tb.listeners(),
            Listeners {
                key_filter: true,
                pointer_guard: true,
                paste: true
            }
        );
        tb.blur();
        assert_eq!(tb.listeners(), Listeners::default());
    }

    #[test]
    fn setting_text_while_editing_reloads_buffer() {
        let mut tb = text_box();
        tb.editable().unwrap();
        tb.set("text", "Replaced".into()).unwrap();
        assert_eq!(tb.buffer().value(), "Replaced");
        assert_eq!(tb.text_node().unwrap().content, "Replaced");
    }

    #[test]
    fn view_centers_text_in_the_box() {
        let mut tb = text_box();
        tb.render();
        let screen = screen(&tb, 16, 3);
        let rows: Vec<&str> = screen.lines().collect();
        assert_eq!(rows[1], "      Text      ");
        assert_eq!(rows[0].trim(), "");
    }

    #[test]
    fn view_follows_alignment() {
        let mut tb = text_box();
        tb.render();
        tb.set("align", "right".into()).unwrap();
        tb.set("verticalAlign", "top".into()).unwrap();
        let screen = screen(&tb, 16, 3);
        assert_eq!(screen.lines().next(), Some("            Text"));
    }

    #[test]
    fn view_wraps_long_text() {
        let mut tb = TextBox::new(
            TextBoxOptions::default()
                .with_text("the quick brown fox")
                .with_align("left")
                .with_vertical_align("top")
                .with_dimensions(10, 3),
            EditSession::new(),
        )
        .unwrap();
        tb.render();
        let screen = screen(&tb, 10, 3);
        let rows: Vec<&str> = screen.lines().collect();
        assert_eq!(rows[0], "the quick ");
        assert_eq!(rows[1], "brown fox ");
    }

    #[test]
    fn view_paints_style_and_fill() {
        let mut tb = TextBox::new(
            TextBoxOptions::default()
                .with_color("#0000ff")
                .with_text_color("#ff0000")
                .with_bold(true),
            EditSession::new(),
        )
        .unwrap();
        tb.render();
        let terminal = draw(&tb, 16, 3);
        let buf = terminal.backend().buffer();
        let glyph = &buf[(6, 1)];
        assert_eq!(glyph.symbol(), "T");
        assert_eq!(glyph.fg, ratatui::style::Color::Rgb(255, 0, 0));
        assert!(glyph.modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(0, 0)].bg, ratatui::style::Color::Rgb(0, 0, 255));
    }

    #[test]
    fn view_highlights_selection_while_editing() {
        let mut tb = text_box();
        tb.editable().unwrap();
        let terminal = draw(&tb, 16, 3);
        let buf = terminal.backend().buffer();
        assert!(buf[(6, 1)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn unrendered_box_draws_nothing_and_hits_nothing() {
        let tb = text_box();
        assert_eq!(screen(&tb, 16, 3).trim(), "");
        assert_eq!(tb.hit(1, 1), HitTarget::Outside);
    }
}
