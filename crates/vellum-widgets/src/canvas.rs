//! Scene controller.
//!
//! A [`Canvas`] owns the scene's text boxes, the selection, and the shared
//! [`EditSession`].  It receives raw terminal events and routes them:
//!
//! - While a box is editing, keys, pastes, and every pointer-down go to that
//!   box first, as declared by [`TextBox::listeners`].
//! - Otherwise a click selects the box under the pointer, a double-click or
//!   Enter starts editing it, and single-key shortcuts run style commands on
//!   the selection.
//!
//! Boxes talk back through their commands: a [`text_box::Message::Select`]
//! coming out of a box is routed back here and selects it.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use tracing::debug;
use vellum_core::{
    terminal_events, Command, Component, CursorStyle, EditSession, ObjectId, Subscription,
    TerminalEvent,
};

use crate::chrome::outline_block;
use crate::clipboard::ClipboardData;
use crate::key::{Binding, KeyCombination};
use crate::state::FieldError;
use crate::styled_box::StyledBox;
use crate::text_box::{self, TextBox, TextBoxOptions};

/// Default double-click window.
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Messages for the [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press.
    Key(KeyEvent),
    /// A mouse event in screen coordinates.
    Mouse(MouseEvent),
    /// Bracketed paste text.
    Paste(String),
    /// A message for (or from) one box.
    Box(ObjectId, text_box::Message),
    /// Add a box and select it.
    Add(TextBoxOptions),
    /// Remove a box.
    Remove(ObjectId),
}

/// Shortcuts active while no box is editing.
#[derive(Debug, Clone)]
pub struct CanvasKeys {
    /// Start editing the selection.
    pub edit: Binding,
    /// Toggle bold.
    pub bold: Binding,
    /// Toggle italic.
    pub italic: Binding,
    /// Toggle underline.
    pub underline: Binding,
    /// Grow the font.
    pub bigger: Binding,
    /// Shrink the font.
    pub smaller: Binding,
    /// Align left.
    pub align_left: Binding,
    /// Align center.
    pub align_center: Binding,
    /// Align right.
    pub align_right: Binding,
    /// Align to the top.
    pub align_top: Binding,
    /// Align to the middle.
    pub align_middle: Binding,
    /// Align to the bottom.
    pub align_bottom: Binding,
    /// Select the next box.
    pub next: Binding,
    /// Add a box.
    pub add: Binding,
    /// Remove the selection.
    pub delete: Binding,
}

impl Default for CanvasKeys {
    fn default() -> Self {
        let key = |c: char, description: &str| {
            Binding::new(KeyCombination::new(KeyCode::Char(c)), description)
        };
        Self {
            edit: Binding::new(KeyCombination::new(KeyCode::Enter), "enter edit"),
            bold: key('b', "b bold"),
            italic: key('i', "i italic"),
            underline: key('u', "u underline"),
            bigger: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Char('+')),
                    KeyCombination::new(KeyCode::Char('=')),
                ],
                "+ bigger",
            ),
            smaller: key('-', "- smaller"),
            align_left: key('l', "l left"),
            align_center: key('c', "c center"),
            align_right: key('r', "r right"),
            align_top: key('t', "t top"),
            align_middle: key('m', "m middle"),
            align_bottom: key('v', "v bottom"),
            next: Binding::new(KeyCombination::new(KeyCode::Tab), "tab next"),
            add: key('n', "n new box"),
            delete: Binding::new(KeyCombination::new(KeyCode::Delete), "del remove"),
        }
    }
}

impl CanvasKeys {
    /// Every binding, in display order.
    pub fn all(&self) -> [&Binding; 15] {
        [
            &self.edit,
            &self.bold,
            &self.italic,
            &self.underline,
            &self.bigger,
            &self.smaller,
            &self.align_left,
            &self.align_center,
            &self.align_right,
            &self.align_top,
            &self.align_middle,
            &self.align_bottom,
            &self.next,
            &self.add,
            &self.delete,
        ]
    }

    fn style_command(&self, key: &KeyEvent) -> Option<&'static str> {
        [
            (&self.bold, "Bold"),
            (&self.italic, "Italic"),
            (&self.underline, "Underline"),
            (&self.bigger, "Bigger"),
            (&self.smaller, "Smaller"),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, command)| command)
    }

    fn alignment(&self, key: &KeyEvent) -> Option<(&'static str, &'static str)> {
        [
            (&self.align_left, ("align", "left")),
            (&self.align_center, ("align", "center")),
            (&self.align_right, ("align", "right")),
            (&self.align_top, ("verticalAlign", "top")),
            (&self.align_middle, ("verticalAlign", "middle")),
            (&self.align_bottom, ("verticalAlign", "bottom")),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, field)| field)
    }
}

/// A scene of text boxes.
#[derive(Debug)]
pub struct Canvas {
    session: EditSession,
    boxes: Vec<TextBox>,
    selected: Option<ObjectId>,
    origin: Position,
    last_click: Option<(ObjectId, Instant)>,
    double_click: Duration,
    keys: CanvasKeys,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with its own edit session.
    pub fn new() -> Self {
        Self::with_session(EditSession::new())
    }

    /// Create an empty canvas sharing `session`.
    pub fn with_session(session: EditSession) -> Self {
        Self {
            session,
            boxes: Vec::new(),
            selected: None,
            origin: Position::new(0, 0),
            last_click: None,
            double_click: DOUBLE_CLICK,
            keys: CanvasKeys::default(),
        }
    }

    /// Screen cell where the canvas is drawn. Mouse events are translated
    /// by it; it should match the area passed to `view`.
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = Position::new(x, y);
        self
    }

    /// Set the double-click window.
    pub fn with_double_click(mut self, window: Duration) -> Self {
        self.double_click = window;
        self
    }

    /// Replace the shortcuts.
    pub fn with_keys(mut self, keys: CanvasKeys) -> Self {
        self.keys = keys;
        self
    }

    /// The shortcuts.
    pub fn keys(&self) -> &CanvasKeys {
        &self.keys
    }

    /// The shared edit session.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Create, render, and select a box.
    pub fn add(&mut self, options: TextBoxOptions) -> Result<ObjectId, FieldError> {
        let mut tb = TextBox::new(options, self.session.clone())?;
        tb.render();
        let id = tb.id();
        self.boxes.push(tb);
        self.selected = Some(id);
        debug!(%id, "box added");
        Ok(id)
    }

    /// Remove a box, committing it first if it is being edited.
    pub fn remove(&mut self, id: ObjectId) -> Option<TextBox> {
        let index = self.boxes.iter().position(|tb| tb.id() == id)?;
        let mut tb = self.boxes.remove(index);
        tb.blur();
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(%id, "box removed");
        Some(tb)
    }

    /// All boxes, bottom to top.
    pub fn boxes(&self) -> &[TextBox] {
        &self.boxes
    }

    /// A box by id.
    pub fn get(&self, id: ObjectId) -> Option<&TextBox> {
        self.boxes.iter().find(|tb| tb.id() == id)
    }

    /// A box by id.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut TextBox> {
        self.boxes.iter_mut().find(|tb| tb.id() == id)
    }

    /// The selected box.
    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// Select a box. Unknown ids clear the selection.
    pub fn select(&mut self, id: ObjectId) {
        self.selected = self.get(id).map(|tb| tb.id());
    }

    /// The box being edited, if any.
    pub fn editing(&self) -> Option<ObjectId> {
        self.session.active().filter(|&id| self.get(id).is_some())
    }

    /// Whether a box is being edited.
    pub fn is_editing(&self) -> bool {
        self.editing().is_some()
    }

    /// Topmost box containing the scene cell.
    pub fn box_at(&self, column: u16, row: u16) -> Option<ObjectId> {
        self.boxes
            .iter()
            .rev()
            .find(|tb| tb.core().contains(column, row))
            .map(|tb| tb.id())
    }

    fn forward(&mut self, id: ObjectId, msg: text_box::Message) -> Command<Message> {
        match self.get_mut(id) {
            Some(tb) => tb.update(msg).map(move |m| Message::Box(id, m)),
            None => {
                debug!(%id, "message for unknown box dropped");
                Command::none()
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        if key.kind == KeyEventKind::Release {
            return Command::none();
        }
        if let Some(id) = self.editing() {
            if self.get(id).is_some_and(|tb| tb.listeners().key_filter) {
                return self.forward(id, text_box::Message::Key(key));
            }
        }
        if self.keys.add.matches(&key) {
            let options = TextBoxOptions::default().at(0, self.free_row());
            if let Err(err) = self.add(options) {
                debug!(%err, "could not add box");
            }
            return Command::none();
        }
        if self.keys.next.matches(&key) {
            self.select_next();
            return Command::none();
        }
        let Some(id) = self.selected else {
            return Command::none();
        };

        if self.keys.edit.matches(&key) {
            return self.forward(id, text_box::Message::Edit);
        }
        if let Some(command) = self.keys.style_command(&key) {
            return self.forward(id, text_box::Message::Apply(command.to_owned()));
        }
        if let Some((field, value)) = self.keys.alignment(&key) {
            if let Some(tb) = self.get_mut(id) {
                if let Err(err) = tb.set(field, value.into()) {
                    debug!(%id, %err, "alignment rejected");
                }
            }
            return Command::none();
        }
        if self.keys.delete.matches(&key) {
            self.remove(id);
            return Command::none();
        }

        let (dx, dy): (i32, i32) = match key.code {
            KeyCode::Left => (-1, 0),
            KeyCode::Right => (1, 0),
            KeyCode::Up => (0, -1),
            KeyCode::Down => (0, 1),
            _ => return Command::none(),
        };
        if let Some(tb) = self.get_mut(id) {
            let rect = tb.rect();
            let x = (i32::from(rect.x) + dx).clamp(0, i32::from(u16::MAX)) as u16;
            let y = (i32::from(rect.y) + dy).clamp(0, i32::from(u16::MAX)) as u16;
            tb.move_to(x, y);
        }
        Command::none()
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return Command::none();
        }
        let scene = mouse
            .column
            .checked_sub(self.origin.x)
            .zip(mouse.row.checked_sub(self.origin.y));

        let mut cmds = Vec::new();
        if let Some(id) = self.editing() {
            if self.get(id).is_some_and(|tb| tb.listeners().pointer_guard) {
                let msg = match scene {
                    Some((column, row)) => text_box::Message::PointerDown { column, row },
                    None => text_box::Message::Commit,
                };
                cmds.push(self.forward(id, msg));
                if self.session.is_editing(id) {
                    return Command::batch(cmds);
                }
            }
        }

        match scene.and_then(|(column, row)| self.box_at(column, row)) {
            Some(id) => {
                let now = Instant::now();
                let double = self.last_click.is_some_and(|(last, at)| {
                    last == id && now.duration_since(at) <= self.double_click
                });
                self.selected = Some(id);
                if double {
                    self.last_click = None;
                    cmds.push(self.forward(id, text_box::Message::Edit));
                } else {
                    self.last_click = Some((id, now));
                }
            }
            None => {
                self.selected = None;
                self.last_click = None;
            }
        }
        Command::batch(cmds)
    }

    fn on_paste(&mut self, text: String) -> Command<Message> {
        match self.editing() {
            Some(id) if self.get(id).is_some_and(|tb| tb.listeners().paste) => {
                self.forward(id, text_box::Message::Paste(ClipboardData::from(text)))
            }
            _ => Command::none(),
        }
    }

    fn select_next(&mut self) {
        let next = match self
            .selected
            .and_then(|id| self.boxes.iter().position(|tb| tb.id() == id))
        {
            Some(index) => self.boxes.get(index + 1).or_else(|| self.boxes.first()),
            None => self.boxes.first(),
        };
        self.selected = next.map(|tb| tb.id());
    }

    fn free_row(&self) -> u16 {
        self.boxes
            .iter()
            .map(|tb| tb.rect().bottom().saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    fn route(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Key(key) => self.on_key(key),
            Message::Mouse(mouse) => self.on_mouse(mouse),
            Message::Paste(text) => self.on_paste(text),
            Message::Box(_, text_box::Message::Select(target)) => {
                self.select(target);
                Command::none()
            }
            Message::Box(id, msg) => self.forward(id, msg),
            Message::Add(options) => {
                if let Err(err) = self.add(options) {
                    debug!(%err, "could not add box");
                }
                Command::none()
            }
            Message::Remove(id) => {
                self.remove(id);
                Command::none()
            }
        }
    }
}

impl Component for Canvas {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let was_editing = self.is_editing();
        let cmd = self.route(msg);
        // Bar caret while a box has the keyboard.
        match (was_editing, self.is_editing()) {
            (false, true) => {
                Command::batch([cmd, Command::set_cursor_style(CursorStyle::SteadyBar)])
            }
            (true, false) => Command::batch([
                cmd,
                Command::set_cursor_style(CursorStyle::DefaultUserShape),
            ]),
            _ => cmd,
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let place = |tb: &TextBox| {
            let rect = tb.rect();
            Rect::new(
                area.x.saturating_add(rect.x),
                area.y.saturating_add(rect.y),
                rect.width,
                rect.height,
            )
            .intersection(area)
        };

        for tb in &self.boxes {
            let screen = place(tb);
            if !screen.is_empty() {
                tb.view(frame, screen);
            }
        }

        if let Some(tb) = self.selected.and_then(|id| self.get(id)) {
            let screen = place(tb);
            if screen.is_empty() {
                return;
            }
            let outline = Rect::new(
                screen.x.saturating_sub(1),
                screen.y.saturating_sub(1),
                screen.width.saturating_add(2),
                screen.height.saturating_add(2),
            )
            .intersection(area);
            let label = tb.id().to_string();
            frame.render_widget(outline_block(&label, tb.is_editing()), outline);
            // the outline may cover the box edge; repaint it on top
            tb.view(frame, screen);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        vec![terminal_events(|event| match event {
            TerminalEvent::Key(key) => Some(Message::Key(key)),
            TerminalEvent::Mouse(mouse) => Some(Message::Mouse(mouse)),
            TerminalEvent::Paste(text) => Some(Message::Paste(text)),
            _ => None,
        })]
    }

    fn focused(&self) -> bool {
        self.is_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use vellum_core::TerminalCommand;

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Run `msg` and feed every resulting message back, like the runtime.
    fn send(canvas: &mut Canvas, msg: Message) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            queue.extend(canvas.update(msg).into_messages());
        }
    }

    fn canvas_with_two() -> (Canvas, ObjectId, ObjectId) {
        let mut canvas = Canvas::new();
        let a = canvas
            .add(TextBoxOptions::default().with_text("A").at(0, 0))
            .unwrap();
        let b = canvas
            .add(TextBoxOptions::default().with_text("B").at(0, 5))
            .unwrap();
        (canvas, a, b)
    }

    #[test]
    fn add_renders_and_selects() {
        let (canvas, a, b) = canvas_with_two();
        assert_eq!(canvas.boxes().len(), 2);
        assert_eq!(canvas.selected(), Some(b));
        assert!(canvas.get(a).unwrap().text_node().is_some());
    }

    #[test]
    fn click_selects_and_empty_click_deselects() {
        let (mut canvas, a, _) = canvas_with_two();
        send(&mut canvas, click(1, 1));
        assert_eq!(canvas.selected(), Some(a));
        send(&mut canvas, click(40, 20));
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn double_click_starts_editing() {
        let (mut canvas, a, _) = canvas_with_two();
        send(&mut canvas, click(1, 1));
        assert!(!canvas.is_editing());
        send(&mut canvas, click(1, 1));
        assert_eq!(canvas.editing(), Some(a));
        assert!(canvas.get(a).unwrap().is_editing());
    }

    #[test]
    fn clicks_far_apart_in_time_are_not_a_double_click() {
        let (canvas, _, _) = canvas_with_two();
        let mut canvas = canvas.with_double_click(Duration::ZERO);
        send(&mut canvas, click(1, 1));
        std::thread::sleep(Duration::from_millis(2));
        send(&mut canvas, click(1, 1));
        assert!(!canvas.is_editing());
    }

    #[test]
    fn enter_edits_selection_and_keys_go_to_the_box() {
        let (mut canvas, _, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Enter));
        assert_eq!(canvas.editing(), Some(b));

        // style shortcuts are plain typing while editing
        send(&mut canvas, key(KeyCode::Char('b')));
        send(&mut canvas, key(KeyCode::Char('i')));
        let tb = canvas.get(b).unwrap();
        assert_eq!(tb.text_node().unwrap().content, "bi");
        assert!(!tb.bold());
    }

    #[test]
    fn caret_becomes_a_bar_while_editing() {
        let (mut canvas, _, _) = canvas_with_two();
        let begin = canvas.update(key(KeyCode::Enter));
        assert_eq!(
            begin.into_terminal_commands(),
            vec![TerminalCommand::SetCursorStyle(CursorStyle::SteadyBar)]
        );

        let typing = canvas.update(key(KeyCode::Char('x')));
        assert!(typing.into_terminal_commands().is_empty());

        let end = canvas.update(key(KeyCode::Esc));
        assert!(!canvas.is_editing());
        assert_eq!(
            end.into_terminal_commands(),
            vec![TerminalCommand::SetCursorStyle(CursorStyle::DefaultUserShape)]
        );
    }

    #[test]
    fn click_outside_commits_then_selects_what_was_hit() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Enter));
        send(&mut canvas, key(KeyCode::Char('x')));
        send(&mut canvas, click(1, 1));
        assert!(!canvas.is_editing());
        assert_eq!(canvas.get(b).unwrap().text(), "x");
        assert_eq!(canvas.selected(), Some(a));
    }

    #[test]
    fn click_inside_the_editing_box_keeps_editing() {
        let (mut canvas, _, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Enter));
        send(&mut canvas, click(0, 5));
        assert_eq!(canvas.editing(), Some(b));
    }

    #[test]
    fn modifier_enter_commits_and_selects_the_box() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, Message::Box(a, text_box::Message::Edit));
        assert_eq!(canvas.editing(), Some(a));
        assert_eq!(canvas.selected(), Some(b));

        let msgs = canvas
            .update(Message::Key(KeyEvent::new(
                KeyCode::Enter,
                KeyModifiers::CONTROL,
            )))
            .into_messages();
        assert_eq!(msgs, vec![Message::Box(a, text_box::Message::Select(a))]);
        for msg in msgs {
            send(&mut canvas, msg);
        }
        assert!(!canvas.is_editing());
        assert_eq!(canvas.selected(), Some(a));
    }

    #[test]
    fn only_one_box_edits_at_a_time() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, Message::Box(a, text_box::Message::Edit));
        send(&mut canvas, Message::Box(b, text_box::Message::Edit));
        assert_eq!(canvas.editing(), Some(a));
        assert!(!canvas.get(b).unwrap().is_editing());
    }

    #[test]
    fn style_shortcuts_apply_to_selection() {
        let (mut canvas, _, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Char('b')));
        send(&mut canvas, key(KeyCode::Char('+')));
        send(&mut canvas, key(KeyCode::Char('l')));
        send(&mut canvas, key(KeyCode::Char('t')));
        let tb = canvas.get(b).unwrap();
        assert!(tb.bold());
        assert_eq!(tb.size(), 15);
        assert_eq!(tb.align(), "left");
        assert_eq!(tb.vertical_align(), "top");
    }

    #[test]
    fn shortcuts_without_selection_do_nothing() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, click(40, 20));
        send(&mut canvas, key(KeyCode::Char('b')));
        assert!(!canvas.get(a).unwrap().bold());
        assert!(!canvas.get(b).unwrap().bold());
    }

    #[test]
    fn paste_goes_to_the_editing_box_only() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, Message::Paste("ignored".into()));
        assert_eq!(canvas.get(b).unwrap().text_node().unwrap().content, "B");

        send(&mut canvas, Message::Box(a, text_box::Message::Edit));
        send(&mut canvas, Message::Paste("pasted".into()));
        assert_eq!(canvas.get(a).unwrap().text_node().unwrap().content, "pasted");
    }

    #[test]
    fn tab_cycles_selection() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Tab));
        assert_eq!(canvas.selected(), Some(a));
        send(&mut canvas, key(KeyCode::Tab));
        assert_eq!(canvas.selected(), Some(b));
    }

    #[test]
    fn arrows_move_selection() {
        let (mut canvas, _, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Right));
        send(&mut canvas, key(KeyCode::Up));
        assert_eq!(canvas.get(b).unwrap().rect().x, 1);
        assert_eq!(canvas.get(b).unwrap().rect().y, 4);
        send(&mut canvas, key(KeyCode::Left));
        send(&mut canvas, key(KeyCode::Left));
        assert_eq!(canvas.get(b).unwrap().rect().x, 0);
    }

    #[test]
    fn add_key_places_box_below_the_rest() {
        let (mut canvas, _, _) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Char('n')));
        assert_eq!(canvas.boxes().len(), 3);
        let id = canvas.selected().unwrap();
        assert_eq!(canvas.get(id).unwrap().rect().y, 9);
    }

    #[test]
    fn removing_the_editing_box_releases_the_session() {
        let (mut canvas, a, _) = canvas_with_two();
        send(&mut canvas, Message::Box(a, text_box::Message::Edit));
        let removed = canvas.remove(a).unwrap();
        assert!(!removed.is_editing());
        assert_eq!(canvas.session().active(), None);
        assert!(canvas.get(a).is_none());
    }

    #[test]
    fn delete_key_removes_selection() {
        let (mut canvas, a, b) = canvas_with_two();
        send(&mut canvas, key(KeyCode::Delete));
        assert!(canvas.get(b).is_none());
        assert!(canvas.get(a).is_some());
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn mouse_events_are_translated_by_origin() {
        let (canvas, a, _) = canvas_with_two();
        let mut canvas = canvas.with_origin(10, 2);
        send(&mut canvas, click(11, 3));
        assert_eq!(canvas.selected(), Some(a));
        send(&mut canvas, click(1, 1));
        assert_eq!(canvas.selected(), None);
    }

    #[test]
    fn view_draws_boxes_and_outline() {
        let mut canvas = Canvas::new();
        let id = canvas
            .add(
                TextBoxOptions::default()
                    .with_text("Hi")
                    .with_align("left")
                    .with_vertical_align("top")
                    .at(2, 1),
            )
            .unwrap();
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                canvas.view(frame, area);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(2, 1)].symbol(), "H");
        assert_eq!(buf[(3, 1)].symbol(), "i");
        assert_eq!(buf[(1, 0)].symbol(), "┌");
        assert_eq!(buf[(18, 4)].symbol(), "┘");
        assert_eq!(buf[(2, 0)].symbol(), "#");
        assert!(canvas.get(id).is_some());
    }

    #[test]
    fn keys_list_every_shortcut() {
        let canvas = Canvas::new();
        let descriptions: Vec<&str> = canvas
            .keys()
            .all()
            .iter()
            .map(|b| b.description.as_str())
            .collect();
        assert!(descriptions.contains(&"b bold"));
        assert_eq!(descriptions.len(), 15);
    }
}
