use crate::command::{Action, Command, CommandInner, TerminalCommand};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Immediate messages ([`Command::message`]) are queued and flushed by
/// [`drain_messages`](TestProgram::drain_messages); terminal commands are
/// recorded; async commands are dropped.
///
/// ```rust,ignore
/// let mut prog = TestProgram::<Editor>::new(());
/// prog.send(Msg::Key(KeyCode::Enter.into()));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 10).contains("Text"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    terminal_commands: Vec<TerminalCommand>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create the program by calling [`Model::init`].
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            terminal_commands: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Run one update with `msg`. Resulting messages stay queued.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Messages produced but not yet processed.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Terminal commands returned so far, oldest first.
    pub fn terminal_commands(&self) -> &[TerminalCommand] {
        &self.terminal_commands
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shared access to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model, bypassing messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render into a buffer of the given size.
    ///
    /// # Panics
    ///
    /// Panics if the test backend fails to draw, which only happens on a
    /// zero-sized area.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible cells as newline-separated rows.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Future(_) => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            CommandInner::Terminal(tcmd) => self.terminal_commands.push(tcmd),
        }
    }
}

/// Flatten a buffer into newline-separated rows of cell symbols.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Switch {
        on: bool,
        log: Vec<&'static str>,
    }

    #[derive(Debug)]
    enum SwitchMsg {
        Toggle,
        Announce,
        Title,
        Quit,
    }

    impl Model for Switch {
        type Message = SwitchMsg;
        type Flags = bool;

        fn init(on: bool) -> (Self, Command<SwitchMsg>) {
            (Switch { on, log: vec![] }, Command::none())
        }

        fn update(&mut self, msg: SwitchMsg) -> Command<SwitchMsg> {
            match msg {
                SwitchMsg::Toggle => {
                    self.on = !self.on;
                    self.log.push("toggle");
                    Command::message(SwitchMsg::Announce)
                }
                SwitchMsg::Announce => {
                    self.log.push("announce");
                    Command::none()
                }
                SwitchMsg::Title => Command::set_title("switch"),
                SwitchMsg::Quit => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let label = if self.on { "on" } else { "off" };
            frame.render_widget(Paragraph::new(label), frame.area());
        }
    }

    #[test]
    fn init_uses_flags() {
        let prog = TestProgram::<Switch>::new(true);
        assert!(prog.model().on);
    }

    #[test]
    fn send_updates_and_queues_follow_up() {
        let mut prog = TestProgram::<Switch>::new(false);
        prog.send(SwitchMsg::Toggle);
        assert!(prog.model().on);
        assert_eq!(prog.pending().len(), 1);
        prog.drain_messages();
        assert_eq!(prog.model().log, vec!["toggle", "announce"]);
        assert!(prog.pending().is_empty());
    }

    #[test]
    fn terminal_commands_and_quit_are_recorded() {
        let mut prog = TestProgram::<Switch>::new(false);
        prog.send(SwitchMsg::Title);
        prog.send(SwitchMsg::Quit);
        assert_eq!(
            prog.terminal_commands(),
            &[TerminalCommand::SetTitle("switch".into())]
        );
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_shows_state() {
        let mut prog = TestProgram::<Switch>::new(false);
        assert!(prog.render_string(10, 1).starts_with("off"));
        prog.send(SwitchMsg::Toggle);
        assert!(prog.render_string(10, 1).starts_with("on"));
    }

    #[test]
    fn render_string_separates_rows() {
        let prog = TestProgram::<Switch>::new(true);
        let out = prog.render_string(4, 3);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out, "on  \n    \n    ");
    }
}
