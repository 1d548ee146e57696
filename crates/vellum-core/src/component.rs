use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`].
///
/// Scene objects and the canvas that hosts them are components.  A parent
/// owns its children, forwards messages to them, and lifts their commands
/// into its own message type with [`Command::map`].  Outbound events (for
/// example a text box asking to become selected) travel the same way: the
/// child returns `Command::message(..)` and the parent matches on it.
///
/// ```rust,ignore
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Canvas(m) => self.canvas.update(m).map(AppMsg::Canvas),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.canvas.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`].
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must stay inside the rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Active subscriptions for this component. Defaults to none.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently takes keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
