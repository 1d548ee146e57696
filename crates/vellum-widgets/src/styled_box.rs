//! The base capability shared by every scene box.
//!
//! [`BoxCore`] owns what all boxes have in common: an [`ObjectId`], geometry,
//! the reactive [`StateBag`], the binding map, and the root node.  Concrete
//! boxes embed a `BoxCore` and expose it through the [`StyledBox`] trait,
//! registering their own bindings on the same map so a single setter drives
//! every projection.

use ratatui::layout::{Position, Rect};
use tracing::{debug, trace};
use vellum_core::ObjectId;

use crate::node::RootNode;
use crate::state::{Bindings, FieldError, StateBag, Value};

/// Geometry fields, all numeric.
pub const GEOMETRY: [&str; 4] = ["x", "y", "width", "height"];

/// Default box size in cells.
pub const DEFAULT_WIDTH: u16 = 16;
/// Default box height in cells.
pub const DEFAULT_HEIGHT: u16 = 3;

/// State, bindings, and root node of a scene box.
#[derive(Debug)]
pub struct BoxCore {
    id: ObjectId,
    state: StateBag,
    bindings: Bindings<RootNode>,
    root: Option<RootNode>,
}

impl BoxCore {
    /// Create a box of the given type and class.
    ///
    /// Geometry starts at the origin with the default size and is declared
    /// numeric. The fill `color` binding is registered here.
    pub fn new(type_name: &str, class_name: &str) -> Self {
        let mut state = StateBag::new();
        let defaults: [(&str, Value); 6] = [
            ("type", type_name.into()),
            ("className", class_name.into()),
            ("x", 0.into()),
            ("y", 0.into()),
            ("width", i64::from(DEFAULT_WIDTH).into()),
            ("height", i64::from(DEFAULT_HEIGHT).into()),
        ];
        for (key, value) in defaults {
            // Fresh bag, nothing declared yet: plain stores cannot fail.
            let _ = state.set(key, value);
        }

        let mut bindings = Bindings::new();
        bindings.on("color", on_color);

        let mut core = Self {
            id: ObjectId::next(),
            state,
            bindings,
            root: None,
        };
        for key in GEOMETRY {
            // Integers always pass numeric coercion.
            let _ = core.state.declare_number(key);
        }
        core
    }

    /// The box's identity.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The `type` attribute.
    pub fn type_name(&self) -> &str {
        self.state.str("type").unwrap_or_default()
    }

    /// The `className` attribute.
    pub fn class_name(&self) -> &str {
        self.state.str("className").unwrap_or_default()
    }

    /// The state bag.
    pub fn state(&self) -> &StateBag {
        &self.state
    }

    /// Declare `key` numeric, coercing its current value.
    pub fn declare_number(&mut self, key: &str) -> Result<(), FieldError> {
        self.state.declare_number(key)
    }

    /// Register a binding. Boxes call this while they are being built.
    pub fn bind(&mut self, key: &'static str, handler: crate::state::Handler<RootNode>) {
        self.bindings.on(key, handler);
    }

    /// The single setter: coerce, store, and project onto the root node.
    ///
    /// Bindings only run once the node tree exists and only when the stored
    /// value actually changed.  Returns whether it changed.
    pub fn set(&mut self, key: &str, value: Value) -> Result<bool, FieldError> {
        let stored = match self.state.set(key, value) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(false),
            Err(err) => {
                debug!(id = %self.id, %err, "field assignment rejected");
                return Err(err);
            }
        };
        trace!(id = %self.id, key, value = %stored, "field changed");
        if let Some(root) = self.root.as_mut() {
            self.bindings.fire(key, stored, root);
        }
        Ok(true)
    }

    /// Build the root node on first call, let `build` attach children, then
    /// fire every binding once.  Later calls return the existing tree.
    pub fn render_with(&mut self, build: impl FnOnce(&mut RootNode)) -> &RootNode {
        self.root.get_or_insert_with(|| {
            let mut root = RootNode::new(self.state.str("className").unwrap_or_default());
            build(&mut root);
            self.bindings.fire_all(&self.state, &mut root);
            debug!(id = %self.id, "box rendered");
            root
        })
    }

    /// The root node, once rendered.
    pub fn root(&self) -> Option<&RootNode> {
        self.root.as_ref()
    }

    /// The root node, once rendered.
    pub fn root_mut(&mut self) -> Option<&mut RootNode> {
        self.root.as_mut()
    }

    /// Base style commands. Plain boxes have none; concrete boxes consult
    /// this before their own commands.
    pub fn apply(&mut self, command: &str) -> bool {
        trace!(id = %self.id, command, "no base style command");
        false
    }

    /// Geometry in scene cells.
    pub fn rect(&self) -> Rect {
        let cell = |key: &str, default: u16| {
            self.state
                .int(key)
                .map_or(default, |n| n.clamp(0, i64::from(u16::MAX)) as u16)
        };
        Rect::new(
            cell("x", 0),
            cell("y", 0),
            cell("width", DEFAULT_WIDTH),
            cell("height", DEFAULT_HEIGHT),
        )
    }

    /// Whether the scene cell `(column, row)` lies inside the box.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.rect().contains(Position::new(column, row))
    }
}

fn on_color(value: &Value, root: &mut RootNode) {
    root.background = Some(value.to_string());
}

/// A scene object built on a [`BoxCore`].
pub trait StyledBox {
    /// The shared base.
    fn core(&self) -> &BoxCore;

    /// The shared base, mutably.
    fn core_mut(&mut self) -> &mut BoxCore;

    /// Materialize the node tree (idempotent).
    fn render(&mut self) -> &RootNode;

    /// Run a named style command. Returns whether anything handled it.
    fn apply(&mut self, command: &str) -> bool {
        self.core_mut().apply(command)
    }

    /// The object's identity.
    fn id(&self) -> ObjectId {
        self.core().id()
    }

    /// Geometry in scene cells.
    fn rect(&self) -> Rect {
        self.core().rect()
    }

    /// Move the box so its top-left corner sits at `(x, y)`.
    fn move_to(&mut self, x: u16, y: u16) {
        // Integers always pass numeric coercion.
        let _ = self.core_mut().set("x", i64::from(x).into());
        let _ = self.core_mut().set("y", i64::from(y).into());
    }
}
