//! Scene widgets for the **vellum** editor toolkit.
//!
//! Scene objects are [`vellum_core::Component`]s built on a shared base
//! ([`styled_box::BoxCore`]) that keeps their fields in a reactive state bag
//! and projects them onto a small node tree.  The [`canvas::Canvas`] hosts
//! them and routes terminal input.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Scene controller: selection, edit routing, style shortcuts |
//! | [`text_box`] | Styled text box with in-place editing |
//! | [`styled_box`] | Base box: geometry, state, root node, style-command hook |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Selection outline |
//! | [`clipboard`] | Multi-format paste payloads |
//! | [`key`] | Key-binding helpers |
//! | [`node`] | Node records and their CSS-like style values |
//! | [`runeutil`] | Sanitizing, display width, and line wrapping |
//! | [`state`] | State bag, field values, and binding maps |
//! | [`text_edit`] | Multi-line editing buffer with selection |

pub mod canvas;
pub mod chrome;
pub mod clipboard;
pub mod key;
pub mod node;
pub mod runeutil;
pub mod state;
pub mod styled_box;
pub mod text_box;
pub mod text_edit;

pub use canvas::Canvas;
pub use styled_box::{BoxCore, StyledBox};
pub use text_box::{TextBox, TextBoxOptions};
