//! **vellum** -- a terminal scene editor toolkit built on [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything needed to build a
//! vellum application from a single dependency:
//!
//! ```toml
//! [dependencies]
//! vellum = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`vellum_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`EditSession`], [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`vellum_widgets`]
//!   (the canvas, text boxes, and their building blocks).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use vellum::widgets::canvas::{self, Canvas};
//! use vellum::widgets::TextBoxOptions;
//! use vellum::{Command, Component, Model, Subscription};
//! use ratatui::Frame;
//!
//! struct Scene {
//!     canvas: Canvas,
//! }
//!
//! impl Model for Scene {
//!     type Message = canvas::Message;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<canvas::Message>) {
//!         let mut canvas = Canvas::new();
//!         canvas.add(TextBoxOptions::default().with_text("Hello")).unwrap();
//!         (Scene { canvas }, Command::none())
//!     }
//!     fn update(&mut self, msg: canvas::Message) -> Command<canvas::Message> {
//!         self.canvas.update(msg)
//!     }
//!     fn view(&self, frame: &mut Frame) {
//!         self.canvas.view(frame, frame.area());
//!     }
//!     fn subscriptions(&self) -> Vec<Subscription<canvas::Message>> {
//!         self.canvas.subscriptions()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     vellum::run::<Scene>(()).await.unwrap();
//! }
//! ```

pub use vellum_core::*;
pub mod widgets {
    pub use vellum_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
