//! Core runtime for the **vellum** scene editor toolkit.
//!
//! `vellum-core` provides the traits, types, and runtime that every vellum
//! application is built on.  Programs follow the [Elm Architecture]: state is
//! changed only in **update**, drawn in **view**, and side effects are pushed
//! to the edges through [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect or outbound message returned from `update` |
//! | [`Subscription`] | Long-lived event source, diffed after every update |
//! | [`EditSession`] | The editor-wide "object being text-edited" slot |
//! | [`Program`] | Wires a [`Model`] to a real terminal |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod session;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, CursorStyle, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramHandle, ProgramOptions};
pub use session::{EditSession, ObjectId, SessionError};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::{terminal_events, TerminalEvents};

/// Run an application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run an application with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
