//! # Scene Editor Example
//!
//! A small scene of text boxes on a canvas:
//! - Click a box to select it, double-click (or Enter) to edit it in place
//! - Ctrl+Enter or Esc finishes editing; clicking elsewhere also commits
//! - `b`/`i`/`u`/`+`/`-` style the selection, `l`/`c`/`r` and `t`/`m`/`v` align it
//! - `n` adds a box, arrows move the selection, Delete removes it
//!
//! Logs go to `editor.log` (set `RUST_LOG` to change the level) since the
//! terminal belongs to the UI.
//!
//! Run with: `cargo run --example editor`

use vellum::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vellum::ratatui::layout::{Constraint, Layout};
use vellum::ratatui::style::{Color, Style};
use vellum::ratatui::text::{Line, Span};
use vellum::ratatui::widgets::Paragraph;
use vellum::ratatui::Frame;
use vellum::widgets::canvas::{self, Canvas};
use vellum::widgets::state::FieldError;
use vellum::widgets::TextBoxOptions;
use vellum::{Command, Component, Model, ProgramOptions, Subscription};

struct Editor {
    canvas: Canvas,
}

#[derive(Debug)]
enum Msg {
    Canvas(canvas::Message),
}

fn sample_scene() -> Result<Canvas, FieldError> {
    let mut canvas = Canvas::new();
    canvas.add(
        TextBoxOptions::default()
            .with_text("Quarterly report")
            .with_bold(true)
            .with_color("#1e3a5f")
            .with_text_color("#ffffff")
            .with_dimensions(30, 3)
            .at(2, 1),
    )?;
    canvas.add(
        TextBoxOptions::default()
            .with_text("Double-click me to edit. Long lines wrap at word boundaries.")
            .with_align("left")
            .with_vertical_align("top")
            .with_text_color("#e0e0e0")
            .with_dimensions(24, 4)
            .at(2, 6),
    )?;
    canvas.add(
        TextBoxOptions::default()
            .with_text("draft")
            .with_italic(true)
            .with_text_color("#ffb000")
            .with_dimensions(10, 1)
            .at(36, 2),
    )?;
    Ok(canvas)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

impl Model for Editor {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let canvas = sample_scene().unwrap_or_else(|err| {
            tracing::warn!(%err, "sample scene rejected, starting empty");
            Canvas::new()
        });
        (Editor { canvas }, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // Quit keys only count outside edit mode; Esc inside a box commits.
            Msg::Canvas(canvas::Message::Key(key))
                if !self.canvas.is_editing() && is_quit(&key) =>
            {
                Command::quit()
            }
            Msg::Canvas(m) => self.canvas.update(m).map(Msg::Canvas),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [canvas_area, status_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        self.canvas.view(frame, canvas_area);

        let key_style = Style::default().fg(Color::Cyan);
        let status = match self.canvas.editing() {
            Some(id) => Line::from(vec![
                Span::styled(format!("editing {id}"), key_style),
                Span::raw("  ctrl+enter select  esc finish"),
            ]),
            None => {
                let mut spans = vec![Span::styled("q quit", key_style)];
                for binding in self.canvas.keys().all() {
                    spans.push(Span::raw("  "));
                    spans.push(Span::raw(binding.description.as_str()));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            status_area,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        self.canvas
            .subscriptions()
            .into_iter()
            .map(|sub| sub.map(Msg::Canvas))
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = vellum::log_to_file("editor.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log))
        .with_ansi(false)
        .init();

    let options = ProgramOptions {
        title: Some("vellum editor".into()),
        ..Default::default()
    };
    vellum::run_with::<Editor>((), options).await?;
    Ok(())
}
