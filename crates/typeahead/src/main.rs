// ABOUTME: Terminal demo wiring the typeahead controller to a crossterm front end
// ABOUTME: Paints the field, ghost overlay, and candidate menu; forwards keys and clicks

mod source;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use futures::StreamExt;
use typeahead_core::{Controller, ControllerConfig, ControllerHandle};
use typeahead_events::Key;
use typeahead_logging::{LoggingConfig, info, init_logging_with_config};
use typeahead_types::{RenderFrame, RenderUpdate};

use crate::source::WordListSource;

/// Screen row the candidate list starts on (header, prompt, then the menu).
const LIST_TOP: u16 = 2;
const PROMPT: &str = "> ";

#[tokio::main]
async fn main() -> Result<()> {
    // Console output would fight the raw-mode screen; log to file only.
    let mut log_config = LoggingConfig::from_env()?;
    log_config.output.console = false;
    init_logging_with_config(log_config)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut stdout).await;

    execute!(stdout, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    result
}

async fn run(stdout: &mut io::Stdout) -> Result<()> {
    let (handle, mut updates, _task) = Controller::spawn(
        Arc::new(WordListSource::new()),
        ControllerConfig::default(),
    );
    info!("typeahead demo started");

    let mut field = String::new();
    let mut frame = RenderFrame::hidden();
    let mut events = EventStream::new();
    paint(stdout, &field, &frame)?;

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                match event.context("Failed to read terminal event")? {
                    Event::Key(key) => {
                        if is_quit(&key) {
                            break;
                        }
                        forward_key(&handle, &mut field, key).await;
                        paint(stdout, &field, &frame)?;
                    }
                    Event::Mouse(mouse) => forward_mouse(&handle, &frame, mouse).await,
                    _ => {}
                }
            }
            maybe_update = updates.recv() => {
                let Some(update) = maybe_update else { break };
                apply_update(&mut field, &mut frame, update);
                paint(stdout, &field, &frame)?;
            }
        }
    }

    info!("typeahead demo stopped");
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

async fn forward_key(handle: &ControllerHandle, field: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            field.push(c);
            handle.text_changed(field.clone()).await;
        }
        KeyCode::Backspace => {
            field.pop();
            handle.text_changed(field.clone()).await;
        }
        KeyCode::Tab => {
            handle.key(Key::Tab).await;
        }
        KeyCode::Enter => {
            handle.key(Key::Enter).await;
        }
        KeyCode::Esc => {
            handle.key(Key::Escape).await;
        }
        KeyCode::Up => {
            handle.key(Key::ArrowUp).await;
        }
        KeyCode::Down => {
            handle.key(Key::ArrowDown).await;
        }
        _ => {
            handle.key(Key::Other).await;
        }
    }
}

/// Map a left press to the candidate row under it, if any. Presses anywhere
/// else report no row and the controller ignores them.
async fn forward_mouse(handle: &ControllerHandle, frame: &RenderFrame, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let row = (mouse.row >= LIST_TOP)
        .then(|| (mouse.row - LIST_TOP) as usize)
        .filter(|index| frame.visible && *index < frame.items.len());
    handle.pointer(row).await;
}

fn apply_update(field: &mut String, frame: &mut RenderFrame, update: RenderUpdate) {
    if let Some(value) = update.field_override {
        *field = value;
    }
    *frame = update.frame;
}

fn paint(stdout: &mut io::Stdout, field: &str, frame: &RenderFrame) -> Result<()> {
    queue!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Dim),
        Print("typeahead demo. Tab accepts, arrows browse, Esc reverts, Ctrl-C quits."),
        SetAttribute(Attribute::Reset),
        cursor::MoveTo(0, 1),
        Print(PROMPT),
        Print(field),
    )?;

    // Ghost tail: the part of the overlay beyond what was typed, dimmed.
    let typed = field.chars().count();
    let tail: String = frame.overlay.chars().skip(typed).collect();
    if !tail.is_empty() {
        queue!(
            stdout,
            SetAttribute(Attribute::Dim),
            Print(&tail),
            SetAttribute(Attribute::Reset),
        )?;
    }

    if frame.visible {
        for (index, item) in frame.items.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, LIST_TOP + index as u16))?;
            if frame.highlighted == Some(index) {
                queue!(
                    stdout,
                    SetAttribute(Attribute::Reverse),
                    Print(format!(" {item} ")),
                    SetAttribute(Attribute::Reset),
                )?;
            } else {
                queue!(stdout, Print(format!(" {item} ")))?;
            }
        }
    }

    let cursor_col = (PROMPT.chars().count() + typed) as u16;
    queue!(stdout, cursor::MoveTo(cursor_col, 1))?;
    stdout.flush()?;
    Ok(())
}
