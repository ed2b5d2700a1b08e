//! Live terminal keypad.
//!
//! Type on the number row as if it were a phone keypad. Presses are buffered
//! and the whole buffer is decoded again after every key to show a preview;
//! `#` or Enter sends the message. Esc, `q` or Ctrl-C quits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use old_phone_pad::core::process_into;
use old_phone_pad::input::{handle_key_event, should_quit, PressBuffer};
use old_phone_pad::logging::init_tracing;
use old_phone_pad::term::{KeypadScreen, KeypadView, TerminalRenderer};
use old_phone_pad::types::{Press, MAX_PRESSES};

fn main() -> Result<()> {
    init_tracing();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = KeypadView::default();
    let mut presses = PressBuffer::new();
    let mut sequence = String::with_capacity(MAX_PRESSES + 1);
    let mut preview = String::with_capacity(MAX_PRESSES);
    let mut sent = view.history();
    let mut notice: Option<String> = None;

    loop {
        let screen = KeypadScreen {
            presses: presses.as_chars(),
            preview: &preview,
            sent: sent.as_slice(),
            notice: notice.as_deref(),
        };
        term.draw(&view.render(&screen))?;

        // Resize and other events fall through to a redraw.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        let Some(press) = handle_key_event(key) else {
            continue;
        };
        notice = None;

        if press == Press::Send {
            presses.write_sequence(&mut sequence);
            let mut message = String::with_capacity(presses.len());
            process_into(&sequence, &mut message)?;
            info!(presses = presses.len(), letters = message.len(), "sent message");
            sent.push(message);
            presses.clear();
            preview.clear();
            continue;
        }

        // A full buffer still accepts backspace; it is compacted to make room.
        let stored = match press {
            Press::Backspace => presses.backspace(),
            _ => presses.push(press),
        };
        if !stored {
            debug!(?press, "press buffer full");
            notice = Some(format!(
                "Buffer full ({MAX_PRESSES} presses): press # to send or * to delete"
            ));
            continue;
        }
        presses.write_sequence(&mut sequence);
        process_into(&sequence, &mut preview)?;
    }
}
