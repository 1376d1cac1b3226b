/// Per-frame key state drained from the crossterm event queue
use crossterm::event::{self, Event, KeyCode};
use std::collections::HashSet;
use std::io;
use std::time::Duration;

/// Host-supplied key state.
///
/// The viewing pipeline never polls hardware; the front end reads key
/// state through this capability and hands the core nothing but the
/// resulting movement and rotation deltas.
pub trait InputSource {
    fn is_pressed(&self, key: KeyCode) -> bool;
}

/// Key presses observed since the last poll.
#[derive(Debug, Default)]
pub struct PolledKeys {
    pressed: HashSet<KeyCode>,
}

impl PolledKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every pending terminal event into this frame's key set.
    ///
    /// Terminals report discrete key events rather than held state, so a
    /// key counts as pressed for the frame in which an event for it
    /// arrived.
    pub fn poll(&mut self) -> io::Result<()> {
        self.pressed.clear();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                self.pressed.insert(key.code);
            }
        }
        Ok(())
    }
}

impl InputSource for PolledKeys {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}
