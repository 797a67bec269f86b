use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::models::{DisplayState, PlaybackStatus};
use crate::mpris::{PlayerError, PlayerProxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlayPause,
    Stop,
    Next,
    Previous,
    Quit,
}

/// Fixed key table, in the order the footer lists it.
pub const KEY_BINDINGS: [(char, Command, &str); 5] = [
    (' ', Command::PlayPause, "play/pause"),
    ('n', Command::Next, "next"),
    ('p', Command::Previous, "previous"),
    ('s', Command::Stop, "stop"),
    ('q', Command::Quit, "quit"),
];

impl Command {
    /// Case-insensitive lookup in [`KEY_BINDINGS`].
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        KEY_BINDINGS
            .iter()
            .find(|(key, _, _)| *key == c)
            .map(|(_, command, _)| *command)
    }

    /// Only plain (or shifted) key presses map to commands; chorded keys,
    /// pointer and other events never do.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match key.code {
                    KeyCode::Char(c) => Self::from_char(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the player and what is shown for it.
pub struct PlayerController<P> {
    player: P,
    state: DisplayState,
}

impl<P: PlayerProxy> PlayerController<P> {
    pub fn new(player: P, connected_uri: impl Into<String>) -> Self {
        Self {
            player,
            state: DisplayState::new(connected_uri),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[cfg(test)]
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Poll the player and bring the display state up to date.
    pub fn refresh(&mut self) -> Result<(), PlayerError> {
        let status = self.player.status()?;
        if status == PlaybackStatus::Stopped {
            self.state.set_stopped();
        } else {
            let track = self.player.metadata()?;
            let position = self.player.position_micros()?;
            if self.state.track_id.as_deref() != Some(track.track_id.as_str()) {
                info!(
                    "Now playing {} ({})",
                    track.title,
                    track.url.as_deref().unwrap_or("no url")
                );
            }
            self.state.set_track(status, track, position);
        }
        debug!(
            "Refreshed: {} {}",
            self.state.status,
            self.state.position_line()
        );
        Ok(())
    }

    /// Every event is consumed here, whether or not it is bound.
    pub fn handle_event(&mut self, event: &Event) -> Result<Flow, PlayerError> {
        match Command::from_event(event) {
            Some(command) => self.dispatch(command),
            None => Ok(Flow::Continue),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow, PlayerError> {
        debug!("Dispatching {command:?}");
        match command {
            Command::PlayPause => self.player.play_pause()?,
            Command::Stop => self.player.stop()?,
            Command::Next => self.player.next()?,
            Command::Previous => self.player.previous()?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
