use std::cell::RefCell;

use super::{PlayerError, PlayerProxy};
use crate::models::{PlaybackStatus, TrackMetadata};

/// Remote calls seen by a [`FakePlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Status,
    Metadata,
    Position,
    PlayPause,
    Stop,
    Next,
    Previous,
}

/// In-memory player for driving the controller without a bus.
#[derive(Debug, Default)]
pub struct FakePlayer {
    pub status: PlaybackStatus,
    pub metadata: Option<TrackMetadata>,
    pub position_micros: u64,
    pub disconnected: bool,
    calls: RefCell<Vec<Call>>,
}

impl FakePlayer {
    pub fn playing(metadata: TrackMetadata, position_micros: u64) -> Self {
        Self {
            status: PlaybackStatus::Playing,
            metadata: Some(metadata),
            position_micros,
            ..Default::default()
        }
    }

    /// Every call fails as if the bus connection had dropped.
    pub fn disconnected() -> Self {
        Self {
            disconnected: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), PlayerError> {
        self.calls.borrow_mut().push(call);
        if self.disconnected {
            return Err(zbus::Error::Failure("player went away".to_string()).into());
        }
        Ok(())
    }
}

impl PlayerProxy for FakePlayer {
    fn status(&self) -> Result<PlaybackStatus, PlayerError> {
        self.record(Call::Status)?;
        Ok(self.status)
    }

    fn metadata(&self) -> Result<TrackMetadata, PlayerError> {
        self.record(Call::Metadata)?;
        self.metadata
            .clone()
            .ok_or(PlayerError::MetadataUnavailable { key: "mpris:trackid" })
    }

    fn position_micros(&self) -> Result<u64, PlayerError> {
        self.record(Call::Position)?;
        Ok(self.position_micros)
    }

    fn play_pause(&self) -> Result<(), PlayerError> {
        self.record(Call::PlayPause)
    }

    fn stop(&self) -> Result<(), PlayerError> {
        self.record(Call::Stop)
    }

    fn next(&self) -> Result<(), PlayerError> {
        self.record(Call::Next)
    }

    fn previous(&self) -> Result<(), PlayerError> {
        self.record(Call::Previous)
    }
}
