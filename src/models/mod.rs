use std::fmt;
use std::str::FromStr;

/// Text shown for track fields while nothing is loaded.
pub const PLACEHOLDER: &str = "n/a";

const MICROS_PER_SECOND: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackStatus::Playing => write!(f, "Playing"),
            PlaybackStatus::Paused => write!(f, "Paused"),
            PlaybackStatus::Stopped => write!(f, "Stopped"),
        }
    }
}

impl FromStr for PlaybackStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Playing" => Ok(PlaybackStatus::Playing),
            "Paused" => Ok(PlaybackStatus::Paused),
            "Stopped" => Ok(PlaybackStatus::Stopped),
            _ => Err(format!("Invalid playback status: {s}")),
        }
    }
}

/// Track details as reported by the remote player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub track_id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub url: Option<String>,
    pub length_micros: u64,
}

/// Snapshot of everything the TUI shows. Only the refresh cycle writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub status: PlaybackStatus,
    pub track_id: Option<String>,
    pub position: u64,
    pub length: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    connected_uri: String,
}

impl DisplayState {
    pub fn new(connected_uri: impl Into<String>) -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            track_id: None,
            position: 0,
            length: 0,
            title: PLACEHOLDER.to_string(),
            artist: PLACEHOLDER.to_string(),
            album: PLACEHOLDER.to_string(),
            connected_uri: connected_uri.into(),
        }
    }

    pub fn connected_uri(&self) -> &str {
        &self.connected_uri
    }

    /// Reset every track field, whatever was shown before.
    pub fn set_stopped(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.track_id = None;
        self.position = 0;
        self.length = 0;
        self.title = PLACEHOLDER.to_string();
        self.artist = PLACEHOLDER.to_string();
        self.album = PLACEHOLDER.to_string();
    }

    pub fn set_track(&mut self, status: PlaybackStatus, track: TrackMetadata, position_micros: u64) {
        self.status = status;
        self.track_id = Some(track.track_id);
        self.position = micros_to_secs(position_micros);
        self.length = micros_to_secs(track.length_micros);
        self.title = track.title;
        self.artist = track.artist;
        self.album = track.album;
    }

    /// `position / length`, e.g. `1:05 / 3:05`.
    pub fn position_line(&self) -> String {
        format!("{} / {}", format_time(self.position), format_time(self.length))
    }
}

/// Whole seconds, truncating.
pub fn micros_to_secs(micros: u64) -> u64 {
    micros / MICROS_PER_SECOND
}

/// Minutes are never wrapped into hours.
pub fn format_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes}:{seconds:02}")
}
