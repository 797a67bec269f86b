use thiserror::Error;
use tracing::{info, warn};
use zbus::blocking::Connection;
use zbus::blocking::fdo::DBusProxy;
use zbus::proxy::CacheProperties;

use crate::models::{PlaybackStatus, TrackMetadata};

mod metadata;
#[cfg(test)]
pub mod fake;

/// Bus-name prefix shared by every MPRIS player.
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("No dbus players matched \"{wanted}\"")]
    NoMatchingPlayer {
        wanted: String,
        available: Vec<String>,
    },
    #[error("Player metadata is missing {key}")]
    MetadataUnavailable { key: &'static str },
    #[error("Unknown playback status: {0}")]
    UnknownStatus(String),
    #[error("Player is unavailable: {0}")]
    RemoteUnavailable(#[from] zbus::Error),
}

/// Everything the controller needs from a remote player. Every call goes
/// to the player; nothing is cached locally.
pub trait PlayerProxy {
    fn status(&self) -> Result<PlaybackStatus, PlayerError>;
    fn metadata(&self) -> Result<TrackMetadata, PlayerError>;
    fn position_micros(&self) -> Result<u64, PlayerError>;
    fn play_pause(&self) -> Result<(), PlayerError>;
    fn stop(&self) -> Result<(), PlayerError>;
    fn next(&self) -> Result<(), PlayerError>;
    fn previous(&self) -> Result<(), PlayerError>;
}

#[zbus::proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_path = "/org/mpris/MediaPlayer2",
    gen_async = false,
    blocking_name = "PlayerControlProxy"
)]
trait PlayerControl {
    fn play_pause(&self) -> zbus::Result<()>;
    fn stop(&self) -> zbus::Result<()>;
    fn next(&self) -> zbus::Result<()>;
    fn previous(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn playback_status(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn metadata(
        &self,
    ) -> zbus::Result<std::collections::HashMap<String, zbus::zvariant::OwnedValue>>;

    #[zbus(property)]
    fn position(&self) -> zbus::Result<i64>;
}

/// Pick the first available player whose bus name contains `wanted`.
pub fn resolve_player(wanted: &str, available: &[String]) -> Result<String, PlayerError> {
    available
        .iter()
        .find(|uri| uri.contains(wanted))
        .cloned()
        .ok_or_else(|| PlayerError::NoMatchingPlayer {
            wanted: wanted.to_string(),
            available: available.to_vec(),
        })
}

/// MPRIS bus names currently on the bus, in bus order.
pub fn list_players(conn: &Connection) -> Result<Vec<String>, PlayerError> {
    let names = DBusProxy::new(conn)?
        .list_names()
        .map_err(zbus::Error::from)?;

    Ok(names
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| name.starts_with(MPRIS_PREFIX))
        .collect())
}

/// A player reached over the session bus.
pub struct BusPlayer {
    uri: String,
    proxy: PlayerControlProxy<'static>,
}

impl BusPlayer {
    /// Bind to an already resolved player on `conn`.
    pub fn open(conn: &Connection, uri: String) -> Result<Self, PlayerError> {
        let proxy = PlayerControlProxy::builder(conn)
            .destination(uri.clone())?
            .cache_properties(CacheProperties::No)
            .build()?;

        info!("Connected to {uri}");
        Ok(Self { uri, proxy })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl PlayerProxy for BusPlayer {
    fn status(&self) -> Result<PlaybackStatus, PlayerError> {
        let status = self.proxy.playback_status()?;
        status.parse().map_err(|_| PlayerError::UnknownStatus(status))
    }

    fn metadata(&self) -> Result<TrackMetadata, PlayerError> {
        metadata::decode(&self.proxy.metadata()?)
    }

    fn position_micros(&self) -> Result<u64, PlayerError> {
        let position = self.proxy.position()?;
        Ok(u64::try_from(position).unwrap_or_else(|_| {
            warn!("Player reported negative position {position}");
            0
        }))
    }

    fn play_pause(&self) -> Result<(), PlayerError> {
        Ok(self.proxy.play_pause()?)
    }

    fn stop(&self) -> Result<(), PlayerError> {
        Ok(self.proxy.stop()?)
    }

    fn next(&self) -> Result<(), PlayerError> {
        Ok(self.proxy.next()?)
    }

    fn previous(&self) -> Result<(), PlayerError> {
        Ok(self.proxy.previous()?)
    }
}
