use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use zbus::blocking::Connection;

use crate::about;
use crate::mpris::{self, BusPlayer, PlayerError};

#[derive(Parser, Debug)]
#[command(name = "mpristui")]
#[command(about = about::DESCRIPTION, version = about::VERSION)]
pub struct Cli {
    /// Player string to match on in D-BUS
    #[arg(short, long, default_value = "audacious")]
    pub player: String,
}

impl Cli {
    /// Connect to the first player on the session bus matching `--player`.
    pub fn connect(&self) -> Result<BusPlayer> {
        let conn = Connection::session().context("Failed to connect to the session bus")?;
        let available = mpris::list_players(&conn).context("Failed to list MPRIS players")?;
        debug!("Found {} MPRIS players", available.len());

        let uri = self.resolve(&available, &mut io::stdout())?;
        BusPlayer::open(&conn, uri).context("Failed to open player")
    }

    /// When nothing matches, the available players are listed on `out`
    /// before the error is returned.
    pub fn resolve(&self, available: &[String], out: &mut impl Write) -> Result<String> {
        match mpris::resolve_player(&self.player, available) {
            Ok(uri) => Ok(uri),
            Err(e @ PlayerError::NoMatchingPlayer { .. }) => {
                out.write_all(available_players(available).as_bytes())?;
                out.flush()?;
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn available_players(available: &[String]) -> String {
    let mut out = String::from("Available Player URIs:\n");
    for uri in available {
        out.push_str(&format!(" - {uri}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn available() -> Vec<String> {
        vec![
            "org.mpris.MediaPlayer2.audacious".to_string(),
            "org.mpris.MediaPlayer2.vlc".to_string(),
        ]
    }

    fn cli(player: &str) -> Cli {
        Cli::try_parse_from(["mpristui", "--player", player]).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn player_defaults_to_audacious() {
        let cli = Cli::try_parse_from(["mpristui"]).unwrap();
        assert_eq!(cli.player, "audacious");
    }

    #[test]
    fn player_accepts_short_and_long_forms() {
        assert_eq!(Cli::try_parse_from(["mpristui", "-p", "vlc"]).unwrap().player, "vlc");
        assert_eq!(cli("spotify").player, "spotify");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["mpristui", "--volume", "3"]).is_err());
    }

    #[test]
    fn about_comes_from_constants() {
        let command = Cli::command();
        assert_eq!(command.get_version(), Some(about::VERSION));
        assert_eq!(
            command.get_about().map(|about| about.to_string()),
            Some(about::DESCRIPTION.to_string())
        );
    }

    #[test]
    fn matching_player_prints_nothing() {
        let mut out = Vec::new();
        let uri = cli("vlc").resolve(&available(), &mut out).unwrap();

        assert_eq!(uri, "org.mpris.MediaPlayer2.vlc");
        assert!(out.is_empty());
    }

    #[test]
    fn no_match_lists_players_then_fails() {
        let mut out = Vec::new();
        let err = cli("foo").resolve(&available(), &mut out).unwrap_err();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Available Player URIs:\n - org.mpris.MediaPlayer2.audacious\n - org.mpris.MediaPlayer2.vlc\n"
        );
        match err.downcast_ref::<PlayerError>() {
            Some(PlayerError::NoMatchingPlayer { wanted, available: listed }) => {
                assert_eq!(wanted, "foo");
                assert_eq!(listed, &available());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_bus_prints_only_the_heading() {
        let mut out = Vec::new();
        assert!(cli("audacious").resolve(&[], &mut out).is_err());
        assert_eq!(String::from_utf8(out).unwrap(), "Available Player URIs:\n");
    }
}
