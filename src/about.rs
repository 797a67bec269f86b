/// Name shown in the TUI header.
pub const APP_NAME: &str = "TUI MPRIS2 Control";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn header() -> String {
    format!("{APP_NAME} v{VERSION}")
}
