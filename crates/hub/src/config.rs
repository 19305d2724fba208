use std::fs;

use serde::Deserialize;
use shared::domain::ShipAddress;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub ship_port: u16,
    pub ships: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".into(),
            ship_port: 80,
            ships: vec!["198.51.100.10".into(), "203.0.113.45".into()],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    ship_port: Option<u16>,
    ships: Option<Vec<String>>,
}

/// Defaults, overridden by an optional `hub.toml` in the working directory,
/// overridden in turn by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("hub.toml") {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.bind_addr {
                settings.bind_addr = v;
            }
            if let Some(v) = file_cfg.ship_port {
                settings.ship_port = v;
            }
            if let Some(v) = file_cfg.ships {
                settings.ships = v;
            }
        }
    }

    if let Ok(v) = std::env::var("HUB_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("HUB_SHIP_PORT") {
        if let Ok(parsed) = v.parse::<u16>() {
            settings.ship_port = parsed;
        }
    }
    if let Ok(v) = std::env::var("HUB_SHIPS") {
        settings.ships = parse_ship_list(&v);
    }

    settings
}

/// Parses the comma-separated `HUB_SHIPS` form; blank segments are skipped.
pub fn parse_ship_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn roster(settings: &Settings) -> Vec<ShipAddress> {
    settings
        .ships
        .iter()
        .map(|host| ShipAddress::new(host.clone(), settings.ship_port))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_roster() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "0.0.0.0:5000");
        assert_eq!(settings.ship_port, 80);
        assert_eq!(settings.ships, vec!["198.51.100.10", "203.0.113.45"]);
    }

    #[test]
    fn parses_comma_separated_hosts() {
        assert_eq!(
            parse_ship_list("10.0.0.1, 10.0.0.2 ,,10.0.0.3"),
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
        assert!(parse_ship_list("").is_empty());
    }

    #[test]
    fn roster_applies_shared_ship_port() {
        let settings = Settings {
            ship_port: 8080,
            ships: vec!["10.0.0.1".into()],
            ..Default::default()
        };
        assert_eq!(roster(&settings), vec![ShipAddress::new("10.0.0.1", 8080)]);
    }
}
