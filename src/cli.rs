use clap::Parser;
use std::path::{Path, PathBuf};

use poi_map::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "poi_map")]
#[command(about = "Serve an interactive map view for each point of interest")]
pub struct Cli {
    /// Settings file (defaults to poi_map.toml next to the executable)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Place shown at "/"
    #[arg(long)]
    pub place: Option<String>,

    /// Extra places to merge into the built-in table
    #[arg(long)]
    pub places_file: Option<PathBuf>,

    /// Open the map in the system browser once the server is up
    #[arg(long)]
    pub open: bool,

    /// Print the known places and exit
    #[arg(long)]
    pub list: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::config_path)
    }

    /// Command-line values win over the settings file.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(place) = &self.place {
            settings.default_place = place.clone();
        }
        if let Some(places_file) = &self.places_file {
            settings.places_file = Some(absolute_from_cwd(places_file));
        }
        if self.open {
            settings.open_browser = true;
        }
    }
}

// Paths given on the command line are relative to where the command ran,
// while paths in the settings file are relative to that file.
fn absolute_from_cwd(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from(["poi_map", "--port", "8080", "--place", "krishna-janmabhoomi", "--open"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.default_place, "krishna-janmabhoomi");
        assert!(settings.open_browser);
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn no_flags_keep_settings() {
        let cli = Cli::parse_from(["poi_map"]);
        let mut settings = Settings {
            port: 4000,
            open_browser: true,
            ..Settings::default()
        };
        cli.apply(&mut settings);

        assert_eq!(settings.port, 4000);
        assert!(settings.open_browser);
    }

    #[test]
    fn relative_places_file_is_made_absolute() {
        let cli = Cli::parse_from(["poi_map", "--places-file", "rel.toml"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);

        let expected = std::env::current_dir().unwrap().join("rel.toml");
        assert_eq!(settings.places_file, Some(expected));
    }

    #[test]
    fn saved_places_file_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("conf").join("poi_map.toml");

        let cli = Cli::parse_from(["poi_map", "--places-file", "rel.toml"]);
        let mut settings = Settings::default();
        cli.apply(&mut settings);
        settings.save_to(&config).unwrap();

        let reloaded = Settings::load_from(&config).unwrap();
        assert_eq!(reloaded.places_file, settings.places_file);
    }

    #[test]
    fn absolute_places_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let places = dir.path().join("places.toml");
        assert_eq!(absolute_from_cwd(&places), places);
    }
}
