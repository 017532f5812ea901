use serde::Deserialize;
use std::path::PathBuf;

fn default_no_ref_point() -> bool {
    false
}
fn default_keep_voids() -> bool {
    false
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML config supplying defaults for the CLI.
///
/// Command-line arguments win over config values.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Default target section name for `import`
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default = "default_no_ref_point")]
    pub no_ref_point: bool,
    #[serde(default = "default_keep_voids")]
    pub keep_voids: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Search the usual config locations and load the first parseable file.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("decksect.toml"));
    paths.push(PathBuf::from(".decksect.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("decksect").join("config.toml"));
        paths.push(config_dir.join("decksect.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".decksect.toml"));
    }

    paths
}
