use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

/// Comic site endpoints and image URL layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Homepage that embeds the newest page's image URL.
    pub homepage_url: String,
    /// Site-relative image URL prefix; also the scan anchor in the homepage markup.
    pub image_prefix: String,
    /// File extension appended after the padded page number.
    pub image_suffix: String,
    /// Page numbers are zero-padded to this many digits in image filenames.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
}

fn default_pad_width() -> usize {
    6
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            homepage_url: "http://samandfuzzy.com".to_string(),
            image_prefix: "/comics/image_".to_string(),
            image_suffix: ".jpg".to_string(),
            pad_width: default_pad_width(),
        }
    }
}

/// One volume of the comic: a named, contiguous run of pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeEntry {
    /// Display name.
    pub name: String,
    /// One-line description shown in listings.
    pub blurb: String,
    /// Human-readable page range. The newest volume carries only its start
    /// label; its end is resolved live against the site.
    pub range: String,
    /// First page number of the volume.
    pub start_page: u32,
}

/// Global configuration loaded from `~/.config/cvr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComicConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    /// Volume table, oldest first. Index 0 is volume 0.
    pub volumes: Vec<VolumeEntry>,
}

fn volume(name: &str, blurb: &str, range: &str, start_page: u32) -> VolumeEntry {
    VolumeEntry {
        name: name.to_string(),
        blurb: blurb.to_string(),
        range: range.to_string(),
        start_page,
    }
}

impl Default for ComicConfig {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            http: HttpConfig::default(),
            volumes: vec![
                volume("Volume 0", "Classic strips from the comic's first run", "1-272", 1),
                volume("Volume 1", "The pre-reboot era", "273-556", 273),
                volume("Volume 2", "The Noosehead tour", "557-912", 557),
                volume("Volume 3", "Aftermath and new management", "913-1253", 913),
                volume("Volume 4", "The conspiracy years", "1254-1568", 1254),
                volume("Volume 5", "Current run", "1569", 1569),
            ],
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cvr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ComicConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ComicConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ComicConfig = toml::from_str(&data)?;
    Ok(cfg)
}
