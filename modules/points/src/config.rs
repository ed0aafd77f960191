use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the points module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointsConfig {
    /// Base URL that derived `image_url` values are built from.
    #[serde(default = "default_public_url")]
    pub public_url: Url,
    /// Directory uploaded images are stored in and served from.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
    /// Upper bound for a registration request body, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
            uploads_dir: default_uploads_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_public_url() -> Url {
    // Literal URL, cannot fail to parse.
    #[allow(clippy::expect_used)]
    fn parse() -> Url {
        Url::parse("http://localhost:3333").expect("valid literal URL")
    }
    parse()
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}
