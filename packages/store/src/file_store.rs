//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that keeps the bearer token
//! in a small TOML file so a native build stays signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml       # access_token = "..."
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/sportschool/` |
//! | Linux | `~/.local/share/sportschool/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\sportschool\` |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::session::{normalize_token, SessionStore};

/// On-disk shape of `session.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

/// Filesystem-backed SessionStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// The well-known filename for the session file.
    pub fn filename() -> &'static str {
        "session.toml"
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(Self::filename())
    }

    fn write(&self, file: &SessionFile) {
        let content = match toml::to_string_pretty(file) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialise session file: {}", e);
                return;
            }
        };
        let _ = std::fs::create_dir_all(&self.base);
        if let Err(e) = std::fs::write(self.session_path(), content) {
            tracing::warn!("Failed to write {}: {}", self.session_path().display(), e);
        }
    }
}

impl SessionStore for FileStore {
    async fn token(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        let file: SessionFile = toml::from_str(&content).ok()?;
        normalize_token(file.access_token.as_deref()?)
    }

    async fn set_token(&self, token: &str) {
        self.write(&SessionFile {
            access_token: normalize_token(token),
        });
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}
