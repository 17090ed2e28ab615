//! Reference data the schedule form picks from.

use serde::{Deserialize, Serialize};

/// A training group (`GET /groups`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// A hall or venue (`GET /halls`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hall {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub capacity: u32,
}

impl Hall {
    /// Option label, e.g. `"Hall 2 (30 places)"`.
    pub fn label(&self) -> String {
        if self.capacity == 0 {
            self.name.clone()
        } else {
            format!("{} ({} places)", self.name, self.capacity)
        }
    }
}
