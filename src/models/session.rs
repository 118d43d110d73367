use serde::{Deserialize, Serialize};

/// UI color scheme, persisted across runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted user session: at most a username and a theme choice.
///
/// An empty username means logged out and is omitted from the stored
/// document, so logging out removes the key rather than writing `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default)]
    pub theme: Theme,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        !self.username.is_empty()
    }
}
