//! src/app/theme.rs
//!
//! Thème visuel sombre/clair, indépendant de la calculatrice.

use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    pub fn basculer(&mut self) {
        *self = match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        };
        tracing::info!(theme = ?self, "thème basculé");
    }

    /// Libellé du bouton : le thème vers lequel on irait.
    /// Soleil quand on est en sombre, lune quand on est en clair.
    pub fn emoji(self) -> &'static str {
        match self {
            Theme::Sombre => "🌞",
            Theme::Clair => "🌙",
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        }
    }
}
