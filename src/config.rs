// src/config.rs
//
// Configuration (optionnelle): fichier TOML en lecture seule.
// Natif : <config_dir>/calculatrice_tactile/config.toml
// Web   : toujours Config::default()

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thème au lancement.
    pub theme: Theme,
    pub fenetre: FenetreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenetreConfig {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Sombre,
            fenetre: FenetreConfig::default(),
        }
    }
}

impl Default for FenetreConfig {
    fn default() -> Self {
        Self {
            largeur: 340.0,
            hauteur: 480.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture impossible: {0}")]
    Lecture(#[from] std::io::Error),
    #[error("TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

impl Config {
    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(contenu)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub fn chemin() -> std::path::PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("calculatrice_tactile")
            .join("config.toml")
    }

    /// Fichier absent => défauts. Fichier illisible => défauts + avertissement.
    pub fn charger() -> Self {
        let chemin = Self::chemin();
        match Self::lire(&chemin) {
            Ok(Some(config)) => {
                tracing::info!(chemin = %chemin.display(), "configuration chargée");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(chemin = %chemin.display(), erreur = %e, "configuration ignorée");
                Self::default()
            }
        }
    }

    fn lire(chemin: &std::path::Path) -> Result<Option<Self>, ErreurConfig> {
        if !chemin.exists() {
            return Ok(None);
        }
        let contenu = std::fs::read_to_string(chemin)?;
        Self::depuis_toml(&contenu).map(Some)
    }
}
