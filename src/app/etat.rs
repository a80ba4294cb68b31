//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier la calculatrice du noyau à un écran, et porter le thème.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `touches::dispatcher`.
//! - L’écran est mis à jour uniquement par le rendu de la calculatrice.
//! - Le thème ne touche jamais la calculatrice (et inversement).

use crate::config::Config;
use crate::noyau::{Calculatrice, Rendu};

use super::theme::Theme;
use super::touches::dispatcher;

/// Écran : dernier texte poussé par la calculatrice.
#[derive(Clone, Debug, Default)]
pub struct Ecran {
    pub texte: String,
}

impl Rendu for Ecran {
    fn afficher(&mut self, texte: &str) {
        self.texte.clear();
        self.texte.push_str(texte);
    }
}

#[derive(Debug)]
pub struct AppCalc {
    pub calc: Calculatrice<Ecran>,
    pub theme: Theme,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            calc: Calculatrice::avec_rendu(Ecran::default()),
            theme: config.theme,
        }
    }

    /// Texte à afficher (tenu par l’écran, pas lu dans le tampon).
    pub fn ecran(&self) -> &str {
        &self.calc.rendu().texte
    }

    /// Clic sur un bouton du pavé (valeur logique).
    pub fn appuyer(&mut self, valeur: &str) {
        dispatcher(&mut self.calc, valeur);
        tracing::debug!(
            ecran = self.ecran(),
            reinit = self.calc.en_attente_reinit(),
            "bouton {valeur}"
        );
    }

    /// Clic sur le bouton de thème.
    pub fn basculer_theme(&mut self) {
        self.theme.basculer();
    }
}
