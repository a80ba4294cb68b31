//! src/app/touches.rs
//!
//! Table de routage : valeur logique d’un bouton -> action sur la calculatrice.
//! "C" efface, "=" calcule, le reste est une saisie.

use crate::noyau::{Calculatrice, Rendu, Saisie};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Saisie(Saisie),
    Effacer,
    Egal,
}

impl Touche {
    /// Valeur logique d’un bouton ("7", "+", "C", "=", …).
    pub fn depuis_valeur(valeur: &str) -> Option<Self> {
        let mut chars = valeur.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match c {
            'C' => Some(Touche::Effacer),
            '=' => Some(Touche::Egal),
            _ => Saisie::depuis_char(c).map(Touche::Saisie),
        }
    }
}

/// Dirige une valeur de bouton vers la bonne méthode. Valeur inconnue => ignorée.
pub fn dispatcher<R: Rendu>(calc: &mut Calculatrice<R>, valeur: &str) {
    match Touche::depuis_valeur(valeur) {
        Some(Touche::Effacer) => calc.effacer(),
        Some(Touche::Egal) => calc.calculer(),
        Some(Touche::Saisie(s)) => calc.ajouter(s),
        None => tracing::warn!(valeur, "bouton inconnu ignoré"),
    }
}
