// src/noyau/erreur.rs

use thiserror::Error;

/// Seule erreur du noyau : toute faute (caractère interdit, entrée vide,
/// syntaxe, division par zéro, résultat non fini) finit ici.
///
/// La raison sert au journal et aux tests ; l’écran n’affiche que `"Error"`.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("expression invalide: {0}")]
    ExpressionInvalide(String),
}

impl ErreurCalcul {
    pub fn invalide(raison: impl Into<String>) -> Self {
        Self::ExpressionInvalide(raison.into())
    }

    pub fn raison(&self) -> &str {
        match self {
            Self::ExpressionInvalide(r) => r,
        }
    }
}
