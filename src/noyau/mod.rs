//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - accumulateur.rs : automate de saisie (tampon + réinit en attente) + trait Rendu
//! - eval.rs         : évaluation sûre (filtre -> jetons -> RPN -> rationnel -> arrondi)
//! - jetons.rs       : tokenisation du pavé (décimaux + opérateurs)
//! - rpn.rs          : shunting-yard + évaluation RPN exacte
//! - format.rs       : arrondi à 10 décimales + texte d’affichage
//! - erreur.rs       : ErreurCalcul (une seule sorte)

pub mod accumulateur;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::{Calculatrice, Rendu, Saisie};
