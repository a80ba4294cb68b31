//! Noyau: évaluation sûre
//!
//! filtre alphabet -> jetons -> RPN -> rationnel exact -> contrôle fini -> arrondi
//!
//! Aucune exécution de code : seule la grammaire du pavé est reconnue.

use num_rational::BigRational;
use num_traits::{FromPrimitive, Signed};
use tracing::trace;

use super::erreur::ErreurCalcul;
use super::format::Valeur;
use super::jetons::{caractere_autorise, format_tokens, tokenize};
use super::rpn::{eval_rpn, format_rpn, to_rpn};

/// API publique : évalue une expression du pavé.
///
/// Toute faute donne `ErreurCalcul::ExpressionInvalide`, sans distinction.
pub fn evaluer(expression: &str) -> Result<Valeur, ErreurCalcul> {
    if expression.is_empty() {
        return Err(ErreurCalcul::invalide("entrée vide"));
    }
    if let Some(c) = expression.chars().find(|c| !caractere_autorise(*c)) {
        return Err(ErreurCalcul::invalide(format!("caractère interdit: '{c}'")));
    }

    // 1) Jetons
    let jetons = tokenize(expression)?;
    trace!(jetons = %format_tokens(&jetons), "jetons");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_rpn(&rpn), "rpn");

    // 3) Valeur exacte
    let exact = eval_rpn(&rpn)?;

    // 4) Fini (au sens double précision)
    if !est_fini(&exact) {
        return Err(ErreurCalcul::invalide("résultat non fini"));
    }

    // 5) Arrondi d’affichage
    Ok(Valeur::arrondie(&exact))
}

/// Vrai si |r| reste représentable en double précision.
fn est_fini(r: &BigRational) -> bool {
    match BigRational::from_f64(f64::MAX) {
        Some(max) => r.abs() <= max,
        None => false,
    }
}
