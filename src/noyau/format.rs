// src/noyau/format.rs

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Nombre de décimales conservées à l’affichage.
pub const DECIMALES: usize = 10;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r -> entier “scalé” = round(r * 10^digits), moitié loin de zéro.
fn rational_scaled_arrondi(r: &BigRational, digits: usize) -> BigInt {
    let deux = BigInt::from(2);
    let n = r.numer().abs() * pow10(digits) * &deux + r.denom();
    let q = n / (r.denom() * &deux);
    if r.is_negative() {
        -q
    } else {
        q
    }
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal le plus court :
/// pas de zéros finaux, pas de point final, jamais "-0".
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/* ------------------------ Valeur affichable ------------------------ */

/// Résultat d’une évaluation réussie, déjà arrondi à [`DECIMALES`] décimales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Valeur {
    scaled: BigInt,
}

impl Valeur {
    pub fn arrondie(r: &BigRational) -> Self {
        Self {
            scaled: rational_scaled_arrondi(r, DECIMALES),
        }
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&scaled_to_decimal(self.scaled.clone(), DECIMALES))
    }
}
