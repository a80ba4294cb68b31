// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::ErreurCalcul;

/// Les quatre opérateurs du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    pub fn est_operateur(c: char) -> bool {
        Self::depuis_char(c).is_some()
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),
    Op(Operateur),
}

/// Caractères admis : chiffres, `.` et `+ - * /`. Rien d’autre (pas d’espace).
pub fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || Operateur::est_operateur(c)
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux `12`, `1.5`, `5.`, `.5` (au moins un chiffre)
/// - opérateurs + - * /
///
/// Refuse:
/// - tout caractère hors de l’alphabet du pavé
/// - un second `.` collé au même littéral (`1.2.3`, `5..5`)
/// - `++` et `--` (incrément/décrément, jamais un double signe)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if !caractere_autorise(c) {
            return Err(ErreurCalcul::invalide(format!("caractère interdit: '{c}'")));
        }

        if let Some(op) = Operateur::depuis_char(c) {
            if matches!(op, Operateur::Plus | Operateur::Moins) && chars.get(i + 1) == Some(&c) {
                return Err(ErreurCalcul::invalide(format!("séquence interdite: '{c}{c}'")));
            }
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres* [ '.' chiffres* ]
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let entier: String = chars[start..i].iter().collect();

        let mut fraction = String::new();
        if i < chars.len() && chars[i] == '.' {
            i += 1;
            let start_f = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            fraction = chars[start_f..i].iter().collect();
        }

        if entier.is_empty() && fraction.is_empty() {
            return Err(ErreurCalcul::invalide("point décimal sans chiffre"));
        }
        if i < chars.len() && chars[i] == '.' {
            return Err(ErreurCalcul::invalide("deux points dans un même nombre"));
        }

        out.push(Tok::Num(decimal_exact(&entier, &fraction)?));
    }

    Ok(out)
}

/// "12" + "34" -> 1234/100, exact.
fn decimal_exact(entier: &str, fraction: &str) -> Result<BigRational, ErreurCalcul> {
    let mut chiffres = String::with_capacity(entier.len() + fraction.len());
    chiffres.push_str(entier);
    chiffres.push_str(fraction);

    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurCalcul::invalide("nombre invalide"))?;
    let d = BigInt::from(10).pow(fraction.len() as u32);

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(r) if r.is_integer() => format!("{}", r.numer()),
            Tok::Num(r) => format!("{}/{}", r.numer(), r.denom()),
            Tok::Op(op) => op.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
