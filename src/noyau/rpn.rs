// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur des rationnels (pas de flottants)
//
// Règles de précédence (fixes):
// - signe unaire + / - : le plus fort, associatif à droite ("-2*3" = (-2)*3)
// - * et /              : ensuite, associatifs à gauche ("8/4/2" = 1)
// - + et - binaires     : les plus faibles, associatifs à gauche
//
// Un signe est unaire quand on n’attend PAS de valeur à sa gauche
// (début d’expression ou juste après un autre opérateur).

use std::fmt;

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurCalcul;
use super::jetons::{Operateur, Tok};

#[derive(Clone, Debug, PartialEq)]
pub enum ElemRpn {
    Num(BigRational),
    Binaire(Operateur),
    Unaire(Operateur),
}

impl fmt::Display for ElemRpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemRpn::Num(r) if r.is_integer() => write!(f, "{}", r.numer()),
            ElemRpn::Num(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            ElemRpn::Binaire(op) => write!(f, "{op}"),
            // notation usuelle des signes en RPN : "neg" / "pos"
            ElemRpn::Unaire(Operateur::Moins) => write!(f, "neg"),
            ElemRpn::Unaire(_) => write!(f, "pos"),
        }
    }
}

fn precedence(op: Operateur) -> i32 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Divise => 2,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ElemRpn>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::invalide("aucun jeton"));
    }

    let mut out: Vec<ElemRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<ElemRpn> = Vec::new();

    // “valeur” = un nombre déjà lu, sert à distinguer signe unaire / opérateur binaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(r) => {
                if prev_was_value {
                    return Err(ErreurCalcul::invalide("deux nombres consécutifs"));
                }
                out.push(ElemRpn::Num(r));
                prev_was_value = true;
            }

            Tok::Op(op) if !prev_was_value => match op {
                // préfixe : on empile sans rien dépiler
                Operateur::Plus | Operateur::Moins => ops.push(ElemRpn::Unaire(op)),
                Operateur::Fois | Operateur::Divise => {
                    return Err(ErreurCalcul::invalide(format!(
                        "opérateur '{op}' sans opérande gauche"
                    )));
                }
            },

            Tok::Op(op) => {
                // dépile tant que le sommet lie au moins aussi fort
                while let Some(top) = ops.last() {
                    let doit_pop = match top {
                        ElemRpn::Unaire(_) => true,
                        ElemRpn::Binaire(t) => precedence(*t) >= precedence(op),
                        ElemRpn::Num(_) => false,
                    };
                    if !doit_pop {
                        break;
                    }
                    if let Some(e) = ops.pop() {
                        out.push(e);
                    }
                }

                ops.push(ElemRpn::Binaire(op));
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurCalcul::invalide("opérateur sans opérande droite"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en rationnel exact.
pub fn eval_rpn(rpn: &[ElemRpn]) -> Result<BigRational, ErreurCalcul> {
    let mut st: Vec<BigRational> = Vec::new();

    for elem in rpn {
        match elem {
            ElemRpn::Num(r) => st.push(r.clone()),

            ElemRpn::Unaire(op) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurCalcul::invalide("signe sans argument"))?;
                st.push(match op {
                    Operateur::Moins => -x,
                    _ => x,
                });
            }

            ElemRpn::Binaire(op) => {
                let b = st
                    .pop()
                    .ok_or_else(|| ErreurCalcul::invalide("expression invalide"))?;
                let a = st
                    .pop()
                    .ok_or_else(|| ErreurCalcul::invalide("expression invalide"))?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b.is_zero() {
                            return Err(ErreurCalcul::invalide("division par zéro"));
                        }
                        a / b
                    }
                };
                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::invalide("expression invalide")),
    }
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[ElemRpn]) -> String {
    rpn.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
