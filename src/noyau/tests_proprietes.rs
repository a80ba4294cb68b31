//! Tests de propriétés (campagne) : invariants de l’automate + évaluateur.
//!
//! But : vérifier les contrats “pavé” de bout en bout, touche par touche.
//! - séquences de chiffres : identité numérique
//! - C : toujours "0" et pas de réinit en attente
//! - reprise après "Error"
//! - résultat réinjecté comme chiffres frais : même comportement qu’une calculatrice neuve

use super::accumulateur::{Calculatrice, Saisie, ERREUR};
use super::eval::evaluer;

fn taper(calc: &mut Calculatrice, touches: &str) {
    for c in touches.chars() {
        match c {
            '=' => calc.calculer(),
            'C' => calc.effacer(),
            _ => calc.ajouter(
                Saisie::depuis_char(c).unwrap_or_else(|| panic!("touche hors pavé: {c:?}")),
            ),
        }
    }
}

fn calcule(touches: &str) -> String {
    let mut calc = Calculatrice::new();
    taper(&mut calc, touches);
    calc.calculer();
    calc.texte().to_string()
}

/* ------------------------ Chiffres seuls ------------------------ */

#[test]
fn prop_chiffres_identite_numerique() {
    for (touches, attendu) in [
        ("0", "0"),
        ("7", "7"),
        ("42", "42"),
        ("1234567890", "1234567890"),
        ("000123", "123"),
        ("3.14159", "3.14159"),
        ("1.50", "1.5"),
        ("0.0001", "0.0001"),
        ("12.", "12"),
    ] {
        assert_eq!(calcule(touches), attendu, "touches={touches:?}");
    }
}

/* ------------------------ Cas du pavé ------------------------ */

#[test]
fn prop_double_operateur_reduit() {
    assert_eq!(calcule("5++3"), "8");
}

#[test]
fn prop_second_point_ignore() {
    let mut calc = Calculatrice::new();
    taper(&mut calc, "1..2");
    assert_eq!(calc.texte(), "1.2");
}

#[test]
fn prop_division_par_zero() {
    assert_eq!(calcule("5/0"), ERREUR);
    assert_eq!(calcule("0/0"), ERREUR);
}

#[test]
fn prop_reprise_apres_error() {
    let mut calc = Calculatrice::new();
    taper(&mut calc, "5/0=");
    assert_eq!(calc.texte(), ERREUR);
    taper(&mut calc, "7");
    assert_eq!(calc.texte(), "7");
    assert!(!calc.en_attente_reinit());
}

#[test]
fn prop_effacer_depuis_tout_etat() {
    for prefixe in ["", "5", "5+", "1.2*3", "9/0=", "2+2=", "2+2=*", "0.", "5/0=+"] {
        let mut calc = Calculatrice::new();
        taper(&mut calc, prefixe);
        calc.effacer();
        assert_eq!(calc.texte(), "0", "prefixe={prefixe:?}");
        assert!(!calc.en_attente_reinit(), "prefixe={prefixe:?}");
    }
}

#[test]
fn prop_precedence_et_arrondi() {
    assert_eq!(calcule("2+3*4"), "14");
    assert_eq!(calcule("1/3"), "0.3333333333");
    assert_eq!(calcule("2/3"), "0.6666666667");
    assert_eq!(calcule("0.1+0.2"), "0.3");
}

/* ------------------------ Réinjection du résultat ------------------------ */

#[test]
fn prop_resultat_reinjecte_comme_neuf() {
    // résultats positifs : réinjectés touche par touche dans une calculatrice neuve
    for expr in ["12*3", "1/4", "10/4+0.5", "7", "100-1"] {
        let resultat = calcule(expr);
        assert_ne!(resultat, ERREUR, "expr={expr:?}");

        // chemin 1 : calculatrice “usée”, résultat affiché puis saisie fraîche
        let mut usee = Calculatrice::new();
        taper(&mut usee, expr);
        usee.calculer();
        taper(&mut usee, &resultat);
        taper(&mut usee, "+1=");

        // chemin 2 : calculatrice neuve
        let mut neuve = Calculatrice::new();
        taper(&mut neuve, &resultat);
        taper(&mut neuve, "+1=");

        assert_eq!(usee.texte(), neuve.texte(), "expr={expr:?}");
    }
}

#[test]
fn prop_resultat_reevalue_stable() {
    // évaluer le texte d’un résultat redonne ce même texte
    for expr in ["2/3", "-7*3", "1/8", "123456789*987654321"] {
        let v = evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let texte = v.to_string();
        let v2 = evaluer(&texte).unwrap_or_else(|e| panic!("texte={texte:?} err={e}"));
        assert_eq!(v, v2, "expr={expr:?}");
    }
}
