//! src/noyau/accumulateur.rs
//!
//! Automate de saisie : tampon d’expression + drapeau “réinit en attente”.
//!
//! Contrats :
//! - Le tampon vaut "0", "Error", ou une suite de nombres séparés par un seul opérateur
//!   (au plus un `.` par nombre ; un résultat négatif peut commencer par `-`).
//! - Chaque transition se termine par un rendu, sauf le second `.` ignoré.
//! - Aucune dépendance à l’affichage : le rendu passe par le trait [`Rendu`].

use std::fmt;

use tracing::debug;

use super::eval::evaluer;
use super::jetons::Operateur;

/// Tampon initial (et après C).
pub const ZERO: &str = "0";

/// Marqueur d’échec affiché.
pub const ERREUR: &str = "Error";

/// Une touche de saisie (C et = ne passent jamais par ici).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saisie {
    /// Chiffre ASCII '0'..='9'.
    Chiffre(char),
    Point,
    Operateur(Operateur),
}

impl Saisie {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Chiffre(c)),
            '.' => Some(Self::Point),
            _ => Operateur::depuis_char(c).map(Self::Operateur),
        }
    }

    pub fn caractere(self) -> char {
        match self {
            Self::Chiffre(c) => c,
            Self::Point => '.',
            Self::Operateur(op) => op.symbole(),
        }
    }

    fn est_operateur(self) -> bool {
        matches!(self, Self::Operateur(_))
    }
}

impl fmt::Display for Saisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.caractere())
    }
}

/// Cible du rafraîchissement d’écran.
pub trait Rendu {
    fn afficher(&mut self, texte: &str);
}

/// Rendu muet (tests, usage sans écran).
#[derive(Clone, Copy, Debug, Default)]
pub struct SansRendu;

impl Rendu for SansRendu {
    fn afficher(&mut self, _texte: &str) {}
}

impl<F> Rendu for F
where
    F: FnMut(&str),
{
    fn afficher(&mut self, texte: &str) {
        self(texte)
    }
}

#[derive(Debug)]
pub struct Calculatrice<R: Rendu = SansRendu> {
    tampon: String,
    reinit_en_attente: bool,
    rendu: R,
}

impl Calculatrice<SansRendu> {
    pub fn new() -> Self {
        Self::avec_rendu(SansRendu)
    }
}

impl Default for Calculatrice<SansRendu> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rendu> Calculatrice<R> {
    /// Construit l’automate et pousse un premier rendu ("0").
    pub fn avec_rendu(rendu: R) -> Self {
        let mut calc = Self {
            tampon: String::new(),
            reinit_en_attente: false,
            rendu,
        };
        calc.effacer();
        calc
    }

    /// Texte courant (ce que l’écran doit montrer).
    pub fn texte(&self) -> &str {
        &self.tampon
    }

    pub fn en_attente_reinit(&self) -> bool {
        self.reinit_en_attente
    }

    pub fn rendu(&self) -> &R {
        &self.rendu
    }

    /* ------------------------ Actions ------------------------ */

    /// C : retour à "0", sans réinit en attente.
    pub fn effacer(&mut self) {
        self.tampon.clear();
        self.tampon.push_str(ZERO);
        self.reinit_en_attente = false;
        debug!("effacer");
        self.rafraichir();
    }

    /// Ajoute un chiffre, un point ou un opérateur.
    pub fn ajouter(&mut self, saisie: Saisie) {
        // 1) Après un "=" : un nombre repart de zéro, un opérateur enchaîne sur le résultat.
        if self.reinit_en_attente {
            self.reinit_en_attente = false;
            if !saisie.est_operateur() {
                self.remplacer(saisie);
                return;
            }
        }

        // 2) Après "Error" : on ne construit jamais sur le marqueur.
        if self.tampon == ERREUR {
            match saisie {
                Saisie::Chiffre(_) => self.remplacer(saisie),
                Saisie::Point => {
                    self.tampon = format!("{ZERO}.");
                    self.transition(saisie);
                }
                Saisie::Operateur(_) => {
                    debug!(%saisie, "opérateur ignoré sur Error");
                    self.rafraichir();
                }
            }
            return;
        }

        // 3) "0" initial remplacé par un chiffre.
        if self.tampon == ZERO && matches!(saisie, Saisie::Chiffre(_)) {
            self.remplacer(saisie);
            return;
        }

        // 4) Un seul point par nombre (pas de rendu).
        if saisie == Saisie::Point && self.dernier_nombre().contains('.') {
            debug!(tampon = %self.tampon, "point déjà présent, ignoré");
            return;
        }

        // 5) Deux opérateurs de suite : le dernier gagne.
        if saisie.est_operateur() && self.tampon.ends_with(Operateur::est_operateur) {
            self.tampon.pop();
        }

        self.tampon.push(saisie.caractere());
        self.transition(saisie);
    }

    /// = : évalue le tampon ; "Error" en cas d’échec. Réinit en attente dans tous les cas.
    pub fn calculer(&mut self) {
        match evaluer(&self.tampon) {
            Ok(v) => {
                debug!(expression = %self.tampon, resultat = %v, "calculer");
                self.tampon = v.to_string();
            }
            Err(e) => {
                debug!(expression = %self.tampon, raison = e.raison(), "calcul en échec");
                self.tampon.clear();
                self.tampon.push_str(ERREUR);
            }
        }
        self.reinit_en_attente = true;
        self.rafraichir();
    }

    /* ------------------------ Interne ------------------------ */

    /// Nombre en cours de saisie (après le dernier opérateur).
    fn dernier_nombre(&self) -> &str {
        self.tampon
            .rsplit(Operateur::est_operateur)
            .next()
            .unwrap_or("")
    }

    fn remplacer(&mut self, saisie: Saisie) {
        self.tampon.clear();
        self.tampon.push(saisie.caractere());
        self.transition(saisie);
    }

    fn transition(&mut self, saisie: Saisie) {
        debug!(%saisie, tampon = %self.tampon, "ajouter");
        self.rafraichir();
    }

    fn rafraichir(&mut self) {
        self.rendu.afficher(&self.tampon);
    }
}
