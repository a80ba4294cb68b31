// src/app.rs
//
// Calculatrice: module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, theme, touches)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Pas de raccourcis clavier : la saisie passe uniquement par les boutons.

pub mod etat;
pub mod theme;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Le thème est appliqué à chaque frame : un clic sur le bouton suffit.
        ctx.set_visuals(self.theme.visuals());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
