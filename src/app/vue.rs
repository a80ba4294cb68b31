// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Un écran (texte aligné à droite) + pavé 4×4 + ligne C / thème
// - Tactile : gros boutons, chaque bouton envoie sa valeur logique

use eframe::egui;

use super::etat::AppCalc;

/// Taille d’un bouton du pavé.
const BOUTON: [f32; 2] = [64.0, 52.0];

/// Pavé : (libellé, valeur logique), ligne par ligne.
const PAVE: [[(&str, &str); 4]; 4] = [
    [("7", "7"), ("8", "8"), ("9", "9"), ("÷", "/")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("×", "*")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("−", "-")],
    [("0", "0"), (".", "."), ("=", "="), ("+", "+")],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            self.bouton(ui, "C", "C");

            let theme = ui
                .add_sized(BOUTON, egui::Button::new(self.theme.emoji()))
                .on_hover_text("Changer de thème");
            if theme.clicked() {
                self.basculer_theme();
            }
        });

        ui.add_space(6.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        // Affichage lecture seule, aligné à droite comme un écran de calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(self.ecran()).monospace().size(30.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, valeur) in ligne {
                        self.bouton(ui, libelle, valeur);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, valeur: &str) {
        let resp = ui.add_sized(BOUTON, egui::Button::new(egui::RichText::new(libelle).size(20.0)));
        if resp.clicked() {
            self.appuyer(valeur);
        }
    }
}
