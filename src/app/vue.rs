// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux lignes d’affichage : expression (petite) + valeur (grande)
// - Pavé 4 colonnes, gros boutons (tactile)
// - Bouton de thème (Dark / Light)
//
// Note :
// - Le clavier est géré dans app.rs (global), pas ici.
// - Après un clic, le bouton rend le focus : sinon Enter le “recliquerait”.

use eframe::egui;

use super::etat::AppCalc;
use super::theme;
use crate::noyau::Entree;

/// Pavé 6×4 : (libellé, code), `None` pour une case vide.
/// Le code est une valeur ("7", "%") ou un nom d’action ("sqrt").
const PAVE: [[Option<(&str, &str)>; 4]; 6] = [
    [Some(("C", "clear")), Some(("( )", "paren")), Some(("%", "%")), Some(("⌫", "back"))],
    [Some(("x²", "square")), Some(("√", "sqrt")), Some(("±", "sign")), Some(("/", "/"))],
    [Some(("7", "7")), Some(("8", "8")), Some(("9", "9")), Some(("×", "*"))],
    [Some(("4", "4")), Some(("5", "5")), Some(("6", "6")), Some(("−", "-"))],
    [Some(("1", "1")), Some(("2", "2")), Some(("3", "3")), Some(("+", "+"))],
    [Some(("0", "0")), Some((".", ".")), Some(("=", "equals")), None],
];

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    ///
    /// Retourne true si le bouton de thème a été cliqué (la persistance a besoin du Frame).
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        let mut theme_clique = false;

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui
                    .add(egui::Button::new(theme::libelle(self.theme_sombre)))
                    .on_hover_text("Basculer thème sombre / clair");
                if resp.clicked() {
                    theme_clique = true;
                    resp.surrender_focus();
                }
            });
        });

        ui.add_space(6.0);
        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);

        theme_clique
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let aff = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(&aff.expression).monospace().weak());
                    // résultat d’un "=" mis en avant
                    let valeur = egui::RichText::new(&aff.valeur).size(32.0);
                    if self.editeur.vient_d_evaluer() {
                        ui.label(valeur.strong());
                    } else {
                        ui.label(valeur);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for case in rangee {
                        match case {
                            Some((libelle, code)) => self.bouton(ui, libelle, code),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, code: &str) {
        let Some(entree) = Entree::depuis_bouton(code) else {
            tracing::warn!(code, "code de bouton inconnu");
            ui.label("");
            return;
        };

        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(libelle));
        if resp.clicked() {
            self.entree(entree);
            resp.surrender_focus();
        }
    }
}
