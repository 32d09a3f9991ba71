// src/app.rs
//
// Calculatrice express — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + theme.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, natif + web) :
// - chiffres . + - * / % = : via les événements texte
// - Enter / Backspace / Escape : via les événements touche

pub mod etat;
pub mod theme;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Entree;

impl AppCalc {
    /// Construction au démarrage : thème lu dans le stockage (ou thème système).
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let systeme_sombre = cc.egui_ctx.system_theme() == Some(egui::Theme::Dark);
        let sombre = theme::charger(cc.storage, systeme_sombre);
        tracing::info!(sombre, systeme_sombre, "thème au démarrage");

        theme::appliquer(&cc.egui_ctx, sombre);
        Self::avec_theme(sombre)
    }

    fn basculer_et_enregistrer(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let sombre = self.basculer_theme();
        theme::appliquer(ctx, sombre);

        match frame.storage_mut() {
            Some(storage) => theme::enregistrer(storage, sombre),
            None => tracing::warn!("stockage indisponible : thème non enregistré"),
        }
        tracing::info!(sombre, "thème basculé");
    }
}

/// Nom façon DOM des touches non textuelles qu’on écoute.
fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        egui::Key::Escape => Some("Escape"),
        _ => None,
    }
}

/// Entrées clavier de la frame, dans l’ordre d’arrivée.
fn entrees_clavier(ctx: &egui::Context) -> Vec<Entree> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(texte) => {
                    // un caractère à la fois (collage, saisie rapide)
                    let mut tampon = [0u8; 4];
                    for c in texte.chars() {
                        out.extend(Entree::depuis_touche(c.encode_utf8(&mut tampon)));
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => out.extend(nom_touche(*key).and_then(Entree::depuis_touche)),
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        for entree in entrees_clavier(ctx) {
            self.entree(entree);
        }

        let mut theme_clique = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            theme_clique = self.ui(ui); // méthode publique (dans vue.rs)
        });

        if theme_clique {
            self.basculer_et_enregistrer(ctx, frame);
        }
    }
}
