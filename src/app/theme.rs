// src/app/theme.rs
//
// Préférence de thème (sombre / clair)
// ------------------------------------
// - Une seule clé dans le stockage eframe (fichier en natif, localStorage en web)
// - Valeur "1" (sombre) ou "0" (clair)
// - Absente : on suit la préférence du système

use eframe::egui;

/// Clé fixe dans le stockage.
pub const CLE_THEME: &str = "calc_theme_dark";

/// Lit la préférence ; repli sur le thème système si la clé est absente ou vide.
pub fn charger(storage: Option<&dyn eframe::Storage>, systeme_sombre: bool) -> bool {
    match storage.and_then(|s| s.get_string(CLE_THEME)) {
        Some(v) if !v.is_empty() => v == "1",
        _ => systeme_sombre,
    }
}

/// Écrit la préférence (à chaque bascule).
pub fn enregistrer(storage: &mut dyn eframe::Storage, sombre: bool) {
    let valeur = if sombre { "1" } else { "0" };
    storage.set_string(CLE_THEME, valeur.to_string());
    storage.flush();
}

pub fn appliquer(ctx: &egui::Context, sombre: bool) {
    ctx.set_theme(if sombre {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
}

/// Libellé du bouton de thème (thème courant).
pub fn libelle(sombre: bool) -> &'static str {
    if sombre {
        "Dark"
    } else {
        "Light"
    }
}
