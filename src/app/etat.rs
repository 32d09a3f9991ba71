//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : posséder l’éditeur du noyau + la préférence de thème, et offrir
//! les opérations simples appelées par la vue et par le clavier.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Editeur::traiter`.
//! - Le thème est un simple booléen ; sa persistance vit dans theme.rs.

use crate::noyau::{Affichage, Editeur, Entree};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub editeur: Editeur,

    // --- présentation ---
    pub theme_sombre: bool,
}

impl AppCalc {
    pub fn avec_theme(theme_sombre: bool) -> Self {
        Self {
            editeur: Editeur::default(),
            theme_sombre,
        }
    }

    /// Transmet une entrée (clic ou touche) à l’éditeur.
    pub fn entree(&mut self, entree: Entree) {
        self.editeur.traiter(entree);
        tracing::trace!(expression = self.editeur.expression(), "après entrée");
    }

    /// Les deux lignes à afficher.
    pub fn affichage(&self) -> &Affichage {
        self.editeur.affichage()
    }

    /// Inverse le thème et retourne la nouvelle valeur.
    pub fn basculer_theme(&mut self) -> bool {
        self.theme_sombre = !self.theme_sombre;
        self.theme_sombre
    }
}
