//! Noyau de la calculatrice express
//!
//! Organisation interne :
//! - erreur.rs   : ErreurEval (expression mal formée)
//! - jetons.rs   : assainissement + gardes + tokenisation
//! - rpn.rs      : shunting-yard + évaluation RPN (f64)
//! - eval.rs     : pipeline complet
//! - format.rs   : affichage (milliers, exponentiel, ∞) + forme texte
//! - segment.rs  : segment numérique final + lecture tolérante
//! - entree.rs   : événements d’entrée (jetons, actions, touches)
//! - editeur.rs  : contrôleur (expression + “vient d’évaluer”)

pub mod editeur;
pub mod entree;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod segment;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use editeur::{Affichage, Editeur};
pub use entree::Entree;
