// src/noyau/erreur.rs

use thiserror::Error;

/// Échecs d’évaluation (expression mal formée).
///
/// Une division par zéro n’est PAS une erreur ici : elle donne un résultat
/// non fini (`inf` / `NaN`), que l’éditeur affiche comme "Error".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurEval {
    #[error("expression vide après assainissement")]
    ExpressionVide,

    #[error("début invalide: '{0}'")]
    DebutInvalide(char),

    #[error("répétition interdite: '{0}{0}'")]
    Repetition(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("jeton inattendu: '{0}'")]
    JetonInattendu(String),

    #[error("fin d’expression inattendue")]
    FinInattendue,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseNonOuverte,

    #[error("expression invalide")]
    Invalide,
}
