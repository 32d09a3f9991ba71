//! Noyau — évaluation (pipeline réel)
//!
//! assainir -> gardes -> jetons -> RPN -> valeur f64
//!
//! Remarque : le résultat peut être non fini (division par zéro) ; c’est à l’appelant
//! de décider de l’affichage ("Error" côté éditeur, "∞" côté format).

use super::erreur::ErreurEval;
use super::jetons::{assainir, format_tokens, tokenize, verifier_gardes};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression.
///
/// - "" => 0
/// - caractères hors alphabet ignorés
/// - Err(..) si l’expression est mal formée
pub fn evaluer(expr: &str) -> Result<f64, ErreurEval> {
    if expr.is_empty() {
        return Ok(0.0);
    }

    // 1) Assainissement + gardes
    let propre = assainir(expr);
    verifier_gardes(&propre)?;

    // 2) Jetons
    let jetons = tokenize(&propre)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(expr, rpn = %format_tokens(&rpn), "RPN");

    // 4) Valeur
    eval_rpn(&rpn)
}
