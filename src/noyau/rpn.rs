// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en refusant les formes mal construites
// - Puis évaluer la RPN en virgule flottante (IEEE-754)
//
// Règles:
// - Précédence : Neg (3) > * / (2) > + - (1), binaires associatifs à gauche
// - Moins unaire:
//    - si '-' arrive quand on attend une valeur => Tok::Neg (préfixe, associatif à droite)
//    - '+' unaire est neutre : ignoré
// - Division par zéro : pas une erreur (inf / NaN)

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, LPar, Num(1), Plus, Num(3), RPar]
///   rpn:    [Num(2), Num(1), Num(3), Plus, Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai en début d’expression, après un opérateur et après '('.
    let mut attend_valeur = true;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurEval::JetonInattendu(tok.to_string()));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                // "2(3)" : pas de multiplication implicite
                if !attend_valeur {
                    return Err(ErreurEval::JetonInattendu(tok.to_string()));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // "()" ou "(5+)"
                if attend_valeur {
                    return Err(ErreurEval::JetonInattendu(tok.to_string()));
                }
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEval::ParentheseNonOuverte),
                    }
                }
            }

            Tok::Minus if attend_valeur => {
                // préfixe : rien à dépiler
                ops.push(Tok::Neg);
            }

            Tok::Plus if attend_valeur => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurEval::JetonInattendu(tok.to_string()));
                }

                // dépile tant que le sommet n’est pas '(' et lie au moins autant
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    out.extend(ops.pop());
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(ErreurEval::JetonInattendu(tok.to_string())),
        }
    }

    if attend_valeur {
        return Err(ErreurEval::FinInattendue);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN produite par `to_rpn`.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Neg => {
                let a = st.pop().ok_or(ErreurEval::Invalide)?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurEval::Invalide)?;
                let a = st.pop().ok_or(ErreurEval::Invalide)?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Invalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::Invalide),
    }
}
