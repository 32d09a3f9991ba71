// src/noyau/jetons.rs
//
// Assainissement + gardes + tokenisation
// --------------------------------------
// - assainir()        : ne garde que 0-9 . + - * / ( )
// - verifier_gardes() : refuse les formes mal construites évidentes
// - tokenize()        : texte assaini -> Vec<Tok>

use std::fmt;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Moins unaire : jamais produit par tokenize(), seulement par to_rpn().
    Neg,

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Neg => f.write_str("neg"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Caractères acceptés par l’évaluateur.
fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
}

/// Retire tout caractère hors de l’alphabet de l’évaluateur.
pub fn assainir(expr: &str) -> String {
    expr.chars().filter(|c| est_autorise(*c)).collect()
}

/// Gardes sur le texte assaini.
///
/// 1) pas de début par `*`, `/` ou `)`.
/// 2) après retrait des `--` (double négation), pas deux caractères identiques
///    consécutifs parmi `+ * / . -` (`5++6`, `5..6` refusés ; `5--6` accepté).
pub fn verifier_gardes(propre: &str) -> Result<(), ErreurEval> {
    let premier = propre.chars().next().ok_or(ErreurEval::ExpressionVide)?;
    if matches!(premier, '*' | '/' | ')') {
        return Err(ErreurEval::DebutInvalide(premier));
    }

    let sans_double_moins = propre.replace("--", "");
    let repetition = sans_double_moins
        .as_bytes()
        .windows(2)
        .find(|w| w[0] == w[1] && b"+*/.-".contains(&w[0]));

    match repetition {
        Some(w) => Err(ErreurEval::Repetition(char::from(w[0]))),
        None => Ok(()),
    }
}

/// Tokenize une chaîne assainie en jetons.
/// Supporte:
/// - nombres décimaux: 12, 1.5, .5, 5.
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(tok);
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres et de points
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_litteral(&litteral)?));
            continue;
        }

        return Err(ErreurEval::JetonInattendu(c.to_string()));
    }

    Ok(out)
}

/// Un littéral : au plus un point, au moins un chiffre.
fn lire_litteral(litteral: &str) -> Result<f64, ErreurEval> {
    let points = litteral.matches('.').count();
    let chiffres = litteral.len() - points;
    if points > 1 || chiffres == 0 {
        return Err(ErreurEval::NombreInvalide(litteral.to_string()));
    }
    litteral
        .parse::<f64>()
        .map_err(|_| ErreurEval::NombreInvalide(litteral.to_string()))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
