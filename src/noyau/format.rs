// src/noyau/format.rs

/// Glyphe affiché pour une valeur non finie.
pub const INFINI: &str = "∞";

/// Séparateur de milliers (locale par défaut).
const SEPARATEUR_MILLIERS: char = ',';

/// Chiffres significatifs en notation exponentielle.
const CHIFFRES_SIGNIFICATIFS: usize = 10;

/* ------------------------ Texte “brut” d’un nombre ------------------------ */

/// Chiffres significatifs les plus courts (aller-retour exact) + exposant décimal.
///
/// Retourne (chiffres, n) tels que x = 0.chiffres × 10^n (x > 0 fini).
fn decomposer(x: f64) -> (String, i32) {
    let sci = format!("{x:e}"); // ex: "1.2345e3", "1e21", "1.5e-7"
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    (chiffres, exp + 1)
}

/// Forme texte d’un nombre, règles Number -> String d’ECMAScript :
/// - "-0" => "0", "Infinity", "-Infinity", "NaN"
/// - notation ordinaire tant que 1e-7 < |x| < 1e21
/// - sinon exponentielle "d.ddde±x"
///
/// C’est la forme réinjectée dans l’expression par l’éditeur.
pub fn nombre_en_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".into();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if x == 0.0 {
        return "0".into();
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (chiffres, n) = decomposer(x.abs());
    let k = chiffres.len() as i32;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}

/* ------------------------ Affichage ------------------------ */

/// Regroupe les chiffres d’une partie entière par milliers (signe conservé).
fn grouper_milliers(entier: &str) -> String {
    let (signe, chiffres) = match entier.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", entier),
    };

    let mut out = String::with_capacity(chiffres.len() + chiffres.len() / 3 + 1);
    out.push_str(signe);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (chiffres.len() - i) % 3 == 0 {
            out.push(SEPARATEUR_MILLIERS);
        }
        out.push(c);
    }
    out
}

/// 10 chiffres significatifs, zéros finaux de la mantisse retirés : "1e+21", "1.5e-7".
fn format_exponentiel(x: f64) -> String {
    let sci = format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, x);
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));

    let mantisse = if mantisse.contains('.') {
        mantisse.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantisse
    };

    if exp.starts_with('-') {
        format!("{mantisse}e{exp}")
    } else {
        format!("{mantisse}e+{exp}")
    }
}

/// Valeur affichée : partie entière groupée, partie décimale inchangée.
///
/// Non fini => "∞".
pub fn format_nombre(x: f64) -> String {
    if !x.is_finite() {
        return INFINI.into();
    }

    let texte = nombre_en_texte(x);
    if texte.contains('e') {
        return format_exponentiel(x);
    }

    match texte.split_once('.') {
        Some((entier, decimales)) => format!("{}.{decimales}", grouper_milliers(entier)),
        None => grouper_milliers(&texte),
    }
}
