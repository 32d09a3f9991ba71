// src/noyau/segment.rs
//
// Segment numérique final (l’opérande “sous le curseur”, toujours en fin d’expression)
// ---------------------------------------------------------------------------------
// - dernier_segment() : plus à droite des suites maximales de [0-9.], avec ses bornes
// - lire_nombre()     : lecture tolérante d’un préfixe numérique (façon parseFloat)
//
// Le signe n’en fait jamais partie : c’est un caractère voisin, géré par l’éditeur.

/// Bornes (octets) d’un segment dans l’expression source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub debut: usize,
    pub fin: usize,
}

impl Segment {
    pub fn texte<'a>(&self, source: &'a str) -> &'a str {
        &source[self.debut..self.fin]
    }

    /// Vrai si rien ne suit le segment.
    pub fn est_final(&self, source: &str) -> bool {
        self.fin == source.len()
    }
}

fn est_numerique(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Plus à droite des suites maximales de chiffres et de points.
///
/// "12+3.5)" -> 3..6 ("3.5") ; "(" -> None
pub fn dernier_segment(texte: &str) -> Option<Segment> {
    let (i, c) = texte.char_indices().rev().find(|(_, c)| est_numerique(*c))?;
    let fin = i + c.len_utf8();

    let debut = texte[..fin]
        .char_indices()
        .rev()
        .take_while(|(_, c)| est_numerique(*c))
        .last()
        .map_or(fin, |(j, _)| j);

    Some(Segment { debut, fin })
}

/// Lit le plus long préfixe `chiffres [. chiffres]` (au moins un chiffre).
///
/// "5." -> 5 ; ".5" -> 0.5 ; "1.2.3" -> 1.2 ; "." -> None
pub fn lire_nombre(texte: &str) -> Option<f64> {
    let octets = texte.as_bytes();

    let entier = octets.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut fin = entier;
    let mut decimales = 0;

    if octets.get(fin) == Some(&b'.') {
        decimales = octets[fin + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        fin += 1 + decimales;
    }

    if entier + decimales == 0 {
        return None;
    }
    texte[..fin].parse().ok()
}
