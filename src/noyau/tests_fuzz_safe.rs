//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur et l’éditeur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés :
//!   * aucune panique, quelle que soit la suite de touches
//!   * ligne de valeur = "Error" ou nombre formaté relisible
//!   * rafraîchir deux fois ne change rien
//!   * expressions générées bien formées => valeur attendue

use std::time::{Duration, Instant};

use super::editeur::{Editeur, MESSAGE_ERREUR};
use super::entree::Entree;
use super::eval::evaluer;
use super::format::INFINI;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

/// Codes du pavé (valeurs + actions) et quelques touches clavier.
const CODES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "%", "clear",
    "back", "equals", "sign", "square", "sqrt", "paren", "Enter", "Backspace",
];

fn gen_code(rng: &mut Rng) -> &'static str {
    CODES[rng.pick(CODES.len() as u32) as usize]
}

/// Chaîne brute sur l’alphabet de l’évaluateur + quelques intrus.
fn gen_brut(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', '%',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Expression bien formée + sa valeur attendue (entiers 1..9, pas de division).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = 1 + rng.pick(9);
        return (n.to_string(), f64::from(n));
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);
    match rng.pick(4) {
        0 => (format!("({a}+{b})"), va + vb),
        1 => (format!("({a}-{b})"), va - vb),
        2 => (format!("({a}*{b})"), va * vb),
        _ => (format!("-({a})"), -va),
    }
}

/// La ligne de valeur est "Error" ou un nombre formaté qu’on sait relire.
fn check_ligne_valeur(valeur: &str) {
    if valeur == MESSAGE_ERREUR {
        return;
    }
    assert_ne!(valeur, INFINI, "∞ ne doit jamais atteindre la ligne de valeur");
    let brut: String = valeur.chars().filter(|c| *c != ',').collect();
    assert!(
        brut.parse::<f64>().is_ok(),
        "ligne de valeur illisible: {valeur:?}"
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_editeur_touches_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let mut e = Editeur::default();
        let mut journal = Vec::new();

        for _ in 0..30 {
            let code = gen_code(&mut rng);
            journal.push(code);
            let entree =
                Entree::depuis_bouton(code).unwrap_or_else(|| panic!("code inconnu: {code:?}"));
            e.traiter(entree);

            check_ligne_valeur(&e.affichage().valeur);
        }

        let avant = e.affichage().clone();
        e.rafraichir();
        let apres = e.affichage().clone();
        e.rafraichir();
        assert_eq!(&apres, e.affichage(), "rafraîchir non idempotent: {journal:?}");

        // "Error" d’un "=" refusé peut être remplacé par le rafraîchissement,
        // l’expression, elle, ne bouge pas.
        assert_eq!(avant.expression, apres.expression, "touches={journal:?}");
    }
}

#[test]
fn fuzz_safe_determinisme_editeur() {
    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut e = Editeur::default();
        for _ in 0..60 {
            if let Some(entree) = Entree::depuis_bouton(gen_code(&mut rng)) {
                e.traiter(entree);
            }
        }
        (e.expression().to_string(), e.affichage().clone())
    };

    // Même seed => mêmes touches => même état
    assert_eq!(rejouer(0xBADC0DE), rejouer(0xBADC0DE));
}

#[test]
fn fuzz_safe_evaluateur_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let longueur = rng.pick(12) as usize;
        let s = gen_brut(&mut rng, longueur);
        match evaluer(&s) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 4);
        // entiers seulement : le calcul f64 est exact à cette taille
        let v = evaluer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v, attendu, "expr={expr:?}");
    }
}
