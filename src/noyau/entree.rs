// src/noyau/entree.rs
//
// Événements d’entrée (indépendants de la source : clic ou clavier).

/// Actions nommées du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Effacer,
    Retour,
    Egal,
    Signe,
    Carre,
    Racine,
    Parenthese,
    Pourcentage,
}

impl Action {
    /// Noms d’actions de la surface d’entrée ("clear", "back", ...).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Some(match nom {
            "clear" => Action::Effacer,
            "back" => Action::Retour,
            "equals" => Action::Egal,
            "sign" => Action::Signe,
            "square" => Action::Carre,
            "sqrt" => Action::Racine,
            "paren" => Action::Parenthese,
            "percent" => Action::Pourcentage,
            _ => return None,
        })
    }
}

/// Un événement : jeton littéral (chiffre, '.', opérateur) ou action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    Jeton(char),
    Action(Action),
}

impl Entree {
    /// Correspondance touche -> entrée (noms de touches façon DOM).
    ///
    /// - "0".."9", ".", "+", "-", "*", "/" : jeton
    /// - "Enter" / "=" : égal ; "Backspace" : retour ; "Escape" : effacer ; "%" : pourcentage
    pub fn depuis_touche(touche: &str) -> Option<Self> {
        match touche {
            "Enter" | "=" => return Some(Entree::Action(Action::Egal)),
            "Backspace" => return Some(Entree::Action(Action::Retour)),
            "Escape" => return Some(Entree::Action(Action::Effacer)),
            "%" => return Some(Entree::Action(Action::Pourcentage)),
            _ => {}
        }

        let mut chars = touche.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if est_jeton(c) => Some(Entree::Jeton(c)),
            _ => None,
        }
    }

    /// Code d’un bouton du pavé : nom d’action ("sqrt") ou valeur ("7", "%").
    pub fn depuis_bouton(code: &str) -> Option<Self> {
        Action::depuis_nom(code)
            .map(Entree::Action)
            .or_else(|| Entree::depuis_touche(code))
    }
}

/// Jetons littéraux acceptés par le pavé.
pub fn est_jeton(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/')
}
