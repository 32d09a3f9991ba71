//! src/noyau/editeur.rs
//!
//! Éditeur d’expression (contrôleur).
//!
//! Rôle : posséder l’expression en cours + le drapeau “vient d’évaluer”, appliquer
//! chaque action du pavé, puis recalculer les deux lignes d’affichage.
//!
//! Contrats :
//! - Pas de curseur : toute édition porte sur la fin de l’expression.
//! - Aucune erreur fatale : une expression mal formée s’affiche "Error" et reste éditable.
//! - Une opération sans opérande (%, ±, x², √) est ignorée.

use super::entree::{Action, Entree};
use super::eval::evaluer;
use super::format::{format_nombre, nombre_en_texte};
use super::segment::{dernier_segment, lire_nombre};

/// Ligne de valeur quand l’évaluation échoue ou n’est pas finie.
pub const MESSAGE_ERREUR: &str = "Error";

/// Ligne d’expression vide (garde la hauteur de ligne).
const LIGNE_VIDE: &str = "\u{00A0}";

/// Les deux chaînes rendues par la vue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    pub expression: String,
    pub valeur: String,
}

/// Opérande final : segment numérique + éventuel moins unaire juste devant.
#[derive(Clone, Copy, Debug)]
struct Operande {
    debut: usize,
    fin: usize,
    valeur: f64,
}

/// Cible de x² / √.
enum Cible {
    Operande(Operande),
    /// Pas de segment : on repart de la valeur affichée (remplace toute l’expression).
    Affichee(f64),
    Aucune,
}

#[derive(Clone, Debug)]
pub struct Editeur {
    expression: String,
    vient_d_evaluer: bool,

    affichage: Affichage,
    // Valeur finie actuellement affichée (None si "Error").
    valeur_affichee: Option<f64>,
}

impl Default for Editeur {
    fn default() -> Self {
        let mut e = Self {
            expression: String::new(),
            vient_d_evaluer: false,
            affichage: Affichage::default(),
            valeur_affichee: None,
        };
        e.rafraichir();
        e
    }
}

impl Editeur {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn vient_d_evaluer(&self) -> bool {
        self.vient_d_evaluer
    }

    pub fn affichage(&self) -> &Affichage {
        &self.affichage
    }

    /// Point d’entrée unique de la vue.
    pub fn traiter(&mut self, entree: Entree) {
        tracing::debug!(?entree, expression = %self.expression, "entrée");

        match entree {
            Entree::Jeton(c) => self.ajouter(c),
            Entree::Action(a) => match a {
                Action::Effacer => self.effacer(),
                Action::Retour => self.retour(),
                Action::Egal => self.egal(),
                Action::Signe => self.changer_signe(),
                Action::Carre => self.carre(),
                Action::Racine => self.racine(),
                Action::Parenthese => self.parenthese(),
                Action::Pourcentage => self.pourcentage(),
            },
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Ajoute un jeton. Après "=", un chiffre ou un point démarre un nouveau calcul ;
    /// un opérateur enchaîne sur le résultat.
    pub fn ajouter(&mut self, jeton: char) {
        let repartir = self.vient_d_evaluer && (jeton.is_ascii_digit() || jeton == '.');

        // un seul point par nombre en cours de saisie
        if jeton == '.' && !repartir && self.nombre_en_cours_a_un_point() {
            return;
        }

        if repartir {
            self.expression.clear();
        }
        self.vient_d_evaluer = false;
        self.expression.push(jeton);
        self.rafraichir();
    }

    pub fn effacer(&mut self) {
        self.expression.clear();
        self.vient_d_evaluer = false;
        self.rafraichir();
    }

    /// Retire le dernier caractère.
    pub fn retour(&mut self) {
        self.expression.pop();
        self.vient_d_evaluer = false;
        self.rafraichir();
    }

    /// Évalue. Non fini ou mal formé : "Error" affiché, état inchangé.
    pub fn egal(&mut self) {
        match evaluer(&self.expression) {
            Ok(v) if v.is_finite() => {
                self.expression = nombre_en_texte(v);
                self.vient_d_evaluer = true;
                self.rafraichir();
            }
            resultat => {
                tracing::debug!(expression = %self.expression, ?resultat, "égal refusé");
                self.afficher_erreur();
            }
        }
    }

    /// ± sur l’opérande final : "5" -> "-5" -> "5", "3-5" -> "3--5".
    pub fn changer_signe(&mut self) {
        let Some(op) = self.operande() else {
            return;
        };
        self.remplacer(op, -op.valeur);
    }

    /// % : l’opérande final est divisé par 100.
    pub fn pourcentage(&mut self) {
        let Some(op) = self.operande() else {
            return;
        };
        self.remplacer(op, op.valeur / 100.0);
    }

    pub fn carre(&mut self) {
        match self.cible() {
            Cible::Operande(op) => self.remplacer(op, op.valeur * op.valeur),
            Cible::Affichee(v) => self.remplacer_tout(v * v),
            Cible::Aucune => {}
        }
    }

    /// √ : valeur négative => "Error" sans toucher à l’expression.
    pub fn racine(&mut self) {
        match self.cible() {
            Cible::Operande(op) if op.valeur < 0.0 => self.afficher_erreur(),
            Cible::Affichee(v) if v < 0.0 => self.afficher_erreur(),
            Cible::Operande(op) => self.remplacer(op, op.valeur.sqrt()),
            Cible::Affichee(v) => self.remplacer_tout(v.sqrt()),
            Cible::Aucune => {}
        }
    }

    /// Ouvre ou ferme une parenthèse selon l’équilibre courant.
    pub fn parenthese(&mut self) {
        let ouvertes = self.expression.matches('(').count();
        let fermees = self.expression.matches(')').count();
        let apres_operateur = self
            .expression
            .ends_with(|c: char| matches!(c, '+' | '-' | '*' | '/' | '('));

        if ouvertes <= fermees || apres_operateur || self.expression.is_empty() {
            self.expression.push('(');
        } else {
            self.expression.push(')');
        }
        self.vient_d_evaluer = false;
        self.rafraichir();
    }

    /// Recalcule les deux lignes (idempotent).
    pub fn rafraichir(&mut self) {
        self.affichage.expression = if self.expression.is_empty() {
            LIGNE_VIDE.to_string()
        } else {
            self.expression.clone()
        };

        match evaluer(&self.expression) {
            Ok(v) if v.is_finite() => {
                self.affichage.valeur = format_nombre(v);
                self.valeur_affichee = Some(v);
            }
            _ => self.afficher_erreur(),
        }
    }

    /* ------------------------ Outils internes ------------------------ */

    fn afficher_erreur(&mut self) {
        self.affichage.valeur = MESSAGE_ERREUR.to_string();
        self.valeur_affichee = None;
    }

    /// Vrai si le nombre en toute fin d’expression contient déjà un point.
    fn nombre_en_cours_a_un_point(&self) -> bool {
        dernier_segment(&self.expression).is_some_and(|s| {
            s.est_final(&self.expression) && s.texte(&self.expression).contains('.')
        })
    }

    fn operande(&self) -> Option<Operande> {
        let seg = dernier_segment(&self.expression)?;
        let absolu = lire_nombre(seg.texte(&self.expression))?;

        if moins_unaire_avant(&self.expression, seg.debut) {
            Some(Operande {
                debut: seg.debut - 1,
                fin: seg.fin,
                valeur: -absolu,
            })
        } else {
            Some(Operande {
                debut: seg.debut,
                fin: seg.fin,
                valeur: absolu,
            })
        }
    }

    fn cible(&self) -> Cible {
        if dernier_segment(&self.expression).is_some() {
            // segment présent mais illisible ("."), pas de repli
            return self.operande().map_or(Cible::Aucune, Cible::Operande);
        }
        self.valeur_affichee.map_or(Cible::Aucune, Cible::Affichee)
    }

    fn remplacer(&mut self, op: Operande, valeur: f64) {
        if !valeur.is_finite() {
            self.afficher_erreur();
            return;
        }
        self.expression
            .replace_range(op.debut..op.fin, &nombre_en_texte(valeur));
        self.vient_d_evaluer = false;
        self.rafraichir();
    }

    fn remplacer_tout(&mut self, valeur: f64) {
        if !valeur.is_finite() {
            self.afficher_erreur();
            return;
        }
        self.expression = nombre_en_texte(valeur);
        self.vient_d_evaluer = false;
        self.rafraichir();
    }
}

/// Un '-' juste avant `debut` est unaire s’il ouvre l’expression ou suit un opérateur / '('.
fn moins_unaire_avant(texte: &str, debut: usize) -> bool {
    let Some(avant) = texte[..debut].strip_suffix('-') else {
        return false;
    };
    match avant.chars().next_back() {
        None => true,
        Some(c) => matches!(c, '+' | '-' | '*' | '/' | '('),
    }
}
