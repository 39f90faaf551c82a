// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Les quatre opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (celui qui apparaît dans l'expression et l'historique).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Symbole d'affichage -> opérateur (jetons de l'expression).
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' => Some(Operateur::Fois),
            '÷' => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Touche clavier -> opérateur : '*' vaut × et '/' vaut ÷.
    pub fn depuis_touche(c: char) -> Option<Self> {
        match c {
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => Self::depuis_symbole(c),
        }
    }

    /// Palier de priorité : × et ÷ avant + et -.
    pub fn multiplicatif(self) -> bool {
        matches!(self, Operateur::Fois | Operateur::Divise)
    }

    /// Applique l'opérateur. La division contrôle le zéro AVANT de diviser.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
        }
    }
}

/// Jeton d'une expression "plate" (sans parenthèses) : opérande ou opérateur.
#[derive(Clone, Copy, Debug)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

/// Découpe la chaîne "n op n op n" en jetons.
///
/// Contrat (même lecture que l'évaluation) :
/// - séparation sur les espaces, morceaux vides ignorés
/// - indices pairs = opérandes, indices impairs = opérateurs
/// - tout morceau hors contrat => ErreurCalcul::Format
pub fn decouper(texte: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut jetons = Vec::new();

    for (i, mot) in texte.split(' ').filter(|m| !m.is_empty()).enumerate() {
        if i % 2 == 0 {
            let n: f64 = mot.parse().map_err(|_| ErreurCalcul::Format)?;
            jetons.push(Jeton::Nombre(n));
        } else {
            let mut chars = mot.chars();
            let op = match (chars.next(), chars.next()) {
                (Some(c), None) => Operateur::depuis_symbole(c),
                _ => None,
            };
            jetons.push(Jeton::Op(op.ok_or(ErreurCalcul::Format)?));
        }
    }

    Ok(jetons)
}
