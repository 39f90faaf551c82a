//! Noyau — évaluation d'une expression plate
//!
//! Pipeline : découpage -> garde structurelle -> réduction en deux passes
//! (d'abord × ÷, puis + -), gauche -> droite dans chaque palier.
//!
//! Chaque réduction remplace les deux opérandes voisines et l'opérateur
//! par une seule opérande, donc les indices suivants glissent d'un cran.

use super::erreur::ErreurCalcul;
use super::jetons::{decouper, Jeton, Operateur};

/// API publique : évalue le texte "n op n op n" et retourne le résultat.
///
/// - texte vide (ou espaces seuls) => 0, comme une expression sans jetons
/// - opérande seule => sa valeur
/// - résultat non fini => ErreurCalcul::ResultatInvalide
pub fn evaluer_expression(texte: &str) -> Result<f64, ErreurCalcul> {
    let resultat = reduire(&decouper(texte)?)?;

    if !resultat.is_finite() {
        return Err(ErreurCalcul::ResultatInvalide);
    }
    Ok(resultat)
}

/// Réduit une suite de jetons à une seule valeur, par palier de priorité.
pub fn reduire(jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
    if jetons.is_empty() {
        return Ok(0.0);
    }

    let mut nombres: Vec<f64> = Vec::new();
    let mut operateurs: Vec<Operateur> = Vec::new();
    for j in jetons {
        match j {
            Jeton::Nombre(n) => nombres.push(*n),
            Jeton::Op(op) => operateurs.push(*op),
        }
    }

    // Garde structurelle : "5 + " découpé donne 1 opérande pour 1 opérateur.
    if nombres.len() != operateurs.len() + 1 {
        return Err(ErreurCalcul::Format);
    }

    passe(&mut nombres, &mut operateurs, true)?; // × ÷
    passe(&mut nombres, &mut operateurs, false)?; // + -

    Ok(nombres[0])
}

/// Une passe gauche -> droite qui ne réduit que le palier demandé.
fn passe(
    nombres: &mut Vec<f64>,
    operateurs: &mut Vec<Operateur>,
    multiplicatifs: bool,
) -> Result<(), ErreurCalcul> {
    let mut i = 0;
    while i < operateurs.len() {
        if operateurs[i].multiplicatif() == multiplicatifs {
            nombres[i] = operateurs[i].appliquer(nombres[i], nombres[i + 1])?;
            nombres.remove(i + 1);
            operateurs.remove(i);
        } else {
            i += 1;
        }
    }
    Ok(())
}
