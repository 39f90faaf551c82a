//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées (format, division par zéro, résultat non fini)
//! - jetons.rs     : opérateurs + jetons + découpage
//! - eval.rs       : réduction en deux passes (× ÷ d'abord, + - ensuite)
//! - format.rs     : règles d'affichage des nombres
//! - historique.rs : liste bornée des derniers calculs
//! - moteur.rs     : machine à états (saisie, accumulateur, erreur différée)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod moteur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use jetons::Operateur;
pub use moteur::Moteur;
