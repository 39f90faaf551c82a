// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs d'évaluation du noyau.
///
/// Les trois cas sont traités pareil côté présentation : message affiché
/// à l'écran, puis remise à zéro différée (voir Moteur::tic).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Garde structurelle : nombre d'opérandes ≠ nombre d'opérateurs + 1.
    /// Inatteignable par la saisie normale, sauf "=" juste après un opérateur.
    #[error("Format de calcul invalide")]
    Format,

    /// Le diviseur vaut exactement 0 (contrôlé AVANT la division).
    #[error("Division par zéro impossible")]
    DivisionParZero,

    /// Résultat non fini (dépassement vers ±∞, NaN).
    #[error("Résultat invalide")]
    ResultatInvalide,
}
