// src/noyau/historique.rs

use std::collections::VecDeque;

use super::format::format_nombre;

/// Borne dure : on ne garde que les 5 derniers calculs.
pub const MAX_ENTREES: usize = 5;

/// Un calcul abouti : expression complète, résultat, horodatage.
///
/// L'horodatage est en secondes, fourni par l'appelant (la vue passe
/// `egui::InputState::time`) : le noyau ne lit aucune horloge lui-même.
#[derive(Clone, Debug)]
pub struct Entree {
    pub expression: String,
    pub resultat: f64,
    pub horodatage: f64,
}

impl Entree {
    /// Ligne d'affichage : `"<expression> = <résultat formaté>"`.
    pub fn ligne(&self) -> String {
        format!("{} = {}", self.expression, format_nombre(self.resultat))
    }
}

/// Liste bornée des derniers calculs, la plus récente en tête.
#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<Entree>,
}

impl Historique {
    /// Insère en tête ; l'entrée la plus ancienne saute au-delà de la borne.
    pub fn ajouter(&mut self, expression: String, resultat: f64, horodatage: f64) {
        self.entrees.push_front(Entree {
            expression,
            resultat,
            horodatage,
        });
        self.entrees.truncate(MAX_ENTREES);
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn longueur(&self) -> usize {
        self.entrees.len()
    }

    /// Entrées de la plus récente à la plus ancienne.
    pub fn entrees(&self) -> impl Iterator<Item = &Entree> {
        self.entrees.iter()
    }
}
