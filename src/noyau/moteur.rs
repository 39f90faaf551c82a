//! Noyau — machine à états de la calculatrice
//!
//! Une instance de `Moteur` possède TOUT l'état (saisie, accumulateur,
//! drapeau de remplacement, historique, erreur en attente) : la vue ne fait
//! que lui transmettre les touches et lire `affichage()` / `expression()`.
//!
//! Contrats :
//! - la saisie contient au plus un point décimal, jamais d'opérateur
//! - l'accumulateur rendu en texte se termine toujours par "<op> "
//! - une erreur d'évaluation laisse l'état intact, affiche son message,
//!   puis `tic()` déclenche la remise à zéro totale après le délai
//! - une nouvelle erreur REMPLACE l'échéance précédente (pas d'empilement)

use super::eval::evaluer_expression;
use super::format::format_affichage;
use super::historique::{Entree, Historique};
use super::jetons::Operateur;

/// Délai (secondes) entre l'affichage d'une erreur et la remise à zéro.
pub const DELAI_REPRISE: f64 = 2.0;

/// Une paire engagée "nombre opérateur" de l'accumulateur.
///
/// Le nombre reste la chaîne saisie (pas un f64) : l'expression affichée
/// et l'historique montrent ce que l'utilisateur a réellement tapé.
#[derive(Clone, Debug)]
struct Engagement {
    nombre: String,
    operateur: Operateur,
}

/// Erreur en cours d'affichage, avec son échéance de reprise.
#[derive(Clone, Debug)]
struct ErreurAffichee {
    message: String,
    echeance: f64,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    // --- état spécifié ---
    saisie: String,               // le nombre en cours de frappe
    engagements: Vec<Engagement>, // l'accumulateur, sous forme structurée
    attend_nouvelle_valeur: bool, // le prochain chiffre repart à neuf
    historique: Historique,

    // --- présentation différée ---
    erreur: Option<ErreurAffichee>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: "0".to_string(),
            engagements: Vec::new(),
            attend_nouvelle_valeur: false,
            historique: Historique::default(),
            erreur: None,
        }
    }
}

impl Moteur {
    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre. "0" initial remplacé (taper 0 puis 5 donne "5").
    pub fn saisir_chiffre(&mut self, chiffre: char) {
        if !chiffre.is_ascii_digit() {
            return;
        }

        if self.attend_nouvelle_valeur {
            self.saisie.clear();
            self.saisie.push(chiffre);
            self.attend_nouvelle_valeur = false;
        } else if self.saisie == "0" {
            self.saisie.clear();
            self.saisie.push(chiffre);
        } else {
            self.saisie.push(chiffre);
        }
    }

    /// Ajoute le point décimal (sans effet s'il est déjà présent).
    pub fn saisir_point(&mut self) {
        if self.attend_nouvelle_valeur {
            self.saisie = "0.".to_string();
            self.attend_nouvelle_valeur = false;
        } else if !self.saisie.contains('.') {
            self.saisie.push('.');
        }
    }

    /// Engage le nombre saisi avec l'opérateur choisi.
    ///
    /// Saisie vide mais accumulateur non vide : l'utilisateur change d'avis,
    /// on remplace le dernier opérateur au lieu d'engager quoi que ce soit.
    pub fn choisir_operateur(&mut self, operateur: Operateur) {
        if self.saisie.is_empty() && self.engagements.is_empty() {
            return;
        }

        if !self.saisie.is_empty() {
            self.engagements.push(Engagement {
                nombre: std::mem::take(&mut self.saisie),
                operateur,
            });
            self.attend_nouvelle_valeur = false;
        } else if let Some(dernier) = self.engagements.last_mut() {
            dernier.operateur = operateur;
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue l'expression complète (accumulateur + saisie).
    ///
    /// Sans effet tant que rien n'a été combiné (saisie seule).
    /// `maintenant` : secondes (la vue passe `egui::InputState::time`) ;
    /// sert d'horodatage d'historique et d'origine du délai d'erreur.
    pub fn evaluer(&mut self, maintenant: f64) {
        if self.engagements.is_empty() {
            return;
        }

        let complete = self.expression_complete();
        match evaluer_expression(&complete) {
            Ok(resultat) => {
                tracing::debug!(expression = %complete, resultat, "calcul abouti");
                self.historique.ajouter(complete, resultat, maintenant);
                self.saisie = resultat.to_string();
                self.engagements.clear();
                self.attend_nouvelle_valeur = true;
                self.erreur = None;
            }
            Err(e) => {
                tracing::warn!(expression = %complete, erreur = %e, "calcul refusé");
                // l'état reste intact ; seule la reprise différée y touchera
                self.erreur = Some(ErreurAffichee {
                    message: e.to_string(),
                    echeance: maintenant + DELAI_REPRISE,
                });
            }
        }
    }

    /// Reprise différée après erreur : à appeler à chaque frame.
    ///
    /// Une seule échéance vit à la fois ; une erreur plus récente l'a
    /// remplacée, donc pas de double remise à zéro.
    pub fn tic(&mut self, maintenant: f64) {
        if let Some(err) = &self.erreur {
            if maintenant >= err.echeance {
                self.erreur = None;
                self.tout_effacer();
            }
        }
    }

    /* ------------------------ Corrections ------------------------ */

    /// AC : remise à zéro totale (l'historique survit).
    pub fn tout_effacer(&mut self) {
        self.saisie = "0".to_string();
        self.engagements.clear();
        self.attend_nouvelle_valeur = false;
        self.erreur = None;
    }

    /// C : efface seulement la saisie, l'accumulateur est préservé.
    pub fn effacer_saisie(&mut self) {
        self.saisie = "0".to_string();
        self.attend_nouvelle_valeur = false;
    }

    /// Efface le dernier caractère saisi.
    ///
    /// Sans effet sur un résultat fraîchement calculé ou sur "0" :
    /// il n'y a rien de significatif à gommer.
    pub fn retour_arriere(&mut self) {
        if self.attend_nouvelle_valeur || self.saisie == "0" {
            return;
        }

        self.saisie.pop();
        if self.saisie.is_empty() {
            self.saisie.push('0');
        }
    }

    /// Divise la saisie par 100. Le résultat se comporte comme un calcul
    /// abouti : le chiffre suivant repart à neuf.
    pub fn pourcentage(&mut self) {
        if self.saisie.is_empty() || self.saisie == "0" {
            return;
        }
        let Ok(valeur) = self.saisie.parse::<f64>() else {
            return;
        };

        self.saisie = (valeur / 100.0).to_string();
        self.attend_nouvelle_valeur = true;
    }

    /* ------------------------ Historique ------------------------ */

    /// Sélection d'une entrée d'historique : son résultat devient la saisie.
    pub fn rappeler_resultat(&mut self, resultat: f64) {
        self.saisie = resultat.to_string();
        self.attend_nouvelle_valeur = true;
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
    }

    pub fn historique(&self) -> impl Iterator<Item = &Entree> {
        self.historique.entrees()
    }

    pub fn historique_vide(&self) -> bool {
        self.historique.est_vide()
    }

    pub fn longueur_historique(&self) -> usize {
        self.historique.longueur()
    }

    /* ------------------------ Lectures pour la vue ------------------------ */

    /// Texte de l'écran principal : message d'erreur prioritaire,
    /// sinon la saisie formatée.
    pub fn affichage(&self) -> String {
        if let Some(err) = &self.erreur {
            return err.message.clone();
        }
        format_affichage(&self.saisie)
    }

    /// Ligne d'expression : vide quand aucune opération n'est en attente.
    pub fn expression(&self) -> String {
        let mut texte = String::new();
        for e in &self.engagements {
            texte.push_str(&e.nombre);
            texte.push(' ');
            texte.push(e.operateur.symbole());
            texte.push(' ');
        }
        texte
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    /// Accumulateur rendu + saisie, tel que passé à l'évaluation
    /// et enregistré dans l'historique.
    fn expression_complete(&self) -> String {
        let mut texte = self.expression();
        texte.push_str(&self.saisie);
        texte
    }
}
