//! src/app/etat.rs
//!
//! État UI : possède le moteur et traduit le clavier en opérations du noyau.
//!
//! Contrats :
//! - Aucune évaluation ici (le moteur s'en charge).
//! - Le clavier et les boutons passent par les MÊMES opérations : une touche
//!   '*' ou '/' vaut exactement le bouton × ou ÷.

use eframe::egui;

use crate::noyau::{Moteur, Operateur};

#[derive(Default)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl AppCalc {
    /// Clavier : chiffres, '.'/',' (même action), opérateurs, '=' et '%'
    /// arrivent en événements texte ; Enter / Escape / Backspace en touches.
    pub fn gerer_clavier(&mut self, ctx: &egui::Context, maintenant: f64) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.touche_texte(c, maintenant);
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => match key {
                    egui::Key::Enter => self.moteur.evaluer(maintenant),
                    egui::Key::Escape => self.moteur.tout_effacer(),
                    egui::Key::Backspace => self.moteur.retour_arriere(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn touche_texte(&mut self, c: char, maintenant: f64) {
        match c {
            '0'..='9' => self.moteur.saisir_chiffre(c),
            '.' | ',' => self.moteur.saisir_point(),
            '=' => self.moteur.evaluer(maintenant),
            '%' => self.moteur.pourcentage(),
            autre => {
                if let Some(op) = Operateur::depuis_touche(autre) {
                    self.moteur.choisir_operateur(op);
                }
            }
        }
    }
}
