// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne d'expression + valeur courante formatée (ou le message
//   d'erreur, en couleur d'erreur, le temps de la reprise)
// - Pavé : AC C ⌫ ÷ / 7 8 9 × / 4 5 6 - / 1 2 3 + / % 0 . =
// - Historique : 5 derniers calculs, clic = rappel du résultat
//
// Les animations de boutons de la version d'origine sont laissées au style
// egui : pure présentation, hors contrat du moteur.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Operateur;

const TAILLE_TOUCHE: [f32; 2] = [68.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(8.0);
                self.ui_pave(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d'expression : vide quand rien n'est en attente
                    ui.small(self.moteur.expression());

                    let texte = egui::RichText::new(self.moteur.affichage())
                        .monospace()
                        .size(28.0);
                    if self.moteur.en_erreur() {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        use Touche::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.touche(ui, "AC", "Remise à zéro totale", ToutEffacer, maintenant);
                self.touche(ui, "C", "Efface seulement la saisie", EffacerSaisie, maintenant);
                self.touche(ui, "⌫", "Efface le dernier chiffre", RetourArriere, maintenant);
                self.touche(ui, "÷", "", Op(Operateur::Divise), maintenant);
                ui.end_row();

                self.touche(ui, "7", "", Chiffre('7'), maintenant);
                self.touche(ui, "8", "", Chiffre('8'), maintenant);
                self.touche(ui, "9", "", Chiffre('9'), maintenant);
                self.touche(ui, "×", "", Op(Operateur::Fois), maintenant);
                ui.end_row();

                self.touche(ui, "4", "", Chiffre('4'), maintenant);
                self.touche(ui, "5", "", Chiffre('5'), maintenant);
                self.touche(ui, "6", "", Chiffre('6'), maintenant);
                self.touche(ui, "-", "", Op(Operateur::Moins), maintenant);
                ui.end_row();

                self.touche(ui, "1", "", Chiffre('1'), maintenant);
                self.touche(ui, "2", "", Chiffre('2'), maintenant);
                self.touche(ui, "3", "", Chiffre('3'), maintenant);
                self.touche(ui, "+", "", Op(Operateur::Plus), maintenant);
                ui.end_row();

                self.touche(ui, "%", "Divise la saisie par 100", Pourcent, maintenant);
                self.touche(ui, "0", "", Chiffre('0'), maintenant);
                self.touche(ui, ".", "", Point, maintenant);
                self.touche(ui, "=", "Évalue l'expression", Egal, maintenant);
                ui.end_row();
            });
    }

    fn touche(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        tip: &str,
        touche: Touche,
        maintenant: f64,
    ) {
        let mut resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.moteur.saisir_chiffre(c),
            Touche::Point => self.moteur.saisir_point(),
            Touche::Op(op) => self.moteur.choisir_operateur(op),
            Touche::Egal => self.moteur.evaluer(maintenant),
            Touche::ToutEffacer => self.moteur.tout_effacer(),
            Touche::EffacerSaisie => self.moteur.effacer_saisie(),
            Touche::RetourArriere => self.moteur.retour_arriere(),
            Touche::Pourcent => self.moteur.pourcentage(),
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.moteur.historique_vide() {
                    ui.weak("Aucun calcul pour l'instant");
                    return;
                }

                // clic sur une ligne = rappel du résultat (appliqué après
                // la boucle : l'itération emprunte le moteur)
                let mut rappel = None;
                for entree in self.moteur.historique() {
                    let resp = ui
                        .selectable_label(false, egui::RichText::new(entree.ligne()).monospace())
                        .on_hover_text("Reprendre ce résultat");
                    if resp.clicked() {
                        rappel = Some(entree.resultat);
                    }
                }
                if let Some(resultat) = rappel {
                    self.moteur.rappeler_resultat(resultat);
                }

                ui.add_space(4.0);
                if ui.button("Vider l'historique").clicked() {
                    self.moteur.vider_historique();
                }
            });
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Point,
    Op(Operateur),
    Egal,
    ToutEffacer,
    EffacerSaisie,
    RetourArriere,
    Pourcent,
}
