// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Tout le clavier passe par etat.rs (pas de raccourcis cachés ici).
// - Le moteur ne lit aucune horloge : on lui passe le temps egui.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Horloge egui (secondes depuis le lancement) : horodatage des
        // calculs + origine du délai de reprise après erreur.
        let maintenant = ctx.input(|i| i.time);

        self.gerer_clavier(ctx, maintenant);
        self.moteur.tic(maintenant);

        // Tant qu'une erreur attend sa reprise, on redemande des frames :
        // sinon tic() ne serait rappelé qu'à la prochaine interaction.
        if self.moteur.en_erreur() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });
    }
}
