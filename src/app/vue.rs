// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Écran : une ligne, alignée à droite, ce que le noyau a poussé (on_display)
// - Pavé 4×4 : 7 8 9 / · 4 5 6 * · 1 2 3 - · AC 0 = +
// - Alerte : fenêtre modale sur on_error, fermée par OK
//
// Note :
// - Aucune logique de calcul ici : chaque bouton appelle une action de etat.rs

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::reglages::DECIMALES_MAX;

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [72.0, 56.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);

        ui.add_space(10.0);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Décimales :");
            let mut d = self.decimales() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DECIMALES_MAX as u32)
                    .suffix(" max"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.texte_ecran())
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_touches")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [
                    ["7", "8", "9", "/"],
                    ["4", "5", "6", "*"],
                    ["1", "2", "3", "-"],
                    ["AC", "0", "=", "+"],
                ] {
                    for label in rangee {
                        if Self::bouton(ui, label) {
                            self.appuyer(label);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized(
            TOUCHE,
            egui::Button::new(egui::RichText::new(label).size(22.0)),
        )
        .clicked()
    }

    fn appuyer(&mut self, label: &str) {
        match label {
            "AC" => self.touche_ac(),
            "=" => self.touche_egal(),
            "+" | "-" | "*" | "/" => self.touche_operateur(label),
            chiffre => self.touche_chiffre(chiffre),
        }
    }

    /// Alerte bloquante : rien d’autre ne réagit tant qu’elle est ouverte.
    pub fn ui_alerte(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alerte() else {
            return;
        };

        let mut ok = false;
        egui::Modal::new(egui::Id::new("alerte_expression")).show(ctx, |ui| {
            ui.heading("Erreur");
            ui.add_space(4.0);
            ui.label(message);
            ui.add_space(8.0);
            ok = ui.button("OK").clicked();
        });

        if ok {
            self.fermer_alerte();
        }
    }
}
