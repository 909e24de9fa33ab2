// src/app.rs
//
// Calculatrice à touches : module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, pas de champ texte) :
// - chiffres, + - * /     => touches du pavé
// - '=' ou Enter          => "="
// - Escape                => AC, ou ferme l’alerte si elle est ouverte

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        self.ui_alerte(ctx);
    }
}

/// Touches lues sur une frame.
#[derive(Debug, Default)]
struct Clavier {
    textes: Vec<String>,
    enter: bool,
    esc: bool,
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let clavier = ctx.input(|i| Clavier {
            textes: i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect(),
            enter: i.key_pressed(egui::Key::Enter),
            esc: i.key_pressed(egui::Key::Escape),
        });

        // un champ (DragValue des décimales) a le focus : les touches sont pour lui
        self.appliquer_clavier(&clavier, ctx.wants_keyboard_input());
    }

    fn appliquer_clavier(&mut self, clavier: &Clavier, saisie_en_cours: bool) {
        if saisie_en_cours {
            return;
        }

        if clavier.esc {
            if self.alerte().is_some() {
                self.fermer_alerte();
            } else {
                self.touche_ac();
            }
            return;
        }

        for c in clavier.textes.iter().flat_map(|t| t.chars()) {
            match c {
                '0'..='9' => self.touche_chiffre(&c.to_string()),
                '+' | '-' | '*' | '/' => self.touche_operateur(&c.to_string()),
                '=' => self.touche_egal(),
                _ => {}
            }
        }

        if clavier.enter {
            self.touche_egal();
        }
    }
}
