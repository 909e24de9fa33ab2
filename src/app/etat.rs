//! src/app/etat.rs
//!
//! État UI (sans vue) : le moteur + l’écran qu’il alimente.
//!
//! Rôle : relayer les touches vers le noyau et garder ce que le noyau a dit
//! (texte de l’écran, alerte éventuelle).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur`.
//! - L’écran est possédé par l’app ; le moteur n’en garde qu’une référence faible.
//! - Tant qu’une alerte est ouverte, les touches sont ignorées.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::noyau::{Moteur, Observateur, Reglages};

/// Ce que le noyau a poussé vers la vue.
#[derive(Debug)]
pub struct Ecran {
    texte: RefCell<String>,
    alerte: RefCell<Option<String>>,
}

impl Default for Ecran {
    fn default() -> Self {
        Self {
            texte: RefCell::new("0".to_string()),
            alerte: RefCell::new(None),
        }
    }
}

impl Observateur for Ecran {
    fn on_display(&self, texte: &str) {
        *self.texte.borrow_mut() = texte.to_string();
    }

    fn on_error(&self, message: &str) {
        *self.alerte.borrow_mut() = Some(message.to_string());
    }
}

#[derive(Debug)]
pub struct AppCalc {
    moteur: Moteur,
    ecran: Rc<Ecran>,
}

impl Default for AppCalc {
    fn default() -> Self {
        let ecran = Rc::new(Ecran::default());
        let obs = Rc::downgrade(&ecran) as Weak<dyn Observateur>;

        let mut moteur = Moteur::new(Reglages::default());
        moteur.attacher(obs);
        moteur.reset();

        Self { moteur, ecran }
    }
}

impl AppCalc {
    /* ------------------------ Lecture (pour vue.rs) ------------------------ */

    pub fn texte_ecran(&self) -> String {
        self.ecran.texte.borrow().clone()
    }

    pub fn alerte(&self) -> Option<String> {
        self.ecran.alerte.borrow().clone()
    }

    pub fn decimales(&self) -> usize {
        self.moteur.reglages().decimales()
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn touche_chiffre(&mut self, chiffre: &str) {
        if self.alerte().is_none() {
            self.moteur.inserer_chiffre(chiffre);
        }
    }

    pub fn touche_operateur(&mut self, op: &str) {
        if self.alerte().is_none() {
            self.moteur.inserer_operateur(op);
        }
    }

    pub fn touche_egal(&mut self) {
        if self.alerte().is_none() {
            self.moteur.inserer_egal();
        }
    }

    /// AC : remise à zéro (écran "0").
    pub fn touche_ac(&mut self) {
        if self.alerte().is_none() {
            self.moteur.reset();
        }
    }

    /// OK de l’alerte : l’expression reste telle quelle.
    pub fn fermer_alerte(&mut self) {
        self.ecran.alerte.borrow_mut().take();
    }

    /// Décimales du résultat (bornées par le noyau).
    pub fn set_decimales(&mut self, decimales: usize) {
        self.moteur.set_decimales(decimales);
    }
}
