//! Moteur d’expression : accumule les touches, contrôle, évalue, notifie.
//!
//! Contrats :
//! - Un appel = au plus une notification à l’observateur.
//! - L’observateur n’est JAMAIS possédé (Weak) : la vue possède le moteur, pas l’inverse.
//! - Suite de jetons : jamais d’Op en tête, jamais deux Num ni deux Op consécutifs,
//!   au plus un Egal, toujours suivi d’un seul Num (le résultat).

use std::rc::Weak;

use tracing::{debug, error, info, warn};

use super::erreur::ErreurNoyau;
use super::eval::evaluer;
use super::jetons::{format_tokens, Operateur, Tok};
use super::reglages::Reglages;

/// Ce que le moteur sait dire à son interlocuteur (la vue, ou un double de test).
pub trait Observateur {
    /// Texte courant de l’écran (expression, ou expression=résultat).
    fn on_display(&self, texte: &str);

    /// Expression refusée : la vue affiche une alerte bloquante et ne touche à rien d’autre.
    fn on_error(&self, message: &str);
}

#[derive(Debug, Default)]
pub struct Moteur {
    jetons: Vec<Tok>,
    observateur: Option<Weak<dyn Observateur>>,
    reglages: Reglages,
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            jetons: Vec::new(),
            observateur: None,
            reglages,
        }
    }

    /// Branche (ou remplace) l’observateur.
    pub fn attacher(&mut self, observateur: Weak<dyn Observateur>) {
        self.observateur = Some(observateur);
    }

    #[cfg(test)]
    pub fn detacher(&mut self) {
        self.observateur = None;
    }

    #[cfg(test)]
    pub fn jetons(&self) -> &[Tok] {
        &self.jetons
    }

    pub fn affichage(&self) -> String {
        format_tokens(&self.jetons)
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn set_decimales(&mut self, decimales: usize) {
        self.reglages.set_decimales(decimales);
    }

    /* ------------------------ Touches ------------------------ */

    /// AC : tout effacer, l’écran repasse à "0".
    pub fn reset(&mut self) {
        self.jetons.clear();
        debug!("reset");
        self.notifier_affichage("0");
    }

    /// Chiffre : concaténé tel quel (aucune validation, "00" reste "00").
    pub fn inserer_chiffre(&mut self, chiffre: &str) {
        if self.a_un_resultat() {
            // nouvelle expression
            self.jetons.clear();
            self.jetons.push(Tok::Num(chiffre.to_string()));
        } else if let Some(Tok::Num(dernier)) = self.jetons.last_mut() {
            dernier.push_str(chiffre);
        } else {
            self.jetons.push(Tok::Num(chiffre.to_string()));
        }

        debug!(chiffre, affichage = %self.affichage(), "chiffre");
        self.notifier_affichage(&self.affichage());
    }

    /// Opérateur : refusé en silence en tête d’expression ou après un autre opérateur.
    pub fn inserer_operateur(&mut self, touche: &str) {
        let Some(op) = Operateur::depuis_touche(touche) else {
            debug!(touche, "touche d’opérateur inconnue, ignorée");
            return;
        };

        if self.a_un_resultat() {
            // on repart du résultat précédent
            let Some(Tok::Num(resultat)) = self.jetons.pop() else {
                return;
            };
            self.jetons.clear();
            self.jetons.push(Tok::Num(resultat));
            self.jetons.push(Tok::Op(op));
        } else if self.peut_ajouter_operateur() {
            self.jetons.push(Tok::Op(op));
        } else {
            debug!(touche, "opérateur refusé");
            return;
        }

        debug!(touche, affichage = %self.affichage(), "opérateur");
        self.notifier_affichage(&self.affichage());
    }

    /// "=" : contrôle, puis calcul (une seule fois par expression).
    pub fn inserer_egal(&mut self) {
        if let Err(e) = self.verifier() {
            warn!(affichage = %self.affichage(), "{e}");
            let msg = self.reglages.message_erreur().to_string();
            self.notifier_erreur(&msg);
            return;
        }

        if self.jetons.contains(&Tok::Egal) {
            // déjà calculé : "=" de nouveau ne fait rien
            return;
        }

        match evaluer(&self.jetons, self.reglages.decimales()) {
            Ok(resultat) => {
                self.jetons.push(Tok::Egal);
                self.jetons.push(Tok::Num(resultat));
                info!(affichage = %self.affichage(), "résultat");
                self.notifier_affichage(&self.affichage());
            }
            Err(ErreurNoyau::DivisionParZero) => {
                warn!(affichage = %self.affichage(), "division par un zéro non littéral");
                let msg = self.reglages.message_erreur().to_string();
                self.notifier_erreur(&msg);
            }
            Err(e) => {
                // branche défensive : la suite de jetons viole un invariant
                error!(affichage = %self.affichage(), "évaluation abandonnée: {e}");
            }
        }
    }

    /* ------------------------ Contrôles ------------------------ */

    /// Prédicat de complétude : 3 jetons mini, un opérateur, pas de "/0" littéral,
    /// un nombre en dernier.
    fn verifier(&self) -> Result<(), ErreurNoyau> {
        let complete = self.jetons.len() >= 3
            && self.jetons.iter().any(Tok::est_op)
            && !self.division_par_zero_litterale()
            && self.jetons.last().is_some_and(Tok::est_num);

        if complete {
            Ok(())
        } else {
            Err(ErreurNoyau::ExpressionIncorrecte)
        }
    }

    fn division_par_zero_litterale(&self) -> bool {
        self.jetons.windows(2).any(|w| match w {
            [Tok::Op(Operateur::Div), Tok::Num(texte)] => texte == "0",
            _ => false,
        })
    }

    fn a_un_resultat(&self) -> bool {
        matches!(self.jetons.as_slice(), [.., Tok::Egal, Tok::Num(_)])
    }

    fn peut_ajouter_operateur(&self) -> bool {
        self.jetons.last().is_some_and(|t| !t.est_op())
    }

    /* ------------------------ Notifications ------------------------ */

    fn notifier_affichage(&self, texte: &str) {
        if let Some(obs) = self.observateur.as_ref().and_then(Weak::upgrade) {
            obs.on_display(texte);
        }
    }

    fn notifier_erreur(&self, message: &str) {
        if let Some(obs) = self.observateur.as_ref().and_then(Weak::upgrade) {
            obs.on_error(message);
        }
    }
}
