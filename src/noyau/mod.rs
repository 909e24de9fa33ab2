//! Noyau de la calculatrice à touches
//!
//! Organisation interne :
//! - jetons.rs   : Tok (Num / Op / Egal) + affichage concaténé
//! - lecture.rs  : texte décimal -> rationnel exact
//! - format.rs   : rationnel -> texte (≤ N décimales, arrondi au pair)
//! - eval.rs     : réduction pure (priorités, puis gauche-droite)
//! - moteur.rs   : insertion des touches, complétude, notifications
//! - reglages.rs : décimales, message d’erreur
//! - erreur.rs   : ErreurNoyau

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod moteur;
pub mod reglages;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{Moteur, Observateur};
pub use reglages::Reglages;
