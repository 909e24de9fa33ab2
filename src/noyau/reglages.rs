// src/noyau/reglages.rs
//
// Réglages du moteur (pas de fichier, pas d’env : valeurs par défaut + bornes).

/// Décimales affichées par défaut dans un résultat.
const DECIMALES_DEFAUT: usize = 2;

/// Garde-fou : au-delà, l’affichage devient illisible sur le pavé.
pub const DECIMALES_MAX: usize = 12;

/// Message unique remonté par `on_error`.
pub const MESSAGE_EXPRESSION_INCORRECTE: &str = "Expression incorrecte";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    decimales: usize,
    message_erreur: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            message_erreur: MESSAGE_EXPRESSION_INCORRECTE.to_string(),
        }
    }
}

impl Reglages {
    pub fn decimales(&self) -> usize {
        self.decimales
    }

    /// Borne les décimales dans `0..=DECIMALES_MAX`.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }

    pub fn message_erreur(&self) -> &str {
        &self.message_erreur
    }

    #[cfg(test)]
    pub fn set_message_erreur(&mut self, msg: impl Into<String>) {
        self.message_erreur = msg.into();
    }
}
