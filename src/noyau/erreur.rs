// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Seule `ExpressionIncorrecte` (et `DivisionParZero`, cas “00”) remonte à
/// l’utilisateur ; les autres signalent un invariant cassé dans la suite de jetons.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("expression incorrecte")]
    ExpressionIncorrecte,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérande illisible: {0:?}")]
    OperandeIllisible(String),

    #[error("opérande manquant autour de '{0}'")]
    OperandeManquant(char),

    #[error("jeton inattendu: {0:?}")]
    JetonInattendu(String),
}
