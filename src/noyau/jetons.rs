// src/noyau/jetons.rs

use std::fmt;

/// Les quatre touches d’opération du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Operateur {
    /// Lit le texte d’une touche ("+", "-", "*", "/"). Tout le reste => None.
    pub fn depuis_touche(texte: &str) -> Option<Self> {
        match texte {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Moins),
            "*" => Some(Self::Fois),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
        }
    }

    /// `*` et `/` passent avant `+` et `-`.
    pub fn est_prioritaire(self) -> bool {
        matches!(self, Self::Fois | Self::Div)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Texte brut : chiffres tapés (concaténés) ou résultat déjà formaté.
    Num(String),
    Op(Operateur),
    Egal,
}

impl Tok {
    pub fn est_num(&self) -> bool {
        matches!(self, Tok::Num(_))
    }

    pub fn est_op(&self) -> bool {
        matches!(self, Tok::Op(_))
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(texte) => f.write_str(texte),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Egal => f.write_str("="),
        }
    }
}

/// Affichage : concaténation des jetons, sans séparateur.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::to_string).collect()
}
