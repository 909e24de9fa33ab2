//! Noyau : évaluation (réduction pure)
//!
//! jetons -> passe prioritaire (* /) -> passe gauche-droite (+ -) -> texte du résultat
//!
//! Chaque étape rend une NOUVELLE suite de jetons ; rien n’est modifié sur place.
//! Les résultats intermédiaires sont formatés puis relus (même arrondi que l’affichage).

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurNoyau;
use super::format::format_resultat;
use super::jetons::{Operateur, Tok};
use super::lecture::lire_decimal;

/// API publique : évalue une expression complète (sans `=`) et rend le résultat formaté.
pub fn evaluer(tokens: &[Tok], decimales: usize) -> Result<String, ErreurNoyau> {
    let reduits = reduire_priorites(tokens, decimales)?;
    reduire_gauche_droite(&reduits, decimales)
}

/// Passe prioritaire : remplace (a op b) par son résultat tant qu’il reste un `*` ou `/`,
/// toujours le plus à gauche d’abord.
pub fn reduire_priorites(tokens: &[Tok], decimales: usize) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut courant = tokens.to_vec();

    while let Some(i) = courant
        .iter()
        .position(|t| matches!(t, Tok::Op(op) if op.est_prioritaire()))
    {
        courant = reduire_triplet(&courant, i, decimales)?;
    }

    Ok(courant)
}

/// Passe gauche-droite : il ne reste que `+`/`-`, on réduit les trois premiers jetons
/// jusqu’à n’en garder qu’un.
pub fn reduire_gauche_droite(tokens: &[Tok], decimales: usize) -> Result<String, ErreurNoyau> {
    let mut courant = tokens.to_vec();

    while courant.len() > 1 {
        courant = reduire_triplet(&courant, 1, decimales)?;
    }

    match courant.pop() {
        Some(Tok::Num(texte)) => Ok(texte),
        Some(autre) => Err(ErreurNoyau::JetonInattendu(autre.to_string())),
        None => Err(ErreurNoyau::JetonInattendu(String::new())),
    }
}

/// Construit [..i-1] + Num(a op b) + [i+2..] autour de l’opérateur en position `i`.
fn reduire_triplet(tokens: &[Tok], i: usize, decimales: usize) -> Result<Vec<Tok>, ErreurNoyau> {
    let op = match tokens.get(i) {
        Some(Tok::Op(op)) => *op,
        Some(autre) => return Err(ErreurNoyau::JetonInattendu(autre.to_string())),
        None => return Err(ErreurNoyau::JetonInattendu(String::new())),
    };

    let gauche = i
        .checked_sub(1)
        .and_then(|g| tokens.get(g))
        .ok_or(ErreurNoyau::OperandeManquant(op.symbole()))?;
    let droite = tokens
        .get(i + 1)
        .ok_or(ErreurNoyau::OperandeManquant(op.symbole()))?;

    let resultat = appliquer(op, operande(gauche, op)?, operande(droite, op)?)?;

    let mut out = Vec::with_capacity(tokens.len() - 2);
    out.extend_from_slice(&tokens[..i - 1]);
    out.push(Tok::Num(format_resultat(&resultat, decimales)));
    out.extend_from_slice(&tokens[i + 2..]);
    Ok(out)
}

fn operande(tok: &Tok, op: Operateur) -> Result<BigRational, ErreurNoyau> {
    match tok {
        Tok::Num(texte) => {
            lire_decimal(texte).ok_or_else(|| ErreurNoyau::OperandeIllisible(texte.clone()))
        }
        _ => Err(ErreurNoyau::OperandeManquant(op.symbole())),
    }
}

fn appliquer(op: Operateur, a: BigRational, b: BigRational) -> Result<BigRational, ErreurNoyau> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Div => {
            // "00", "000"… échappent au contrôle littéral "/0" : on refuse ici.
            if b.is_zero() {
                return Err(ErreurNoyau::DivisionParZero);
            }
            a / b
        }
    })
}
