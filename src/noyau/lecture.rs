// src/noyau/lecture.rs
//
// Lecture EXACTE d’un opérande texte -> rationnel.
// Formes acceptées : "12", "007", "-3", "1.5", "-0.25" (résultats formatés réinjectés).
// Pas d’exposant, pas de '+', pas de séparateur de milliers.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::format::pow10;

/// Texte décimal -> rationnel exact. None si le texte n’est pas un décimal simple.
pub fn lire_decimal(texte: &str) -> Option<BigRational> {
    let (neg, corps) = match texte.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, texte),
    };

    let (entier, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    if entier.is_empty() && frac.is_empty() {
        return None;
    }
    if !entier.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    // "12.34" -> 1234 / 10^2
    let chiffres = format!("{entier}{frac}");
    let mut n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    if neg {
        n = -n;
    }

    Some(BigRational::new(n, pow10(frac.len())))
}
