// src/noyau/format.rs
//
// Affichage d’un résultat : au plus `decimales` chiffres après le point,
// arrondi au pair (demi -> pair), zéros finaux et point retirés.
//   7      (pas 7.00)
//   1.5    (pas 1.50)
//   0.33   (1/3)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// r * 10^decimales, arrondi demi-pair.
fn arrondi_pair_scaled(r: &BigRational, decimales: usize) -> BigInt {
    let x = r * BigRational::from_integer(pow10(decimales));
    let plancher = x.floor();
    let reste = &x - &plancher;
    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));

    let n = plancher.to_integer();
    if reste > demi {
        n + 1
    } else if reste == demi {
        let impair = !(&n % BigInt::from(2)).is_zero();
        if impair {
            n + 1
        } else {
            n
        }
    } else {
        n
    }
}

pub fn format_resultat(r: &BigRational, decimales: usize) -> String {
    let scaled = arrondi_pair_scaled(r, decimales);

    // pas de "-0" : un résultat arrondi à zéro s’affiche "0"
    if scaled.is_zero() {
        return "0".to_string();
    }

    let neg = scaled.is_negative();
    let abs = scaled.abs();
    let scale = pow10(decimales);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };

    if decimales == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}
