//! Tests fuzz safe : touches aléatoires + invariants de la suite de jetons.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariant clé : après chaque touche, la suite de jetons reste bien formée

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use super::jetons::{format_tokens, Tok};
use super::{Moteur, Observateur, Reglages};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Observateur compteur ------------------------ */

#[derive(Default)]
struct Journal {
    affichages: RefCell<Vec<String>>,
    erreurs: RefCell<usize>,
}

impl Observateur for Journal {
    fn on_display(&self, texte: &str) {
        self.affichages.borrow_mut().push(texte.to_string());
    }
    fn on_error(&self, _message: &str) {
        *self.erreurs.borrow_mut() += 1;
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const TOUCHES: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "+", "-", "*", "/", "=", "AC",
];

fn appuyer(m: &mut Moteur, touche: &str) {
    match touche {
        "=" => m.inserer_egal(),
        "AC" => m.reset(),
        "+" | "-" | "*" | "/" => m.inserer_operateur(touche),
        chiffre => m.inserer_chiffre(chiffre),
    }
}

fn assert_bien_forme(jetons: &[Tok], contexte: &str) {
    if let Some(premier) = jetons.first() {
        assert!(premier.est_num(), "commence par {premier}: {contexte}");
    }

    for w in jetons.windows(2) {
        assert!(
            !(w[0].est_num() && w[1].est_num()),
            "deux nombres consécutifs: {contexte}"
        );
        assert!(
            !(w[0].est_op() && w[1].est_op()),
            "deux opérateurs consécutifs: {contexte}"
        );
    }

    let egaux: Vec<usize> = jetons
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == Tok::Egal)
        .map(|(i, _)| i)
        .collect();
    assert!(egaux.len() <= 1, "plusieurs '=': {contexte}");
    if let Some(&i) = egaux.first() {
        assert_eq!(i + 2, jetons.len(), "'=' mal placé: {contexte}");
        assert!(jetons[i + 1].est_num(), "'=' sans résultat: {contexte}");
    }
}

fn campagne(seed: u64, sequences: usize, longueur: u32) {
    let start = Instant::now();
    let mut rng = Rng::new(seed);

    for _ in 0..sequences {
        budget(start, Duration::from_secs(5));

        let journal = Rc::new(Journal::default());
        let obs = Rc::downgrade(&journal) as Weak<dyn Observateur>;
        let mut m = Moteur::new(Reglages::default());
        m.attacher(obs);

        let mut trace = String::new();
        let n = 1 + rng.pick(longueur);
        for _ in 0..n {
            let touche = TOUCHES[rng.pick(TOUCHES.len() as u32) as usize];
            trace.push_str(touche);
            trace.push(' ');

            let avant = m.jetons().to_vec();
            let nb_aff = journal.affichages.borrow().len();
            let nb_err = *journal.erreurs.borrow();

            appuyer(&mut m, touche);

            assert_bien_forme(m.jetons(), &trace);

            let nouvel_aff = journal.affichages.borrow().len() - nb_aff;
            let nouvelle_err = *journal.erreurs.borrow() - nb_err;
            assert!(nouvel_aff + nouvelle_err <= 1, "notifications multiples: {trace}");

            if nouvelle_err == 1 {
                // erreur => rien n’a bougé
                assert_eq!(m.jetons(), avant.as_slice(), "jetons modifiés: {trace}");
            }
            if nouvel_aff == 1 {
                let dernier = journal.affichages.borrow().last().cloned().unwrap_or_default();
                if touche == "AC" {
                    assert_eq!(dernier, "0");
                } else {
                    assert_eq!(dernier, format_tokens(m.jetons()), "écran désynchronisé: {trace}");
                }
            }
        }
    }
}

/// Rejoue la même séquence sur deux moteurs : mêmes jetons à la fin.
fn rejouer(seed: u64, n: u32) -> Vec<Tok> {
    let mut rng = Rng::new(seed);
    let mut m = Moteur::default();
    for _ in 0..n {
        let touche = TOUCHES[rng.pick(TOUCHES.len() as u32) as usize];
        appuyer(&mut m, touche);
    }
    m.jetons().to_vec()
}

#[test]
fn fuzz_invariants_jetons() {
    campagne(0xC0FFEE, 2_000, 40);
}

#[test]
fn fuzz_invariants_sequences_longues() {
    campagne(42, 200, 200);
}

#[test]
fn fuzz_determinisme() {
    for seed in [1u64, 7, 1234, 0xDEADBEEF] {
        assert_eq!(rejouer(seed, 300), rejouer(seed, 300), "seed={seed}");
    }
}
