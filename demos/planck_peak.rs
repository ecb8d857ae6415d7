//! Peak wavelength of black-body radiation.
//!
//! The spectral radiance B(λ, T) peaks where `u e^u / (e^u - 1) = 5` with
//! `u = hc / (λ k T)`. Bisection on a wide bracket recovers Wien's law
//! `λ_max T ≈ 2.8978e-3 m·K`.
//!
//! ```text
//! cargo run --example planck_peak -- 5778
//! ```

use rootbracket::{bisection, BisectionCfg, BisectionError, RootFindingReport};

/// Wien's displacement constant, m·K.
const WIEN_B: f64 = 2.897771955e-3;

#[derive(Debug, Clone, Copy)]
struct PlanckParams {
    h           : f64,
    c           : f64,
    k_b         : f64,
    temperature : f64,
}

impl PlanckParams {
    /// SI values of the defining constants.
    fn si(temperature: f64) -> Self {
        Self { h: 6.62607015e-34, c: 299_792_458.0, k_b: 1.380649e-23, temperature }
    }

    fn stationarity(&self, lambda: f64) -> f64 {
        let u = self.h * self.c / (lambda * self.k_b * self.temperature);
        u / -(-u).exp_m1() - 5.0
    }
}

fn peak(p: PlanckParams) -> Result<RootFindingReport, BisectionError> {
    let cfg = BisectionCfg::new().clear_tolerances().set_abs_x(1e-20)?;
    bisection(|l| p.stationarity(l), 10e-9, 1e-3, cfg)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temps: Vec<f64> = match std::env::args().nth(1) {
        Some(t) => vec![t.parse()?],
        None    => vec![300.0, 3000.0, 5778.0, 10_000.0],
    };

    println!("{:>10}  {:>14}  {:>14}  {:>6}", "T [K]", "peak [nm]", "λT [m·K]", "iters");
    for t in temps {
        let res = peak(PlanckParams::si(t))?;
        println!(
            "{:>10.1}  {:>14.6}  {:>14.9e}  {:>6}",
            t, res.root * 1e9, res.root * t, res.iterations
        );
    }
    println!("Wien's constant: {WIEN_B:e} m·K");
    Ok(())
}
