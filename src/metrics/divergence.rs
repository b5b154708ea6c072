//! Jensen-Shannon divergence

fn normalized(weights: &[f64], eps: f64) -> Vec<f64> {
    let clipped: Vec<f64> = weights.iter().map(|w| w.clamp(eps, 1.0)).collect();
    let total: f64 = clipped.iter().sum();
    clipped.into_iter().map(|w| w / total).collect()
}

fn kl(p: &[f64], q: &[f64]) -> f64 {
    p.iter().zip(q).map(|(a, b)| a * (a / b).ln()).sum()
}

/// Jensen-Shannon divergence in nats between two aligned distributions
///
/// Both inputs are clipped to `[eps, 1]` and renormalised, so raw
/// proportions with zeros are accepted. The result is symmetric and lies in
/// `[0, ln 2]`. Empty inputs yield 0.0.
///
/// # Panics
///
/// Panics if `p` and `q` have different lengths.
pub fn js_divergence(p: &[f64], q: &[f64], eps: f64) -> f64 {
    assert_eq!(
        p.len(),
        q.len(),
        "js_divergence needs distributions over the same categories"
    );
    if p.is_empty() {
        return 0.0;
    }

    let p = normalized(p, eps);
    let q = normalized(q, eps);
    let mixture: Vec<f64> = p.iter().zip(&q).map(|(a, b)| 0.5 * (a + b)).collect();

    (0.5 * kl(&p, &mixture) + 0.5 * kl(&q, &mixture)).max(0.0)
}
