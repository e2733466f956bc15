//! Adaptive sampling of 1-D functions.
//!
//! Produces `x,y` datasets whose reveal order follows the refinement order:
//! the interval with the largest loss is always bisected next, so the
//! animation shows detail accumulating where the function changes fastest.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cost of keeping the segment `(x1, y1)`–`(x2, y2)` unrefined.
pub trait SubdivLoss {
    /// Loss of one segment.
    fn loss(&self, x1: f64, x2: f64, y1: f64, y2: f64) -> f64;
}

/// Squared segment length.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanLoss;

impl SubdivLoss for EuclideanLoss {
    fn loss(&self, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
        (y2 - y1).powi(2) + (x2 - x1).powi(2)
    }
}

#[derive(Debug, Clone, Copy)]
struct Subdiv {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
    loss: f64,
}

// Heap order is by loss alone.
impl PartialEq for Subdiv {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Subdiv {}

impl PartialOrd for Subdiv {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Subdiv {
    fn cmp(&self, other: &Self) -> Ordering {
        self.loss.total_cmp(&other.loss)
    }
}

/// Bisects the highest-loss interval of `[lower, upper]` on each step.
pub struct AdaptiveSampler<F, L> {
    f: F,
    loss: L,
    queue: BinaryHeap<Subdiv>,
}

impl<F, L> std::fmt::Debug for AdaptiveSampler<F, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveSampler")
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl<F, L> AdaptiveSampler<F, L>
where
    F: Fn(f64) -> f64,
    L: SubdivLoss,
{
    /// Seed the sampler with the whole interval at loss 1.
    pub fn new(f: F, loss: L, lower: f64, upper: f64) -> Self {
        let mut queue = BinaryHeap::new();
        queue.push(Subdiv {
            left: lower,
            right: upper,
            f_left: f(lower),
            f_right: f(upper),
            loss: 1.0,
        });
        Self { f, loss, queue }
    }

    /// Evaluate the sampled function.
    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// Largest loss still waiting to be refined.
    pub fn max_loss(&self) -> f64 {
        self.queue.peek().map_or(0.0, |s| s.loss)
    }

    /// Bisect the worst interval and return its midpoint sample.
    pub fn next_sample(&mut self) -> (f64, f64) {
        // The queue always holds at least one interval: each pop pushes two.
        let Some(worst) = self.queue.pop() else {
            return (f64::NAN, f64::NAN);
        };

        let mid = (worst.left + worst.right) / 2.0;
        let f_mid = self.eval(mid);

        self.queue.push(Subdiv {
            left: worst.left,
            right: mid,
            f_left: worst.f_left,
            f_right: f_mid,
            loss: self.loss.loss(worst.left, mid, worst.f_left, f_mid),
        });
        self.queue.push(Subdiv {
            left: mid,
            right: worst.right,
            f_left: f_mid,
            f_right: worst.f_right,
            loss: self.loss.loss(mid, worst.right, f_mid, worst.f_right),
        });

        (mid, f_mid)
    }

    /// Sample until no interval has a loss above `tol`.
    ///
    /// Always takes at least one sample. Points come back in sampling order.
    pub fn until(&mut self, tol: f64) -> Vec<(f64, f64)> {
        let mut samples = Vec::new();
        loop {
            samples.push(self.next_sample());
            if self.max_loss() <= tol {
                break;
            }
        }
        tracing::debug!("Adaptive sampler took {} samples", samples.len());
        samples
    }
}

/// A sharp peak of half-width `width` at 0 on top of the identity line.
pub fn peak(width: f64) -> impl Fn(f64) -> f64 {
    let w2 = width * width;
    move |x| x + w2 / (w2 + x * x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euclidean_loss() {
        assert_relative_eq!(EuclideanLoss.loss(0.0, 3.0, 0.0, 4.0), 25.0);
    }

    #[test]
    fn test_first_sample_is_midpoint() {
        let mut sampler = AdaptiveSampler::new(|x: f64| 2.0 * x, EuclideanLoss, 0.0, 4.0);
        assert_eq!(sampler.next_sample(), (2.0, 4.0));
    }

    #[test]
    fn test_worst_interval_bisected_next() {
        // Steep on the right half, flat on the left.
        let f = |x: f64| if x > 0.5 { 10.0 * x } else { 0.0 };
        let mut sampler = AdaptiveSampler::new(f, EuclideanLoss, 0.0, 1.0);
        sampler.next_sample();
        let (x, _) = sampler.next_sample();
        assert_relative_eq!(x, 0.75);
    }

    #[test]
    fn test_until_reaches_tolerance() {
        let mut sampler = AdaptiveSampler::new(peak(0.01), EuclideanLoss, -1.0, 1.0);
        let samples = sampler.until(0.01);
        assert!(!samples.is_empty());
        assert!(sampler.max_loss() <= 0.01);
        assert!(samples.iter().all(|(x, _)| (-1.0..=1.0).contains(x)));
    }

    #[test]
    fn test_until_takes_at_least_one_sample() {
        let mut sampler = AdaptiveSampler::new(|_: f64| 0.0, EuclideanLoss, 0.0, 0.01);
        assert_eq!(sampler.until(1.0).len(), 1);
    }

    #[test]
    fn test_peak_shape() {
        let f = peak(0.01);
        assert_relative_eq!(f(0.0), 1.0);
        assert!(f(0.5) < 0.51);
    }
}
