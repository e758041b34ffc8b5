//! Strategy collection
//!
//! Runs several rotation algorithms against one source raster and one set
//! of parameters, producing labeled outputs for side-by-side comparison.
//! Each strategy computes lazily and caches its result for the lifetime of
//! the instance; recomputing with different parameters means constructing a
//! new instance. Strategies fail independently: one failure never aborts
//! the rest of the collection.

use std::cell::{Cell, OnceCell};

use crate::backward::rotate_backward;
use crate::error::{RotateError, RotateResult};
use crate::fill::fill_holes;
use crate::forward::{CanvasMode, rotate_forward};
use crate::math::RotationParams;
use crate::oracle::rotate_reference;
use rastermap_core::Raster;

/// The closed set of rotation algorithms a collection can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Source-to-destination mapping; gap-prone, repaired by one
    /// hole-filling pass.
    Forward(CanvasMode),
    /// Destination-to-source mapping; hole-free by construction.
    Backward,
    /// The trusted external implementation, for comparison only.
    Reference,
}

impl Algorithm {
    /// Human-readable algorithm name, used in result labels.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Forward(_) => "forward mapping",
            Algorithm::Backward => "backward mapping",
            Algorithm::Reference => "reference library",
        }
    }
}

/// A labeled rotation output.
///
/// Computed once per strategy instance and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatedResult {
    /// Identifies the producing strategy; display/test key
    pub label: String,
    /// The rotated raster
    pub raster: Raster,
    /// The (un-normalized) angle the caller asked for
    pub source_degrees: i64,
}

/// One algorithm bound to one source and one set of parameters, with a
/// lazily computed, memoized result.
///
/// The memo cell moves one way, uninitialized to computed; there is no
/// reset. The full `Result` is cached, so a failure is re-reported
/// identically on later calls without rerunning the mapper.
pub struct RotationStrategy<'a> {
    algorithm: Algorithm,
    source: &'a Raster,
    source_name: String,
    params: RotationParams,
    result: OnceCell<RotateResult<RotatedResult>>,
    runs: Cell<u32>,
}

impl<'a> RotationStrategy<'a> {
    /// Bind `algorithm` to a source raster and parameters. `source_name`
    /// is the display name of the input (typically the file stem).
    pub fn new(
        algorithm: Algorithm,
        source_name: &str,
        source: &'a Raster,
        params: RotationParams,
    ) -> Self {
        RotationStrategy {
            algorithm,
            source,
            source_name: source_name.to_string(),
            params,
            result: OnceCell::new(),
            runs: Cell::new(0),
        }
    }

    /// The algorithm this strategy runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The parameters this strategy was constructed with.
    pub fn params(&self) -> &RotationParams {
        &self.params
    }

    /// Label combining source name, angle, and algorithm name, e.g.
    /// `"lenna rotated 45 degrees using backward mapping"`.
    pub fn label(&self) -> String {
        let degrees = self.params.angle_degrees;
        let unit = if degrees.abs() == 1 { "degree" } else { "degrees" };
        format!(
            "{} rotated {} {} using {}",
            self.source_name,
            degrees,
            unit,
            self.algorithm.name()
        )
    }

    /// Compute the rotation, or return the cached outcome.
    ///
    /// The first call runs the algorithm (forward mapping additionally runs
    /// the hole filler, exactly once); every later call returns the same
    /// result without recomputation.
    ///
    /// # Errors
    ///
    /// The underlying mapper error wrapped as
    /// [`RotateError::StrategyFailed`] with this strategy's label, angle,
    /// and pivot, so the caller can reproduce the failure.
    pub fn compute(&self) -> Result<&RotatedResult, RotateError> {
        let outcome = self.result.get_or_init(|| {
            self.runs.set(self.runs.get() + 1);
            self.run()
        });
        match outcome {
            Ok(result) => Ok(result),
            Err(err) => Err(err.clone()),
        }
    }

    /// How many times the algorithm has actually run (0 or 1); exposed for
    /// verifying the memoization contract.
    pub fn times_computed(&self) -> u32 {
        self.runs.get()
    }

    fn run(&self) -> RotateResult<RotatedResult> {
        let raster = match self.algorithm {
            Algorithm::Forward(mode) => {
                rotate_forward(self.source, &self.params, mode).map(|out| fill_holes(&out))
            }
            Algorithm::Backward => rotate_backward(self.source, &self.params),
            Algorithm::Reference => rotate_reference(self.source, &self.params),
        }
        .map_err(|err| RotateError::StrategyFailed {
            label: self.label(),
            angle: self.params.angle_degrees,
            px: self.params.pivot.0,
            py: self.params.pivot.1,
            source: Box::new(err),
        })?;

        Ok(RotatedResult {
            label: self.label(),
            raster,
            source_degrees: self.params.angle_degrees,
        })
    }
}

/// All registered strategies for one (source, parameters) pair, in
/// registration order.
pub struct RotationCollection<'a> {
    strategies: Vec<RotationStrategy<'a>>,
}

impl<'a> RotationCollection<'a> {
    /// The default line-up: auto-fit forward mapping, backward mapping, and
    /// the external reference.
    pub fn new(source_name: &str, source: &'a Raster, params: RotationParams) -> Self {
        Self::with_algorithms(
            source_name,
            source,
            params,
            &[
                Algorithm::Forward(CanvasMode::AutoFit),
                Algorithm::Backward,
                Algorithm::Reference,
            ],
        )
    }

    /// A custom set of algorithms, kept in the given order.
    pub fn with_algorithms(
        source_name: &str,
        source: &'a Raster,
        params: RotationParams,
        algorithms: &[Algorithm],
    ) -> Self {
        let strategies = algorithms
            .iter()
            .map(|&algorithm| RotationStrategy::new(algorithm, source_name, source, params))
            .collect();
        RotationCollection { strategies }
    }

    /// The registered strategies.
    pub fn strategies(&self) -> &[RotationStrategy<'a>] {
        &self.strategies
    }

    /// Find a strategy by its algorithm name (e.g. "backward mapping").
    pub fn get(&self, name: &str) -> Option<&RotationStrategy<'a>> {
        self.strategies.iter().find(|s| s.algorithm().name() == name)
    }

    /// The label each strategy will attach to its result, in registration
    /// order.
    pub fn labels(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.label()).collect()
    }

    /// Compute every strategy, yielding one outcome per strategy in
    /// registration order. A failing strategy reports its own error; the
    /// others still produce results.
    pub fn compute_all(&self) -> Vec<Result<&RotatedResult, RotateError>> {
        self.strategies.iter().map(|s| s.compute()).collect()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True iff no strategies are registered.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rastermap_core::Rgb;

    fn checker(w: u32, h: u32) -> Raster {
        let mut raster = Raster::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                let px = if (x + y) % 2 == 0 {
                    Rgb::WHITE
                } else {
                    Rgb::new(200, 30, 90)
                };
                raster.set_unchecked(x, y, px);
            }
        }
        raster
    }

    #[test]
    fn test_labels_follow_registration_order() {
        let src = checker(8, 8);
        let collection = RotationCollection::new("photo", &src, RotationParams::degrees(45));
        assert_eq!(
            collection.labels(),
            vec![
                "photo rotated 45 degrees using forward mapping",
                "photo rotated 45 degrees using backward mapping",
                "photo rotated 45 degrees using reference library",
            ]
        );
    }

    #[test]
    fn test_singular_degree_label() {
        let src = checker(4, 4);
        let strategy = RotationStrategy::new(
            Algorithm::Backward,
            "photo",
            &src,
            RotationParams::degrees(-1),
        );
        assert_eq!(
            strategy.label(),
            "photo rotated -1 degree using backward mapping"
        );
    }

    #[test]
    fn test_compute_is_memoized() {
        let src = checker(10, 10);
        let strategy = RotationStrategy::new(
            Algorithm::Forward(CanvasMode::AutoFit),
            "photo",
            &src,
            RotationParams::degrees(30).pivot(5, 5),
        );
        assert_eq!(strategy.times_computed(), 0);

        let first = strategy.compute().unwrap().clone();
        let second = strategy.compute().unwrap();
        assert_eq!(&first, second);
        assert_eq!(strategy.times_computed(), 1);
    }

    #[test]
    fn test_failures_are_cached_too() {
        let degenerate = Raster::from_raw(0, 0, Vec::new()).unwrap();
        let strategy = RotationStrategy::new(
            Algorithm::Backward,
            "broken",
            &degenerate,
            RotationParams::degrees(15),
        );
        let first = strategy.compute().unwrap_err();
        let second = strategy.compute().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(strategy.times_computed(), 1);
    }

    #[test]
    fn test_strategy_failure_carries_context() {
        let degenerate = Raster::from_raw(2, 0, Vec::new()).unwrap();
        let strategy = RotationStrategy::new(
            Algorithm::Backward,
            "broken",
            &degenerate,
            RotationParams::degrees(95).pivot(-7, 3),
        );
        match strategy.compute() {
            Err(RotateError::StrategyFailed {
                label,
                angle,
                px,
                py,
                source,
            }) => {
                assert_eq!(label, "broken rotated 95 degrees using backward mapping");
                assert_eq!(angle, 95);
                assert_eq!((px, py), (-7, 3));
                assert_eq!(
                    *source,
                    RotateError::DegenerateImage {
                        width: 2,
                        height: 0
                    }
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_compute_all_yields_every_strategy() {
        let src = checker(6, 6);
        let params = RotationParams::degrees(45).pivot(3, 3);
        let collection = RotationCollection::new("photo", &src, params);
        let outcomes = collection.compute_all();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.is_ok()));
    }

    #[test]
    fn test_failures_do_not_abort_the_collection() {
        // Every strategy rejects the degenerate raster, but each failure is
        // reported against its own label and the collection still yields an
        // outcome per strategy instead of stopping at the first error.
        let degenerate = Raster::from_raw(0, 0, Vec::new()).unwrap();
        let collection =
            RotationCollection::new("broken", &degenerate, RotationParams::degrees(45));
        let outcomes = collection.compute_all();

        assert_eq!(outcomes.len(), 3);
        let mut seen = Vec::new();
        for outcome in outcomes {
            match outcome {
                Err(RotateError::StrategyFailed { label, .. }) => seen.push(label),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
        assert!(seen[0].contains("forward mapping"));
        assert!(seen[1].contains("backward mapping"));
        assert!(seen[2].contains("reference library"));
    }

    #[test]
    fn test_get_by_algorithm_name() {
        let src = checker(4, 4);
        let collection = RotationCollection::new("photo", &src, RotationParams::degrees(10));
        assert!(collection.get("backward mapping").is_some());
        assert!(collection.get("sideways mapping").is_none());
        assert_eq!(collection.len(), 3);
        assert!(!collection.is_empty());
    }
}
