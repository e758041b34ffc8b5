//! Regression test parameters and comparisons

use rastermap_core::Raster;

/// Regression test state: a test name, a per-check index, and the recorded
/// failures.
///
/// Checks report through `eprintln!` as they fail; [`RegParams::cleanup`]
/// prints the summary and returns the overall verdict for the final
/// `assert!`.
pub struct RegParams {
    /// Name of the test (e.g. "rotate_identity")
    pub test_name: String,
    index: usize,
    success: bool,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a named regression test.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("==== {}_reg ====", test_name);
        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Index of the most recent check.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff > delta {
            self.fail(format!(
                "value comparison at index {}: expected {}, actual {}, \
                 difference {} > allowed delta {}",
                self.index, expected, actual, diff, delta
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality, reporting the first
    /// mismatching pixel.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if expected.width() != actual.width() || expected.height() != actual.height() {
            self.fail(format!(
                "raster comparison at index {}: dimension mismatch {}x{} vs {}x{}",
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        for y in 0..expected.height() {
            for x in 0..expected.width() {
                let e = expected.get_unchecked(x, y);
                let a = actual.get_unchecked(x, y);
                if e != a {
                    self.fail(format!(
                        "raster comparison at index {}: pixel mismatch at ({}, {}): \
                         expected {:?}, actual {:?}",
                        self.index, x, y, e, a
                    ));
                    return false;
                }
            }
        }

        true
    }

    /// Record an arbitrary boolean check.
    pub fn check(&mut self, condition: bool, message: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!("check at index {}: {}", self.index, message));
        }
        condition
    }

    /// Whether every check so far has passed.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The recorded failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Print the summary and return the overall verdict.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        self.success
    }

    fn fail(&mut self, message: String) {
        let message = format!("Failure in {}_reg: {}", self.test_name, message);
        eprintln!("{}", message);
        self.failures.push(message);
        self.success = false;
    }
}
