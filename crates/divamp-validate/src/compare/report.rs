//! Comparison report generation.

use serde::{Deserialize, Serialize};

/// Comparison result for a single quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableComparison {
    /// Quantity name (e.g., "Vp").
    pub name: String,
    /// Whether the computed value is within tolerance of the measurement.
    pub passed: bool,
    /// Measured value (V).
    pub measured: f64,
    /// Computed value (V), absent if the model has no such quantity.
    pub computed: Option<f64>,
    /// Signed difference `computed - measured` (V).
    pub error: Option<f64>,
    /// Relative error against the measured value.
    pub rel_error: Option<f64>,
    /// Remark carried over from the measurement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Summary statistics for a comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Total number of quantities compared.
    pub total_variables: usize,
    /// Number of quantities that passed.
    pub passed_variables: usize,
    /// Number of quantities that failed.
    pub failed_variables: usize,
    /// Maximum relative error observed.
    pub max_rel_error: f64,
    /// Average relative error observed.
    pub avg_rel_error: f64,
}

/// Complete comparison report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// What was compared.
    pub title: String,
    /// Whether every quantity passed.
    pub passed: bool,
    /// Per-quantity results.
    pub comparisons: Vec<VariableComparison>,
    /// Overall summary statistics.
    pub summary: ComparisonSummary,
}

impl ComparisonReport {
    /// Create a new report.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            passed: true,
            comparisons: Vec::new(),
            summary: ComparisonSummary::default(),
        }
    }

    /// Add a comparison result.
    pub fn add_comparison(&mut self, comp: VariableComparison) {
        if comp.passed {
            self.summary.passed_variables += 1;
        } else {
            self.passed = false;
            self.summary.failed_variables += 1;
        }
        self.summary.total_variables += 1;
        self.comparisons.push(comp);
    }

    /// Finalize the report by computing summary statistics.
    ///
    /// Quantities without a computed value do not contribute to the error
    /// statistics.
    pub fn finalize(&mut self) {
        let errors: Vec<f64> = self
            .comparisons
            .iter()
            .filter_map(|c| c.rel_error)
            .filter(|e| e.is_finite())
            .collect();

        if errors.is_empty() {
            return;
        }

        self.summary.max_rel_error = errors.iter().copied().fold(0.0, f64::max);
        self.summary.avg_rel_error = errors.iter().sum::<f64>() / errors.len() as f64;
    }

    /// Format as human-readable text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Comparison Report: {}\n", self.title));
        out.push_str(&format!(
            "Status: {}\n",
            if self.passed { "PASS" } else { "FAIL" }
        ));
        out.push_str(&format!(
            "Quantities: {}/{} passed\n\n",
            self.summary.passed_variables, self.summary.total_variables
        ));

        for comp in &self.comparisons {
            let status = if comp.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("  {}: {}\n", comp.name, status));
            out.push_str(&format!("    Measured: {:.3} V\n", comp.measured));
            match (comp.computed, comp.error, comp.rel_error) {
                (Some(computed), Some(error), Some(rel)) => {
                    out.push_str(&format!("    Computed: {:.3} V\n", computed));
                    out.push_str(&format!(
                        "    Error:    {:+.3} V ({:.2}%)\n",
                        error,
                        rel * 100.0
                    ));
                }
                _ => out.push_str("    Computed: missing\n"),
            }
            if let Some(ref note) = comp.note {
                out.push_str(&format!("    Note:     {}\n", note));
            }
        }

        out.push_str(&format!(
            "\nMax relative error: {:.2}%\nAvg relative error: {:.2}%\n",
            self.summary.max_rel_error * 100.0,
            self.summary.avg_rel_error * 100.0
        ));

        if !self.passed {
            out.push_str("\nFailed quantities:\n");
            for comp in self.comparisons.iter().filter(|c| !c.passed) {
                out.push_str(&format!("  - {}\n", comp.name));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(name: &str, passed: bool, rel: Option<f64>) -> VariableComparison {
        VariableComparison {
            name: name.to_string(),
            passed,
            measured: 1.0,
            computed: rel.map(|r| 1.0 + r),
            error: rel,
            rel_error: rel,
            note: None,
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let mut report = ComparisonReport::new("empty");
        report.finalize();
        assert!(report.passed);
        assert_eq!(report.summary.total_variables, 0);
        assert_eq!(report.summary.max_rel_error, 0.0);
    }

    #[test]
    fn test_failure_marks_report() {
        let mut report = ComparisonReport::new("t");
        report.add_comparison(comparison("Vcc", true, Some(0.001)));
        report.add_comparison(comparison("Vp", false, Some(0.03)));
        report.finalize();

        assert!(!report.passed);
        assert_eq!(report.summary.passed_variables, 1);
        assert_eq!(report.summary.failed_variables, 1);
        assert!((report.summary.max_rel_error - 0.03).abs() < 1e-12);
        assert!((report.summary.avg_rel_error - 0.0155).abs() < 1e-12);
    }

    #[test]
    fn test_missing_excluded_from_stats() {
        let mut report = ComparisonReport::new("t");
        report.add_comparison(comparison("Vx", false, None));
        report.add_comparison(comparison("Vcc", true, Some(0.02)));
        report.finalize();
        assert!((report.summary.avg_rel_error - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_to_text() {
        let mut report = ComparisonReport::new("bench");
        report.add_comparison(comparison("Vcc", true, Some(0.0)));
        report.add_comparison(comparison("Vx", false, None));
        report.finalize();

        let text = report.to_text();
        assert!(text.starts_with("Comparison Report: bench\n"));
        assert!(text.contains("Status: FAIL"));
        assert!(text.contains("Quantities: 1/2 passed"));
        assert!(text.contains("    Computed: missing"));
        assert!(text.contains("Failed quantities:\n  - Vx\n"));
    }

    #[test]
    fn test_serialized_report_carries_status() {
        let mut report = ComparisonReport::new("bench");
        report.add_comparison(comparison("Vcc", true, Some(0.0)));
        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], true);
        assert_eq!(value["comparisons"][0]["name"], "Vcc");
    }
}
