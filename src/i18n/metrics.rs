//! Render metrics and observability.
//!
//! Counters are owned by the applier rather than held in a global, since the
//! applier is the only writer and each page session gets its own.

use serde::Serialize;

/// Counters for everything the applier and service renderer did.
#[derive(Debug, Clone, Default)]
pub struct RenderMetrics {
    renders: usize,
    unknown_language: usize,
    texts_applied: usize,
    texts_skipped: usize,
    placeholders_applied: usize,
    placeholders_skipped: usize,
    service_renders: usize,
    missing_container: usize,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed language render.
    pub fn record_render(&mut self) {
        self.renders += 1;
    }

    /// Record a render request for a language absent from the table.
    pub fn record_unknown_language(&mut self) {
        self.unknown_language += 1;
    }

    pub fn record_texts(&mut self, applied: usize, skipped: usize) {
        self.texts_applied += applied;
        self.texts_skipped += skipped;
    }

    pub fn record_placeholders(&mut self, applied: usize, skipped: usize) {
        self.placeholders_applied += applied;
        self.placeholders_skipped += skipped;
    }

    /// Record a services container write.
    pub fn record_service_render(&mut self) {
        self.service_renders += 1;
    }

    pub fn record_missing_container(&mut self) {
        self.missing_container += 1;
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn unknown_language(&self) -> usize {
        self.unknown_language
    }

    pub fn service_renders(&self) -> usize {
        self.service_renders
    }

    pub fn missing_container(&self) -> usize {
        self.missing_container
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let text_lookups = self.texts_applied + self.texts_skipped;
        let text_hit_rate = if text_lookups > 0 {
            (self.texts_applied as f64 / text_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            renders: self.renders,
            unknown_language: self.unknown_language,
            texts_applied: self.texts_applied,
            texts_skipped: self.texts_skipped,
            text_hit_rate,
            placeholders_applied: self.placeholders_applied,
            placeholders_skipped: self.placeholders_skipped,
            service_renders: self.service_renders,
            missing_container: self.missing_container,
        }
    }
}

/// Snapshot of render counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub renders: usize,
    pub unknown_language: usize,
    pub texts_applied: usize,
    pub texts_skipped: usize,

    /// Share of text lookups that resolved, as a percentage (0-100)
    pub text_hit_rate: f64,

    pub placeholders_applied: usize,
    pub placeholders_skipped: usize,
    pub service_renders: usize,
    pub missing_container: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = RenderMetrics::new().report();

        assert_eq!(report.renders, 0);
        assert_eq!(report.unknown_language, 0);
        assert_eq!(report.text_hit_rate, 0.0);
    }

    #[test]
    fn test_counters_accumulate() {
        let mut metrics = RenderMetrics::new();
        metrics.record_render();
        metrics.record_render();
        metrics.record_unknown_language();
        metrics.record_service_render();
        metrics.record_missing_container();

        assert_eq!(metrics.renders(), 2);
        assert_eq!(metrics.unknown_language(), 1);
        assert_eq!(metrics.service_renders(), 1);
        assert_eq!(metrics.missing_container(), 1);
    }

    #[test]
    fn test_text_hit_rate() {
        let mut metrics = RenderMetrics::new();
        metrics.record_texts(3, 1);

        let report = metrics.report();
        assert_eq!(report.texts_applied, 3);
        assert_eq!(report.texts_skipped, 1);
        assert!((report.text_hit_rate - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_report_serialization() {
        let mut metrics = RenderMetrics::new();
        metrics.record_placeholders(2, 0);

        let json = serde_json::to_string(&metrics.report()).expect("Should serialize");
        assert!(json.contains("\"placeholders_applied\":2"));
        assert!(json.contains("\"renders\":0"));
    }
}
