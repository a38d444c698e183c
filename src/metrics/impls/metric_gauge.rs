use crate::metrics::structs::metric_gauge::MetricGauge;

impl MetricGauge {
    pub const fn new(name: &'static str, help: &'static str) -> MetricGauge {
        MetricGauge { name, help }
    }

    /// Render the HELP/TYPE header and a single unlabeled sample.
    pub fn render(&self, value: u64) -> String {
        format!(
            "# HELP {} {}\n# TYPE {} gauge\n{} {}\n",
            self.name, self.help,
            self.name,
            self.name, value
        )
    }
}
