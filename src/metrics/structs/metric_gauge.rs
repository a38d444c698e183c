#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MetricGauge {
    pub name: &'static str,
    pub help: &'static str,
}
