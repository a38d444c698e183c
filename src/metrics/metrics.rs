use crate::leontp::structs::status_record::StatusRecord;
use crate::metrics::structs::metric_gauge::MetricGauge;

pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub const UPTIME_GAUGE: MetricGauge = MetricGauge::new(
    "leontp_uptime_seconds",
    "Number of seconds this device has been running since its last reboot",
);

pub const NTP_REQUESTS_GAUGE: MetricGauge = MetricGauge::new(
    "leontp_ntp_request_count",
    "Number of NTP requests since the device's last reboot",
);

pub const LOCK_TIME_GAUGE: MetricGauge = MetricGauge::new(
    "leontp_lock_time_seconds",
    "Number of seconds that this device has been locked to GPS",
);

pub const SATELLITES_GAUGE: MetricGauge = MetricGauge::new(
    "leontp_satellites_count",
    "Current number of visible satellites",
);

pub fn status_exposition(status: &StatusRecord) -> String {
    let mut string_output = String::with_capacity(1024);
    string_output.push_str(&UPTIME_GAUGE.render(u64::from(status.uptime_seconds)));
    string_output.push_str(&NTP_REQUESTS_GAUGE.render(u64::from(status.ntp_request_count)));
    string_output.push_str(&LOCK_TIME_GAUGE.render(u64::from(status.gps_lock_seconds)));
    string_output.push_str(&SATELLITES_GAUGE.render(u64::from(status.satellite_count)));
    string_output
}
