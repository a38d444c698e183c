pub mod metric_gauge;
