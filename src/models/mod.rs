pub mod line;
pub mod metric;

pub use line::{LogLine, UsageBlock};
pub use metric::{MetricPoint, TokenCounts};
