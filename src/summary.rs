use tracing::info;

use trafficgen::metrics::Summary;

const SEPARATOR: &str = "==================================================";

/// Renders the final statistics block, one entry per log line.
pub(crate) fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        SEPARATOR.to_owned(),
        "TRAFFIC GENERATION STATISTICS".to_owned(),
        SEPARATOR.to_owned(),
        format!("Total Requests: {}", summary.total_requests),
        format!("Successful: {}", summary.successful_requests),
        format!("Failed: {}", summary.failed_requests),
    ];
    if let Some(average) = summary.average_success_duration {
        lines.push(format!(
            "Average Response Time: {:.2}s",
            average.as_secs_f64()
        ));
    }
    lines.push(format!("Success Rate: {}%", summary.success_rate_display()));
    lines.push(SEPARATOR.to_owned());
    lines
}

pub(crate) fn print_summary(summary: &Summary) {
    for line in summary_lines(summary) {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use trafficgen::metrics::{RequestResult, Stats};
    use trafficgen::targets::Target;

    #[test]
    fn summary_block_with_successes() -> Result<(), String> {
        let target = Target::from("https://example.com");
        let results = [
            RequestResult::response(target.clone(), 200, Duration::from_secs(1)),
            RequestResult::response(target.clone(), 200, Duration::from_secs(2)),
            RequestResult::timed_out(target.clone()),
            RequestResult::timed_out(target),
        ];
        let stats: Stats = results.iter().collect();
        let lines = summary_lines(&stats.summarize());

        let expected = [
            SEPARATOR,
            "TRAFFIC GENERATION STATISTICS",
            SEPARATOR,
            "Total Requests: 4",
            "Successful: 2",
            "Failed: 2",
            "Average Response Time: 1.50s",
            "Success Rate: 50.0%",
            SEPARATOR,
        ];
        if lines != expected {
            return Err(format!("Unexpected summary: {:?}", lines));
        }
        Ok(())
    }

    #[test]
    fn summary_block_without_requests_omits_average() -> Result<(), String> {
        let lines = summary_lines(&Stats::new().summarize());
        if lines.iter().any(|line| line.starts_with("Average Response Time")) {
            return Err("Average should be omitted without successes".to_owned());
        }
        if !lines.iter().any(|line| line == "Success Rate: 0.0%") {
            return Err(format!("Expected 0.0% success rate: {:?}", lines));
        }
        Ok(())
    }
}
