use std::sync::atomic::{AtomicU64, Ordering};

use salvo::prelude::*;

use crate::web::web_state;

static CHART_PAGE_REQUESTS: AtomicU64 = AtomicU64::new(0);
static API_REQUESTS: AtomicU64 = AtomicU64::new(0);
static DB_ERRORS: AtomicU64 = AtomicU64::new(0);
static SAMPLES_SEEDED: AtomicU64 = AtomicU64::new(0);

pub struct Metrics;

impl Metrics {
    pub fn chart_page_request() {
        CHART_PAGE_REQUESTS.fetch_add(1, Ordering::Relaxed);
    }

    pub fn api_request() {
        API_REQUESTS.fetch_add(1, Ordering::Relaxed);
    }

    pub fn db_error() {
        DB_ERRORS.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_samples_seeded(count: u64) {
        SAMPLES_SEEDED.store(count, Ordering::Relaxed);
    }
}

pub fn format_prometheus(uptime_seconds: u64) -> String {
    let chart_requests = CHART_PAGE_REQUESTS.load(Ordering::Relaxed);
    let api_requests = API_REQUESTS.load(Ordering::Relaxed);
    let db_errors = DB_ERRORS.load(Ordering::Relaxed);
    let samples_seeded = SAMPLES_SEEDED.load(Ordering::Relaxed);

    format!(
        r#"# HELP gaussboard_uptime_seconds Number of seconds the server has been running
# TYPE gaussboard_uptime_seconds gauge
gaussboard_uptime_seconds {}

# HELP gaussboard_chart_page_requests Total number of chart page requests
# TYPE gaussboard_chart_page_requests counter
gaussboard_chart_page_requests {}

# HELP gaussboard_api_requests Total number of JSON API requests
# TYPE gaussboard_api_requests counter
gaussboard_api_requests {}

# HELP gaussboard_db_errors Number of database errors surfaced to clients
# TYPE gaussboard_db_errors counter
gaussboard_db_errors {}

# HELP gaussboard_samples_seeded Number of rows inserted by the last seed run
# TYPE gaussboard_samples_seeded gauge
gaussboard_samples_seeded {}
"#,
        uptime_seconds, chart_requests, api_requests, db_errors, samples_seeded,
    )
}

#[handler]
pub async fn metrics_endpoint(res: &mut Response) {
    let uptime_seconds = web_state().started_at.elapsed().as_secs();
    res.headers_mut()
        .insert("Content-Type", "text/plain; charset=utf-8".parse().unwrap());
    res.body(format_prometheus(uptime_seconds));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_increments_counters() {
        let before_chart = CHART_PAGE_REQUESTS.load(Ordering::Relaxed);
        let before_api = API_REQUESTS.load(Ordering::Relaxed);

        Metrics::chart_page_request();
        Metrics::api_request();
        Metrics::set_samples_seeded(404);

        assert_eq!(CHART_PAGE_REQUESTS.load(Ordering::Relaxed), before_chart + 1);
        assert_eq!(API_REQUESTS.load(Ordering::Relaxed), before_api + 1);
        assert_eq!(SAMPLES_SEEDED.load(Ordering::Relaxed), 404);
    }

    #[test]
    fn format_prometheus_includes_all_metrics() {
        let output = format_prometheus(12);
        assert!(output.contains("gaussboard_uptime_seconds 12"));
        assert!(output.contains("gaussboard_chart_page_requests"));
        assert!(output.contains("gaussboard_api_requests"));
        assert!(output.contains("gaussboard_db_errors"));
        assert!(output.contains("gaussboard_samples_seeded"));
    }
}
