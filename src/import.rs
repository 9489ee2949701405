//! HTTP delivery to the VictoriaMetrics bulk-import endpoint.
//!
//! One blocking POST per run. VictoriaMetrics answers 204 with an empty body
//! when it accepts the payload; anything else is reported with status and
//! body and the process still exits cleanly. There is no retry.

use anyhow::{Context, Result};

pub const IMPORT_PATH: &str = "/api/v1/import/prometheus";

#[derive(Debug)]
pub enum ImportStatus {
    Accepted,
    Rejected { status: u16, body: String },
}

pub(crate) fn import_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), IMPORT_PATH)
}

pub fn import_prometheus(base_url: &str, payload: &str) -> Result<ImportStatus> {
    let url = import_url(base_url);
    // Non-2xx statuses come back as responses so the body stays readable.
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .post(url.as_str())
        .header("Content-Type", "text/plain")
        .send(payload)
        .with_context(|| format!("POST {url}"))?;

    let status = response.status().as_u16();
    if status == 204 {
        return Ok(ImportStatus::Accepted);
    }
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(ImportStatus::Rejected { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_url_joins_without_double_slash() {
        assert_eq!(
            import_url("http://localhost:9090"),
            "http://localhost:9090/api/v1/import/prometheus"
        );
        assert_eq!(
            import_url("http://localhost:9090/"),
            "http://localhost:9090/api/v1/import/prometheus"
        );
    }
}
