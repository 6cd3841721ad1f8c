//! Output formatting: JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Structured formats use
//! serde, plain emits a single scripting-friendly token.

use std::io::{self, Write};

use asactl_core::Report;

use crate::cli::OutputFormat;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render the result of one task.
///
/// Plain output is `changed`, `ok`, or `failed: <msg>`.
pub fn render_report(format: &OutputFormat, report: &Report) -> String {
    render_single(format, report, |r| match r {
        Report::Success { changed: true, .. } => "changed".into(),
        Report::Success { .. } => "ok".into(),
        Report::Failure { msg, .. } => format!("failed: {msg}"),
    })
}

/// Render a single serde-serializable item; `plain_fn` handles `plain`.
pub fn render_single<T>(format: &OutputFormat, data: &T, plain_fn: impl Fn(&T) -> String) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => plain_fn(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_else(|e| format!("{{\"failed\":true,\"msg\":\"serialization error: {e}\"}}"))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data)
        .map(|s| s.trim_end().to_owned())
        .unwrap_or_else(|e| format!("failed: true\nmsg: 'serialization error: {e}'"))
}

#[cfg(test)]
mod tests {
    use asactl_core::{Action, CoreError, Outcome};

    use super::*;

    #[test]
    fn plain_reports_changed_ok_or_failed() {
        let changed = Report::success(Outcome::from_actions(vec![Action::Deleted]));
        let unchanged = Report::success(Outcome::unchanged());
        let failed = Report::failure(&CoreError::Unauthorized);

        assert_eq!(render_report(&OutputFormat::Plain, &changed), "changed");
        assert_eq!(render_report(&OutputFormat::Plain, &unchanged), "ok");
        assert_eq!(
            render_report(&OutputFormat::Plain, &failed),
            "failed: Authentication error"
        );
    }

    #[test]
    fn compact_json_is_one_line() {
        let report = Report::success(Outcome::from_actions(vec![Action::Created]));
        assert_eq!(
            render_report(&OutputFormat::JsonCompact, &report),
            r#"{"changed":true,"actions":["created"]}"#
        );
    }

    #[test]
    fn yaml_has_changed_key() {
        let report = Report::success(Outcome::unchanged());
        let yaml = render_report(&OutputFormat::Yaml, &report);
        assert!(yaml.starts_with("changed: false"), "{yaml}");
    }
}
