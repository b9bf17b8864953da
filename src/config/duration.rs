use std::time::Duration;

use tracing::warn;

/// Renders a duration the way config files carry it ("10s", "5m", "1m30s").
pub fn format(value: Duration) -> String {
    humantime::format_duration(value).to_string().replace(' ', "")
}

/// Parses a textual duration, falling back to zero when `raw` is not a valid
/// duration. Zero never passes validation, so the bad value still surfaces
/// as a validation error further up.
pub fn parse_or_zero(field: &str, raw: &str) -> Duration {
    humantime::parse_duration(raw).unwrap_or_else(|err| {
        warn!(
            error = %err,
            field,
            value = raw,
            "Failed to parse duration, using zero"
        );
        Duration::ZERO
    })
}
