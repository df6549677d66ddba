/// Placeholder page served for a report that is not currently issued.
pub const SENTINEL_PREFIX: &str = "Cannot";

const HTTP_OK: u16 = 200;

/// True when the body looks like the "report not present" placeholder,
/// with or without its surrounding `<b>` tag.
pub fn is_sentinel(body: &str) -> bool {
    let body = body.trim_start();
    let body = body.strip_prefix("<b>").unwrap_or(body);
    body.starts_with(SENTINEL_PREFIX)
}

/// A report is absent only when the body is the sentinel AND the status is
/// not 200. A 200 response is always kept.
pub fn should_keep(status: u16, body: &str) -> bool {
    status == HTTP_OK || !is_sentinel(body)
}
