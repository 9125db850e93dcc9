//! Launch context parsing.
//!
//! The host hands the webapp an opaque init payload: a URL-encoded query
//! string whose `start_param` entry carries the raffle identifier. Host
//! start parameters are restricted to `[A-Za-z0-9_-]`, which admits a
//! hyphenated UUID plus an optional `_preview` suffix.

use url::form_urlencoded;
use uuid::Uuid;

/// Start-parameter suffix that selects the preview endpoint.
const PREVIEW_SUFFIX: &str = "_preview";

/// Which raffle the app was launched for, parsed once at startup.
///
/// Absence of a parsable identifier is a valid terminal state ("raffle not
/// found"), never an error; parsing returns `Option` throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchContext {
    pub raffle_id: Uuid,
    pub preview: bool,
}

/// Extract the launch context from the raw init payload.
pub fn parse_init_data(init_data: &str) -> Option<LaunchContext> {
    let start_param = form_urlencoded::parse(init_data.as_bytes())
        .find(|(key, _)| key == "start_param")
        .map(|(_, value)| value.into_owned())?;
    parse_start_param(&start_param)
}

/// Parse a bare start parameter: `<uuid>` or `<uuid>_preview`.
pub fn parse_start_param(start_param: &str) -> Option<LaunchContext> {
    let (raffle_id, preview) = match start_param.strip_suffix(PREVIEW_SUFFIX) {
        Some(prefix) => (prefix, true),
        None => (start_param, false),
    };
    let raffle_id = Uuid::parse_str(raffle_id).ok()?;
    Some(LaunchContext { raffle_id, preview })
}
