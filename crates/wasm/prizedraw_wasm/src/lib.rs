use wasm_bindgen::prelude::*;

/// Returns the version of the prizedraw_wasm package.
#[wasm_bindgen]
pub fn version() -> String {
    prizedraw_core::version().to_string()
}

/// Parse the host init payload into a launch context for the browser shell.
///
/// Returns a camelCase JSON object (`{"raffleId": ..., "isPreview": ...}`),
/// or `None` when the payload carries no parsable raffle identifier.
#[wasm_bindgen]
pub fn parse_launch_context(init_data: &str) -> Option<String> {
    prizedraw_core::launch::parse_init_data(init_data).map(|ctx| {
        serde_json::json!({
            "raffleId": ctx.raffle_id.to_string(),
            "isPreview": ctx.preview,
        })
        .to_string()
    })
}
