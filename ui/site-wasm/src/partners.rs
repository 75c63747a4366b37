//! Partner logo strip.

use crate::dom;
use wasm_bindgen::prelude::*;

/// Append a copy of every logo so the CSS marquee loops without a gap.
pub fn duplicate_partner_logos() -> Result<(), JsValue> {
    let Some(track) = dom::by_id("partners-scroll") else {
        return Ok(());
    };

    for logo in dom::query_all_within(&track, ".partner-logo") {
        let clone = logo.clone_node_with_deep(true)?;
        track.append_child(&clone)?;
    }
    Ok(())
}
