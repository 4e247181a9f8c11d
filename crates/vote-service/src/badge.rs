//! Badge renderer
//!
//! Produces the small SVG badge embedding a channel's current tally. The
//! template is fixed-size and the output is deterministic: the same count
//! always yields byte-identical bytes. Nothing is cached; callers render
//! per request.

/// Badge width in SVG units
pub const WIDTH: u32 = 52;

/// Badge height in SVG units
pub const HEIGHT: u32 = 22;

/// Render the badge for a vote count.
pub fn render(vote: i64) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" x="0px" y="0px" width="52px" height="22px" viewBox="0 0 52 22" fill="none"><style>.text {{ font-family: "Segoe UI", Ubuntu, Sans-Serif; font-weight: bold; }}</style><rect x="0.5" y="0.5" height="99%" width="51" fill="none"/><g><text x="5" y="15" fill="#00b4f0" class="text">{vote}</text></g></svg>"##
    )
}
