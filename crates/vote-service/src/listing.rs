//! Listing page renderer
//!
//! Renders the all-channels page as a minimal HTML document, one list item
//! per channel in store order. Channel names are interpolated into markup,
//! so they are escaped.

use vote_core::entities::Channel;

/// Render the all-channels page.
pub fn render_page(channels: &[Channel]) -> String {
    let mut items = String::new();
    for channel in channels {
        items.push_str(&format!(
            "    <li>{}: {}</li>\n",
            escape(&channel.name),
            channel.vote
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>All channels</title></head>\n\
         <body>\n\
           <h1>All channels</h1>\n\
           <ul>\n\
         {items}  </ul>\n\
         </body>\n\
         </html>\n"
    )
}

/// Minimal HTML escaping for text interpolated into markup
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
