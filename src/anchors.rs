use log::debug;

use crate::config::AnchorConfig;
use crate::dom::{EventKind, Host, Node, ScrollBehavior};
use crate::error::DomError;

/// Smoothly scrolls to the element `fragment` selects. Returns false when
/// nothing matches or the fragment is not a usable selector.
pub fn scroll_to_fragment<H: Host>(host: &H, fragment: &str) -> bool {
    match host.query_selector(fragment) {
        Ok(Some(target)) => {
            target.scroll_into_view(ScrollBehavior::Smooth);
            true
        }
        Ok(None) => {
            debug!("No element for anchor {}", fragment);
            false
        }
        Err(err) => {
            debug!("Skipping anchor: {}", err);
            false
        }
    }
}

pub fn init<H: Host>(host: &H, config: &AnchorConfig) -> Result<(), DomError> {
    let anchors = host.query_selector_all(&config.selector)?;
    for anchor in &anchors {
        let scroll_host = host.clone();
        let clicked = anchor.clone();
        host.listen(
            anchor,
            EventKind::Click,
            Box::new(move |event| {
                event.prevent_default();
                if let Some(fragment) = clicked.attribute("href") {
                    scroll_to_fragment(&scroll_host, &fragment);
                }
            }),
        )?;
    }
    debug!("Smooth scrolling {} anchor links", anchors.len());
    Ok(())
}
