use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::config::RevealConfig;
use crate::dom::{Host, Node};
use crate::error::DomError;

fn hide<N: Node>(element: &N, config: &RevealConfig) -> Result<(), DomError> {
    element.set_style("opacity", "0")?;
    element.set_style("transform", &config.hidden_transform)?;
    element.set_style("transition", &config.transition)?;
    Ok(())
}

fn show<N: Node>(element: &N, config: &RevealConfig) -> Result<(), DomError> {
    element.set_style("opacity", "1")?;
    element.set_style("transform", &config.shown_transform)?;
    Ok(())
}

/// Hides every matching element and reveals each one the first time it
/// scrolls into view. The element set is fixed at init. An element that
/// cannot be hidden is left as it is and not watched.
pub fn init<H: Host>(host: &H, config: &RevealConfig) -> Result<(), DomError> {
    let targets: Vec<H::Node> = host
        .query_selector_all(&config.selector)?
        .into_iter()
        .filter(|target| match hide(target, config) {
            Ok(()) => true,
            Err(err) => {
                warn!("Leaving element visible, could not hide it: {}", err);
                false
            }
        })
        .collect();
    if targets.is_empty() {
        debug!("Nothing to reveal on this page");
        return Ok(());
    }
    debug!("Watching {} elements for reveal", targets.len());

    let pending = Rc::new(RefCell::new(targets.clone()));
    let shown = config.clone();
    host.observe_intersections(
        &config.options(),
        &targets,
        Box::new(move |entries, watcher| {
            for entry in entries.into_iter().filter(|entry| entry.is_intersecting) {
                let mut pending = pending.borrow_mut();
                let Some(index) = pending.iter().position(|node| *node == entry.target) else {
                    continue;
                };
                // Keep watching on failure so the next entry retries.
                if let Err(err) = show(&entry.target, &shown) {
                    warn!("Could not reveal element: {}", err);
                    continue;
                }
                pending.swap_remove(index);
                watcher.unobserve(&entry.target);
            }
        }),
    )
}
