use log::{debug, warn};

use crate::config::NavigationConfig;
use crate::dom::{Host, Node};
use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    Default,
    Compact,
}

/// Compact strictly past the threshold.
pub fn header_mode(offset: f64, threshold: f64) -> HeaderMode {
    if offset > threshold {
        HeaderMode::Compact
    } else {
        HeaderMode::Default
    }
}

/// A link is active when the path contains its href, except the home link,
/// which only activates on paths ending in `/` or in the home href itself.
pub fn is_active_link(path: &str, href: &str, home_href: &str) -> bool {
    if href != home_href && path.contains(href) {
        return true;
    }
    href == home_href && (path.ends_with('/') || path.ends_with(home_href))
}

/// First link that qualifies as active. Empty hrefs never do.
pub fn active_link_index<'a>(
    path: &str,
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
    home_href: &str,
) -> Option<usize> {
    hrefs.into_iter().position(|href| {
        href.map_or(false, |href| !href.is_empty() && is_active_link(path, href, home_href))
    })
}

fn apply_header_style<N: Node>(
    header: &N,
    mode: HeaderMode,
    config: &NavigationConfig,
) -> Result<(), DomError> {
    let (padding, shadow) = match mode {
        HeaderMode::Compact => (&config.compact_padding, &config.compact_shadow),
        HeaderMode::Default => (&config.default_padding, &config.default_shadow),
    };
    header.set_style("padding", padding)?;
    header.set_style("box-shadow", shadow)?;
    Ok(())
}

pub fn init<H: Host>(host: &H, config: &NavigationConfig) -> Result<(), DomError> {
    let header = host
        .query_selector(&config.header_selector)?
        .ok_or_else(|| DomError::MissingElement(config.header_selector.clone()))?;

    let path = host.pathname()?;
    let links = host.query_selector_all(&config.link_selector)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.attribute("href")).collect();
    match active_link_index(&path, hrefs.iter().map(Option::as_deref), &config.home_href) {
        Some(index) => {
            debug!("Marking nav link {:?} active for {}", hrefs[index], path);
            links[index].add_class(&config.active_class)?;
        }
        None => debug!("No nav link matches {}", path),
    }

    let scroll_host = host.clone();
    let config = config.clone();
    host.on_scroll(Box::new(move || {
        let offset = match scroll_host.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                warn!("Could not read scroll offset: {}", err);
                return;
            }
        };
        let mode = header_mode(offset, config.compact_after);
        if let Err(err) = apply_header_style(&header, mode, &config) {
            warn!("Could not restyle header: {}", err);
        }
    }))
}
