//! Progressive enhancement for the Oak-Wood site: compact header on scroll,
//! active nav link, scroll reveals, the simulated contact form and smooth
//! anchor scrolling. Each behavior attaches to markup the static HTML already
//! ships and works independently of the others.

use log::{error, info};

pub mod anchors;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod navigation;
pub mod reveal;

use config::SiteConfig;
use dom::Host;
use error::DomError;

/// Waits for the document, reads the page config and enhances the page.
pub fn start<H: Host>(host: H) -> Result<(), DomError> {
    let page = host.clone();
    host.on_ready(Box::new(move || {
        let config = SiteConfig::from_page(&page);
        enhance(&page, &config);
    }))
}

/// Attaches every behavior. One failing does not stop the rest.
pub fn enhance<H: Host>(host: &H, config: &SiteConfig) {
    if let Err(err) = navigation::init(host, &config.navigation) {
        error!("Navigation setup failed: {}", err);
    }
    if let Err(err) = reveal::init(host, &config.reveal) {
        error!("Reveal setup failed: {}", err);
    }
    if let Err(err) = contact::init(host, &config.contact) {
        error!("Contact form setup failed: {}", err);
    }
    if let Err(err) = anchors::init(host, &config.anchors) {
        error!("Anchor setup failed: {}", err);
    }
    info!("Page enhanced");
}
