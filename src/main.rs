use log::{error, info};

use oakwood_site::config;
use oakwood_site::dom::web::WebPage;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site enhancements");
    let started = WebPage::new().and_then(oakwood_site::start);
    if let Err(err) = started {
        error!("Could not enhance page: {}", err);
    }
}
