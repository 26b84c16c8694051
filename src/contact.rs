use log::{debug, info, warn};

use crate::config::ContactConfig;
use crate::dom::{EventKind, Host, Node};
use crate::error::DomError;

/// Simulated contact form. Nothing leaves the page: a submit flips the button
/// into its sending state, and after a fixed delay the visitor gets a
/// confirmation and a cleared form.
pub fn init<H: Host>(host: &H, config: &ContactConfig) -> Result<(), DomError> {
    let Some(form) = host.query_selector(&config.form_selector)? else {
        debug!("No contact form on this page");
        return Ok(());
    };
    let button = form
        .query_selector(&config.button_selector)?
        .ok_or_else(|| DomError::MissingElement(config.button_selector.clone()))?;

    let timer_host = host.clone();
    let submitted = form.clone();
    let config = config.clone();
    host.listen(
        &form,
        EventKind::Submit,
        Box::new(move |event| {
            event.prevent_default();
            // Disabled means a submission is already waiting on its timer.
            if button.is_disabled() {
                debug!("Ignoring submit while sending");
                return;
            }

            let original_label = button.text();
            button.set_text(&config.sending_label);
            button.set_disabled(true);
            info!("Contact form submitted");

            let alert_host = timer_host.clone();
            let form = submitted.clone();
            let button = button.clone();
            let confirmation = config.confirmation.clone();
            timer_host.set_timeout(
                config.delay_ms,
                Box::new(move || {
                    if let Err(err) = alert_host.alert(&confirmation) {
                        warn!("Could not show confirmation: {}", err);
                    }
                    form.reset_form();
                    button.set_text(&original_label);
                    button.set_disabled(false);
                }),
            );
        }),
    )
}
