//! Contact form bindings.

use std::time::Duration;

use web_sys::{Document, HtmlElement, HtmlFormElement};

use super::{LogJsErr, by_id, cast, listen};
use crate::config::Config;
use crate::consts::{CONTACT_FORM_ID, FORM_STATUS_ID};
use crate::contact::{StatusLine, Submission};
use crate::error::UiError;

/// Intercept contact form submission.
///
/// # Errors
///
/// Returns [`UiError::MissingElement`] when the form or its status region is absent.
pub(super) fn wire(document: &Document, config: &Config) -> Result<(), UiError> {
    let form: HtmlFormElement = cast(by_id(document, CONTACT_FORM_ID)?, "contact form")?;
    let status: HtmlElement = cast(by_id(document, FORM_STATUS_ID)?, "form status")?;
    let delay_ms = config.submit_delay_ms;

    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let submission = Submission::evaluate(form.report_validity(), delay_ms);
        submit(&form, &status, submission);
    })
}

fn show(status: &HtmlElement, line: StatusLine) {
    status.set_hidden(false);
    status.set_text_content(Some(line.text));
    status.style().set_property("color", line.tone.css_color()).log_err("contact: status color");
}

fn submit(form: &HtmlFormElement, status: &HtmlElement, submission: Submission) {
    match submission {
        Submission::Rejected(line) => show(status, line),
        Submission::Accepted { interim, delay_ms, done } => {
            show(status, interim);
            let form = form.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::sleep(Duration::from_millis(u64::from(delay_ms))).await;
                show(&status, done);
                form.reset();
                log::debug!("contact: simulated submission complete");
            });
        }
    }
}
