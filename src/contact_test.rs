use super::*;

// =============================================================
// Tone
// =============================================================

#[test]
fn tones_map_to_theme_variables() {
    assert_eq!(Tone::Alert.css_color(), "var(--accent)");
    assert_eq!(Tone::Muted.css_color(), "var(--muted)");
    assert_eq!(Tone::Success.css_color(), "var(--accent-2)");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn invalid_form_is_rejected_without_sending_or_reset() {
    let outcome = Submission::evaluate(false, 900);
    assert_eq!(outcome, Submission::Rejected(StatusLine::INVALID));
    assert!(!outcome.resets_form());
    let Submission::Rejected(line) = outcome else {
        panic!("invalid form should be rejected");
    };
    assert_ne!(line.text, "Enviando...");
    assert_eq!(line.text, "Por favor completá los campos requeridos.");
    assert_eq!(line.tone, Tone::Alert);
}

#[test]
fn valid_form_sends_then_confirms_and_resets() {
    let outcome = Submission::evaluate(true, 900);
    let Submission::Accepted { interim, delay_ms, done } = outcome else {
        panic!("valid form should be accepted");
    };
    assert_eq!(interim.text, "Enviando...");
    assert_eq!(delay_ms, 900);
    assert_eq!(done.text, "Mensaje enviado. ¡Gracias!");
    assert!(outcome.resets_form());
    assert_eq!((interim, done), (StatusLine::SENDING, StatusLine::SENT));
    assert_eq!(done.tone, Tone::Success);
}

#[test]
fn delay_comes_from_caller() {
    let Submission::Accepted { delay_ms, .. } = Submission::evaluate(true, 0) else {
        panic!("valid form should be accepted");
    };
    assert_eq!(delay_ms, 0);
}
