use super::*;

fn filled() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".into(),
        email: "ada@example.org".into(),
        subject: "Hello & welcome".into(),
        message: "Line one\nLine two".into(),
    }
}

fn form() -> ContactForm {
    ContactForm::new(&SiteConfig::default())
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_accepts_minimal_address() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.domain.io"));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["a@b", "ab.c", "", "a@", "a b@c.d", "a@@b.c", "@b.c", "a@b."] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// Field validation
// =============================================================

#[test]
fn filled_form_has_no_errors() {
    assert!(filled().field_errors().is_empty());
}

#[test]
fn empty_form_reports_every_field() {
    let errors = ContactMessage::default().field_errors();
    assert_eq!(
        errors,
        vec![FieldError::NameMissing, FieldError::EmailMissing, FieldError::SubjectMissing, FieldError::MessageMissing]
    );
}

#[test]
fn whitespace_only_fields_are_missing() {
    let message = ContactMessage { name: "   ".into(), message: "\n\t".into(), ..filled() };
    assert_eq!(message.field_errors(), vec![FieldError::NameMissing, FieldError::MessageMissing]);
}

#[test]
fn bad_email_is_invalid_not_missing() {
    let message = ContactMessage { email: "ada@home".into(), ..filled() };
    assert_eq!(message.field_errors(), vec![FieldError::EmailInvalid]);
}

#[test]
fn field_error_messages() {
    assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email address");
    assert_eq!(FieldError::SubjectMissing.to_string(), "Subject is required");
}

// =============================================================
// mailto composition
// =============================================================

#[test]
fn body_embeds_all_fields() {
    assert_eq!(
        filled().mail_body(),
        "Name: Ada Lovelace\nEmail: ada@example.org\n\nMessage:\nLine one\nLine two"
    );
}

#[test]
fn mailto_encodes_subject_and_body() {
    let uri = filled().mailto_uri("me@site.dev");
    assert_eq!(
        uri,
        "mailto:me@site.dev?subject=Hello%20%26%20welcome\
         &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.org%0A%0AMessage%3A%0ALine%20one%0ALine%20two"
    );
}

#[test]
fn mailto_encodes_non_ascii() {
    let message = ContactMessage { subject: "café".into(), ..filled() };
    assert!(message.mailto_uri("me@site.dev").contains("subject=caf%C3%A9&"));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn invalid_form_stays_idle() {
    let mut form = form();
    let err = form.begin(ContactMessage::default(), "Send").expect_err("empty form");
    assert!(matches!(err, SubmitError::Invalid(ref errors) if errors.len() == 4));
    assert_eq!(form.state(), &SubmitState::Idle);
    assert_eq!(form.pending_uri(), None);
}

#[test]
fn valid_form_enters_sending_with_pending_label() {
    let mut form = form();
    assert_eq!(form.begin(filled(), "Send Message"), Ok("Sending..."));
    assert!(form.is_sending());
    let uri = form.pending_uri().expect("uri while sending");
    assert!(uri.starts_with("mailto:hello@example.com?subject=Hello%20%26%20welcome&body="));
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = form();
    form.begin(filled(), "Send").expect("first submit");
    assert_eq!(form.begin(filled(), "Sending..."), Err(SubmitError::AlreadySending));
}

#[test]
fn successful_handoff_restores_label_and_thanks() {
    let mut form = form();
    form.begin(filled(), "Send Message").expect("valid");
    let outcome = form.complete(true).expect("was sending");
    assert_eq!(outcome.toast_message, SENT_MESSAGE);
    assert_eq!(outcome.toast_kind, ToastKind::Success);
    assert_eq!(outcome.restore_label, "Send Message");
    assert!(!form.is_sending());
}

#[test]
fn failed_handoff_points_at_literal_address() {
    let mut form = form();
    form.begin(filled(), "Send Message").expect("valid");
    let outcome = form.complete(false).expect("was sending");
    assert_eq!(outcome.toast_kind, ToastKind::Info);
    assert_eq!(outcome.toast_message, "Thank you for your message! Please email me directly at hello@example.com");
    assert_eq!(outcome.restore_label, "Send Message");
    assert_eq!(form.state(), &SubmitState::Idle);
}

#[test]
fn complete_when_idle_is_noop() {
    assert_eq!(form().complete(true), None);
}
