//! Submission gate and intake outcome tests.

mod common;

use rust_decimal_macros::dec;

use buildx_configurator::{ConfigEdit, SubmissionOutcome, Wizard};
use buildx_core::error::ErrorKind;
use buildx_core::events::WizardEventPayload;
use buildx_core::types::{CustomerInfo, ServiceKind, WizardStep};

use common::{MemoryIntake, OfflineIntake, sample_stl, test_wizard};

async fn wizard_at_review() -> Wizard {
    let mut wizard = test_wizard();
    wizard
        .select_service(ServiceKind::AdditiveManufacturing)
        .await
        .unwrap();
    wizard.attach_upload("bracket.stl", sample_stl()).await.unwrap();
    wizard.enter_configuration().unwrap();
    wizard.edit(ConfigEdit::Quantity(2)).unwrap();
    wizard.enter_review().unwrap();
    wizard
}

fn customer() -> CustomerInfo {
    CustomerInfo::new("Jane Doe", "jane@example.com", "555-0100", "12 Forge Lane")
}

#[tokio::test]
async fn accepted_submission_reaches_the_intake_and_terminates() {
    let mut wizard = wizard_at_review().await;
    let intake = MemoryIntake::default();

    let outcome = wizard.submit(customer(), &intake).await.unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(wizard.state().step, WizardStep::Submitted);
    assert_eq!(intake.submission_count(), 1);

    let orders = intake.orders.lock().unwrap();
    let (payload, file) = &orders[0];
    assert_eq!(payload.service, ServiceKind::AdditiveManufacturing);
    assert_eq!(payload.file.name, "bracket.stl");
    assert_eq!(payload.file.size_bytes, file.len() as u64);
    assert_eq!(payload.configuration.quantity, 2);
    assert_eq!(payload.customer.name, "Jane Doe");
    // The submitted pricing is the reviewed quote.
    assert_eq!(payload.pricing.total, dec!(20.68));
    assert!(payload.pricing.is_consistent());
}

#[tokio::test]
async fn blank_customer_fields_block_submission_without_an_intake_call() {
    let mut wizard = wizard_at_review().await;
    let intake = MemoryIntake::default();

    for bad in [
        CustomerInfo::new("", "jane@example.com", "555-0100", ""),
        CustomerInfo::new("   ", "jane@example.com", "555-0100", ""),
        CustomerInfo::new("Jane", " \t", "555-0100", ""),
        CustomerInfo::new("Jane", "jane@example.com", "", ""),
    ] {
        let err = wizard.submit(bad, &intake).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(wizard.state().step, WizardStep::Review);
    }
    assert_eq!(intake.submission_count(), 0);
}

#[tokio::test]
async fn intake_failure_surfaces_a_placeholder_and_allows_retry() {
    let mut wizard = wizard_at_review().await;

    let outcome = wizard.submit(customer(), &OfflineIntake).await.unwrap();
    let SubmissionOutcome::Unconfirmed {
        placeholder_id,
        error,
    } = outcome
    else {
        panic!("expected an unconfirmed outcome");
    };
    assert!(placeholder_id.as_str().starts_with("BX"));
    assert_eq!(error.kind, ErrorKind::Submission);
    // The wizard stays in review so the user can retry.
    assert_eq!(wizard.state().step, WizardStep::Review);

    // A retry against a working intake succeeds.
    let intake = MemoryIntake::default();
    let outcome = wizard.submit(customer(), &intake).await.unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(intake.submission_count(), 1);
}

#[tokio::test]
async fn submission_emits_the_order_event() {
    let mut wizard = wizard_at_review().await;
    let intake = MemoryIntake::default();
    wizard.drain_events();

    let outcome = wizard.submit(customer(), &intake).await.unwrap();
    let submitted = wizard
        .drain_events()
        .into_iter()
        .find_map(|e| match e.payload {
            WizardEventPayload::OrderSubmitted { order_id } => Some(order_id),
            _ => None,
        })
        .expect("an order event");
    assert_eq!(&submitted, outcome.display_id());
}

#[tokio::test]
async fn payload_serializes_with_portal_wire_names() {
    let mut wizard = wizard_at_review().await;
    let intake = MemoryIntake::default();
    wizard.submit(customer(), &intake).await.unwrap();

    let orders = intake.orders.lock().unwrap();
    let json = serde_json::to_value(&orders[0].0).unwrap();
    assert_eq!(json["service"], "3d-printing");
    assert_eq!(json["configuration"]["finish"], "standard");
    assert_eq!(json["file"]["geometry"]["volume_estimate_mm3"], 8000.0);
    assert_eq!(json["customer"]["email"], "jane@example.com");
}

#[tokio::test]
async fn nothing_can_happen_after_submission() {
    let mut wizard = wizard_at_review().await;
    let intake = MemoryIntake::default();
    wizard.submit(customer(), &intake).await.unwrap();

    assert!(wizard.go_to(WizardStep::Configuration).is_err());
    assert!(
        wizard
            .edit(ConfigEdit::Quantity(5))
            .is_err()
    );
    assert!(wizard.submit(customer(), &intake).await.is_err());
    assert_eq!(intake.submission_count(), 1);
}
