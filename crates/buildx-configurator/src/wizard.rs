//! The order wizard state machine.
//!
//! One [`Wizard`] instance exists per client session and owns its
//! [`WizardState`] exclusively. Transitions run synchronously in response
//! to discrete user actions; the upload parse is the only asynchronous
//! step and is guarded by the upload sequence number.

use std::sync::Arc;

use bytes::Bytes;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use buildx_core::config::AppConfig;
use buildx_core::error::{AppError, ErrorKind};
use buildx_core::events::{WizardEvent, WizardEventPayload};
use buildx_core::result::AppResult;
use buildx_core::traits::{AdvanceDelay, FormatCatalog, OrderIntake};
use buildx_core::types::{
    CustomerInfo, FileGeometry, Finish, Material, PartConfiguration, PriceQuote, ServiceKind,
    Tolerance, UploadedFile, WizardStep,
};

use crate::pricing::Quoter;
use crate::submit::{SubmissionOutcome, assemble_payload};
use crate::upload::{StagedUpload, UploadTicket, parse_geometry, validate_upload};

/// The session-scoped wizard state.
///
/// Destroyed with the session on submission or abandonment; in-progress
/// wizards are never persisted, so a host reload restarts at step 1.
#[derive(Debug, Clone)]
pub struct WizardState {
    /// Current step.
    pub step: WizardStep,
    /// Selected fabrication service.
    pub service: Option<ServiceKind>,
    /// Attached file, its bytes, and its geometry.
    pub upload: Option<StagedUpload>,
    /// The part configuration under edit.
    pub configuration: PartConfiguration,
    /// The derived quote, present once the configuration step was entered.
    pub quote: Option<PriceQuote>,
    /// Monotonically increasing upload counter; stale parse results are
    /// discarded by comparing against it.
    upload_seq: u64,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::ServiceSelection,
            service: None,
            upload: None,
            configuration: PartConfiguration::default(),
            quote: None,
            upload_seq: 0,
        }
    }
}

impl WizardState {
    /// The sequence number of the current upload.
    pub fn upload_seq(&self) -> u64 {
        self.upload_seq
    }
}

/// A single field edit in the configuration step.
///
/// Mirrors the configuration form controls; every applied edit triggers a
/// quote recomputation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEdit {
    /// Select a material by catalog id.
    Material(String),
    /// Set the stock thickness in mm (non-additive services).
    Thickness(f64),
    /// Set the infill percentage (additive services).
    Infill(u8),
    /// Set the layer height in mm (additive services).
    LayerHeight(Decimal),
    /// Set the part quantity. Values below 1 are clamped to 1.
    Quantity(u32),
    /// Set the requested color.
    Color(String),
    /// Set the surface finish.
    Finish(Finish),
    /// Set the tolerance class.
    Tolerance(Tolerance),
    /// Replace the customer notes.
    Notes(String),
}

/// Display-ready summary rendered in the review step.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    /// Service display name.
    pub service: &'static str,
    /// Attached file name.
    pub file_name: String,
    /// Human-readable file size.
    pub file_size: String,
    /// Material label (uppercased catalog id).
    pub material: String,
    /// Part quantity.
    pub quantity: u32,
    /// Selected finish.
    pub finish: Finish,
    /// Selected tolerance class.
    pub tolerance: Tolerance,
    /// Estimated production turnaround.
    pub production_time: &'static str,
    /// The quote as reviewed.
    pub quote: PriceQuote,
}

/// The order wizard.
///
/// Collaborators are injected at construction: the format catalog decides
/// which uploads parse exactly, the delay strategy paces the cosmetic
/// auto-advance, and the intake service is passed per submission attempt.
pub struct Wizard {
    /// Catalog, pricing, and upload configuration.
    config: AppConfig,
    /// Pricing engine.
    quoter: Quoter,
    /// File format catalog.
    formats: Arc<dyn FormatCatalog>,
    /// Auto-advance pacing.
    delay: Arc<dyn AdvanceDelay>,
    /// The session state.
    state: WizardState,
    /// Events pending collection by the host.
    events: Vec<WizardEvent>,
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard").field("state", &self.state).finish()
    }
}

impl Wizard {
    /// Create a wizard at step 1 with injected collaborators.
    pub fn new(
        config: AppConfig,
        formats: Arc<dyn FormatCatalog>,
        delay: Arc<dyn AdvanceDelay>,
    ) -> Self {
        let quoter = Quoter::new(config.pricing.clone());
        Self {
            config,
            quoter,
            formats,
            delay,
            state: WizardState::default(),
            events: Vec::new(),
        }
    }

    /// The current wizard state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Drain events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Materials available for the selected service.
    pub fn materials(&self) -> AppResult<&[Material]> {
        let service = self.require_service()?;
        Ok(self.config.catalog.for_service(service))
    }

    /// File formats advertised for the selected service.
    pub fn format_hint(&self) -> AppResult<&'static [&'static str]> {
        Ok(self.require_service()?.format_hint())
    }

    // --- Step 1: service selection ---

    /// Select a fabrication service and auto-advance to file intake.
    ///
    /// Changing the service clears the selected material so a stale
    /// cross-catalog id can never leak into pricing; everything else the
    /// user entered is preserved.
    pub async fn select_service(&mut self, kind: ServiceKind) -> AppResult<()> {
        self.ensure_step(WizardStep::ServiceSelection, "select a service")?;
        if self.state.service != Some(kind) {
            self.state.configuration.material = None;
            self.state.quote = None;
        }
        self.state.service = Some(kind);
        info!(service = %kind, "service selected");
        self.emit(WizardEventPayload::ServiceSelected { service: kind });
        self.delay.wait().await;
        self.advance_to(WizardStep::FileIntake);
        Ok(())
    }

    // --- Step 2: file intake ---

    /// Stage an uploaded file and reserve its parse sequence number.
    ///
    /// The file is held with placeholder geometry until
    /// [`Wizard::apply_geometry`] lands the matching parse result.
    pub fn begin_upload(
        &mut self,
        file_name: impl Into<String>,
        bytes: Bytes,
    ) -> AppResult<UploadTicket> {
        self.ensure_step(WizardStep::FileIntake, "attach a file")?;
        self.require_service()?;
        let file = UploadedFile::new(file_name, bytes.len() as u64);
        validate_upload(&self.config.upload, &file)?;

        self.state.upload_seq += 1;
        let seq = self.state.upload_seq;
        info!(name = %file.name, size_bytes = file.size_bytes, seq, "file attached");
        self.emit(WizardEventPayload::FileAttached {
            name: file.name.clone(),
            size_bytes: file.size_bytes,
        });
        self.state.upload = Some(StagedUpload {
            file,
            bytes,
            geometry: FileGeometry::placeholder(),
        });
        Ok(UploadTicket { seq })
    }

    /// Apply a completed parse result.
    ///
    /// Returns `false` when the ticket is stale — the user re-uploaded or
    /// removed the file while the parse was in flight — in which case
    /// nothing changes (last-write-wins).
    pub fn apply_geometry(&mut self, ticket: UploadTicket, geometry: FileGeometry) -> bool {
        if ticket.seq != self.state.upload_seq {
            debug!(
                ticket = ticket.seq,
                current = self.state.upload_seq,
                "discarding stale geometry result"
            );
            return false;
        }
        let Some(upload) = self.state.upload.as_mut() else {
            return false;
        };
        upload.geometry = geometry;
        self.emit(WizardEventPayload::GeometryExtracted {
            exact: geometry.is_exact(),
            volume_estimate_mm3: geometry.volume_estimate_mm3,
        });
        // A re-upload from a later step must be reflected in the quote.
        if self.state.quote.is_some() {
            self.reprice();
        }
        true
    }

    /// Attach a file and run its parse step to completion.
    ///
    /// Convenience for hosts that do not interleave uploads; the
    /// [`Wizard::begin_upload`] / [`Wizard::apply_geometry`] pair is the
    /// building block for hosts that do.
    pub async fn attach_upload(
        &mut self,
        file_name: impl Into<String>,
        bytes: Bytes,
    ) -> AppResult<()> {
        let file_name = file_name.into();
        let ticket = self.begin_upload(file_name.clone(), bytes.clone())?;
        let geometry = parse_geometry(self.formats.clone(), file_name, bytes).await;
        self.apply_geometry(ticket, geometry);
        Ok(())
    }

    /// Remove the attached file, closing the gate to configuration.
    pub fn remove_upload(&mut self) -> AppResult<()> {
        self.ensure_step(WizardStep::FileIntake, "remove the file")?;
        if self.state.upload.take().is_some() {
            // Invalidate any parse still in flight for the removed file.
            self.state.upload_seq += 1;
            self.state.quote = None;
            self.emit(WizardEventPayload::FileRemoved);
        }
        Ok(())
    }

    // --- Step 3: configuration ---

    /// Advance to the configuration step.
    ///
    /// Requires an attached file. Loads the catalog for the selected
    /// service, auto-selects its first material when none of its entries is
    /// already selected, and computes the initial quote.
    pub fn enter_configuration(&mut self) -> AppResult<()> {
        self.ensure_step(WizardStep::FileIntake, "continue to configuration")?;
        let service = self.require_service()?;
        if self.state.upload.is_none() {
            return Err(AppError::validation("Attach a file before continuing"));
        }

        let catalog = self.config.catalog.for_service(service);
        let current_in_catalog = self
            .state
            .configuration
            .material
            .as_ref()
            .is_some_and(|m| catalog.contains(m));
        if !current_in_catalog {
            let first = self.config.catalog.first(service).ok_or_else(|| {
                AppError::configuration(format!(
                    "No materials configured for {}",
                    service.display_name()
                ))
            })?;
            self.state.configuration.material = Some(first.clone());
        }

        self.advance_to(WizardStep::Configuration);
        self.reprice();
        Ok(())
    }

    /// Apply a configuration field edit and recompute the quote.
    pub fn edit(&mut self, edit: ConfigEdit) -> AppResult<()> {
        self.ensure_step(WizardStep::Configuration, "edit the configuration")?;
        let service = self.require_service()?;

        match edit {
            ConfigEdit::Material(id) => {
                let material = self
                    .config
                    .catalog
                    .find(service, &id)
                    .ok_or_else(|| {
                        AppError::validation(format!(
                            "Unknown material `{id}` for {}",
                            service.display_name()
                        ))
                    })?
                    .clone();
                self.state.configuration.material = Some(material);
            }
            ConfigEdit::Thickness(mm) => self.state.configuration.thickness_mm = mm,
            ConfigEdit::Infill(percent) => {
                self.state.configuration.infill_percent = percent.min(100);
            }
            ConfigEdit::LayerHeight(mm) => self.state.configuration.layer_height_mm = mm,
            ConfigEdit::Quantity(quantity) => {
                if quantity < 1 {
                    debug!(quantity, "quantity below 1 clamped");
                }
                self.state.configuration.quantity = quantity.max(1);
            }
            ConfigEdit::Color(color) => self.state.configuration.color = color,
            ConfigEdit::Finish(finish) => self.state.configuration.finish = finish,
            ConfigEdit::Tolerance(tolerance) => self.state.configuration.tolerance = tolerance,
            ConfigEdit::Notes(notes) => self.state.configuration.notes = notes,
        }

        self.reprice();
        Ok(())
    }

    // --- Step 4: review & submission ---

    /// Advance to the review step and produce the summary to render.
    pub fn enter_review(&mut self) -> AppResult<ReviewSummary> {
        self.ensure_step(WizardStep::Configuration, "continue to review")?;
        self.advance_to(WizardStep::Review);
        self.reprice();
        self.review_summary()
    }

    /// The review summary for the current state.
    pub fn review_summary(&self) -> AppResult<ReviewSummary> {
        self.ensure_step(WizardStep::Review, "render the review summary")?;
        let service = self.require_service()?;
        let upload = self
            .state
            .upload
            .as_ref()
            .ok_or_else(|| AppError::internal("review reached without an upload"))?;
        let quote = self
            .state
            .quote
            .ok_or_else(|| AppError::internal("review reached without a quote"))?;

        let material = self
            .state
            .configuration
            .material
            .as_ref()
            .map(|m| m.id.to_uppercase())
            .unwrap_or_else(|| "-".to_string());

        Ok(ReviewSummary {
            service: service.display_name(),
            file_name: upload.file.name.clone(),
            file_size: upload.file.human_size(),
            material,
            quantity: self.state.configuration.effective_quantity(),
            finish: self.state.configuration.finish,
            tolerance: self.state.configuration.tolerance,
            production_time: service.production_time(),
            quote,
        })
    }

    /// Submit the order through the intake collaborator.
    ///
    /// The customer gate runs first: with any required field blank the
    /// transition is blocked, no intake call is made, and the wizard stays
    /// in review. An intake failure also keeps the wizard in review and is
    /// surfaced as [`SubmissionOutcome::Unconfirmed`] together with a
    /// display-only placeholder identifier.
    pub async fn submit(
        &mut self,
        customer: CustomerInfo,
        intake: &dyn OrderIntake,
    ) -> AppResult<SubmissionOutcome> {
        self.ensure_step(WizardStep::Review, "submit the order")?;
        customer.check()?;
        let service = self.require_service()?;

        self.reprice();
        let quote = self
            .state
            .quote
            .ok_or_else(|| AppError::internal("submission reached without a quote"))?;
        let upload = self
            .state
            .upload
            .as_ref()
            .ok_or_else(|| AppError::internal("submission reached without an upload"))?;

        let payload = assemble_payload(service, upload, &self.state.configuration, quote, customer);
        let file_bytes = upload.bytes.clone();

        match intake.submit(&payload, file_bytes).await {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, total = %quote.total, "order accepted");
                self.advance_to(WizardStep::Submitted);
                self.emit(WizardEventPayload::OrderSubmitted {
                    order_id: receipt.order_id.clone(),
                });
                Ok(SubmissionOutcome::Accepted {
                    order_id: receipt.order_id,
                })
            }
            Err(err) => {
                warn!(error = %err, "order intake failed");
                let surfaced = AppError::with_source(
                    ErrorKind::Submission,
                    format!("Order submission failed: {err}"),
                    err,
                );
                Ok(SubmissionOutcome::Unconfirmed {
                    placeholder_id: buildx_core::types::OrderId::placeholder(),
                    error: surfaced,
                })
            }
        }
    }

    // --- Navigation ---

    /// Navigate back to an earlier step without clearing entered data.
    ///
    /// Forward movement goes through the gated transitions; navigating to
    /// the current step is a no-op.
    pub fn go_to(&mut self, step: WizardStep) -> AppResult<()> {
        if self.state.step.is_terminal() {
            return Err(AppError::validation("The order was already submitted"));
        }
        if step == self.state.step {
            return Ok(());
        }
        if step > self.state.step || step.is_terminal() {
            return Err(AppError::validation(
                "Forward navigation goes through the step transitions",
            ));
        }
        self.state.step = step;
        self.emit(WizardEventPayload::StepEntered { step });
        Ok(())
    }

    // --- Internals ---

    /// Move forward to a step, recording and announcing it.
    fn advance_to(&mut self, step: WizardStep) {
        debug!(from = ?self.state.step, to = ?step, "step transition");
        self.state.step = step;
        self.emit(WizardEventPayload::StepEntered { step });
    }

    /// Recompute the quote from the current state.
    fn reprice(&mut self) {
        let Some(service) = self.state.service else {
            return;
        };
        let volume = self
            .state
            .upload
            .as_ref()
            .map(|u| u.geometry.volume_estimate_mm3)
            .unwrap_or(self.config.pricing.fallback_volume_mm3);
        let quote = self.quoter.quote(service, &self.state.configuration, volume);
        self.state.quote = Some(quote);
        self.emit(WizardEventPayload::QuoteUpdated { total: quote.total });
    }

    fn ensure_step(&self, expected: WizardStep, action: &str) -> AppResult<()> {
        if self.state.step == expected {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Cannot {action} during the {:?} step",
                self.state.step
            )))
        }
    }

    fn require_service(&self) -> AppResult<ServiceKind> {
        self.state
            .service
            .ok_or_else(|| AppError::validation("Select a service first"))
    }

    fn emit(&mut self, payload: WizardEventPayload) {
        self.events.push(WizardEvent::new(payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildx_core::traits::NoDelay;
    use buildx_geometry::MeshFormatCatalog;

    fn wizard() -> Wizard {
        Wizard::new(
            AppConfig::default(),
            Arc::new(MeshFormatCatalog::default()),
            Arc::new(NoDelay),
        )
    }

    #[tokio::test]
    async fn test_select_service_auto_advances() {
        let mut w = wizard();
        w.select_service(ServiceKind::LaserCutting).await.unwrap();
        assert_eq!(w.state().step, WizardStep::FileIntake);
        assert_eq!(w.state().service, Some(ServiceKind::LaserCutting));
    }

    #[tokio::test]
    async fn test_configuration_gate_requires_upload() {
        let mut w = wizard();
        w.select_service(ServiceKind::LaserCutting).await.unwrap();
        let err = w.enter_configuration().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(w.state().step, WizardStep::FileIntake);
    }

    #[tokio::test]
    async fn test_stale_geometry_result_is_discarded() {
        let mut w = wizard();
        w.select_service(ServiceKind::AdditiveManufacturing)
            .await
            .unwrap();
        let stale = w
            .begin_upload("first.obj", Bytes::from_static(b"one"))
            .unwrap();
        let current = w
            .begin_upload("second.obj", Bytes::from_static(b"two"))
            .unwrap();

        assert!(!w.apply_geometry(stale, FileGeometry::exact(1.0, 1.0, 1.0)));
        assert_eq!(
            w.state().upload.as_ref().unwrap().geometry,
            FileGeometry::placeholder()
        );
        assert!(w.apply_geometry(current, FileGeometry::exact(2.0, 2.0, 2.0)));
        assert_eq!(
            w.state().upload.as_ref().unwrap().geometry.volume_estimate_mm3,
            8.0
        );
    }

    #[tokio::test]
    async fn test_remove_upload_invalidates_inflight_parse() {
        let mut w = wizard();
        w.select_service(ServiceKind::AdditiveManufacturing)
            .await
            .unwrap();
        let ticket = w
            .begin_upload("part.obj", Bytes::from_static(b"bytes"))
            .unwrap();
        w.remove_upload().unwrap();
        assert!(!w.apply_geometry(ticket, FileGeometry::exact(1.0, 1.0, 1.0)));
        assert!(w.state().upload.is_none());
    }

    #[tokio::test]
    async fn test_unknown_material_edit_rejected() {
        let mut w = wizard();
        w.select_service(ServiceKind::LaserCutting).await.unwrap();
        w.attach_upload("part.dxf", Bytes::from_static(b"dxf"))
            .await
            .unwrap();
        w.enter_configuration().unwrap();
        // "pla" belongs to the additive catalog.
        let err = w.edit(ConfigEdit::Material("pla".to_string())).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_backward_navigation_preserves_data() {
        let mut w = wizard();
        w.select_service(ServiceKind::LaserCutting).await.unwrap();
        w.attach_upload("part.svg", Bytes::from_static(b"svg"))
            .await
            .unwrap();
        w.enter_configuration().unwrap();
        w.edit(ConfigEdit::Quantity(4)).unwrap();

        w.go_to(WizardStep::FileIntake).unwrap();
        assert!(w.state().upload.is_some());
        assert_eq!(w.state().configuration.quantity, 4);

        let err = w.go_to(WizardStep::Review).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
