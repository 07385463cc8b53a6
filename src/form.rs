//! Form-state machine: one draft, its errors, and the submit flow.
//!
//! Validation failures never reach the gateway; gateway failures never lose
//! the draft. The gateway call itself is single-shot, so the timeout and
//! bounded retry policy live here, at the calling layer.

use crate::catalog::{City, PropertyType};
use crate::draft::PropertyDraft;
use crate::error::AppError;
use crate::gateway::{PersistedProperty, PropertyGateway};
use crate::notify::{Notification, NotificationSink};
use crate::record::normalize;
use crate::validate::{validate_with, ErrorMap, ValidationOptions};
use std::time::Duration;
use uuid::Uuid;

/// Fallback shown when the gateway fails without a usable message.
const GENERIC_SAVE_ERROR: &str = "Could not save the property. Please try again.";

/// Timeout and bounded retry applied around each save.
#[derive(Clone, Copy, Debug)]
pub struct SavePolicy {
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Delay before each retry; doubled per attempt.
    pub backoff: Duration,
}

impl Default for SavePolicy {
    fn default() -> Self {
        SavePolicy {
            timeout: Duration::from_secs(10),
            attempts: 3,
            backoff: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SaveOutcome {
    Created(PersistedProperty),
    Updated(PersistedProperty),
}

impl SaveOutcome {
    pub fn property(&self) -> &PersistedProperty {
        match self {
            SaveOutcome::Created(p) | SaveOutcome::Updated(p) => p,
        }
    }
}

/// One form instance owns one independent draft; there is no cross-draft state.
pub struct PropertyForm {
    draft: PropertyDraft,
    errors: ErrorMap,
    saving: bool,
    policy: SavePolicy,
    options: ValidationOptions,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyForm {
    /// Form for a new listing.
    pub fn new() -> Self {
        Self::from_draft(PropertyDraft::new())
    }

    /// Form hydrated from an existing listing.
    pub fn edit(existing: &PersistedProperty) -> Self {
        Self::from_draft(PropertyDraft::hydrate(existing.id, &existing.record))
    }

    /// Form around an externally supplied draft (e.g. a request body). The
    /// details payload is realigned if it does not match the property type.
    pub fn from_draft(mut draft: PropertyDraft) -> Self {
        draft.align_details();
        PropertyForm {
            draft,
            errors: ErrorMap::new(),
            saving: false,
            policy: SavePolicy::default(),
            options: ValidationOptions::default(),
        }
    }

    pub fn with_policy(mut self, policy: SavePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PropertyDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_city(&mut self, city: City) {
        self.draft.set_city(city);
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.draft.set_property_type(property_type);
    }

    /// Validate, normalize, and save. Create vs update is dispatched on the
    /// draft's id. The sink is told about both outcomes; on failure the draft
    /// is left intact for a manual retry.
    pub async fn submit<G, N>(&mut self, gateway: &G, sink: &N) -> Result<SaveOutcome, AppError>
    where
        G: PropertyGateway + ?Sized,
        N: NotificationSink + ?Sized,
    {
        if self.saving {
            return Err(AppError::Conflict("a save is already in progress".into()));
        }

        self.errors = validate_with(&self.draft, &self.options);
        if !self.errors.is_empty() {
            return Err(AppError::Invalid(self.errors.clone()));
        }

        self.saving = true;
        let record = normalize(&self.draft);
        let result = save_with_policy(gateway, self.draft.id, &record, &self.policy).await;
        self.saving = false;

        match result {
            Ok(outcome) => {
                sink.notify(Notification::success(
                    "Property saved",
                    record.name.clone(),
                ));
                if let SaveOutcome::Created(property) = &outcome {
                    self.draft.id = Some(property.id);
                }
                Ok(outcome)
            }
            Err(err) => {
                let description = match &err {
                    AppError::SaveTimeout(_) => "The save timed out. Please try again.".to_string(),
                    other => {
                        let msg = other.to_string();
                        if msg.is_empty() {
                            GENERIC_SAVE_ERROR.to_string()
                        } else {
                            msg
                        }
                    }
                };
                sink.notify(Notification::error("Save failed", description));
                Err(err)
            }
        }
    }
}

async fn save_with_policy<G>(
    gateway: &G,
    id: Option<Uuid>,
    record: &crate::record::PropertyRecord,
    policy: &SavePolicy,
) -> Result<SaveOutcome, AppError>
where
    G: PropertyGateway + ?Sized,
{
    let attempts = policy.attempts.max(1);
    let mut backoff = policy.backoff;
    let mut last_err = None;

    for attempt in 1..=attempts {
        if attempt > 1 {
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
        let call = async {
            match id {
                Some(id) => gateway
                    .update_property(id, record)
                    .await
                    .map(SaveOutcome::Updated),
                None => gateway.create_property(record).await.map(SaveOutcome::Created),
            }
        };
        match tokio::time::timeout(policy.timeout, call).await {
            Ok(Ok(outcome)) => return Ok(outcome),
            Ok(Err(err)) => {
                tracing::warn!(%attempt, error = %err, "save attempt failed");
                last_err = Some(err);
            }
            Err(_) => {
                tracing::warn!(%attempt, timeout = ?policy.timeout, "save attempt timed out");
                last_err = Some(AppError::SaveTimeout(policy.timeout));
            }
        }
    }

    Err(last_err.unwrap_or(AppError::SaveTimeout(policy.timeout)))
}
