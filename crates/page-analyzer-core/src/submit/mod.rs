//! Submission flow: validate, normalize, insert, and on conflict read back.
//!
//! ```text
//! Received -> Validating -> Rejected
//!                        -> Normalizing -> Inserting -> Created
//!                                                    -> ConflictDetected -> LookingUp -> Found
//!                                                                                     -> NotFoundAnomaly
//! ```
//!
//! Two callers racing on the same normalized name are ordered by the store's
//! uniqueness constraint: one insert wins, the other sees a conflict and reads
//! the winner's row. There are no retries beyond that single lookup.

use crate::store::{StoreError, UrlId, UrlStore};
use crate::url_check::{normalize, UrlError, UrlValidator, Validation};

/// Terminal state of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input failed validation; nothing was written.
    Rejected { errors: Vec<UrlError> },
    /// A new record was inserted.
    Created { id: UrlId, name: String },
    /// The normalized name already existed.
    Duplicate { id: UrlId, name: String },
    /// The insert conflicted but the lookup found no row.
    NotFoundAnomaly { name: String },
}

impl Submission {
    /// Validation errors (empty unless rejected).
    pub fn errors(&self) -> &[UrlError] {
        match self {
            Submission::Rejected { errors } => errors,
            _ => &[],
        }
    }

    /// True when the name was already stored, including the anomaly case.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Submission::Duplicate { .. } | Submission::NotFoundAnomaly { .. }
        )
    }

    /// Id of the created or existing record, if any.
    pub fn url_id(&self) -> Option<UrlId> {
        match self {
            Submission::Created { id, .. } | Submission::Duplicate { id, .. } => Some(*id),
            Submission::Rejected { .. } | Submission::NotFoundAnomaly { .. } => None,
        }
    }

    /// The `(errors, is_duplicate, url_id)` triple handed to presentation.
    pub fn as_parts(&self) -> (&[UrlError], bool, Option<UrlId>) {
        (self.errors(), self.is_duplicate(), self.url_id())
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(self, Submission::NotFoundAnomaly { .. })
    }
}

/// Storage failure other than the uniqueness conflict.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Run one submission of `raw` against `store`.
///
/// Validation failures are returned as [`Submission::Rejected`], not as `Err`.
/// Only unexpected storage errors produce `Err`.
pub async fn submit_url<S: UrlStore>(
    store: &S,
    validator: &UrlValidator,
    raw: &str,
) -> Result<Submission, SubmitError> {
    let url = match validator.validate(raw) {
        Validation::Valid(url) => url,
        Validation::Invalid(errors) => {
            tracing::info!(
                reasons = ?errors.iter().map(|e| e.code()).collect::<Vec<_>>(),
                "url rejected"
            );
            return Ok(Submission::Rejected { errors });
        }
    };

    let name = normalize(&url);
    tracing::debug!(%name, "normalized");

    match store.insert_url(&name).await {
        Ok(id) => {
            tracing::info!(id, %name, "url created");
            Ok(Submission::Created { id, name })
        }
        Err(StoreError::Conflict { .. }) => {
            tracing::debug!(%name, "insert conflicted; looking up existing row");
            match store.find_by_name(&name).await? {
                Some(record) => {
                    tracing::info!(id = record.id, %name, "url already exists");
                    Ok(Submission::Duplicate {
                        id: record.id,
                        name,
                    })
                }
                None => {
                    tracing::error!(%name, "insert conflicted but no row found by name");
                    Ok(Submission::NotFoundAnomaly { name })
                }
            }
        }
        Err(e) => Err(e.into()),
    }
}
