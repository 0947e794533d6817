//! Presentation hand-off for a submission: status, redirect target and
//! flash messages.

use serde::Serialize;

use crate::store::UrlId;
use crate::submit::Submission;

/// Bootstrap-style flash categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Info,
    Danger,
}

/// One user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// What the presentation layer should do with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// HTTP-equivalent status: 302, 422 or 500.
    pub status: u16,
    /// Page to redirect to on success or duplicate.
    pub location: Option<String>,
    pub flashes: Vec<Flash>,
}

pub const STATUS_REDIRECT: u16 = 302;
pub const STATUS_UNPROCESSABLE: u16 = 422;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Path of the page showing a single URL record.
pub fn url_page(id: UrlId) -> String {
    format!("/urls/{}", id)
}

impl Feedback {
    pub fn for_submission(sub: &Submission) -> Self {
        match sub {
            Submission::Rejected { errors } => Feedback {
                status: STATUS_UNPROCESSABLE,
                location: None,
                flashes: errors
                    .iter()
                    .map(|e| Flash::new(FlashCategory::Danger, e.to_string()))
                    .collect(),
            },
            Submission::Created { id, .. } => Feedback {
                status: STATUS_REDIRECT,
                location: Some(url_page(*id)),
                flashes: vec![Flash::new(FlashCategory::Success, "Page successfully added")],
            },
            Submission::Duplicate { id, .. } => Feedback {
                status: STATUS_REDIRECT,
                location: Some(url_page(*id)),
                flashes: vec![Flash::new(FlashCategory::Info, "Page already exists")],
            },
            Submission::NotFoundAnomaly { .. } => Feedback {
                status: STATUS_INTERNAL_ERROR,
                location: None,
                flashes: vec![Flash::new(
                    FlashCategory::Danger,
                    "Something went wrong while saving the page",
                )],
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_REDIRECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_check::UrlError;

    #[test]
    fn created_redirects_with_success_flash() {
        let fb = Feedback::for_submission(&Submission::Created {
            id: 7,
            name: "https://example.com".into(),
        });
        assert_eq!(fb.status, 302);
        assert_eq!(fb.location.as_deref(), Some("/urls/7"));
        assert_eq!(fb.flashes.len(), 1);
        assert_eq!(fb.flashes[0].category, FlashCategory::Success);
        assert!(fb.is_success());
    }

    #[test]
    fn duplicate_redirects_with_info_flash() {
        let fb = Feedback::for_submission(&Submission::Duplicate {
            id: 3,
            name: "https://example.com".into(),
        });
        assert_eq!(fb.status, 302);
        assert_eq!(fb.location.as_deref(), Some("/urls/3"));
        assert_eq!(fb.flashes[0].category, FlashCategory::Info);
        assert_eq!(fb.flashes[0].message, "Page already exists");
    }

    #[test]
    fn rejected_is_unprocessable_with_one_flash_per_reason() {
        let fb = Feedback::for_submission(&Submission::Rejected {
            errors: vec![UrlError::InvalidUrl, UrlError::UrlTooLong { max_len: 255 }],
        });
        assert_eq!(fb.status, 422);
        assert!(fb.location.is_none());
        let messages: Vec<&str> = fb.flashes.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, ["Invalid URL", "URL exceeds 255 characters"]);
        assert!(fb.flashes.iter().all(|f| f.category == FlashCategory::Danger));
        assert!(!fb.is_success());
    }

    #[test]
    fn anomaly_is_internal_error() {
        let fb = Feedback::for_submission(&Submission::NotFoundAnomaly {
            name: "https://example.com".into(),
        });
        assert_eq!(fb.status, 500);
        assert!(fb.location.is_none());
        assert!(!fb.is_success());
    }

    #[test]
    fn flash_serializes_lowercase_category() {
        let json = serde_json::to_string(&Flash::new(FlashCategory::Danger, "x")).unwrap();
        assert_eq!(json, r#"{"category":"danger","message":"x"}"#);
    }
}
