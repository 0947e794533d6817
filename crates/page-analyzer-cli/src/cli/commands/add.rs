//! `page-analyzer add <url>` – submit a URL.

use anyhow::{bail, Result};
use page_analyzer_core::feedback::{Feedback, FlashCategory};
use page_analyzer_core::store::UrlStore;
use page_analyzer_core::submit::submit_url;
use page_analyzer_core::url_check::UrlValidator;

/// Exit code for input that failed validation.
pub const EXIT_INVALID: i32 = 2;

/// Submits `url` and prints the flashes. Returns 0 for created or duplicate,
/// [`EXIT_INVALID`] for rejected input, and `Err` for the anomaly or a
/// storage failure.
pub async fn run_add<S: UrlStore>(store: &S, validator: &UrlValidator, url: &str) -> Result<i32> {
    let submission = submit_url(store, validator, url).await?;
    let feedback = Feedback::for_submission(&submission);

    for flash in &feedback.flashes {
        match flash.category {
            FlashCategory::Danger => eprintln!("{}", flash.message),
            FlashCategory::Success | FlashCategory::Info => println!("{}", flash.message),
        }
    }

    if submission.is_anomaly() {
        bail!("url {url} conflicted in storage but could not be found");
    }
    match (submission.url_id(), feedback.location) {
        (Some(id), Some(location)) => {
            println!("{id}\t{location}");
            Ok(0)
        }
        _ => Ok(EXIT_INVALID),
    }
}
