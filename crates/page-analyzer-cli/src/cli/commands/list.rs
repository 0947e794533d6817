//! `page-analyzer list` – list stored URLs.

use anyhow::Result;
use page_analyzer_core::store::UrlDb;

pub async fn run_list(db: &UrlDb, json: bool) -> Result<()> {
    let urls = db.list_urls().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
        return Ok(());
    }
    if urls.is_empty() {
        println!("No URLs in database.");
    } else {
        println!("{:<6} {:<12} {}", "ID", "CREATED", "NAME");
        for u in urls {
            println!("{:<6} {:<12} {}", u.id, u.created_at, u.name);
        }
    }
    Ok(())
}
