//! `page-analyzer show <id>` – print one stored URL.

use anyhow::{anyhow, Result};
use page_analyzer_core::store::UrlDb;

pub async fn run_show(db: &UrlDb, id: i64) -> Result<()> {
    let rec = db
        .get_url(id)
        .await?
        .ok_or_else(|| anyhow!("no url with id {id}"))?;
    println!("ID:      {}", rec.id);
    println!("Name:    {}", rec.name);
    println!("Created: {}", rec.created_at);
    Ok(())
}
