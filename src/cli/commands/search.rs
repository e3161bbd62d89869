//! `search` command: one-shot search printed to stdout.

use anyhow::Result;

use crate::application::build_search_service;
use crate::cli::output::output;
use crate::cli::types::SearchArgs;
use crate::domain::models::Config;

/// Run one search and print the page.
pub async fn execute(args: SearchArgs, config: Config, json: bool) -> Result<()> {
    let service = build_search_service(&config)?;

    let page = service
        .search(args.query.as_deref(), Some(args.page), args.page_size)
        .await?;

    output(&page, json);
    Ok(())
}
