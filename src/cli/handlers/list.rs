//! Generic list and view command handlers
//!
//! List commands follow the same flow:
//! 1. Create command context
//! 2. Fetch one page
//! 3. Warn on stderr if the page came back full
//! 4. Render as table or JSON
//!
//! View commands fetch one entity and render it as detail fields or JSON.

use std::future::Future;
use std::sync::Arc;

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::{LinearApi, Page};
use crate::error::Result;
use crate::models::{Describe, TableRow};
use crate::output::{Detail, Formattable};

/// Message for a page that may be missing results, or `None` if it is complete.
pub fn truncation_notice<T>(page: &Page<T>, resource_name: &str) -> Option<String> {
    page.is_truncated().then(|| {
        format!(
            "Showing the first {} {}; more may exist. Filters only apply to the fetched page.",
            page.len(),
            resource_name
        )
    })
}

/// Render a page of entities in the requested format.
pub fn render_page<T: Serialize + TableRow>(page: &Page<T>, format: OutputFormat) -> Result<String> {
    page.items.as_slice().format(format)
}

/// Render a single entity in the requested format.
pub fn render_detail<T: Serialize + Describe>(item: &T, format: OutputFormat) -> Result<String> {
    Detail(item).format(format)
}

/// Print the truncation warning for `page`, if any.
pub fn warn_if_truncated<T>(page: &Page<T>, resource_name: &str) {
    if let Some(notice) = truncation_notice(page, resource_name) {
        eprintln!("{} {}", "⚠".yellow(), notice);
    }
}

/// Run a standard list command: fetch → warn → render → print.
///
/// # Example
///
/// ```ignore
/// run_list_command(opts, "teams", |client| async move {
///     client.list_teams().await
/// })
/// .await
/// ```
pub async fn run_list_command<T, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize + TableRow,
    Fut: Future<Output = Result<Page<T>>>,
    F: FnOnce(Arc<dyn LinearApi>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;
    let output = list_output(ctx.client.clone(), ctx.format, resource_name, fetcher).await?;
    println!("{}", output);

    Ok(())
}

/// Fetch one page with `client`, warn if it came back full, and render it.
pub async fn list_output<T, Fut, F>(
    client: Arc<dyn LinearApi>,
    format: OutputFormat,
    resource_name: &str,
    fetcher: F,
) -> Result<String>
where
    T: Serialize + TableRow,
    Fut: Future<Output = Result<Page<T>>>,
    F: FnOnce(Arc<dyn LinearApi>) -> Fut,
{
    debug!("Fetching {}", resource_name);
    let page = fetcher(client).await?;
    debug!(
        "Fetched {} of {} {} (page size {})",
        page.len(),
        page.fetched,
        resource_name,
        page.page_size
    );

    warn_if_truncated(&page, resource_name);
    render_page(&page, format)
}

/// Run a standard view command: fetch one entity → render → print.
pub async fn run_view_command<T, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize + Describe,
    Fut: Future<Output = Result<T>>,
    F: FnOnce(Arc<dyn LinearApi>) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);
    let item = fetcher(ctx.client.clone()).await?;

    println!("{}", render_detail(&item, ctx.format)?);

    Ok(())
}
