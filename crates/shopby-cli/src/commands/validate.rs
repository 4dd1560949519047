//! Bulk decode check of product details.
//!
//! Collects every displayed, sellable product from the search engine, then
//! fetches each v1 detail with at most `--concurrency` requests in flight.
//! Failures are grouped by the first 100 characters of their message.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use shopby_core::models::products::{DisplayFilter, SaleSettingStatusType};
use shopby_core::{ProductSearchParams, ProductsClient, ShopbyError};
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};
use tracing::{info, warn};

use crate::cli::ValidateProductsArgs;
use crate::error::CliError;

use super::CommandResult;

const ERROR_KEY_CHARS: usize = 100;
const EXAMPLES_PER_GROUP: usize = 5;
const PROGRESS_EVERY: usize = 100;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct FailureGroup {
    error: String,
    count: usize,
    examples: Vec<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    total: usize,
    succeeded: usize,
    failed: usize,
    failures: Vec<FailureGroup>,
}

pub async fn run(
    args: &ValidateProductsArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    if args.concurrency == 0 {
        return Err(CliError::InvalidInput(String::from(
            "--concurrency must be greater than zero",
        )));
    }
    if args.page_size == 0 {
        return Err(CliError::InvalidInput(String::from(
            "--page-size must be greater than zero",
        )));
    }

    let product_nos = collect_product_nos(client, args.page_size).await?;
    info!(count = product_nos.len(), "collected products to validate");

    let failures = fetch_details(client, &product_nos, args.concurrency).await;
    let report = ValidationReport {
        total: product_nos.len(),
        succeeded: product_nos.len() - failures.len(),
        failed: failures.len(),
        failures: group_failures(failures),
    };

    let (failed, total) = (report.failed, report.total);
    Ok(CommandResult::ok(report)?.with_failures(failed, total))
}

async fn collect_product_nos(client: &ProductsClient, page_size: u32) -> Result<Vec<u64>, ShopbyError> {
    let mut product_nos = Vec::new();
    let mut page_number = 1;

    loop {
        let params = ProductSearchParams {
            front_display: Some(DisplayFilter::Y),
            sale_setting_types: vec![SaleSettingStatusType::AvailableForSale],
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..ProductSearchParams::default()
        };
        let page = client.search_products_v2(&params).await?;
        let received = page.items.len();
        product_nos.extend(page.items.iter().map(|item| item.product_no));
        info!(
            page = page_number,
            received,
            collected = product_nos.len(),
            total = page.total_count,
            "fetched search page"
        );

        if product_nos.len() as u64 >= page.total_count || received < page_size as usize {
            break;
        }
        page_number += 1;
    }

    Ok(product_nos)
}

/// Returns `(product_no, message)` for every detail request that failed.
async fn fetch_details(
    client: &ProductsClient,
    product_nos: &[u64],
    concurrency: usize,
) -> Vec<(u64, String)> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let mut tasks = JoinSet::new();
    let mut spawned = HashMap::with_capacity(product_nos.len());

    for &product_no in product_nos {
        let client = client.clone();
        let semaphore = Arc::clone(&semaphore);
        let handle = tasks.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => client
                    .get_product_detail(product_no)
                    .await
                    .map(|_| ())
                    .map_err(|error| error.to_string()),
                Err(error) => Err(error.to_string()),
            };
            (product_no, outcome)
        });
        spawned.insert(handle.id(), product_no);
    }

    collect_failures(tasks, &spawned).await
}

/// Drains `tasks`. A task that panicked or was cancelled counts as a failure
/// of the product it was spawned for.
async fn collect_failures(
    mut tasks: JoinSet<(u64, Result<(), String>)>,
    spawned: &HashMap<Id, u64>,
) -> Vec<(u64, String)> {
    let total = spawned.len();
    let mut failures = Vec::new();
    let mut completed = 0;
    while let Some(joined) = tasks.join_next().await {
        completed += 1;
        match joined {
            Ok((_, Ok(()))) => {}
            Ok((product_no, Err(message))) => failures.push((product_no, message)),
            Err(error) => {
                warn!(%error, "validation task did not complete");
                match spawned.get(&error.id()) {
                    Some(&product_no) => failures.push((product_no, error.to_string())),
                    None => warn!(id = %error.id(), "unknown validation task"),
                }
            }
        }
        if completed % PROGRESS_EVERY == 0 || completed == total {
            info!(
                completed,
                total,
                failed = failures.len(),
                "validation progress"
            );
        }
    }

    failures
}

fn group_failures(failures: Vec<(u64, String)>) -> Vec<FailureGroup> {
    let mut groups: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    for (product_no, message) in failures {
        let key: String = message.chars().take(ERROR_KEY_CHARS).collect();
        groups.entry(key).or_default().push(product_no);
    }

    let mut grouped: Vec<FailureGroup> = groups
        .into_iter()
        .map(|(error, mut product_nos)| {
            product_nos.sort_unstable();
            FailureGroup {
                error,
                count: product_nos.len(),
                examples: product_nos.into_iter().take(EXAMPLES_PER_GROUP).collect(),
            }
        })
        .collect();
    grouped.sort_by(|left, right| right.count.cmp(&left.count));
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_group_by_truncated_message() {
        let long_prefix = "x".repeat(ERROR_KEY_CHARS);
        let failures = vec![
            (9, format!("{long_prefix} product 9")),
            (3, format!("{long_prefix} product 3")),
            (5, String::from("GET /products/5 returned status 404")),
        ];

        let groups = group_failures(failures);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].error, long_prefix);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].examples, vec![3, 9]);
        assert_eq!(groups[1].count, 1);
    }

    #[tokio::test]
    async fn panicked_task_counts_as_failure() {
        let mut tasks = JoinSet::new();
        let mut spawned = HashMap::new();
        let ok = tasks.spawn(async { (1, Ok(())) });
        spawned.insert(ok.id(), 1);
        let failed = tasks.spawn(async { (2, Err(String::from("decode failed"))) });
        spawned.insert(failed.id(), 2);
        let panicked = tasks.spawn(async {
            if true {
                panic!("worker crashed");
            }
            (3, Ok(()))
        });
        spawned.insert(panicked.id(), 3);

        let mut failures = collect_failures(tasks, &spawned).await;
        failures.sort_unstable();

        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0], (2, String::from("decode failed")));
        assert_eq!(failures[1].0, 3);
    }

    #[test]
    fn examples_are_capped() {
        let failures = (1..=8).map(|no| (no, String::from("boom"))).collect();
        let groups = group_failures(failures);
        assert_eq!(groups[0].count, 8);
        assert_eq!(groups[0].examples, vec![1, 2, 3, 4, 5]);
    }
}
