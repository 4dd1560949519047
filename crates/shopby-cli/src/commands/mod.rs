mod display;
mod members;
mod orders;
mod products;
mod validate;

use serde::Serialize;
use serde_json::Value;
use shopby_core::{KstDate, KstDateTime, ServerApiClient, Settings, ShopbyClients};
use time::Duration;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    /// `(failed, total)` when a validation run had failures.
    pub failures: Option<(usize, usize)>,
}

impl CommandResult {
    pub fn ok(data: impl Serialize) -> Result<Self, CliError> {
        Ok(Self {
            data: serde_json::to_value(data)?,
            failures: None,
        })
    }

    pub fn with_failures(mut self, failed: usize, total: usize) -> Self {
        if failed > 0 {
            self.failures = Some((failed, total));
        }
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let clients = build_clients(cli)?;

    match &cli.command {
        Command::Product(args) => products::detail(args, &clients.products).await,
        Command::SearchProducts(args) => products::search(args, &clients.products).await,
        Command::ChangedProducts(args) => products::changed(args, &clients.products).await,
        Command::ProductsByNos(args) => products::by_nos(args, &clients.products).await,
        Command::ProductHistories(args) => products::histories(args, &clients.products).await,
        Command::PatchProduct(args) => products::patch(args, &clients.products).await,
        Command::Orders(args) => orders::list(args, &clients.orders).await,
        Command::Order(args) => orders::detail(args, &clients.orders).await,
        Command::Members(args) => members::list(args, &clients.members).await,
        Command::MemberGroups(args) => members::groups(args, &clients.members).await,
        Command::ProfileGroups(args) => members::profile_groups(args, &clients.members).await,
        Command::Event(args) => display::event(args, &clients.display).await,
        Command::ValidateProducts(args) => validate::run(args, &clients.products).await,
    }
}

fn build_clients(cli: &Cli) -> Result<ShopbyClients, CliError> {
    let mut settings = Settings::load()?;
    if let Some(timeout_ms) = cli.timeout_ms {
        if timeout_ms == 0 {
            return Err(CliError::InvalidInput(String::from(
                "--timeout-ms must be greater than zero",
            )));
        }
        settings = settings.with_timeout_ms(timeout_ms);
    }
    tracing::debug!(env = %settings.env, base_url = %settings.base_url, "loaded settings");

    Ok(ShopbyClients::new(ServerApiClient::from_settings(&settings)))
}

/// Current KST instant minus `days`.
pub(crate) fn days_ago(days: i64) -> Result<KstDateTime, CliError> {
    check_days(days)?;
    let now = KstDateTime::now().into_inner();
    Ok(KstDateTime::from_offset_datetime(
        now.saturating_sub(Duration::days(days)),
    ))
}

/// Today's KST date minus `days`.
pub(crate) fn date_days_ago(days: i64) -> Result<KstDate, CliError> {
    check_days(days)?;
    let today = KstDate::today().into_inner();
    Ok(KstDate::from(today.saturating_sub(Duration::days(days))))
}

const MAX_DAYS: i64 = 36_500;

fn check_days(days: i64) -> Result<(), CliError> {
    if !(0..=MAX_DAYS).contains(&days) {
        return Err(CliError::InvalidInput(format!(
            "--days must be between 0 and {MAX_DAYS}, got {days}"
        )));
    }
    Ok(())
}
