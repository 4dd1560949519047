//! CLI argument definitions for `shopby`.
//!
//! Credentials come from the environment (`SHOPBY_SERVER_ACCESS_TOKEN`,
//! `SHOPBY_SERVER_SYSTEM_KEY`, optionally `SHOPBY_BASE_URL`, `SHOPBY_ENV`,
//! `SHOPBY_TIMEOUT_MS`), falling back to `.dev.env` or `.prod.env` in the
//! working directory as selected by `SHOPBY_ENV`. Results are written to stdout as JSON and logs go to
//! stderr (`RUST_LOG`, default `warn`).
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `product` | Product detail (v3, or v1 with `--v1`) |
//! | `search-products` | Search engine product search |
//! | `changed-products` | Products changed in the last N days |
//! | `products-by-nos` | Up to 100 products by number |
//! | `product-histories` | Change history of a product |
//! | `patch-product` | Rename a product |
//! | `orders` | Orders of the last N days |
//! | `order` | Order detail |
//! | `members` | Members who signed up in the last N days |
//! | `member-groups` | All member groups, or one group |
//! | `profile-groups` | Groups a member belongs to |
//! | `event` | Display event detail |
//! | `validate-products` | Decode the v1 detail of every displayed product |
//!
//! # Examples
//!
//! ```bash
//! shopby product 123456 --pretty
//! shopby changed-products --days 3 --sort-by registered-at
//! shopby profile-groups --member-id kim
//! RUST_LOG=shopby_core=debug shopby validate-products --concurrency 10
//! ```

use clap::{ArgGroup, Args, Parser, Subcommand};
use shopby_core::models::order::OrderRequestType;
use shopby_core::models::products::{ChangedProductSortBy, DisplayFilter, SaleSettingStatusType};
use shopby_core::models::SortDirection;

/// Command-line client for the shopby server API.
#[derive(Debug, Parser)]
#[command(name = "shopby", author, version, about = "Command-line client for the shopby server API")]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds. Overrides `SHOPBY_TIMEOUT_MS`.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a product detail.
    ///
    ///   shopby product 123456
    ///   shopby product 123456 --v1
    Product(ProductArgs),

    /// Search products through the search engine (v2.0).
    SearchProducts(SearchProductsArgs),

    /// List products registered or updated within the last N days.
    ChangedProducts(ChangedProductsArgs),

    /// Fetch up to 100 products by number.
    ProductsByNos(ProductsByNosArgs),

    /// Show the change history of a product.
    ProductHistories(ProductNoArgs),

    /// Rename a product through the partial update endpoint.
    PatchProduct(PatchProductArgs),

    /// List orders placed within the last N days.
    Orders(OrdersArgs),

    /// Fetch an order detail.
    Order(OrderArgs),

    /// List members who signed up within the last N days.
    Members(MembersArgs),

    /// List all member groups, or fetch one group by number.
    MemberGroups(MemberGroupsArgs),

    /// List the groups a member belongs to.
    ProfileGroups(ProfileGroupsArgs),

    /// Fetch a display event detail.
    Event(EventArgs),

    /// Fetch the v1 detail of every displayed, sellable product and report
    /// decode failures grouped by error.
    ValidateProducts(ValidateProductsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    /// Mall product number.
    pub product_no: u64,

    /// Use the v1.0 detail endpoint instead of v3.0.
    #[arg(long, default_value_t = false)]
    pub v1: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ProductNoArgs {
    pub product_no: u64,
}

#[derive(Debug, Clone, Args)]
pub struct SearchProductsArgs {
    #[arg(long)]
    pub keywords: Option<String>,

    #[arg(long)]
    pub page_number: Option<u32>,

    #[arg(long)]
    pub page_size: Option<u32>,

    /// Comma-separated sale setting filter, e.g. `available-for-sale,stop-selling`.
    #[arg(long, value_delimiter = ',')]
    pub sale_setting_types: Vec<SaleSettingStatusType>,

    /// `y`, `n` or `all`.
    #[arg(long)]
    pub front_display: Option<DisplayFilter>,
}

#[derive(Debug, Clone, Args)]
pub struct ChangedProductsArgs {
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    #[arg(long, default_value = "updated-at")]
    pub sort_by: ChangedProductSortBy,

    #[arg(long, default_value_t = 50)]
    pub size: u32,

    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Args)]
pub struct ProductsByNosArgs {
    #[arg(required = true, num_args = 1..)]
    pub product_nos: Vec<u64>,

    #[arg(long)]
    pub partner_no: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct PatchProductArgs {
    pub product_no: u64,

    /// New product name.
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct OrdersArgs {
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    #[arg(long, default_value_t = 10)]
    pub page_size: u32,

    /// Comma-separated order status filter, e.g. `pay-done,delivery-ing`.
    #[arg(long, value_delimiter = ',')]
    pub order_request_types: Vec<OrderRequestType>,
}

#[derive(Debug, Clone, Args)]
pub struct OrderArgs {
    pub order_no: String,
}

#[derive(Debug, Clone, Args)]
pub struct MembersArgs {
    #[arg(long, default_value_t = 30)]
    pub days: i64,

    #[arg(long, default_value_t = 10)]
    pub page_size: u32,
}

#[derive(Debug, Clone, Args)]
pub struct MemberGroupsArgs {
    pub group_no: Option<u64>,
}

#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("member").required(true).args(["member_no", "member_id"])))]
pub struct ProfileGroupsArgs {
    #[arg(long)]
    pub member_no: Option<u64>,

    #[arg(long)]
    pub member_id: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct EventArgs {
    pub event_no: u64,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateProductsArgs {
    /// Maximum number of detail requests in flight.
    #[arg(long, default_value_t = 20)]
    pub concurrency: usize,

    #[arg(long, default_value_t = 100)]
    pub page_size: u32,
}
