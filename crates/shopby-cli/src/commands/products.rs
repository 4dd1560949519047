use serde_json::json;
use shopby_core::{ChangedProductsParams, PatchProductV2Request, ProductSearchParams, ProductsClient};
use tracing::info;

use crate::cli::{
    ChangedProductsArgs, PatchProductArgs, ProductArgs, ProductNoArgs, ProductsByNosArgs,
    SearchProductsArgs,
};
use crate::error::CliError;

use super::{days_ago, CommandResult};

pub async fn detail(args: &ProductArgs, client: &ProductsClient) -> Result<CommandResult, CliError> {
    if args.v1 {
        CommandResult::ok(client.get_product_detail(args.product_no).await?)
    } else {
        CommandResult::ok(client.get_product_detail_v3(args.product_no).await?)
    }
}

pub async fn search(
    args: &SearchProductsArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    let params = ProductSearchParams {
        keywords: args.keywords.clone(),
        page_number: args.page_number,
        page_size: args.page_size,
        sale_setting_types: args.sale_setting_types.clone(),
        front_display: args.front_display,
        ..ProductSearchParams::default()
    };
    CommandResult::ok(client.search_products_v2(&params).await?)
}

pub async fn changed(
    args: &ChangedProductsArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    let mut params = ChangedProductsParams::new(days_ago(args.days)?, args.sort_by, args.size);
    params.direction = Some(args.direction);

    CommandResult::ok(client.get_changed_product_nos(&params).await?)
}

pub async fn by_nos(
    args: &ProductsByNosArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    CommandResult::ok(
        client
            .search_products_by_list(&args.product_nos, args.partner_no)
            .await?,
    )
}

pub async fn histories(
    args: &ProductNoArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    CommandResult::ok(client.get_product_histories(args.product_no).await?)
}

pub async fn patch(
    args: &PatchProductArgs,
    client: &ProductsClient,
) -> Result<CommandResult, CliError> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput(String::from(
            "product name must not be empty",
        )));
    }

    client
        .patch_product_v2(args.product_no, &PatchProductV2Request::rename(name))
        .await?;
    info!(product_no = args.product_no, "product renamed");

    CommandResult::ok(json!({
        "productNo": args.product_no,
        "productName": name,
        "updated": true,
    }))
}
