use shopby_core::{KstDateTime, OrderClient, OrderSearchParams};

use crate::cli::{OrderArgs, OrdersArgs};
use crate::error::CliError;

use super::{days_ago, CommandResult};

pub async fn list(args: &OrdersArgs, client: &OrderClient) -> Result<CommandResult, CliError> {
    let params = OrderSearchParams {
        start_ymdt: Some(days_ago(args.days)?.into()),
        end_ymdt: Some(KstDateTime::now().into()),
        order_request_types: args.order_request_types.clone(),
        page_number: Some(1),
        page_size: Some(args.page_size),
        desc: Some(true),
        ..OrderSearchParams::default()
    };
    CommandResult::ok(client.get_orders(&params).await?)
}

pub async fn detail(args: &OrderArgs, client: &OrderClient) -> Result<CommandResult, CliError> {
    CommandResult::ok(client.get_order_detail(&args.order_no).await?)
}
