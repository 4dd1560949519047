use shopby_core::DisplayClient;

use crate::cli::EventArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn event(args: &EventArgs, client: &DisplayClient) -> Result<CommandResult, CliError> {
    CommandResult::ok(client.get_event_detail(args.event_no).await?)
}
