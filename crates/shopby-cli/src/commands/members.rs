use shopby_core::{KstDate, MemberClient, MemberRef, MemberSearchParams};

use crate::cli::{MemberGroupsArgs, MembersArgs, ProfileGroupsArgs};
use crate::error::CliError;

use super::{date_days_ago, CommandResult};

pub async fn list(args: &MembersArgs, client: &MemberClient) -> Result<CommandResult, CliError> {
    let mut params = MemberSearchParams::signed_up_between(date_days_ago(args.days)?, KstDate::today());
    params.page_number = Some(1);
    params.page_size = Some(args.page_size);
    params.includes_count = Some(true);

    CommandResult::ok(client.get_members(&params).await?)
}

pub async fn groups(
    args: &MemberGroupsArgs,
    client: &MemberClient,
) -> Result<CommandResult, CliError> {
    match args.group_no {
        Some(group_no) => CommandResult::ok(client.get_member_group(group_no).await?),
        None => CommandResult::ok(client.get_member_groups().await?),
    }
}

pub async fn profile_groups(
    args: &ProfileGroupsArgs,
    client: &MemberClient,
) -> Result<CommandResult, CliError> {
    let member = MemberRef::from_parts(args.member_no, args.member_id.clone()).ok_or_else(|| {
        CliError::InvalidInput(String::from(
            "exactly one of --member-no or --member-id is required",
        ))
    })?;
    CommandResult::ok(client.get_profile_groups(&member).await?)
}
