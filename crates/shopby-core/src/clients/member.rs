use crate::client::{QueryParams, ServerApiClient};
use crate::error::ShopbyError;
use crate::models::member::{
    AddMemberToGroupRequest, AddMemberToGroupResponse, MemberGroup, MemberRef,
    MemberSearchParams, MembersListResponse, ProfileGroupsResponse,
};

/// Member and member-group endpoints of the server API.
#[derive(Debug, Clone)]
pub struct MemberClient {
    api: ServerApiClient,
}

impl MemberClient {
    pub fn new(api: ServerApiClient) -> Self {
        Self { api }
    }

    /// Lists members (version 1.2) using key-set pagination via `search_after`.
    pub async fn get_members(
        &self,
        params: &MemberSearchParams,
    ) -> Result<MembersListResponse, ShopbyError> {
        validate_member_search(params)?;
        self.api.get("/members", "1.2", members_query(params)).await
    }

    pub async fn get_member_groups(&self) -> Result<Vec<MemberGroup>, ShopbyError> {
        self.api
            .get("/member-groups", "1.0", QueryParams::new())
            .await
    }

    pub async fn get_member_group(&self, group_no: u64) -> Result<MemberGroup, ShopbyError> {
        self.api
            .get(&format!("/member-groups/{group_no}"), "1.0", QueryParams::new())
            .await
    }

    pub async fn get_profile_groups(
        &self,
        member: &MemberRef,
    ) -> Result<ProfileGroupsResponse, ShopbyError> {
        self.api
            .get("/profile/groups", "1.0", member_query(member))
            .await
    }

    pub async fn add_member_to_group(
        &self,
        member_group_no: u64,
        member: MemberRef,
    ) -> Result<AddMemberToGroupResponse, ShopbyError> {
        let body = AddMemberToGroupRequest::new(member_group_no, member);
        self.api.post("/profile/groups", "1.0", &body).await
    }

    pub async fn remove_member_from_group(
        &self,
        member_group_no: u64,
        member: &MemberRef,
    ) -> Result<(), ShopbyError> {
        let mut query = QueryParams::new();
        query
            .push("memberGroupNo", member_group_no)
            .push(member.key(), member.value());
        self.api.delete("/profile/groups", "1.0", query).await
    }
}

fn validate_member_search(params: &MemberSearchParams) -> Result<(), ShopbyError> {
    if !params.has_sign_up_range() && !params.has_update_range() {
        return Err(ShopbyError::invalid_request(
            "member search requires a sign-up or update date range",
        ));
    }
    if params.has_last_login_range() && !params.has_sign_up_range() {
        return Err(ShopbyError::invalid_request(
            "last-login date range requires a sign-up date range",
        ));
    }
    Ok(())
}

fn member_query(member: &MemberRef) -> QueryParams {
    let mut query = QueryParams::new();
    query.push(member.key(), member.value());
    query
}

pub(crate) fn members_query(params: &MemberSearchParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("startSignUpDate", params.start_sign_up_date)
        .push_opt("endSignUpDate", params.end_sign_up_date)
        .push_opt("startUpdateDate", params.start_update_date)
        .push_opt("endUpdateDate", params.end_update_date)
        .push_opt("startLastLoginDate", params.start_last_login_date)
        .push_opt("endLastLoginDate", params.end_last_login_date)
        .push_opt("searchType", params.search_type)
        .push_opt("keywords", params.keywords.as_deref())
        .push_opt("status", params.status)
        .push_opt("type", params.member_type)
        .push_opt("blacklisted", params.blacklisted)
        .push_opt("emailAgreed", params.email_agreed)
        .push_opt("smsAgreed", params.sms_agreed)
        .push_opt("gradeNo", params.grade_no)
        .push_opt("groupNo", params.group_no)
        .push_opt("includesCount", params.includes_count)
        .push_opt("searchAfter", params.search_after.as_deref())
        .push_opt("pageNumber", params.page_number)
        .push_opt("pageSize", params.page_size);
    query
}
