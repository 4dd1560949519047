use serde::{Deserialize, Serialize};

use super::YesNo;
use crate::kst::{KstDate, KstDateTime};

api_enum! {
    MemberSearchType {
        MemberNo => "MEMBER_NO",
        UserId => "USER_ID",
        Email => "EMAIL",
        Mobile => "MOBILE",
        Name => "NAME",
        Nickname => "NICKNAME",
    }
}

api_enum! {
    MemberStatus {
        Waiting => "WAITING",
        Active => "ACTIVE",
        Withdrawn => "WITHDRAWN",
        Freeze => "FREEZE",
        Dormant => "DORMANT",
        Paused => "PAUSED",
        Pending => "PENDING",
    }
}

api_enum! {
    MemberType { Mall => "MALL", SyncId => "SYNC_ID", OpenId => "OPEN_ID" }
}

api_enum! {
    ProviderType {
        Payco => "PAYCO",
        Naver => "NAVER",
        Kakao => "KAKAO",
        KakaoSync => "KAKAO_SYNC",
        Facebook => "FACEBOOK",
        Line => "LINE",
        Apple => "APPLE",
        Google => "GOOGLE",
        AppCard => "APP_CARD",
        Iamschool => "IAMSCHOOL",
        Unione => "UNIONE",
        Ncpstore => "NCPSTORE",
    }
}

/// Identifies a member either by number or by login id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberRef {
    No(u64),
    Id(String),
}

impl MemberRef {
    /// Builds a reference from the two optional identifiers; exactly one must be set.
    pub fn from_parts(member_no: Option<u64>, member_id: Option<String>) -> Option<Self> {
        match (member_no, member_id) {
            (Some(no), None) => Some(Self::No(no)),
            (None, Some(id)) if !id.trim().is_empty() => Some(Self::Id(id)),
            _ => None,
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Self::No(_) => "memberNo",
            Self::Id(_) => "memberId",
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::No(no) => no.to_string(),
            Self::Id(id) => id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveBenefit {
    pub used: bool,
    pub reserve_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberGroup {
    pub no: u64,
    pub name: String,
    pub description: String,
    pub reserve_benefit: ReserveBenefit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileGroupItem {
    pub member_group_no: u64,
    pub member_group_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileGroupsResponse {
    pub member_no: u64,
    #[serde(default)]
    pub items: Vec<ProfileGroupItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberToGroupRequest {
    pub member_group_no: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_no: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl AddMemberToGroupRequest {
    pub fn new(member_group_no: u64, member: MemberRef) -> Self {
        let (member_no, member_id) = match member {
            MemberRef::No(no) => (Some(no), None),
            MemberRef::Id(id) => (None, Some(id)),
        };
        Self {
            member_group_no,
            member_no,
            member_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberToGroupResponse {
    pub member_no: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenIdProvider {
    pub provider: Option<String>,
    pub oauth_id_no: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_no: u64,
    pub member_id: String,
    pub member_name: String,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub mobile_no: Option<String>,
    pub member_status: MemberStatus,
    pub member_status_name: Option<String>,
    pub member_type: MemberType,
    pub member_grade_name: Option<String>,
    pub member_group_name: Option<String>,
    pub provider_type: Option<ProviderType>,
    #[serde(default)]
    pub open_id_providers: Vec<OpenIdProvider>,
    pub linked_yn: Option<YesNo>,
    pub link_ymdt: Option<KstDateTime>,
    pub join_ymdt: KstDateTime,
    pub last_login_ymdt: Option<KstDateTime>,
    pub last_update_ymdt: Option<KstDateTime>,
    #[serde(default)]
    pub login_count: u64,
    #[serde(default)]
    pub is_sms_agreed: bool,
    #[serde(default)]
    pub is_direct_mail_agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersListResponse {
    pub contents: Vec<Member>,
    /// Present only when `includesCount=true` was requested.
    pub total_count: Option<u64>,
    pub last_id: Option<String>,
}

/// Query for `GET /members`.
///
/// A sign-up or update date range is required, and a last-login range is only
/// accepted together with a sign-up range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSearchParams {
    pub start_sign_up_date: Option<KstDate>,
    pub end_sign_up_date: Option<KstDate>,
    pub start_update_date: Option<KstDate>,
    pub end_update_date: Option<KstDate>,
    pub start_last_login_date: Option<KstDate>,
    pub end_last_login_date: Option<KstDate>,
    pub search_type: Option<MemberSearchType>,
    pub keywords: Option<String>,
    pub status: Option<MemberStatus>,
    pub member_type: Option<MemberType>,
    pub blacklisted: Option<bool>,
    pub email_agreed: Option<bool>,
    pub sms_agreed: Option<bool>,
    pub grade_no: Option<u64>,
    pub group_no: Option<u64>,
    pub includes_count: Option<bool>,
    pub search_after: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

impl MemberSearchParams {
    pub fn signed_up_between(start: KstDate, end: KstDate) -> Self {
        Self {
            start_sign_up_date: Some(start),
            end_sign_up_date: Some(end),
            ..Self::default()
        }
    }

    pub(crate) fn has_sign_up_range(&self) -> bool {
        self.start_sign_up_date.is_some() || self.end_sign_up_date.is_some()
    }

    pub(crate) fn has_update_range(&self) -> bool {
        self.start_update_date.is_some() || self.end_update_date.is_some()
    }

    pub(crate) fn has_last_login_range(&self) -> bool {
        self.start_last_login_date.is_some() || self.end_last_login_date.is_some()
    }
}
