use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::YesNo;
use crate::kst::KstDateTime;

api_enum! {
    EventType { General => "GENERAL", External => "EXTERNAL" }
}

api_enum! {
    EventUrlType { EventNumber => "EVENT_NUMBER", Direct => "DIRECT" }
}

api_enum! {
    DisplayPeriodType { Always => "ALWAYS", Period => "PERIOD" }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPeriod {
    pub start_ymdt: Option<KstDateTime>,
    pub end_ymdt: Option<KstDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDisplayPeriod {
    pub period_type: DisplayPeriodType,
    pub display_period: Option<DisplayPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDisplay {
    pub display_mobile_yn: Option<YesNo>,
    pub display_pc_yn: Option<YesNo>,
    pub display_mobile_web_yn: Option<YesNo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDisplayInfo {
    pub check: Option<String>,
    #[serde(default)]
    pub info: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCategoryMapping {
    pub display_category_no: u64,
    pub display_category_full_name: Option<String>,
    pub display_yn: Option<YesNo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCoupon {
    pub coupon_no: Option<u64>,
    pub event_coupon_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProduct {
    pub mall_product_no: u64,
    pub display_yn: Option<YesNo>,
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSectionValue {
    #[serde(default)]
    pub mall_products: Vec<SectionProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSection {
    pub event_section_no: u64,
    pub event_section_name: Option<String>,
    pub event_section_image_url: Option<String>,
    pub event_section_value: Option<EventSectionValue>,
    pub event_section_order: Option<i64>,
    pub allow_duplicate_product_yn: Option<YesNo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub event_no: u64,
    pub mall_no: u64,
    pub event_type: EventType,
    pub event_name: Option<String>,
    pub event_id: Option<String>,
    pub event_url_type: Option<EventUrlType>,
    pub event_url: Option<String>,
    pub event_yn: YesNo,
    pub event_display_period: Option<EventDisplayPeriod>,
    pub main_pc_image_url: Option<String>,
    pub main_mobile_image_url: Option<String>,
    pub coupon_yn: Option<YesNo>,
    pub admin_no: Option<u64>,
    pub register_ymdt: Option<KstDateTime>,
    pub promotion_text: Option<String>,
    pub tag: Option<String>,
    pub member_grade_display_info: Option<MemberDisplayInfo>,
    pub member_group_display_info: Option<MemberDisplayInfo>,
    pub platform_display: Option<PlatformDisplay>,
    #[serde(default)]
    pub display_category_mappings: Vec<DisplayCategoryMapping>,
    #[serde(default)]
    pub event_coupons: Vec<EventCoupon>,
    #[serde(default)]
    pub event_sections: Vec<EventSection>,
}

impl EventDetailResponse {
    /// Display window of the event, when it is period-bound.
    pub fn display_window(&self) -> Option<(Option<KstDateTime>, Option<KstDateTime>)> {
        let period = self.event_display_period.as_ref()?;
        let window = period.display_period.as_ref()?;
        Some((window.start_ymdt, window.end_ymdt))
    }
}
