use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ShippingAreaType, SortDirection, YesNo};
use crate::kst::{KstDate, KstDateTime};

api_enum! {
    SaleStatusType {
        Ready => "READY",
        Onsale => "ONSALE",
        Finished => "FINISHED",
        Stop => "STOP",
        Prohibition => "PROHIBITION",
        ReservationOnsale => "RESERVATION_ONSALE",
        ReservationFinished => "RESERVATION_FINISHED",
    }
}

api_enum! {
    SaleSettingStatusType {
        AvailableForSale => "AVAILABLE_FOR_SALE",
        StopSelling => "STOP_SELLING",
        ProhibitionSale => "PROHIBITION_SALE",
    }
}

api_enum! {
    ApplyStatusType {
        RegistrationReady => "REGISTRATION_READY",
        ApprovalReady => "APPROVAL_READY",
        ApprovalRejection => "APPROVAL_REJECTION",
        SaleAgreementReady => "SALE_AGREEMENT_READY",
        SaleAgreementRejection => "SALE_AGREEMENT_REJECTION",
        Finished => "FINISHED",
        AfterApprovalReady => "AFTER_APPROVAL_READY",
        AfterApprovalRejection => "AFTER_APPROVAL_REJECTION",
    }
}

api_enum! {
    SalePeriodType { Regular => "REGULAR", Period => "PERIOD" }
}

api_enum! {
    ProductClassType {
        Default => "DEFAULT",
        Event => "EVENT",
        Offline => "OFFLINE",
        Rental => "RENTAL",
    }
}

api_enum! {
    DeliveryConditionType {
        Free => "FREE",
        Conditional => "CONDITIONAL",
        FixedFee => "FIXED_FEE",
    }
}

api_enum! {
    /// Discount unit reported by the search engine.
    DiscountUnitType { Won => "WON", Rate => "RATE" }
}

api_enum! {
    /// Discount unit used by product detail and patch payloads.
    AmountUnitType { Amount => "AMOUNT", Percent => "PERCENT" }
}

api_enum! {
    StickerType { Text => "TEXT", Image => "IMAGE" }
}

api_enum! {
    ChangedProductSortBy { RegisteredAt => "REGISTERED_AT", UpdatedAt => "UPDATED_AT" }
}

api_enum! {
    SearchOrderBy { RecentProduct => "RECENT_PRODUCT", SaleYmd => "SALE_YMD" }
}

api_enum! {
    SearchShippingArea { Partner => "PARTNER", Mall => "MALL" }
}

api_enum! {
    SearchPlatformType { Pc => "PC", MobileWeb => "MOBILE_WEB", Mobile => "MOBILE" }
}

api_enum! {
    /// Tri-state display filter: shown, hidden or either.
    DisplayFilter { Y => "Y", N => "N", All => "ALL" }
}

api_enum! {
    SaleMethodFilter { All => "ALL", Purchase => "PURCHASE", Consignment => "CONSIGNMENT" }
}

api_enum! {
    StockRangeType {
        All => "ALL",
        None => "NONE",
        Exist => "EXIST",
        Eq => "EQ",
        Lt => "LT",
        Le => "LE",
        Gt => "GT",
        Ge => "GE",
        Range => "RANGE",
    }
}

// Search engine (v2.0)

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerDisplayPeriod {
    pub start_date_time: Option<KstDateTime>,
    pub end_date_time: Option<KstDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerInfo {
    #[serde(rename = "type")]
    pub sticker_type: StickerType,
    pub label: String,
    pub name: String,
    pub display_period: Option<StickerDisplayPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationData {
    pub reservation_start_ymdt: KstDateTime,
    pub reservation_end_ymdt: KstDateTime,
    pub reservation_delivery_ymdt: KstDateTime,
    pub reservation_stock_cnt: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    pub option_no: u64,
    pub option_value: String,
    pub stock_cnt: i64,
    pub mall_product_no: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchItem {
    pub product_no: u64,
    pub product_name: String,
    #[serde(default)]
    pub product_name_en: Option<String>,
    pub product_class_type: Option<ProductClassType>,
    pub partner_name: Option<String>,
    pub promotion_text: Option<String>,
    pub sale_price: f64,
    pub immediate_discount_amt: Option<f64>,
    pub immediate_discount_unit_type: Option<DiscountUnitType>,
    pub discounted_price: Option<f64>,
    pub delivery_condition_type: Option<DeliveryConditionType>,
    pub shipping_area: Option<ShippingAreaType>,
    pub stock_cnt: Option<i64>,
    pub brand_no: Option<u64>,
    pub brand_name: Option<String>,
    #[serde(default)]
    pub sticker_infos: Vec<StickerInfo>,
    pub product_sale_period_type: Option<SalePeriodType>,
    pub sale_start_ymdt: KstDateTime,
    pub sale_end_ymdt: KstDateTime,
    pub sale_status_type: SaleStatusType,
    pub reservation_data: Option<ReservationData>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub register_ymdt: KstDateTime,
    pub front_display_yn: Option<bool>,
    pub product_management_cd: Option<String>,
    pub option_values: Option<Vec<OptionValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchV2Response {
    pub total_count: u64,
    pub page_count: u64,
    pub last_id: Option<String>,
    #[serde(default)]
    pub displayable_stock: bool,
    #[serde(default)]
    pub items: Vec<ProductSearchItem>,
}

/// Query for `GET /products/search/engine/`. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearchParams {
    pub keywords: Option<String>,
    pub delivery_condition_type: Option<DeliveryConditionType>,
    pub sale_status: Option<String>,
    pub soldout: Option<bool>,
    pub total_review_count: Option<bool>,
    pub family_malls: Option<bool>,
    pub product_management_cd: Option<String>,
    pub exclude_mall_product_no: Option<u64>,
    pub include_mall_product_no: Option<u64>,
    pub order_by: Option<SearchOrderBy>,
    pub order_direction: Option<SortDirection>,
    pub soldout_place_end: Option<bool>,
    pub display_category_nos: Vec<u64>,
    pub display_brand_nos: Vec<u64>,
    pub partner_no: Option<u64>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub search_after: Option<String>,
    pub has_option_values: Option<bool>,
    pub shipping_area_type: Option<SearchShippingArea>,
    pub platform_type: Option<SearchPlatformType>,
    pub front_display: Option<DisplayFilter>,
    pub url_direct_display: Option<DisplayFilter>,
    pub registration_period_start: Option<KstDateTime>,
    pub registration_period_end: Option<KstDateTime>,
    pub modification_period_start: Option<KstDateTime>,
    pub modification_period_end: Option<KstDateTime>,
    pub sale_setting_types: Vec<SaleSettingStatusType>,
    pub apply_status_type: Option<String>,
    pub sale_method_type: Option<SaleMethodFilter>,
    pub stock_range_type: Option<StockRangeType>,
    pub stock_range_stock_cnt: Option<i64>,
    pub stock_range_min_stock_cnt: Option<i64>,
    pub stock_range_max_stock_cnt: Option<i64>,
    pub custom_property_value_nos: Vec<u64>,
    pub admin_no: Option<u64>,
}

// Changed products

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedProductItem {
    pub product_no: u64,
    pub mall_product_no: u64,
    pub registered_at: KstDateTime,
    pub updated_at: Option<KstDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedProductsResponse {
    pub total_count: u64,
    pub total_page: u64,
    pub last_id: String,
    #[serde(default)]
    pub items: Vec<ChangedProductItem>,
}

/// Query for `GET /products/changed`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangedProductsParams {
    pub as_of: KstDateTime,
    pub sort_by: ChangedProductSortBy,
    pub size: u32,
    pub direction: Option<SortDirection>,
    /// Only honoured by the API when sorting by `UPDATED_AT`.
    pub including_stock_changes: Option<bool>,
    pub page: Option<u32>,
    /// Only honoured by the API when sorting by `REGISTERED_AT`.
    pub search_after: Option<String>,
}

impl ChangedProductsParams {
    pub fn new(as_of: KstDateTime, sort_by: ChangedProductSortBy, size: u32) -> Self {
        Self {
            as_of,
            sort_by,
            size,
            direction: None,
            including_stock_changes: None,
            page: None,
            search_after: None,
        }
    }
}

// Histories

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHistoryItem {
    pub modified_date: KstDateTime,
    pub apply_status_type: ApplyStatusType,
    pub sale_status_type: SaleStatusType,
    pub sale_setting_status_type: SaleSettingStatusType,
    pub admin_name: String,
    pub confirm_admin_name: String,
    #[serde(default)]
    pub change_properties: Vec<Value>,
}

// Detail (v3.0)

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePeriodInfo {
    pub period_type: SalePeriodType,
    pub start_ymdt: KstDateTime,
    pub end_ymdt: KstDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionTextInfo {
    pub text: String,
    pub period_yn: YesNo,
    pub start_ymd: Option<KstDate>,
    pub end_ymd: Option<KstDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartInfo {
    pub use_yn: YesNo,
    pub off_period_yn: YesNo,
    pub off_start_ymd: Option<KstDate>,
    pub off_end_ymd: Option<KstDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmediateDiscountInfo {
    pub unit_type: AmountUnitType,
    pub amount: f64,
    pub period_yn: YesNo,
    pub start_ymdt: Option<KstDateTime>,
    pub end_ymdt: Option<KstDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOption {
    pub mall_option_no: u64,
    pub stock_no: Option<u64>,
    pub option_name: String,
    pub option_value: String,
    #[serde(default)]
    pub add_price: f64,
    pub use_yn: Option<YesNo>,
    pub stock_cnt: Option<i64>,
    pub sku: Option<String>,
    #[serde(default)]
    pub forced_sold_out: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MallProductImage {
    pub image_url: String,
    pub main_yn: Option<YesNo>,
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailV3Response {
    pub mall_product_no: u64,
    pub mall_no: u64,
    pub partner_no: Option<u64>,
    pub product_name: String,
    pub product_name_en: Option<String>,
    pub promotion_text_info: Option<PromotionTextInfo>,
    pub cart_info: Option<CartInfo>,
    pub front_display_yn: Option<YesNo>,
    pub sale_period_info: SalePeriodInfo,
    pub sale_price: f64,
    pub immediate_discount_info: Option<ImmediateDiscountInfo>,
    pub manufacture_ymdt: Option<KstDate>,
    pub expiration_ymdt: Option<KstDate>,
    pub product_management_cd: Option<String>,
    pub apply_status_type: Option<ApplyStatusType>,
    pub sale_status_type: Option<SaleStatusType>,
    pub sale_setting_status_type: Option<SaleSettingStatusType>,
    pub brand_no: Option<u64>,
    pub brand_name: Option<String>,
    pub product_stock_cnt: Option<i64>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub mall_product_images: Vec<MallProductImage>,
    pub register_ymdt: Option<KstDateTime>,
    pub update_ymdt: Option<KstDateTime>,
}

// Detail (v1.0)
//
// The v1 schema is wide and loosely typed; flags the API documents as free
// text stay `String` so that `validate-products` reports real drift only.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1RefundableInfo {
    pub refundable_yn: String,
    #[serde(default)]
    pub non_refundable_info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1AccumulationLimitInfo {
    pub unit_type: Option<AmountUnitType>,
    pub limit_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1DisplayCategory {
    pub display_category_no: u64,
    pub mall_no: u64,
    pub display_category_name: String,
    pub icon: String,
    pub top_image_content: String,
    pub display_order: i64,
    pub display_yn: String,
    pub delete_yn: String,
    pub depth: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1Sticker {
    pub sticker_no: u64,
    pub label: String,
    pub delete_yn: String,
    pub sticker_exposure_position: Option<String>,
    pub display_order: i64,
    pub sticker_type: String,
    pub image_url: Option<String>,
    pub mall_no: u64,
    pub display_period: Option<StickerDisplayPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1CustomPropertyValue {
    pub prop_value_no: u64,
    pub prop_value: String,
    pub prop_name: String,
    pub display_order: i64,
    pub register_ymdt: KstDateTime,
    pub register_admin_no: u64,
    pub modify_ymdt: Option<KstDateTime>,
    pub modify_admin_no: Option<u64>,
    pub delete_yn: bool,
}

/// Reservation sale window and the first shipping day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1ReservationInfo {
    pub start_date_time: KstDateTime,
    pub end_date_time: KstDateTime,
    pub delivery_date_time: KstDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1RelatedProductInfo {
    pub config_type: Option<String>,
    pub sort_criterion: Option<String>,
    #[serde(default)]
    pub products: Vec<Value>,
    pub mall_no: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1ImageUrlMappingInfo {
    #[serde(default)]
    pub content_header: Map<String, Value>,
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default)]
    pub content_footer: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1MallProduct {
    pub mall_product_no: u64,
    pub product_no: u64,
    pub parent_mall_product_no: Option<u64>,
    pub mall_no: u64,
    pub master_yn: String,
    pub partner_no: u64,
    pub category_no: u64,
    pub product_name: String,
    pub product_type: String,
    pub class_type: String,
    pub mapping_type: String,
    pub apply_status_type: String,
    pub sale_status_type: String,
    pub sale_setting_status_type: String,
    pub group_type: String,
    pub sale_method_type: String,
    pub payment_means_control_yn: String,
    pub payment_means: String,
    pub refundable_yn: String,
    pub refundable_info: Option<V1RefundableInfo>,
    pub display_brand_no: u64,
    pub brand_no: u64,
    pub admin_no: u64,
    pub sale_period_type: String,
    pub sale_start_ymdt: KstDateTime,
    pub sale_end_ymdt: KstDateTime,
    pub manufacture_ymdt: Option<KstDateTime>,
    pub register_ymdt: KstDateTime,
    pub register_admin_no: u64,
    pub update_ymdt: Option<KstDateTime>,
    pub update_admin_no: Option<u64>,
    pub sale_price: f64,
    pub min_buy_cnt: i64,
    pub max_buy_person_cnt: i64,
    pub max_buy_time_cnt: i64,
    pub max_buy_days: i64,
    pub max_buy_period_cnt: i64,
    pub immediate_discount_apply_price: f64,
    pub immediate_discount_value: f64,
    pub immediate_discount_unit_type: DiscountUnitType,
    pub immediate_discount_period_yn: String,
    pub immediate_discount_start_ymdt: Option<KstDateTime>,
    pub immediate_discount_end_ymdt: Option<KstDateTime>,
    /// Deprecated by the API; still sent.
    pub comparing_price_site: Option<String>,
    pub nonmember_purchase_yn: String,
    pub minor_purchase_yn: String,
    pub unit_name: String,
    pub unit_name_type: Option<String>,
    pub unit_price: i64,
    pub point_rate: i64,
    pub accumulation_rate: Option<f64>,
    pub accumulation_use_yn: String,
    pub accumulation_limit_info: Option<V1AccumulationLimitInfo>,
    pub certification_json: String,
    pub certification_type: String,
    pub place_origin: Option<String>,
    pub place_origins_yn: String,
    pub expiration_ymdt: Option<KstDateTime>,
    pub value_added_tax_type: String,
    pub product_management_cd: String,
    pub cart_use_yn: String,
    pub cart_off_period_yn: String,
    pub cart_off_start_ymdt: Option<KstDateTime>,
    pub cart_off_end_ymdt: Option<KstDateTime>,
    pub commission_rate_type: String,
    pub commission_rate: f64,
    pub keyword: String,
    pub extra_json: String,
    pub product_name_en: String,
    pub hs_code: String,
    pub ean_code: String,
    pub promotion_yn: String,
    pub additional_discount_yn: String,
    pub coupon_yn: String,
    pub free_gift_yn: String,
    pub promotion_text_yn: String,
    pub promotion_text: String,
    pub promotion_text_start_ymdt: Option<KstDateTime>,
    pub promotion_text_end_ymdt: Option<KstDateTime>,
    pub platform_display_yn: String,
    pub platform_display_pc_yn: String,
    pub platform_display_mobile_yn: String,
    pub platform_display_mobile_web_yn: String,
    pub searchengine_display_yn: String,
    /// Product information notice, JSON encoded.
    pub duty_info: Option<String>,
    pub content_header: String,
    pub content: String,
    pub content_footer: String,
    pub partner_charge_amt: f64,
    pub front_display_yn: String,
    pub url_direct_display_yn: String,
    pub delivery_yn: String,
    pub shipping_area_type: String,
    pub shipping_area_partner_no: u64,
    pub delivery_combination_yn: String,
    pub delivery_international_yn: String,
    pub delivery_template_no: u64,
    pub delivery_customer_info: String,
    pub is_option_used: bool,
    pub add_option_image_yn: String,
    pub place_origin_seq: Option<i64>,
    pub sync_wms_yn: String,
    pub delete_yn: String,
    pub temp_save: String,
    pub item_yn: String,
    pub member_grade_display_info: Option<String>,
    pub member_group_display_info: Option<String>,
    pub register_site_type: String,
    pub image_url_mapping_info: Option<V1ImageUrlMappingInfo>,
    pub stickers: Option<Vec<V1Sticker>>,
    pub custom_property_values: Option<Vec<V1CustomPropertyValue>>,
    pub display_categories: Option<Vec<V1DisplayCategory>>,
    pub partner_name: String,
    pub mapping_key: String,
    pub reservation_info: Option<V1ReservationInfo>,
    pub visible_sale_status: String,
    pub liquor_delegation_guide: Option<String>,
    pub related_product_info: Option<V1RelatedProductInfo>,
    pub sale_start_ymd: KstDate,
    pub sale_end_ymd: KstDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1MallProductImage {
    pub mall_image_no: u64,
    pub product_image_no: u64,
    pub mall_product_no: u64,
    pub image_url: String,
    pub origin_image_url: String,
    pub main_yn: String,
    pub display_order: i64,
    /// Image id in the storage service.
    pub image_id: String,
    pub main_image: bool,
}

/// A text field the buyer fills in at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1MallProductInput {
    pub mall_product_input_no: u64,
    pub input_text: String,
    pub input_matching_type_label: String,
    pub use_yn: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1OptionImage {
    pub mall_option_image_no: u64,
    pub mall_option_no: u64,
    pub mall_option_image_url: String,
    pub origin_mall_option_image_url: String,
    pub main_yn: String,
    pub display_order: i64,
    pub mall_option_image_id: String,
}

/// An item option sold as part of a set option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1MappingOption {
    pub mall_option_no: u64,
    pub item_mall_product_no: u64,
    pub item_mall_option_no: u64,
    pub sku: Option<String>,
    pub item_stock_no: u64,
    pub item_stock_cnt: i64,
    pub item_safety_stock_cnt: i64,
    pub item_delivery_waiting_stock_cnt: i64,
    pub product_name: String,
    pub product_management_cd: String,
    pub option_management_cd: String,
    pub original_mapping_option_sale_price: f64,
    pub mapping_cnt: i64,
    pub mapping_option_sale_price: f64,
    pub mapping_display_order: i64,
    pub option_name: String,
    pub option_value: String,
    pub apply_status_type: String,
    pub sale_status_type: String,
    pub sale_start_ymdt: Option<KstDateTime>,
    pub sale_end_ymdt: Option<KstDateTime>,
    pub reservation_start_ymdt: Option<KstDateTime>,
    pub reservation_end_ymdt: Option<KstDateTime>,
    pub before_onsale: bool,
    pub delete_yn: Option<bool>,
    pub option_name_value_pair: String,
    pub option_sale_status_type: String,
    pub option_reservation_sale_status_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V1MallProductOption {
    pub mall_product_no: u64,
    pub mall_no: u64,
    pub stock_no: u64,
    pub option_type: String,
    pub option_no: u64,
    pub mall_option_no: u64,
    pub option_name: String,
    pub option_value: String,
    pub display_order: i64,
    pub add_price: f64,
    pub commission_rate: f64,
    pub sale_status_type: String,
    pub use_yn: String,
    pub option_management_cd: String,
    pub extra_management_cd: Option<String>,
    pub register_ymdt: KstDateTime,
    pub register_admin_no: u64,
    pub update_ymdt: Option<KstDateTime>,
    pub update_admin_no: Option<u64>,
    pub master_yn: String,
    pub delete_yn: String,
    pub stock_cnt: i64,
    pub delivery_waiting_stock_cnt: i64,
    pub safety_stock_cnt: i64,
    pub reservation_stock_cnt: i64,
    pub sale_cnt: i64,
    pub weight: f64,
    pub purchase_price: f64,
    pub sku: Option<String>,
    pub edit_price_yn: Option<String>,
    pub edit_yn: String,
    pub deletable: String,
    #[serde(default)]
    pub slave_mall_option_nos: Vec<u64>,
    pub item_yn: String,
    #[serde(default)]
    pub option_images: Vec<V1OptionImage>,
    #[serde(default)]
    pub delete_option_image_no_list: Vec<u64>,
    pub mapping_options: Option<Vec<V1MappingOption>>,
    pub edit_mapping_options: bool,
    pub standard_option: bool,
    pub forced_sold_out: bool,
    pub option_select_type: String,
    pub is_required_option: bool,
    pub edit: bool,
    pub represent_yn: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailV1Response {
    pub mall_product: V1MallProduct,
    #[serde(default)]
    pub mall_product_images: Vec<V1MallProductImage>,
    #[serde(default)]
    pub mall_product_inputs: Vec<V1MallProductInput>,
    #[serde(default)]
    pub mall_product_option_web_models: Vec<V1MallProductOption>,
}

// Search by numbers

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSalePeriod {
    pub period_type: SalePeriodType,
    pub start_ymdt: KstDateTime,
    pub end_ymdt: KstDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSaleInfo {
    pub sale_period: ListSalePeriod,
    pub sale_status_type: String,
    pub sale_setting_status_type: String,
    pub sale_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub mall_product_no: u64,
    pub product_name: String,
    pub mall_no: Option<u64>,
    pub partner_no: Option<u64>,
    pub partner_name: Option<String>,
    pub brand_name: Option<String>,
    pub product_management_cd: Option<String>,
    pub sale_info: Option<ListSaleInfo>,
    #[serde(default)]
    pub is_sold_out: bool,
    pub register_date_time: KstDateTime,
    pub update_date_time: Option<KstDateTime>,
}

// Partial update (v2.0)

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchContentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchImmediateDiscountInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<AmountUnitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_yn: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ymdt: Option<KstDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_ymdt: Option<KstDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchPriceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_discount_info: Option<PatchImmediateDiscountInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulation_use_yn: Option<YesNo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSalePeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_ymdt: Option<KstDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_ymdt: Option<KstDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSalePeriodInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_period_type: Option<SalePeriodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_period: Option<PatchSalePeriod>,
}

/// Body of the partial product update. Only populated fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchProductV2Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_category_nos: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_detail: Option<PatchContentDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PatchPriceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_period_info: Option<PatchSalePeriodInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufactured_date_time: Option<KstDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<KstDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_restock_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_shortening_yn: Option<YesNo>,
}

impl PatchProductV2Request {
    pub fn rename(product_name: impl Into<String>) -> Self {
        Self {
            product_name: Some(product_name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_products_normalize_timestamps() {
        let response: ChangedProductsResponse = serde_json::from_value(serde_json::json!({
            "totalCount": 1,
            "totalPage": 1,
            "lastId": "abc",
            "items": [{
                "productNo": 1,
                "mallProductNo": 2,
                "registeredAt": "2025-11-06T17:27:44.085197",
                "updatedAt": "2025-11-06T08:27:44Z"
            }]
        }))
        .expect("must parse");

        let item = &response.items[0];
        assert_eq!(item.registered_at.format(), "2025-11-06 17:27:44");
        assert_eq!(
            item.updated_at.map(|value| value.format()),
            Some(String::from("2025-11-06 17:27:44"))
        );
    }

    #[test]
    fn patch_request_omits_unset_fields() {
        let body = serde_json::to_value(PatchProductV2Request::rename("New name"))
            .expect("must serialize");
        assert_eq!(body, serde_json::json!({ "productName": "New name" }));
        assert!(PatchProductV2Request::default().is_empty());
    }

    #[test]
    fn promotion_text_dates_reject_timestamps() {
        let result = serde_json::from_value::<PromotionTextInfo>(serde_json::json!({
            "text": "sale",
            "periodYn": "Y",
            "startYmd": "2025-03-01 00:00:00"
        }));
        assert!(result.is_err());
    }
}
