use crate::client::{QueryParams, ServerApiClient};
use crate::error::ShopbyError;
use crate::models::products::{
    ChangedProductsParams, ChangedProductsResponse, PatchProductV2Request, ProductDetailV1Response,
    ProductDetailV3Response, ProductHistoryItem, ProductListItem, ProductSearchParams,
    ProductSearchV2Response,
};

/// Upper bound of `productNos` accepted by `/products/search-by-nos`.
pub const MAX_PRODUCT_NOS: usize = 100;

/// Product endpoints of the server API.
#[derive(Debug, Clone)]
pub struct ProductsClient {
    api: ServerApiClient,
}

impl ProductsClient {
    pub fn new(api: ServerApiClient) -> Self {
        Self { api }
    }

    pub async fn get_product_detail_v3(
        &self,
        mall_product_no: u64,
    ) -> Result<ProductDetailV3Response, ShopbyError> {
        self.api
            .get(&format!("/products/{mall_product_no}/"), "3.0", QueryParams::new())
            .await
    }

    pub async fn get_product_detail(
        &self,
        product_no: u64,
    ) -> Result<ProductDetailV1Response, ShopbyError> {
        self.api
            .get(&format!("/products/{product_no}"), "1.0", QueryParams::new())
            .await
    }

    /// Search engine backed product search (version 2.0).
    pub async fn search_products_v2(
        &self,
        params: &ProductSearchParams,
    ) -> Result<ProductSearchV2Response, ShopbyError> {
        self.api
            .get("/products/search/engine/", "2.0", search_query(params))
            .await
    }

    pub async fn get_changed_product_nos(
        &self,
        params: &ChangedProductsParams,
    ) -> Result<ChangedProductsResponse, ShopbyError> {
        self.api
            .get("/products/changed", "1.0", changed_query(params))
            .await
    }

    /// Fetches up to [`MAX_PRODUCT_NOS`] products by number.
    pub async fn search_products_by_list(
        &self,
        product_nos: &[u64],
        partner_no: Option<u64>,
    ) -> Result<Vec<ProductListItem>, ShopbyError> {
        if product_nos.is_empty() {
            return Err(ShopbyError::invalid_request(
                "search-by-nos requires at least one product number",
            ));
        }
        if product_nos.len() > MAX_PRODUCT_NOS {
            return Err(ShopbyError::invalid_request(format!(
                "search-by-nos accepts at most {MAX_PRODUCT_NOS} product numbers, got {}",
                product_nos.len()
            )));
        }

        let mut query = QueryParams::new();
        query
            .push_list("productNos", product_nos)
            .push_opt("partnerNo", partner_no);

        self.api.get("/products/search-by-nos", "1.0", query).await
    }

    pub async fn get_product_histories(
        &self,
        product_no: u64,
    ) -> Result<Vec<ProductHistoryItem>, ShopbyError> {
        self.api
            .get(&format!("/products/{product_no}/histories"), "1.0", QueryParams::new())
            .await
    }

    /// Partially updates a product. Fields left `None` are not touched.
    pub async fn patch_product_v2(
        &self,
        product_no: u64,
        request: &PatchProductV2Request,
    ) -> Result<(), ShopbyError> {
        if request.is_empty() {
            return Err(ShopbyError::invalid_request(
                "patch request must set at least one field",
            ));
        }

        self.api
            .patch(&format!("/products/{product_no}"), "2.0", request)
            .await
    }
}

pub(crate) fn search_query(params: &ProductSearchParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("filter.keywords", params.keywords.as_deref())
        .push_opt("filter.deliveryConditionType", params.delivery_condition_type)
        .push_opt("filter.saleStatus", params.sale_status.as_deref())
        .push_opt("filter.soldout", params.soldout)
        .push_opt("filter.totalReviewCount", params.total_review_count)
        .push_opt("filter.familyMalls", params.family_malls)
        .push_opt("filter.productManagementCd", params.product_management_cd.as_deref())
        .push_opt("filter.excludeMallProductNo", params.exclude_mall_product_no)
        .push_opt("filter.includeMallProductNo", params.include_mall_product_no)
        .push_opt("order.by", params.order_by)
        .push_opt("order.direction", params.order_direction)
        .push_opt("order.soldoutPlaceEnd", params.soldout_place_end)
        .push_list("displayCategoryNos", &params.display_category_nos)
        .push_list("displayBrandNos", &params.display_brand_nos)
        .push_opt("partnerNo", params.partner_no)
        .push_opt("pageNumber", params.page_number)
        .push_opt("pageSize", params.page_size)
        .push_opt("searchAfter", params.search_after.as_deref())
        .push_opt("hasOptionValues", params.has_option_values)
        .push_opt("shippingAreaType", params.shipping_area_type)
        .push_opt("platformType", params.platform_type)
        .push_opt("frontDisplay", params.front_display)
        .push_opt("urlDirectDisplay", params.url_direct_display)
        .push_opt("registrationPeriod.startYmdt", params.registration_period_start)
        .push_opt("registrationPeriod.endYmdt", params.registration_period_end)
        .push_opt("modificationPeriod.startYmdt", params.modification_period_start)
        .push_opt("modificationPeriod.endYmdt", params.modification_period_end)
        .push_list("saleSettingTypes", &params.sale_setting_types)
        .push_opt("applyStatusType", params.apply_status_type.as_deref())
        .push_opt("saleMethodType", params.sale_method_type)
        .push_opt("stockRange.type", params.stock_range_type)
        .push_opt("stockRange.stockCnt", params.stock_range_stock_cnt)
        .push_opt("stockRange.minStockCnt", params.stock_range_min_stock_cnt)
        .push_opt("stockRange.maxStockCnt", params.stock_range_max_stock_cnt)
        .push_list("customPropertyValueNos", &params.custom_property_value_nos)
        .push_opt("adminNo", params.admin_no);
    query
}

pub(crate) fn changed_query(params: &ChangedProductsParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push("asOf", params.as_of)
        .push("sortBy", params.sort_by)
        .push("size", params.size)
        .push_opt("direction", params.direction)
        .push_opt("includingStockChanges", params.including_stock_changes)
        .push_opt("page", params.page)
        .push_opt("searchAfter", params.search_after.as_deref());
    query
}
