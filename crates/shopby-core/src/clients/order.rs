use crate::client::{QueryParams, ServerApiClient};
use crate::error::ShopbyError;
use crate::kst::to_kst_string;
use crate::models::order::{OrderDetailResponse, OrderSearchParams, OrdersResponse};

/// Order endpoints of the server API.
#[derive(Debug, Clone)]
pub struct OrderClient {
    api: ServerApiClient,
}

impl OrderClient {
    pub fn new(api: ServerApiClient) -> Self {
        Self { api }
    }

    /// Lists orders (version 1.1), newest order number first.
    pub async fn get_orders(&self, params: &OrderSearchParams) -> Result<OrdersResponse, ShopbyError> {
        self.api.get("/orders", "1.1", orders_query(params)).await
    }

    pub async fn get_order_detail(&self, order_no: &str) -> Result<OrderDetailResponse, ShopbyError> {
        if order_no.trim().is_empty() {
            return Err(ShopbyError::invalid_request("order number must not be empty"));
        }

        let path = format!("/orders/{}", urlencoding::encode(order_no.trim()));
        self.api.get(&path, "1.0", QueryParams::new()).await
    }
}

pub(crate) fn orders_query(params: &OrderSearchParams) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("startYmd", params.start_ymd)
        .push_opt("endYmd", params.end_ymd)
        .push_opt("startYmdt", params.start_ymdt.map(to_kst_string))
        .push_opt("endYmdt", params.end_ymdt.map(to_kst_string))
        .push_list("orderOptionNos", &params.order_option_nos)
        .push_list("orderRequestTypes", &params.order_request_types)
        .push_opt("searchDateType", params.search_date_type)
        .push_opt("memberNo", params.member_no)
        .push_opt("searchType", params.search_type)
        .push_list("searchValues", &params.search_values)
        .push_opt("deliveryCompanyType", params.delivery_company_type)
        .push_opt("ordererContact1", params.orderer_contact1.as_deref())
        .push_opt("receiverContact1", params.receiver_contact1.as_deref())
        .push_opt("shippingAreaType", params.shipping_area_type)
        .push_opt("payType", params.pay_type)
        .push_opt("pageNumber", params.page_number)
        .push_opt("pageSize", params.page_size)
        .push_opt("desc", params.desc)
        .push_opt("partnerNo", params.partner_no);
    query
}
