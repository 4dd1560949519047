use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ShippingAreaType;
use crate::kst::{KstDate, KstDateTime, Timestamp};

api_enum! {
    /// Order status used as a search filter.
    OrderRequestType {
        DepositWait => "DEPOSIT_WAIT",
        PayDone => "PAY_DONE",
        ProductPrepare => "PRODUCT_PREPARE",
        DeliveryPrepare => "DELIVERY_PREPARE",
        DeliveryIng => "DELIVERY_ING",
        DeliveryDone => "DELIVERY_DONE",
        BuyConfirm => "BUY_CONFIRM",
        CancelDone => "CANCEL_DONE",
        ReturnDone => "RETURN_DONE",
        ExchangeDone => "EXCHANGE_DONE",
        CancelProcessing => "CANCEL_PROCESSING",
        ReturnProcessing => "RETURN_PROCESSING",
        ExchangeWaiting => "EXCHANGE_WAITING",
        ExchangeProcessing => "EXCHANGE_PROCESSING",
    }
}

api_enum! {
    SearchDateType {
        OrderStart => "ORDER_START",
        PayDone => "PAY_DONE",
        ProductPrepare => "PRODUCT_PREPARE",
        DeliveryPrepare => "DELIVERY_PREPARE",
        DeliveryIng => "DELIVERY_ING",
        DeliveryDone => "DELIVERY_DONE",
        BuyConfirm => "BUY_CONFIRM",
        StatusChange => "STATUS_CHANGE",
    }
}

api_enum! {
    OrderSearchType { All => "ALL", OrderNo => "ORDER_NO", MallProductNo => "MALL_PRODUCT_NO" }
}

api_enum! {
    PayType {
        CreditCard => "CREDIT_CARD",
        Account => "ACCOUNT",
        Mobile => "MOBILE",
        RealtimeAccountTransfer => "REALTIME_ACCOUNT_TRANSFER",
        VirtualAccount => "VIRTUAL_ACCOUNT",
        Gift => "GIFT",
        Atm => "ATM",
        Payco => "PAYCO",
        ZeroPay => "ZERO_PAY",
        Accumulation => "ACCUMULATION",
        PhoneBill => "PHONE_BILL",
        Point => "POINT",
        Ypay => "YPAY",
        Kpay => "KPAY",
        Paypin => "PAYPIN",
        Inipay => "INIPAY",
        Paypal => "PAYPAL",
        Stripe => "STRIPE",
        NaverPay => "NAVER_PAY",
        KakaoPay => "KAKAO_PAY",
        NaverEasyPay => "NAVER_EASY_PAY",
        SamsungPay => "SAMSUNG_PAY",
        Chai => "CHAI",
        TossPay => "TOSS_PAY",
        SkPay => "SK_PAY",
        ApplePay => "APPLE_PAY",
        Lpay => "LPAY",
        EscrowRealtimeAccountTransfer => "ESCROW_REALTIME_ACCOUNT_TRANSFER",
        EscrowVirtualAccount => "ESCROW_VIRTUAL_ACCOUNT",
        Rental => "RENTAL",
        VeritransCard => "VERITRANS_CARD",
        Toastcam => "TOASTCAM",
        UnionPay => "UNION_PAY",
        Alipay => "ALIPAY",
        WechatPay => "WECHAT_PAY",
        Pinpay => "PINPAY",
        ExternalPay => "EXTERNAL_PAY",
        HmgPay => "HMG_PAY",
        AppCard => "APP_CARD",
        PayPay => "PAY_PAY",
        EContext => "E_CONTEXT",
        HappyVoucher => "HAPPY_VOUCHER",
        Etc => "ETC",
    }
}

api_enum! {
    DeliveryCompanyType {
        Cj => "CJ",
        Post => "POST",
        Hanjin => "HANJIN",
        Gtx => "GTX",
        Lotte => "LOTTE",
        Kgb => "KGB",
        Logen => "LOGEN",
        Gsi => "GSI",
        Kgl => "KGL",
        Intras => "INTRAS",
        Ups => "UPS",
        Chunil => "CHUNIL",
        Kdexp => "KDEXP",
        Hdexp => "HDEXP",
        Ilyang => "ILYANG",
        PostEms => "POST_EMS",
        Daesin => "DAESIN",
        Cvs => "CVS",
        Dhl => "DHL",
        Fedex => "FEDEX",
        Gsm => "GSM",
        Warpex => "WARPEX",
        Wizwa => "WIZWA",
        Aci => "ACI",
        Pantos => "PANTOS",
        CjInternational => "CJ_INTERNATIONAL",
        Tnt => "TNT",
        Cu => "CU",
        Kunyoung => "KUNYOUNG",
        LotteInternational => "LOTTE_INTERNATIONAL",
        Honam => "HONAM",
        Hanips => "HANIPS",
        Iparcel => "IPARCEL",
        Slx => "SLX",
        Usps => "USPS",
        Wonders => "WONDERS",
        Registpost => "REGISTPOST",
        Dhlde => "DHLDE",
        Ezusa => "EZUSA",
        Swgexp => "SWGEXP",
        Daewoon => "DAEWOON",
        Dodoflex => "DODOFLEX",
        NhLogis => "NH_LOGIS",
        Ufo => "UFO",
        TodayPickup => "TODAY_PICKUP",
        Qexpress => "QEXPRESS",
        Pingpong => "PINGPONG",
        CrLogitech => "CR_LOGITECH",
        Today => "TODAY",
        Selluv => "SELLUV",
        Exmate => "EXMATE",
        WinionLogis => "WINION_LOGIS",
        Etc => "ETC",
    }
}

api_enum! {
    /// Status of a single ordered option.
    OrderStatusType {
        DepositWait => "DEPOSIT_WAIT",
        PayDone => "PAY_DONE",
        ProductPrepare => "PRODUCT_PREPARE",
        DeliveryPrepare => "DELIVERY_PREPARE",
        DeliveryIng => "DELIVERY_ING",
        DeliveryDone => "DELIVERY_DONE",
        BuyConfirm => "BUY_CONFIRM",
        CancelDone => "CANCEL_DONE",
        ReturnDone => "RETURN_DONE",
        ExchangeDone => "EXCHANGE_DONE",
        PayWait => "PAY_WAIT",
        PayCancel => "PAY_CANCEL",
        PayFail => "PAY_FAIL",
        Delete => "DELETE",
        ExchangeWait => "EXCHANGE_WAIT",
        RefundDone => "REFUND_DONE",
    }
}

api_enum! {
    PlatformType { Pc => "PC", MobileWeb => "MOBILE_WEB", MobileApp => "MOBILE_APP" }
}

api_enum! {
    ClaimStatusType {
        CancelNoRefund => "CANCEL_NO_REFUND",
        CancelRequest => "CANCEL_REQUEST",
        CancelProcRequestRefund => "CANCEL_PROC_REQUEST_REFUND",
        CancelProcWaitingRefund => "CANCEL_PROC_WAITING_REFUND",
        CancelDone => "CANCEL_DONE",
        ReturnRequest => "RETURN_REQUEST",
        ReturnRejectRequest => "RETURN_REJECT_REQUEST",
        ReturnProcBeforeReceive => "RETURN_PROC_BEFORE_RECEIVE",
        ReturnProcRequestRefund => "RETURN_PROC_REQUEST_REFUND",
        ReturnProcWaitingRefund => "RETURN_PROC_WAITING_REFUND",
        ReturnDone => "RETURN_DONE",
        ReturnRefundAmtAdjustRequested => "RETURN_REFUND_AMT_ADJUST_REQUESTED",
        ReturnNoRefund => "RETURN_NO_REFUND",
        ExchangeRequest => "EXCHANGE_REQUEST",
        ExchangeRejectRequest => "EXCHANGE_REJECT_REQUEST",
        ExchangeProcBeforeReceive => "EXCHANGE_PROC_BEFORE_RECEIVE",
        ExchangeProcRequestPay => "EXCHANGE_PROC_REQUEST_PAY",
        ExchangeProcRequestRefund => "EXCHANGE_PROC_REQUEST_REFUND",
        ExchangeProcWaiting => "EXCHANGE_PROC_WAITING",
        ExchangeDone => "EXCHANGE_DONE",
        ExchangeProcWaitingPay => "EXCHANGE_PROC_WAITING_PAY",
        ExchangeProcWaitingRefund => "EXCHANGE_PROC_WAITING_REFUND",
        ExchangeDonePayDone => "EXCHANGE_DONE_PAY_DONE",
        ExchangeDoneRefundDone => "EXCHANGE_DONE_REFUND_DONE",
    }
}

api_enum! {
    ClaimType { Cancel => "CANCEL", Return => "RETURN", Exchange => "EXCHANGE" }
}

/// Query for `GET /orders`.
///
/// `start_ymdt`/`end_ymdt` take precedence over the date-only bounds on the
/// server side; both may be sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSearchParams {
    pub start_ymd: Option<KstDate>,
    pub end_ymd: Option<KstDate>,
    pub start_ymdt: Option<Timestamp>,
    pub end_ymdt: Option<Timestamp>,
    pub order_option_nos: Vec<u64>,
    pub order_request_types: Vec<OrderRequestType>,
    pub search_date_type: Option<SearchDateType>,
    pub member_no: Option<u64>,
    pub search_type: Option<OrderSearchType>,
    pub search_values: Vec<String>,
    pub delivery_company_type: Option<DeliveryCompanyType>,
    pub orderer_contact1: Option<String>,
    pub receiver_contact1: Option<String>,
    pub shipping_area_type: Option<ShippingAreaType>,
    pub pay_type: Option<PayType>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub desc: Option<bool>,
    pub partner_no: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductOption {
    pub order_option_no: Option<u64>,
    pub order_product_option_no: Option<u64>,
    pub mall_option_no: Option<u64>,
    pub order_status_type: Option<OrderStatusType>,
    pub order_cnt: Option<i64>,
    pub order_ymdt: Option<KstDateTime>,
    pub option_name: Option<String>,
    pub option_value: Option<String>,
    pub sale_price: Option<f64>,
    pub delivery_complete_ymdt: Option<KstDateTime>,
    pub buy_confirm_ymdt: Option<KstDateTime>,
    pub order_accept_ymdt: Option<KstDateTime>,
    pub status_change_ymdt: Option<KstDateTime>,
    pub pay_ymdt: Option<KstDateTime>,
    pub release_ready_ymdt: Option<KstDateTime>,
    pub release_ymdt: Option<KstDateTime>,
    pub register_ymdt: Option<KstDateTime>,
    pub update_ymdt: Option<KstDateTime>,
    pub claim_no: Option<u64>,
    pub claim_status_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub order_product_no: Option<u64>,
    pub mall_product_no: Option<u64>,
    pub product_no: Option<u64>,
    pub product_name: Option<String>,
    pub product_management_cd: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub order_product_options: Vec<OrderProductOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryGroup {
    pub delivery_no: u64,
    pub invoice_no: Option<String>,
    pub invoice_register_ymdt: Option<KstDateTime>,
    pub delivery_company_type: Option<DeliveryCompanyType>,
    pub delivery_amt: Option<f64>,
    pub receiver_name: Option<String>,
    pub receiver_contact1: Option<String>,
    pub receiver_address: Option<String>,
    pub delivery_memo: Option<String>,
    #[serde(default)]
    pub order_products: Vec<OrderProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: Option<String>,
    pub order_ymdt: Option<KstDateTime>,
    pub mall_no: Option<u64>,
    pub member_no: Option<u64>,
    pub member_id: Option<String>,
    pub orderer_name: Option<String>,
    pub orderer_contact1: Option<String>,
    pub platform_type: Option<PlatformType>,
    pub pay_type: Option<PayType>,
    pub pay_type_label: Option<String>,
    pub first_pay_ymdt: Option<KstDateTime>,
    pub first_pay_amt: Option<f64>,
    pub last_pay_amt: Option<f64>,
    #[serde(default)]
    pub delivery_groups: Vec<DeliveryGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub total_count: u64,
    #[serde(default)]
    pub contents: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orderer {
    pub name: Option<String>,
    pub contact1: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    pub name: Option<String>,
    pub zip_cd: Option<String>,
    pub address: Option<String>,
    pub detail_address: Option<String>,
    pub contact1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipping {
    pub shipping_no: Option<u64>,
    pub delivery_amt: Option<f64>,
    pub receiver: Option<Receiver>,
    pub invoice_no: Option<String>,
    pub delivery_company_type: Option<DeliveryCompanyType>,
    pub delivery_company_type_label: Option<String>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBalance {
    pub pay_amt: Option<f64>,
    pub main_pay_amt: Option<f64>,
    pub sub_pay_amt: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub no: Option<u64>,
    pub balance: Option<PaymentBalance>,
    pub payment_info: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimInfo {
    pub claim_no: Option<u64>,
    pub claim_ymdt: Option<KstDateTime>,
    pub claim_complete_ymdt: Option<KstDateTime>,
    pub claim_type: Option<ClaimType>,
    pub refund_pay_type: Option<PayType>,
    pub claim_status_type: Option<ClaimStatusType>,
    pub claim_amt: Option<f64>,
    pub claim_reason_type: Option<String>,
    pub claim_reason_detail: Option<String>,
    pub treatment_ymdt: Option<KstDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub order_no: Option<String>,
    pub mall_no: Option<u64>,
    pub pay_type: Option<PayType>,
    pub platform_type: Option<PlatformType>,
    pub member_no: Option<u64>,
    pub is_member_order: Option<bool>,
    pub last_main_pay_amt: Option<f64>,
    pub orderer: Option<Orderer>,
    pub register_ymdt: Option<KstDateTime>,
    pub update_ymdt: Option<KstDateTime>,
    pub first_pay_ymdt: Option<KstDateTime>,
    pub order_memo: Option<String>,
    #[serde(default)]
    pub order_products: Vec<Value>,
    #[serde(default)]
    pub shippings: Vec<Shipping>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub claim_infos: Vec<ClaimInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_detail_normalizes_nested_claim_times() {
        let detail: OrderDetailResponse = serde_json::from_value(serde_json::json!({
            "orderNo": "202503011230001",
            "payType": "NAVER_PAY",
            "registerYmdt": "2025-03-01 12:30:00",
            "claimInfos": [{
                "claimType": "CANCEL",
                "claimStatusType": "CANCEL_DONE",
                "claimYmdt": "2025-03-01T03:30:00Z"
            }]
        }))
        .expect("must parse");

        assert_eq!(detail.pay_type, Some(PayType::NaverPay));
        let claim = &detail.claim_infos[0];
        assert_eq!(claim.claim_type, Some(ClaimType::Cancel));
        assert_eq!(
            claim.claim_ymdt.map(|value| value.format()),
            Some(String::from("2025-03-01 12:30:00"))
        );
    }

    #[test]
    fn unknown_pay_type_fails_validation() {
        let result = serde_json::from_value::<Order>(serde_json::json!({ "payType": "BITCOIN" }));
        assert!(result.is_err());
    }
}
