//! Contract tests for the wire models
//!
//! Payloads here mirror what the server API returns; the tests pin down which
//! fields are required, how enumerations are validated and that every
//! temporal field lands in KST.

#![recursion_limit = "512"]

use serde_json::json;
use shopby_core::models::display::{DisplayPeriodType, EventDetailResponse, EventType};
use shopby_core::models::member::{MemberRef, ProfileGroupsResponse};
use shopby_core::models::order::{DeliveryCompanyType, OrderDetailResponse, PayType};
use shopby_core::models::products::{
    AmountUnitType, ProductDetailV1Response, ProductDetailV3Response, ProductHistoryItem,
    ProductSearchV2Response, SaleStatusType, StickerType,
};
use shopby_core::models::YesNo;
use shopby_core::{KstDate, PatchProductV2Request};
use time::macros::date;

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn every_enum_variant_round_trips_through_its_wire_name() {
    for variant in PayType::ALL {
        let parsed: PayType = variant.as_str().parse().expect("wire name parses");
        assert_eq!(parsed, *variant);
    }
    for variant in DeliveryCompanyType::ALL {
        let encoded = serde_json::to_value(variant).expect("encodes");
        assert_eq!(encoded, json!(variant.as_str()));
    }
}

#[test]
fn enum_names_are_screaming_snake_case() {
    assert_eq!(PayType::NaverPay.as_str(), "NAVER_PAY");
    assert_eq!(DeliveryCompanyType::CjInternational.as_str(), "CJ_INTERNATIONAL");
    assert_eq!(SaleStatusType::ReservationOnsale.to_string(), "RESERVATION_ONSALE");
}

// =============================================================================
// Product models
// =============================================================================

#[test]
fn search_item_requires_sale_window_and_registration_time() {
    let payload = json!({
        "totalCount": 1,
        "pageCount": 1,
        "items": [{
            "productNo": 10,
            "productName": "Tea",
            "salePrice": 9900,
            "saleStatusType": "ONSALE",
            "saleStartYmdt": "2025-01-01 00:00:00",
            "registerYmdt": "2024-12-31T15:00:00Z"
        }]
    });

    let result = serde_json::from_value::<ProductSearchV2Response>(payload);

    assert!(result.is_err(), "saleEndYmdt is required");
}

#[test]
fn search_item_normalizes_sticker_and_reservation_times() {
    let payload = json!({
        "totalCount": 1,
        "pageCount": 1,
        "lastId": "10",
        "items": [{
            "productNo": 10,
            "productName": "Tea",
            "salePrice": 9900,
            "saleStatusType": "RESERVATION_ONSALE",
            "saleStartYmdt": "2025-01-01 00:00:00",
            "saleEndYmdt": "2025-12-31 23:59:59",
            "registerYmdt": "2024-12-31T15:00:00Z",
            "stickerInfos": [{
                "type": "TEXT",
                "label": "NEW",
                "name": "new-arrival",
                "displayPeriod": { "startDateTime": "2025-01-01T00:00:00+09:00" }
            }],
            "reservationData": {
                "reservationStartYmdt": "2025-01-01 00:00:00",
                "reservationEndYmdt": "2025-01-10 00:00:00",
                "reservationDeliveryYmdt": "2025-01-15",
                "reservationStockCnt": 30
            }
        }]
    });

    let response: ProductSearchV2Response = serde_json::from_value(payload).expect("decodes");

    let item = &response.items[0];
    assert_eq!(item.register_ymdt.format(), "2025-01-01 00:00:00");
    assert_eq!(item.sticker_infos[0].sticker_type, StickerType::Text);
    let reservation = item.reservation_data.as_ref().expect("reservation present");
    assert_eq!(reservation.reservation_delivery_ymdt.format(), "2025-01-15 00:00:00");
}

#[test]
fn detail_v3_keeps_date_only_fields_as_dates() {
    let payload = json!({
        "mallProductNo": 10,
        "mallNo": 1,
        "productName": "Tea",
        "salePrice": 12000,
        "salePeriodInfo": {
            "periodType": "PERIOD",
            "startYmdt": "2025-01-01 00:00:00",
            "endYmdt": "2025-06-30T14:59:59Z"
        },
        "promotionTextInfo": {
            "text": "spring sale",
            "periodYn": "Y",
            "startYmd": "2025-03-01",
            "endYmd": "2025-03-31"
        },
        "immediateDiscountInfo": {
            "unitType": "PERCENT",
            "amount": 10,
            "periodYn": "N"
        },
        "options": [{
            "mallOptionNo": 1,
            "optionName": "size",
            "optionValue": "L"
        }]
    });

    let detail: ProductDetailV3Response = serde_json::from_value(payload).expect("decodes");

    assert_eq!(detail.sale_period_info.end_ymdt.format(), "2025-06-30 23:59:59");
    let promotion = detail.promotion_text_info.expect("promotion present");
    assert_eq!(promotion.start_ymd, Some(KstDate::from(date!(2025-03-01))));
    assert_eq!(promotion.period_yn, YesNo::Yes);
    let discount = detail.immediate_discount_info.expect("discount present");
    assert_eq!(discount.unit_type, AmountUnitType::Percent);
    assert_eq!(detail.options[0].add_price, 0.0);
}

fn v1_detail_payload() -> serde_json::Value {
    json!({
        "mallProduct": {
            "mallProductNo": 10,
            "productNo": 10,
            "parentMallProductNo": null,
            "mallNo": 1,
            "masterYn": "Y",
            "partnerNo": 2,
            "categoryNo": 300,
            "productName": "Tea",
            "productType": "DEFAULT",
            "classType": "DEFAULT",
            "mappingType": "NONE",
            "applyStatusType": "FINISHED",
            "saleStatusType": "RESERVATION_ONSALE",
            "saleSettingStatusType": "AVAILABLE_FOR_SALE",
            "groupType": "DELIVERY",
            "saleMethodType": "PURCHASE",
            "paymentMeansControlYn": "N",
            "paymentMeans": "",
            "refundableYn": "Y",
            "refundableInfo": { "refundableYn": "Y" },
            "displayBrandNo": 0,
            "brandNo": 0,
            "adminNo": 7,
            "salePeriodType": "PERIOD",
            "saleStartYmdt": "2025-01-01 00:00:00",
            "saleEndYmdt": "2999-12-31 23:59:59",
            "manufactureYmdt": null,
            "registerYmdt": "2024-12-20T10:00:00",
            "registerAdminNo": 7,
            "updateYmdt": "2025-02-01T01:00:00Z",
            "updateAdminNo": 7,
            "salePrice": 12000,
            "minBuyCnt": 1,
            "maxBuyPersonCnt": 0,
            "maxBuyTimeCnt": 0,
            "maxBuyDays": 0,
            "maxBuyPeriodCnt": 0,
            "immediateDiscountApplyPrice": 11000,
            "immediateDiscountValue": 1000,
            "immediateDiscountUnitType": "WON",
            "immediateDiscountPeriodYn": "N",
            "nonmemberPurchaseYn": "Y",
            "minorPurchaseYn": "Y",
            "unitName": "",
            "unitPrice": 0,
            "pointRate": 0,
            "accumulationUseYn": "Y",
            "accumulationLimitInfo": { "unitType": "PERCENT", "limitValue": 10.0 },
            "certificationJson": "{}",
            "certificationType": "NOT_TARGET",
            "placeOriginsYn": "N",
            "valueAddedTaxType": "DUTY",
            "productManagementCd": "TEA-01",
            "cartUseYn": "Y",
            "cartOffPeriodYn": "N",
            "commissionRateType": "PRODUCT",
            "commissionRate": 10.5,
            "keyword": "tea",
            "extraJson": "{}",
            "productNameEn": "Tea",
            "hsCode": "",
            "eanCode": "",
            "promotionYn": "Y",
            "additionalDiscountYn": "Y",
            "couponYn": "Y",
            "freeGiftYn": "N",
            "promotionTextYn": "N",
            "promotionText": "",
            "platformDisplayYn": "Y",
            "platformDisplayPcYn": "Y",
            "platformDisplayMobileYn": "Y",
            "platformDisplayMobileWebYn": "Y",
            "searchengineDisplayYn": "Y",
            "contentHeader": "",
            "content": "<p>tea</p>",
            "contentFooter": "",
            "partnerChargeAmt": 0,
            "frontDisplayYn": "Y",
            "urlDirectDisplayYn": "N",
            "deliveryYn": "Y",
            "shippingAreaType": "PARTNER_SHIPPING_AREA",
            "shippingAreaPartnerNo": 2,
            "deliveryCombinationYn": "Y",
            "deliveryInternationalYn": "N",
            "deliveryTemplateNo": 5,
            "deliveryCustomerInfo": "",
            "isOptionUsed": true,
            "addOptionImageYn": "N",
            "syncWmsYn": "N",
            "deleteYn": "N",
            "tempSave": "N",
            "itemYn": "N",
            "registerSiteType": "SERVICE",
            "stickers": [{
                "stickerNo": 4,
                "label": "NEW",
                "deleteYn": "N",
                "displayOrder": 1,
                "stickerType": "TEXT",
                "mallNo": 1,
                "displayPeriod": {
                    "startDateTime": "2025-03-01T00:00:00Z",
                    "endDateTime": "2025-03-31 23:59:59"
                }
            }],
            "partnerName": "Partner",
            "mappingKey": "",
            "reservationInfo": {
                "startDateTime": "2025-03-01 00:00:00",
                "endDateTime": "2025-03-10 23:59:59",
                "deliveryDateTime": "2025-03-14T15:00:00Z"
            },
            "visibleSaleStatus": "RESERVATION_ONSALE",
            "saleStartYmd": "2025-01-01",
            "saleEndYmd": "2999-12-31"
        },
        "mallProductImages": [{
            "mallImageNo": 1,
            "productImageNo": 1,
            "mallProductNo": 10,
            "imageUrl": "//img/tea.png",
            "originImageUrl": "//img/tea-origin.png",
            "mainYn": "Y",
            "displayOrder": 1,
            "imageId": "abc",
            "mainImage": true
        }],
        "mallProductInputs": [{
            "mallProductInputNo": 3,
            "inputText": "Gift message",
            "inputMatchingTypeLabel": "PRODUCT",
            "useYn": "Y",
            "required": false
        }]
    })
}

#[test]
fn detail_v1_normalizes_nested_instants() {
    let detail: ProductDetailV1Response =
        serde_json::from_value(v1_detail_payload()).expect("decodes");

    let product = &detail.mall_product;
    assert_eq!(product.update_ymdt.map(|at| at.format()).as_deref(), Some("2025-02-01 10:00:00"));
    assert_eq!(product.sale_end_ymd, KstDate::from(date!(2999-12-31)));
    let reservation = product.reservation_info.as_ref().expect("reservation present");
    assert_eq!(reservation.delivery_date_time.format(), "2025-03-15 00:00:00");
    let stickers = product.stickers.as_ref().expect("stickers present");
    let period = stickers[0].display_period.as_ref().expect("period present");
    assert_eq!(
        period.start_date_time.map(|at| at.format()).as_deref(),
        Some("2025-03-01 09:00:00")
    );
    assert_eq!(detail.mall_product_images[0].image_id, "abc");
    assert!(!detail.mall_product_inputs[0].required);
    assert!(detail.mall_product_option_web_models.is_empty());
}

#[test]
fn detail_v1_rejects_drift_in_nested_models() {
    let mut bad_reservation = v1_detail_payload();
    bad_reservation["mallProduct"]["reservationInfo"]["deliveryDateTime"] = json!("2025/03/15");
    assert!(serde_json::from_value::<ProductDetailV1Response>(bad_reservation).is_err());

    let mut bad_image = v1_detail_payload();
    bad_image["mallProductImages"][0]["mainImage"] = json!("Y");
    assert!(serde_json::from_value::<ProductDetailV1Response>(bad_image).is_err());

    let mut missing_registration = v1_detail_payload();
    missing_registration["mallProduct"]
        .as_object_mut()
        .expect("object")
        .remove("registerYmdt");
    assert!(serde_json::from_value::<ProductDetailV1Response>(missing_registration).is_err());
}

#[test]
fn history_rejects_unknown_statuses() {
    let payload = json!({
        "modifiedDate": "2025-03-01T10:00:00",
        "applyStatusType": "FINISHED",
        "saleStatusType": "SOMETHING_NEW",
        "saleSettingStatusType": "AVAILABLE_FOR_SALE",
        "adminName": "admin",
        "confirmAdminName": "admin"
    });

    assert!(serde_json::from_value::<ProductHistoryItem>(payload).is_err());
}

#[test]
fn patch_body_renders_nested_times_in_outbound_format() {
    let mut request = PatchProductV2Request::rename("Tea");
    request.manufactured_date_time =
        Some("2025-03-01T00:00:00Z".parse().expect("parses"));

    let body = serde_json::to_value(&request).expect("encodes");

    assert_eq!(
        body,
        json!({
            "productName": "Tea",
            "manufacturedDateTime": "2025-03-01 09:00:00"
        })
    );
}

// =============================================================================
// Order, member and display models
// =============================================================================

#[test]
fn order_detail_tolerates_missing_collections() {
    let detail: OrderDetailResponse =
        serde_json::from_value(json!({ "orderNo": "1" })).expect("decodes");

    assert!(detail.shippings.is_empty());
    assert!(detail.claim_infos.is_empty());
}

#[test]
fn profile_groups_decode_items() {
    let response: ProfileGroupsResponse = serde_json::from_value(json!({
        "memberNo": 42,
        "items": [{ "memberGroupNo": 3, "memberGroupName": "VIP" }]
    }))
    .expect("decodes");

    assert_eq!(response.items[0].member_group_name, "VIP");
    assert_eq!(MemberRef::No(42).key(), "memberNo");
}

#[test]
fn event_detail_requires_event_flag() {
    let result = serde_json::from_value::<EventDetailResponse>(json!({
        "eventNo": 1,
        "mallNo": 1,
        "eventType": "GENERAL"
    }));

    assert!(result.is_err());
}

#[test]
fn always_displayed_event_has_no_window() {
    let event: EventDetailResponse = serde_json::from_value(json!({
        "eventNo": 1,
        "mallNo": 1,
        "eventType": "EXTERNAL",
        "eventYn": "N",
        "eventDisplayPeriod": { "periodType": "ALWAYS" },
        "registerYmdt": "2025-03-01T00:00:00Z"
    }))
    .expect("decodes");

    assert_eq!(event.event_type, EventType::External);
    assert_eq!(
        event.event_display_period.as_ref().map(|period| period.period_type),
        Some(DisplayPeriodType::Always)
    );
    assert!(event.display_window().is_none());
    assert_eq!(
        event.register_ymdt.map(|value| value.format()),
        Some(String::from("2025-03-01 09:00:00"))
    );
}
