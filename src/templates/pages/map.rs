// templates/pages/map.rs

use crate::templates::{
    components::{amount_range, radio_group},
    desktop_layout,
};
use maud::{html, Markup};

const NAVER_MAPS_SDK: &str = "https://oapi.map.naver.com/openapi/v3/maps.js";

/// The listing map. Sheet selector radios follow the configured sheet order.
pub fn map_page<'a>(naver_client_id: &str, sheet_keys: impl IntoIterator<Item = &'a str>) -> Markup {
    let sheets: Vec<(&str, &str)> = sheet_keys.into_iter().map(|k| (k, k)).collect();
    let sdk_src = format!("{NAVER_MAPS_SDK}?ncpClientId={naver_client_id}&submodules=geocoder");

    desktop_layout(
        "매물 지도",
        html! {
            script type="text/javascript" src=(sdk_src) {}
        },
        html! {
            main {
                aside id="sidebar" {
                    (radio_group("시트", "sheetType", &sheets))
                    (radio_group("상태", "statusFilter", &[("all", "전체"), ("갠매", "갠매"), ("일반", "일반")]))

                    fieldset {
                        legend { "위치 검색" }
                        input type="search" id="searchInput" placeholder="동, 건물명";
                    }

                    (amount_range(
                        "보증금",
                        &[("depositBillionStart", "억"), ("depositMillionStart", "만")],
                        &[("depositBillionEnd", "억"), ("depositMillionEnd", "만")],
                    ))
                    (amount_range(
                        "월세",
                        &[("monthlyRentStart", "만")],
                        &[("monthlyRentEnd", "만")],
                    ))

                    button type="button" id="filterButton" { "매물 불러오기" }

                    div id="propertyList" class="list-group" {}
                }
                div id="map" {}
            }
        },
        html! {
            script src="/static/js/map.js" {}
        },
    )
}
