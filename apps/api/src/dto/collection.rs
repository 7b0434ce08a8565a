use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use tintcalc_application::{CollectionProjection, CollectionRequestQuery};
use tintcalc_domain::OptionEntry;
use ts_rs::TS;

/// API representation of one dropdown option.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/widget-types/src/generated/option-entry-response.ts"
)]
pub struct OptionEntryResponse {
    pub value: String,
    pub label: String,
}

impl From<OptionEntry> for OptionEntryResponse {
    fn from(value: OptionEntry) -> Self {
        Self {
            value: value.value().to_owned(),
            label: value.label().to_owned(),
        }
    }
}

/// Vehicle selector response (`output=carselection`).
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/widget-types/src/generated/options-response.ts"
)]
pub struct OptionsResponse {
    pub options: Vec<OptionEntryResponse>,
}

/// Window parts response (`output=windowselection`).
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/widget-types/src/generated/multi-select-options-response.ts"
)]
pub struct MultiSelectOptionsResponse {
    pub multi_select_options: Vec<String>,
}

/// Serializes whichever shape the projection produced.
#[derive(Debug)]
pub struct CollectionProjectionResponse(pub CollectionProjection);

impl IntoResponse for CollectionProjectionResponse {
    fn into_response(self) -> Response {
        match self.0 {
            CollectionProjection::Raw(collection) => Json(collection).into_response(),
            CollectionProjection::Options(options) => Json(OptionsResponse {
                options: options.into_iter().map(OptionEntryResponse::from).collect(),
            })
            .into_response(),
            CollectionProjection::MultiSelectOptions(multi_select_options) => {
                Json(MultiSelectOptionsResponse {
                    multi_select_options,
                })
                .into_response()
            }
        }
    }
}

/// Parses the route's query string; the first occurrence of a key wins.
pub fn collection_query_from_raw(raw_query: Option<&str>) -> CollectionRequestQuery {
    let mut query = CollectionRequestQuery::default();

    for (key, value) in url::form_urlencoded::parse(raw_query.unwrap_or_default().as_bytes()) {
        let slot = match key.as_ref() {
            "site_name" => &mut query.site_name,
            "collection_name" => &mut query.collection_name,
            "output" => &mut query.output,
            "renderName" => &mut query.render_name,
            _ => continue,
        };
        slot.get_or_insert_with(|| value.into_owned());
    }

    query
}

/// Parses the editor request body, treating anything unparseable as `{}`.
pub fn editor_request_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Map::new()))
}
