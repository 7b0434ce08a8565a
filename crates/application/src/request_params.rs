use serde_json::Value;
use tintcalc_core::{AppError, AppResult, NonEmptyString};
use tintcalc_domain::OutputMode;


/// Collection used by the editor convention when the caller names none.
pub const DEFAULT_COLLECTION_NAME: &str = "CarCatalog";

const SITE_NAME_PARAM: &str = "site_name";
const COLLECTION_NAME_PARAM: &str = "collection_name";
const BODY_SITE_KEY: &str = "site";
const BODY_SITE_NAME_KEY: &str = "site_name";

/// Raw query parameters of the collection route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRequestQuery {
    /// `site_name` parameter.
    pub site_name: Option<String>,
    /// `collection_name` parameter.
    pub collection_name: Option<String>,
    /// `output` parameter.
    pub output: Option<String>,
    /// `renderName` parameter.
    pub render_name: Option<String>,
}

/// Canonical parameters of one collection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    site: NonEmptyString,
    collection: NonEmptyString,
    output: OutputMode,
    filter: Option<String>,
}

impl RequestParams {
    /// Adapts the query-only convention.
    ///
    /// Both identifiers come from the query string and `output` defaults to
    /// [`OutputMode::General`].
    pub fn from_query(query: CollectionRequestQuery) -> AppResult<Self> {
        let site = non_blank(query.site_name.as_deref());
        let collection = non_blank(query.collection_name.as_deref());

        Self::resolve(
            site,
            collection,
            query.output.as_deref(),
            OutputMode::General,
            query.render_name,
        )
    }

    /// Adapts the editor convention used by the dropdown proxy.
    ///
    /// The site prefers `site.site_name` from the body over the query, the
    /// collection falls back to `default_collection_name`, and `output`
    /// defaults to [`OutputMode::CarSelection`].
    pub fn from_editor_request(
        query: CollectionRequestQuery,
        body: &Value,
        default_collection_name: &str,
    ) -> AppResult<Self> {
        let site = body
            .get(BODY_SITE_KEY)
            .and_then(|site| site.get(BODY_SITE_NAME_KEY))
            .and_then(Value::as_str)
            .and_then(|site_name| non_blank(Some(site_name)))
            .or_else(|| non_blank(query.site_name.as_deref()));
        let collection = non_blank(query.collection_name.as_deref())
            .or_else(|| non_blank(Some(default_collection_name)));

        Self::resolve(
            site,
            collection,
            query.output.as_deref(),
            OutputMode::CarSelection,
            query.render_name,
        )
    }

    fn resolve(
        site: Option<NonEmptyString>,
        collection: Option<NonEmptyString>,
        output: Option<&str>,
        default_output: OutputMode,
        render_name: Option<String>,
    ) -> AppResult<Self> {
        let (site, collection) = match (site, collection) {
            (Some(site), Some(collection)) => (site, collection),
            (site, collection) => {
                let missing = [
                    site.is_none().then_some(SITE_NAME_PARAM),
                    collection.is_none().then_some(COLLECTION_NAME_PARAM),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>();

                return Err(AppError::Validation(format!(
                    "missing required parameters: {}",
                    missing.join(", ")
                )));
            }
        };

        let output = output
            .filter(|value| !value.trim().is_empty())
            .map(OutputMode::parse_transport)
            .unwrap_or(default_output);

        Ok(Self {
            site,
            collection,
            output,
            filter: render_name.filter(|value| !value.is_empty()),
        })
    }

    /// Returns the upstream site identifier.
    #[must_use]
    pub fn site(&self) -> &NonEmptyString {
        &self.site
    }

    /// Returns the upstream collection name.
    #[must_use]
    pub fn collection(&self) -> &NonEmptyString {
        &self.collection
    }

    /// Returns the requested output mode.
    #[must_use]
    pub fn output(&self) -> OutputMode {
        self.output
    }

    /// Returns the selected item's display name, if any.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<NonEmptyString> {
    value.and_then(|value| NonEmptyString::new(value).ok())
}
