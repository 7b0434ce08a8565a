use serde::Serialize;
use serde_json::{Map, Value};

use crate::OptionEntry;

/// Item data key holding the display name of a catalog entry.
pub(crate) const RENDER_NAME_KEY: &str = "RenderName";
/// Item data key holding the image URL of a catalog entry.
pub(crate) const IMAGE_KEY: &str = "Image";
/// Item data key (and field name) holding window part selections.
pub const WINDOW_PARTS_KEY: &str = "WindowParts";
/// Field type of multi-select columns.
pub(crate) const MULTI_SELECT_FIELD_TYPE: &str = "multi_select";

const FIELDS_KEY: &str = "fields";
const VALUES_KEY: &str = "values";
const FIELD_NAME_KEY: &str = "name";
const FIELD_TYPE_KEY: &str = "type";
const MULTI_SELECT_OPTIONS_KEY: &str = "multi_select_options";
const MULTI_SELECT_OPTIONS_CAMEL_KEY: &str = "multiSelectOptions";
const ITEM_ID_KEY: &str = "id";
const ITEM_URL_KEY: &str = "url";
const ITEM_PAGE_URL_KEY: &str = "page_item_url";
const ITEM_DATA_KEY: &str = "data";

/// Collection payload normalized from the upstream content repository.
///
/// `fields` and `values` are always present, possibly empty. Every other
/// top-level key and every sequence entry the upstream returned is kept so
/// the payload can be passed through without loss. The typed views only
/// see entries that are objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collection {
    #[serde(flatten)]
    extra: Map<String, Value>,
    fields: Vec<Value>,
    values: Vec<Value>,
}

impl Collection {
    /// Normalizes an arbitrary upstream payload.
    ///
    /// A payload that is not an object yields an empty collection. Missing or
    /// non-array `fields`/`values` become empty.
    #[must_use]
    pub fn from_payload(payload: Value) -> Self {
        let Value::Object(mut object) = payload else {
            return Self::default();
        };

        let fields = array_entries(object.remove(FIELDS_KEY));
        let values = array_entries(object.remove(VALUES_KEY));

        Self {
            extra: object,
            fields,
            values,
        }
    }

    /// Returns the column descriptors that are objects.
    pub fn fields(&self) -> impl Iterator<Item = CollectionField<'_>> {
        self.fields
            .iter()
            .filter_map(Value::as_object)
            .map(CollectionField)
    }

    /// Returns the rows that are objects, in upstream order.
    pub fn values(&self) -> impl Iterator<Item = CollectionItem<'_>> {
        self.values
            .iter()
            .filter_map(Value::as_object)
            .map(CollectionItem)
    }

    /// Returns top-level keys other than `fields` and `values`.
    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Returns the first item whose `RenderName` equals `render_name` exactly.
    #[must_use]
    pub fn find_item_by_render_name(&self, render_name: &str) -> Option<CollectionItem<'_>> {
        self.values()
            .find(|item| item.render_name() == Some(render_name))
    }

    /// Returns the first field declared as the `WindowParts` multi-select column.
    #[must_use]
    pub fn window_parts_field(&self) -> Option<CollectionField<'_>> {
        self.fields().find(|field| {
            field.name() == Some(WINDOW_PARTS_KEY)
                && field.field_type() == Some(MULTI_SELECT_FIELD_TYPE)
        })
    }

    /// Builds one option per item with a non-blank `RenderName`, in upstream order.
    #[must_use]
    pub fn option_entries(&self) -> Vec<OptionEntry> {
        self.values()
            .filter_map(CollectionItem::option_entry)
            .collect()
    }
}

/// Column descriptor of a collection, read from the raw upstream object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionField<'a>(&'a Map<String, Value>);

impl<'a> CollectionField<'a> {
    /// Returns the column name.
    #[must_use]
    pub fn name(self) -> Option<&'a str> {
        self.0.get(FIELD_NAME_KEY).and_then(Value::as_str)
    }

    /// Returns the column type, e.g. `multi_select`.
    #[must_use]
    pub fn field_type(self) -> Option<&'a str> {
        self.0.get(FIELD_TYPE_KEY).and_then(Value::as_str)
    }

    /// Returns the declared multi-select options.
    #[must_use]
    pub fn multi_select_options(self) -> Vec<String> {
        string_entries(
            self.0
                .get(MULTI_SELECT_OPTIONS_KEY)
                .or_else(|| self.0.get(MULTI_SELECT_OPTIONS_CAMEL_KEY)),
        )
    }
}

/// One row of a collection, read from the raw upstream object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectionItem<'a>(&'a Map<String, Value>);

impl<'a> CollectionItem<'a> {
    /// Returns the opaque row identifier.
    #[must_use]
    pub fn id(self) -> Option<&'a str> {
        self.0.get(ITEM_ID_KEY).and_then(Value::as_str)
    }

    /// Returns the row page URL.
    #[must_use]
    pub fn url(self) -> Option<&'a str> {
        self.0
            .get(ITEM_URL_KEY)
            .or_else(|| self.0.get(ITEM_PAGE_URL_KEY))
            .and_then(Value::as_str)
    }

    /// Returns the open field-name to value mapping of the row.
    #[must_use]
    pub fn data(self) -> Option<&'a Map<String, Value>> {
        self.0.get(ITEM_DATA_KEY).and_then(Value::as_object)
    }

    /// Returns `data.RenderName` when it is a string.
    #[must_use]
    pub fn render_name(self) -> Option<&'a str> {
        self.data_value(RENDER_NAME_KEY).and_then(Value::as_str)
    }

    /// Returns `data.Image` when it is a string.
    #[must_use]
    pub fn image(self) -> Option<&'a str> {
        self.data_value(IMAGE_KEY).and_then(Value::as_str)
    }

    /// Returns the string entries of `data.WindowParts`, order and duplicates kept.
    #[must_use]
    pub fn window_parts(self) -> Vec<String> {
        string_entries(self.data_value(WINDOW_PARTS_KEY))
    }

    /// Maps the row to a selector option.
    ///
    /// Rows without a non-blank `RenderName` yield `None`. A missing image
    /// yields an empty option value. The label is not trimmed so that it can
    /// be sent back verbatim as an exact-match filter.
    #[must_use]
    pub fn option_entry(self) -> Option<OptionEntry> {
        let label = self
            .render_name()
            .filter(|label| !label.trim().is_empty())?;

        Some(OptionEntry::new(self.image().unwrap_or_default(), label))
    }

    fn data_value(self, key: &str) -> Option<&'a Value> {
        self.data().and_then(|data| data.get(key))
    }
}

fn array_entries(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    }
}

fn string_entries(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
