use tintcalc_core::{AppError, AppResult};
use tintcalc_domain::{Collection, OptionEntry, OutputMode, WINDOW_PARTS_KEY};

use super::config::WindowSelectionMissPolicy;

/// Response body derived from one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionProjection {
    /// The normalized collection, unchanged.
    Raw(Collection),
    /// Vehicle selector options.
    Options(Vec<OptionEntry>),
    /// Window part multi-select options.
    MultiSelectOptions(Vec<String>),
}

impl CollectionProjection {
    /// Projects `collection` into the shape selected by `output`.
    ///
    /// `filter` is only read for [`OutputMode::WindowSelection`], where it
    /// selects the item whose `RenderName` matches exactly. Without a filter
    /// the options declared on the `WindowParts` multi-select field are used.
    pub fn project(
        collection: Collection,
        output: OutputMode,
        filter: Option<&str>,
        miss_policy: WindowSelectionMissPolicy,
    ) -> AppResult<Self> {
        match output {
            OutputMode::General => Ok(Self::Raw(collection)),
            OutputMode::CarSelection => Ok(Self::Options(collection.option_entries())),
            OutputMode::WindowSelection => match filter {
                Some(render_name) => {
                    Self::selected_window_parts(&collection, render_name, miss_policy)
                }
                None => Self::declared_window_parts(&collection),
            },
        }
    }

    fn selected_window_parts(
        collection: &Collection,
        render_name: &str,
        miss_policy: WindowSelectionMissPolicy,
    ) -> AppResult<Self> {
        match collection.find_item_by_render_name(render_name) {
            Some(item) => Ok(Self::MultiSelectOptions(item.window_parts())),
            None => match miss_policy {
                WindowSelectionMissPolicy::EmptyList => Ok(Self::MultiSelectOptions(Vec::new())),
                WindowSelectionMissPolicy::NotFound => Err(AppError::NotFound(format!(
                    "no item with RenderName '{render_name}'"
                ))),
            },
        }
    }

    fn declared_window_parts(collection: &Collection) -> AppResult<Self> {
        let options = collection
            .window_parts_field()
            .map(|field| field.multi_select_options())
            .filter(|options| !options.is_empty())
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "collection declares no '{WINDOW_PARTS_KEY}' multi-select options"
                ))
            })?;

        Ok(Self::MultiSelectOptions(options))
    }
}
