use std::fmt::{Display, Formatter};

/// Response shape requested by a collection caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Normalized collection passed through as-is.
    #[default]
    General,
    /// Flat vehicle option list built from `RenderName`/`Image`.
    CarSelection,
    /// Window part multi-select options.
    WindowSelection,
}

impl OutputMode {
    /// Parses a transport value case-insensitively.
    ///
    /// Unrecognized values select [`OutputMode::General`].
    #[must_use]
    pub fn parse_transport(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "carselection" => Self::CarSelection,
            "windowselection" => Self::WindowSelection,
            _ => Self::General,
        }
    }

    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::CarSelection => "carselection",
            Self::WindowSelection => "windowselection",
        }
    }
}

impl Display for OutputMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One entry of a dropdown option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    value: String,
    label: String,
}

impl OptionEntry {
    /// Creates an option entry.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Returns the option value submitted by the widget.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the option label shown to the visitor.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}
