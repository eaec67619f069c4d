//! Engine configuration.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::pipeline::PageSize;

/// Display labels for the non-numbered pagination controls.
///
/// Labels are opaque to the engine and may contain markup (the host's view
/// decides what to do with them). Defaults are `<<`, `<`, `>`, `>>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLabels {
    /// Label for the jump-to-first-page control.
    pub first: String,
    /// Label for the previous-page control.
    pub previous: String,
    /// Label for the next-page control.
    pub next: String,
    /// Label for the jump-to-last-page control.
    pub last: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            first: "<<".to_string(),
            previous: "<".to_string(),
            next: ">".to_string(),
            last: ">>".to_string(),
        }
    }
}

/// Configuration supplied by the host when constructing a
/// [`TableEngine`](crate::TableEngine).
///
/// # Example
///
/// ```
/// use trestle_lib::config::TableConfig;
/// use trestle_lib::pipeline::PageSize;
///
/// let config = TableConfig::new()
///     .with_page_size_options([PageSize::Limit(5), PageSize::All])
///     .with_default_page_size(PageSize::Limit(5))
///     .with_checkboxes(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Page sizes the host offers in its entries-per-page selector.
    pub page_size_options: Vec<PageSize>,
    /// The initially active page size; must be one of the options.
    pub default_page_size: PageSize,
    /// Labels for the first/previous/next/last controls.
    pub labels: ControlLabels,
    /// Whether the view draws a checkbox column.
    pub has_checkboxes: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![
                PageSize::Limit(10),
                PageSize::Limit(25),
                PageSize::Limit(50),
                PageSize::All,
            ],
            default_page_size: PageSize::Limit(10),
            labels: ControlLabels::default(),
            has_checkboxes: false,
        }
    }
}

impl TableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the offered page sizes.
    pub fn with_page_size_options(mut self, options: impl IntoIterator<Item = PageSize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Sets the initially active page size.
    pub fn with_default_page_size(mut self, size: PageSize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Replaces all four control labels at once.
    pub fn with_labels(mut self, labels: ControlLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the jump-to-first-page label.
    pub fn with_first_label(mut self, label: impl Into<String>) -> Self {
        self.labels.first = label.into();
        self
    }

    /// Sets the previous-page label.
    pub fn with_previous_label(mut self, label: impl Into<String>) -> Self {
        self.labels.previous = label.into();
        self
    }

    /// Sets the next-page label.
    pub fn with_next_label(mut self, label: impl Into<String>) -> Self {
        self.labels.next = label.into();
        self
    }

    /// Sets the jump-to-last-page label.
    pub fn with_last_label(mut self, label: impl Into<String>) -> Self {
        self.labels.last = label.into();
        self
    }

    /// Enables or disables the checkbox column.
    pub fn with_checkboxes(mut self, enabled: bool) -> Self {
        self.has_checkboxes = enabled;
        self
    }

    /// Validates the configuration at engine construction.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if self
            .page_size_options
            .iter()
            .any(|option| matches!(option, PageSize::Limit(0)))
        {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::DefaultSizeNotOffered {
                size: self.default_page_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let config = TableConfig::new().with_page_size_options(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::NoPageSizeOptions));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = TableConfig::new()
            .with_page_size_options([PageSize::Limit(0), PageSize::Limit(10)])
            .with_default_page_size(PageSize::Limit(10));
        assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_default_size_must_be_offered() {
        let config = TableConfig::new()
            .with_page_size_options([PageSize::Limit(10)])
            .with_default_page_size(PageSize::Limit(25));
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefaultSizeNotOffered {
                size: PageSize::Limit(25)
            })
        );
    }

    #[test]
    fn test_label_overrides() {
        let config = TableConfig::new()
            .with_first_label("First")
            .with_last_label("Last");
        assert_eq!(config.labels.first, "First");
        assert_eq!(config.labels.previous, "<");
        assert_eq!(config.labels.last, "Last");
    }
}
