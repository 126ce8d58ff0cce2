//! List request model.

use serde::{Deserialize, Serialize};

/// Structured list request: optional filter plus ordered sort keys.
///
/// An empty `sort` means "use the catalog default" (start time ascending).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListRequest<C> {
    #[serde(default)]
    pub filter: Option<Filter<C>>,
    #[serde(default)]
    pub sort: Vec<SortSpec>,
}

impl<C> ListRequest<C> {
    pub fn with_filter(mut self, filter: Filter<C>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sorted_by(mut self, spec: SortSpec) -> Self {
        self.sort.push(spec);
        self
    }
}

/// Inclusion/visibility constraints for a list query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter<C> {
    /// Category keys to include. Empty means no category constraint.
    #[serde(default)]
    pub category_ids: Vec<C>,
    /// Restrict to rows with `visible = 1`.
    #[serde(default)]
    pub only_visible: bool,
}

impl<C> Filter<C> {
    pub fn categories(category_ids: impl IntoIterator<Item = C>) -> Self {
        Self {
            category_ids: category_ids.into_iter().collect(),
            only_visible: false,
        }
    }

    pub fn visible_only(mut self) -> Self {
        self.only_visible = true;
        self
    }
}

/// One `ORDER BY` key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    #[serde(default)]
    pub descending: bool,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }
}
