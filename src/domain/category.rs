//! Category records and the built-in tag → icon/colour lookup.

use serde::{Deserialize, Serialize};

use crate::domain::common::{lenient, Displayable, NamedEntity};

pub const FALLBACK_ICON: &str = "cash";
pub const FALLBACK_COLOR: &str = "#6B7280";
pub const FALLBACK_LABEL: &str = "Other";

/// A category entry from the categories fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "category_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            icon: None,
        }
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Icon name and hex colour used to render a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl CategoryStyle {
    pub const FALLBACK: CategoryStyle = CategoryStyle {
        icon: FALLBACK_ICON,
        color: FALLBACK_COLOR,
    };

    pub fn is_fallback(&self) -> bool {
        *self == Self::FALLBACK
    }
}

/// Maps a category tag onto its icon and colour. Unknown, empty or missing
/// tags get [`CategoryStyle::FALLBACK`].
pub fn classify_category(tag: Option<&str>) -> CategoryStyle {
    let (icon, color) = match tag.unwrap_or_default() {
        "subscription" => ("logo-dribbble", "#EC4899"),
        "transfer" => ("swap-horizontal", "#8B5CF6"),
        "food" => ("fast-food", "#F59E0B"),
        "shopping" => ("cart", "#3B82F6"),
        "transport" => ("car", "#10B981"),
        "salary" => ("wallet", "#10B981"),
        "freelance" => ("laptop", "#6366F1"),
        _ => return CategoryStyle::FALLBACK,
    };
    CategoryStyle { icon, color }
}

/// Human label for a category tag.
pub fn category_label(tag: Option<&str>) -> &'static str {
    match tag.unwrap_or_default() {
        "subscription" => "Subscription",
        "transfer" => "Transfer",
        "food" => "Food",
        "shopping" => "Shopping",
        "transport" => "Transport",
        "salary" => "Salary",
        "freelance" => "Freelance",
        _ => FALLBACK_LABEL,
    }
}

fn category_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient::optional_text(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("category id must be a string or number"))
}
