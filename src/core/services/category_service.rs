use crate::core::services::TransactionFilter;
use crate::domain::{category_label, classify_category, Category};

/// Display data for one category tag after consulting the fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

pub struct CategoryService;

impl CategoryService {
    /// Fixture entries whose id equals the tag override the built-in
    /// icon, colour and name field by field.
    pub fn resolve(categories: &[Category], tag: Option<&str>) -> ResolvedCategory {
        let builtin = classify_category(tag);
        let fixture = tag.and_then(|tag| categories.iter().find(|category| category.id == tag));
        ResolvedCategory {
            name: fixture
                .map(|category| category.name.clone())
                .unwrap_or_else(|| category_label(tag).to_string()),
            icon: fixture
                .and_then(|category| category.icon.clone())
                .unwrap_or_else(|| builtin.icon.to_string()),
            color: fixture
                .and_then(|category| category.color.clone())
                .unwrap_or_else(|| builtin.color.to_string()),
        }
    }

    /// Filter chips for the overview screen, in fixture order. Without a
    /// categories fixture the four standard chips are offered.
    pub fn filter_options(categories: &[Category]) -> Vec<(TransactionFilter, String)> {
        if categories.is_empty() {
            return [
                (TransactionFilter::All, "All"),
                (TransactionFilter::Expenses, "Expenses"),
                (TransactionFilter::Income, "Income"),
                (TransactionFilter::Transfers, "Transfers"),
            ]
            .into_iter()
            .map(|(filter, name)| (filter, name.to_string()))
            .collect();
        }
        categories
            .iter()
            .map(|category| {
                (
                    TransactionFilter::parse(&category.id),
                    category.name.clone(),
                )
            })
            .collect()
    }
}
