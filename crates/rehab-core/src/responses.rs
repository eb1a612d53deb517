//! Composite response types returned by service-level operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detail::{DescriptionBlock, parse_description};
use crate::entities::{ClinicalCondition, PageView, Service};

/// Record counts for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub gallery: u64,
    pub messages: u64,
    pub services: u64,
    pub conditions: u64,
}

/// Views per path, most visited first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PathCount {
    pub path: String,
    pub views: u64,
}

/// Admin analytics view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyticsSummary {
    pub total_views: u64,
    pub top_paths: Vec<PathCount>,
    pub recent: Vec<PageView>,
}

/// List row for a condition, with the derived detail-page flag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConditionListItem {
    #[serde(flatten)]
    pub condition: ClinicalCondition,
    pub has_detail_page: bool,
}

impl From<ClinicalCondition> for ConditionListItem {
    fn from(condition: ClinicalCondition) -> Self {
        let has_detail_page = condition.has_detail_page();
        Self {
            condition,
            has_detail_page,
        }
    }
}

/// List row for a service, with the derived detail-page flag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceListItem {
    #[serde(flatten)]
    pub service: Service,
    pub has_detail_page: bool,
}

impl From<Service> for ServiceListItem {
    fn from(service: Service) -> Self {
        let has_detail_page = service.has_detail_page();
        Self {
            service,
            has_detail_page,
        }
    }
}

/// A resolved condition detail page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConditionPage {
    pub name: String,
    pub slug: String,
    /// Falls back to "Clinical Condition" when the row has no category.
    pub category_label: String,
    pub blocks: Vec<DescriptionBlock>,
}

impl ConditionPage {
    /// Build the page, or `None` when the condition has no detail page.
    #[must_use]
    pub fn from_condition(condition: &ClinicalCondition) -> Option<Self> {
        if !condition.has_detail_page() {
            return None;
        }
        let body = condition.description.as_deref().unwrap_or_default();
        Some(Self {
            name: condition.name.clone(),
            slug: condition.slug.clone(),
            category_label: condition
                .category
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| String::from("Clinical Condition")),
            blocks: parse_description(body),
        })
    }
}

/// A resolved service detail page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServicePage {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub blocks: Vec<DescriptionBlock>,
}

impl ServicePage {
    /// Build the page, or `None` when the service has no detail page.
    #[must_use]
    pub fn from_service(service: &Service) -> Option<Self> {
        if !service.has_detail_page() {
            return None;
        }
        let body = service.full_description.as_deref().unwrap_or_default();
        Some(Self {
            title: service.title.clone(),
            slug: service.slug.clone(),
            short_description: service.short_description.clone(),
            blocks: parse_description(body),
        })
    }
}
