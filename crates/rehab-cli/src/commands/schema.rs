use rehab_core::contact::ContactInfo;
use rehab_core::entities::{
    ClinicalCondition, ContactMessage, GalleryImage, PageView, Service, SiteSettings,
};
use rehab_core::responses::{AnalyticsSummary, ConditionPage, DashboardStats, ServicePage};
use rehab_core::validation::ContactForm;
use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `rehab schema`, in listing order.
pub const SCHEMA_NAMES: &[&str] = &[
    "site_settings",
    "gallery_image",
    "clinical_condition",
    "service",
    "contact_message",
    "page_view",
    "contact_form",
    "contact_info",
    "condition_page",
    "service_page",
    "dashboard_stats",
    "analytics_summary",
];

fn to_value<T: JsonSchema>() -> anyhow::Result<Value> {
    Ok(serde_json::to_value(schema_for!(T))?)
}

/// JSON Schema for a record type name, or `None` for an unknown name.
pub fn schema_by_name(name: &str) -> anyhow::Result<Option<Value>> {
    let schema = match name.trim().replace('-', "_").as_str() {
        "site_settings" | "settings" => to_value::<SiteSettings>()?,
        "gallery_image" | "gallery" => to_value::<GalleryImage>()?,
        "clinical_condition" | "condition" => to_value::<ClinicalCondition>()?,
        "service" => to_value::<Service>()?,
        "contact_message" | "message" => to_value::<ContactMessage>()?,
        "page_view" => to_value::<PageView>()?,
        "contact_form" => to_value::<ContactForm>()?,
        "contact_info" => to_value::<ContactInfo>()?,
        "condition_page" => to_value::<ConditionPage>()?,
        "service_page" => to_value::<ServicePage>()?,
        "dashboard_stats" => to_value::<DashboardStats>()?,
        "analytics_summary" => to_value::<AnalyticsSummary>()?,
        _ => return Ok(None),
    };
    Ok(Some(schema))
}

/// Handle `rehab schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(name) = args.type_name.as_deref() else {
        return output(&json!({ "schemas": SCHEMA_NAMES }), flags.format);
    };
    match schema_by_name(name)? {
        Some(schema) => output(&schema, flags.format),
        None => anyhow::bail!(
            "unknown schema '{name}'. Available: {}",
            SCHEMA_NAMES.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{SCHEMA_NAMES, schema_by_name};

    #[test]
    fn every_listed_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_by_name(name).unwrap();
            assert!(schema.is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn aliases_and_unknown_names() {
        assert!(schema_by_name("gallery").unwrap().is_some());
        assert!(schema_by_name("page-view").unwrap().is_some());
        assert!(schema_by_name("invoice").unwrap().is_none());
    }

    #[test]
    fn settings_schema_names_its_fields() {
        let schema = schema_by_name("site_settings").unwrap().unwrap();
        let properties = schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("gallery_enabled"));
        assert!(properties.contains_key("max_gallery_images"));
    }
}
