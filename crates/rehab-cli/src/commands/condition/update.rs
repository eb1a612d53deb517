use rehab_db::updates::condition::{ConditionUpdate, ConditionUpdateBuilder};

use crate::commands::shared::parse::clearable;

/// Build a partial update from the flags that were given. An empty
/// `--category` or `--description` clears the field.
pub fn condition_update(
    name: Option<&str>,
    slug: Option<&str>,
    category: Option<&str>,
    description: Option<&str>,
    display_order: Option<i64>,
) -> ConditionUpdate {
    let mut builder = ConditionUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(slug) = slug {
        builder = builder.slug(slug);
    }
    if let Some(category) = clearable(category) {
        builder = builder.category(category);
    }
    if let Some(description) = description {
        // Long text keeps its inner whitespace; only blank means "clear".
        let description = (!description.trim().is_empty()).then(|| description.to_string());
        builder = builder.description(description);
    }
    if let Some(order) = display_order {
        builder = builder.display_order(order);
    }
    builder.build()
}
