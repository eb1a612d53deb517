use rehab_db::updates::service::{ServiceUpdate, ServiceUpdateBuilder};

pub fn service_update(
    title: Option<&str>,
    slug: Option<&str>,
    short_description: Option<&str>,
    full_description: Option<&str>,
    display_order: Option<i64>,
) -> ServiceUpdate {
    let mut builder = ServiceUpdateBuilder::new();
    if let Some(title) = title {
        builder = builder.title(title);
    }
    if let Some(slug) = slug {
        builder = builder.slug(slug);
    }
    if let Some(text) = short_description {
        builder = builder.short_description(text);
    }
    if let Some(text) = full_description {
        builder = builder.full_description((!text.trim().is_empty()).then(|| text.to_string()));
    }
    if let Some(order) = display_order {
        builder = builder.display_order(order);
    }
    builder.build()
}
