//! Shared helpers for in-crate tests.

pub(crate) mod helpers {
    use crate::service::SiteService;
    use crate::updates::condition::NewCondition;
    use crate::updates::gallery::NewGalleryImage;
    use crate::updates::service::NewService;

    /// In-memory service with a fresh schema.
    pub async fn test_service() -> SiteService {
        SiteService::new_local(":memory:").await.unwrap()
    }

    pub fn new_condition(name: &str, description: Option<&str>) -> NewCondition {
        NewCondition {
            name: name.to_string(),
            slug: None,
            category: None,
            description: description.map(String::from),
        }
    }

    pub fn new_service(title: &str, full_description: Option<&str>) -> NewService {
        NewService {
            title: title.to_string(),
            slug: None,
            short_description: format!("{title} for children and adults"),
            full_description: full_description.map(String::from),
        }
    }

    pub fn new_image(title: &str) -> NewGalleryImage {
        NewGalleryImage {
            title: title.to_string(),
            description: None,
            image_url: format!("/uploads/general/{title}.jpg"),
            category: None,
        }
    }
}
