//! Sitemap and robots.txt for the public site.

use serde::Serialize;

use crate::enums::ContentKind;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static public routes with their crawl hints.
const STATIC_ROUTES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/services", ChangeFrequency::Monthly, 0.8),
    ("/conditions", ChangeFrequency::Monthly, 0.8),
    ("/programs", ChangeFrequency::Monthly, 0.8),
    ("/gallery", ChangeFrequency::Weekly, 0.7),
    ("/contact", ChangeFrequency::Monthly, 0.7),
];

const DETAIL_PRIORITY: f32 = 0.6;

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Build the sitemap.
///
/// `detail_slugs` lists the slugs whose detail page resolves; entities
/// without a detail page must not be passed in.
#[must_use]
pub fn sitemap(base_url: &str, detail_slugs: &[(ContentKind, String)]) -> Vec<SitemapEntry> {
    let base = trim_base(base_url);
    let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base}{path}"),
            change_frequency: *change_frequency,
            priority: *priority,
        })
        .collect();

    entries.extend(detail_slugs.iter().map(|(kind, slug)| SitemapEntry {
        url: format!("{base}{}/{slug}", kind.route_prefix()),
        change_frequency: ChangeFrequency::Monthly,
        priority: DETAIL_PRIORITY,
    }));
    entries
}

/// Render the sitemap as XML.
#[must_use]
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let freq = match entry.change_frequency {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        };
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <changefreq>{freq}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.url, entry.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// robots.txt: everything public, admin area excluded.
#[must_use]
pub fn robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin\nDisallow: /admin/login\n\nSitemap: {}/sitemap.xml\n",
        trim_base(base_url)
    )
}
