//! Sitemap and robots.txt rendering.
//!
//! Creator pages are linked through the slug codec so the sitemap always
//! agrees with the routes the server actually answers.

use std::fmt::Write as _;

use crate::platform::Platform;
use crate::slug::CreatorPlatformRef;
use crate::types::Timestamp;

/// Crawlers refused outright (AI training scrapers).
pub const BLOCKED_CRAWLERS: &[&str] = &["GPTBot", "CCBot"];

const ROBOTS_ALLOW: &[&str] = &["/", "/best-*", "/terms"];
const ROBOTS_DISALLOW: &[&str] = &[
    "/api/*",
    "/onboarding/*",
    "/dashboard/*",
    "/sign-in/*",
    "/sign-up/*",
    "/*.json",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: Timestamp,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Home page, terms, and one listing page per platform.
pub fn static_entries(base_url: &str, now: Timestamp) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry {
            loc: join(base_url, "/"),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            loc: join(base_url, "/terms"),
            last_modified: now,
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.3,
        },
    ];

    entries.extend(Platform::ALL.into_iter().map(|platform| SitemapEntry {
        loc: join(base_url, &format!("/best-{}-posts", platform.slug_token())),
        last_modified: now,
        change_frequency: ChangeFrequency::Daily,
        priority: 0.6,
    }));

    entries
}

/// One entry per platform the creator has a handle on.
pub fn creator_entries(
    base_url: &str,
    creator_id: &str,
    platforms: &[Platform],
    updated_at: Timestamp,
) -> Vec<SitemapEntry> {
    platforms
        .iter()
        .map(|&platform| SitemapEntry {
            loc: join(
                base_url,
                &CreatorPlatformRef::new(creator_id, platform).page_path(),
            ),
            last_modified: updated_at,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.8,
        })
        .collect()
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(
            xml,
            "<url><loc>{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>",
            escape_xml(&entry.loc),
            entry.last_modified.format("%Y-%m-%dT%H:%M:%SZ"),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(base_url: &str) -> String {
    let mut out = String::from("User-agent: *\n");
    for path in ROBOTS_ALLOW {
        out.push_str(&format!("Allow: {path}\n"));
    }
    for path in ROBOTS_DISALLOW {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    for crawler in BLOCKED_CRAWLERS {
        out.push_str(&format!("\nUser-agent: {crawler}\nDisallow: /\n"));
    }
    out.push_str(&format!(
        "\nHost: {}\nSitemap: {}\n",
        base_url.trim_end_matches('/'),
        join(base_url, "/sitemap.xml")
    ));
    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn static_entries_cover_home_terms_and_platforms() {
        let locs: Vec<String> = static_entries("https://example.com/", at())
            .into_iter()
            .map(|e| e.loc)
            .collect();
        assert_eq!(
            locs,
            vec![
                "https://example.com/",
                "https://example.com/terms",
                "https://example.com/best-x-posts",
                "https://example.com/best-linkedin-posts",
                "https://example.com/best-substack-posts",
            ]
        );
    }

    #[test]
    fn creator_entries_use_slug_paths() {
        let entries = creator_entries(
            "https://example.com",
            "justin-welsh",
            &[Platform::X, Platform::LinkedIn],
            at(),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].loc, "https://example.com/best-x-posts/justin-welsh");
        assert_eq!(
            entries[1].loc,
            "https://example.com/best-linkedin-posts/justin-welsh"
        );
        assert_eq!(entries[1].last_modified, at());
    }

    #[test]
    fn sitemap_escapes_locations() {
        let entries = creator_entries("https://example.com", "a&b", &[Platform::X], at());
        let xml = render_sitemap(&entries);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.com/best-x-posts/a&amp;b</loc>"));
        assert!(xml.contains("<lastmod>2026-03-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn robots_blocks_ai_crawlers_and_links_sitemap() {
        let robots = render_robots("https://example.com/");
        assert!(robots.starts_with("User-agent: *\n"));
        assert!(robots.contains("Allow: /best-*\n"));
        assert!(robots.contains("Disallow: /api/*\n"));
        assert!(robots.contains("User-agent: GPTBot\nDisallow: /\n"));
        assert!(robots.contains("User-agent: CCBot\nDisallow: /\n"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml\n"));
    }
}
