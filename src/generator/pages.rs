//! Template contexts for each kind of page

use chrono::NaiveDate;
use serde::Serialize;

use crate::components::ImageView;
use crate::config::SiteConfig;
use crate::helpers::{
    collapse_whitespace, css, favicon_tag, full_url_for, meta_generator, meta_tag, open_graph,
    time_tag,
};
use crate::schema::{
    ArticleAuthor, ArticleCard, Banner, BlogPostContent, CreditCardPageContent, Logos,
    MediaReference, NavigationEntry, PageMetadata,
};

use super::Route;

/// Site-wide values used by the layout
#[derive(Debug, Serialize)]
pub struct SiteView {
    pub language: String,
    /// `<link rel="icon">`, empty without a favicon
    pub favicon: String,
    pub stylesheet: String,
    pub font_variable: String,
    pub font_stack: String,
}

impl SiteView {
    pub fn build(config: &SiteConfig, logos: &Logos) -> Self {
        Self {
            language: config.language.clone(),
            favicon: logos
                .favicon
                .as_ref()
                .map(|f| favicon_tag(&f.url))
                .unwrap_or_default(),
            stylesheet: css(config, "site"),
            font_variable: config.font.variable.clone(),
            font_stack: config.font.stack(),
        }
    }
}

/// Document `<head>` contents
#[derive(Debug, Serialize)]
pub struct HeadView {
    pub title: String,
    pub meta_html: String,
    pub canonical: String,
}

impl HeadView {
    /// Head for a page; pages without their own metadata fall back to the
    /// site description and keywords.
    pub fn build(
        config: &SiteConfig,
        route: &Route,
        title: &str,
        metadata: Option<&PageMetadata>,
        image: Option<&MediaReference>,
    ) -> Self {
        let canonical = full_url_for(config, &route.url_path());
        let description = metadata
            .map(|m| m.description.as_str())
            .unwrap_or(&config.description);
        let keywords = match metadata {
            Some(m) if !m.keywords.is_empty() => &m.keywords,
            _ => &config.keywords,
        };

        let mut tags = vec![meta_tag("description", description)];
        if !keywords.is_empty() {
            tags.push(meta_tag("keywords", &keywords.join(", ")));
        }
        if !config.author.is_empty() {
            tags.push(meta_tag("author", &config.author));
        }
        if let Some(metadata) = metadata {
            for (name, content) in metadata.extra_tags() {
                tags.push(meta_tag(&name, &content));
            }
        }
        tags.push(meta_generator(config.generator.as_deref()));
        tags.push(open_graph(
            title,
            description,
            &canonical,
            image.map(|i| i.url.as_str()),
        ));

        Self {
            title: title.to_string(),
            meta_html: tags.join("\n  "),
            canonical,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomeView<'a> {
    pub banner_class: String,
    pub banner: &'a Banner,
    pub featured: &'a ArticleCard,
    pub latest: &'a [ArticleCard],
}

/// A blog article document together with its slug
#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub content: BlogPostContent,
}

impl Post {
    pub fn route(&self) -> Route {
        Route::BlogPost {
            slug: self.slug.clone(),
        }
    }

    /// Slug of the category page this post is listed on
    pub fn category_slug(&self) -> Option<String> {
        self.content.category.as_ref().and_then(category_slug)
    }

    /// Teaser card for listings; posts carry no avatar so the site icon is used.
    /// The href is site-relative like authored links.
    pub fn card(&self, logos: &Logos) -> ArticleCard {
        let avatar = logos
            .favicon
            .clone()
            .unwrap_or_else(|| logos.color_logo.clone());
        ArticleCard {
            href: self.route().url_path(),
            title: self.content.title.clone(),
            image: self.content.hero_image.clone(),
            author: ArticleAuthor {
                name: self.content.author.clone(),
                avatar,
            },
            date: self.content.date,
            views: self.content.views,
        }
    }
}

/// Category slug: taken from a `/blog/category/<slug>` link, else from the text.
///
/// A link segment is used only when it is already a slug, so `..` or `%2e`
/// never reach the output path. `None` when the text has no slug either.
pub fn category_slug(entry: &NavigationEntry) -> Option<String> {
    let href = entry.href.trim_end_matches('/');
    let slug = match href.strip_prefix("/blog/category/") {
        Some(segment) if is_slug(segment) => segment.to_string(),
        _ => slug::slugify(&entry.text),
    };
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

fn is_slug(segment: &str) -> bool {
    !segment.is_empty() && slug::slugify(segment) == segment
}

/// Newest first; ties broken by slug so output is stable
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        b.content
            .date
            .cmp(&a.content.date)
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

#[derive(Debug, Serialize)]
pub struct ListingEntry {
    pub card: ArticleCard,
    pub excerpt: String,
    pub category: Option<NavigationEntry>,
}

#[derive(Debug, Serialize)]
pub struct BlogListing {
    pub title: String,
    pub entries: Vec<ListingEntry>,
}

impl BlogListing {
    pub fn build(title: &str, posts: &[Post], logos: &Logos) -> Self {
        let entries = posts
            .iter()
            .map(|post| ListingEntry {
                card: post.card(logos),
                excerpt: collapse_whitespace(&post.content.excerpt),
                category: post.content.category.clone(),
            })
            .collect();
        Self {
            title: title.to_string(),
            entries,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostView<'a> {
    pub hero_image: &'a MediaReference,
    pub hero_size_attrs: String,
    pub category: Option<&'a NavigationEntry>,
    pub title: &'a str,
    pub author: &'a str,
    pub date: NaiveDate,
    pub time_html: String,
    pub views: u64,
    pub body_html: String,
    pub related: &'a [NavigationEntry],
}

impl<'a> PostView<'a> {
    pub fn build(content: &'a BlogPostContent, body_html: String, language: &str) -> Self {
        Self {
            hero_image: &content.hero_image,
            hero_size_attrs: content.hero_image.size_attrs(),
            category: content.category.as_ref(),
            title: &content.title,
            author: &content.author,
            date: content.date,
            time_html: time_tag(content.date, language),
            views: content.views,
            body_html,
            related: &content.related,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardTeaser {
    pub href: String,
    pub image: ImageView,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Serialize)]
pub struct CardListing {
    pub title: String,
    pub cards: Vec<CardTeaser>,
}

impl CardListing {
    pub fn build(title: &str, cards: &[(String, CreditCardPageContent)]) -> Self {
        let cards = cards
            .iter()
            .map(|(slug, content)| CardTeaser {
                href: Route::CreditCard { slug: slug.clone() }.url_path(),
                image: ImageView::from(&content.hero.image),
                title: content.hero.title.clone(),
                subtitle: content.hero.subtitle.clone(),
            })
            .collect();
        Self {
            title: title.to_string(),
            cards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardPageView<'a> {
    #[serde(flatten)]
    pub content: &'a CreditCardPageContent,
    pub hero_size_attrs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(url: &str) -> MediaReference {
        MediaReference {
            url: url.to_string(),
            alt: "alt".to_string(),
            width: None,
            height: None,
        }
    }

    fn post(slug: &str, date: (i32, u32, u32)) -> Post {
        Post {
            slug: slug.to_string(),
            content: BlogPostContent {
                metadata: PageMetadata {
                    title: slug.to_string(),
                    description: "d".to_string(),
                    keywords: Vec::new(),
                    extra: Default::default(),
                },
                title: slug.to_string(),
                category: Some(NavigationEntry::new(
                    "/blog/category/finanzas-personales",
                    "Finanzas Personales",
                )),
                author: "TOP FINANZAS".to_string(),
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                views: 10,
                hero_image: media("https://media.topfinanzas.com/images/a.jpg"),
                excerpt: "e".to_string(),
                body: "b".to_string(),
                related: Vec::new(),
            },
        }
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(
            category_slug(&NavigationEntry::new("/blog/category/finanzas/", "Otro")).as_deref(),
            Some("finanzas")
        );
        assert_eq!(
            category_slug(&NavigationEntry::new("/categorias", "Préstamos Personales"))
                .as_deref(),
            Some("prestamos-personales")
        );
    }

    #[test]
    fn test_category_slug_rejects_path_segments() {
        for href in ["/blog/category/..", "/blog/category/.", "/blog/category/a/b"] {
            assert_eq!(
                category_slug(&NavigationEntry::new(href, "Préstamos")).as_deref(),
                Some("prestamos"),
                "{}",
                href
            );
        }
        assert_eq!(category_slug(&NavigationEntry::new("/blog/category/..", "...")), None);
    }

    #[test]
    fn test_sort_posts_newest_first() {
        let mut posts = vec![
            post("b", (2025, 1, 10)),
            post("c", (2025, 2, 25)),
            post("a", (2025, 1, 10)),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_post_card_uses_favicon_avatar() {
        let logos = Logos {
            white_logo: media("https://media.topfinanzas.com/white.png"),
            color_logo: media("https://media.topfinanzas.com/color.png"),
            favicon: Some(media("https://media.topfinanzas.com/favicon.png")),
        };
        let card = post("tu-primer-sueldo", (2025, 2, 25)).card(&logos);
        assert_eq!(card.href, "/blog/post/tu-primer-sueldo/");
        assert_eq!(
            card.author.avatar.url,
            "https://media.topfinanzas.com/favicon.png"
        );

        let without_favicon = Logos {
            favicon: None,
            ..logos
        };
        let card = post("x", (2025, 2, 25)).card(&without_favicon);
        assert_eq!(card.author.avatar.url, "https://media.topfinanzas.com/color.png");
    }

    #[test]
    fn test_head_falls_back_to_site_metadata() {
        let config = SiteConfig::default();
        let head = HeadView::build(&config, &Route::BlogIndex, "Blog", None, None);
        assert_eq!(head.canonical, "https://topfinanzas.com/blog/");
        assert!(head.meta_html.contains(r#"<meta name="keywords" content="tarjetas de crédito"#));
        assert!(head.meta_html.contains("og:title"));
    }
}
