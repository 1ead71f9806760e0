//! Generator module - renders content documents to static HTML with the built-in templates

mod pages;
mod route;

pub use pages::{category_slug, Post};
pub use route::Route;

use anyhow::{Context as _, Result};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::components::{FooterView, HeaderView};
use crate::content::{slug_of, ContentStore, MarkdownRenderer};
use crate::error::ContentError;
use crate::layout::{PathFilter, RenderEnv};
use crate::schema::{
    BlogPostContent, CreditCardPageContent, FooterContent, FooterNavigation, HomePageContent,
    Logos,
};
use crate::templates::{TemplateRenderer, SITE_CSS};
use crate::Site;
use pages::{
    sort_posts, BlogListing, CardListing, CardPageView, HeadView, HomeView, PostView, SiteView,
};

/// Static site generator over one content store.
///
/// A generator owns its store, so under the memoizing cache policy documents
/// are read at most once per generator.
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
    store: ContentStore,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;
        let store = ContentStore::new(&site.content_dir, site.config.content.cache);

        Ok(Self {
            site: site.clone(),
            renderer,
            store,
            markdown: MarkdownRenderer::new(),
        })
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Environment for a client of the given width
    pub fn env_for_width(&self, width: u32) -> RenderEnv {
        RenderEnv::new(width, self.site.config.viewport.breakpoint)
    }

    /// Environment used for files written to disk
    pub fn default_env(&self) -> RenderEnv {
        self.env_for_width(self.site.config.viewport.default_width)
    }

    /// Every route of the site, in generation order.
    ///
    /// Category routes come from the posts that load; a post that fails here
    /// still gets its own route so the failure is reported when it renders.
    pub fn routes(&self) -> Result<Vec<Route>> {
        let docs = &self.site.config.documents;
        let posts = self.items(&docs.blog_dir)?;

        let mut routes = vec![Route::Home, Route::BlogIndex];
        routes.extend(
            distinct_slugs(&posts)
                .into_iter()
                .map(|slug| Route::BlogPost { slug }),
        );

        let mut categories = BTreeSet::new();
        for (_, id) in &posts {
            match self.store.load::<BlogPostContent>(id) {
                Ok(post) => {
                    if let Some(slug) = post.category.as_ref().and_then(category_slug) {
                        categories.insert(slug);
                    }
                }
                Err(e) => tracing::warn!("Skipping categories of {}: {}", id, e),
            }
        }
        routes.extend(categories.into_iter().map(|slug| Route::Category { slug }));

        routes.push(Route::CreditCardIndex);
        routes.extend(
            distinct_slugs(&self.items(&docs.credit_cards_dir)?)
                .into_iter()
                .map(|slug| Route::CreditCard { slug }),
        );

        Ok(routes)
    }

    /// Render one route. Output depends only on the content and `env`.
    pub fn render_route(&self, route: &Route, env: &RenderEnv) -> Result<String> {
        let html = match route {
            Route::Home => self.render_home(route, env),
            Route::BlogIndex => self.render_blog_index(route, env, None),
            Route::Category { slug } => {
                self.render_blog_index(route, env, Some(slug.as_str()))
            }
            Route::BlogPost { slug } => self.render_post(route, env, slug),
            Route::CreditCardIndex => self.render_card_index(route, env),
            Route::CreditCard { slug } => self.render_card(route, env, slug),
        };
        html.with_context(|| format!("rendering {}", route))
    }

    /// Render every route in memory, keeping each route's outcome
    pub fn render_all(&self, env: &RenderEnv) -> Result<Vec<(Route, Result<String>)>> {
        Ok(self
            .routes()?
            .into_iter()
            .map(|route| {
                let html = self.render_route(&route, env);
                (route, html)
            })
            .collect())
    }

    /// Generate the entire site.
    ///
    /// Pages that fail to render are left out and named in the returned error
    /// once all other pages are written.
    pub fn generate(&self, env: &RenderEnv) -> Result<()> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)
            .with_context(|| format!("creating {}", public_dir.display()))?;

        self.write_stylesheet()?;
        self.copy_static_assets()?;

        let rendered = self.render_all(env)?;
        let total = rendered.len();
        let mut failed = Vec::new();

        for (route, html) in rendered {
            match html {
                Ok(html) => self.write_page(&route, &html)?,
                Err(e) => {
                    tracing::error!("{:#}", e);
                    self.remove_stale_page(&route)?;
                    failed.push(route.url_path());
                }
            }
        }

        tracing::info!("Generated {} of {} pages", total - failed.len(), total);

        if !failed.is_empty() {
            anyhow::bail!(
                "failed to render {} page(s): {}",
                failed.len(),
                failed.join(", ")
            );
        }
        Ok(())
    }

    fn render_home(&self, route: &Route, env: &RenderEnv) -> Result<String> {
        let home: HomePageContent = self.store.load(&self.site.config.documents.home)?;

        let title = home
            .metadata
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_else(|| self.site.config.title.clone());
        let head = HeadView::build(
            &self.site.config,
            route,
            &title,
            home.metadata.as_ref(),
            Some(&home.featured.image),
        );

        let mut context = self.base_context(route, head, env)?;
        context.insert(
            "home",
            &HomeView {
                banner_class: env.layout().banner_class(),
                banner: &home.banner,
                featured: &home.featured,
                latest: &home.latest,
            },
        );
        self.renderer.render("home.html", &context)
    }

    fn render_blog_index(
        &self,
        route: &Route,
        env: &RenderEnv,
        category: Option<&str>,
    ) -> Result<String> {
        let config = &self.site.config;
        let mut posts = self.load_posts()?;

        let title = match category {
            None => config.labels.blog_title.clone(),
            Some(slug) => {
                posts.retain(|post| post.category_slug().as_deref() == Some(slug));
                posts
                    .iter()
                    .find_map(|post| post.content.category.as_ref())
                    .map(|entry| entry.text.clone())
                    .ok_or_else(|| ContentError::NotFound {
                        path: format!("{}/category/{}", config.documents.blog_dir, slug),
                    })?
            }
        };

        let logos: Logos = self.store.load(&config.documents.logos)?;
        let listing = BlogListing::build(&title, &posts, &logos);
        let head = HeadView::build(
            config,
            route,
            &format!("{} | {}", title, config.title),
            None,
            None,
        );

        let mut context = self.base_context(route, head, env)?;
        context.insert("listing", &listing);
        self.renderer.render("blog_index.html", &context)
    }

    fn render_post(&self, route: &Route, env: &RenderEnv, slug: &str) -> Result<String> {
        let id = self.find_document(&self.site.config.documents.blog_dir, slug)?;
        let post: BlogPostContent = self.store.load(&id)?;
        let body_html = self
            .markdown
            .render(&post.body)
            .with_context(|| format!("rendering markdown of {}", id))?;

        let head = HeadView::build(
            &self.site.config,
            route,
            &post.metadata.title,
            Some(&post.metadata),
            Some(&post.hero_image),
        );

        let mut context = self.base_context(route, head, env)?;
        context.insert(
            "post",
            &PostView::build(&post, body_html, &self.site.config.language),
        );
        self.renderer.render("blog_post.html", &context)
    }

    fn render_card_index(&self, route: &Route, env: &RenderEnv) -> Result<String> {
        let config = &self.site.config;
        let cards = self
            .unique_items(&config.documents.credit_cards_dir)?
            .into_iter()
            .map(|(slug, id)| {
                let content = self.store.load::<CreditCardPageContent>(&id)?;
                Ok((slug, content))
            })
            .collect::<crate::error::Result<Vec<_>>>()?;

        let title = &config.labels.credit_cards_title;
        let listing = CardListing::build(title, &cards);
        let head = HeadView::build(
            config,
            route,
            &format!("{} | {}", title, config.title),
            None,
            None,
        );

        let mut context = self.base_context(route, head, env)?;
        context.insert("listing", &listing);
        self.renderer.render("credit_cards.html", &context)
    }

    fn render_card(&self, route: &Route, env: &RenderEnv, slug: &str) -> Result<String> {
        let id = self.find_document(&self.site.config.documents.credit_cards_dir, slug)?;
        let card: CreditCardPageContent = self.store.load(&id)?;

        let head = HeadView::build(
            &self.site.config,
            route,
            &card.metadata.title,
            Some(&card.metadata),
            Some(&card.hero.image),
        );

        let mut context = self.base_context(route, head, env)?;
        context.insert(
            "card",
            &CardPageView {
                content: &card,
                hero_size_attrs: card.hero.image.size_attrs(),
            },
        );
        self.renderer.render("credit_card.html", &context)
    }

    /// Context shared by every page: site values, head, header, footer, layout
    fn base_context(&self, route: &Route, head: HeadView, env: &RenderEnv) -> Result<Context> {
        let config = &self.site.config;
        let docs = &config.documents;

        let navigation: FooterNavigation = self.store.load(&docs.footer_navigation)?;
        let footer_content: FooterContent = self.store.load(&docs.footer_text)?;
        let logos: Logos = self.store.load(&docs.logos)?;
        let filter = PathFilter::from_config(&config.footer.navigation);

        let mut context = Context::new();
        context.insert("site", &SiteView::build(config, &logos));
        context.insert("head", &head);
        context.insert("layout", env.layout().as_str());
        context.insert("labels", &config.labels);
        context.insert(
            "header",
            &HeaderView::build(&navigation, &logos, &route.url_path()),
        );
        context.insert(
            "footer",
            &FooterView::build(&navigation, &footer_content, &logos, &filter),
        );
        Ok(context)
    }

    /// All blog posts, newest first. Any post failing to load fails the listing.
    fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = self
            .unique_items(&self.site.config.documents.blog_dir)?
            .into_iter()
            .map(|(slug, id)| {
                let content = self.store.load::<BlogPostContent>(&id)?;
                Ok(Post { slug, content })
            })
            .collect::<crate::error::Result<Vec<_>>>()?;
        sort_posts(&mut posts);
        Ok(posts)
    }

    /// `(slug, id)` of every document under `dir` that has a slug
    fn items(&self, dir: &str) -> Result<Vec<(String, String)>> {
        Ok(self
            .store
            .documents(dir)?
            .into_iter()
            .filter_map(|id| match slug_of(&id) {
                Some(slug) => Some((slug, id)),
                None => {
                    tracing::warn!("Skipping {}: file name has no usable slug", id);
                    None
                }
            })
            .collect())
    }

    /// Like `items`, but two documents sharing a slug are an error
    fn unique_items(&self, dir: &str) -> Result<Vec<(String, String)>> {
        let items = self.items(dir)?;
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (slug, id) in &items {
            if let Some(first) = seen.insert(slug.as_str(), id.as_str()) {
                anyhow::bail!(duplicate_slug(first, id, slug));
            }
        }
        Ok(items)
    }

    /// Identifier of the one document under `dir` whose slug is `slug`
    fn find_document(&self, dir: &str, slug: &str) -> Result<String> {
        let mut matches = self
            .items(dir)?
            .into_iter()
            .filter(|(s, _)| s == slug)
            .map(|(_, id)| id);
        let id = matches.next().ok_or_else(|| ContentError::NotFound {
            path: format!("{}/{}", dir, slug),
        })?;
        if let Some(other) = matches.next() {
            anyhow::bail!(duplicate_slug(&id, &other, slug));
        }
        Ok(id)
    }

    fn write_page(&self, route: &Route, html: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(route.output_path());
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("writing {}", output_path.display()))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// A page that no longer renders must not keep serving an older build
    fn remove_stale_page(&self, route: &Route) -> Result<()> {
        let output_path = self.site.public_dir.join(route.output_path());
        if output_path.is_file() {
            fs::remove_file(&output_path)
                .with_context(|| format!("removing {}", output_path.display()))?;
        }
        Ok(())
    }

    /// Built-in stylesheet; a `css/site.css` under `static/` replaces it
    fn write_stylesheet(&self) -> Result<()> {
        let css_path = self.site.public_dir.join("css").join("site.css");
        if let Some(parent) = css_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&css_path, SITE_CSS)?;
        Ok(())
    }

    /// Copy `static/` into the public directory, skipping `_` and `.` entries
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            if is_hidden(relative) {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest).with_context(|| format!("copying {}", path.display()))?;
            tracing::debug!("Copied: {:?}", relative);
        }

        Ok(())
    }
}

fn duplicate_slug(first: &str, second: &str, slug: &str) -> String {
    format!(
        "documents {} and {} both map to slug `{}`",
        first, second, slug
    )
}

/// Slugs in document order, each once
fn distinct_slugs(items: &[(String, String)]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|(slug, _)| seen.insert(slug.as_str()))
        .map(|(slug, _)| slug.clone())
        .collect()
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('_') || s.starts_with('.'))
            .unwrap_or(false)
    })
}
