//! List site content

use anyhow::Result;
use std::collections::BTreeMap;

use crate::content::{slug_of, ContentStore};
use crate::generator::{category_slug, Route};
use crate::schema::{BlogPostContent, CreditCardPageContent};
use crate::Site;

/// List site content by type, optionally keeping only identifiers matching a glob
pub fn run(site: &Site, content_type: &str, pattern: Option<&str>) -> Result<()> {
    let pattern = pattern.map(glob::Pattern::new).transpose()?;
    let keep = |id: &str| pattern.as_ref().map_or(true, |p| p.matches(id));

    let store = ContentStore::new(&site.content_dir, site.config.content.cache);
    let docs = &site.config.documents;

    match content_type {
        "blog" | "post" | "posts" => {
            let ids: Vec<_> = store
                .documents(&docs.blog_dir)?
                .into_iter()
                .filter(|id| keep(id.as_str()))
                .collect();
            println!("Posts ({}):", ids.len());
            for id in ids {
                match store.load::<BlogPostContent>(&id) {
                    Ok(post) => println!(
                        "  {} - {} [{}]",
                        post.date.format("%Y-%m-%d"),
                        post.title,
                        id
                    ),
                    Err(e) => println!("  ! {} ({})", id, e),
                }
            }
        }
        "cards" | "card" | "credit-cards" => {
            let ids: Vec<_> = store
                .documents(&docs.credit_cards_dir)?
                .into_iter()
                .filter(|id| keep(id.as_str()))
                .collect();
            println!("Credit cards ({}):", ids.len());
            for id in ids {
                let Some(slug) = slug_of(&id) else {
                    println!("  ! {} (no usable slug)", id);
                    continue;
                };
                let route = Route::CreditCard { slug };
                match store.load::<CreditCardPageContent>(&id) {
                    Ok(card) => println!("  {} - {} [{}]", route, card.hero.title, id),
                    Err(e) => println!("  ! {} ({})", id, e),
                }
            }
        }
        "category" | "categories" => {
            let mut categories: BTreeMap<String, (String, usize)> = BTreeMap::new();
            for id in store.documents(&docs.blog_dir)? {
                let Ok(post) = store.load::<BlogPostContent>(&id) else {
                    continue;
                };
                if let Some((category, slug)) = post
                    .category
                    .as_ref()
                    .and_then(|c| category_slug(c).map(|slug| (c, slug)))
                {
                    let entry = categories
                        .entry(slug)
                        .or_insert_with(|| (category.text.clone(), 0));
                    entry.1 += 1;
                }
            }
            println!("Categories ({}):", categories.len());
            for (slug, (text, count)) in categories {
                println!("  {} ({}) [{}]", text, count, slug);
            }
        }
        "document" | "documents" => {
            let ids: Vec<_> = store
                .documents("")?
                .into_iter()
                .filter(|id| keep(id.as_str()))
                .collect();
            println!("Documents ({}):", ids.len());
            for id in ids {
                println!("  {}", id);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: blog, cards, categories, documents",
                content_type
            );
        }
    }

    Ok(())
}
