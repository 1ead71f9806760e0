//! Site routes and their output locations

use std::fmt;
use std::path::PathBuf;

/// A page of the site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    BlogIndex,
    BlogPost { slug: String },
    Category { slug: String },
    CreditCardIndex,
    CreditCard { slug: String },
}

impl Route {
    /// Path relative to the site root, always with a trailing slash
    pub fn url_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::BlogIndex => "/blog/".to_string(),
            Route::BlogPost { slug } => format!("/blog/post/{}/", slug),
            Route::Category { slug } => format!("/blog/category/{}/", slug),
            Route::CreditCardIndex => "/credit-cards/".to_string(),
            Route::CreditCard { slug } => format!("/credit-cards/{}/", slug),
        }
    }

    /// File the page is written to, relative to the public directory
    pub fn output_path(&self) -> PathBuf {
        let dir = self.url_path();
        PathBuf::from(dir.trim_start_matches('/')).join("index.html")
    }

    /// Parse a request path (without the site root) back into a route
    pub fn from_url_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches("index.html");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["blog"] => Some(Route::BlogIndex),
            ["blog", "post", slug] => Some(Route::BlogPost {
                slug: slug.to_string(),
            }),
            ["blog", "category", slug] => Some(Route::Category {
                slug: slug.to_string(),
            }),
            ["credit-cards"] => Some(Route::CreditCardIndex),
            ["credit-cards", slug] => Some(Route::CreditCard {
                slug: slug.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), PathBuf::from("index.html"));
        assert_eq!(
            Route::BlogPost {
                slug: "your-first-paycheck".to_string()
            }
            .output_path(),
            PathBuf::from("blog/post/your-first-paycheck/index.html")
        );
        assert_eq!(
            Route::CreditCardIndex.output_path(),
            PathBuf::from("credit-cards/index.html")
        );
    }

    #[test]
    fn test_from_url_path() {
        assert_eq!(Route::from_url_path("/"), Some(Route::Home));
        assert_eq!(Route::from_url_path("/index.html"), Some(Route::Home));
        assert_eq!(Route::from_url_path("/blog"), Some(Route::BlogIndex));
        assert_eq!(
            Route::from_url_path("/blog/category/finanzas/"),
            Some(Route::Category {
                slug: "finanzas".to_string()
            })
        );
        assert_eq!(
            Route::from_url_path("/credit-cards/citi-double-cash/index.html"),
            Some(Route::CreditCard {
                slug: "citi-double-cash".to_string()
            })
        );
        assert_eq!(Route::from_url_path("/css/site.css"), None);
        assert_eq!(Route::from_url_path("/about/"), None);
    }

    #[test]
    fn test_url_path_round_trips() {
        let route = Route::BlogPost {
            slug: "tarjetas".to_string(),
        };
        assert_eq!(Route::from_url_path(&route.url_path()), Some(route));
    }
}
