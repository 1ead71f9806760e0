//! Footer view
//!
//! Columns: navigate (filtered main navigation and social links), blog
//! categories, popular articles, contact. Below them the disclaimer, the legal
//! links and the copyright lines.

use serde::Serialize;

use super::ImageView;
use crate::layout::{filter_entries, PathFilter};
use crate::schema::{
    ContactEntry, ContactKind, FooterContent, FooterNavigation, Logos, NavigationEntry,
    SocialLink,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub kind: ContactKind,
    pub value: String,
    /// Present for entries rendered as links
    pub link: Option<String>,
    pub align_class: &'static str,
    pub icon_class: &'static str,
    pub paths: Vec<String>,
}

impl From<&ContactEntry> for ContactView {
    fn from(entry: &ContactEntry) -> Self {
        let (align_class, icon_class) = match entry.kind {
            ContactKind::Address => ("items-start", "mt-1 flex-shrink-0"),
            _ => ("items-center", ""),
        };
        Self {
            kind: entry.kind,
            value: entry.value.clone(),
            link: entry.link(),
            align_class,
            icon_class,
            paths: entry.svg_paths().into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalLinkView {
    pub href: String,
    pub text: String,
    /// Whether a ` | ` separator follows this link
    pub separator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub logo: ImageView,
    pub full_copyright: String,

    pub navigate_heading: String,
    pub navigate: Vec<NavigationEntry>,
    pub social_title: String,
    pub social: Vec<SocialLink>,

    pub categories_heading: String,
    pub categories: Vec<NavigationEntry>,

    pub popular_heading: String,
    pub popular: Vec<NavigationEntry>,

    pub contact_heading: String,
    pub contacts: Vec<ContactView>,

    pub disclaimer_label: String,
    pub disclaimer_text: String,
    pub product_label: String,
    pub legal_links: Vec<LegalLinkView>,
    pub copyright: String,
}

impl FooterView {
    pub fn build(
        navigation: &FooterNavigation,
        content: &FooterContent,
        logos: &Logos,
        filter: &PathFilter,
    ) -> Self {
        let last = navigation.legal_links.len().saturating_sub(1);
        let legal_links = navigation
            .legal_links
            .iter()
            .enumerate()
            .map(|(i, link)| LegalLinkView {
                href: link.href.clone(),
                text: link.text.clone(),
                separator: i < last,
            })
            .collect();

        Self {
            logo: ImageView::from(&logos.white_logo),
            full_copyright: content.legal.full_copyright.text.clone(),

            navigate_heading: content.headings.navigate.clone(),
            navigate: filter_entries(&navigation.main_nav_items, filter),
            social_title: navigation.social_media.title.clone(),
            social: navigation.social_media.links.clone(),

            categories_heading: content.headings.categories.clone(),
            categories: navigation.category_items.clone(),

            popular_heading: content.headings.popular.clone(),
            popular: navigation.blog_items.clone(),

            contact_heading: content.headings.contact.clone(),
            contacts: navigation.contact_info.iter().map(ContactView::from).collect(),

            disclaimer_label: content.legal.disclaimer.label.clone(),
            disclaimer_text: content.legal.disclaimer.text.clone(),
            product_label: content.company_info.product_label.clone(),
            legal_links,
            copyright: content.legal.copyright.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        CompanyInfo, Disclaimer, FooterHeadings, LegalText, LegalTexts, MediaReference,
        SocialMedia,
    };

    fn media(url: &str) -> MediaReference {
        MediaReference {
            url: url.to_string(),
            alt: "Top Finanzas".to_string(),
            width: Some(200),
            height: Some(80),
        }
    }

    fn fixtures() -> (FooterNavigation, FooterContent, Logos) {
        let navigation = FooterNavigation {
            main_nav_items: vec![
                NavigationEntry::new("/", "Home"),
                NavigationEntry::new("/blog", "Blog"),
                NavigationEntry::new("/about", "About"),
                NavigationEntry::new("/credit-cards/citi-double-cash", "Citi Double Cash"),
            ],
            category_items: vec![NavigationEntry::new("/blog/category/finanzas", "Finanzas")],
            blog_items: vec![NavigationEntry::new("/blog/post/x", "X")],
            social_media: SocialMedia {
                title: "Síguenos".to_string(),
                links: vec![],
            },
            contact_info: vec![
                ContactEntry {
                    kind: ContactKind::Address,
                    value: "Ciudad de México".to_string(),
                    href: None,
                    svg_path: "M1 1|M2 2".to_string(),
                },
                ContactEntry {
                    kind: ContactKind::Email,
                    value: "info@topfinanzas.com".to_string(),
                    href: None,
                    svg_path: "M3 3".to_string(),
                },
            ],
            legal_links: vec![
                NavigationEntry::new("/privacy", "Privacidad"),
                NavigationEntry::new("/terms", "Términos"),
                NavigationEntry::new("/cookies", "Cookies"),
            ],
        };
        let content = FooterContent {
            headings: FooterHeadings {
                navigate: "Navegar".to_string(),
                categories: "Categorías".to_string(),
                contact: "Contacto".to_string(),
                popular: "Artículos populares".to_string(),
            },
            legal: LegalTexts {
                full_copyright: LegalText {
                    text: "Top Finanzas MX".to_string(),
                },
                disclaimer: Disclaimer {
                    label: "Aviso:".to_string(),
                    text: "No somos un banco.".to_string(),
                },
                copyright: LegalText {
                    text: "2025 Top Finanzas".to_string(),
                },
            },
            company_info: CompanyInfo {
                product_label: "Un producto de Top Networks".to_string(),
            },
        };
        let logos = Logos {
            white_logo: media("https://media.topfinanzas.com/images/white.png"),
            color_logo: media("https://media.topfinanzas.com/images/color.png"),
            favicon: None,
        };
        (navigation, content, logos)
    }

    #[test]
    fn test_navigate_column_is_filtered() {
        let (navigation, content, logos) = fixtures();
        let filter = PathFilter::new(["/", "/blog"], ["/credit-cards"]);
        let view = FooterView::build(&navigation, &content, &logos, &filter);
        let hrefs: Vec<_> = view.navigate.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/", "/blog", "/credit-cards/citi-double-cash"]);
        assert_eq!(view.logo.url, "https://media.topfinanzas.com/images/white.png");
    }

    #[test]
    fn test_contact_presentation() {
        let (navigation, content, logos) = fixtures();
        let view = FooterView::build(&navigation, &content, &logos, &PathFilter::default());
        let address = &view.contacts[0];
        assert_eq!(address.align_class, "items-start");
        assert_eq!(address.icon_class, "mt-1 flex-shrink-0");
        assert_eq!(address.paths, vec!["M1 1", "M2 2"]);
        assert_eq!(address.link, None);

        let email = &view.contacts[1];
        assert_eq!(email.align_class, "items-center");
        assert_eq!(email.link.as_deref(), Some("mailto:info@topfinanzas.com"));
    }

    #[test]
    fn test_legal_link_separators() {
        let (navigation, content, logos) = fixtures();
        let view = FooterView::build(&navigation, &content, &logos, &PathFilter::default());
        let separators: Vec<_> = view.legal_links.iter().map(|l| l.separator).collect();
        assert_eq!(separators, vec![true, true, false]);
        assert_eq!(view.popular_heading, "Artículos populares");
    }
}
