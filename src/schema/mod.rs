//! Typed schemas for the site's content documents
//!
//! Every document in the content store is loaded as one of these shapes. Field
//! names follow the camelCase keys the content files are authored with.

mod blog;
mod credit_card;
mod footer;
mod home;
mod logos;
mod media;
mod metadata;
mod navigation;

pub use blog::BlogPostContent;
pub use credit_card::{CallToAction, CardHero, CardHighlight, CardSection, CreditCardPageContent};
pub use footer::{CompanyInfo, Disclaimer, FooterContent, FooterHeadings, LegalText, LegalTexts};
pub use home::{ArticleAuthor, ArticleCard, Banner, HomePageContent};
pub use logos::Logos;
pub use media::MediaReference;
pub use metadata::PageMetadata;
pub use navigation::{
    ContactEntry, ContactKind, EntryKind, FooterNavigation, NavigationEntry, SocialLink,
    SocialMedia,
};

/// Reject empty or whitespace-only text
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("`{}` must not be empty", field))
    } else {
        Ok(())
    }
}

/// Validate every item of a list, prefixing errors with the item position
pub(crate) fn validate_each<T, F>(field: &str, items: &[T], check: F) -> Result<(), String>
where
    F: Fn(&T) -> Result<(), String>,
{
    for (i, item) in items.iter().enumerate() {
        check(item).map_err(|e| format!("{}[{}]: {}", field, i, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("title", "Hola").is_ok());
        assert_eq!(
            require_text("title", " \n").unwrap_err(),
            "`title` must not be empty"
        );
    }

    #[test]
    fn test_validate_each_reports_position() {
        let items = ["a", "", "c"];
        let err = validate_each("items", &items, |s| require_text("text", s)).unwrap_err();
        assert_eq!(err, "items[1]: `text` must not be empty");
    }
}
