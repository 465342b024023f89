//! CSS selectors for the Amazon search results page.
//!
//! Update this file when Amazon changes their HTML structure. Each list keeps
//! the long-standing selector first and newer markup variants after it.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for result items on a search results page.
pub mod search {
    use super::*;

    /// Result item container.
    pub static ITEM: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            ".s-main-slot .s-result-item, \
             [data-component-type='s-search-result']",
        )
        .unwrap()
    });

    /// Title text node.
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "h2 a span, \
             h2 span.a-text-normal, \
             h2 span",
        )
        .unwrap()
    });

    /// Displayed price text.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-price .a-offscreen").unwrap());

    /// Primary link of the item.
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "h2 a, \
             a.a-link-normal.s-line-clamp-2, \
             a.a-link-normal.s-link-style.a-text-normal",
        )
        .unwrap()
    });

    /// Star rating text, e.g. "4.5 out of 5 stars".
    pub static RATING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".a-icon-alt").unwrap());
}

/// Selectors that identify pages which are not search results at all.
pub mod errors {
    use super::*;

    /// CAPTCHA challenge form.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='validateCaptcha'], \
             #captchacharacters",
        )
        .unwrap()
    });

    /// "Sorry, something went wrong" error page, recognised by its link back
    /// to the storefront. Image alt text is not used: product images on a
    /// results page can mention dogs too.
    pub static DOG_PAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("a[href*='ref=cs_503_link']").unwrap());
}
