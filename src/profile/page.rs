use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::ScrapedFields;

lazy_static! {
    static ref NAME: Selector =
        Selector::parse(".actual_persona_name").unwrap();
    static ref FRIENDS: Selector =
        Selector::parse("a[href*='/friends'] span:nth-child(2)").unwrap();
    static ref LEVEL: Selector =
        Selector::parse("a[href*='/badges'] > div > div > span").unwrap();
    static ref AVATAR: Selector =
        Selector::parse(".playerAvatarAutoSizeInner > img").unwrap();
    static ref GAMES: Selector =
        Selector::parse("a[href*='/games/?tab=all'] span:nth-child(2)")
            .unwrap();
    static ref GROUPS: Selector =
        Selector::parse("a[href*='/groups/'] span:nth-child(2)").unwrap();
    static ref BADGES: Selector =
        Selector::parse("a[href*='/badges/'] span:nth-child(2)").unwrap();
}

/// Extract the profile fields from a profile page.
///
/// Selectors that match nothing leave their field empty; classification
/// decides what an empty field means.
pub fn scrape(document: &str) -> ScrapedFields {
    let html = Html::parse_document(document);
    let fields = ScrapedFields {
        name: select_text(&html, &NAME),
        friends: select_text(&html, &FRIENDS),
        level: select_text(&html, &LEVEL),
        avatar: select_attr(&html, &AVATAR, "src"),
        games: select_text(&html, &GAMES),
        groups: select_text(&html, &GROUPS),
        badges: select_text(&html, &BADGES),
    };
    log::trace!("scraped {:?}", fields);
    fields
}

/// Combined text of every match, whitespace collapsed.
fn select_text(html: &Html, selector: &Selector) -> String {
    let mut words: Vec<&str> = Vec::new();
    for element in html.select(selector) {
        for chunk in element.text() {
            words.extend(chunk.split_whitespace());
        }
    }
    words.join(" ")
}

/// Attribute of the first match that carries it.
fn select_attr(html: &Html, selector: &Selector, attr: &str) -> String {
    html.select(selector)
        .find_map(|element| element.value().attr(attr))
        .map(|value| value.trim().to_owned())
        .unwrap_or_default()
}
