//! Extraction of an [`Observation`] from rendered Foreca markup.
//!
//! The selectors below mirror the current page layout. When Foreca changes
//! it, extraction fails fast with [`ScrapeError::MissingElement`].

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::{error::ScrapeError, model::Observation, number::parse_localized_number};

const CONTAINER: &str = "div#obscontainer";
const ROW: &str = "div.r";
const TEMPERATURE_BLOCK: &str = "div.temp";
const PARAGRAPH: &str = "p";

/// Present once the page's scripts have filled in the observation.
pub(crate) const RENDERED_MARKER: &str = "div#obscontainer div.temp p";

/// Index of the row holding the observation date and time.
const TIMESTAMP_ROW: usize = 1;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Parse `html` and pull the observation fields out of it.
pub fn extract_observation(html: &str) -> Result<Observation, ScrapeError> {
    let document = Html::parse_document(html);

    let container = document
        .select(&selector(CONTAINER))
        .next()
        .ok_or(ScrapeError::MissingElement("observation container (div#obscontainer)"))?;

    let timestamp_text = container
        .select(&selector(ROW))
        .nth(TIMESTAMP_ROW)
        .map(text_of)
        .ok_or(ScrapeError::MissingElement("timestamp row (second div.r)"))?;
    debug!(timestamp = %timestamp_text, "found observation timestamp");

    let block = container
        .select(&selector(TEMPERATURE_BLOCK))
        .next()
        .ok_or(ScrapeError::MissingElement("temperature block (div.temp)"))?;

    let temperature_p = block
        .select(&selector(PARAGRAPH))
        .next()
        .ok_or(ScrapeError::MissingElement("current temperature paragraph"))?;
    let temperature_text = text_of(temperature_p);
    let temperature_c = parse_localized_number(&temperature_text)?;

    let feels_like_p = temperature_p
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == PARAGRAPH)
        .ok_or(ScrapeError::MissingElement("feels-like paragraph"))?;
    let feels_like_text = text_of(feels_like_p);
    let feels_like_c = parse_localized_number(&feels_like_text)?;

    debug!(temperature_c, feels_like_c, "parsed temperature values");

    Ok(Observation {
        timestamp_text,
        temperature_text,
        temperature_c,
        feels_like_text,
        feels_like_c,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberParseError;

    const PORVOO: &str = include_str!("../tests/fixtures/porvoo.html");

    fn page(temp_block: &str) -> String {
        format!(
            r#"<html><body><div id="obscontainer">
                <div class="r">Station</div><div class="r">16.10.2026 klo 18:20</div>
                <div class="temp">{temp_block}</div>
            </div></body></html>"#
        )
    }

    #[test]
    fn extracts_all_fields_from_fixture() {
        let obs = extract_observation(PORVOO).expect("fixture should parse");

        assert_eq!(obs.timestamp_text, "16.10.2026 klo 18:20");
        assert_eq!(obs.temperature_text, "5,3 °C");
        assert_eq!(obs.temperature_c, 5.3);
        assert_eq!(obs.feels_like_text, "Tuntuu kuin\u{a0}7,1\u{a0}°C");
        assert_eq!(obs.feels_like_c, 7.1);
    }

    #[test]
    fn rows_outside_container_are_ignored() {
        let html = r#"<html><body>
            <div class="r">Menu</div><div class="r">Sää Porvoossa</div>
            <div id="obscontainer">
                <div class="r">Station</div><div class="r">16.10.2026 klo 18:20</div>
                <div class="temp"><p>5,3 °C</p><p>Tuntuu kuin 7,1 °C</p></div>
            </div>
            <div class="r">Footer</div>
        </body></html>"#;

        let obs = extract_observation(html).unwrap();
        assert_eq!(obs.timestamp_text, "16.10.2026 klo 18:20");

        // The fixture header also carries two rows ahead of the container.
        let obs = extract_observation(PORVOO).unwrap();
        assert_eq!(obs.timestamp_text, "16.10.2026 klo 18:20");
    }

    #[test]
    fn missing_container_is_reported() {
        let err = extract_observation("<html><body><div class=\"temp\"></div></body></html>")
            .unwrap_err();

        assert!(matches!(err, ScrapeError::MissingElement(what) if what.contains("obscontainer")));
    }

    #[test]
    fn single_row_is_not_enough() {
        let html = r#"<div id="obscontainer"><div class="r">only</div>
            <div class="temp"><p>1 °C</p><p>Tuntuu kuin 1 °C</p></div></div>"#;
        let err = extract_observation(html).unwrap_err();

        assert!(matches!(err, ScrapeError::MissingElement(what) if what.contains("timestamp")));
    }

    #[test]
    fn missing_feels_like_paragraph() {
        let err = extract_observation(&page("<p>5,3 °C</p><span>x</span>")).unwrap_err();

        assert!(matches!(err, ScrapeError::MissingElement(what) if what.contains("feels-like")));
    }

    #[test]
    fn non_numeric_temperature_is_parse_error() {
        let err =
            extract_observation(&page("<p>N/A °C</p><p>Tuntuu kuin 7,1 °C</p>")).unwrap_err();

        assert!(matches!(
            err,
            ScrapeError::Number(NumberParseError::NoNumber { ref input }) if input == "N/A °C"
        ));
    }

    #[test]
    fn negative_temperatures() {
        let obs = extract_observation(&page(
            "<p>\u{2212}3,4 °C</p><p>Tuntuu kuin\u{a0}\u{2212}8\u{a0}°C</p>",
        ))
        .unwrap();

        assert_eq!(obs.temperature_c, -3.4);
        assert_eq!(obs.feels_like_c, -8.0);
    }
}
