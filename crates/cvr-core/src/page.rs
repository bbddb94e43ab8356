//! Page number formatting and image URL construction.

use url::Url;

use crate::config::SiteConfig;

/// Left-pads the decimal representation of `value` with zeros to at least
/// `width` characters. Wider values are returned unchanged, never truncated.
pub fn pad_number(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

/// Absolute image URL for `page`, per the site's URL layout.
pub fn image_url(site: &SiteConfig, page: u32) -> Result<String, url::ParseError> {
    let base = Url::parse(&site.homepage_url)?;
    let path = format!(
        "{}{}{}",
        site.image_prefix,
        pad_number(page, site.pad_width),
        site.image_suffix
    );
    Ok(base.join(&path)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_number_pads_short_values() {
        assert_eq!(pad_number(7, 3), "007");
        assert_eq!(pad_number(0, 6), "000000");
        assert_eq!(pad_number(472, 6), "000472");
    }

    #[test]
    fn pad_number_never_truncates() {
        assert_eq!(pad_number(1234, 3), "1234");
        assert_eq!(pad_number(1234, 4), "1234");
        assert_eq!(pad_number(1234, 0), "1234");
    }

    #[test]
    fn image_url_joins_site_layout() {
        let site = SiteConfig::default();
        assert_eq!(
            image_url(&site, 472).unwrap(),
            "http://samandfuzzy.com/comics/image_000472.jpg"
        );
    }

    #[test]
    fn image_url_respects_pad_width_and_suffix() {
        let site = SiteConfig {
            homepage_url: "http://comics.example.com".to_string(),
            image_prefix: "/strips/page_".to_string(),
            image_suffix: ".png".to_string(),
            pad_width: 4,
        };
        assert_eq!(
            image_url(&site, 33).unwrap(),
            "http://comics.example.com/strips/page_0033.png"
        );
    }

    #[test]
    fn image_url_rejects_unparseable_homepage() {
        let site = SiteConfig {
            homepage_url: "not a url".to_string(),
            ..SiteConfig::default()
        };
        assert!(image_url(&site, 1).is_err());
    }
}
