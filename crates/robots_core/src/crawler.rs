//! Catalog of known crawlers and their official User-agent strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Broad grouping of crawlers, used for listing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlerCategory {
    Google,
    Bing,
    Yahoo,
    Social,
    Commerce,
    SearchEngine,
    Archive,
    Seo,
    Feed,
    Other,
}

impl CrawlerCategory {
    pub const ALL: [CrawlerCategory; 10] = [
        CrawlerCategory::Google,
        CrawlerCategory::Bing,
        CrawlerCategory::Yahoo,
        CrawlerCategory::Social,
        CrawlerCategory::Commerce,
        CrawlerCategory::SearchEngine,
        CrawlerCategory::Archive,
        CrawlerCategory::Seo,
        CrawlerCategory::Feed,
        CrawlerCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlerCategory::Google => "google",
            CrawlerCategory::Bing => "bing",
            CrawlerCategory::Yahoo => "yahoo",
            CrawlerCategory::Social => "social",
            CrawlerCategory::Commerce => "commerce",
            CrawlerCategory::SearchEngine => "search_engine",
            CrawlerCategory::Archive => "archive",
            CrawlerCategory::Seo => "seo",
            CrawlerCategory::Feed => "feed",
            CrawlerCategory::Other => "other",
        }
    }
}

impl fmt::Display for CrawlerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrawlerCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CrawlerCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("unknown crawler category: {}", s))
    }
}

macro_rules! crawlers {
    ($($variant:ident => $name:literal, $agent:literal, $category:ident;)+) => {
        /// A known web crawler.
        ///
        /// Serializes as its agent string. Deserializes from either the agent
        /// string or the upper-snake constant name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum Crawler {
            $($variant,)+
        }

        impl Crawler {
            /// Every crawler in catalog order.
            pub const ALL: &'static [Crawler] = &[$(Crawler::$variant,)+];

            /// Official User-agent string, written verbatim in output.
            pub fn agent(&self) -> &'static str {
                match self {
                    $(Crawler::$variant => $agent,)+
                }
            }

            /// Upper-snake constant name, e.g. `GOOGLE_IMAGES`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Crawler::$variant => $name,)+
                }
            }

            pub fn category(&self) -> CrawlerCategory {
                match self {
                    $(Crawler::$variant => CrawlerCategory::$category,)+
                }
            }
        }
    };
}

crawlers! {
    Google => "GOOGLE", "Googlebot", Google;
    GoogleImages => "GOOGLE_IMAGES", "Googlebot-Image", Google;
    GoogleNews => "GOOGLE_NEWS", "Googlebot-News", Google;
    GoogleVideo => "GOOGLE_VIDEO", "Googlebot-Video", Google;
    GoogleAds => "GOOGLE_ADS", "AdsBot-Google", Google;
    GoogleAdsense => "GOOGLE_ADSENSE", "Mediapartners-Google", Google;

    Bing => "BING", "Bingbot", Bing;
    BingPreview => "BING_PREVIEW", "BingPreview", Bing;
    Msn => "MSN", "msnbot", Bing;
    MsnMedia => "MSN_MEDIA", "msnbot-media", Bing;

    Yahoo => "YAHOO", "Slurp", Yahoo;

    Facebook => "FACEBOOK", "facebookexternalhit", Social;
    Twitter => "TWITTER", "Twitterbot", Social;
    Linkedin => "LINKEDIN", "LinkedInBot", Social;
    Pinterest => "PINTEREST", "Pinterest", Social;
    Discord => "DISCORD", "Discordbot", Social;

    Amazon => "AMAZON", "Amazonbot", Commerce;

    DuckDuckGo => "DUCKDUCKGO", "DuckDuckBot", SearchEngine;
    Yandex => "YANDEX", "YandexBot", SearchEngine;
    Baidu => "BAIDU", "Baiduspider", SearchEngine;
    Naver => "NAVER", "Naverbot", SearchEngine;
    SogouWebSpider => "SOGOU_WEB_SPIDER", "Sogou web spider", SearchEngine;
    Qwant => "QWANT", "Qwantify", SearchEngine;

    InternetArchive => "INTERNET_ARCHIVE", "ia_archiver", Archive;
    Alexa => "ALEXA", "ia_archiver-web.archive.org", Archive;
    ArchiveOrg => "ARCHIVE_ORG", "archive.org_bot", Archive;

    Ahrefs => "AHREFS", "AhrefsBot", Seo;
    Semrush => "SEMRUSH", "SemrushBot", Seo;
    Majestic => "MAJESTIC", "MJ12bot", Seo;
    Moz => "MOZ", "rogerbot", Seo;
    ScreamingFrog => "SCREAMING_FROG", "Screaming Frog SEO Spider", Seo;

    Feedly => "FEEDLY", "Feedly", Feed;
    W3cValidator => "W3C_VALIDATOR", "W3C-checklink", Feed;
    CssValidator => "CSS_VALIDATOR", "W3C_CSS_Validator", Feed;
    HtmlValidator => "HTML_VALIDATOR", "W3C_Validator", Feed;

    Slack => "SLACK", "Slackbot", Other;
    WhatsApp => "WHATSAPP", "WhatsApp", Other;
}

impl Crawler {
    /// Crawlers belonging to the given category, in catalog order.
    pub fn in_category(category: CrawlerCategory) -> impl Iterator<Item = Crawler> {
        Crawler::ALL
            .iter()
            .copied()
            .filter(move |c| c.category() == category)
    }
}

impl fmt::Display for Crawler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.agent())
    }
}

impl FromStr for Crawler {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let as_name = token.to_ascii_uppercase().replace('-', "_");

        // Exact agent strings win: `W3C_Validator` is an agent, not the
        // name `W3C_VALIDATOR`.
        let exact = Crawler::ALL.iter().copied().find(|c| c.agent() == token);

        exact
            .or_else(|| Crawler::ALL.iter().copied().find(|c| c.name() == as_name))
            .or_else(|| {
                Crawler::ALL
                    .iter()
                    .copied()
                    .find(|c| c.agent().eq_ignore_ascii_case(token))
            })
            .ok_or_else(|| ValidationError::UnknownCrawler(s.to_string()))
    }
}

impl TryFrom<String> for Crawler {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Crawler> for String {
    fn from(crawler: Crawler) -> Self {
        crawler.agent().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_not_empty() {
        assert_eq!(Crawler::ALL.len(), 37);
    }

    #[test]
    fn test_agent_strings_are_clean() {
        let allowed = Regex::new(r"^[a-zA-Z0-9\-_.\s]+$").unwrap();
        for crawler in Crawler::ALL {
            let agent = crawler.agent();
            assert!(!agent.is_empty());
            assert_eq!(agent.trim(), agent, "{:?} has surrounding whitespace", crawler);
            assert!(!agent.contains(['\n', '\r', '\t']), "{:?}", crawler);
            assert!(allowed.is_match(agent), "{:?} has odd characters", crawler);
        }
    }

    #[test]
    fn test_agent_strings_and_names_are_unique() {
        let agents: HashSet<_> = Crawler::ALL.iter().map(|c| c.agent()).collect();
        let names: HashSet<_> = Crawler::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(agents.len(), Crawler::ALL.len());
        assert_eq!(names.len(), Crawler::ALL.len());
    }

    #[test]
    fn test_names_are_uppercase() {
        for crawler in Crawler::ALL {
            assert_eq!(crawler.name(), crawler.name().to_uppercase());
        }
    }

    #[test]
    fn test_major_search_engines_present() {
        let agents: Vec<_> = Crawler::ALL.iter().map(|c| c.agent()).collect();
        for expected in ["Googlebot", "Bingbot", "Slurp", "YandexBot", "Baiduspider", "DuckDuckBot"] {
            assert!(agents.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_parse_by_name_or_agent() {
        assert_eq!("GOOGLE".parse::<Crawler>().unwrap(), Crawler::Google);
        assert_eq!("google_news".parse::<Crawler>().unwrap(), Crawler::GoogleNews);
        assert_eq!("google-images".parse::<Crawler>().unwrap(), Crawler::GoogleImages);
        assert_eq!("Googlebot".parse::<Crawler>().unwrap(), Crawler::Google);
        assert_eq!("facebookexternalhit".parse::<Crawler>().unwrap(), Crawler::Facebook);
        assert_eq!("Sogou web spider".parse::<Crawler>().unwrap(), Crawler::SogouWebSpider);
    }

    #[test]
    fn test_every_agent_string_parses_back() {
        for crawler in Crawler::ALL {
            assert_eq!(crawler.agent().parse::<Crawler>().unwrap(), *crawler);
            assert_eq!(crawler.name().parse::<Crawler>().unwrap(), *crawler);
        }
        assert_eq!("W3C_Validator".parse::<Crawler>().unwrap(), Crawler::HtmlValidator);
    }

    #[test]
    fn test_parse_unknown_crawler() {
        let err = "NotABot".parse::<Crawler>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCrawler("NotABot".to_string()));
    }

    #[test]
    fn test_serde_uses_agent_string() {
        let json = serde_json::to_string(&Crawler::Bing).unwrap();
        assert_eq!(json, "\"Bingbot\"");

        let parsed: Crawler = serde_json::from_str("\"YAHOO\"").unwrap();
        assert_eq!(parsed, Crawler::Yahoo);
        assert!(serde_json::from_str::<Crawler>("\"nobody\"").is_err());
    }

    #[test]
    fn test_in_category() {
        let google: Vec<_> = Crawler::in_category(CrawlerCategory::Google).collect();
        assert_eq!(google.len(), 6);
        assert_eq!(google[0], Crawler::Google);

        let covered: usize = CrawlerCategory::ALL
            .iter()
            .map(|c| Crawler::in_category(*c).count())
            .sum();
        assert_eq!(covered, Crawler::ALL.len());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("search-engine".parse::<CrawlerCategory>().unwrap(), CrawlerCategory::SearchEngine);
        assert_eq!("SEO".parse::<CrawlerCategory>().unwrap(), CrawlerCategory::Seo);
        assert!("nope".parse::<CrawlerCategory>().is_err());
    }
}
