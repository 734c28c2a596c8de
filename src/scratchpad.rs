/// Scratchpad text: rendering tab lists and extracting URLs back out of it
use crate::tab_data::{TabInfo, WindowInfo};

/// Lines starting with this marker are comments (tab titles, user notes)
pub const COMMENT_MARKER: &str = "#";

/// A line is treated as a URL only if it contains a scheme separator
pub const URL_MARKER: &str = "://";

/// How tabs are rendered into the scratchpad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub include_title: bool,
}

impl RenderOptions {
    pub fn tab_separator(&self) -> &'static str {
        if self.include_title { "\n\n" } else { "\n" }
    }

    pub fn window_separator(&self) -> &'static str {
        if self.include_title {
            "\n\n---\n\n"
        } else {
            "\n---\n"
        }
    }
}

/// Split the filter text into search terms
///
/// Terms are separated by any whitespace; empty terms never appear.
pub fn search_terms(filter: &str) -> Vec<&str> {
    filter.split_whitespace().collect()
}

/// A tab matches when its URL contains every term (case-sensitive).
/// No terms means every tab matches.
pub fn tab_matches(tab: &TabInfo, terms: &[&str]) -> bool {
    let url = tab.url_or_empty();
    terms.iter().all(|term| url.contains(term))
}

pub fn render_tab(tab: &TabInfo, options: RenderOptions) -> String {
    let url = tab.url_or_empty();
    if options.include_title {
        format!("# {}\n{}", tab.title.as_deref().unwrap_or(""), url)
    } else {
        url.to_string()
    }
}

/// Render the filtered tabs of every window into scratchpad text
///
/// Windows that render to nothing (no matching tab, or only URL-less tabs
/// without titles) are dropped together with their separator.
pub fn render_windows(windows: &[WindowInfo], filter: &str, options: RenderOptions) -> String {
    let terms = search_terms(filter);

    windows
        .iter()
        .map(|window| {
            window
                .tabs
                .iter()
                .filter(|tab| tab_matches(tab, &terms))
                .map(|tab| render_tab(tab, options))
                .collect::<Vec<_>>()
                .join(options.tab_separator())
        })
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join(options.window_separator())
}

/// Extract the URLs listed in the scratchpad, in order, duplicates included
pub fn extract_urls(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.starts_with(COMMENT_MARKER))
        .filter(|line| line.contains(URL_MARKER))
        .map(str::to_string)
        .collect()
}

/// Whether the open buttons should be enabled for this scratchpad text
pub fn has_urls(text: &str) -> bool {
    !extract_urls(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_tab(url: &str) -> TabInfo {
        TabInfo {
            url: Some(url.to_string()),
            ..TabInfo::default()
        }
    }

    fn window(urls: &[&str]) -> WindowInfo {
        WindowInfo::with_tabs(urls.iter().map(|url| url_tab(url)).collect())
    }

    #[test]
    fn test_extract_urls_skips_comments_and_plain_lines() {
        let text = "# note\nhttp://a.com\ninvalid-line\nhttp://b.com";
        assert_eq!(extract_urls(text), vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_extract_urls_trims_and_keeps_duplicates() {
        let text = "  https://a.com  \n\n\thttps://a.com\n   # https://hidden.com\n---\nfile:///tmp/x";
        assert_eq!(
            extract_urls(text),
            vec!["https://a.com", "https://a.com", "file:///tmp/x"]
        );
    }

    #[test]
    fn test_extract_urls_empty() {
        assert!(extract_urls("").is_empty());
        assert!(extract_urls("# only\n---\nplain words").is_empty());
    }

    #[test]
    fn test_has_urls() {
        assert!(has_urls("http://a.com"));
        assert!(!has_urls("# http://a.com"));
        assert!(!has_urls(""));
    }

    #[test]
    fn test_search_terms() {
        assert_eq!(search_terms("foo  bar\tbaz\n"), vec!["foo", "bar", "baz"]);
        assert!(search_terms("   ").is_empty());
    }

    #[test]
    fn test_tab_matches_requires_every_term() {
        let terms = search_terms("foo bar");
        assert!(tab_matches(&url_tab("http://foobar.com"), &terms));
        assert!(!tab_matches(&url_tab("http://foo.com"), &terms));
        assert!(!tab_matches(&url_tab("http://bar.com"), &terms));
    }

    #[test]
    fn test_tab_matches_is_case_sensitive() {
        assert!(!tab_matches(&url_tab("http://foo.com"), &["FOO"]));
    }

    #[test]
    fn test_tab_without_url() {
        let tab = TabInfo::default();
        assert!(tab_matches(&tab, &[]));
        assert!(!tab_matches(&tab, &["a"]));
    }

    #[test]
    fn test_render_two_windows() {
        let windows = vec![window(&["http://x.com"]), window(&["http://y.com"])];
        assert_eq!(
            render_windows(&windows, "", RenderOptions::default()),
            "http://x.com\n---\nhttp://y.com"
        );
    }

    #[test]
    fn test_render_filter_keeps_only_full_match() {
        let windows = vec![window(&["http://foobar.com", "http://foo.com", "http://bar.com"])];
        assert_eq!(
            render_windows(&windows, "foo bar", RenderOptions::default()),
            "http://foobar.com"
        );
    }

    #[test]
    fn test_render_drops_empty_windows() {
        let windows = vec![
            window(&["http://a.com"]),
            window(&["http://other.org"]),
            WindowInfo::default(),
            window(&["http://b.com", "http://c.com"]),
        ];
        assert_eq!(
            render_windows(&windows, ".com", RenderOptions::default()),
            "http://a.com\n---\nhttp://b.com\nhttp://c.com"
        );
        assert_eq!(render_windows(&windows, "nothing", RenderOptions::default()), "");
    }

    #[test]
    fn test_render_drops_window_with_only_urlless_tab() {
        let windows = vec![
            window(&["http://x.com"]),
            WindowInfo::with_tabs(vec![TabInfo::default()]),
            window(&["http://y.com"]),
        ];
        assert_eq!(
            render_windows(&windows, "", RenderOptions::default()),
            "http://x.com\n---\nhttp://y.com"
        );
    }

    #[test]
    fn test_render_untitled_tab_with_titles() {
        let tab = TabInfo {
            url: Some("http://a.com".to_string()),
            ..TabInfo::default()
        };
        let windows = vec![WindowInfo::with_tabs(vec![tab])];

        assert_eq!(
            render_windows(&windows, "", RenderOptions { include_title: true }),
            "# \nhttp://a.com"
        );
    }

    #[test]
    fn test_render_with_titles() {
        let windows = vec![
            WindowInfo::with_tabs(vec![
                TabInfo::new("http://a.com", "A"),
                TabInfo::new("http://b.com", "B"),
            ]),
            WindowInfo::with_tabs(vec![TabInfo::new("http://c.com", "C")]),
        ];
        let options = RenderOptions { include_title: true };

        assert_eq!(
            render_windows(&windows, "", options),
            "# A\nhttp://a.com\n\n# B\nhttp://b.com\n\n---\n\n# C\nhttp://c.com"
        );
    }

    #[test]
    fn test_rendered_text_round_trips_through_extract() {
        let windows = vec![
            window(&["https://docs.rs/yew", "https://crates.io", "https://docs.rs/log"]),
            window(&["about:blank", "https://docs.rs/serde"]),
        ];
        let text = render_windows(&windows, "docs.rs", RenderOptions::default());

        assert_eq!(
            extract_urls(&text),
            vec!["https://docs.rs/yew", "https://docs.rs/log", "https://docs.rs/serde"]
        );
    }

    #[test]
    fn test_titled_text_extracts_only_urls() {
        let windows = vec![WindowInfo::with_tabs(vec![
            TabInfo::new("https://a.com", "https://looks-like-a-url.com"),
        ])];
        let text = render_windows(&windows, "", RenderOptions { include_title: true });

        assert_eq!(extract_urls(&text), vec!["https://a.com"]);
    }
}
