use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::data_models::{Excerpt, SearchOutput, SearchResult};
use crate::dom::{self, Handle};
use crate::highlight::append_highlighted;

pub const RESULT_CLASS: &str = "stork-result";
pub const SELECTED_CLASS: &str = "selected";
pub const TITLE_CLASS: &str = "stork-title";
pub const EXCERPT_CONTAINER_CLASS: &str = "stork-excerpt-container";
pub const EXCERPT_CLASS: &str = "stork-excerpt";
pub const RESULTS_LIST_CLASS: &str = "stork-results";

const ELLIPSIS: &str = "...";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default)]
    pub selected: bool,
    /// Carried for callers that pass it; rendering ignores it.
    #[serde(default)]
    pub show_scores: bool,
}

/// Builds the `<li>` for a single result.
///
/// ```text
/// <li class="stork-result[ selected]">
///   <a href="{url}">
///     <div class="stork-title"><p>{title}</p></div>
///     <div class="stork-excerpt-container">      (only with excerpts)
///       <div class="stork-excerpt"><p>...{text}...</p></div>
///     </div>
///   </a>
/// </li>
/// ```
///
/// The returned node has no parent.
pub fn render_result_item(result: &SearchResult, options: &DisplayOptions) -> Handle {
    let class = if options.selected {
        format!("{RESULT_CLASS} {SELECTED_CLASS}")
    } else {
        RESULT_CLASS.to_string()
    };
    let li = dom::element("li", &[("class", class.as_str())]);
    let anchor = dom::element("a", &[("href", result.entry.url.as_str())]);

    let title = dom::element("div", &[("class", TITLE_CLASS)]);
    let title_p = dom::element("p", &[]);
    append_highlighted(&title_p, &result.entry.title, &result.title_highlight_ranges);
    dom::append(&title, title_p);
    dom::append(&anchor, title);

    if !result.excerpts.is_empty() {
        let container = dom::element("div", &[("class", EXCERPT_CONTAINER_CLASS)]);
        for excerpt in &result.excerpts {
            dom::append(&container, render_excerpt(excerpt));
        }
        dom::append(&anchor, container);
    }

    dom::append(&li, anchor);

    tracing::debug!(
        url = %result.entry.url,
        excerpts = result.excerpts.len(),
        selected = options.selected,
        "rendered result item"
    );
    li
}

fn render_excerpt(excerpt: &Excerpt) -> Handle {
    let block = dom::element("div", &[("class", EXCERPT_CLASS)]);
    let p = dom::element("p", &[]);
    dom::append_text(&p, ELLIPSIS);
    append_highlighted(&p, &excerpt.text, &excerpt.highlight_ranges);
    dom::append_text(&p, ELLIPSIS);
    dom::append(&block, p);
    block
}

/// Serialized markup of [`render_result_item`].
pub fn render_result_item_html(result: &SearchResult, options: &DisplayOptions) -> String {
    dom::outer_html(&render_result_item(result, options))
}

/// Builds a `<ul class="stork-results">` holding one item per result.
///
/// Only the item at `selected` gets the `selected` class; an index past the
/// end selects nothing.
pub fn render_results_list(
    results: &[SearchResult],
    selected: Option<usize>,
    show_scores: bool,
) -> Handle {
    let ul = dom::element("ul", &[("class", RESULTS_LIST_CLASS)]);
    for (idx, result) in results.iter().enumerate() {
        let options = DisplayOptions {
            selected: selected == Some(idx),
            show_scores,
        };
        dom::append(&ul, render_result_item(result, &options));
    }
    ul
}

pub fn render_results_list_html(
    results: &[SearchResult],
    selected: Option<usize>,
    show_scores: bool,
) -> String {
    dom::outer_html(&render_results_list(results, selected, show_scores))
}

/// Reads a search output JSON file and renders its prefixed results as a list.
pub fn render_output_file(
    path: &Path,
    selected: Option<usize>,
    show_scores: bool,
) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let output: SearchOutput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse search output in {}", path.display()))?;
    let results = output.into_prefixed_results();
    Ok(render_results_list_html(&results, selected, show_scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::{Entry, HighlightRange};

    #[test]
    fn test_title_only_item() {
        let result = SearchResult::new(Entry::new("/a", "Hello"))
            .with_title_ranges(vec![HighlightRange::new(0, 2)]);
        let html = render_result_item_html(&result, &DisplayOptions::default());
        assert_eq!(
            html,
            r#"<li class="stork-result"><a href="/a"><div class="stork-title"><p><mark class="stork-highlight">He</mark>llo</p></div></a></li>"#
        );
    }

    #[test]
    fn test_selected_item_with_excerpts() {
        let result = SearchResult::new(Entry::new("/b", "Title"))
            .with_excerpt(Excerpt::new("foo bar", vec![]))
            .with_excerpt(Excerpt::new("baz qux", vec![HighlightRange::new(4, 7)]));
        let options = DisplayOptions {
            selected: true,
            show_scores: false,
        };
        let html = render_result_item_html(&result, &options);
        assert_eq!(
            html,
            concat!(
                r#"<li class="stork-result selected"><a href="/b">"#,
                r#"<div class="stork-title"><p>Title</p></div>"#,
                r#"<div class="stork-excerpt-container">"#,
                r#"<div class="stork-excerpt"><p>...foo bar...</p></div>"#,
                r#"<div class="stork-excerpt"><p>...baz <mark class="stork-highlight">qux</mark>...</p></div>"#,
                r#"</div></a></li>"#,
            )
        );
    }

    #[test]
    fn test_show_scores_does_not_change_output() {
        let result = SearchResult::new(Entry::new("/a", "Hello"));
        let plain = render_result_item_html(&result, &DisplayOptions::default());
        let with_scores = render_result_item_html(
            &result,
            &DisplayOptions {
                selected: false,
                show_scores: true,
            },
        );
        assert_eq!(plain, with_scores);
    }

    #[test]
    fn test_display_options_wire_names() {
        let options: DisplayOptions =
            serde_json::from_str(r#"{"selected": true, "showScores": true}"#).unwrap();
        assert!(options.selected);
        assert!(options.show_scores);
        let options: DisplayOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DisplayOptions::default());
    }
}
