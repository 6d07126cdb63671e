//! Title row of a timeline page, naming where the rows come from.

use dioxus::prelude::*;
use gantt_core::source::ChartSource;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default)]
    pub source: ChartSource,
}

/// Host part of the source URL, for a compact caption.
pub fn source_host(source: &ChartSource) -> &str {
    let rest = source
        .url
        .split_once("://")
        .map_or(source.url.as_str(), |(_, rest)| rest);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let host = source_host(&props.source).to_string();

    rsx! {
        header {
            style: "display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 8px;",
            h2 {
                style: "margin: 0; font-size: 18px;",
                "{props.title}"
            }
            span {
                style: "font-size: 12px; color: #777;",
                "Data: "
                a {
                    href: "{props.source.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{host}"
                }
            }
        }
    }
}
