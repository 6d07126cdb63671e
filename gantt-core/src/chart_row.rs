//! Rows returned by the remote chart endpoint.

use crate::error::Result;
use chrono::NaiveDate;
use gantt_utils::dates;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One horizontal bar: an interval `[start, end]` in a category lane.
///
/// Dates travel as `yyyy-MM-dd` strings in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    pub category: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartRow {
    /// Fill/stroke colour for this bar, if the row carries a usable one.
    pub fn color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Tooltip markup for this bar: `{category}`, `{start}` and `{end}` in
    /// `template` are replaced with the row's values, HTML-escaped. The
    /// template's own markup is kept.
    pub fn tooltip_html(&self, template: &str) -> String {
        template
            .replace("{category}", &escape_html(&self.category))
            .replace("{start}", &dates::format_date(&self.start))
            .replace("{end}", &dates::format_date(&self.end))
    }
}

/// Escape text for insertion into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Decode a response body into chart rows.
///
/// The body must be a JSON array of row objects. Rows are kept in the order
/// the server sent them; an `end` before `start` is passed through untouched.
/// Blank colours are dropped so those bars get the themed default.
pub fn decode_rows(body: &str) -> Result<Vec<ChartRow>> {
    let rows: Vec<ChartRow> = serde_json::from_str(body)?;
    Ok(rows
        .into_iter()
        .map(|mut row| {
            row.color = row.color().map(str::to_string);
            row
        })
        .collect())
}

/// Distinct categories in first-appearance order. This is the top-to-bottom
/// order of the lanes on the category axis.
pub fn categories(rows: &[ChartRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.category.as_str()))
        .map(|row| row.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_single_row() {
        let rows =
            decode_rows(r#"[{"category":"A","start":"2021-01-01","end":"2021-01-05"}]"#).unwrap();
        assert_eq!(
            rows,
            vec![ChartRow {
                category: "A".to_string(),
                start: ymd(2021, 1, 1),
                end: ymd(2021, 1, 5),
                color: None,
            }]
        );
    }

    #[test]
    fn test_decode_keeps_color_and_ignores_extra_fields() {
        let body = r##"[
            {"category":"Build","start":"2021-02-01","end":"2021-02-10","color":"#8067dc","task":"x"},
            {"category":"Ship","start":"2021-02-11","end":"2021-02-12","color":"  "}
        ]"##;
        let rows = decode_rows(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].color(), Some("#8067dc"));
        assert_eq!(rows[1].color(), None);
        assert_eq!(rows[1].color, None);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_rows("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_rows(r#"{"category":"A"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_rejects_bad_date_format() {
        let err =
            decode_rows(r#"[{"category":"A","start":"01/01/2021","end":"2021-01-05"}]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_rejects_missing_category() {
        let err = decode_rows(r#"[{"start":"2021-01-01","end":"2021-01-05"}]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_passes_inverted_interval_through() {
        let rows =
            decode_rows(r#"[{"category":"A","start":"2021-01-05","end":"2021-01-01"}]"#).unwrap();
        assert!(rows[0].end < rows[0].start);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let body = r#"[
            {"category":"B","start":"2021-01-01","end":"2021-01-02"},
            {"category":"A","start":"2021-01-01","end":"2021-01-02"},
            {"category":"B","start":"2021-01-03","end":"2021-01-04"}
        ]"#;
        let rows = decode_rows(body).unwrap();
        assert_eq!(categories(&rows), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_tooltip_escapes_row_values() {
        let rows = decode_rows(
            r#"[{"category":"<img src=x onerror=alert(1)>","start":"2021-01-01","end":"2021-01-05"}]"#,
        )
        .unwrap();
        let html = rows[0].tooltip_html("{category}: <b>{start}</b> - <b>{end}</b>");
        assert_eq!(
            html,
            "&lt;img src=x onerror=alert(1)&gt;: <b>2021-01-01</b> - <b>2021-01-05</b>"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"A & "B" 'C'"#), "A &amp; &quot;B&quot; &#39;C&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_encode_uses_chart_date_format() {
        let rows = vec![ChartRow {
            category: "A".to_string(),
            start: ymd(2021, 1, 1),
            end: ymd(2021, 1, 5),
            color: None,
        }];
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(json, r#"[{"category":"A","start":"2021-01-01","end":"2021-01-05"}]"#);
    }
}
