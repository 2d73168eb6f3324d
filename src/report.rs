use anyhow::Result;
use std::io::Write;

use crate::stats::{DailyHits, UrlCounts, UrlHit};

/// URLs of one day, most hits first. Equal counts are ordered by URL.
pub fn rank_urls(counts: &UrlCounts) -> Vec<UrlHit> {
    let mut ranked: Vec<UrlHit> = counts
        .iter()
        .map(|(url, hits)| UrlHit {
            url: url.clone(),
            hits: *hits,
        })
        .collect();
    ranked.sort_by(|a, b| b.hits.cmp(&a.hits).then_with(|| a.url.cmp(&b.url)));
    ranked
}

/// Writes one `MM/DD/YYYY GMT` header per day followed by `<url> <hits>`
/// lines. `top` caps the number of URLs printed per day.
pub fn render_report<W: Write>(daily: &DailyHits, top: Option<usize>, out: &mut W) -> Result<()> {
    for &date in &daily.dates {
        writeln!(out, "{}", date.to_display()?)?;

        let Some(counts) = daily.day(date) else {
            continue;
        };
        let ranked = rank_urls(counts);
        let limit = top.unwrap_or(ranked.len());
        for hit in ranked.iter().take(limit) {
            writeln!(out, "{} {}", hit.url, hit.hits)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_lines;
    use std::io::Cursor;

    fn render(input: &str, top: Option<usize>) -> String {
        let daily = aggregate_lines(Cursor::new(input)).unwrap();
        let mut out = Vec::new();
        render_report(&daily, top, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_example_log() {
        let input = "1700000000|/a\n1700000000|/b\n1700000001|/a\n1700086400|/c\nnot-a-valid-line\n1700086400|/c\n";
        assert_eq!(
            render(input, None),
            "11/14/2023 GMT\n/a 2\n/b 1\n11/15/2023 GMT\n/c 2\n"
        );
    }

    #[test]
    fn ties_break_by_url() {
        let input = "0|/zeta\n0|/alpha\n0|/mid\n0|/mid\n";
        assert_eq!(
            render(input, None),
            "01/01/1970 GMT\n/mid 2\n/alpha 1\n/zeta 1\n"
        );
    }

    #[test]
    fn rank_orders_by_hits_descending() {
        let mut counts = UrlCounts::new();
        counts.insert("/low".to_string(), 1);
        counts.insert("/high".to_string(), 9);
        counts.insert("/mid".to_string(), 4);
        let urls: Vec<_> = rank_urls(&counts).into_iter().map(|h| h.url).collect();
        assert_eq!(urls, vec!["/high", "/mid", "/low"]);
    }

    #[test]
    fn top_limits_each_day() {
        let input = "0|/a\n0|/a\n0|/b\n0|/c\n86400|/d\n";
        assert_eq!(
            render(input, Some(1)),
            "01/01/1970 GMT\n/a 2\n01/02/1970 GMT\n/d 1\n"
        );
    }

    #[test]
    fn empty_report_writes_nothing() {
        assert_eq!(render("", None), "");
        assert_eq!(render("garbage\n", None), "");
    }
}
