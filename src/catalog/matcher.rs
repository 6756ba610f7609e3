use crate::model::{CatalogSnapshot, MatchResult};
use crate::normalizer::normalize;

/// Resolves a free-text query against one snapshot.
///
/// Tiers, in fixed order: exact normalized title, exact keyword, then
/// substring on the normalized title where the shortest title wins and
/// snapshot order breaks ties. A row without a price never produces a Found.
pub fn find_in(snapshot: &CatalogSnapshot, query: &str) -> MatchResult {
    let q = normalize(query);
    if q.is_empty() {
        return MatchResult::NotFound;
    }
    let rows = &snapshot.rows;

    // Tam eşleşme
    let mut hit = rows.iter().find(|r| r.norm_title == q);

    // Keywords tam eşleşme
    if hit.is_none() {
        hit = rows
            .iter()
            .find(|r| r.norm_keywords.iter().any(|k| *k == q));
    }

    // Kısmi eşleşme (başlıkta), en kısa başlık kazanır
    if hit.is_none() {
        hit = rows
            .iter()
            .filter(|r| r.norm_title.contains(q.as_str()))
            .min_by_key(|r| r.norm_title.len());
    }

    match hit {
        Some(row) => match row.price {
            Some(price) => MatchResult::Found {
                title: row.title.clone(),
                price,
                stock_note: row.stock_note.clone(),
                sku: row.sku.clone(),
            },
            None => MatchResult::NotFound,
        },
        None => MatchResult::NotFound,
    }
}

/// Human-readable availability sentence for a Found result.
pub fn stock_message(title: &str, stock_note: &str, price: f64) -> String {
    let price = format_price(price);
    if stock_note.is_empty() {
        format!("'{title}' ürün stoklarımızda mevcuttur. Fiyatı {price} TL.")
    } else {
        format!("'{title}' {stock_note}. Fiyatı {price} TL.")
    }
}

/// Whole prices render without the fractional part: 150, not 150.0.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatalogRow;
    use chrono::Utc;

    fn row(title: &str, price: Option<f64>, keywords: &[&str]) -> CatalogRow {
        CatalogRow {
            title: title.to_string(),
            norm_title: normalize(title),
            price,
            stock_note: String::new(),
            sku: String::new(),
            norm_keywords: keywords.iter().map(|k| normalize(k)).collect(),
        }
    }

    fn snapshot(rows: Vec<CatalogRow>) -> CatalogSnapshot {
        CatalogSnapshot {
            rows,
            fetched_at: Utc::now(),
        }
    }

    fn found_title(result: &MatchResult) -> &str {
        match result {
            MatchResult::Found { title, .. } => title,
            MatchResult::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn exact_title_beats_substring() {
        let snap = snapshot(vec![
            row("Kitap AB", Some(200.0), &[]),
            row("Kitap A", Some(150.0), &[]),
        ]);
        assert_eq!(found_title(&find_in(&snap, "Kitap A")), "Kitap A");
    }

    #[test]
    fn exact_title_beats_keyword() {
        let snap = snapshot(vec![
            row("Sözlük", Some(90.0), &["kitap a"]),
            row("Kitap A", Some(150.0), &[]),
        ]);
        assert_eq!(found_title(&find_in(&snap, "kitap a")), "Kitap A");
    }

    #[test]
    fn keyword_match_is_case_and_diacritic_insensitive() {
        let snap = snapshot(vec![row("Sefiller", Some(120.0), &["roman", "edebiyat"])]);
        assert_eq!(found_title(&find_in(&snap, "Roman")), "Sefiller");
        assert_eq!(found_title(&find_in(&snap, "EDEBİYAT")), "Sefiller");
    }

    #[test]
    fn substring_prefers_shortest_title() {
        let snap = snapshot(vec![
            row("Mavi Defter", Some(50.0), &[]),
            row("Defter", Some(35.0), &[]),
        ]);
        assert_eq!(found_title(&find_in(&snap, "defter")), "Defter");
    }

    #[test]
    fn substring_tie_breaks_on_snapshot_order() {
        let snap = snapshot(vec![
            row("Defter A", Some(50.0), &[]),
            row("Defter B", Some(55.0), &[]),
        ]);
        assert_eq!(found_title(&find_in(&snap, "defter")), "Defter A");
    }

    #[test]
    fn priceless_match_is_not_found() {
        let snap = snapshot(vec![row("Kitap A", None, &[])]);
        assert_eq!(find_in(&snap, "Kitap A"), MatchResult::NotFound);
    }

    #[test]
    fn empty_query_is_not_found() {
        let snap = snapshot(vec![row("Kitap A", Some(150.0), &[])]);
        assert_eq!(find_in(&snap, ""), MatchResult::NotFound);
        assert_eq!(find_in(&snap, "   "), MatchResult::NotFound);
        assert_eq!(find_in(&snap, "?!"), MatchResult::NotFound);
    }

    #[test]
    fn unknown_query_is_not_found() {
        let snap = snapshot(vec![row("Kitap A", Some(150.0), &[])]);
        assert_eq!(find_in(&snap, "ansiklopedi"), MatchResult::NotFound);
    }

    #[test]
    fn message_with_stock_note() {
        assert_eq!(
            stock_message("Kitap A", "sınırlı stokta", 150.0),
            "'Kitap A' sınırlı stokta. Fiyatı 150 TL."
        );
    }

    #[test]
    fn message_without_stock_note_uses_default_phrase() {
        assert_eq!(
            stock_message("Defter", "", 35.5),
            "'Defter' ürün stoklarımızda mevcuttur. Fiyatı 35.5 TL."
        );
    }

    #[test]
    fn whole_prices_render_as_integers() {
        assert_eq!(format_price(150.0), "150");
        assert_eq!(format_price(150.5), "150.5");
        assert_eq!(format_price(0.0), "0");
    }
}
