use std::collections::BTreeMap;

use toko_model::{Audience, BookRow, Product};
use toko_transform::{is_excluded_book_id, parse_amount, parse_book_title, sanitize_id};

/// Legacy group id that marks teacher-edition stock.
const GROUP_GURU: i64 = 31;

/// Builds the product map from the `BUKU` master.
///
/// Legacy placeholder ids are dropped entirely; grade and publisher come out
/// of the title; stock is seeded to zero and owned by the store afterwards.
pub fn materialize_products(rows: &[BookRow]) -> BTreeMap<String, Product> {
    let mut products = BTreeMap::new();
    for row in rows {
        if row.id.is_empty() || is_excluded_book_id(&row.id) {
            continue;
        }
        let key = sanitize_id(&row.id);
        if key.is_empty() {
            continue;
        }
        let info = parse_book_title(&row.title);
        let audience = if parse_amount(&row.group_id) == GROUP_GURU {
            Audience::Guru
        } else {
            Audience::Siswa
        };
        products.insert(
            key,
            Product {
                title: row.title.clone(),
                price: parse_amount(&row.price),
                grade: info.grade,
                publisher: info.publisher,
                audience,
                stock: 0,
            },
        );
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, price: &str, group: &str) -> BookRow {
        BookRow {
            id: id.to_string(),
            title: title.to_string(),
            price: price.to_string(),
            group_id: group.to_string(),
        }
    }

    #[test]
    fn placeholder_ids_are_dropped() {
        let rows = vec![
            book("2254", "Placeholder", "0", "30"),
            book("2255", "Buku Nyata (Erlangga)", "10000", "30"),
        ];
        let products = materialize_products(&rows);
        assert_eq!(products.len(), 1);
        assert!(products.contains_key("2255"));
    }

    #[test]
    fn title_metadata_and_audience() {
        let rows = vec![
            book("3001", "Matematika Kelas VII (Erlangga)", "50000", "31"),
            book("3002", "IPA Kelas 8", "45000", "30"),
        ];
        let products = materialize_products(&rows);
        let teacher_edition = &products["3001"];
        assert_eq!(teacher_edition.grade, 7);
        assert_eq!(teacher_edition.publisher, "Erlangga");
        assert_eq!(teacher_edition.audience, Audience::Guru);
        let student_edition = &products["3002"];
        assert_eq!(student_edition.audience, Audience::Siswa);
        assert_eq!(student_edition.publisher, "BSE");
        assert_eq!(student_edition.stock, 0);
    }

    #[test]
    fn empty_ids_are_skipped() {
        let products = materialize_products(&[book("", "X", "1", "30")]);
        assert!(products.is_empty());
    }
}
