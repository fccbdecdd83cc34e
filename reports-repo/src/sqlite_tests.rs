//! SQLite store integration tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use reports_types::{Month, Transaction, TransactionId, TransactionStore};

    use crate::SqliteStore;

    async fn setup_store() -> SqliteStore {
        SqliteStore::new("sqlite::memory:").await.unwrap()
    }

    fn record(title: &str, month: u32, price: f64, sold: bool, category: &str) -> Transaction {
        Transaction::from_parts(
            TransactionId::new(),
            title.to_string(),
            format!("description of {}", title),
            price,
            Utc.with_ymd_and_hms(2022, month, 15, 12, 0, 0).unwrap(),
            category.to_string(),
            sold,
            "https://example.com/img.png".to_string(),
        )
    }

    #[tokio::test]
    async fn test_replace_all_reports_inserted_count() {
        let store = setup_store().await;

        let inserted = store
            .replace_all(vec![
                record("Laptop", 3, 150.0, true, "electronics"),
                record("Mug", 4, 12.5, false, "kitchen"),
            ])
            .await
            .unwrap();

        assert_eq!(inserted, 2);
    }

    #[tokio::test]
    async fn test_replace_all_wipes_previous_records() {
        let store = setup_store().await;

        store
            .replace_all(vec![record("Old", 3, 10.0, true, "a")])
            .await
            .unwrap();
        store
            .replace_all(vec![record("New", 3, 20.0, true, "a")])
            .await
            .unwrap();

        let rows = store.find_page(Month::March, "", 0, 10).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "New");
    }

    #[tokio::test]
    async fn test_find_page_filters_by_sale_month() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("March sale", 3, 50.0, true, "a"),
                record("April sale", 4, 50.0, true, "a"),
            ])
            .await
            .unwrap();

        let march = store.find_page(Month::March, "", 0, 10).await.unwrap();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].title, "March sale");

        let may = store.find_page(Month::May, "", 0, 10).await.unwrap();
        assert!(may.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_and_description_case_insensitively() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("Leather Jacket", 3, 80.0, true, "clothing"),
                record("Mug", 3, 12.0, true, "kitchen"),
            ])
            .await
            .unwrap();

        // Title substring, different case.
        let hits = store.count_matching(Month::March, "JACKET").await.unwrap();
        assert_eq!(hits, 1);

        // Description substring ("description of Mug").
        let hits = store.count_matching(Month::March, "of mug").await.unwrap();
        assert_eq!(hits, 1);

        let hits = store.count_matching(Month::March, "boots").await.unwrap();
        assert_eq!(hits, 0);
    }

    #[tokio::test]
    async fn test_numeric_search_widens_to_exact_price() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("Widget", 3, 150.0, true, "a"),
                record("Gadget", 3, 150.5, true, "a"),
            ])
            .await
            .unwrap();

        // Neither title nor description contains "150"; only the exact
        // price match fires.
        let hits = store.count_matching(Month::March, "150").await.unwrap();
        assert_eq!(hits, 1);

        let page = store.find_page(Month::March, "150", 0, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "Widget");
    }

    #[tokio::test]
    async fn test_blank_search_matches_whole_month() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("A", 3, 1.0, true, "x"),
                record("B", 3, 2.0, true, "x"),
            ])
            .await
            .unwrap();

        assert_eq!(store.count_matching(Month::March, "").await.unwrap(), 2);
        // Whitespace-only search must not be treated as numeric.
        assert_eq!(store.count_matching(Month::March, "  ").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_count_is_independent_of_paging() {
        let store = setup_store().await;

        let records = (0..25)
            .map(|i| record(&format!("Item {}", i), 3, i as f64, true, "bulk"))
            .collect();
        store.replace_all(records).await.unwrap();

        let total = store.count_matching(Month::March, "").await.unwrap();
        assert_eq!(total, 25);

        let page = store.find_page(Month::March, "", 10, 10).await.unwrap();
        assert_eq!(page.len(), 10);

        let last = store.find_page(Month::March, "", 20, 10).await.unwrap();
        assert_eq!(last.len(), 5);
    }

    #[tokio::test]
    async fn test_sales_total_is_zero_for_empty_month() {
        let store = setup_store().await;

        store
            .replace_all(vec![record("A", 3, 99.0, true, "x")])
            .await
            .unwrap();

        assert_eq!(store.sales_total(Month::June).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_count_by_sold_partitions_the_month() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("A", 3, 10.0, true, "x"),
                record("B", 3, 20.0, true, "x"),
                record("C", 3, 30.0, false, "x"),
                record("D", 4, 40.0, false, "x"),
            ])
            .await
            .unwrap();

        let sold = store.count_by_sold(Month::March, true).await.unwrap();
        let not_sold = store.count_by_sold(Month::March, false).await.unwrap();

        assert_eq!(sold, 2);
        assert_eq!(not_sold, 1);
        assert_eq!(
            sold + not_sold,
            store.count_matching(Month::March, "").await.unwrap()
        );
    }

    #[tokio::test]
    async fn test_price_range_bounds_are_inclusive() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("Low", 3, 101.0, true, "x"),
                record("High", 3, 200.0, true, "x"),
                record("Out", 3, 200.01, true, "x"),
            ])
            .await
            .unwrap();

        let count = store
            .count_in_price_range(Month::March, 101.0, Some(200.0))
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_price_range_unbounded_above() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("Cheap", 3, 50.0, true, "x"),
                record("Pricey", 3, 901.0, true, "x"),
                record("Luxury", 3, 5000.0, true, "x"),
            ])
            .await
            .unwrap();

        let count = store
            .count_in_price_range(Month::March, 901.0, None)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_count_by_category_groups_the_month() {
        let store = setup_store().await;

        store
            .replace_all(vec![
                record("A", 3, 1.0, true, "electronics"),
                record("B", 3, 2.0, true, "electronics"),
                record("C", 3, 3.0, true, "kitchen"),
                record("D", 7, 4.0, true, "kitchen"),
            ])
            .await
            .unwrap();

        let mut counts = store.count_by_category(Month::March).await.unwrap();
        counts.sort_by(|a, b| a.category.cmp(&b.category));

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "electronics");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, "kitchen");
        assert_eq!(counts[1].count, 1);

        let total: i64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, store.count_matching(Month::March, "").await.unwrap());
    }

    #[tokio::test]
    async fn test_march_scenario() {
        // One March record priced 150, sold, category "A".
        let store = setup_store().await;
        store
            .replace_all(vec![record("Sample", 3, 150.0, true, "A")])
            .await
            .unwrap();

        assert_eq!(store.sales_total(Month::March).await.unwrap(), 150.0);
        assert_eq!(store.count_by_sold(Month::March, true).await.unwrap(), 1);
        assert_eq!(store.count_by_sold(Month::March, false).await.unwrap(), 0);
        assert_eq!(
            store
                .count_in_price_range(Month::March, 101.0, Some(200.0))
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            store
                .count_in_price_range(Month::March, 201.0, Some(300.0))
                .await
                .unwrap(),
            0
        );

        let categories = store.count_by_category(Month::March).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].category, "A");
        assert_eq!(categories[0].count, 1);
    }
}
