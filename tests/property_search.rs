//! Property-based tests for search filtering and pagination.

use message_search::domain::models::{Message, Pagination};
use message_search::services::filter_messages;
use message_search::DomainError;
use proptest::prelude::*;

fn messages_strategy() -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(
        prop::option::weighted(0.9, "[a-zA-Z ]{0,12}"),
        0..60,
    )
    .prop_map(|texts| {
        texts
            .into_iter()
            .map(|text| Message {
                message: text,
                ..Message::default()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_result_contains_query(messages in messages_strategy(), query in "[a-zA-Z]{1,3}") {
        let needle = query.to_lowercase();
        for text in filter_messages(&messages, &query) {
            prop_assert!(text.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn total_counts_every_match(messages in messages_strategy(), query in "[a-z]{0,2}") {
        let needle = query.to_lowercase();
        let expected = messages
            .iter()
            .filter(|m| m.text().is_some_and(|t| t.to_lowercase().contains(&needle)))
            .count();
        prop_assert_eq!(filter_messages(&messages, &query).len(), expected);
    }

    #[test]
    fn pages_respect_math(total in 0usize..200, page in 1usize..30, page_size in 1usize..50) {
        let pagination = Pagination::new(page, page_size, 100).unwrap();
        let items: Vec<usize> = (0..total).collect();
        let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };

        match pagination.apply(items) {
            Ok(result) => {
                prop_assert_eq!(result.total, total);
                prop_assert_eq!(result.total_pages, total_pages);
                prop_assert!(result.results.len() <= page_size);
                let start = (page - 1) * page_size;
                if let Some(first) = result.results.first() {
                    prop_assert_eq!(*first, start);
                }
            }
            Err(err) => {
                prop_assert!(page > total_pages && total_pages > 0);
                prop_assert_eq!(err, DomainError::PageNotFound { page, total_pages });
            }
        }
    }
}
