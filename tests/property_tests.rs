//! Property-based tests for QuoteDesk API core functionality.
//!
//! These tests use proptest to verify invariants across a wide range of
//! inputs, helping to catch edge cases that unit tests might miss.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use proptest::prelude::*;
use quotedesk_api::services::quotation_numbers::quotation_number_for;
use quotedesk_api::services::quotation_queries::PaginationMeta;
use quotedesk_api::services::quotations::{CreateQuotationRequest, QuotationDetailInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use serde_json::json;
use validator::Validate;

// Strategies for generating test data
fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..86_400).prop_map(|(y, m, d, s)| {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date");
        let time = NaiveTime::from_num_seconds_from_midnight_opt(s, 0).expect("valid time of day");
        date.and_time(time)
    })
}

fn part_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,139}"
}

// Property: generated quotation numbers keep the date-seconds shape
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn quotation_numbers_keep_their_shape(instant in instant_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let number = quotation_number_for(instant, &mut rng);

        let shape = Regex::new(r"^\d{6}-\d{6}$").expect("valid regex");
        prop_assert!(shape.is_match(&number), "unexpected shape: {}", number);

        let (date_part, serial_part) = number.split_once('-').expect("dash separator");
        prop_assert_eq!(date_part, instant.format("%y%m%d").to_string());

        let seconds: u32 = serial_part[..5].parse().expect("numeric serial");
        prop_assert_eq!(seconds, instant.num_seconds_from_midnight());
        prop_assert!(seconds <= 86_399);
    }

    #[test]
    fn quotation_numbers_are_deterministic_per_seed(
        instant in instant_strategy(),
        seed in any::<u64>(),
    ) {
        let a = quotation_number_for(instant, &mut StdRng::seed_from_u64(seed));
        let b = quotation_number_for(instant, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}

// Property: pagination metadata stays internally consistent
proptest! {
    #[test]
    fn pagination_meta_is_internally_consistent(
        page in 1u64..10_000,
        page_size in 1u64..=200,
        total in 0u64..100_000,
    ) {
        let meta = PaginationMeta::new(page, page_size, total);

        prop_assert!(meta.total_pages * meta.page_size >= meta.total);
        if total == 0 {
            prop_assert_eq!(meta.total_pages, 0);
        } else {
            prop_assert!((meta.total_pages - 1) * page_size < total,
                "last page would be empty: {} pages of {} for {}",
                meta.total_pages, page_size, total);
        }
        prop_assert_eq!(meta.has_next, page < meta.total_pages);
        prop_assert_eq!(meta.has_prev, page > 1);
    }
}

// Property: request validation is consistent
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn printable_part_names_validate(name in part_name_strategy()) {
        let detail: QuotationDetailInput =
            serde_json::from_value(json!({ "part_name": name.clone() })).expect("detail json");
        prop_assert!(detail.validate().is_ok(), "part name rejected: {}", name);
    }

    #[test]
    fn oversized_quotation_numbers_fail_validation(number in "[0-9]{51,80}") {
        let request: CreateQuotationRequest = serde_json::from_value(json!({
            "quotation_number": number,
            "customer_name": "Acme Plastics",
        }))
        .expect("request json");
        prop_assert!(request.validate().is_err());
    }

    #[test]
    fn short_quotation_numbers_validate(number in "[0-9]{6}-[0-9]{6}") {
        let request: CreateQuotationRequest = serde_json::from_value(json!({
            "quotation_number": number,
            "customer_name": "Acme Plastics",
        }))
        .expect("request json");
        prop_assert!(request.validate().is_ok());
    }
}
