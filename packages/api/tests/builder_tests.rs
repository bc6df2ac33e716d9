//! Fluent builder tests
//!
//! Each builder chain is encoded for transport, decoded and parsed again,
//! the same path a filter takes from client to server.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use scim_filter::{
    CompareOperator, Filter, FilterClient, FilterError, FilterExpression, FilterResult, Literal,
    LogicalOperator,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Encode, decode and re-parse a built filter
fn through_transport(filter: &Filter) -> Filter {
    Filter::from_encoded(&filter.encoded()).expect("built filter must parse")
}

#[cfg(test)]
mod comparisons {
    use super::*;

    #[test]
    fn test_equal_to_string() -> FilterResult<()> {
        init_logging();
        let filter = FilterClient::builder()
            .equal_to("address.streetAddress", "7714 Sassafrass Way")?
            .build()?;

        assert_eq!(filter.encoded(), "address.streetAddress%20eq%20%227714%20Sassafrass%20Way%22");
        assert_eq!(through_transport(&filter), filter);
        Ok(())
    }

    #[test]
    fn test_equal_to_bool_and_null() -> FilterResult<()> {
        let active = FilterClient::builder().equal_to("address.active", true)?.build()?;
        assert_eq!(active.as_str(), "address.active eq true");

        let null = FilterClient::builder().equal_null("null.null")?.build()?;
        assert_eq!(null.as_str(), "null.null eq null");
        assert_eq!(through_transport(&null), null);
        Ok(())
    }

    #[test]
    fn test_numeric_operands() -> FilterResult<()> {
        let ints = [-1, -10, -111, 1, 12, 123, 1234, 12345, 123_456];
        for value in ints {
            let filter = FilterClient::builder().greater_than("dog.weight", value)?.build()?;
            assert_eq!(filter.as_str(), format!("dog.weight gt {value}"));
            assert_eq!(through_transport(&filter), filter);
        }

        let doubles = [0.14, 3.14, 2.1415, 3.14e10, 333.14];
        for value in doubles {
            let filter = FilterClient::builder()
                .greater_than_or_equals("dog.weight", value)?
                .build()?;
            let FilterExpression::Comparison { operator, value: literal, .. } =
                through_transport(&filter).into_expression()
            else {
                panic!("expected comparison");
            };
            assert_eq!(operator, CompareOperator::Ge);
            assert_eq!(literal, Literal::Number(value));
        }

        let float = FilterClient::builder().less_than("dog.weight", 3.14e10_f32)?.build()?;
        assert_eq!(through_transport(&float), float);
        Ok(())
    }

    #[test]
    fn test_date_operands() -> FilterResult<()> {
        let date = NaiveDate::from_ymd_opt(2016, 7, 4).unwrap();
        let filter = FilterClient::builder().less_than("date.date", date)?.build()?;
        assert_eq!(filter.as_str(), r#"date.date lt "2016-07-04""#);

        let local: NaiveDateTime = date.and_hms_opt(9, 30, 0).unwrap();
        let filter = FilterClient::builder().less_than_or_equals("date.date", local)?.build()?;
        assert_eq!(filter.as_str(), r#"date.date le "2016-07-04T09:30:00""#);

        let instant = Utc.with_ymd_and_hms(2011, 5, 13, 4, 42, 34).unwrap();
        let filter = FilterClient::builder()
            .greater_than("meta.lastModified", instant)?
            .build()?;
        assert_eq!(filter.as_str(), r#"meta.lastModified gt "2011-05-13T04:42:34Z""#);
        assert_eq!(through_transport(&filter), filter);
        Ok(())
    }

    #[test]
    fn test_string_operators() -> FilterResult<()> {
        let filter = FilterClient::builder()
            .starts_with("userName", "J")?
            .and()?
            .ends_with("emails.value", "@example.com")?
            .or()?
            .contains("title", "a+b")?
            .build()?;

        assert_eq!(
            filter.as_str(),
            r#"userName sw "J" and emails.value ew "@example.com" or title co "a+b""#
        );
        assert!(filter.encoded().contains("a%2Bb"));
        assert_eq!(through_transport(&filter), filter);
        Ok(())
    }
}

#[cfg(test)]
mod protocol {
    use super::*;

    #[test]
    fn test_two_leaves_without_connective() {
        let err = FilterClient::builder()
            .equal_to("a", "1")
            .and_then(|b| b.equal_to("b", "2"))
            .unwrap_err();
        assert!(matches!(err, FilterError::BuilderProtocol(_)));
    }

    #[test]
    fn test_leading_connective() {
        assert!(FilterClient::builder().or().unwrap_err().is_builder_protocol());
    }

    #[test]
    fn test_build_without_root() {
        assert!(FilterClient::builder().build().unwrap_err().is_builder_protocol());
    }

    #[test]
    fn test_build_with_dangling_connective() {
        let err = FilterClient::builder()
            .present("a")
            .and_then(|b| b.and())
            .and_then(|b| b.build())
            .unwrap_err();
        assert!(err.is_builder_protocol());
    }

    #[test]
    fn test_malformed_value_path_attribute() {
        let inner = FilterClient::builder().present("value").and_then(|b| b.build());
        let err = inner
            .and_then(|inner| FilterClient::builder().attribute_has("emails..bad", inner))
            .unwrap_err();
        assert!(err.is_syntax());
    }
}

#[cfg(test)]
mod precedence {
    use super::*;

    #[test]
    fn test_and_binds_tighter_than_or() -> FilterResult<()> {
        init_logging();
        let filter = FilterClient::builder()
            .debug()
            .equal_to("a", "1")?
            .and()?
            .equal_to("b", "2")?
            .or()?
            .equal_to("c", "3")?
            .build()?;

        assert_eq!(filter.as_str(), r#"a eq "1" and b eq "2" or c eq "3""#);
        assert_eq!(filter, Filter::parse(r#"a eq "1" and b eq "2" or c eq "3""#)?);
        Ok(())
    }

    #[test]
    fn test_and_after_or_binds_to_last_operand() -> FilterResult<()> {
        let filter = FilterClient::builder()
            .equal_to("a", "1")?
            .or()?
            .equal_to("b", "2")?
            .and()?
            .equal_to("c", "3")?
            .build()?;

        let FilterExpression::Logical { operator, right, .. } = filter.expression() else {
            panic!("expected logical root");
        };
        assert_eq!(*operator, LogicalOperator::Or);
        assert_eq!(right.logical_operator(), Some(LogicalOperator::And));
        assert_eq!(filter, Filter::parse(r#"a eq "1" or b eq "2" and c eq "3""#)?);
        Ok(())
    }

    #[test]
    fn test_nested_session_is_grouped() -> FilterResult<()> {
        let either = FilterClient::builder()
            .equal_to("b", "2")?
            .or()?
            .equal_to("c", "3")?
            .build()?;
        let filter = FilterClient::builder()
            .equal_to("a", "1")?
            .and_expr(either)?
            .build()?;

        assert_eq!(filter.as_str(), r#"a eq "1" and (b eq "2" or c eq "3")"#);
        Ok(())
    }
}

#[cfg(test)]
mod negation {
    use super::*;

    #[test]
    fn test_not_wraps_in_negated_group() -> FilterResult<()> {
        let both = FilterClient::builder()
            .equal_to("a", "1")?
            .and()?
            .equal_to("b", "2")?
            .build()?;
        let filter = FilterClient::builder().not(both)?.build()?;

        assert_eq!(filter.as_str(), r#"not (a eq "1" and b eq "2")"#);
        let FilterExpression::Group { negated, inner } = filter.expression() else {
            panic!("expected group");
        };
        assert!(*negated);
        assert_eq!(inner.logical_operator(), Some(LogicalOperator::And));
        Ok(())
    }

    #[test]
    fn test_not_after_leaf_needs_connective() {
        let err = FilterClient::builder()
            .present("a")
            .and_then(|b| b.not(FilterExpression::from(Filter::parse("b pr").unwrap())))
            .unwrap_err();
        assert!(err.is_builder_protocol());
    }
}
