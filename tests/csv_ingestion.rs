use std::io::Cursor;

use sales_stream::ingestion::csv::{read_products_from_path, read_products_from_reader, reader_builder};
use sales_stream::ingestion::{open_products, CsvProductSource, IngestionOptions};
use sales_stream::processing::{Stream, StreamSource};
use sales_stream::{IngestionError, StreamError};

const FIXTURE: &str = "tests/fixtures/products.csv";

#[test]
fn read_products_from_path_happy_path() {
    let products: Vec<_> = read_products_from_path(FIXTURE)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(products.len(), 10);
    let first = &products[0];
    assert_eq!(first.name, "Wayona Nylon Braided USB Cable");
    assert_eq!(first.category, "Computers&Accessories");
    assert_eq!(first.discounted_price, 399.0);
    assert_eq!(first.actual_price, 1099.0);
    assert_eq!(first.discount_percentage, 64.0);
    assert_eq!(first.rating, 4.2);
    assert_eq!(first.rating_count, 24269);
    assert_eq!(first.savings(), 700.0);
}

#[test]
fn dirty_fields_are_cleaned_to_zero_or_first_segment() {
    let products: Vec<_> = read_products_from_path(FIXTURE)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let clock = products.iter().find(|p| p.name == "Amazon Basics Wall Clock").unwrap();
    assert_eq!(clock.rating, 4.0);
    assert_eq!(clock.rating_count, 992);

    let stand = products.iter().find(|p| p.name == "Generic Phone Stand").unwrap();
    assert_eq!(stand.rating, 0.0);
    assert_eq!(stand.rating_count, 0);
}

#[test]
fn reordered_and_extra_columns_are_accepted() {
    let input = "rating,extra,product_name,category\n4.4,zzz,Kettle,Home&Kitchen|Kettles\n";
    let p = read_products_from_reader(reader_builder().from_reader(input.as_bytes()))
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(p.name, "Kettle");
    assert_eq!(p.category, "Home&Kitchen");
    assert_eq!(p.rating, 4.4);
    assert_eq!(p.discounted_price, 0.0);
}

#[test]
fn missing_file_is_an_error_by_default() {
    let err = open_products("tests/fixtures/does_not_exist.csv", &IngestionOptions::default()).unwrap_err();
    assert!(matches!(err, IngestionError::MissingSource { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn missing_file_can_be_treated_as_empty() {
    let opts = IngestionOptions {
        allow_missing: true,
        ..Default::default()
    };
    let source = CsvProductSource::with_options("tests/fixtures/does_not_exist.csv", opts);

    let total = source
        .open()
        .unwrap()
        .map(|p| p.discounted_price)
        .reduce(0.0, |a, x| a + x)
        .unwrap();
    assert_eq!(total, 0.0);
    assert!(source.open().unwrap().group_by(|p| p.category.clone()).unwrap().is_empty());
    assert!(source.open().unwrap().collect().unwrap().is_empty());
}

#[test]
fn each_open_yields_an_independent_stream() {
    let source = CsvProductSource::new(FIXTURE);
    let mut first = source.open().unwrap();
    let mut second = source.open().unwrap();

    assert_eq!(first.collect().unwrap().len(), 10);
    assert!(first.collect().unwrap_err().is_exhausted());
    assert_eq!(second.collect().unwrap().len(), 10);
}

#[test]
fn row_error_surfaces_through_the_stream_without_reading_ahead() {
    let mut bytes = b"product_name,rating\n".to_vec();
    bytes.extend_from_slice(b"Fine,4.0\n");
    bytes.extend_from_slice(b"Broken \xfe,4.0\n");
    bytes.extend_from_slice(b"Never read,4.0\n");

    let records = read_products_from_reader(reader_builder().from_reader(Cursor::new(bytes))).unwrap();
    let mut seen = Vec::new();
    let err = Stream::from_results(records)
        .map(|p| p.name)
        .reduce((), |_, name| seen.push(name))
        .unwrap_err();

    assert!(matches!(err, StreamError::Ingestion(IngestionError::Csv { row: 3, .. })));
    assert_eq!(seen, vec!["Fine".to_string()]);
}
