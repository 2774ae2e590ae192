//! Lazy CSV reader producing [`Product`] records.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Product;

use super::cleaning::{
    clean_count, clean_currency, clean_percentage, clean_rating, primary_category, DEFAULT_NAME,
};

/// Header names looked up in the CSV.
pub mod columns {
    pub const NAME: &str = "product_name";
    pub const CATEGORY: &str = "category";
    pub const DISCOUNTED_PRICE: &str = "discounted_price";
    pub const ACTUAL_PRICE: &str = "actual_price";
    pub const DISCOUNT_PERCENTAGE: &str = "discount_percentage";
    pub const RATING: &str = "rating";
    pub const RATING_COUNT: &str = "rating_count";
}

/// Position of each product column in the CSV header, if present.
#[derive(Debug, Clone, Default)]
struct ColumnMap {
    name: Option<usize>,
    category: Option<usize>,
    discounted_price: Option<usize>,
    actual_price: Option<usize>,
    discount_percentage: Option<usize>,
    rating: Option<usize>,
    rating_count: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        // Columns may come in any order; a leading BOM is ignored.
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        Self {
            name: find(columns::NAME),
            category: find(columns::CATEGORY),
            discounted_price: find(columns::DISCOUNTED_PRICE),
            actual_price: find(columns::ACTUAL_PRICE),
            discount_percentage: find(columns::DISCOUNT_PERCENTAGE),
            rating: find(columns::RATING),
            rating_count: find(columns::RATING_COUNT),
        }
    }

    fn product(&self, record: &StringRecord) -> Product {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i));
        Product {
            name: cell(self.name).unwrap_or(DEFAULT_NAME).to_owned(),
            category: primary_category(cell(self.category)),
            discounted_price: clean_currency(cell(self.discounted_price)),
            actual_price: clean_currency(cell(self.actual_price)),
            discount_percentage: clean_percentage(cell(self.discount_percentage)),
            rating: clean_rating(cell(self.rating)),
            rating_count: clean_count(cell(self.rating_count)),
        }
    }
}

/// Iterator over the products of a CSV source, one row per pull.
///
/// Rows are parsed lazily; nothing past the current row is read.
pub struct ProductRecords<R> {
    records: csv::StringRecordsIntoIter<R>,
    columns: ColumnMap,
    row: usize,
}

impl<R: Read> Iterator for ProductRecords<R> {
    type Item = IngestionResult<Product>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        // Report 1-based row numbers; the header is row 1.
        self.row += 1;
        Some(match result {
            Ok(record) => Ok(self.columns.product(&record)),
            Err(source) => Err(IngestionError::Csv {
                row: self.row,
                source,
            }),
        })
    }
}

/// Open a product CSV file for lazy reading.
///
/// Rules:
///
/// - The CSV must have headers.
/// - Columns are matched by name and may appear in any order.
/// - Missing columns fall back to defaults (`"Unknown"` name, `"Others"` category, zero numbers).
/// - Short rows are accepted; their missing cells are treated like missing columns.
pub fn read_products_from_path(path: impl AsRef<Path>) -> IngestionResult<ProductRecords<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IngestionError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => IngestionError::Io(e),
    })?;
    read_products_from_reader(reader_builder().from_reader(file))
}

/// Read products from an existing CSV reader. The header row is read immediately.
pub fn read_products_from_reader<R: Read>(
    mut rdr: csv::Reader<R>,
) -> IngestionResult<ProductRecords<R>> {
    let headers = rdr.headers()?.clone();
    Ok(ProductRecords {
        columns: ColumnMap::from_headers(&headers),
        records: rdr.into_records(),
        row: 1,
    })
}

/// The CSV reader configuration used for product files.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

#[cfg(test)]
mod tests {
    use super::{read_products_from_reader, reader_builder};
    use crate::error::IngestionError;

    const HEADER: &str =
        "product_name,category,discounted_price,actual_price,discount_percentage,rating,rating_count\n";

    #[test]
    fn parses_and_cleans_a_row() {
        let input = format!("{HEADER}Test Product,Electronics|Computers,₹100,₹200,50%,4.5,10\n");
        let products: Vec<_> = read_products_from_reader(reader_builder().from_reader(input.as_bytes()))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.name, "Test Product");
        assert_eq!(p.category, "Electronics");
        assert_eq!(p.discounted_price, 100.0);
        assert_eq!(p.actual_price, 200.0);
        assert_eq!(p.discount_percentage, 50.0);
        assert_eq!(p.rating, 4.5);
        assert_eq!(p.rating_count, 10);
    }

    #[test]
    fn missing_columns_fall_back_to_defaults() {
        let input = "rating,discounted_price\n4.1,\"₹1,299\"\n";
        let p = read_products_from_reader(reader_builder().from_reader(input.as_bytes()))
            .unwrap()
            .next()
            .unwrap()
            .unwrap();

        assert_eq!(p.name, "Unknown");
        assert_eq!(p.category, "Others");
        assert_eq!(p.discounted_price, 1299.0);
        assert_eq!(p.actual_price, 0.0);
        assert_eq!(p.rating, 4.1);
        assert_eq!(p.rating_count, 0);
    }

    #[test]
    fn header_only_input_is_empty() {
        let mut it = read_products_from_reader(reader_builder().from_reader(HEADER.as_bytes())).unwrap();
        assert!(it.next().is_none());
    }

    #[test]
    fn invalid_utf8_row_reports_row_number() {
        let mut bytes = HEADER.as_bytes().to_vec();
        bytes.extend_from_slice(b"Good,Cat,1,2,3%,4.0,5\n");
        bytes.extend_from_slice(b"Bad \xff,Cat,1,2,3%,4.0,5\n");
        let mut it = read_products_from_reader(reader_builder().from_reader(bytes.as_slice())).unwrap();

        assert_eq!(it.next().unwrap().unwrap().name, "Good");
        match it.next() {
            Some(Err(IngestionError::Csv { row, .. })) => assert_eq!(row, 3),
            other => panic!("expected csv error, got {other:?}"),
        }
    }
}
