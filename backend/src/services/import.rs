//! Spreadsheet ingestion: CSV uploads mapped onto product rows through the
//! shared column-alias resolution.

use shared::import::{map_record, resolve_columns, ImportedProduct};

use crate::error::{AppError, AppResult};

/// Parse an uploaded CSV file into product rows.
///
/// The header row is resolved against the accepted alias lists once; rows
/// without a product name are skipped.
pub fn parse_csv(bytes: &[u8]) -> AppResult<Vec<ImportedProduct>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = resolve_columns(&headers).map_err(|e| AppError::ImportError(e.to_string()))?;

    let mut products = Vec::new();
    for result in reader.records() {
        let record = result?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        if let Some(product) = map_record(&columns, &fields) {
            products.push(product);
        }
    }

    if products.is_empty() {
        return Err(AppError::ImportError(
            "No product data found in file".to_string(),
        ));
    }

    Ok(products)
}
