//! CSV output.
//!
//! One header row, then one data row per record in the order given. Rows have
//! a constant width: failure rows leave the metadata columns empty and fill
//! only Website and Error.

use std::path::Path;

use csv::Writer;
use log::info;

use crate::config::CSV_HEADER;
use crate::error_handling::OutputError;
use crate::models::{SiteOutcome, SiteRecord};

/// Separator used to join the collected links into one field.
const LINK_SEPARATOR: &str = ", ";

/// Writes all records to `path` and returns the number of data rows written.
///
/// The links column carries every collected link joined with `", "`; the csv
/// writer quotes the field since it contains the delimiter.
pub fn write_csv(records: &[SiteRecord], path: &Path) -> Result<usize, OutputError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for record in records {
        match &record.outcome {
            SiteOutcome::Success(summary) => writer.write_record([
                record.url.as_str(),
                summary.title.as_str(),
                summary.meta_description.as_str(),
                summary.paragraph_count.to_string().as_str(),
                summary.link_count().to_string().as_str(),
                summary.links.join(LINK_SEPARATOR).as_str(),
                "",
            ])?,
            SiteOutcome::Failure { error_message } => writer.write_record([
                record.url.as_str(),
                "",
                "",
                "",
                "",
                "",
                error_message.as_str(),
            ])?,
        }
    }

    writer.flush()?;
    info!("Data successfully saved to {}", path.display());
    Ok(records.len())
}
