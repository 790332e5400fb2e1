use crate::analyser::frame::frame_to_listings;
use crate::dataset::AnalysedListing;
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;
use std::path::Path;

/// Writes the analysed table as UTF-8 CSV with a header row and no index
/// column, replacing whatever is at `path`.
///
/// # Errors
///
/// Fails when the file cannot be created or written.
pub fn export_csv(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut frame = frame.clone();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut frame)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    log::info!(
        "Exported {} rows x {} columns to {}",
        frame.height(),
        frame.width(),
        path.display()
    );
    Ok(())
}

/// Reads an exported CSV back into a frame.
///
/// # Errors
///
/// Fails when the file is missing or not valid CSV.
pub fn load_frame(path: &Path) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(10_000))
        .finish()
        .and_then(LazyFrame::collect)
        .with_context(|| format!("Failed to read CSV from {}", path.display()))
}

/// Reads an exported CSV back into typed listings.
///
/// # Errors
///
/// Fails when the file cannot be read or a column does not coerce to its
/// listing field.
pub fn load_listings(path: &Path) -> Result<Vec<AnalysedListing>> {
    let frame = load_frame(path)?;
    frame_to_listings(&frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::{COLUMNS, clean_listings, derive_all, listings_to_frame};
    use crate::config::{CleaningFloors, JitterRanges};
    use crate::dataset::build_dataset;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    fn seeded_rows() -> Result<Vec<AnalysedListing>> {
        let mut rows = build_dataset(&mut StdRng::seed_from_u64(11), &JitterRanges::default(), 30)?;
        clean_listings(&mut rows, &CleaningFloors::default());
        derive_all(rows)
    }

    #[test]
    fn test_export_round_trip() -> Result<()> {
        let rows = seeded_rows()?;
        let dir = tempdir()?;
        let path = dir.path().join("round_trip.csv");

        export_csv(&listings_to_frame(&rows)?, &path)?;
        let back = load_listings(&path)?;

        assert_eq!(back.len(), rows.len());
        for (got, want) in back.iter().zip(&rows) {
            assert_eq!(got.listing, want.listing);
            assert_eq!(got.room_count, want.room_count);
            assert!(
                (got.price_per_m2 - want.price_per_m2).abs() < 1e-6,
                "{} vs {}",
                got.price_per_m2,
                want.price_per_m2
            );
        }
        Ok(())
    }

    #[test]
    fn test_export_has_header_and_no_index() -> Result<()> {
        let rows = seeded_rows()?;
        let dir = tempdir()?;
        let path = dir.path().join("header.csv");

        export_csv(&listings_to_frame(&rows)?, &path)?;
        let text = std::fs::read_to_string(&path)?;

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
        assert_eq!(lines.count(), 30);
        Ok(())
    }

    #[test]
    fn test_export_overwrites_existing_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("overwrite.csv");
        std::fs::write(&path, "stale contents that are much longer than one row\n".repeat(500))?;

        let rows = seeded_rows()?;
        export_csv(&listings_to_frame(rows.get(..2).unwrap_or_default())?, &path)?;
        let frame = load_frame(&path)?;

        assert_eq!(frame.height(), 2);
        assert_eq!(frame.width(), COLUMNS.len());
        Ok(())
    }

    #[test]
    fn test_export_to_missing_directory_fails() -> Result<()> {
        let frame = listings_to_frame(&seeded_rows()?)?;
        let dir = tempdir()?;
        let path = dir.path().join("no_such_dir").join("out.csv");
        assert!(export_csv(&frame, &path).is_err());
        Ok(())
    }

    #[test]
    fn test_zero_net_area_exports_inf_and_reloads() -> Result<()> {
        let mut rows = build_dataset(&mut StdRng::seed_from_u64(11), &JitterRanges::default(), 1)?;
        clean_listings(&mut rows, &CleaningFloors::default());
        for row in &mut rows {
            row.net_m2 = 0;
        }
        let rows = derive_all(rows)?;

        let dir = tempdir()?;
        let path = dir.path().join("zero_net.csv");
        export_csv(&listings_to_frame(&rows)?, &path)?;

        let text = std::fs::read_to_string(&path)?;
        let data_line = text.lines().nth(1).unwrap_or_default();
        assert_eq!(data_line.rsplit(',').next(), Some("inf"), "{text}");

        let back = load_listings(&path)?;
        assert_eq!(back.len(), 1);
        assert!(back.iter().all(|row| row.price_per_m2.is_infinite()));
        assert!(back.iter().all(|row| row.listing.net_m2 == 0));
        Ok(())
    }
}
