//! Catalog loading and record filtering

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use super::satcat::SatCatResponse;
use crate::propagation::OrbitalElements;

/// A catalog entry that survived boundary validation
///
/// The consumer owns one of these per tracked object and feeds its
/// `elements` to the propagator every tick.
#[derive(Debug, Clone)]
pub struct TrackedSatellite {
    pub norad_cat_id: u32,
    pub name: String,
    pub elements: OrbitalElements,
}

/// Counts from one catalog load
#[derive(Debug, Default)]
pub struct CatalogStats {
    pub total_records: usize,
    pub tracked: usize,
    pub discarded: usize,
}

/// Load the satellite catalog feed from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<(Vec<TrackedSatellite>, CatalogStats)> {
    let path = path.as_ref();
    log::info!("Loading satellite catalog from {:?}", path);

    let file =
        File::open(path).with_context(|| format!("Failed to open catalog file: {:?}", path))?;

    let reader = BufReader::new(file);
    let response: SatCatResponse =
        serde_json::from_reader(reader).with_context(|| "Failed to parse catalog JSON")?;

    Ok(build_tracked(response))
}

/// Parse the satellite catalog feed from an in-memory JSON string
pub fn parse_catalog(json: &str) -> Result<(Vec<TrackedSatellite>, CatalogStats)> {
    let response: SatCatResponse =
        serde_json::from_str(json).with_context(|| "Failed to parse catalog JSON")?;

    Ok(build_tracked(response))
}

fn build_tracked(response: SatCatResponse) -> (Vec<TrackedSatellite>, CatalogStats) {
    let mut stats = CatalogStats {
        total_records: response.satcat_data.len(),
        ..Default::default()
    };

    let mut tracked = Vec::with_capacity(response.satcat_data.len());

    for record in &response.satcat_data {
        let (Some(norad_cat_id), Some(elements)) = (record.norad_id(), record.orbital_elements())
        else {
            log::trace!("Discarding incomplete record: {}", record.display_name());
            stats.discarded += 1;
            continue;
        };

        tracked.push(TrackedSatellite {
            norad_cat_id,
            name: record.display_name(),
            elements,
        });
    }

    stats.tracked = tracked.len();
    log::info!(
        "Catalog: {} records, {} tracked, {} discarded",
        stats.total_records,
        stats.tracked,
        stats.discarded
    );

    (tracked, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"{
        "satcat_data": [
            {
                "NORAD_CAT_ID": "25544",
                "OBJECT_NAME": "ISS (ZARYA)",
                "OBJECT_TYPE": "PAYLOAD",
                "COUNTRY": "ISS",
                "RCS_SIZE": "LARGE",
                "LAUNCH": "1998-11-20",
                "PERIOD": "92.9",
                "INCLINATION": "51.634",
                "APOGEE": "421",
                "PERIGEE": "416"
            },
            {
                "NORAD_CAT_ID": "900",
                "OBJECT_NAME": "NO TLE YET",
                "LAUNCH": "2024-03-01",
                "INCLINATION": "97.4",
                "APOGEE": "550",
                "PERIGEE": "540"
            },
            {
                "NORAD_CAT_ID": "901",
                "OBJECT_NAME": "DECAYING",
                "LAUNCH": "2010-06-15",
                "PERIOD": "87.1",
                "INCLINATION": "74.0",
                "APOGEE": "0",
                "PERIGEE": "0"
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog_keeps_only_complete_records() {
        let (tracked, stats) = parse_catalog(SAMPLE_FEED).unwrap();

        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.tracked, 1);
        assert_eq!(stats.discarded, 2);

        assert_eq!(tracked[0].norad_cat_id, 25544);
        assert_eq!(tracked[0].name, "ISS (ZARYA)");
        assert_eq!(tracked[0].elements.period_min, 92.9);
    }

    #[test]
    fn test_parse_catalog_rejects_malformed_json() {
        assert!(parse_catalog("{\"wrong_key\": []}").is_err());
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn test_empty_feed() {
        let (tracked, stats) = parse_catalog("{\"satcat_data\": []}").unwrap();
        assert!(tracked.is_empty());
        assert_eq!(stats.total_records, 0);
    }
}
