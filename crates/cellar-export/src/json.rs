//! JSON export of the generated layout.

use cellar_core::ExportError;
use cellar_layout::Cellar;

/// Serialize the generated racks, shelves, and items as pretty JSON.
pub fn export(cellar: &Cellar) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(cellar).map_err(|e| ExportError::Encode { reason: e.to_string() })?;
    log::info!("exported {} racks as JSON ({} bytes)", cellar.racks.len(), json.len());
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellar_core::CellarConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_json_round_trips_layout() {
        let cellar = cellar_layout::generate(&CellarConfig::default(), &mut Pcg64::seed_from_u64(677)).unwrap();
        let json = export(&cellar).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["racks"].as_array().map(Vec::len), Some(cellar.racks.len()));
        assert!((value["region"]["width"].as_f64().unwrap() - 1120.0).abs() < 1e-6);

        let back: Cellar = serde_json::from_str(&json).unwrap();
        assert_eq!(back.racks.len(), cellar.racks.len());
        assert_eq!(back.items().count(), cellar.items().count());
    }
}
