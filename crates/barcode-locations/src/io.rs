//! JSON configuration and report helpers.

use std::fs;
use std::path::Path;

use crate::locate::{Decoded, LocateCfg};
use crate::symbol::RawSymbol;

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Load a `LocateCfg` from a JSON file. Missing fields take their defaults.
pub fn load_cfg_json(path: impl AsRef<Path>) -> Result<LocateCfg, IoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load a batch of engine symbols dumped as a JSON array.
pub fn load_symbols_json(path: impl AsRef<Path>) -> Result<Vec<RawSymbol>, IoError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write located symbols as pretty JSON, creating parent directories as needed.
pub fn write_report_json(path: impl AsRef<Path>, decoded: &[Decoded]) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(decoded)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::{locate_all, EmptyLocations};
    use crate::symbol::SymbolType;
    use tempfile::tempdir;

    #[test]
    fn cfg_defaults_fill_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "symbols": ["QRCODE", "CODE128"] }"#).unwrap();
        let cfg = load_cfg_json(&path).unwrap();
        assert_eq!(
            cfg.symbols,
            Some(vec![SymbolType::Qrcode, SymbolType::Code128])
        );
        assert_eq!(cfg.empty_locations, EmptyLocations::Skip);
    }

    #[test]
    fn bad_cfg_reports_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "empty_locations": "explode" }"#).unwrap();
        assert!(matches!(load_cfg_json(&path), Err(IoError::Json(_))));
        assert!(matches!(
            load_cfg_json(dir.path().join("missing.json")),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn symbols_in_report_out() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("symbols.json");
        fs::write(
            &input,
            r#"[{
                "data": [81, 82],
                "symbol_type": "QRCODE",
                "quality": 1,
                "locations": [{"x": 27, "y": 27}, {"x": 27, "y": 172},
                              {"x": 172, "y": 172}, {"x": 172, "y": 27}]
            }]"#,
        )
        .unwrap();
        let symbols = load_symbols_json(&input).unwrap();
        let decoded = locate_all(symbols, &LocateCfg::default()).unwrap();

        let out = dir.path().join("nested/report.json");
        write_report_json(&out, &decoded).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed[0]["symbol_type"], "QRCODE");
        assert_eq!(parsed[0]["orientation"], "UNKNOWN");
        assert_eq!(parsed[0]["rect"]["width"], 145);
        assert_eq!(parsed[0]["polygon"][0]["x"], 27);
        assert_eq!(parsed[0]["polygon"].as_array().map(Vec::len), Some(4));
    }
}
