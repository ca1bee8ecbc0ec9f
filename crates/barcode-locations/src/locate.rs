//! Decode orchestration: raw engine symbols → located `Decoded` records.
//!
//! Each symbol is processed on its own: hull the locator points, then bound
//! the hull. No state is carried between symbols, so callers may split a batch
//! across threads freely.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geom::{bounding_box, convex_hull, GeomError, Point, Polygon, Rect};
use crate::symbol::{Orientation, RawSymbol, SymbolType};

/// What to do with a symbol whose locator list is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyLocations {
    /// Drop the symbol from the results.
    #[default]
    Skip,
    /// Fail the whole batch with `LocateError::EmptyLocations`.
    Error,
}

/// Orchestrator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateCfg {
    /// Report only these symbologies; `None` keeps everything.
    pub symbols: Option<Vec<SymbolType>>,
    pub empty_locations: EmptyLocations,
}

impl LocateCfg {
    #[inline]
    pub fn accepts(&self, symbol_type: SymbolType) -> bool {
        self.symbols
            .as_ref()
            .is_none_or(|wanted| wanted.contains(&symbol_type))
    }
}

/// A decoded symbol with its location in the image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub symbol_type: SymbolType,
    pub quality: i32,
    pub orientation: Orientation,
    /// Bounding box of `polygon`.
    pub rect: Rect<i32>,
    /// Convex hull of the locator points, starting at the lexicographic minimum.
    pub polygon: Polygon<i32>,
    /// Locator points exactly as the engine reported them.
    pub locations: Vec<Point<i32>>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("symbol #{index} ({symbol_type}) has no locator points")]
    EmptyLocations {
        index: usize,
        symbol_type: SymbolType,
    },
    #[error(transparent)]
    Geom(#[from] GeomError),
}

/// Locate a single symbol.
///
/// Fails with `LocateError::Geom(GeomError::EmptyPointSet)` when the engine
/// reported no locator points.
pub fn locate(raw: RawSymbol) -> Result<Decoded, LocateError> {
    let polygon = convex_hull(&raw.locations);
    let rect = bounding_box(&polygon)?;
    debug!(
        symbol_type = %raw.symbol_type,
        locations = raw.locations.len(),
        hull = polygon.len(),
        "located symbol"
    );
    Ok(Decoded {
        data: raw.data,
        symbol_type: raw.symbol_type,
        quality: raw.quality,
        orientation: raw.orientation,
        rect,
        polygon,
        locations: raw.locations,
    })
}

/// Locate every symbol of a batch, applying the symbology filter and the
/// empty-locator policy from `cfg`. Output keeps the engine's order.
pub fn locate_all<I>(symbols: I, cfg: &LocateCfg) -> Result<Vec<Decoded>, LocateError>
where
    I: IntoIterator<Item = RawSymbol>,
{
    let mut out = Vec::new();
    for (index, raw) in symbols.into_iter().enumerate() {
        if !cfg.accepts(raw.symbol_type) {
            trace!(index, symbol_type = %raw.symbol_type, "filtered out");
            continue;
        }
        if raw.locations.is_empty() {
            match cfg.empty_locations {
                EmptyLocations::Skip => {
                    trace!(index, symbol_type = %raw.symbol_type, "skipped: no locator points");
                    continue;
                }
                EmptyLocations::Error => {
                    return Err(LocateError::EmptyLocations {
                        index,
                        symbol_type: raw.symbol_type,
                    });
                }
            }
        }
        out.push(locate(raw)?);
    }
    debug!(located = out.len(), "batch done");
    Ok(out)
}
