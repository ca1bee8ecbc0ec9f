//! Locator geometry for decoded barcodes.
//!
//! A barcode decoder reports, per symbol, a payload, a symbology tag, a quality
//! score, an orientation, and a list of raw scan-line locator points. This
//! crate turns those points into a stable convex polygon and an axis-aligned
//! bounding box.
//!
//! Layout
//! - `geom`: `convex_hull`, `bounding_box`, and the `Point`/`Rect` value types.
//! - `symbol`: the engine-facing record (`RawSymbol`, `SymbolType`, `Orientation`).
//! - `locate`: per-symbol orchestration with filtering and empty-locator policy.
//! - `io`: JSON config loading and report writing.
//!
//! Decoding itself, native library bindings, and pixel handling live outside.

pub mod geom;
pub mod io;
pub mod locate;
pub mod symbol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{bounding_box, convex_hull, GeomError, Point, Polygon, Rect};
pub use locate::{locate, locate_all, Decoded, LocateCfg, LocateError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{bounding_box, convex_hull, Coord, GeomError, Point, Polygon, Rect};
    pub use crate::locate::{locate, locate_all, Decoded, EmptyLocations, LocateCfg, LocateError};
    pub use crate::symbol::{Orientation, RawSymbol, SymbolType};
}
