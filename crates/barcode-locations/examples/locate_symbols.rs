//! Locate a few synthetic decoder outputs and print their geometry.
//!
//! Usage:
//!   cargo run -p barcode-locations --example locate_symbols
//!   cargo run -p barcode-locations --example locate_symbols -- symbols.json
//!
//! With a path, reads a JSON array of raw symbols instead of the built-in set.
//! Set RUST_LOG-style verbosity via the default `tracing` fmt subscriber.

use barcode_locations::io::load_symbols_json;
use barcode_locations::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn builtin_symbols() -> Vec<RawSymbol> {
    vec![
        RawSymbol::new(&b"Foramenifera"[..], SymbolType::Code128)
            .with_quality(77)
            .with_orientation(Orientation::Up)
            .with_locations((550..=626).map(|y| if y % 2 == 0 { (361, y) } else { (37, y) })),
        RawSymbol::new(&b"Thalassiodracon"[..], SymbolType::Qrcode)
            .with_quality(1)
            .with_locations([(190, 222), (46, 208), (32, 352), (177, 366)]),
        RawSymbol::new(&b"lost"[..], SymbolType::Ean13),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();
    let symbols = match std::env::args().nth(1) {
        Some(path) => load_symbols_json(path)?,
        None => builtin_symbols(),
    };
    for d in locate_all(symbols, &LocateCfg::default())? {
        let r = d.rect;
        println!(
            "{} {:?}: rect=({}, {}, {}x{}) polygon={:?}",
            d.symbol_type,
            String::from_utf8_lossy(&d.data),
            r.left,
            r.top,
            r.width,
            r.height,
            d.polygon.iter().map(|&p| <(i32, i32)>::from(p)).collect::<Vec<_>>()
        );
    }
    Ok(())
}
