//! The catalog bundled with the application.

use super::PlateCatalog;

const PROTANOPIA: &[u32] = &[2, 3, 5, 6, 7, 8, 12, 15, 16, 26, 29, 35, 42, 45, 57, 73, 74, 96, 97];
const DEUTERANOPIA: &[u32] = &[2, 3, 5, 6, 8, 9, 12, 15, 16, 26, 29, 35, 42, 45, 57, 74, 96];
const TRITANOPIA: &[u32] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 15, 16, 42, 56, 65];

/// Build the default catalog of protanopia, deuteranopia, and tritanopia
/// plates. Images live under `assets/plates/<type>/plate_<n>.png`.
pub(super) fn catalog() -> PlateCatalog {
    PlateCatalog::new()
        .with_type("protanopia", plates("protanopia", PROTANOPIA))
        .with_type("deuteranopia", plates("deuteranopia", DEUTERANOPIA))
        .with_type("tritanopia", plates("tritanopia", TRITANOPIA))
}

fn plates(kind: &'static str, numbers: &'static [u32]) -> impl Iterator<Item = (String, String)> {
    numbers.iter().map(move |n| {
        (
            format!("plate_{n}"),
            format!("assets/plates/{kind}/plate_{n}.png"),
        )
    })
}
