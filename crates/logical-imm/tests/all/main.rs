use a64_logical_imm::LogicalImm;

mod exhaustive;
mod move_wide;

/// Every `(N, imms, immr)` triple of the 13-bit field.
pub fn all_encodings() -> impl Iterator<Item = (u8, u8, u8)> {
    (0..=1).flat_map(|n| (0..64).flat_map(move |imms| (0..64).map(move |immr| (n, imms, immr))))
}

/// The triples whose `immr` fits the element size, one per distinct value.
pub fn canonical_encodings() -> impl Iterator<Item = (u8, u8, u8)> {
    all_encodings().filter(|&(n, imms, immr)| {
        LogicalImm::new(n == 1, immr, imms).is_some_and(|imm| imm.is_canonical())
    })
}
