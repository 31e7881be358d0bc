/// Bitset of shape ids used in the compatibility graph
pub mod bitset;
/// Precomputed shape-to-shape compatibility per connector
pub mod connectivity;
/// Generation session and its seed, grow and close phases
pub mod executor;
/// Candidate enumeration and seeded random selection
pub mod selection;
/// Discard-and-retry driver and run summary
pub mod simulation;
/// Catalog scope and terminal lookup for one axis mode
pub mod topology;
/// Placement validity against neighbouring tiles
pub mod validity;
