/// Gamemods related types.
pub mod mods;

/// Beatmap stat related types.
pub mod stats;
