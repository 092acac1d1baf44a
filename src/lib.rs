//! Library to resolve the stats of an [osu!] beatmap under any combination
//! of mods.
//!
//! ## Description
//!
//! Given a beatmap's drain rate, circle size, overall difficulty, and
//! approach rate, `rosu-mod-stats` applies mods and their settings to
//! derive everything that gameplay depends on: circle radius, preempt and
//! fade-in times, hit windows, spinner requirements, playback rate and
//! pitch, the rate-adjusted "real" AR and OD, score multiplier, and mod
//! strings.
//!
//! Calculations mirror osu!'s single-precision math so results match the
//! game down to the last digits.
//!
//! ## Usage
//!
//! ```
//! use rosu_mod_stats::{model::mods::ModInfo, Difficulty, GameMods};
//!
//! // drain rate, circle size, overall difficulty, approach rate
//! let mut diff = Difficulty::new(5.0, 4.0, 8.0, 9.0);
//!
//! // HDHR
//! diff.set_mods(GameMods::HIDDEN | GameMods::HARD_ROCK);
//!
//! assert_eq!(diff.ar(), 10.0);
//! assert_eq!(diff.preempt(), 450.0);
//! assert_eq!(diff.mod_string(), "HDHR");
//!
//! // Mods of an osu!lazer score including their settings
//! diff.import_mods(&[
//!     ModInfo::new("HD"),
//!     ModInfo::new("DT").with_setting("speed_change", 1.35),
//! ]);
//!
//! assert_eq!(diff.speed(), 1.35);
//! assert!((diff.modified_time(1350.0) - 1000.0).abs() < 1e-9);
//! assert_eq!(diff.mod_string(), "HDDTS1.35x");
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `tracing` feature |
//! | `tracing` | Rejected mod settings, skipped mods, and recalculations are logged through `tracing`. If this feature is not enabled, nothing will be logged. | [`tracing`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    difficulty::Difficulty,
    model::{mods::GameMods, stats::BeatmapStats},
};

/// Types to resolve stats, timings, and scoring of mods.
pub mod difficulty;

/// Types used in and around this crate.
pub mod model;

mod util;
