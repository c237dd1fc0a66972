//! Static outcome sort-rank table
//!
//! Maps lower-cased outcome code names to display ranks. Codes group into
//! families (1X2, double chance, totals, ...) whose members share a rank
//! scale; unrecognized codes rank strictly after every recognized code, so
//! unknown outcome types always sort last among siblings. Comparison is
//! case-insensitive only — underscores are not normalized.

/// Rank assigned to any code name missing from the table.
pub const UNRANKED: u32 = 1000;

/// Display rank for an outcome code name. Lower sorts first; ties keep
/// join order (the assembler sorts stably).
pub fn outcome_sort_rank(code_name: &str) -> u32 {
    match code_name.to_lowercase().as_str() {
        "yes" => 10,
        "no" => 20,

        "home" => 10,
        "draw" => 20,
        "none" => 21,
        "away" => 30,

        "home_draw" => 10,
        "home_away" => 20,
        "away_draw" => 30,

        "under" => 10,
        "over" => 20,

        "odd" => 10,
        "even" => 20,

        "exact" => 10,
        "range" => 20,
        "more_than" => 30,

        "in_90_minutes" => 10,
        "in_extra_time" => 20,
        "on_penalties" => 30,

        "home-true" => 10,
        "home-false" => 15,
        "-true" => 20,
        "-false" => 25,
        "away-true" => 30,
        "away-false" => 35,

        "home_draw-true" => 10,
        "home_draw-false" => 15,
        "home_away-true" => 20,
        "home_away-false" => 25,
        "away_draw-true" => 30,
        "away_draw-false" => 35,

        "under-true" => 10,
        "under-false" => 15,
        "over-true" => 20,
        "over-false" => 25,

        "odd-true" => 10,
        "odd-false" => 15,
        "even-true" => 20,
        "even-false" => 25,

        "yes-true" => 10,
        "yes-false" => 15,
        "no-true" => 20,
        "no-false" => 25,

        "true" => 10,
        "false" => 20,

        "h" => 10,
        "d" => 20,
        "a" => 30,

        _ => UNRANKED,
    }
}
