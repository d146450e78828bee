//! Static opening repertoires.
//!
//! Keys are space-joined UCI move sequences from the start position. The
//! weighted table carries several candidates per position in four weight
//! tiers; the deterministic table carries a single-line repertoire (Italian
//! for white, Caro-Kann and Semi-Slav for black).

pub struct BookCandidate {
    pub uci: &'static str,
    pub weight: i32,
}

const fn c(uci: &'static str, weight: i32) -> BookCandidate {
    BookCandidate { uci, weight }
}

/// Main repertoire line.
pub const MAIN_LINE: i32 = 100;
/// Solid alternative.
pub const GOOD_ALT: i32 = 70;
/// Playable but not preferred.
pub const PLAYABLE: i32 = 40;
/// Occasional surprise weapon.
pub const SURPRISE: i32 = 20;

pub static WEIGHTED: &[(&str, &[BookCandidate])] = &[
    ("", &[c("e2e4", MAIN_LINE)]),
    // 1.e4 replies
    (
        "e2e4",
        &[
            c("c7c5", PLAYABLE),
            c("e7e5", PLAYABLE),
            c("c7c6", GOOD_ALT),
            c("e7e6", PLAYABLE),
            c("g7g6", SURPRISE),
        ],
    ),
    // Caro-Kann
    (
        "e2e4 c7c6",
        &[c("d2d4", MAIN_LINE), c("b1c3", GOOD_ALT), c("g1f3", PLAYABLE)],
    ),
    ("e2e4 c7c6 d2d4", &[c("d7d5", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5",
        &[c("b1c3", MAIN_LINE), c("e4e5", GOOD_ALT)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5",
        &[c("c8f5", MAIN_LINE), c("c8g4", GOOD_ALT)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8f5",
        &[c("f1e2", MAIN_LINE), c("b1d2", GOOD_ALT), c("g1f3", PLAYABLE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 f1e2",
        &[c("e7e6", MAIN_LINE), c("g8f6", GOOD_ALT), c("h7h5", PLAYABLE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 f1e2 e7e6",
        &[c("g1f3", MAIN_LINE), c("h2h4", GOOD_ALT)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8g4",
        &[c("f1e2", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 e4e5 c8g4 f1e2", &[c("g4e2", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8g4 f1e2 g4e2",
        &[c("d1e2", MAIN_LINE), c("g1e2", PLAYABLE)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 b1c3", &[c("d5e4", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 b1c3 d5e4", &[c("c3e4", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4",
        &[c("c8f5", MAIN_LINE), c("g8f6", GOOD_ALT)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 e4d5", &[c("c6d5", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 e4d5 c6d5",
        &[c("c2c4", MAIN_LINE), c("b1c3", GOOD_ALT)],
    ),
    // Sicilian
    (
        "e2e4 c7c5",
        &[c("g1f3", MAIN_LINE), c("c2c3", GOOD_ALT), c("b1c3", PLAYABLE)],
    ),
    (
        "e2e4 c7c5 c2c3",
        &[c("d7d5", MAIN_LINE), c("g8f6", GOOD_ALT), c("b8c6", PLAYABLE)],
    ),
    (
        "e2e4 c7c5 c2c3 d7d5",
        &[c("e4d5", MAIN_LINE), c("e4e5", PLAYABLE)],
    ),
    ("e2e4 c7c5 c2c3 d7d5 e4d5", &[c("d8d5", MAIN_LINE)]),
    (
        "e2e4 c7c5 c2c3 d7d5 e4d5 d8d5",
        &[c("d2d4", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    ("e2e4 c7c5 c2c3 g8f6", &[c("e4e5", MAIN_LINE)]),
    ("e2e4 c7c5 c2c3 g8f6 e4e5", &[c("f6d5", MAIN_LINE)]),
    (
        "e2e4 c7c5 c2c3 g8f6 e4e5 f6d5",
        &[c("d2d4", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    (
        "e2e4 c7c5 g1f3",
        &[c("d7d6", MAIN_LINE), c("b8c6", GOOD_ALT), c("e7e6", PLAYABLE)],
    ),
    (
        "e2e4 c7c5 g1f3 d7d6",
        &[c("d2d4", MAIN_LINE), c("f1b5", PLAYABLE)],
    ),
    (
        "e2e4 c7c5 g1f3 b8c6",
        &[c("d2d4", MAIN_LINE), c("f1b5", GOOD_ALT)],
    ),
    // French
    ("e2e4 e7e6", &[c("d2d4", MAIN_LINE), c("g1f3", PLAYABLE)]),
    ("e2e4 e7e6 d2d4", &[c("d7d5", MAIN_LINE)]),
    (
        "e2e4 e7e6 d2d4 d7d5",
        &[c("b1c3", MAIN_LINE), c("e4e5", GOOD_ALT), c("e4d5", PLAYABLE)],
    ),
    ("e2e4 e7e6 d2d4 d7d5 e4e5", &[c("c7c5", MAIN_LINE)]),
    (
        "e2e4 e7e6 d2d4 d7d5 e4e5 c7c5",
        &[c("c2c3", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    (
        "e2e4 e7e6 d2d4 d7d5 e4e5 c7c5 c2c3",
        &[c("b8c6", MAIN_LINE), c("d8b6", GOOD_ALT)],
    ),
    (
        "e2e4 e7e6 d2d4 d7d5 b1c3",
        &[c("g8f6", MAIN_LINE), c("f8b4", GOOD_ALT), c("d5e4", PLAYABLE)],
    ),
    // 1...e5: Italian and Ruy Lopez
    ("e2e4 e7e5", &[c("g1f3", MAIN_LINE)]),
    (
        "e2e4 e7e5 g1f3",
        &[c("b8c6", MAIN_LINE), c("g8f6", PLAYABLE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6",
        &[c("f1c4", MAIN_LINE), c("f1b5", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4",
        &[c("g8f6", MAIN_LINE), c("f8c5", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5",
        &[c("c2c3", MAIN_LINE), c("d2d3", GOOD_ALT), c("b2b4", SURPRISE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3",
        &[c("g8f6", MAIN_LINE), c("d8e7", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6",
        &[c("d2d4", MAIN_LINE), c("d2d3", PLAYABLE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 d2d3",
        &[c("g8f6", MAIN_LINE), c("d7d6", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6",
        &[c("d2d3", MAIN_LINE), c("d2d4", GOOD_ALT), c("e1g1", PLAYABLE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3",
        &[c("f8c5", MAIN_LINE), c("f8e7", GOOD_ALT), c("h7h6", PLAYABLE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5",
        &[c("c2c3", MAIN_LINE), c("e1g1", GOOD_ALT)],
    ),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d4", &[c("e5d4", MAIN_LINE)]),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d4 e5d4",
        &[c("e1g1", MAIN_LINE), c("f3d4", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1b5",
        &[c("a7a6", MAIN_LINE), c("g8f6", GOOD_ALT)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1b5 a7a6",
        &[c("b5a4", MAIN_LINE), c("b5c6", PLAYABLE)],
    ),
    (
        "e2e4 e7e5 g1f3 g8f6",
        &[c("f3e5", MAIN_LINE), c("d2d4", PLAYABLE)],
    ),
    // 1.d4
    ("d2d4", &[c("d7d5", MAIN_LINE), c("g8f6", GOOD_ALT)]),
    (
        "d2d4 d7d5",
        &[c("c2c4", MAIN_LINE), c("g1f3", GOOD_ALT), c("c1f4", PLAYABLE)],
    ),
    (
        "d2d4 d7d5 c2c4",
        &[c("e7e6", MAIN_LINE), c("c7c6", GOOD_ALT), c("g8f6", PLAYABLE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6",
        &[c("b1c3", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3",
        &[c("g8f6", MAIN_LINE), c("f8e7", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6",
        &[c("g1f3", MAIN_LINE), c("c1g5", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3",
        &[c("c7c6", MAIN_LINE), c("f8e7", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6",
        &[c("e2e3", MAIN_LINE), c("c1g5", GOOD_ALT), c("c4d5", PLAYABLE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3",
        &[c("b8d7", MAIN_LINE), c("a7a6", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 f8e7",
        &[c("c1f4", MAIN_LINE), c("c1g5", GOOD_ALT)],
    ),
    // Slav
    (
        "d2d4 d7d5 c2c4 c7c6",
        &[c("b1c3", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 c7c6 b1c3",
        &[c("g8f6", MAIN_LINE), c("d5c4", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 c2c4 c7c6 b1c3 g8f6",
        &[c("g1f3", MAIN_LINE), c("e2e3", GOOD_ALT)],
    ),
    // Indian defenses
    (
        "d2d4 g8f6",
        &[c("c2c4", MAIN_LINE), c("g1f3", GOOD_ALT), c("c1f4", PLAYABLE)],
    ),
    (
        "d2d4 g8f6 c2c4",
        &[c("e7e6", MAIN_LINE), c("g7g6", GOOD_ALT), c("e7e5", PLAYABLE)],
    ),
    (
        "d2d4 g8f6 c2c4 e7e6",
        &[c("g1f3", MAIN_LINE), c("b1c3", GOOD_ALT)],
    ),
    (
        "d2d4 g8f6 c2c4 e7e6 g1f3",
        &[c("d7d5", MAIN_LINE), c("f8b4", GOOD_ALT)],
    ),
    (
        "d2d4 g8f6 c2c4 e7e6 g1f3 d7d5",
        &[c("b1c3", MAIN_LINE), c("c1g5", GOOD_ALT)],
    ),
    (
        "d2d4 g8f6 c2c4 e7e6 b1c3",
        &[c("f8b4", MAIN_LINE), c("d7d5", GOOD_ALT)],
    ),
    // London setups
    ("d2d4 d7d5 g1f3", &[c("g8f6", MAIN_LINE), c("c7c6", GOOD_ALT)]),
    (
        "d2d4 d7d5 g1f3 g8f6",
        &[c("c1f4", MAIN_LINE), c("c2c4", GOOD_ALT)],
    ),
    (
        "d2d4 d7d5 g1f3 g8f6 c1f4",
        &[c("c7c5", MAIN_LINE), c("e7e6", GOOD_ALT), c("c8f5", PLAYABLE)],
    ),
    (
        "d2d4 g8f6 c1f4",
        &[c("d7d5", MAIN_LINE), c("e7e6", GOOD_ALT), c("c7c5", PLAYABLE)],
    ),
    (
        "d2d4 g8f6 g1f3",
        &[c("d7d5", MAIN_LINE), c("e7e6", GOOD_ALT), c("g7g6", PLAYABLE)],
    ),
    // English
    (
        "c2c4",
        &[c("e7e5", MAIN_LINE), c("g8f6", GOOD_ALT), c("c7c5", PLAYABLE)],
    ),
    ("c2c4 e7e5", &[c("g1f3", MAIN_LINE), c("b1c3", GOOD_ALT)]),
    ("c2c4 e7e5 g1f3", &[c("b8c6", MAIN_LINE), c("g8f6", GOOD_ALT)]),
    ("c2c4 e7e5 b1c3", &[c("g8f6", MAIN_LINE), c("b8c6", GOOD_ALT)]),
    ("c2c4 e7e6", &[c("d2d4", MAIN_LINE), c("g1f3", GOOD_ALT)]),
    ("c2c4 e7e6 d2d4", &[c("d7d5", MAIN_LINE)]),
    (
        "c2c4 e7e6 d2d4 d7d5",
        &[c("b1c3", MAIN_LINE), c("g1f3", GOOD_ALT)],
    ),
    // Réti
    (
        "g1f3",
        &[c("d7d5", MAIN_LINE), c("g8f6", GOOD_ALT), c("c7c5", PLAYABLE)],
    ),
    ("g1f3 d7d5", &[c("d2d4", MAIN_LINE), c("c2c4", GOOD_ALT)]),
    ("g1f3 g8f6", &[c("d2d4", MAIN_LINE), c("c2c4", GOOD_ALT)]),
    ("g1f3 d7d5 d2d4", &[c("g8f6", MAIN_LINE), c("e7e6", GOOD_ALT)]),
    (
        "g1f3 d7d5 d2d4 g8f6",
        &[c("c2c4", MAIN_LINE), c("e2e3", GOOD_ALT)],
    ),
];

/// Single-line repertoire: always one candidate per key; the earliest entry
/// wins when a sequence could be reached through both repertoire halves.
pub static DETERMINISTIC: &[(&str, &[BookCandidate])] = &[
    ("", &[c("e2e4", MAIN_LINE)]),
    // White repertoire: Italian against 1...e5, plus sidelines.
    ("e2e4", &[c("e7e5", MAIN_LINE)]),
    ("e2e4 c7c5", &[c("g1f3", MAIN_LINE)]),
    ("e2e4 c7c6", &[c("d2d4", MAIN_LINE)]),
    ("e2e4 e7e6", &[c("d2d4", MAIN_LINE)]),
    ("e2e4 d7d5", &[c("e4d5", MAIN_LINE)]),
    ("e2e4 g8f6", &[c("e4e5", MAIN_LINE)]),
    ("e2e4 g7g6", &[c("d2d4", MAIN_LINE)]),
    ("e2e4 e7e5", &[c("g1f3", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3", &[c("b8c6", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 g8f6", &[c("f3e5", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6", &[c("f1c4", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4", &[c("f8c5", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 f8c5", &[c("c2c3", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3", &[c("g8f6", MAIN_LINE)]),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6",
        &[c("d2d4", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4",
        &[c("e5d4", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4",
        &[c("c3d4", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4",
        &[c("c5b4", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4 c5b4",
        &[c("b1c3", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4 c5b4 b1c3",
        &[c("f6e4", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4 c5b4 b1c3 f6e4",
        &[c("e1g1", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4 c5b4 b1c3 f6e4 e1g1",
        &[c("b4c3", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 g8f6 d2d4 e5d4 c3d4 c5b4 b1c3 f6e4 e1g1 b4c3",
        &[c("b2c3", MAIN_LINE)],
    ),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 d8e7", &[c("d2d4", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 f8c5 c2c3 d7d6", &[c("d2d4", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6", &[c("d2d3", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3", &[c("f8c5", MAIN_LINE)]),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5",
        &[c("c2c3", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5 c2c3",
        &[c("d7d6", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5 c2c3 d7d6",
        &[c("e1g1", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5 c2c3 d7d6 e1g1",
        &[c("e8g8", MAIN_LINE)],
    ),
    (
        "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8c5 c2c3 d7d6 e1g1 e8g8",
        &[c("b1d2", MAIN_LINE)],
    ),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 f8e7", &[c("e1g1", MAIN_LINE)]),
    ("e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 d2d3 h7h6", &[c("e1g1", MAIN_LINE)]),
    // Caro-Kann sidelines for white, shared with the black repertoire below.
    ("e2e4 c7c6 d2d4", &[c("d7d5", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5", &[c("b1c3", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 b1c3", &[c("d5e4", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 b1c3 d5e4", &[c("c3e4", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4", &[c("c8f5", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5",
        &[c("e4g3", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3",
        &[c("f5g6", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3 f5g6",
        &[c("h2h4", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3 f5g6 h2h4",
        &[c("h7h6", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3 f5g6 h2h4 h7h6",
        &[c("g1f3", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3 f5g6 h2h4 h7h6 g1f3",
        &[c("b8d7", MAIN_LINE)],
    ),
    (
        "e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 c8f5 e4g3 f5g6 h2h4 h7h6 g1f3 b8d7",
        &[c("h4h5", MAIN_LINE)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 b1c3 d5e4 c3e4 g8f6", &[c("e4f6", MAIN_LINE)]),
    ("e2e4 c7c6 g1f3", &[c("d7d5", MAIN_LINE)]),
    ("e2e4 c7c6 g1f3 d7d5", &[c("b1c3", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 e4e5", &[c("c8f5", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 e4e5 c8f5", &[c("f1e2", MAIN_LINE)]),
    ("e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 f1e2", &[c("e7e6", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 f1e2 e7e6",
        &[c("g1f3", MAIN_LINE)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 g1f3", &[c("e7e6", MAIN_LINE)]),
    (
        "e2e4 c7c6 d2d4 d7d5 e4e5 c8f5 g1f3 e7e6",
        &[c("f1e2", MAIN_LINE)],
    ),
    ("e2e4 c7c6 d2d4 d7d5 e4e5 c8g4", &[c("f1e2", MAIN_LINE)]),
    ("e2e4 c7c6 b1c3", &[c("d7d5", MAIN_LINE)]),
    ("e2e4 c7c6 b1c3 d7d5", &[c("g1f3", MAIN_LINE)]),
    // Black repertoire vs 1.d4: Semi-Slav.
    ("d2d4", &[c("d7d5", MAIN_LINE)]),
    ("d2d4 d7d5", &[c("c2c4", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4", &[c("e7e6", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6", &[c("b1c3", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6 b1c3", &[c("g8f6", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 g8f6", &[c("g1f3", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3", &[c("c7c6", MAIN_LINE)]),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6",
        &[c("e2e3", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3",
        &[c("b8d7", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3 b8d7",
        &[c("f1d3", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3 b8d7 f1d3",
        &[c("d5c4", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3 b8d7 f1d3 d5c4",
        &[c("d3c4", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3 b8d7 f1d3 d5c4 d3c4",
        &[c("b7b5", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 e2e3 b8d7 f1d3 d5c4 d3c4 b7b5",
        &[c("c4d3", MAIN_LINE)],
    ),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 c7c6", &[c("g1f3", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 c7c6 g1f3", &[c("g8f6", MAIN_LINE)]),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 c7c6 e2e3", &[c("g8f6", MAIN_LINE)]),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 c7c6 e2e3 g8f6",
        &[c("g1f3", MAIN_LINE)],
    ),
    (
        "d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 g1f3 c7c6 c1g5",
        &[c("h7h6", MAIN_LINE)],
    ),
    ("d2d4 d7d5 c2c4 e7e6 b1c3 g8f6 c1g5", &[c("h7h6", MAIN_LINE)]),
    ("d2d4 d7d5 g1f3", &[c("g8f6", MAIN_LINE)]),
    ("d2d4 d7d5 g1f3 g8f6", &[c("c2c4", MAIN_LINE)]),
    ("d2d4 d7d5 g1f3 g8f6 c2c4", &[c("e7e6", MAIN_LINE)]),
    ("d2d4 d7d5 g1f3 g8f6 c1f4", &[c("c7c5", MAIN_LINE)]),
    ("d2d4 d7d5 c1f4", &[c("g8f6", MAIN_LINE)]),
    ("d2d4 g8f6", &[c("c2c4", MAIN_LINE)]),
    ("d2d4 g8f6 c2c4", &[c("e7e6", MAIN_LINE)]),
    ("d2d4 g8f6 c2c4 e7e6", &[c("g1f3", MAIN_LINE)]),
    ("d2d4 g8f6 c2c4 e7e6 g1f3", &[c("d7d5", MAIN_LINE)]),
    ("d2d4 g8f6 g1f3", &[c("e7e6", MAIN_LINE)]),
    ("d2d4 g8f6 g1f3 e7e6", &[c("c2c4", MAIN_LINE)]),
    ("d2d4 g8f6 c1f4", &[c("d7d5", MAIN_LINE)]),
    // Black repertoire vs 1.c4: steer into the Semi-Slav.
    ("c2c4", &[c("e7e6", MAIN_LINE)]),
    ("c2c4 e7e6", &[c("d2d4", MAIN_LINE)]),
    ("c2c4 e7e6 d2d4", &[c("d7d5", MAIN_LINE)]),
    ("c2c4 e7e6 d2d4 d7d5", &[c("b1c3", MAIN_LINE)]),
    ("c2c4 e7e6 g1f3", &[c("d7d5", MAIN_LINE)]),
    ("c2c4 e7e6 g1f3 d7d5", &[c("d2d4", MAIN_LINE)]),
    ("c2c4 e7e6 b1c3", &[c("d7d5", MAIN_LINE)]),
    ("c2c4 e7e6 g2g3", &[c("d7d5", MAIN_LINE)]),
    // Black repertoire vs 1.Nf3.
    ("g1f3", &[c("d7d5", MAIN_LINE)]),
    ("g1f3 d7d5", &[c("d2d4", MAIN_LINE)]),
    ("g1f3 d7d5 d2d4", &[c("g8f6", MAIN_LINE)]),
    ("g1f3 d7d5 d2d4 g8f6", &[c("c2c4", MAIN_LINE)]),
    ("g1f3 d7d5 c2c4", &[c("e7e6", MAIN_LINE)]),
    ("g1f3 d7d5 c2c4 e7e6", &[c("d2d4", MAIN_LINE)]),
    ("g1f3 d7d5 g2g3", &[c("c7c6", MAIN_LINE)]),
];
