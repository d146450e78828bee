//! Opening book.
//!
//! Both variants share one lookup signature: the played move history (UCI,
//! from the start position) and the current legal moves, returning an
//! optional book move. The weighted variant re-scores candidates with
//! opening-principle and repertoire-consistency bonuses and picks randomly
//! inside the top tier; the deterministic variant always returns the first
//! legal candidate for the exact key. Tactical safety checks live in the
//! UCI front-end, not here.

pub mod table;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;

use self::table::{BookCandidate, GOOD_ALT, MAIN_LINE};

/// Candidates within this many points of the best form the selection tier.
const TIER_WINDOW: i32 = 25;

static WEIGHTED_TABLE: Lazy<HashMap<&'static str, &'static [BookCandidate]>> =
    Lazy::new(|| build_table(table::WEIGHTED));

static DETERMINISTIC_TABLE: Lazy<HashMap<&'static str, &'static [BookCandidate]>> =
    Lazy::new(|| build_table(table::DETERMINISTIC));

/// First occurrence wins, so a sequence reachable through both repertoire
/// halves keeps its primary continuation.
fn build_table(
    entries: &'static [(&'static str, &'static [BookCandidate])],
) -> HashMap<&'static str, &'static [BookCandidate]> {
    let mut table = HashMap::with_capacity(entries.len());
    for &(key, candidates) in entries {
        table.entry(key).or_insert(candidates);
    }
    table
}

pub trait OpeningBook {
    /// Book move for the position reached by `history`, restricted to
    /// `legal` (UCI strings). `None` when out of book.
    fn pick(&self, history: &[String], legal: &[String]) -> Option<String>;
}

/// A queen leaving its home square within the first seven plies.
pub fn is_early_queen_move(uci: &str, ply: usize) -> bool {
    ply <= 6 && (uci.starts_with("d1") || uci.starts_with("d8"))
}

fn is_rook_pawn_advance(uci: &str) -> bool {
    matches!(
        uci,
        "a2a3" | "a2a4" | "h2h3" | "h2h4" | "a7a6" | "a7a5" | "h7h6" | "h7h5"
    )
}

/// Classic development bonus, early-queen and rook-pawn penalties.
fn principle_bonus(uci: &str, white_to_move: bool, ply: usize) -> i32 {
    let mut bonus = 0;
    if ply < 10 {
        bonus += if white_to_move {
            match uci {
                "e2e4" => 40,
                "d2d4" => 36,
                "g1f3" => 28,
                "b1c3" => 24,
                "f1c4" => 20,
                "f1b5" => 18,
                "c1g5" => 14,
                _ => 0,
            }
        } else {
            match uci {
                "e7e6" => 34,
                "c7c6" => 33,
                "d7d5" => 32,
                "g8f6" => 24,
                "c7c5" => -10,
                _ => 0,
            }
        };
    }
    if is_early_queen_move(uci, ply) {
        bonus -= 35;
    }
    if ply < 4 && is_rook_pawn_advance(uci) {
        bonus -= 12;
    }
    bonus
}

/// Reward main-line weights and deep prefix matches, penalize deviations
/// from the repertoire.
fn consistency_bonus(weight: i32, prefix_ply: usize, current_ply: usize) -> i32 {
    let deviation = current_ply.saturating_sub(prefix_ply);
    let mut bonus = if weight >= MAIN_LINE {
        40
    } else if weight >= GOOD_ALT {
        20
    } else {
        8
    };
    bonus += prefix_ply as i32 * 2;
    bonus -= deviation as i32 * 12;
    bonus
}

struct ScoredMove {
    uci: &'static str,
    score: i32,
}

pub struct WeightedBook;

impl WeightedBook {
    fn score_prefix(
        history: &[String],
        legal: &[String],
        prefix_len: usize,
        out: &mut Vec<ScoredMove>,
    ) {
        let ply = history.len();
        if prefix_len % 2 != ply % 2 {
            return;
        }
        let key = history[..prefix_len].join(" ");
        let Some(candidates) = WEIGHTED_TABLE.get(key.as_str()) else {
            return;
        };
        let white_to_move = ply % 2 == 0;
        for candidate in *candidates {
            if candidate.weight <= 0 {
                continue;
            }
            if !legal.iter().any(|m| m == candidate.uci) {
                continue;
            }
            let score = candidate.weight
                + principle_bonus(candidate.uci, white_to_move, ply)
                + consistency_bonus(candidate.weight, prefix_len, ply);
            out.push(ScoredMove {
                uci: candidate.uci,
                score,
            });
        }
    }
}

impl OpeningBook for WeightedBook {
    fn pick(&self, history: &[String], legal: &[String]) -> Option<String> {
        let mut candidates = Vec::with_capacity(16);
        WeightedBook::score_prefix(history, legal, history.len(), &mut candidates);

        // Prefix fallback: strip trailing plies two at a time so the side to
        // move stays the same, tolerating small deviations from the book.
        if candidates.is_empty() {
            let mut prefix_len = history.len();
            while prefix_len >= 2 && candidates.is_empty() {
                prefix_len -= 2;
                WeightedBook::score_prefix(history, legal, prefix_len, &mut candidates);
            }
        }
        if candidates.is_empty() {
            return None;
        }

        candidates.sort_by(|a, b| b.score.cmp(&a.score).then(a.uci.cmp(b.uci)));
        let best = candidates[0].score;
        let tier: Vec<&ScoredMove> = candidates
            .iter()
            .take_while(|m| m.score >= best - TIER_WINDOW)
            .collect();
        if tier.len() == 1 {
            return Some(tier[0].uci.to_string());
        }

        let tier_weight = |m: &ScoredMove| (m.score - (best - 30)).max(1);
        let total: i32 = tier.iter().map(|m| tier_weight(m)).sum();
        let mut pick = rand::thread_rng().gen_range(1..=total.max(1));
        for m in &tier {
            pick -= tier_weight(m);
            if pick <= 0 {
                return Some(m.uci.to_string());
            }
        }
        Some(tier[0].uci.to_string())
    }
}

pub struct DeterministicBook;

impl OpeningBook for DeterministicBook {
    fn pick(&self, history: &[String], legal: &[String]) -> Option<String> {
        let key = history.join(" ");
        let candidates = DETERMINISTIC_TABLE.get(key.as_str())?;
        candidates
            .iter()
            .find(|candidate| legal.iter().any(|m| m == candidate.uci))
            .map(|candidate| candidate.uci.to_string())
    }
}
