//! Minimax with alpha-beta pruning over absolute (White-positive) scores.
//!
//! White maximizes and Black minimizes. Every child is searched on its own
//! copy of the position. A child whose move cannot be applied is skipped; if
//! every child of a node is skipped the node reports `Exhausted` and its
//! score is the untouched accumulator seed (`i32::MIN` when maximizing,
//! `i32::MAX` when minimizing).

use log::{trace, warn};

use crate::game_state::chess_types::Color;
use crate::game_state::position::{ApplyOutcome, Position};
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Per-task search accounting. Each root task owns one; the driver sums them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchContext {
    pub nodes: u64,
    /// Most recent static evaluation taken at a leaf.
    pub last_score: Option<i32>,
    pub verbose: bool,
}

impl SearchContext {
    #[inline]
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimaxOutcome {
    Scored(i32),
    /// Moves existed but none could be applied.
    Exhausted { seed: i32 },
}

impl MinimaxOutcome {
    #[inline]
    pub const fn score(self) -> i32 {
        match self {
            MinimaxOutcome::Scored(score) => score,
            MinimaxOutcome::Exhausted { seed } => seed,
        }
    }

    #[inline]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, MinimaxOutcome::Exhausted { .. })
    }
}

#[inline]
pub const fn side_for(maximizing: bool) -> Color {
    if maximizing {
        Color::White
    } else {
        Color::Black
    }
}

/// Score of `position` searched `depth` plies, with the exhausted case folded
/// into its seed value.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    generator: &G,
    scorer: &S,
    position: &Position,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> i32 {
    minimax_outcome(generator, scorer, position, depth, alpha, beta, maximizing, ctx).score()
}

pub fn minimax_outcome<G: MoveGenerator, S: BoardScorer>(
    generator: &G,
    scorer: &S,
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> MinimaxOutcome {
    ctx.nodes += 1;

    if depth == 0 {
        return MinimaxOutcome::Scored(evaluate_leaf(scorer, position, ctx));
    }

    let moves = generator.generate_legal_moves(position, side_for(maximizing));
    if moves.is_empty() {
        return MinimaxOutcome::Scored(evaluate_leaf(scorer, position, ctx));
    }

    let seed = if maximizing { i32::MIN } else { i32::MAX };
    let mut best = seed;
    let mut any_applied = false;

    for (idx, mv) in moves.iter().enumerate() {
        let child = match position.after_move(mv) {
            ApplyOutcome::Applied(child) => child,
            ApplyOutcome::Rejected(reason) => {
                if ctx.verbose {
                    trace!("depth {depth}: skipped {mv}: {reason}");
                }
                continue;
            }
        };
        any_applied = true;

        if ctx.verbose {
            trace!("depth {depth}: trying {mv}");
        }

        let eval = minimax(generator, scorer, &child, depth - 1, alpha, beta, !maximizing, ctx);

        if maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }

        if alpha >= beta {
            if ctx.verbose {
                trace!(
                    "depth {depth}: pruned {} remaining moves after {mv} (alpha {alpha} >= beta {beta})",
                    moves.len() - idx - 1
                );
            }
            break;
        }
    }

    if !any_applied {
        if ctx.verbose {
            warn!("depth {depth}: all {} moves rejected, returning seed", moves.len());
        }
        return MinimaxOutcome::Exhausted { seed };
    }

    MinimaxOutcome::Scored(best)
}

#[inline]
fn evaluate_leaf<S: BoardScorer>(scorer: &S, position: &Position, ctx: &mut SearchContext) -> i32 {
    let score = scorer.score(position);
    ctx.last_score = Some(score);
    score
}
