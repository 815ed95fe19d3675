//! Root search driver: parallel minimax over root moves.
//!
//! `find_best_move` generates the root moves, searches every root move as an
//! independent task on its own position copy with a fresh `(-inf, +inf)`
//! window, and folds the task reports in root-move order. A report replaces
//! the current best only when strictly better for the searching side (greater
//! for White, smaller for Black), so ties keep the earliest root move.
//!
//! A root move whose replies were all rejected is counted as exhausted and
//! never selected, so a search where every root move is exhausted returns
//! `None`.
//!
//! The optional time budget is soft and is checked only at the root, once
//! right before and once right after each task's minimax call. A task that
//! finds the budget exceeded freezes the shared clock and contributes no
//! result. Branches already descending are never interrupted.

use std::time::Duration;

use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::game_state::chess_types::Color;
use crate::game_state::position::{ApplyOutcome, Position};
use crate::move_generation::move_generator::{MoveGenerator, SequentialMoveGenerator};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{minimax_outcome, SearchContext};
use crate::search::threading::{SearchClock, ThreadingConfig, ThreadingModel};

/// Readable after each `find_best_move` call; reset at the start of the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub elapsed: Duration,
    /// Minimax invocations across all root tasks, plus one for the root.
    pub nodes: u64,
    /// Last static evaluation taken at a leaf (in root-move order).
    pub last_score: i32,
    pub best_score: Option<i32>,
    pub root_moves: usize,
    pub rejected_moves: usize,
    pub timed_out_moves: usize,
    pub exhausted_moves: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootOutcome {
    Scored(i32),
    /// The root move could not be applied.
    Rejected,
    /// The time budget was exceeded at a checkpoint.
    TimedOut,
}

/// What a single root task hands back to the driver.
#[derive(Debug, Clone, Copy)]
pub struct RootTaskReport {
    pub mv: Move,
    pub outcome: RootOutcome,
    pub exhausted: bool,
    pub nodes: u64,
    pub last_score: Option<i32>,
}

pub struct MinimaxEngine<G = SequentialMoveGenerator, S = MaterialScorer> {
    /// Emit per-move and per-prune diagnostics through `log`.
    pub verbose: bool,
    /// Soft root-level budget; `None` or zero is unbounded.
    pub time_limit: Option<Duration>,
    pub threading: ThreadingConfig,
    generator: G,
    scorer: S,
    stats: SearchStats,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_parts(SequentialMoveGenerator, MaterialScorer)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGenerator, S: BoardScorer> MinimaxEngine<G, S> {
    pub fn with_parts(generator: G, scorer: S) -> Self {
        Self {
            verbose: false,
            time_limit: None,
            threading: ThreadingConfig::default(),
            generator,
            scorer,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }

    #[inline]
    pub fn last_score(&self) -> i32 {
        self.stats.last_score
    }

    /// Static score of `position` under this engine's scorer.
    #[inline]
    pub fn evaluate(&self, position: &Position) -> i32 {
        self.scorer.score(position)
    }

    /// Best root move for `color` searched `depth` plies, or `None` when no
    /// root move produced a result. The position is never modified.
    ///
    /// Depth 0 is searched as depth 1: root children are evaluated statically.
    pub fn find_best_move(&mut self, position: &Position, color: Color, depth: u8) -> Option<Move> {
        self.stats = SearchStats::default();
        let clock = SearchClock::start(self.time_limit);

        let root_moves = self.generator.generate_legal_moves(position, color);
        if root_moves.is_empty() {
            clock.stop();
            self.stats.elapsed = clock.elapsed();
            self.stats.nodes = 1;
            if self.verbose {
                debug!("no root moves for {color:?}");
            }
            return None;
        }

        let child_depth = depth.saturating_sub(1);
        let reports = self.dispatch(position, &root_moves, color, child_depth, &clock);

        let (best, stats) = fold_reports(&reports, color);
        clock.stop();

        self.stats = SearchStats {
            elapsed: clock.elapsed(),
            root_moves: root_moves.len(),
            ..stats
        };

        if self.verbose {
            debug!(
                "search {color:?} depth {depth}: best {} score {:?}, {} nodes in {:?}",
                best.map(|m| m.to_string()).unwrap_or_else(|| "none".to_owned()),
                self.stats.best_score,
                self.stats.nodes,
                self.stats.elapsed
            );
        }

        best
    }

    fn dispatch(
        &self,
        position: &Position,
        root_moves: &[Move],
        color: Color,
        child_depth: u8,
        clock: &SearchClock,
    ) -> Vec<RootTaskReport> {
        let run_parallel = || {
            root_moves
                .par_iter()
                .map(|mv| self.search_root_move(position, mv, color, child_depth, clock))
                .collect::<Vec<_>>()
        };

        match self.threading.model {
            ThreadingModel::SingleThreaded => root_moves
                .iter()
                .map(|mv| self.search_root_move(position, mv, color, child_depth, clock))
                .collect(),
            ThreadingModel::RootParallel => match self.threading.dedicated_threads() {
                Some(threads) => match ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => pool.install(run_parallel),
                    Err(err) => {
                        warn!("could not build {threads}-thread pool ({err}), using global pool");
                        run_parallel()
                    }
                },
                None => run_parallel(),
            },
        }
    }

    fn search_root_move(
        &self,
        position: &Position,
        mv: &Move,
        color: Color,
        child_depth: u8,
        clock: &SearchClock,
    ) -> RootTaskReport {
        let mut report = RootTaskReport {
            mv: *mv,
            outcome: RootOutcome::Rejected,
            exhausted: false,
            nodes: 0,
            last_score: None,
        };

        let child = match position.after_move(mv) {
            ApplyOutcome::Applied(child) => child,
            ApplyOutcome::Rejected(reason) => {
                debug!("root move {mv} rejected: {reason}");
                return report;
            }
        };

        if clock.budget_exceeded() {
            clock.stop();
            debug!("time budget exceeded before root move {mv}");
            report.outcome = RootOutcome::TimedOut;
            return report;
        }

        let mut ctx = SearchContext::new(self.verbose);
        let outcome = minimax_outcome(
            &self.generator,
            &self.scorer,
            &child,
            child_depth,
            i32::MIN,
            i32::MAX,
            !color.is_maximizing(),
            &mut ctx,
        );
        report.nodes = ctx.nodes;
        report.last_score = ctx.last_score;

        if clock.budget_exceeded() {
            clock.stop();
            debug!("time budget exceeded after root move {mv}");
            report.outcome = RootOutcome::TimedOut;
            return report;
        }

        if outcome.is_exhausted() && self.verbose {
            warn!("root move {mv}: every reply was rejected");
        }
        report.exhausted = outcome.is_exhausted();
        report.outcome = RootOutcome::Scored(outcome.score());

        if self.verbose {
            debug!("root move {mv}: score {} ({} nodes)", outcome.score(), ctx.nodes);
        }

        report
    }
}

/// Reduce root reports in order with the strict-improvement rule.
fn fold_reports(reports: &[RootTaskReport], color: Color) -> (Option<Move>, SearchStats) {
    let mut stats = SearchStats {
        nodes: 1,
        ..SearchStats::default()
    };
    let mut best_move = None;
    let mut best_score = if color.is_maximizing() { i32::MIN } else { i32::MAX };

    for report in reports {
        stats.nodes += report.nodes;
        if let Some(score) = report.last_score {
            stats.last_score = score;
        }
        let score = match report.outcome {
            RootOutcome::Scored(score) => score,
            RootOutcome::Rejected => {
                stats.rejected_moves += 1;
                continue;
            }
            RootOutcome::TimedOut => {
                stats.timed_out_moves += 1;
                continue;
            }
        };
        // A seed score is not a real evaluation.
        if report.exhausted {
            stats.exhausted_moves += 1;
            continue;
        }

        let improves = if color.is_maximizing() {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(report.mv);
        }
    }

    stats.best_score = best_move.map(|_| best_score);
    (best_move, stats)
}
