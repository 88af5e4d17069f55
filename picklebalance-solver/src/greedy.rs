//! Local round-by-round greedy generator
//!
//! Level 3 - Steps
//!
//! Each round:
//! 1. Players with the most byes so far take the court first; the rest sit
//!    out (random tiebreak).
//! 2. Partners are chosen greedily to avoid repeat partnerships.
//! 3. Teams are matched to avoid repeat opponents and rating imbalance.
//!
//! Several independently seeded attempts are scored and the cheapest kept.

use std::cmp::Reverse;

use picklebalance_core::RawAssignment;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::generator::ScheduleGenerator;
use crate::request::GenerationRequest;

const PARTNER_REPEAT_WEIGHT: f64 = 100.0;
const OPPONENT_EXCESS_WEIGHT: f64 = 10.0;
const BYE_SPREAD_WEIGHT: f64 = 5.0;
/// Opponent meetings allowed before a pair counts as excessive
const OPPONENT_ALLOWANCE: u32 = 2;

/// Greedy generator over the request's roster
#[derive(Clone, Debug)]
pub struct GreedyGenerator {
    attempts: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl GreedyGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            attempts: config.attempts,
            seed: config.seed,
            parallel: config.parallel,
        }
    }
}

impl Default for GreedyGenerator {
    fn default() -> Self {
        Self::new(&GenerationConfig::default())
    }
}

impl ScheduleGenerator for GreedyGenerator {
    fn name(&self) -> &str {
        "greedy"
    }

    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        let base_seed = self.seed.unwrap_or_else(rand::random);
        let run = |attempt: usize| {
            let plan = plan_schedule(request, base_seed.wrapping_add(attempt as u64));
            (attempt, plan)
        };
        let cheaper = |a: &(usize, Plan), b: &(usize, Plan)| {
            a.1.cost.total_cmp(&b.1.cost).then(a.0.cmp(&b.0))
        };

        let best = if self.parallel {
            (0..self.attempts).into_par_iter().map(run).min_by(cheaper)
        } else {
            (0..self.attempts).map(run).min_by(cheaper)
        };
        let (attempt, plan) = best.ok_or_else(|| {
            GenerateError::InvalidConfig("attempts must be at least 1".to_string())
        })?;

        tracing::debug!(attempt, cost = plan.cost, "selected greedy attempt");

        let raw = RawAssignment::from_rounds(plan.into_ids(request))?;
        Ok(raw.to_json()?)
    }
}

/// One attempt: matches as roster positions, plus its cost
#[derive(Clone, Debug)]
struct Plan {
    rounds: Vec<Vec<[usize; 4]>>,
    cost: f64,
}

impl Plan {
    fn into_ids(self, request: &GenerationRequest) -> Vec<Vec<Vec<String>>> {
        self.rounds
            .into_iter()
            .map(|matches| {
                matches
                    .into_iter()
                    .map(|slots| {
                        slots
                            .iter()
                            .map(|&i| request.roster[i].id.clone())
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Running interaction counts for one attempt
struct Tally {
    partner: Vec<Vec<u32>>,
    opponent: Vec<Vec<u32>>,
    byes: Vec<u32>,
    imbalance: f64,
}

impl Tally {
    fn new(n: usize) -> Self {
        Self {
            partner: vec![vec![0; n]; n],
            opponent: vec![vec![0; n]; n],
            byes: vec![0; n],
            imbalance: 0.0,
        }
    }

    fn record(&mut self, slots: [usize; 4], ratings: &[f64]) {
        let [a, b, c, d] = slots;
        for (x, y) in [(a, b), (c, d)] {
            self.partner[x][y] += 1;
            self.partner[y][x] += 1;
        }
        for (x, y) in [(a, c), (a, d), (b, c), (b, d)] {
            self.opponent[x][y] += 1;
            self.opponent[y][x] += 1;
        }
        self.imbalance += team_diff(slots, ratings);
    }

    /// Cost of facing `q` with `p` given history so far
    fn matchup_cost(&self, p: (usize, usize), q: (usize, usize), ratings: &[f64]) -> f64 {
        let cross = [(p.0, q.0), (p.0, q.1), (p.1, q.0), (p.1, q.1)];
        let meetings: u32 = cross.iter().map(|&(x, y)| self.opponent[x][y]).sum();
        let excess = cross
            .iter()
            .filter(|&&(x, y)| self.opponent[x][y] >= OPPONENT_ALLOWANCE)
            .count();
        meetings as f64
            + excess as f64 * OPPONENT_EXCESS_WEIGHT
            + team_diff([p.0, p.1, q.0, q.1], ratings)
    }

    fn cost(&self) -> f64 {
        let n = self.byes.len();
        let mut partner_repeats = 0u32;
        let mut opponent_excess = 0u32;
        for i in 0..n {
            for j in i + 1..n {
                partner_repeats += self.partner[i][j].saturating_sub(1);
                opponent_excess += self.opponent[i][j].saturating_sub(OPPONENT_ALLOWANCE);
            }
        }
        let most = self.byes.iter().max().copied().unwrap_or(0);
        let fewest = self.byes.iter().min().copied().unwrap_or(0);

        partner_repeats as f64 * PARTNER_REPEAT_WEIGHT
            + opponent_excess as f64 * OPPONENT_EXCESS_WEIGHT
            + (most - fewest) as f64 * BYE_SPREAD_WEIGHT
            + self.imbalance
    }
}

fn team_diff(slots: [usize; 4], ratings: &[f64]) -> f64 {
    let [a, b, c, d] = slots;
    ((ratings[a] + ratings[b]) - (ratings[c] + ratings[d])).abs()
}

// ============================================================================
// Attempt construction
// ============================================================================

fn plan_schedule(request: &GenerationRequest, seed: u64) -> Plan {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ratings: Vec<f64> = request.roster.iter().map(|p| p.rating).collect();
    let n = ratings.len();
    let courts = (request.courts as usize).min(n / 4);

    let mut tally = Tally::new(n);
    let mut rounds = Vec::with_capacity(request.rounds as usize);

    for _ in 0..request.rounds {
        let active = select_active(&mut tally, courts * 4, &mut rng);
        let pairs = pair_partners(active, &tally);
        let matches = match_pairs(pairs, &tally, &ratings);
        for &slots in &matches {
            tally.record(slots, &ratings);
        }
        rounds.push(matches);
    }

    Plan {
        cost: tally.cost(),
        rounds,
    }
}

/// Pick who plays this round and record byes for everyone else
fn select_active(tally: &mut Tally, count: usize, rng: &mut ChaCha8Rng) -> Vec<usize> {
    let mut order: Vec<(u32, u32, usize)> = (0..tally.byes.len())
        .map(|i| (tally.byes[i], rng.gen::<u32>(), i))
        .collect();
    order.sort_by_key(|&(byes, tiebreak, _)| (Reverse(byes), tiebreak));

    for &(_, _, i) in &order[count..] {
        tally.byes[i] += 1;
    }
    let mut active: Vec<usize> = order[..count].iter().map(|&(_, _, i)| i).collect();
    active.shuffle(rng);
    active
}

fn pair_partners(mut pool: Vec<usize>, tally: &Tally) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(pool.len() / 2);
    while let Some(a) = pool.pop() {
        let Some(k) = (0..pool.len()).min_by_key(|&k| {
            let b = pool[k];
            (tally.partner[a][b], tally.opponent[a][b])
        }) else {
            break;
        };
        let b = pool.swap_remove(k);
        pairs.push((a, b));
    }
    pairs
}

fn match_pairs(
    mut pairs: Vec<(usize, usize)>,
    tally: &Tally,
    ratings: &[f64],
) -> Vec<[usize; 4]> {
    let mut matches = Vec::with_capacity(pairs.len() / 2);
    while let Some(p) = pairs.pop() {
        let Some(k) = (0..pairs.len()).min_by(|&x, &y| {
            tally
                .matchup_cost(p, pairs[x], ratings)
                .total_cmp(&tally.matchup_cost(p, pairs[y], ratings))
        }) else {
            break;
        };
        let q = pairs.swap_remove(k);
        matches.push([p.0, p.1, q.0, q.1]);
    }
    matches
}
