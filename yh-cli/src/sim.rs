//! `yh sim`: batch games with the baseline policy, score statistics.

use yh_core::{ChanceMode, Game, GameConfig};

use crate::policy::play_greedy_game;

pub struct SimResult {
    pub scores: Vec<i32>,
}

impl SimResult {
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().map(|&s| s as f64).sum::<f64>() / self.scores.len() as f64
    }

    pub fn min(&self) -> i32 {
        self.scores.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> i32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// Bucket counts with the given width, covering 0..=max score.
    pub fn histogram(&self, bucket_width: i32) -> Vec<(i32, usize)> {
        let max = self.max();
        let buckets = (max / bucket_width) + 1;
        let mut out: Vec<(i32, usize)> = (0..buckets)
            .map(|b| (b * bucket_width, 0))
            .collect();
        for &s in &self.scores {
            let idx = (s / bucket_width) as usize;
            out[idx].1 += 1;
        }
        out
    }
}

pub fn run(games: usize, seed: u64, config: GameConfig) -> SimResult {
    let mut scores = Vec::with_capacity(games);
    for i in 0..games {
        let mut game = Game::new(config, ChanceMode::new_rng(seed.wrapping_add(i as u64)))
            .expect("validated config");
        let total = play_greedy_game(&mut game).expect("baseline policy plays legal moves");
        scores.push(total);
    }
    SimResult { scores }
}

pub fn print_report(res: &SimResult, no_hist: bool) {
    println!("games:  {}", res.scores.len());
    println!("mean:   {:.2}", res.mean());
    println!("min:    {}", res.min());
    println!("max:    {}", res.max());
    if no_hist || res.scores.is_empty() {
        return;
    }
    println!();
    let hist = res.histogram(25);
    let peak = hist.iter().map(|&(_, n)| n).max().unwrap_or(1).max(1);
    for (lo, n) in hist {
        let width = n * 50 / peak;
        println!("{:>4}..{:<4} {:>6} {}", lo, lo + 24, n, "#".repeat(width));
    }
}
