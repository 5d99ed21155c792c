pub mod bonus;
pub mod colors;
pub mod colorscale;
pub mod heatmap;
pub mod leaderboard;
pub mod load;
pub mod playerstats;

pub use load::LoadError;

/// Sums counters, clamping at `u64::MAX` instead of overflowing.
pub fn saturating_sum<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().fold(0, u64::saturating_add)
}
