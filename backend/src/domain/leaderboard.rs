//! Leaderboard projection over achievement records.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::user::avatar_initial_of;
use crate::domain::{AchievementRecord, UserId, UserIdentity};

/// Marker for the top three places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PodiumTier {
    Gold,
    Silver,
    Bronze,
}

impl PodiumTier {
    /// Tier for a 1-based rank, if it is on the podium.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: UserId,
    pub display_name: String,
    pub avatar_initial: char,
    pub points: u64,
    pub tasks_completed: u64,
    pub current_streak: u32,
    pub podium: Option<PodiumTier>,
}

/// Total order used for ranking: points descending, then the earlier last
/// completion date (records without one sort after dated records), then user
/// id ascending.
pub fn compare_standing(a: &AchievementRecord, b: &AchievementRecord) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(
            || match (a.last_completion_date(), b.last_completion_date()) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        )
        .then_with(|| a.owner().cmp(b.owner()))
}

/// Rank `records` and keep at most `limit` entries.
///
/// Users without a resolved identity are displayed by their id. Identical
/// inputs always produce identical output.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use streakboard::domain::{AchievementRecord, UserId, rank_leaderboard};
///
/// let low = AchievementRecord::restore(UserId::random(), 10, 1, 1, None);
/// let high = AchievementRecord::restore(UserId::random(), 90, 9, 3, None);
/// let ranked = rank_leaderboard(&[low, high.clone()], &HashMap::new(), 50);
/// assert_eq!(ranked[0].user_id, *high.owner());
/// assert_eq!(ranked[0].rank, 1);
/// ```
pub fn rank_leaderboard(
    records: &[AchievementRecord],
    identities: &HashMap<UserId, UserIdentity>,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&AchievementRecord> = records.iter().collect();
    ordered.sort_by(|a, b| compare_standing(a, b));

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, record)| {
            let rank = index + 1;
            let (display_name, avatar_initial) = match identities.get(record.owner()) {
                Some(identity) => (
                    identity.display_name().to_owned(),
                    identity.avatar_initial(),
                ),
                None => {
                    let fallback = record.owner().to_string();
                    let initial = avatar_initial_of(&fallback);
                    (fallback, initial)
                }
            };
            LeaderboardEntry {
                rank,
                user_id: record.owner().clone(),
                display_name,
                avatar_initial,
                points: record.points(),
                tasks_completed: record.tasks_completed(),
                current_streak: record.current_streak(),
                podium: PodiumTier::for_rank(rank),
            }
        })
        .collect()
}
