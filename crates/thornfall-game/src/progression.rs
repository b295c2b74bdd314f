//! Experience, leveling, and the level requirement table
//!
//! Level requirements live in an externally-authored table keyed by the
//! level being reached; a missing row means no further levels are defined.
//! Surplus XP always carries across thresholds, so one large grant can
//! roll a combatant over several levels at once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Hard level ceiling; no XP is accepted once it is reached
pub const MAX_LEVEL: u32 = 20;

/// Stat points granted per level gained
const STAT_POINTS_PER_LEVEL: i32 = 10;

/// Max health or mana bought by one level-up point
const LEVEL_UP_POOL_BONUS: i32 = 50;

/// One row of the level requirement table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    /// XP that must be banked to reach this row's level
    pub xp_needed: i32,
}

/// Errors loading a level requirement table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to parse level table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level table row key '{0}' is not a level number")]
    InvalidRowKey(String),
}

/// Level requirement lookup, keyed by the level being reached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelTable {
    rows: HashMap<u32, LevelRow>,
}

impl LevelTable {
    /// Create an empty table (no levels beyond 1 defined)
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the XP requirement for reaching `level`
    pub fn insert(&mut self, level: u32, xp_needed: i32) {
        self.rows.insert(level, LevelRow { xp_needed });
    }

    /// The row for reaching `level`, or `None` when undefined
    pub fn get(&self, level: u32) -> Option<&LevelRow> {
        self.rows.get(&level)
    }

    /// Number of defined rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are defined
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse a table from JSON rows keyed by level number, e.g.
    /// `{"2": {"xp_needed": 100}, "3": {"xp_needed": 250}}`.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: HashMap<String, LevelRow> = serde_json::from_str(json)?;
        let mut rows = HashMap::with_capacity(raw.len());
        for (key, row) in raw {
            let level: u32 = key
                .parse()
                .map_err(|_| TableError::InvalidRowKey(key.clone()))?;
            rows.insert(level, row);
        }
        Ok(Self { rows })
    }
}

/// Which resource ceiling a level-up point buys into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelUpPool {
    Health,
    Mana,
}

/// XP accumulation and level-up bookkeeping for one combatant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionTrack {
    level: u32,
    xp: i32,
    stat_points: i32,
    level_up_points: i32,
}

impl Default for ProgressionTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionTrack {
    /// Start at level 1 with nothing banked
    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            stat_points: 0,
            level_up_points: 0,
        }
    }

    /// Current level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// XP banked toward the next level
    pub fn xp(&self) -> i32 {
        self.xp
    }

    /// Unspent stat points
    pub fn stat_points(&self) -> i32 {
        self.stat_points
    }

    /// Unspent level-up points
    pub fn level_up_points(&self) -> i32 {
        self.level_up_points
    }

    /// Whether the level ceiling has been reached
    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Max health or mana bought by one level-up point
    pub fn pool_bonus() -> i32 {
        LEVEL_UP_POOL_BONUS
    }

    /// Bank XP and resolve any level-ups it pays for.
    ///
    /// Returns the levels gained, in order. No-op at the ceiling. The
    /// rollover loop is bounded by the ceiling and by table exhaustion:
    /// a missing row for the next level ends the climb early.
    pub fn affect_xp(&mut self, delta: i32, table: &LevelTable) -> Vec<u32> {
        if self.is_max_level() {
            return Vec::new();
        }

        self.xp += delta;

        let mut gained = Vec::new();
        while self.level < MAX_LEVEL {
            let Some(row) = table.get(self.level + 1) else {
                break;
            };
            if self.xp < row.xp_needed {
                break;
            }
            self.xp -= row.xp_needed;
            self.level += 1;
            self.stat_points += STAT_POINTS_PER_LEVEL;
            self.level_up_points += 1;
            gained.push(self.level);
        }
        gained
    }

    /// Consume one stat point. Returns false with none available.
    pub fn try_spend_stat_point(&mut self) -> bool {
        if self.stat_points > 0 {
            self.stat_points -= 1;
            true
        } else {
            false
        }
    }

    /// Consume one level-up point. Returns false with none available.
    pub fn try_spend_level_up_point(&mut self) -> bool {
        if self.level_up_points > 0 {
            self.level_up_points -= 1;
            true
        } else {
            false
        }
    }
}
