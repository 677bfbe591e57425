use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Direction in which an angle moves away from neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Risk grows with the angle; a band matches when `angle < bound`.
    Rising,
    /// Risk grows as the angle shrinks; a band matches when `angle > bound`.
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub bound: f64,
    pub level: u8,
}

/// Ordered step function from a whole-degree angle to a segment level.
/// Bands are tried in order, first match wins, `ceiling` catches the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub direction: Direction,
    pub bands: Vec<Band>,
    pub ceiling: u8,
}

/// A contiguous slice of [0, 180] mapped to one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelInterval {
    pub from: f64,
    pub to: f64,
    pub level: u8,
}

impl ThresholdTable {
    pub fn rising(bands: &[(f64, u8)], ceiling: u8) -> Self {
        Self::build(Direction::Rising, bands, ceiling)
    }

    pub fn falling(bands: &[(f64, u8)], ceiling: u8) -> Self {
        Self::build(Direction::Falling, bands, ceiling)
    }

    fn build(direction: Direction, bands: &[(f64, u8)], ceiling: u8) -> Self {
        Self {
            direction,
            bands: bands
                .iter()
                .map(|&(bound, level)| Band { bound, level })
                .collect(),
            ceiling,
        }
    }

    pub fn level_for(&self, degrees: f64) -> u8 {
        let degrees = if degrees.is_nan() {
            0.0
        } else {
            degrees.clamp(0.0, 180.0)
        };
        for band in &self.bands {
            let hit = match self.direction {
                Direction::Rising => degrees < band.bound,
                Direction::Falling => degrees > band.bound,
            };
            if hit {
                return band.level;
            }
        }
        self.ceiling
    }

    /// Level of a neutral posture, used for segments without data.
    pub fn neutral_level(&self) -> u8 {
        self.bands.first().map(|b| b.level).unwrap_or(self.ceiling)
    }

    pub fn max_level(&self) -> u8 {
        self.ceiling
    }

    /// The partition of [0, 180] this table induces, in table order.
    pub fn intervals(&self) -> Vec<LevelInterval> {
        let mut out = Vec::with_capacity(self.bands.len() + 1);
        match self.direction {
            Direction::Rising => {
                let mut from = 0.0;
                for band in &self.bands {
                    out.push(LevelInterval {
                        from,
                        to: band.bound,
                        level: band.level,
                    });
                    from = band.bound;
                }
                out.push(LevelInterval {
                    from,
                    to: 180.0,
                    level: self.ceiling,
                });
            }
            Direction::Falling => {
                let mut to = 180.0;
                for band in &self.bands {
                    out.push(LevelInterval {
                        from: band.bound,
                        to,
                        level: band.level,
                    });
                    to = band.bound;
                }
                out.push(LevelInterval {
                    from: 0.0,
                    to,
                    level: self.ceiling,
                });
            }
        }
        out
    }

    pub fn validate(&self, table: &str) -> Result<(), ConfigError> {
        if self.bands.is_empty() {
            return Err(ConfigError::EmptyTable {
                table: table.to_string(),
            });
        }
        let mut prev: Option<Band> = None;
        for (index, band) in self.bands.iter().enumerate() {
            if !band.bound.is_finite() || band.bound < 0.0 || band.bound > 180.0 {
                return Err(ConfigError::BoundOutOfRange {
                    table: table.to_string(),
                    index,
                    value: band.bound,
                    min: 0.0,
                    max: 180.0,
                });
            }
            if band.level == 0 {
                return Err(ConfigError::ZeroLevel {
                    table: table.to_string(),
                    index,
                });
            }
            if let Some(p) = prev {
                let ordered = match self.direction {
                    Direction::Rising => band.bound > p.bound,
                    Direction::Falling => band.bound < p.bound,
                };
                if !ordered {
                    return Err(ConfigError::NonMonotonicBounds {
                        table: table.to_string(),
                        index,
                        expected: match self.direction {
                            Direction::Rising => "increasing",
                            Direction::Falling => "decreasing",
                        },
                    });
                }
                if band.level < p.level {
                    return Err(ConfigError::NonMonotonicLevels {
                        table: table.to_string(),
                        index,
                    });
                }
            }
            prev = Some(*band);
        }
        check_ceiling(table, self.ceiling, prev.map(|b| b.level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub max_sum: u8,
    pub score: u8,
}

/// Maps a sum of segment levels to a bounded group score:
/// `sum <= max_sum` picks the bucket, `ceiling` catches larger sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTable {
    pub buckets: Vec<Bucket>,
    pub ceiling: u8,
}

impl BucketTable {
    pub fn new(buckets: &[(u8, u8)], ceiling: u8) -> Self {
        Self {
            buckets: buckets
                .iter()
                .map(|&(max_sum, score)| Bucket { max_sum, score })
                .collect(),
            ceiling,
        }
    }

    pub fn score_for(&self, sum: u32) -> u8 {
        self.buckets
            .iter()
            .find(|b| sum <= u32::from(b.max_sum))
            .map(|b| b.score)
            .unwrap_or(self.ceiling)
    }

    pub fn min_score(&self) -> u8 {
        self.buckets.first().map(|b| b.score).unwrap_or(self.ceiling)
    }

    pub fn validate(&self, table: &str) -> Result<(), ConfigError> {
        if self.buckets.is_empty() {
            return Err(ConfigError::EmptyTable {
                table: table.to_string(),
            });
        }
        let mut prev: Option<Bucket> = None;
        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.score == 0 {
                return Err(ConfigError::ZeroLevel {
                    table: table.to_string(),
                    index,
                });
            }
            if let Some(p) = prev {
                if bucket.max_sum <= p.max_sum {
                    return Err(ConfigError::NonMonotonicBounds {
                        table: table.to_string(),
                        index,
                        expected: "increasing",
                    });
                }
                if bucket.score < p.score {
                    return Err(ConfigError::NonMonotonicLevels {
                        table: table.to_string(),
                        index,
                    });
                }
            }
            prev = Some(*bucket);
        }
        check_ceiling(table, self.ceiling, prev.map(|b| b.score))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadBand {
    pub max_kg: f64,
    pub score: u8,
}

/// Load/force score by handled weight. Weights at or below 0 score 0;
/// otherwise `weight <= max_kg` picks the band and `ceiling` catches the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTable {
    pub bands: Vec<LoadBand>,
    pub ceiling: u8,
}

impl LoadTable {
    pub fn new(bands: &[(f64, u8)], ceiling: u8) -> Self {
        Self {
            bands: bands
                .iter()
                .map(|&(max_kg, score)| LoadBand { max_kg, score })
                .collect(),
            ceiling,
        }
    }

    pub fn score_for(&self, weight_kg: f64) -> u8 {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return 0;
        }
        self.bands
            .iter()
            .find(|b| weight_kg <= b.max_kg)
            .map(|b| b.score)
            .unwrap_or(self.ceiling)
    }

    pub fn validate(&self, table: &str) -> Result<(), ConfigError> {
        if self.bands.is_empty() {
            return Err(ConfigError::EmptyTable {
                table: table.to_string(),
            });
        }
        let mut prev: Option<LoadBand> = None;
        for (index, band) in self.bands.iter().enumerate() {
            if !band.max_kg.is_finite() || band.max_kg <= 0.0 {
                return Err(ConfigError::BoundOutOfRange {
                    table: table.to_string(),
                    index,
                    value: band.max_kg,
                    min: f64::MIN_POSITIVE,
                    max: f64::MAX,
                });
            }
            if let Some(p) = prev {
                if band.max_kg <= p.max_kg {
                    return Err(ConfigError::NonMonotonicBounds {
                        table: table.to_string(),
                        index,
                        expected: "increasing",
                    });
                }
                if band.score < p.score {
                    return Err(ConfigError::NonMonotonicLevels {
                        table: table.to_string(),
                        index,
                    });
                }
            }
            prev = Some(*band);
        }
        check_ceiling(table, self.ceiling, prev.map(|b| b.score))
    }
}

fn check_ceiling(table: &str, ceiling: u8, last: Option<u8>) -> Result<(), ConfigError> {
    match last {
        Some(last) if ceiling < last => Err(ConfigError::CeilingBelowLevel {
            table: table.to_string(),
            ceiling,
            last,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
