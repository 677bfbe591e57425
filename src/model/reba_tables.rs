//! REBA worksheet lookup tables.

/// Table A indexed `[neck - 1][trunk - 1][legs - 1]`.
pub const TABLE_A: [[[u8; 4]; 5]; 3] = [
    [
        [1, 2, 3, 4],
        [2, 3, 4, 5],
        [2, 4, 5, 6],
        [3, 5, 6, 7],
        [4, 6, 7, 8],
    ],
    [
        [1, 2, 3, 4],
        [3, 4, 5, 6],
        [4, 5, 6, 7],
        [5, 6, 7, 8],
        [6, 7, 8, 9],
    ],
    [
        [3, 3, 5, 6],
        [4, 5, 6, 7],
        [5, 6, 7, 8],
        [6, 7, 8, 9],
        [7, 8, 9, 9],
    ],
];

/// Table B indexed `[lower_arm - 1][upper_arm - 1][wrist - 1]`.
pub const TABLE_B: [[[u8; 3]; 6]; 2] = [
    [
        [1, 2, 2],
        [1, 2, 3],
        [3, 4, 5],
        [4, 5, 5],
        [6, 7, 8],
        [7, 8, 8],
    ],
    [
        [1, 2, 3],
        [2, 3, 4],
        [4, 5, 5],
        [5, 6, 7],
        [7, 8, 8],
        [8, 9, 9],
    ],
];

/// Table C indexed `[score_a - 1][score_b - 1]`.
pub const TABLE_C: [[u8; 12]; 12] = [
    [1, 1, 1, 2, 3, 3, 4, 5, 6, 7, 7, 7],
    [1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 7, 8],
    [2, 3, 3, 3, 4, 5, 6, 7, 7, 8, 8, 8],
    [3, 4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 9],
    [4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 9, 9],
    [6, 6, 6, 7, 8, 8, 9, 9, 10, 10, 10, 10],
    [7, 7, 7, 8, 9, 9, 9, 10, 10, 11, 11, 11],
    [8, 8, 8, 9, 10, 10, 10, 10, 10, 11, 11, 11],
    [9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 12],
    [10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12],
    [11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12],
    [12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12],
];

pub const NECK_MAX: u8 = 3;
pub const TRUNK_MAX: u8 = 5;
pub const LEGS_MAX: u8 = 4;
pub const UPPER_ARM_MAX: u8 = 6;
pub const LOWER_ARM_MAX: u8 = 2;
pub const WRIST_MAX: u8 = 3;
pub const SCORE_AB_MAX: u8 = 12;

pub fn table_a(neck: u8, trunk: u8, legs: u8) -> u8 {
    TABLE_A[index(neck, NECK_MAX)][index(trunk, TRUNK_MAX)][index(legs, LEGS_MAX)]
}

pub fn table_b(upper_arm: u8, lower_arm: u8, wrist: u8) -> u8 {
    TABLE_B[index(lower_arm, LOWER_ARM_MAX)][index(upper_arm, UPPER_ARM_MAX)]
        [index(wrist, WRIST_MAX)]
}

pub fn table_c(score_a: u8, score_b: u8) -> u8 {
    TABLE_C[index(score_a, SCORE_AB_MAX)][index(score_b, SCORE_AB_MAX)]
}

/// Clamps a 1-based score into `1..=max` and returns the 0-based index.
fn index(score: u8, max: u8) -> usize {
    usize::from(score.clamp(1, max) - 1)
}
