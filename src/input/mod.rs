use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

pub mod mediapipe;

use crate::error::InputError;
use crate::model::keypoints::KeypointSet;
use crate::model::modifiers::Modifiers;
use crate::model::profile::ScoringProfile;
use mediapipe::keypoints_from_landmarks;

/// One frame as handed over by the pose detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub timestamp_ms: Option<f64>,
    pub keypoints: KeypointSet,
    /// Per-frame task context; falls back to the run-level modifiers.
    pub modifiers: Option<Modifiers>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    /// Image width / height. Applied to x (and z) so angles are computed
    /// in isotropic space when coordinates were normalised per axis.
    pub aspect_ratio: f64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { aspect_ratio: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// A JSON array of frame records, or a single record.
    Json,
    /// One frame record per line.
    JsonLines,
}

impl FrameFormat {
    pub fn from_path(path: &Path) -> FrameFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some("jsonl") | Some("ndjson") => FrameFormat::JsonLines,
            _ => FrameFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FrameRecord {
    #[serde(default)]
    frame: Option<u64>,
    #[serde(default)]
    timestamp_ms: Option<f64>,
    #[serde(default)]
    keypoints: Option<KeypointSet>,
    #[serde(default)]
    landmarks: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    modifiers: Option<Modifiers>,
}

pub fn load_frames(path: &Path, options: &LoadOptions) -> Result<Vec<Frame>, InputError> {
    let text = std::fs::read_to_string(path)?;
    let format = FrameFormat::from_path(path);
    let frames = parse_frames(&text, format, options)?;
    if frames.is_empty() {
        return Err(InputError::NoFrames(path.to_path_buf()));
    }
    info!(
        "loaded {} frames from {}",
        frames.len(),
        path.display()
    );
    Ok(frames)
}

/// Parses frame records. A malformed record is fatal in JSON documents
/// and skipped with a warning in JSON Lines.
pub fn parse_frames(
    text: &str,
    format: FrameFormat,
    options: &LoadOptions,
) -> Result<Vec<Frame>, InputError> {
    if !options.aspect_ratio.is_finite() || options.aspect_ratio <= 0.0 {
        return Err(InputError::InvalidInput(format!(
            "aspect ratio must be a positive number, got {}",
            options.aspect_ratio
        )));
    }

    match format {
        FrameFormat::Json => {
            let records: Vec<FrameRecord> = if text.trim_start().starts_with('[') {
                serde_json::from_str(text)?
            } else {
                vec![serde_json::from_str(text)?]
            };
            records
                .into_iter()
                .enumerate()
                .map(|(idx, record)| to_frame(idx, record, options))
                .collect()
        }
        FrameFormat::JsonLines => {
            let mut frames = Vec::new();
            let mut record_idx = 0usize;
            for (line_no, line) in text.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let parsed = serde_json::from_str::<FrameRecord>(line)
                    .map_err(InputError::from)
                    .and_then(|record| to_frame(record_idx, record, options));
                record_idx += 1;
                match parsed {
                    Ok(frame) => frames.push(frame),
                    Err(err) => warn!("skipping line {}: {}", line_no + 1, err),
                }
            }
            Ok(frames)
        }
    }
}

fn to_frame(idx: usize, record: FrameRecord, options: &LoadOptions) -> Result<Frame, InputError> {
    let keypoints = match (record.keypoints, record.landmarks) {
        (Some(keypoints), None) => keypoints,
        (None, Some(rows)) => keypoints_from_landmarks(&rows)
            .map_err(|reason| InputError::InvalidFrame { record: idx, reason })?,
        (Some(_), Some(_)) => {
            return Err(InputError::InvalidFrame {
                record: idx,
                reason: "both `keypoints` and `landmarks` given".to_string(),
            });
        }
        (None, None) => {
            return Err(InputError::InvalidFrame {
                record: idx,
                reason: "neither `keypoints` nor `landmarks` given".to_string(),
            });
        }
    };

    let keypoints = if options.aspect_ratio == 1.0 {
        keypoints
    } else {
        keypoints.rescaled_x(options.aspect_ratio)
    };

    Ok(Frame {
        index: record.frame.unwrap_or(idx as u64),
        timestamp_ms: record.timestamp_ms,
        keypoints,
        modifiers: record.modifiers,
    })
}

/// Reads a scoring profile from JSON. Validation happens when the engine
/// is built.
pub fn load_profile(path: &Path) -> Result<ScoringProfile, InputError> {
    let text = std::fs::read_to_string(path)?;
    let profile = serde_json::from_str(&text)?;
    info!("loaded scoring profile from {}", path.display());
    Ok(profile)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
