use crate::model::risk::RiskLevel;
use crate::report::{RiskStat, SegmentStat, SummaryData, format_f32_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Ergonomic Risk (REBA) Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Overall risk\n");
    out.push_str(&format!("Input: {}\n", data.input));
    out.push_str(&format!("Scoring profile: {}\n", data.profile));
    out.push_str(&format!("Frames assessed: {}\n", data.n_frames));
    out.push_str(&format!(
        "Dominant risk level: {}\n",
        level_with_label(data.dominant_level, &data.risk_levels)
    ));
    out.push_str(&format!(
        "Peak risk level: {}\n",
        level_with_label(data.peak_level, &data.risk_levels)
    ));
    out.push_str(&format!(
        "Final score median: {}\nFinal score p90: {}\nFinal score max: {}\n",
        format_f32_6(data.final_score.median),
        format_f32_6(data.final_score.p90),
        data.final_score.max
    ));
    out.push_str(&format!(
        "{}\n\n",
        exposure_statement(data.high_risk_fraction)
    ));

    out.push_str("2. Risk level distribution\n");
    for stat in &data.risk_levels {
        out.push_str(&format!(
            "{}: {} ({})\n",
            stat.level.name(),
            stat.count,
            format_f32_6(stat.fraction)
        ));
    }
    out.push('\n');

    out.push_str("3. Body segments\n");
    for stat in &data.segments {
        out.push_str(&format!(
            "{}: level median={}, p90={}\n",
            stat.segment.name(),
            format_f32_6(stat.level_median),
            format_f32_6(stat.level_p90)
        ));
    }
    let worst = worst_segments(&data.segments);
    if !worst.is_empty() {
        out.push_str(&format!("Main contributors: {}\n", worst.join(", ")));
    }
    out.push('\n');

    out.push_str("4. Quality and caveats\n");
    out.push_str(&format!(
        "DEGRADED fraction: {}\n",
        format_f32_6(data.degraded_fraction)
    ));
    for stat in &data.segments {
        if stat.defaulted_fraction > 0.0
            || stat.one_sided_fraction > 0.0
            || stat.proxy_fraction > 0.0
        {
            out.push_str(&format!(
                "{}: defaulted={}, one_sided={}, proxy={}\n",
                stat.segment.name(),
                format_f32_6(stat.defaulted_fraction),
                format_f32_6(stat.one_sided_fraction),
                format_f32_6(stat.proxy_fraction)
            ));
        }
    }
    if data.degraded_fraction > 0.5 {
        out.push_str(
            "Note: most frames lacked landmarks for at least one segment; scores lean low.\n",
        );
    }
    out.push_str("Scores follow an approximation of REBA and are not a certified clinical assessment.\n");

    out
}

fn level_with_label(level: Option<RiskLevel>, stats: &[RiskStat]) -> String {
    match level {
        Some(level) => match stats.iter().find(|s| s.level == level) {
            Some(stat) if !stat.label.is_empty() => format!("{} ({})", level.name(), stat.label),
            _ => level.name().to_string(),
        },
        None => "n/a".to_string(),
    }
}

fn exposure_statement(high_fraction: f32) -> &'static str {
    if high_fraction >= 0.50 {
        "Most of the recording is at high risk or above."
    } else if high_fraction >= 0.10 {
        "A notable share of the recording reaches high risk."
    } else if high_fraction > 0.0 {
        "High-risk postures are brief."
    } else {
        "No frame reached high risk."
    }
}

/// Segments whose median level is above their neutral level of 1,
/// highest first.
fn worst_segments(stats: &[SegmentStat]) -> Vec<String> {
    let mut sorted: Vec<&SegmentStat> = stats.iter().filter(|s| s.level_median > 1.0).collect();
    sorted.sort_by(|a, b| {
        match b
            .level_median
            .partial_cmp(&a.level_median)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.segment.cmp(&b.segment),
            other => other,
        }
    });
    sorted
        .into_iter()
        .take(2)
        .map(|s| s.segment.name().to_string())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
