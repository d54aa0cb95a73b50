//! Custom assertions for relato-specific validation.
//!
//! - Section order permutation checks
//! - Section state checks on a report aggregate
//! - JSON structure checks on CLI output

use anyhow::{Context, Result};
use relato_types::{Report, SectionOrder};
use serde_json::Value;
use std::collections::BTreeSet;

/// Assert that `after` holds exactly the keys of `before`, each once.
pub fn assert_permutation(before: &SectionOrder, after: &SectionOrder) -> Result<()> {
    let a: BTreeSet<&str> = before.iter().map(|k| k.as_str()).collect();
    let b: BTreeSet<&str> = after.iter().map(|k| k.as_str()).collect();

    if before.len() != after.len() || b.len() != after.len() || a != b {
        anyhow::bail!(
            "Order is not a permutation: {:?} -> {:?}",
            before.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
            after.iter().map(|k| k.as_str()).collect::<Vec<_>>()
        );
    }
    Ok(())
}

/// Assert that exactly one key moved between two orders.
pub fn assert_single_move(before: &SectionOrder, after: &SectionOrder) -> Result<()> {
    assert_permutation(before, after)?;

    let moved = (0..before.len()).any(|from| {
        let mut keys = before.as_slice().to_vec();
        let key = keys.remove(from);
        (0..before.len()).any(|to| {
            let mut candidate = keys.clone();
            candidate.insert(to, key.clone());
            from != to && candidate.as_slice() == after.as_slice()
        })
    });
    if !moved {
        anyhow::bail!("More than one section moved");
    }
    Ok(())
}

/// Assert a section's visibility and whether it has text.
pub fn assert_section(report: &Report, key: &str, visible: bool, has_content: bool) -> Result<()> {
    let section = report
        .sections
        .get(key)
        .with_context(|| format!("Section {} missing", key))?;

    if section.visible != visible {
        anyhow::bail!("Section {} visible = {}, expected {}", key, section.visible, visible);
    }
    if section.content.trim().is_empty() == has_content {
        anyhow::bail!(
            "Section {} content {:?}, expected {}",
            key,
            section.content,
            if has_content { "text" } else { "empty" }
        );
    }
    Ok(())
}

/// Assert that CLI JSON output lists the expected number of reports.
pub fn assert_report_count(json: &Value, expected: usize) -> Result<()> {
    let reports = json["content"]["reports"]
        .as_array()
        .context("Expected 'content.reports' array in JSON")?;

    if reports.len() != expected {
        anyhow::bail!("Expected {} reports, got {}", expected, reports.len());
    }
    Ok(())
}
