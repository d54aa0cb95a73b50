use std::collections::HashSet;

use relato_types::{Report, Section, SectionKey, SectionOrder, SectionSet};

use crate::{Error, Result};

/// Section counts towards the published report.
///
/// Visible and carrying either text or at least one image.
pub fn is_completed(section: &Section) -> bool {
    section.visible && (!section.content.trim().is_empty() || !section.images.is_empty())
}

/// Section counts towards the save threshold (text only, images don't count)
pub fn is_filled(section: &Section) -> bool {
    section.visible && !section.content.trim().is_empty()
}

pub fn count_filled(sections: &SectionSet) -> usize {
    sections.values().filter(|s| is_filled(s)).count()
}

pub fn count_completed(sections: &SectionSet) -> usize {
    sections.values().filter(|s| is_completed(s)).count()
}

/// Union of the stored order with every key present in the set.
///
/// Keys keep their stored relative order; keys missing from the set and
/// repeated keys are dropped; keys never ordered are appended in set order.
pub fn reconcile_order(sections: &SectionSet, order: &SectionOrder) -> SectionOrder {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut keys: Vec<SectionKey> = Vec::with_capacity(sections.len());

    for key in order {
        if sections.contains(key.as_str()) && seen.insert(key.as_str()) {
            keys.push(key.clone());
        }
    }

    for key in sections.keys() {
        if seen.insert(key.as_str()) {
            keys.push(key.clone());
        }
    }

    SectionOrder::new(keys)
}

/// Replace the section at `key` wholesale
pub fn update_section(report: &mut Report, key: &str, section: Section) -> Result<()> {
    let slot = report
        .sections
        .get_mut(key)
        .ok_or_else(|| Error::UnknownSection(SectionKey::from(key)))?;
    *slot = section;
    Ok(())
}

/// Replace the section order; `new_order` must permute the reconciled order.
pub fn reorder(report: &mut Report, new_order: SectionOrder) -> Result<()> {
    let current = reconcile_order(&report.sections, &report.section_order);
    if !is_permutation(&current, &new_order) {
        return Err(Error::InvalidReorder(format!(
            "expected a permutation of [{}]",
            join_keys(&current)
        )));
    }
    report.section_order = new_order;
    Ok(())
}

/// Same keys, same multiplicity, any order
pub fn is_permutation(a: &SectionOrder, b: &SectionOrder) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&str> = a.iter().map(|k| k.as_str()).collect();
    let mut right: Vec<&str> = b.iter().map(|k| k.as_str()).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

fn join_keys(order: &SectionOrder) -> String {
    order
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
