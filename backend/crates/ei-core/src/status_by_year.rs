use crate::{FinalStatus, StatusChange, StatusYearEntry};

use std::collections::BTreeMap;

/// Collapse raw status changes into the status each proposal ended every
/// year in.
///
/// Changes are grouped by `(changed_year, eip)`; the latest `change_date`
/// in a group wins and its `to_status` becomes `last_status`. Years come out
/// ascending, proposals within a year by numeric proposal number.
pub fn final_status_by_year(changes: &[StatusChange]) -> Vec<StatusYearEntry> {
    let mut latest: BTreeMap<i32, BTreeMap<(u64, String), &StatusChange>> = BTreeMap::new();

    for change in changes {
        let key = (proposal_number(&change.eip), change.eip.clone());
        let year = latest.entry(change.changed_year).or_default();

        match year.get(&key) {
            Some(existing) if existing.change_date >= change.change_date => {}
            _ => {
                year.insert(key, change);
            }
        }
    }

    latest
        .into_iter()
        .map(|(year, by_eip)| StatusYearEntry {
            year,
            status_changes: by_eip
                .into_values()
                .map(|c| FinalStatus {
                    eip: c.eip.clone(),
                    last_status: c.to_status.clone(),
                    eip_title: c.eip_title.clone(),
                    eip_category: c.eip_category.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Non-numeric identifiers sort after every numeric one
fn proposal_number(eip: &str) -> u64 {
    eip.trim().parse().unwrap_or(u64::MAX)
}
