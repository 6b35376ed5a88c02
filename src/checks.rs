use crate::model::{Assignments, Firm, Student};
use eyre::{Result, bail};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Fail if a firm got more students than its quota allows.
pub fn check_quotas(a: &Assignments) -> Result<()> {
    if let Some(over) = a.all_firms().into_iter().find(|&f| a.is_over_capacity(f)) {
        bail!(
            "firm {} received {} students for a quota of {}",
            a.firm(over).name,
            a.size(over),
            a.quota(over)
        );
    }
    Ok(())
}

/// Warn about firms registered more than once. Only the last quota counts.
/// Returns the names of the duplicated firms.
pub fn warn_duplicate_firms(firms: &[Firm]) -> Vec<String> {
    let mut last_quota: HashMap<&str, (usize, u32)> = HashMap::new();
    let mut duplicates = Vec::new();
    for firm in firms {
        let entry = last_quota.entry(&firm.name).or_insert((0, firm.quota));
        entry.0 += 1;
        entry.1 = firm.quota;
        if entry.0 == 2 {
            duplicates.push(firm.name.clone());
        }
    }
    for name in &duplicates {
        let (count, quota) = last_quota[name.as_str()];
        warn!(firm = %name, count, quota, "firm registered several times, using last quota");
    }
    duplicates
}

/// Warn about preferences naming a firm which has not been registered.
/// Returns the number of such preferences.
pub fn warn_unknown_preferences(students: &[Student], firms: &[Firm]) -> usize {
    let known = firms.iter().map(|f| f.name.as_str()).collect::<HashSet<_>>();
    let mut unknown = 0;
    for s in students {
        for (rank, p) in s.preferences.iter().enumerate() {
            if !p.is_empty() && !known.contains(p.as_str()) {
                warn!(student = %s.name, firm = %p, rank = rank + 1, "preferred firm is unknown");
                unknown += 1;
            }
        }
    }
    unknown
}
