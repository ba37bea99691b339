//! Organization/title resolver: pick the "current" work-history entry.
//!
//! Selection runs as an explicit ordered list of passes so the precedence
//! is independently testable:
//!   1. first entry flagged `is_current`
//!   2. among entries with a parsable `start_date`, the most recent
//!   3. nothing — empty title and organization

use crate::types::{TeamMap, WorkHistory};
use crate::vcard::date::parse_date;

/// Resolved ORG/TITLE source. Empty strings mean "emit nothing".
#[derive(Debug, Default, PartialEq)]
pub struct CurrentJob {
    pub title: String,
    pub org: String,
}

pub fn resolve_current_job(history: &[WorkHistory], team_map: Option<&TeamMap>) -> CurrentJob {
    // Pass 1: explicit current flag
    if let Some(entry) = history.iter().find(|e| e.is_current) {
        return job_from_entry(entry, team_map);
    }

    // Pass 2: latest parsable start date; undated entries are ignored
    let latest = history
        .iter()
        .filter_map(|e| parse_date(&e.start_date).map(|d| (d, e)))
        .max_by_key(|(d, _)| *d);
    if let Some((_, entry)) = latest {
        return job_from_entry(entry, team_map);
    }

    CurrentJob::default()
}

fn job_from_entry(entry: &WorkHistory, team_map: Option<&TeamMap>) -> CurrentJob {
    let org = entry
        .team
        .as_ref()
        .and_then(|team| team_map?.get(&team.key()))
        .map(|t| t.name().trim().to_string())
        .unwrap_or_default();

    CurrentJob {
        title: entry.job_title.trim().to_string(),
        org,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TeamEntry, TeamRef};
    use std::collections::HashMap;

    fn entry(team: Option<u64>, title: &str, start: &str, current: bool) -> WorkHistory {
        WorkHistory {
            team: team.map(TeamRef::Id),
            job_title: title.to_string(),
            start_date: start.to_string(),
            is_current: current,
        }
    }

    fn teams(pairs: &[(&str, &str)]) -> TeamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), TeamEntry::Name(v.to_string())))
            .collect()
    }

    #[test]
    fn test_current_flag_beats_later_date() {
        let history = vec![
            entry(Some(1), "Chair", "2015-01-01", true),
            entry(Some(2), "Member", "2022-01-01", false),
        ];
        let map = teams(&[("1", "Board"), ("2", "Events")]);
        let job = resolve_current_job(&history, Some(&map));
        assert_eq!(job.title, "Chair");
        assert_eq!(job.org, "Board");
    }

    #[test]
    fn test_falls_back_to_latest_start_date() {
        let history = vec![
            entry(Some(1), "Old", "2015-01-01", false),
            entry(Some(2), "New", "2022-01-01", false),
        ];
        let map = teams(&[("1", "A"), ("2", "B")]);
        let job = resolve_current_job(&history, Some(&map));
        assert_eq!(job.title, "New");
        assert_eq!(job.org, "B");
    }

    #[test]
    fn test_undated_entries_ignored_in_fallback() {
        let history = vec![
            entry(Some(1), "Undated", "", false),
            entry(Some(2), "Dated", "2020-06-01", false),
        ];
        let map = teams(&[("1", "A"), ("2", "B")]);
        let job = resolve_current_job(&history, Some(&map));
        assert_eq!(job.title, "Dated");
    }

    #[test]
    fn test_no_usable_entries_yields_empty() {
        let history = vec![entry(None, "Ghost", "not a date", false)];
        assert_eq!(resolve_current_job(&history, None), CurrentJob::default());
        assert_eq!(resolve_current_job(&[], None), CurrentJob::default());
    }

    #[test]
    fn test_missing_team_map_entry_yields_empty_org() {
        let history = vec![entry(Some(99), "Chair", "", true)];
        let map = teams(&[("1", "Board")]);
        let job = resolve_current_job(&history, Some(&map));
        assert_eq!(job.org, "");
        assert_eq!(job.title, "Chair");
    }

    #[test]
    fn test_object_map_values_unwrap_name() {
        let mut map: TeamMap = HashMap::new();
        map.insert(
            "7".to_string(),
            TeamEntry::Object {
                name: "Commissie Feest".to_string(),
            },
        );
        let history = vec![entry(Some(7), "", "", true)];
        let job = resolve_current_job(&history, Some(&map));
        assert_eq!(job.org, "Commissie Feest");
    }
}
