use serde::Serialize;

/// Declarative path rules selecting which transactions belong to a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRules {
    /// Path prefix of the track, e.g. `/johvi/div-01`.
    pub track: String,
    /// Sub-tracks whose first segment after the track starts with one of
    /// these entries are left out of the XP total.
    pub total_excluded: Vec<String>,
    /// Any segment after the track containing one of these entries keeps the
    /// transaction out of the chart series.
    pub series_excluded: Vec<String>,
}

impl Default for TrackRules {
    fn default() -> Self {
        Self {
            track: "/johvi/div-01".to_string(),
            total_excluded: vec!["piscine-js".to_string()],
            series_excluded: vec!["piscine".to_string()],
        }
    }
}

impl TrackRules {
    pub fn new(
        track: impl Into<String>,
        total_excluded: Vec<String>,
        series_excluded: Vec<String>,
    ) -> Self {
        let track: String = track.into();
        Self {
            track: track.trim_end_matches('/').to_string(),
            total_excluded: total_excluded.into_iter().filter(|e| !e.is_empty()).collect(),
            series_excluded: series_excluded.into_iter().filter(|e| !e.is_empty()).collect(),
        }
    }

    /// Part of `path` after the track, without the leading slash. `None` when
    /// the path is outside the track or only shares a partial segment with it.
    fn remainder<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.track.as_str())?;
        if rest.is_empty() {
            return Some(rest);
        }
        rest.strip_prefix('/')
    }

    pub fn admits_total(&self, path: &str) -> bool {
        let Some(rest) = self.remainder(path) else {
            return false;
        };
        let first = rest.split('/').next().unwrap_or_default();
        !self
            .total_excluded
            .iter()
            .any(|excluded| first.starts_with(excluded.as_str()))
    }

    pub fn admits_series(&self, path: &str) -> bool {
        match self.remainder(path) {
            Some(rest) if !rest.is_empty() => !rest.split('/').any(|segment| {
                self.series_excluded
                    .iter()
                    .any(|excluded| segment.contains(excluded.as_str()))
            }),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_excludes_piscine_js_subtrack() {
        let rules = TrackRules::default();
        assert!(!rules.admits_total("/johvi/div-01/piscine-js/xp"));
        assert!(!rules.admits_total("/johvi/div-01/piscine-js"));
        assert!(rules.admits_total("/johvi/div-01/some-task"));
        assert!(rules.admits_total("/johvi/div-01"));
    }

    #[test]
    fn total_keeps_other_piscines() {
        let rules = TrackRules::default();
        assert!(rules.admits_total("/johvi/div-01/piscine-go-lite/task"));
    }

    #[test]
    fn paths_outside_track_are_rejected() {
        let rules = TrackRules::default();
        assert!(!rules.admits_total("/johvi/piscine-go/quest-01"));
        assert!(!rules.admits_total("/johvi/div-01x/task"));
        assert!(!rules.admits_series("/johvi/piscine-go/quest-01"));
        assert!(!rules.admits_series("/johvi/div-01x/task"));
    }

    #[test]
    fn series_excludes_any_nested_piscine() {
        let rules = TrackRules::default();
        assert!(rules.admits_series("/johvi/div-01/go-reloaded"));
        assert!(!rules.admits_series("/johvi/div-01/piscine-js/quest-01"));
        assert!(!rules.admits_series("/johvi/div-01/rust/piscine-rust/quest-02"));
        assert!(!rules.admits_series("/johvi/div-01"));
    }

    #[test]
    fn new_normalises_track_and_drops_blank_exclusions() {
        let rules = TrackRules::new(
            "/school/main/",
            vec!["".to_string(), "trial".to_string()],
            vec!["".to_string()],
        );
        assert_eq!(rules.track, "/school/main");
        assert_eq!(rules.total_excluded, vec!["trial".to_string()]);
        assert!(rules.series_excluded.is_empty());
        assert!(rules.admits_series("/school/main/task"));
        assert!(!rules.admits_total("/school/main/trial-run/task"));
    }
}
