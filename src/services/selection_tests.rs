#[cfg(test)]
mod tests {
    use crate::config::SelectionConfig;
    use crate::models::WeeklyMetroObservation;
    use crate::services::selection::{
        default_metros, metros, resolve_selection, scope_rows, states, Scope, ALL_USA,
    };

    fn obs(
        cbsa: &str,
        state: &str,
        date: (i32, u32, u32),
        admissions: f64,
    ) -> WeeklyMetroObservation {
        WeeklyMetroObservation {
            cbsa: cbsa.to_string(),
            cbsa_short: cbsa.split(',').next().unwrap().trim().to_string(),
            report_date: chrono::NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            hosp_timerange: "w".to_string(),
            admissions_covid_confirmed_last_7_days: admissions,
            admits_100k: admissions / 10.0,
            admits_pct_change: None,
            state: state.to_string(),
            lat: 0.0,
            lon: 0.0,
            total_population_2019: 100000.0,
            timeslider: 0,
        }
    }

    fn config(limit: usize, floor: f64) -> SelectionConfig {
        SelectionConfig {
            default_metro_limit: limit,
            national_admissions_floor: floor,
        }
    }

    #[test]
    fn test_scope_from_query() {
        assert_eq!(Scope::from_query(None), Scope::AllUsa);
        assert_eq!(Scope::from_query(Some("")), Scope::AllUsa);
        assert_eq!(Scope::from_query(Some(ALL_USA)), Scope::AllUsa);
        assert_eq!(
            Scope::from_query(Some("CA")),
            Scope::State("CA".to_string())
        );
    }

    #[test]
    fn test_scope_rows_restricts_by_state() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 100.0),
            obs("B, TX", "TX", (2021, 8, 14), 50.0),
        ];
        let scoped = scope_rows(&rows, &Scope::State("CA".to_string()));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].cbsa, "A, CA");
        assert_eq!(scope_rows(&rows, &Scope::AllUsa).len(), 2);
    }

    #[test]
    fn test_default_metros_state_ranked_descending() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 100.0),
            obs("B, CA", "CA", (2021, 8, 14), 50.0),
            obs("C, CA", "CA", (2021, 8, 14), 200.0),
        ];
        let scope = Scope::State("CA".to_string());
        let scoped = scope_rows(&rows, &scope);
        let defaults = default_metros(&scoped, &scope, &config(8, 1000.0));
        assert_eq!(defaults, vec!["C, CA", "A, CA", "B, CA"]);
    }

    #[test]
    fn test_default_metros_truncated_to_limit() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 100.0),
            obs("B, CA", "CA", (2021, 8, 14), 50.0),
            obs("C, CA", "CA", (2021, 8, 14), 200.0),
        ];
        let scope = Scope::State("CA".to_string());
        let scoped = scope_rows(&rows, &scope);
        let defaults = default_metros(&scoped, &scope, &config(2, 1000.0));
        assert_eq!(defaults, vec!["C, CA", "A, CA"]);
    }

    #[test]
    fn test_default_metros_use_latest_date_only() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 7), 9999.0),
            obs("A, CA", "CA", (2021, 8, 14), 10.0),
            obs("B, CA", "CA", (2021, 8, 14), 20.0),
        ];
        let scope = Scope::State("CA".to_string());
        let scoped = scope_rows(&rows, &scope);
        let defaults = default_metros(&scoped, &scope, &config(8, 1000.0));
        // A's huge prior week is irrelevant; only the latest date counts
        assert_eq!(defaults, vec!["B, CA", "A, CA"]);
    }

    #[test]
    fn test_default_metros_national_floor() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 1500.0),
            obs("B, TX", "TX", (2021, 8, 14), 999.0),
            obs("C, NY", "NY", (2021, 8, 14), 2500.0),
            obs("D, FL", "FL", (2021, 8, 14), 1000.0),
        ];
        let scoped = scope_rows(&rows, &Scope::AllUsa);
        let defaults = default_metros(&scoped, &Scope::AllUsa, &config(8, 1000.0));
        // Strictly above the floor: 1000.0 itself is out
        assert_eq!(defaults, vec!["C, NY", "A, CA"]);
    }

    #[test]
    fn test_default_metros_empty_table() {
        let rows: Vec<WeeklyMetroObservation> = vec![];
        let scoped = scope_rows(&rows, &Scope::AllUsa);
        assert!(default_metros(&scoped, &Scope::AllUsa, &config(8, 1000.0)).is_empty());
    }

    #[test]
    fn test_empty_selection_means_none_nationally() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 100.0),
            obs("B, TX", "TX", (2021, 8, 14), 50.0),
        ];
        let scoped = scope_rows(&rows, &Scope::AllUsa);
        let resolved = resolve_selection(&scoped, &Scope::AllUsa, &[]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_empty_selection_means_all_in_state() {
        let rows = vec![
            obs("A, CA", "CA", (2021, 8, 14), 100.0),
            obs("B, CA", "CA", (2021, 8, 7), 50.0),
            obs("C, TX", "TX", (2021, 8, 14), 50.0),
        ];
        let scope = Scope::State("CA".to_string());
        let scoped = scope_rows(&rows, &scope);
        let resolved = resolve_selection(&scoped, &scope, &[]);
        assert_eq!(resolved, vec!["A, CA", "B, CA"]);
    }

    #[test]
    fn test_explicit_selection_passes_through() {
        let rows = vec![obs("A, CA", "CA", (2021, 8, 14), 100.0)];
        let scoped = scope_rows(&rows, &Scope::AllUsa);
        let picked = vec!["A, CA".to_string()];
        let resolved = resolve_selection(&scoped, &Scope::AllUsa, &picked);
        assert_eq!(resolved, picked);
    }

    #[test]
    fn test_metros_distinct_sorted() {
        let rows = vec![
            obs("B, CA", "CA", (2021, 8, 14), 1.0),
            obs("A, CA", "CA", (2021, 8, 14), 1.0),
            obs("A, CA", "CA", (2021, 8, 7), 1.0),
        ];
        let scoped = scope_rows(&rows, &Scope::AllUsa);
        assert_eq!(metros(&scoped), vec!["A, CA", "B, CA"]);
    }

    #[test]
    fn test_states_distinct_sorted() {
        let rows = vec![
            obs("A, TX", "TX", (2021, 8, 14), 1.0),
            obs("B, CA", "CA", (2021, 8, 14), 1.0),
            obs("C, TX", "TX", (2021, 8, 14), 1.0),
        ];
        assert_eq!(states(&rows), vec!["CA", "TX"]);
    }
}
