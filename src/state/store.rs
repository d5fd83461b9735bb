use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{GardenError, Result};
use crate::models::{CalculationResult, SavedPlan, UserProgress};

const PLANS_FILE: &str = "plans.json";
const PROGRESS_FILE: &str = "progress.json";

const SECONDS_PER_DAY: u64 = 86_400;

/// Map from achievement key to (name, description).
pub static ACHIEVEMENTS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("first_calc", ("First Calculation", "Use the calculator for the first time"));
        m.insert("calc_10", ("Calculator Pro", "Perform 10 calculations"));
        m.insert("calc_100", ("Calculation Master", "Perform 100 calculations"));
        m.insert("first_plan", ("Planner", "Save your first plan"));
        m.insert("plans_5", ("Plan Maker", "Save 5 plans"));
        m.insert("streak_3", ("Consistent Gardener", "Visit 3 days in a row"));
        m.insert("streak_7", ("Weekly Gardener", "Visit 7 days in a row"));
        m.insert("roi_100", ("Profit Master", "Achieve 100% ROI"));
        m
    });

/// Get achievement (name, description) for a key, falling back to the key itself.
pub fn achievement_info(key: &str) -> (&str, &str) {
    ACHIEVEMENTS.get(key).copied().unwrap_or((key, ""))
}

/// Key-value store for saved plans and gamified progress.
///
/// The store assigns plan ids and timestamps; the calculation engine never
/// does. Missing or unreadable files load as empty defaults.
pub struct PlanStore {
    dir: PathBuf,
}

impl PlanStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    // ---- plans ----

    /// All saved plans, newest first.
    pub fn list_plans(&self) -> Vec<SavedPlan> {
        read_or_default(&self.dir.join(PLANS_FILE))
    }

    /// Save a result under a user-chosen name. Assigns id and created_at.
    pub fn save_plan(&self, name: &str, result: &CalculationResult) -> Result<SavedPlan> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        let plan = SavedPlan {
            id: now.as_millis().to_string(),
            name: name.to_string(),
            result: result.clone(),
            created_at: now.as_secs(),
        };

        let mut plans = self.list_plans();
        plans.insert(0, plan.clone());
        self.write_plans(&plans)?;

        Ok(plan)
    }

    pub fn delete_plan(&self, id: &str) -> Result<()> {
        let mut plans = self.list_plans();
        let before = plans.len();
        plans.retain(|p| p.id != id);

        if plans.len() == before {
            return Err(GardenError::PlanNotFound(id.to_string()));
        }

        self.write_plans(&plans)
    }

    /// The saved plan with the highest ROI, if any.
    pub fn best_plan(&self) -> Option<SavedPlan> {
        self.list_plans().into_iter().max_by(|a, b| {
            a.result
                .roi
                .partial_cmp(&b.result.roi)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    fn write_plans(&self, plans: &[SavedPlan]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(plans)?;
        fs::write(self.dir.join(PLANS_FILE), json)?;
        Ok(())
    }

    // ---- progress ----

    pub fn progress(&self) -> UserProgress {
        read_or_default(&self.dir.join(PROGRESS_FILE))
    }

    /// Record one calculation: visit/streak bookkeeping, best-ROI tracking,
    /// achievement checks.
    pub fn track_calculation(&self, plant_name: &str, roi: f64) -> Result<UserProgress> {
        self.track_calculation_on(today(), plant_name, roi)
    }

    fn track_calculation_on(&self, day: u64, plant_name: &str, roi: f64) -> Result<UserProgress> {
        let mut progress = self.progress();

        if progress.last_visit_day != day {
            progress.streak = if progress.last_visit_day + 1 == day {
                progress.streak + 1
            } else {
                1
            };
            progress.days_active += 1;
        }

        progress.total_calculations += 1;
        progress.last_visit_day = day;

        if roi > progress.best_roi {
            progress.best_roi = roi;
            progress.top_plant = Some(plant_name.to_string());
        }

        check_achievements(&mut progress);
        self.write_progress(&progress)?;

        Ok(progress)
    }

    pub fn track_plan_saved(&self) -> Result<UserProgress> {
        let mut progress = self.progress();
        progress.total_plans_saved += 1;
        check_achievements(&mut progress);
        self.write_progress(&progress)?;
        Ok(progress)
    }

    fn write_progress(&self, progress: &UserProgress) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(self.dir.join(PROGRESS_FILE), json)?;
        Ok(())
    }

    // ---- reset ----

    pub fn clear_plans(&self) -> Result<()> {
        remove_if_exists(&self.dir.join(PLANS_FILE))
    }

    pub fn clear_progress(&self) -> Result<()> {
        remove_if_exists(&self.dir.join(PROGRESS_FILE))
    }
}

fn today() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        / SECONDS_PER_DAY
}

fn read_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
    fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn check_achievements(progress: &mut UserProgress) {
    let calcs = progress.total_calculations;
    let plans = progress.total_plans_saved;
    let streak = progress.streak;
    let best_roi = progress.best_roi;

    let mut unlock = |key: &str| {
        if !progress.achievements.iter().any(|a| a == key) {
            progress.achievements.push(key.to_string());
        }
    };

    if calcs >= 1 {
        unlock("first_calc");
    }
    if calcs >= 10 {
        unlock("calc_10");
    }
    if calcs >= 100 {
        unlock("calc_100");
    }
    if plans >= 1 {
        unlock("first_plan");
    }
    if plans >= 5 {
        unlock("plans_5");
    }
    if streak >= 3 {
        unlock("streak_3");
    }
    if streak >= 7 {
        unlock("streak_7");
    }
    if best_roi >= 100.0 {
        unlock("roi_100");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use crate::models::{Confidence, Plant, Rarity, Stage};
    use tempfile::TempDir;

    fn sample_result() -> CalculationResult {
        let plant = Plant {
            slug: "sunberry".to_string(),
            name: "Sunberry".to_string(),
            rarity: Rarity::Common,
            cost: 100.0,
            base_value: 200.0,
            grow_time_sec: 3600.0,
            avg_weight: 1.0,
            multi_harvest: false,
            data_source: "wiki".to_string(),
            last_verified_at: "2026-08-01".to_string(),
            confidence: Confidence::A,
            evidence: None,
            notes: None,
        };
        calculate(&plant, Stage::Lush, &[], 1.0, false)
    }

    #[test]
    fn test_save_list_delete_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        assert!(store.list_plans().is_empty());

        let saved = store.save_plan("weekend farm", &sample_result()).unwrap();
        let plans = store.list_plans();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "weekend farm");
        assert_eq!(plans[0].id, saved.id);

        store.delete_plan(&saved.id).unwrap();
        assert!(store.list_plans().is_empty());

        assert!(matches!(
            store.delete_plan("nope"),
            Err(GardenError::PlanNotFound(_))
        ));
    }

    #[test]
    fn test_best_plan_by_roi() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        let high = sample_result();
        let mut low = sample_result();
        low.roi = 10.0;

        store.save_plan("low", &low).unwrap();
        store.save_plan("high", &high).unwrap();

        assert_eq!(store.best_plan().unwrap().name, "high");
    }

    #[test]
    fn test_track_calculation_streak() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        let p1 = store.track_calculation_on(100, "Sunberry", 50.0).unwrap();
        assert_eq!(p1.streak, 1);
        assert_eq!(p1.days_active, 1);
        assert_eq!(p1.total_calculations, 1);

        // Same day: streak unchanged
        let p2 = store.track_calculation_on(100, "Sunberry", 60.0).unwrap();
        assert_eq!(p2.streak, 1);
        assert_eq!(p2.days_active, 1);
        assert_eq!(p2.total_calculations, 2);

        // Next day: streak grows
        let p3 = store.track_calculation_on(101, "Sunberry", 60.0).unwrap();
        assert_eq!(p3.streak, 2);
        assert_eq!(p3.days_active, 2);

        // Gap: streak resets
        let p4 = store.track_calculation_on(105, "Sunberry", 60.0).unwrap();
        assert_eq!(p4.streak, 1);
        assert_eq!(p4.days_active, 3);
    }

    #[test]
    fn test_track_calculation_best_roi_and_achievements() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        let p = store.track_calculation_on(100, "Sunberry", 150.0).unwrap();
        assert_eq!(p.best_roi, 150.0);
        assert_eq!(p.top_plant.as_deref(), Some("Sunberry"));
        assert!(p.achievements.iter().any(|a| a == "first_calc"));
        assert!(p.achievements.iter().any(|a| a == "roi_100"));

        // Lower roi does not displace the best
        let p = store.track_calculation_on(100, "Dustcap", 90.0).unwrap();
        assert_eq!(p.top_plant.as_deref(), Some("Sunberry"));
    }

    #[test]
    fn test_track_plan_saved_achievements() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        for _ in 0..5 {
            store.track_plan_saved().unwrap();
        }

        let progress = store.progress();
        assert_eq!(progress.total_plans_saved, 5);
        assert!(progress.achievements.iter().any(|a| a == "first_plan"));
        assert!(progress.achievements.iter().any(|a| a == "plans_5"));
    }

    #[test]
    fn test_corrupt_files_load_as_defaults() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(PLANS_FILE), "not json").unwrap();
        fs::write(dir.path().join(PROGRESS_FILE), "{broken").unwrap();

        let store = PlanStore::new(dir.path());
        assert!(store.list_plans().is_empty());
        assert_eq!(store.progress().total_calculations, 0);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = PlanStore::new(dir.path());

        store.save_plan("plan", &sample_result()).unwrap();
        store.track_calculation_on(100, "Sunberry", 50.0).unwrap();

        store.clear_plans().unwrap();
        store.clear_progress().unwrap();

        assert!(store.list_plans().is_empty());
        assert_eq!(store.progress().total_calculations, 0);
    }
}
