/// Daily focus goal in minutes (2 hours)
pub const DAILY_GOAL_MINUTES: u32 = 120;

/// Rough environmental-impact coefficients, per focused minute
const CO2_KG_PER_MINUTE: f64 = 0.1;
const ENERGY_KWH_PER_MINUTE: f64 = 0.05;

/// Gamified rank derived from trees grown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Seedling,
    GreenThumb,
    EcoWarrior,
    TreeHugger,
    ForestGuardian,
}

impl Level {
    /// Rank for a given tree count
    pub fn for_trees(trees: u32) -> Self {
        if trees >= 50 {
            Level::ForestGuardian
        } else if trees >= 20 {
            Level::TreeHugger
        } else if trees >= 10 {
            Level::EcoWarrior
        } else if trees >= 5 {
            Level::GreenThumb
        } else {
            Level::Seedling
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Seedling => "Seedling",
            Level::GreenThumb => "Green Thumb",
            Level::EcoWarrior => "Eco Warrior",
            Level::TreeHugger => "Tree Hugger",
            Level::ForestGuardian => "Forest Guardian",
        }
    }

    /// Get the emoji symbol for this level
    pub fn symbol(&self) -> &'static str {
        match self {
            Level::Seedling => "🌱",
            Level::GreenThumb => "🌿",
            Level::EcoWarrior => "🌳",
            Level::TreeHugger => "🌲",
            Level::ForestGuardian => "🌍",
        }
    }
}

/// Completed-session tallies for the current run.
/// Only natural countdown completions land here, never pause or reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub sessions_completed: u32,
    pub focused_minutes: u32,
    pub trees_grown: u32,
}

/// Presentation values derived from the tallies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsView {
    /// Fraction of the daily goal reached, clamped to 1.0
    pub daily_goal_fraction: f64,
    pub co2_saved_kg: f64,
    pub energy_saved_kwh: f64,
    pub level: Level,
}

impl SessionStats {
    /// Record one naturally completed session of `duration_minutes`
    pub fn record_completion(&mut self, duration_minutes: u32) {
        self.sessions_completed += 1;
        self.focused_minutes += duration_minutes;
        self.trees_grown += 1;
    }

    pub fn view(&self) -> StatsView {
        let fraction =
            f64::from(self.focused_minutes) / f64::from(DAILY_GOAL_MINUTES);
        StatsView {
            daily_goal_fraction: fraction.min(1.0),
            co2_saved_kg: f64::from(self.focused_minutes) * CO2_KG_PER_MINUTE,
            energy_saved_kwh: f64::from(self.focused_minutes) * ENERGY_KWH_PER_MINUTE,
            level: Level::for_trees(self.trees_grown),
        }
    }
}

/// Format minutes as "Xh Ym"
pub fn format_focused_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_completion_is_strictly_additive() {
        let mut stats = SessionStats::default();
        stats.record_completion(25);
        stats.record_completion(25);
        assert_eq!(stats.sessions_completed, 2);
        assert_eq!(stats.focused_minutes, 50);
        assert_eq!(stats.trees_grown, 2);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::for_trees(0), Level::Seedling);
        assert_eq!(Level::for_trees(4), Level::Seedling);
        assert_eq!(Level::for_trees(5), Level::GreenThumb);
        assert_eq!(Level::for_trees(9), Level::GreenThumb);
        assert_eq!(Level::for_trees(10), Level::EcoWarrior);
        assert_eq!(Level::for_trees(20), Level::TreeHugger);
        assert_eq!(Level::for_trees(49), Level::TreeHugger);
        assert_eq!(Level::for_trees(50), Level::ForestGuardian);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::for_trees(4).name(), "Seedling");
        assert_eq!(Level::for_trees(5).name(), "Green Thumb");
        assert_eq!(Level::for_trees(50).name(), "Forest Guardian");
    }

    #[test]
    fn test_daily_goal_fraction_clamps() {
        let mut stats = SessionStats::default();
        stats.record_completion(60);
        assert_eq!(stats.view().daily_goal_fraction, 0.5);
        stats.record_completion(60);
        assert_eq!(stats.view().daily_goal_fraction, 1.0);
        stats.record_completion(60);
        assert_eq!(stats.view().daily_goal_fraction, 1.0);
    }

    #[test]
    fn test_environmental_estimates() {
        let mut stats = SessionStats::default();
        stats.record_completion(25);
        let view = stats.view();
        assert!((view.co2_saved_kg - 2.5).abs() < 1e-9);
        assert!((view.energy_saved_kwh - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_format_focused_time() {
        assert_eq!(format_focused_time(0), "0h 0m");
        assert_eq!(format_focused_time(50), "0h 50m");
        assert_eq!(format_focused_time(125), "2h 5m");
    }
}
