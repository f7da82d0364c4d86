/// Top-level content sections of the app. Exactly one is visible at a
/// time; navigation switches between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Stats,
    Insights,
}

impl Section {
    /// Parse a section from its navigation id
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Section::Home),
            "stats" => Some(Section::Stats),
            "insights" => Some(Section::Insights),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Stats => "stats",
            Section::Insights => "insights",
        }
    }

    /// Get the display name for this section
    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "Focus",
            Section::Stats => "Garden",
            Section::Insights => "Insights",
        }
    }

    /// Get all sections in navigation order
    pub fn all() -> &'static [Section] {
        &[Section::Home, Section::Stats, Section::Insights]
    }

    /// Next section in navigation order, wrapping around
    pub fn next(&self) -> Section {
        let all = Section::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous section in navigation order, wrapping around
    pub fn prev(&self) -> Section {
        let all = Section::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_id() {
        assert_eq!(Section::from_id("home"), Some(Section::Home));
        assert_eq!(Section::from_id("stats"), Some(Section::Stats));
        assert_eq!(Section::from_id("insights"), Some(Section::Insights));
        assert_eq!(Section::from_id("settings"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn test_id_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()), Some(*section));
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Section::Home.next(), Section::Stats);
        assert_eq!(Section::Insights.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Insights);
        assert_eq!(Section::Stats.prev(), Section::Home);
    }
}
