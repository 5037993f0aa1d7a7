use crate::registry::{SectionSpec, SECTIONS};

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub display_title: &'static str,
    pub active: bool,
}

/// Keeps at most one section active. Every activation rewrites all flags,
/// so the result never depends on the previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSwitcher {
    sections: Vec<Section>,
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self::from_registry(SECTIONS)
    }
}

impl ViewSwitcher {
    pub fn from_registry(specs: &'static [SectionSpec]) -> Self {
        let mut seen_initial = false;
        let sections = specs
            .iter()
            .map(|spec| {
                let active = spec.initially_active && !seen_initial;
                seen_initial |= active;
                Section {
                    id: spec.id,
                    display_title: spec.display_title,
                    active,
                }
            })
            .collect();
        Self { sections }
    }

    /// Returns the document title to apply, or `None` when `id` is not
    /// registered, in which case nothing changed.
    pub fn activate(&mut self, id: &str) -> Option<&'static str> {
        let target = self.sections.iter().position(|s| s.id == id)?;
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.active = i == target;
        }
        Some(self.sections[target].display_title)
    }

    pub fn active(&self) -> Option<&Section> {
        self.sections().iter().find(|s| s.active)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().map_or(false, |s| s.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_ids(switcher: &ViewSwitcher) -> Vec<&'static str> {
        switcher
            .sections()
            .iter()
            .filter(|s| s.active)
            .map(|s| s.id)
            .collect()
    }

    #[test]
    fn starts_on_the_marked_section() {
        let switcher = ViewSwitcher::default();
        assert_eq!(active_ids(&switcher), vec!["home"]);
    }

    #[test]
    fn every_registered_id_becomes_the_only_active_one() {
        let mut switcher = ViewSwitcher::default();
        for spec in SECTIONS {
            let title = switcher.activate(spec.id);
            assert_eq!(title, Some(spec.display_title));
            assert_eq!(active_ids(&switcher), vec![spec.id]);
        }
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut switcher = ViewSwitcher::default();
        switcher.activate("about");
        let before = switcher.clone();
        assert_eq!(switcher.activate("settings"), None);
        assert_eq!(switcher, before);
        assert!(switcher.is_active("about"));
    }

    #[test]
    fn repeated_activation_is_idempotent() {
        let mut switcher = ViewSwitcher::default();
        switcher.activate("analyzer");
        switcher.activate("analyzer");
        assert_eq!(active_ids(&switcher), vec!["analyzer"]);
    }

    static UNMARKED: &[SectionSpec] = &[
        SectionSpec { id: "a", nav_label: "A", display_title: "A", initially_active: false },
        SectionSpec { id: "b", nav_label: "B", display_title: "B", initially_active: false },
    ];

    #[test]
    fn nothing_visible_until_first_activation_without_marker() {
        let mut switcher = ViewSwitcher::from_registry(UNMARKED);
        assert!(switcher.active().is_none());
        switcher.activate("b");
        assert_eq!(active_ids(&switcher), vec!["b"]);
    }
}
