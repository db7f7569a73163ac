use super::mock_data::DashboardSelection;
use contracts::dashboards::d100_executive::DashboardBundle;

/// Single-entry memo of the last generated bundle.
///
/// Regenerates only when the selection changes, so re-selecting the current
/// subsidiary or period keeps the same numbers.
#[derive(Debug, Default)]
pub struct BundleCache {
    entry: Option<(DashboardSelection, DashboardBundle)>,
    generations: usize,
}

impl BundleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached bundle for `selection`, generating it with `generate` on a miss
    pub fn get_or_generate<F>(
        &mut self,
        selection: &DashboardSelection,
        generate: F,
    ) -> &DashboardBundle
    where
        F: FnOnce(&DashboardSelection) -> DashboardBundle,
    {
        if self
            .entry
            .as_ref()
            .is_some_and(|(key, _)| key != selection)
        {
            self.entry = None;
        }
        let generations = &mut self.generations;
        let (_, bundle) = self.entry.get_or_insert_with(|| {
            *generations += 1;
            (selection.clone(), generate(selection))
        });
        bundle
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&DashboardBundle> {
        self.entry.as_ref().map(|(_, bundle)| bundle)
    }

    /// How many bundles have been generated so far
    pub fn generations(&self) -> usize {
        self.generations
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
