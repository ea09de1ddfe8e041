use super::currency::Currency;

/// What one source currency became in the current document.
#[derive(Debug)]
pub struct CurrencyEntry {
    pub target: &'static Currency,
    /// Display form chosen for the target on first occurrence.
    pub symbol: String,
    amounts: Vec<(f64, String)>,
}

impl CurrencyEntry {
    pub fn new(target: &'static Currency, symbol: impl Into<String>) -> Self {
        Self {
            target,
            symbol: symbol.into(),
            amounts: Vec::new(),
        }
    }

    /// Replacement already produced for this original value, if any.
    pub fn rendered_for(&self, value: f64) -> Option<&str> {
        self.amounts
            .iter()
            .find(|(original, _)| *original == value)
            .map(|(_, rendered)| rendered.as_str())
    }

    pub fn record(&mut self, value: f64, rendered: impl Into<String>) {
        self.amounts.push((value, rendered.into()));
    }

    /// (original value, replacement) pairs in document order.
    pub fn amounts(&self) -> &[(f64, String)] {
        &self.amounts
    }
}

/// Per-document memory of currency decisions.
///
/// Created empty for each transformation call and dropped with it. Once a
/// source currency has an entry its target and symbol never change. Ad hoc
/// units are never switched, so they only remember their rendered amounts.
#[derive(Debug, Default)]
pub struct DocumentState {
    entries: Vec<(&'static str, CurrencyEntry)>,
    ad_hoc: Vec<(String, f64, String)>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, source: &str) -> Option<&CurrencyEntry> {
        self.entries
            .iter()
            .find(|(name, _)| *name == source)
            .map(|(_, entry)| entry)
    }

    pub fn entry_mut(&mut self, source: &str) -> Option<&mut CurrencyEntry> {
        self.entries
            .iter_mut()
            .find(|(name, _)| *name == source)
            .map(|(_, entry)| entry)
    }

    /// Entry for `source`, created from `entry` on first occurrence only.
    pub fn entry_or_insert(
        &mut self,
        source: &'static str,
        entry: CurrencyEntry,
    ) -> &mut CurrencyEntry {
        let index = match self.entries.iter().position(|(name, _)| *name == source) {
            Some(index) => index,
            None => {
                self.entries.push((source, entry));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Whether some source currency already maps to `name`.
    pub fn is_target(&self, name: &str) -> bool {
        self.entries.iter().any(|(_, entry)| entry.target.name == name)
    }

    /// Source currency names in order of first occurrence.
    pub fn sources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Replacement already produced for `value` written in the ad hoc `unit`.
    pub fn ad_hoc_rendered_for(&self, unit: &str, value: f64) -> Option<&str> {
        self.ad_hoc
            .iter()
            .find(|(u, original, _)| u == unit && *original == value)
            .map(|(_, _, rendered)| rendered.as_str())
    }

    pub fn record_ad_hoc(
        &mut self,
        unit: impl Into<String>,
        value: f64,
        rendered: impl Into<String>,
    ) {
        self.ad_hoc.push((unit.into(), value, rendered.into()));
    }

    /// Number of registry source currencies with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
