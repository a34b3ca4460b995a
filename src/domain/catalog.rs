// Static catalog of modules a user may start

const TRAINING_MODULES: [&str; 4] = [
    "Phishing Awareness",
    "Password Security",
    "Ransomware Prevention",
    "Data Protection Basics",
];

/// Ordered list of trainable modules, independent of fetched data.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleCatalog {
    modules: Vec<String>,
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new(TRAINING_MODULES)
    }
}

impl ModuleCatalog {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Resolve user input to a catalog entry: a 1-based position or a name
    /// (case-insensitive).
    pub fn lookup(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Ok(position) = input.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| self.modules.get(index))
                .map(String::as_str);
        }
        self.modules
            .iter()
            .find(|name| name.eq_ignore_ascii_case(input))
            .map(String::as_str)
    }
}
