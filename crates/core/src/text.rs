//! Text matching helpers shared by the query stores.

/// Case-insensitive substring needle, lowered once and matched against many
/// haystacks. An empty needle matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    /// True when any of `haystacks` contains the needle.
    pub fn matches_any<'a>(&self, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
        self.0.is_empty() || haystacks.into_iter().any(|h| self.matches(h))
    }
}
