use crate::error::TagError;

pub const DEFAULT_TAGS: [&str; 8] = [
    "SANS NITRITE",
    "BIO",
    "SANS GLUTEN",
    "ANTI-GASPI",
    "AVEC PROMO",
    "PROCHE",
    "PAS CHER",
    "SANS CONSERVATEURS",
];

pub const TAGS_PER_ROW: usize = 3;

/// Fixed set of labels with the ones currently switched on.
///
/// Selected tags keep the order they were switched on in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelector {
    available: Vec<String>,
    selected: Vec<String>,
}

impl TagSelector {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<String> = Vec::new();
        for tag in available {
            let tag = tag.into();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Self {
            available: tags,
            selected: Vec::new(),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    /// Flip a tag, returns whether it is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> Result<bool, TagError> {
        if !self.available.iter().any(|t| t == tag) {
            return Err(TagError::Unknown(tag.to_string()));
        }
        if self.is_selected(tag) {
            self.selected.retain(|t| t != tag);
            Ok(false)
        } else {
            self.selected.push(tag.to_string());
            Ok(true)
        }
    }

    // 1-based, as shown on screen
    pub fn toggle_position(&mut self, position: usize) -> Result<bool, TagError> {
        let tag = position
            .checked_sub(1)
            .and_then(|i| self.available.get(i))
            .cloned()
            .ok_or_else(|| TagError::Unknown(position.to_string()))?;
        self.toggle(&tag)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.available.chunks(TAGS_PER_ROW)
    }
}

impl Default for TagSelector {
    fn default() -> Self {
        Self::new(DEFAULT_TAGS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_selection() {
        let mut tags = TagSelector::default();
        tags.toggle("BIO").unwrap();
        let before = tags.selected().to_vec();

        assert!(tags.toggle("PROCHE").unwrap());
        assert!(!tags.toggle("PROCHE").unwrap());
        assert_eq!(tags.selected(), before.as_slice());
    }

    #[test]
    fn keeps_insertion_order() {
        let mut tags = TagSelector::default();
        tags.toggle("PAS CHER").unwrap();
        tags.toggle("BIO").unwrap();
        tags.toggle("ANTI-GASPI").unwrap();
        tags.toggle("BIO").unwrap();
        tags.toggle("BIO").unwrap();
        assert_eq!(tags.selected(), ["PAS CHER", "ANTI-GASPI", "BIO"]);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let mut tags = TagSelector::default();
        assert_eq!(
            tags.toggle("VEGAN"),
            Err(TagError::Unknown("VEGAN".to_string()))
        );
        assert!(tags.toggle_position(0).is_err());
        assert!(tags.toggle_position(9).is_err());
        assert!(tags.selected().is_empty());
    }

    #[test]
    fn toggle_by_position() {
        let mut tags = TagSelector::default();
        assert!(tags.toggle_position(2).unwrap());
        assert!(tags.is_selected("BIO"));
    }

    #[test]
    fn rows_hold_three_tags() {
        let tags = TagSelector::default();
        let sizes: Vec<usize> = tags.rows().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2]);
    }
}
