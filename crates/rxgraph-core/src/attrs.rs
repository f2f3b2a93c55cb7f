/// Cosmetic display attributes shared by nodes and edges.
///
/// None of the fields affect traversal. An empty set means the entity is
/// declared bare (`<id>;`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub label: Option<String>,
    pub shape: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new().with_label(label)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.shape.is_none() && self.style.is_none() && self.color.is_none()
    }

    /// `Some(self)` when there is anything to annotate, `None` for a bare declaration.
    pub fn into_declared(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attributes_are_bare() {
        assert!(Attributes::new().is_empty());
        assert_eq!(Attributes::new().into_declared(), None);
    }

    #[test]
    fn test_any_field_declares() {
        let attrs = Attributes::new().with_color("red");
        assert!(!attrs.is_empty());
        assert_eq!(attrs.clone().into_declared(), Some(attrs));
    }
}
