use std::fmt;

/// An ordered set of CSS class names, the model's stand-in for `Element.classList`.
///
/// `Display` joins the names with spaces so a list can be dropped straight into
/// a `class:` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class attribute.
    pub fn parse(attr: &str) -> Self {
        let mut list = Self::new();
        for name in attr.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn add(&mut self, name: &str) {
        if !name.is_empty() && !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(attr: &str) -> Self {
        Self::parse(attr)
    }
}
