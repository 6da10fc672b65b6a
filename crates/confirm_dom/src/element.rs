use confirm_core::{ElementId, PresentationSurface, parse_class_list};

/// A clickable element: tag name, ordered attributes and a text label.
///
/// Attribute names compare ASCII case-insensitively. A valueless attribute
/// (`<button disabled>`) is stored with `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    name: String,
    attributes: Vec<(String, Option<String>)>,
    label: String,
    focused: bool,
}

impl Element {
    pub fn new(id: ElementId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            attributes: Vec::new(),
            label: String::new(),
            focused: false,
        }
    }

    pub fn button(id: ElementId, label: &str) -> Self {
        Self::new(id, "button").with_label(label)
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, Some(value));
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, Option<String>)] {
        &self.attributes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Set or overwrite an attribute, keeping its position if it exists.
    pub fn set_attr(&mut self, name: &str, value: Option<&str>) {
        let value = value.map(str::to_string);
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.attributes.len() != before
    }

    pub fn classes(&self) -> Vec<String> {
        self.attr("class").map(parse_class_list).unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl PresentationSurface for Element {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
    }

    fn class_attribute(&self) -> Option<&str> {
        self.attr("class")
    }

    fn add_classes(&mut self, classes: &[String]) {
        if classes.is_empty() {
            return;
        }
        let mut current = self.classes();
        for class in classes {
            if !current.contains(class) {
                current.push(class.clone());
            }
        }
        self.set_attr("class", Some(&current.join(" ")));
    }

    fn remove_classes(&mut self, classes: &[String]) {
        if classes.is_empty() || !self.has_attr("class") {
            return;
        }
        let remaining: Vec<String> = self
            .classes()
            .into_iter()
            .filter(|c| !classes.contains(c))
            .collect();
        self.set_attr("class", Some(&remaining.join(" ")));
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}
