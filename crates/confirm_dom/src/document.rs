use crate::element::Element;
use confirm_core::ElementId;
use std::collections::BTreeMap;

/// The set of elements a page knows about, in id order.
#[derive(Clone, Debug, Default)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// An id not used by any element inserted so far.
    pub fn allocate_id(&mut self) -> ElementId {
        let id = ElementId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an element, replacing (and returning) any element with the same id.
    pub fn insert(&mut self, element: Element) -> Option<Element> {
        let raw = element.id().as_raw();
        if raw >= self.next_id {
            self.next_id = raw.saturating_add(1);
        }
        self.elements.insert(element.id(), element)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }
}
