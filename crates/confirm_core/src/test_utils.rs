use crate::classes::parse_class_list;
use crate::hooks::{Hook, HookContext};
use crate::traits::PresentationSurface;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory surface that keeps a log of every label it was given.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub label: String,
    pub class: Option<String>,
    pub labels: Vec<String>,
    pub blurs: usize,
}

impl RecordingSurface {
    pub fn new(label: &str, class: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            class: class.map(str::to_string),
            labels: Vec::new(),
            blurs: 0,
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.class.as_deref().map(parse_class_list).unwrap_or_default()
    }
}

impl PresentationSurface for RecordingSurface {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
        self.labels.push(label.to_string());
    }

    fn class_attribute(&self) -> Option<&str> {
        self.class.as_deref()
    }

    fn add_classes(&mut self, classes: &[String]) {
        let mut current = self.classes();
        for c in classes {
            if !current.contains(c) {
                current.push(c.clone());
            }
        }
        self.class = Some(current.join(" "));
    }

    fn remove_classes(&mut self, classes: &[String]) {
        if self.class.is_none() {
            return;
        }
        let current: Vec<String> = self
            .classes()
            .into_iter()
            .filter(|c| !classes.contains(c))
            .collect();
        self.class = Some(current.join(" "));
    }

    fn blur(&mut self) {
        self.blurs += 1;
    }
}

/// Shared log of hook invocations, one `name:phase:original` line each.
pub(crate) type HookLog = Rc<RefCell<Vec<String>>>;

pub(crate) fn recording_hook(log: &HookLog, name: &'static str) -> Hook {
    let log = Rc::clone(log);
    Hook::new(move |ctx: &mut HookContext<'_>| {
        log.borrow_mut().push(format!(
            "{name}:{:?}:{}",
            ctx.phase(),
            ctx.original_label()
        ));
    })
}
