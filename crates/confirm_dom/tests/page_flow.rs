mod common;

use common::{DELETE, PLAIN, classes, delete_page, fixture, label, secs};
use confirm_core::{
    Count, DispatchError, DispatchOutcome, ElementId, Hook, OptionValue, Options, Phase,
};
use confirm_dom::{ClickOutcome, Document, Element, Page, load_defaults};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn delete_scenario_with_defaults() {
    let mut page = delete_page();

    assert_eq!(page.click(DELETE), ClickOutcome::Suppressed);
    assert_eq!(label(&page, DELETE), "Really Delete? (2)");
    assert_eq!(classes(&page, DELETE), vec!["btn", "disabled"]);

    page.advance(secs(1));
    assert_eq!(label(&page, DELETE), "Really Delete? (1)");

    page.advance(secs(1));
    assert_eq!(label(&page, DELETE), "Really Delete? ");
    assert_eq!(classes(&page, DELETE), vec!["btn"]);

    assert_eq!(page.click(DELETE), ClickOutcome::Proceeded);

    page.advance(secs(10));
    assert_eq!(label(&page, DELETE), "Delete");
    assert_eq!(classes(&page, DELETE), vec!["btn"]);
    assert_eq!(page.controller(DELETE).unwrap().phase(), Phase::Idle);
    assert_eq!(page.now(), secs(12));
}

#[test]
fn countdown_clicks_are_swallowed() {
    let mut page = delete_page();
    page.click(DELETE);

    assert_eq!(page.click(DELETE), ClickOutcome::Suppressed);
    page.advance(secs(1));
    assert_eq!(page.click(DELETE), ClickOutcome::Suppressed);
    assert_eq!(page.controller(DELETE).unwrap().phase(), Phase::Countdown);
}

#[test]
fn unmarked_elements_are_not_intercepted() {
    let mut page = delete_page();
    assert_eq!(page.click(PLAIN), ClickOutcome::Proceeded);
    assert!(page.controller(PLAIN).is_none());
    assert_eq!(page.click(ElementId::from_raw(99)), ClickOutcome::Proceeded);
}

#[test]
fn explicit_binding_without_marker() {
    let mut page = delete_page();
    page.bind(PLAIN, &Options::new().countdown(1)).unwrap();

    assert_eq!(page.click(PLAIN), ClickOutcome::Suppressed);
    assert_eq!(label(&page, PLAIN), "Really Home? (1)");
    page.advance(secs(1));
    assert_eq!(page.click(PLAIN), ClickOutcome::Proceeded);
}

#[test]
fn binding_twice_keeps_first_instance() {
    let mut page = delete_page();
    page.bind(DELETE, &Options::new().countdown(4)).unwrap();
    page.bind(DELETE, &Options::new().countdown(8)).unwrap();

    assert_eq!(page.registry().len(), 1);
    assert_eq!(
        page.controller(DELETE).unwrap().config().countdown,
        Count::Whole(4)
    );
    assert_eq!(
        page.bind(ElementId::from_raw(42), &Options::new()),
        Err(DispatchError::UnknownElement(ElementId::from_raw(42)))
    );
}

#[test]
fn data_attributes_override_defaults_and_call_options_override_both() {
    let id = ElementId::from_raw(5);
    let mut doc = Document::new();
    doc.insert(
        Element::button(id, "Wipe")
            .with_attr("data-countdown", "4")
            .with_attr("data-cooldown", "6")
            .with_attr("data-format", "##original## in ##counter##"),
    );
    let mut page = Page::new(doc);
    page.set_defaults(&Options::new().countdown(9).cooldown(9));
    page.bind(id, &Options::new().cooldown(1)).unwrap();

    let config = page.controller(id).unwrap().config();
    assert_eq!(config.countdown, Count::Whole(4));
    assert_eq!(config.cooldown, Count::Whole(1));

    page.click(id);
    assert_eq!(label(&page, id), "Wipe in 4");
}

#[test]
fn set_default_only_affects_later_controllers() {
    let mut page = delete_page();
    page.bind(PLAIN, &Options::new()).unwrap();

    page.set_default("countdown", OptionValue::Number(5)).unwrap();
    page.click(DELETE);

    assert_eq!(
        page.controller(DELETE).unwrap().config().countdown,
        Count::Whole(5)
    );
    assert_eq!(label(&page, DELETE), "Really Delete? (5)");
    assert_eq!(
        page.controller(PLAIN).unwrap().config().countdown,
        Count::Whole(2)
    );
}

#[test]
fn set_default_rejects_unknown_key() {
    let mut page = delete_page();
    assert!(page.set_default("countdownSeconds", 3i64.into()).is_err());
}

#[test]
fn method_dispatch_by_name() {
    let mut page = delete_page();

    let event = match page.call(DELETE, "activate", &[]).unwrap() {
        DispatchOutcome::Activated(event) => event,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert!(event.default_prevented());

    assert_eq!(
        page.call(DELETE, "format", &["<##original##>".into()]).unwrap(),
        DispatchOutcome::Label("<Delete>".to_string())
    );

    assert_eq!(
        page.call(DELETE, "reset", &[]).unwrap(),
        DispatchOutcome::Applied(true)
    );
    assert_eq!(label(&page, DELETE), "Delete");
    assert_eq!(classes(&page, DELETE), vec!["btn"]);
    assert_eq!(page.armed_timers(), 0);

    assert_eq!(
        page.call(DELETE, "detonate", &[]),
        Err(DispatchError::UnknownMethod("detonate".to_string()))
    );
    assert_eq!(
        page.call(ElementId::from_raw(77), "reset", &[]),
        Err(DispatchError::UnknownElement(ElementId::from_raw(77)))
    );
}

#[test]
fn method_call_binds_lazily() {
    let mut page = delete_page();
    assert!(page.controller(PLAIN).is_none());

    assert_eq!(
        page.call(PLAIN, "reset", &[]).unwrap(),
        DispatchOutcome::Applied(false)
    );
    assert!(page.controller(PLAIN).is_some());
}

#[test]
fn reset_hook_can_cut_cycle_short_from_cooldown() {
    let resets = Rc::new(Cell::new(0));
    let hook_resets = Rc::clone(&resets);
    let mut page = delete_page();
    page.bind(
        DELETE,
        &Options::new()
            .countdown(1)
            .on_cooldown(Hook::new(|ctx| ctx.request_reset()))
            .on_reset(Hook::new(move |_| hook_resets.set(hook_resets.get() + 1))),
    )
    .unwrap();

    page.click(DELETE);
    page.advance(secs(1));

    assert_eq!(resets.get(), 1);
    assert_eq!(label(&page, DELETE), "Delete");
    assert_eq!(page.armed_timers(), 0);
    // Straight back to arming: the confirming click never gets through.
    assert_eq!(page.click(DELETE), ClickOutcome::Suppressed);
}

#[test]
fn default_hook_can_be_cleared_globally_or_per_element() {
    let resets = Rc::new(Cell::new(0));
    let hook_resets = Rc::clone(&resets);
    let mut page = delete_page();
    page.set_defaults(
        &Options::new().on_reset(Hook::new(move |_| hook_resets.set(hook_resets.get() + 1))),
    );

    // Bound while the default hook is installed, but opted out at the call.
    page.bind(PLAIN, &Options::new().without_on_reset()).unwrap();
    assert!(page.controller(PLAIN).unwrap().config().on_reset.is_none());

    page.set_default("onReset", OptionValue::Text(String::new())).unwrap();
    page.click(DELETE);
    page.click(PLAIN);
    page.run_until_idle();

    assert!(page.controller(DELETE).unwrap().config().on_reset.is_none());
    assert_eq!(resets.get(), 0);

    page.set_default("on-reset", OptionValue::Null).unwrap();
    assert!(page.registry().defaults().on_reset.is_none());
}

#[test]
fn removing_element_cancels_timers() {
    let mut page = delete_page();
    page.click(DELETE);
    assert_eq!(page.armed_timers(), 1);

    let removed = page.remove_element(DELETE).unwrap();
    assert_eq!(removed.id(), DELETE);
    assert!(page.controller(DELETE).is_none());
    assert_eq!(page.armed_timers(), 0);
    assert_eq!(page.advance(secs(30)), 0);
}

#[test]
fn replacing_element_mid_cycle_starts_fresh() {
    let mut page = delete_page();
    page.click(DELETE);
    assert_eq!(page.controller(DELETE).unwrap().phase(), Phase::Countdown);

    let old = page
        .insert_element(
            Element::button(DELETE, "Erase").with_attr("data-toggle", "double-confirm"),
        )
        .unwrap();
    assert_eq!(old.id(), DELETE);
    assert!(page.controller(DELETE).is_none());
    assert_eq!(page.armed_timers(), 0);

    assert_eq!(page.click(DELETE), ClickOutcome::Suppressed);
    assert_eq!(label(&page, DELETE), "Really Erase? (2)");
    page.advance(secs(2));
    assert_eq!(page.click(DELETE), ClickOutcome::Proceeded);
}

#[test]
fn run_until_idle_completes_every_cycle() {
    let mut page = delete_page();
    page.bind(PLAIN, &Options::new().countdown(1).cooldown(3)).unwrap();
    page.click(DELETE);
    page.click(PLAIN);

    // DELETE: 2 ticks + cooldown expiry; PLAIN: 1 tick + cooldown expiry.
    assert_eq!(page.run_until_idle(), 5);
    assert_eq!(page.now(), secs(12));
    assert_eq!(label(&page, DELETE), "Delete");
    assert_eq!(label(&page, PLAIN), "Home");
}

#[test]
fn blur_on_arming() {
    let mut page = delete_page();
    page.element_mut(DELETE).unwrap().focus();
    page.click(DELETE);
    assert!(!page.element(DELETE).unwrap().is_focused());
}

#[test]
fn defaults_from_toml_fixture() {
    let defaults = load_defaults(&fixture("slow_defaults.toml")).unwrap();
    let mut page = delete_page();
    page.set_defaults(&defaults);

    page.click(DELETE);
    assert_eq!(label(&page, DELETE), "Confirm Delete (3)");
    assert_eq!(classes(&page, DELETE), vec!["btn", "disabled", "pending"]);

    page.advance(secs(3));
    assert_eq!(label(&page, DELETE), "Confirm Delete ");
    assert_eq!(classes(&page, DELETE), vec!["btn", "armed"]);

    page.advance(secs(4));
    assert_eq!(label(&page, DELETE), "Delete");
    assert_eq!(classes(&page, DELETE), vec!["btn"]);
}

#[test]
fn external_class_edits_during_cycle() {
    let mut page = delete_page();
    page.click(DELETE);

    // The host strips the countdown class itself mid-cycle.
    page.element_mut(DELETE)
        .unwrap()
        .set_attr("class", Some("btn extra"));
    page.advance(secs(2));

    assert_eq!(classes(&page, DELETE), vec!["btn", "extra"]);
    page.advance(secs(10));
    assert_eq!(classes(&page, DELETE), vec!["btn", "extra"]);
}
