use confirm_core::{ElementId, PresentationSurface};
use confirm_dom::{ClickOutcome, Document, Element, Page, load_defaults};
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DOUBLE_CONFIRM_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Library crates log through `log`; the subscriber picks those records up
/// and filters them with `DOUBLE_CONFIRM_LOG` (e.g. `double_confirm=debug`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_state(page: &Page, id: ElementId) {
    let Some(el) = page.element(id) else {
        return;
    };
    let phase = page.controller(id).map(|c| c.phase());
    println!(
        "t={:>2}s  {:<24} class={:<18} {:?}",
        page.now().as_secs(),
        format!("{:?}", el.label()),
        format!("{:?}", el.class_attribute().unwrap_or("")),
        phase
    );
}

fn click(page: &mut Page, id: ElementId) {
    match page.click(id) {
        ClickOutcome::Proceeded => println!("        click -> default action runs"),
        ClickOutcome::Suppressed => println!("        click -> suppressed"),
    }
}

fn main() -> ExitCode {
    init_logging();

    let mut page = Page::new(Document::new());
    if let Some(path) = std::env::args().nth(1) {
        match load_defaults(Path::new(&path)) {
            Ok(defaults) => page.set_defaults(&defaults),
            Err(err) => {
                eprintln!("double_confirm: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let id = page.allocate_id();
    page.insert_element(
        Element::button(id, "Delete")
            .with_attr("class", "btn")
            .with_attr("data-toggle", "double-confirm"),
    );

    print_state(&page, id);
    click(&mut page, id);
    print_state(&page, id);

    while page
        .controller(id)
        .is_some_and(|c| c.phase() == confirm_core::Phase::Countdown)
    {
        click(&mut page, id);
        page.advance(Duration::from_secs(1));
        print_state(&page, id);
    }

    click(&mut page, id);
    page.run_until_idle();
    print_state(&page, id);

    ExitCode::SUCCESS
}
