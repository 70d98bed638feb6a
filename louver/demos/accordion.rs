// Example: Accordion
//
// Drives a collapse group without a terminal: simulates clicks on the
// different header regions, steps the fold animation, and prints the
// content heights as they change.

use std::fs::File;
use std::thread::sleep;
use std::time::{Duration, Instant};

use louver::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const WIDTH: u16 = 40;

fn step(items: &[CollapseItem], now: Instant) {
    for item in items {
        for edge in item.sync(WIDTH, now) {
            println!("  {} -> {:?}", item.name(), edge);
        }
    }
}

fn print_heights(items: &[CollapseItem], now: Instant) {
    for item in items {
        let height = match item.fold_height(now) {
            Some(rows) => rows.to_string(),
            None => "auto".to_string(),
        };
        println!(
            "  {}: expanded={} height={height} mounted={}",
            item.name(),
            item.expanded(),
            item.content_mounted()
        );
    }
}

fn main() {
    let log_file = File::create("accordion.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let group = Collapse::new()
        .with_trigger_region(TriggerRegion::Header)
        .with_accordion(true)
        .with_active_keys(vec!["general"]);

    let items = vec![
        CollapseItem::new(&group, "general", "General")
            .with_content("Theme, language and startup options."),
        CollapseItem::new(&group, "network", "Network")
            .with_extra("3 warnings")
            .with_content("Proxy configuration and connection limits.\nTimeouts apply per host."),
        CollapseItem::new(&group, "danger", "Danger zone")
            .with_disabled(true)
            .with_content("Irreversible operations."),
    ];

    let mut now = Instant::now();
    step(&items, now);
    println!("initial state:");
    print_heights(&items, now);

    // Click the network header title; the accordion swaps panels.
    let tree = render(&items[1], now);
    let click = Event::Click {
        target: Some(format!("{}-title", items[1].element_id())),
        x: 4,
        y: 2,
        button: MouseButton::Left,
    };
    items[1].handle_event(&tree, &click);
    for event in group.take_events() {
        println!("toggle event: {:?} key={:?}", event.kind, event.key);
    }

    println!("animating:");
    for _ in 0..5 {
        sleep(Duration::from_millis(50));
        now = Instant::now();
        step(&items, now);
        print_heights(&items, now);
    }

    // Clicking the disabled panel does nothing.
    let tree = render(&items[2], now);
    let target = format!("{}-header", items[2].element_id());
    items[2].dispatch_click(&tree, &target);
    println!("after clicking disabled panel:");
    print_heights(&items, now);

    // Enter toggles the focused panel.
    items[0].on_key(&KeyCombo::key(Key::Enter));
    step(&items, Instant::now());
    println!("after Enter on general:");
    print_heights(&items, Instant::now());
}
