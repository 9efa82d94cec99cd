//! Document Review Flow
//!
//! This example walks a document through an editorial workflow and uses the
//! history to back out of a rejected review.
//!
//! Key concepts:
//! - Enum identifiers via `id_enum!`
//! - Event-driven transitions with `trigger`
//! - Undo/redo and branch replacement
//!
//! Run with: cargo run --example document_flow

use rewind::builder::StateMachineBuilder;
use rewind::core::{Config, Id};
use rewind::id_enum;

id_enum! {
    enum Doc {
        Draft,
        Review,
        Approved,
        Published,
    }
}

id_enum! {
    enum Edit {
        Submit,
        Approve,
        Reject,
        Publish,
    }
}

fn main() {
    println!("=== Document Review Flow ===\n");

    let config = Config::new(Doc::Draft)
        .with_state(Doc::Draft, [(Edit::Submit, Doc::Review)])
        .with_state(
            Doc::Review,
            [(Edit::Approve, Doc::Approved), (Edit::Reject, Doc::Draft)],
        )
        .with_state(Doc::Approved, [(Edit::Publish, Doc::Published)])
        .with_state(Doc::Published, []);

    let mut machine = StateMachineBuilder::new().config(config).build().unwrap();

    for event in [Edit::Submit, Edit::Approve] {
        machine.trigger(&event).unwrap();
        println!("{:<8} -> {}", event.name(), machine.state().name());
    }

    println!("\nReviewer changed their mind, undoing approval");
    machine.undo();
    println!("Now in: {}", machine.state().name());

    machine.trigger(&Edit::Reject).unwrap();
    println!("Rejected -> {}", machine.state().name());
    println!("Redo available: {}", machine.redo());

    if let Err(e) = machine.trigger(&Edit::Publish) {
        println!("\nPublish refused: {}", e);
    }

    let path: Vec<&str> = machine
        .history()
        .path()
        .into_iter()
        .map(|s| s.name())
        .collect();
    println!("\nHistory: {}", path.join(" -> "));
    println!(
        "States handling Approve: {:?}",
        machine.states(Some(&Edit::Approve))
    );

    println!("\n=== Example Complete ===");
}
