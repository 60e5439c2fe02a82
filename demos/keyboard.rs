//! Keyboard recogniser
//!
//! Reads characters from stdin and recognises the lines "ha" and "hi".
//! Any other character is caught by the enclosing group state, which
//! prints it and goes back to idle.
//!
//! Run with: `echo "hi" | RUST_LOG=debug cargo run --example keyboard`

use nested_fsm::core::{Event, Guard, StateGraph, Transition};
use nested_fsm::machine::Machine;
use std::error::Error;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, PartialEq)]
enum Input {
    Keyboard,
}

type Keys = StateGraph<Input, char, &'static str>;

fn key(ch: char) -> Transition<Input, char, &'static str> {
    Transition::on(Input::Keyboard).guard(Guard::payload_eq(ch))
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut builder = Keys::builder();
    let group = builder.state_with("group", "group");
    let idle = builder.state_with("idle", "idle");
    let h = builder.state_with("h", "H");
    let i = builder.state_with("i", "I");
    let a = builder.state_with("a", "A");
    let error = builder.state_with("error", "ERROR");

    builder.configure(group)?.transition(
        Transition::<Input, char, &'static str>::on(Input::Keyboard)
            .to(idle)
            .action(|_, e, _| println!("unrecognised character: {:?}", e.payload)),
    );
    for id in [idle, h, i, a] {
        builder.configure(id)?.parent(group);
    }

    builder
        .configure(idle)?
        .on_entry(|_, _| println!("Waiting for input"))
        .transition(key('h').to(h));
    builder
        .configure(h)?
        .transitions([key('a').to(a), key('i').to(i)]);
    builder
        .configure(i)?
        .on_entry(|_, _| println!("Hi!"))
        .transition(key('\n').to(idle));
    builder
        .configure(a)?
        .on_entry(|_, _| println!("Ha-ha"))
        .transition(key('\n').to(idle));
    builder
        .configure(error)?
        .on_entry(|_, _| println!("ENTERED ERROR STATE!"));
    let graph = builder.build()?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut machine = Machine::new(&graph, idle, error);
    for ch in input.chars() {
        let outcome = machine.handle_event(&Event::new(Input::Keyboard, ch));
        tracing::info!(
            input = ?ch,
            state = graph.name_of(machine.current_state().unwrap_or(error)),
            %outcome,
            "dispatched"
        );
        if machine.stopped() {
            break;
        }
    }

    Ok(())
}
