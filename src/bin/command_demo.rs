// Command demo: a remote control with undo history.

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;
use pattern_catalog::behavioral::command::{Light, LightOffCommand, LightOnCommand, RemoteControl};
use pattern_catalog::logging::init_tracing;

fn main() {
    init_tracing();

    let light = Rc::new(RefCell::new(Light::new()));
    let mut remote = RemoteControl::new();
    remote.set_command(0, Rc::new(LightOnCommand::new(light.clone())));
    remote.set_command(1, Rc::new(LightOffCommand::new(light.clone())));

    let status = |light: &Rc<RefCell<Light>>| println!("Light status: {}", light.borrow().status());

    println!("{}", "=== COMMAND PATTERN DEMO ===".bold());
    status(&light);

    println!("\nPressing button 0 (Turn ON):");
    remote.press(0);
    status(&light);

    println!("\nPressing button 1 (Turn OFF):");
    remote.press(1);
    status(&light);

    println!("\nUndoing last command:");
    remote.undo_last();
    status(&light);

    println!("\nUndoing last command:");
    remote.undo_last();
    status(&light);

    println!("\nUndoing with empty history:");
    if !remote.undo_last() {
        println!("{}", "nothing to undo".yellow());
    }
    status(&light);

    println!("\nRedoing:");
    remote.redo_last();
    status(&light);
}
