// Command Pattern with undo/redo history.
// The invoker stores commands in slots and only ever calls execute/undo.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Command {
    fn execute(&self);
    fn undo(&self);

    fn label(&self) -> &str {
        "command"
    }
}

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Light {
    is_on: bool,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self) {
        self.is_on = true;
    }

    pub fn turn_off(&mut self) {
        self.is_on = false;
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn status(&self) -> &'static str {
        if self.is_on {
            "ON"
        } else {
            "OFF"
        }
    }
}

// ============================================================================
// Concrete commands
// ============================================================================

pub struct LightOnCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOnCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_on();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_off();
    }

    fn label(&self) -> &str {
        "Turn ON"
    }
}

pub struct LightOffCommand {
    light: Rc<RefCell<Light>>,
}

impl LightOffCommand {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.borrow_mut().turn_off();
    }

    fn undo(&self) {
        self.light.borrow_mut().turn_on();
    }

    fn label(&self) -> &str {
        "Turn OFF"
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct RemoteControl {
    slots: Vec<Option<Rc<dyn Command>>>,
    history: Vec<Rc<dyn Command>>,
    undone: Vec<Rc<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `command` at `slot`, growing the panel or replacing what was there.
    pub fn set_command(&mut self, slot: usize, command: Rc<dyn Command>) {
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot] = Some(command);
    }

    /// Run the command in `slot` and record it. Empty slots do nothing.
    pub fn press(&mut self, slot: usize) -> bool {
        let Some(command) = self.slots.get(slot).cloned().flatten() else {
            tracing::debug!(slot, "press on empty slot");
            return false;
        };
        tracing::debug!(slot, label = command.label(), "execute");
        command.execute();
        self.history.push(command);
        self.undone.clear();
        true
    }

    /// Invert the most recent command. Empty history does nothing.
    pub fn undo_last(&mut self) -> bool {
        let Some(command) = self.history.pop() else {
            return false;
        };
        tracing::debug!(label = command.label(), "undo");
        command.undo();
        self.undone.push(command);
        true
    }

    /// Re-run the most recently undone command.
    pub fn redo_last(&mut self) -> bool {
        let Some(command) = self.undone.pop() else {
            return false;
        };
        tracing::debug!(label = command.label(), "redo");
        command.execute();
        self.history.push(command);
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_with_light() -> (Rc<RefCell<Light>>, RemoteControl) {
        let light = Rc::new(RefCell::new(Light::new()));
        let mut remote = RemoteControl::new();
        remote.set_command(0, Rc::new(LightOnCommand::new(light.clone())));
        remote.set_command(1, Rc::new(LightOffCommand::new(light.clone())));
        (light, remote)
    }

    /// Adds to a shared total; undo subtracts.
    struct Add {
        total: Rc<RefCell<i64>>,
        amount: i64,
    }

    impl Command for Add {
        fn execute(&self) {
            *self.total.borrow_mut() += self.amount;
        }

        fn undo(&self) {
            *self.total.borrow_mut() -= self.amount;
        }
    }

    #[test]
    fn test_press_then_undo_restores_state() {
        let (light, mut remote) = remote_with_light();
        let before = light.borrow().clone();

        assert!(remote.press(0));
        assert_eq!(light.borrow().status(), "ON");

        assert!(remote.undo_last());
        assert_eq!(*light.borrow(), before);
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let (light, mut remote) = remote_with_light();
        assert!(!remote.undo_last());
        assert!(!light.borrow().is_on());
        assert_eq!(remote.history_len(), 0);
    }

    #[test]
    fn test_undo_is_last_in_first_out() {
        let (light, mut remote) = remote_with_light();
        remote.press(0);
        remote.press(1);
        assert_eq!(light.borrow().status(), "OFF");

        remote.undo_last();
        assert_eq!(light.borrow().status(), "ON");

        remote.undo_last();
        assert_eq!(light.borrow().status(), "OFF");
        assert!(!remote.undo_last());
    }

    #[test]
    fn test_press_empty_slot() {
        let (_light, mut remote) = remote_with_light();
        assert!(!remote.press(7));
        assert_eq!(remote.history_len(), 0);
    }

    #[test]
    fn test_set_command_grows_and_replaces() {
        let total = Rc::new(RefCell::new(0));
        let mut remote = RemoteControl::new();
        remote.set_command(3, Rc::new(Add { total: total.clone(), amount: 5 }));
        assert_eq!(remote.slot_count(), 4);
        assert!(!remote.press(0));

        remote.set_command(3, Rc::new(Add { total: total.clone(), amount: 2 }));
        remote.press(3);
        assert_eq!(*total.borrow(), 2);
    }

    #[test]
    fn test_redo_replays_undone_command() {
        let total = Rc::new(RefCell::new(0));
        let mut remote = RemoteControl::new();
        remote.set_command(0, Rc::new(Add { total: total.clone(), amount: 10 }));

        remote.press(0);
        remote.press(0);
        remote.undo_last();
        assert_eq!(*total.borrow(), 10);

        assert!(remote.redo_last());
        assert_eq!(*total.borrow(), 20);
        assert!(!remote.redo_last());
    }

    #[test]
    fn test_press_clears_redo() {
        let total = Rc::new(RefCell::new(0));
        let mut remote = RemoteControl::new();
        remote.set_command(0, Rc::new(Add { total: total.clone(), amount: 1 }));

        remote.press(0);
        remote.undo_last();
        remote.press(0);
        assert!(!remote.redo_last());
        assert_eq!(*total.borrow(), 1);
    }

    #[test]
    fn test_command_labels() {
        let light = Rc::new(RefCell::new(Light::new()));
        assert_eq!(LightOnCommand::new(light.clone()).label(), "Turn ON");
        assert_eq!(LightOffCommand::new(light).label(), "Turn OFF");
    }
}
