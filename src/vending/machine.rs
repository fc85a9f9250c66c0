//! The vending machine: its state table and the interactive session loop.
//!
//! The engine knows nothing about products or payments. This module maps
//! console input onto edges, renders a screen for each state, and keeps
//! the stock and the session history.

use crate::builder::MachineBuilder;
use crate::core::{State, StateHistory, StateMachine, TransitionRecord};
use crate::state;
use crate::vending::color::{alert, highlight, success};
use crate::vending::config::{Product, VendingConfig};
use crate::vending::console::Console;
use crate::vending::error::VendingError;
use crate::vending::payment::{PaymentGateway, SimulatedGateway};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// State names of the vending machine.
pub mod states {
    pub const SLEEP: &str = "Sleep";
    pub const SELECT: &str = "Select";
    pub const PAYMENT: &str = "Payment";
    pub const CODE: &str = "Code";
    pub const TRANSACTION: &str = "Transaction";
    pub const COMPLETE: &str = "Complete";
    pub const FAILED: &str = "Failed";
}

/// Edge labels of the vending machine.
pub mod edges {
    pub const WAKE: &str = "wake";
    pub const CANCEL: &str = "cancel";
    pub const UNAVAILABLE: &str = "unavailable";
    pub const SELECTED: &str = "selected";
    pub const CARD: &str = "card";
    pub const FILL: &str = "fill";
    pub const ACCEPTED: &str = "accepted";
    pub const FAILED: &str = "failed";
    pub const TAKE: &str = "take";
    pub const AGAIN: &str = "again";
}

/// Edges the session fires itself; typed input never applies them.
const INTERNAL_EDGES: [&str; 2] = [edges::SELECTED, edges::UNAVAILABLE];

/// The vending machine's states, `Sleep` first.
pub fn vending_states() -> Vec<State> {
    use edges::*;
    use states::*;

    vec![
        state!(SLEEP => { WAKE => SELECT }),
        state!(SELECT => {
            CANCEL => SLEEP,
            UNAVAILABLE => SELECT,
            SELECTED => PAYMENT,
        }),
        state!(PAYMENT => { CANCEL => SLEEP, CARD => CODE }),
        state!(CODE => { FILL => TRANSACTION, CANCEL => SLEEP }),
        state!(TRANSACTION => { ACCEPTED => COMPLETE, edges::FAILED => states::FAILED }),
        state!(COMPLETE => { TAKE => SLEEP }, accepting),
        state!(states::FAILED => { AGAIN => PAYMENT, CANCEL => SLEEP }),
    ]
}

/// Build the engine for the vending machine, starting asleep.
pub fn build_machine() -> Result<StateMachine, VendingError> {
    let machine = MachineBuilder::new()
        .states(vending_states())
        .start(states::SLEEP)
        .build()?;
    Ok(machine)
}

/// Summary of a finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub final_state: String,
    pub dispensed: Vec<String>,
    pub history: StateHistory,
}

enum Step {
    Continue,
    EndOfInput,
}

/// A vending machine driven from a line-based console.
pub struct VendingMachine<G: PaymentGateway = SimulatedGateway> {
    machine: StateMachine,
    products: Vec<Product>,
    selected: Option<usize>,
    gateway: G,
    clear_screen: bool,
    skip_clear: bool,
    history: StateHistory,
    dispensed: Vec<String>,
    session_id: Uuid,
}

impl<G: PaymentGateway> VendingMachine<G> {
    /// Validate `config` and build a machine in the `Sleep` state.
    pub fn new(config: VendingConfig, gateway: G) -> Result<Self, VendingError> {
        let config = config.validated()?;

        Ok(Self {
            machine: build_machine()?,
            products: config.products,
            selected: None,
            gateway,
            clear_screen: config.clear_screen,
            skip_clear: false,
            history: StateHistory::new(),
            dispensed: Vec::new(),
            session_id: Uuid::new_v4(),
        })
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &State {
        self.machine.current_state()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Edges applied so far this session.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Run the session until `input` is exhausted.
    ///
    /// Each pass renders the screen for the current state, reads a line
    /// where that state expects one and turns it into an edge.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> Result<SessionReport, VendingError> {
        let mut console = Console::new(input, output);
        info!(session = %self.session_id, "vending session started");

        loop {
            let current = self.machine.current_name().to_string();
            let step = match current.as_str() {
                states::SLEEP => self.sleep_screen(&mut console)?,
                states::SELECT => self.select_screen(&mut console)?,
                states::PAYMENT => self.payment_screen(&mut console)?,
                states::CODE => self.code_screen(&mut console)?,
                states::TRANSACTION => self.transaction_screen(&mut console)?,
                states::COMPLETE => self.complete_screen(&mut console)?,
                states::FAILED => self.failed_screen(&mut console)?,
                other => return Err(VendingError::UnexpectedState(other.to_string())),
            };

            if let Step::EndOfInput = step {
                break;
            }
        }

        info!(
            session = %self.session_id,
            edges = self.history.len(),
            dispensed = self.dispensed.len(),
            "vending session ended"
        );
        Ok(self.report())
    }

    /// Snapshot of the session so far.
    pub fn report(&self) -> SessionReport {
        SessionReport {
            session_id: self.session_id,
            final_state: self.machine.current_name().to_string(),
            dispensed: self.dispensed.clone(),
            history: self.history.clone(),
        }
    }

    fn fire(&mut self, edge: &str) {
        let from = self.machine.current_name().to_string();
        let to = self.machine.apply(edge).name().to_string();
        debug!(session = %self.session_id, %from, %to, edge, "applied edge");
        self.history.push(TransitionRecord::now(from, to, edge));
    }

    fn read_and_fire<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        match console.prompt()? {
            Some(line) => {
                self.fire(&line);
                Ok(Step::Continue)
            }
            None => Ok(Step::EndOfInput),
        }
    }

    fn clear<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<(), VendingError> {
        if self.clear_screen {
            console.clear()?;
        }
        Ok(())
    }

    fn selected_product(&self) -> Result<(usize, &Product), VendingError> {
        self.selected
            .map(|position| (position, &self.products[position]))
            .ok_or_else(|| VendingError::NoSelection {
                state: self.machine.current_name().to_string(),
            })
    }

    fn sleep_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        self.clear(console)?;
        console.line("Welcome to the VendingMachine.")?;
        console.line(&format!("Type {} to start.", highlight(edges::WAKE)))?;
        self.read_and_fire(console)
    }

    fn select_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        if self.skip_clear {
            self.skip_clear = false;
        } else {
            self.clear(console)?;
        }

        console.line("Please select:")?;
        let options: Vec<String> = self
            .products
            .iter()
            .filter(|p| p.in_stock())
            .map(|p| highlight(&p.name).to_string())
            .collect();
        if options.is_empty() {
            console.line(&format!("{}", alert("Everything is sold out.")))?;
        } else {
            console.line(&format!("{}.", options.join(", ")))?;
        }
        console.line(&format!("Or type {} to stop.", highlight(edges::CANCEL)))?;

        let Some(line) = console.prompt()? else {
            return Ok(Step::EndOfInput);
        };

        match self.products.iter().position(|p| p.name == line) {
            Some(position) => {
                self.selected = Some(position);
                let product = self.products[position].clone();
                if product.in_stock() {
                    self.fire(edges::SELECTED);
                } else {
                    warn!(session = %self.session_id, product = %product.name, "product out of stock");
                    self.fire(edges::UNAVAILABLE);
                    self.clear(console)?;
                    console.line(&format!(
                        "\nThe {} is currently {}.\n",
                        highlight(&product.name),
                        alert("out of stock")
                    ))?;
                    self.skip_clear = true;
                }
            }
            None if INTERNAL_EDGES.contains(&line.as_str()) => {
                debug!(session = %self.session_id, input = %line, "ignoring internal edge typed at selection");
            }
            None => self.fire(&line),
        }

        Ok(Step::Continue)
    }

    fn payment_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        let (_, product) = self.selected_product()?;

        self.clear(console)?;
        console.line(&format!(
            "You have selected {} which costs {}.",
            highlight(&product.name),
            highlight(&format!("{:.2}", product.price))
        ))?;
        console.line(&format!(
            "Please type {} to present your card.",
            highlight(edges::CARD)
        ))?;
        console.line(&format!("Or type {} to stop.", highlight(edges::CANCEL)))?;
        self.read_and_fire(console)
    }

    fn code_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        self.clear(console)?;
        console.line(&format!(
            "Please type {} to fill in your passcode.",
            highlight(edges::FILL)
        ))?;
        console.line(&format!("Or type {} to stop.", highlight(edges::CANCEL)))?;
        self.read_and_fire(console)
    }

    fn transaction_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        let (position, _) = self.selected_product()?;

        self.clear(console)?;
        if self.gateway.authorize(&self.products[position]) {
            self.fire(edges::ACCEPTED);
            console.line(&format!("The transaction was {}!", success("successful")))?;
        } else {
            warn!(
                session = %self.session_id,
                product = %self.products[position].name,
                "payment declined"
            );
            self.fire(edges::FAILED);
        }
        Ok(Step::Continue)
    }

    fn complete_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        let (position, product) = self.selected_product()?;
        console.line(&format!(" > {}", highlight(&product.name)))?;
        console.line(&format!(
            "Type {} to take the product and exit.",
            highlight(edges::TAKE)
        ))?;

        loop {
            match console.prompt()? {
                Some(line) if line == edges::TAKE => break,
                Some(_) => continue,
                None => return Ok(Step::EndOfInput),
            }
        }

        self.fire(edges::TAKE);
        let slot = &mut self.products[position];
        slot.stock = slot.stock.saturating_sub(1);
        info!(
            session = %self.session_id,
            product = %slot.name,
            remaining = slot.stock,
            "product dispensed"
        );
        self.dispensed.push(slot.name.clone());
        self.selected = None;
        Ok(Step::Continue)
    }

    fn failed_screen<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, VendingError> {
        self.clear(console)?;
        console.line(&format!("The transaction has {}.", alert("failed")))?;
        console.line(&format!(
            "Type {} to try again or {} to stop.",
            highlight(edges::AGAIN),
            highlight(edges::CANCEL)
        ))?;
        self.read_and_fire(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UndefinedPolicy;
    use std::io::Cursor;

    struct AlwaysApprove;

    impl PaymentGateway for AlwaysApprove {
        fn authorize(&mut self, _product: &Product) -> bool {
            true
        }
    }

    fn quiet_config() -> VendingConfig {
        VendingConfig {
            clear_screen: false,
            ..VendingConfig::default()
        }
    }

    #[test]
    fn state_table_builds_and_starts_asleep() {
        let machine = build_machine().unwrap();
        assert_eq!(machine.current_name(), states::SLEEP);
        assert_eq!(machine.policy(), UndefinedPolicy::Stay);
        assert_eq!(machine.states().len(), 7);
    }

    #[test]
    fn only_complete_is_accepting() {
        let table = vending_states();
        let accepting: Vec<&str> = table
            .iter()
            .filter(|s| s.is_accepting())
            .map(|s| s.name())
            .collect();
        assert_eq!(accepting, vec![states::COMPLETE]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = VendingConfig {
            products: Vec::new(),
            ..quiet_config()
        };
        let result = VendingMachine::new(config, AlwaysApprove);
        assert!(matches!(result, Err(VendingError::Config(_))));
    }

    #[test]
    fn fire_records_history() {
        let mut vending = VendingMachine::new(quiet_config(), AlwaysApprove).unwrap();
        vending.fire(edges::WAKE);
        vending.fire("gibberish");

        assert_eq!(vending.current_state().name(), states::SELECT);
        assert_eq!(vending.history().len(), 2);
        assert_eq!(vending.history().get_path(), vec![states::SLEEP, states::SELECT]);
    }

    #[test]
    fn typed_internal_edge_is_ignored_at_selection() {
        let mut vending = VendingMachine::new(quiet_config(), AlwaysApprove).unwrap();
        let report = vending
            .run(Cursor::new("wake\nselected\n"), Vec::new())
            .unwrap();

        assert_eq!(report.final_state, states::SELECT);
        assert_eq!(report.history.len(), 1);
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut vending = VendingMachine::new(quiet_config(), AlwaysApprove).unwrap();
        let report = vending.run(Cursor::new(""), Vec::new()).unwrap();

        assert_eq!(report.final_state, states::SLEEP);
        assert!(report.history.is_empty());
        assert!(report.dispensed.is_empty());
        assert_eq!(report.session_id, vending.session_id());
    }
}
