//! Shared fixture: the seven-state firmware boot chart.
//!
//! ```text
//! SETUP(1) -SELFCHECKDONE-> BOOTLOADER(2) -FILELOADED-> RUNMAIN(3) -ERROCCUR-> COREDUMP(4)
//!                                                       ├── LEDON(5)  (default)
//!                                                       ├── LEDOFF(6)
//!                                                       └── DISPLAYOLED(7)
//! ```

#![allow(dead_code)]

use hsm_dispatch::builder::{StateBuilder, TableBuilder};
use hsm_dispatch::core::{ActionContext, StateTable};
use hsm_dispatch::ids;
use std::sync::{Arc, Mutex};

ids! {
    pub mod state: StateId {
        SETUP = 1,
        BOOTLOADER = 2,
        RUNMAIN = 3,
        COREDUMP = 4,
        LEDON = 5,
        LEDOFF = 6,
        DISPLAYOLED = 7,
    }
}

ids! {
    pub mod event: EventId {
        SELFCHECKDONE = 1,
        FILELOADED = 2,
        ERROCCUR = 3,
        DUMPFIN = 4,
        TMR200MS = 5,
        BOTTONPRESSED = 6,
        IICINITDONE = 7,
        OLEDINITDONE = 8,
        TEXTUPDATED = 9,
    }
}

/// One recorded action invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub context: ActionContext,
    pub arg: Vec<u8>,
}

/// Action invocations in the order they happened.
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<Call>>>);

impl Calls {
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    fn recorder(&self) -> impl Fn(&ActionContext, &[u8]) + Send + Sync + 'static {
        let sink = Arc::clone(&self.0);
        move |context: &ActionContext, arg: &[u8]| {
            sink.lock().unwrap().push(Call {
                context: *context,
                arg: arg.to_vec(),
            });
        }
    }
}

/// Build the boot chart with every state's action recording into `calls`.
pub fn boot_table(calls: &Calls) -> StateTable {
    use event::*;
    use state::*;

    TableBuilder::new()
        .state(
            StateBuilder::new()
                .id(SETUP)
                .on(SELFCHECKDONE, BOOTLOADER)
                .action(calls.recorder()),
        )
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(BOOTLOADER)
                    .on(FILELOADED, RUNMAIN)
                    .on(ERROCCUR, COREDUMP)
                    .on(ERROCCUR, COREDUMP)
                    .action(calls.recorder()),
            )
        })
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(RUNMAIN)
                    .initial(LEDON)
                    .on(ERROCCUR, COREDUMP)
                    .action(calls.recorder()),
            )
        })
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(COREDUMP)
                    .internal(DUMPFIN)
                    .action(calls.recorder()),
            )
        })
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(LEDON)
                    .parent(RUNMAIN)
                    .on(TMR200MS, LEDOFF)
                    .on(BOTTONPRESSED, DISPLAYOLED)
                    .action(calls.recorder()),
            )
        })
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(LEDOFF)
                    .parent(RUNMAIN)
                    .on(TMR200MS, LEDON)
                    .on(BOTTONPRESSED, DISPLAYOLED)
                    .action(calls.recorder()),
            )
        })
        .and_then(|b| {
            b.state(
                StateBuilder::new()
                    .id(DISPLAYOLED)
                    .parent(RUNMAIN)
                    .action(calls.recorder()),
            )
        })
        .and_then(TableBuilder::build)
        .expect("boot chart is well-formed")
}

pub const BOOT_CHART_JSON: &str = include_str!("../fixtures/fsm_test.json");
