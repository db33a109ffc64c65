//! countdown: prints one tick per scheduler iteration.

use async_trait::async_trait;
use dosh_types::ProcessFault;

use crate::scheduler::{Step, Task, TaskContext};

const DEFAULT_COUNT: u32 = 3;

#[derive(Debug)]
pub struct Countdown {
    /// `Err` holds the unparsable argument; the first step faults with it.
    remaining: Result<u32, String>,
}

impl Countdown {
    pub fn new(count: u32) -> Self {
        Self { remaining: Ok(count) }
    }

    pub fn from_arg(arg: Option<&str>) -> Self {
        let remaining = match arg {
            None => Ok(DEFAULT_COUNT),
            Some(raw) => raw.parse::<u32>().map_err(|_| raw.to_string()),
        };
        Self { remaining }
    }
}

#[async_trait]
impl Task for Countdown {
    async fn step(&mut self, ctx: &mut TaskContext<'_>) -> Step {
        let remaining = match &mut self.remaining {
            Ok(n) => n,
            Err(raw) => return Step::Faulted(ProcessFault::new(format!("invalid count: '{}'", raw))),
        };
        if *remaining == 0 {
            return Step::Completed;
        }

        ctx.print(format!("[{}] countdown: {}", ctx.pid(), remaining));
        *remaining -= 1;
        if *remaining == 0 {
            Step::Completed
        } else {
            Step::Continue
        }
    }
}
