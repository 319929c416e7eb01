use std::time::Duration;

use dioxus::prelude::*;
use iam_core::runners::{Outcome, Runner};
use iam_core::time::TimerScale;
use tracing::debug;

use crate::context::AppContext;

type Deferred = Box<dyn FnOnce()>;

/// The scheduler owned by one mounted runner.
///
/// Timers are spawned through a callback created in the runner's scope, so
/// they outlive the child component that armed them and die with the runner.
/// While mounted, `cancel_all` bumps an epoch that every pending timer checks
/// before firing.
#[derive(Clone, Copy)]
pub struct RunnerTimers {
    epoch: Signal<u64>,
    scale: TimerScale,
    spawner: Callback<(Duration, Deferred)>,
}

impl PartialEq for RunnerTimers {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch && self.scale == other.scale
    }
}

pub fn use_runner_timers() -> RunnerTimers {
    let ctx = use_context::<AppContext>();
    let epoch = use_signal(|| 0_u64);
    let spawner = use_callback(move |(delay, fire): (Duration, Deferred)| {
        let armed = *epoch.peek();
        spawn(async move {
            tokio::time::sleep(delay).await;
            if *epoch.peek() == armed {
                fire();
            }
        });
    });
    RunnerTimers {
        epoch,
        scale: ctx.timer_scale(),
        spawner,
    }
}

impl RunnerTimers {
    pub fn schedule(self, after: Duration, fire: impl FnOnce() + 'static) {
        self.spawner.call((self.scale.apply(after), Box::new(fire)));
    }

    pub fn cancel_all(self) {
        let mut epoch = self.epoch;
        *epoch.write() += 1;
    }
}

/// Act on a runner outcome: report success, or schedule the requested timer
/// and feed its result back in when it fires.
pub fn drive<R>(
    runner: Signal<R>,
    timers: RunnerTimers,
    on_success: Callback<()>,
    outcome: Outcome<R::Timer>,
) where
    R: Runner + 'static,
{
    match outcome {
        Outcome::Idle => {}
        Outcome::Completed => {
            debug!("runner reported success");
            on_success.call(());
        }
        Outcome::After(delay, timer) => {
            debug!(?timer, ?delay, "runner timer scheduled");
            timers.schedule(delay, move || {
                let mut runner = runner;
                let next = runner.write().fire(timer);
                drive(runner, timers, on_success, next);
            });
        }
    }
}
