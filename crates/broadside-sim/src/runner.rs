//! Threaded match runner.
//!
//! Runs a [`MatchEngine`] on a dedicated thread paced at [`TICK_RATE`],
//! publishing each snapshot into a shared slot and reporting the outcome
//! once when the match finishes. Callers interact through a [`MatchHandle`].

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use broadside_core::commands::MatchCommand;
use broadside_core::constants::TICK_RATE;
use broadside_core::enums::{MatchOutcome, MatchPhase};
use broadside_core::state::TickSnapshot;
use tracing::{info, warn};

use crate::engine::MatchEngine;

enum RunnerCommand {
    Match(MatchCommand),
    Shutdown,
}

pub struct MatchHandle {
    cmd_tx: Sender<RunnerCommand>,
    snapshot: Arc<Mutex<Option<TickSnapshot>>>,
    outcome_rx: Receiver<MatchOutcome>,
    join: Option<JoinHandle<()>>,
}

impl MatchHandle {
    /// Forward a command to the running match. Returns false if the
    /// match thread has already exited.
    pub fn send(&self, command: MatchCommand) -> bool {
        self.cmd_tx.send(RunnerCommand::Match(command)).is_ok()
    }

    /// Most recent published snapshot, if any tick has completed.
    pub fn latest_snapshot(&self) -> Option<TickSnapshot> {
        self.snapshot.lock().ok().and_then(|slot| slot.clone())
    }

    /// Outcome of a finished match, without blocking.
    pub fn try_outcome(&self) -> Option<MatchOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Block until the match finishes and return its outcome.
    pub fn wait_outcome(&self) -> Option<MatchOutcome> {
        self.outcome_rx.recv().ok()
    }

    /// Stop the match and join the thread.
    pub fn shutdown(mut self) -> Option<MatchOutcome> {
        let _ = self.cmd_tx.send(RunnerCommand::Shutdown);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
        self.outcome_rx.try_recv().ok()
    }
}

impl Drop for MatchHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RunnerCommand::Shutdown);
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawn the match loop on its own thread.
pub fn spawn_match(engine: MatchEngine) -> MatchHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<RunnerCommand>();
    let (outcome_tx, outcome_rx) = mpsc::channel::<MatchOutcome>();
    let snapshot: Arc<Mutex<Option<TickSnapshot>>> = Arc::new(Mutex::new(None));
    let snapshot_slot = Arc::clone(&snapshot);

    let join = thread::Builder::new()
        .name("broadside-match".into())
        .spawn(move || run_loop(engine, cmd_rx, outcome_tx, snapshot_slot))
        .ok();

    MatchHandle {
        cmd_tx,
        snapshot,
        outcome_rx,
        join,
    }
}

fn run_loop(
    mut engine: MatchEngine,
    cmd_rx: Receiver<RunnerCommand>,
    outcome_tx: Sender<MatchOutcome>,
    snapshot_slot: Arc<Mutex<Option<TickSnapshot>>>,
) {
    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut next_tick_time = Instant::now();
    let mut outcome_sent = false;

    info!("match loop started");

    loop {
        loop {
            match cmd_rx.try_recv() {
                Ok(RunnerCommand::Match(command)) => engine.queue_command(command),
                Ok(RunnerCommand::Shutdown) => {
                    engine.queue_command(MatchCommand::Stop);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    engine.queue_command(MatchCommand::Stop);
                    break;
                }
            }
        }

        let snap = engine.tick();
        let finished = snap.phase == MatchPhase::Finished;
        let outcome = snap.outcome;
        if let Ok(mut slot) = snapshot_slot.lock() {
            *slot = Some(snap);
        }

        if finished {
            if !outcome_sent {
                if let Some(outcome) = outcome {
                    let _ = outcome_tx.send(outcome);
                }
                outcome_sent = true;
            }
            break;
        }

        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * TICK_RATE {
            // More than a second behind; stop trying to catch up.
            warn!("match loop fell behind, resetting pacing");
            next_tick_time = now;
        }
    }

    info!("match loop exited");
}
