use crate::{Board, Change, Config};
use log::{debug, error, info, trace};
use parking_lot::Mutex;
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

/// A board shared between the update loop and whoever presents it
///
/// Every step runs under the lock, so it is atomic with respect to other
/// steps and to any edit made while holding the lock.
pub type SharedBoard = Arc<Mutex<Board>>;

pub fn shared(board: Board) -> SharedBoard {
    Arc::new(Mutex::new(board))
}

/// Published to subscribers after every step the loop applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub index: u64,
    pub changes: Vec<Change>,
    pub alive: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

type Subscribers = Arc<Mutex<Vec<Sender<Generation>>>>;

struct Worker {
    stop: Sender<()>,
    thread: JoinHandle<()>,
}

/// Steps a [`SharedBoard`] on a fixed interval until stopped
pub struct UpdateLoop {
    board: SharedBoard,
    interval: Duration,
    parallel: bool,
    subscribers: Subscribers,
    worker: Option<Worker>,
}

impl UpdateLoop {
    pub fn new(board: SharedBoard, config: &Config) -> Self {
        Self {
            board,
            interval: config.tick_interval,
            parallel: config.parallel,
            subscribers: Arc::default(),
            worker: None,
        }
    }

    /// Running until stopped, or until a step budget given to
    /// [`UpdateLoop::start_for`] runs out
    #[inline]
    pub fn state(&self) -> LoopState {
        match &self.worker {
            Some(worker) if !worker.thread.is_finished() => LoopState::Running,
            _ => LoopState::Stopped,
        }
    }
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
    #[inline]
    pub fn board(&self) -> &SharedBoard {
        &self.board
    }

    /// Receives a [`Generation`] for every step applied from now on
    pub fn subscribe(&self) -> Receiver<Generation> {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.lock().push(sender);
        receiver
    }

    /// Starts ticking; does nothing if already running
    pub fn start(&mut self) {
        self.spawn(None);
    }

    /// Starts ticking and stops by itself after applying `steps` generations;
    /// does nothing if already running
    pub fn start_for(&mut self, steps: u64) {
        self.spawn(Some(steps));
    }

    fn spawn(&mut self, budget: Option<u64>) {
        if self.state() == LoopState::Running {
            return;
        }
        // reap a worker that ran out of budget
        self.stop();

        let (stop, stopped) = mpsc::channel();
        let ticker = Ticker {
            board: Arc::clone(&self.board),
            subscribers: Arc::clone(&self.subscribers),
            interval: self.interval,
            parallel: self.parallel,
            budget,
        };
        let thread = thread::spawn(move || ticker.run(stopped));

        info!(
            "update loop started, ticking every {:?}, budget {budget:?}",
            self.interval
        );
        self.worker = Some(Worker { stop, thread });
    }

    /// Blocks until the worker stops by itself
    ///
    /// Only returns for loops started with [`UpdateLoop::start_for`], or ones
    /// that are already stopped.
    pub fn wait(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.thread.join().is_err() {
                error!("update loop worker panicked");
            }
        }
    }

    /// Stops ticking and waits for an in-flight step to finish; does nothing if
    /// already stopped
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        // the worker may have exited already, in which case there is no one to tell
        let _ = worker.stop.send(());
        if worker.thread.join().is_err() {
            error!("update loop worker panicked");
        }
        info!("update loop stopped at generation {}", self.board.lock().generation());
    }

    /// Starts a stopped loop or stops a running one, returning the new state
    pub fn toggle_running(&mut self) -> LoopState {
        match self.state() {
            LoopState::Stopped => self.start(),
            LoopState::Running => self.stop(),
        }
        self.state()
    }
}

impl Drop for UpdateLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Ticker {
    board: SharedBoard,
    subscribers: Subscribers,
    interval: Duration,
    parallel: bool,
    budget: Option<u64>,
}

impl Ticker {
    fn run(self, stopped: Receiver<()>) {
        let mut applied = 0;
        while self.budget.is_none_or(|budget| applied < budget) {
            match stopped.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
            self.tick();
            applied += 1;
        }
        debug!("update loop worker exiting after {applied} steps");
    }

    fn tick(&self) {
        let generation = {
            let mut board = self.board.lock();
            let changes = if self.parallel {
                board.step_parallel()
            } else {
                board.step()
            };
            Generation {
                index: board.generation(),
                changes,
                alive: board.alive_count(),
            }
        };
        trace!(
            "tick {}: {} changes",
            generation.index,
            generation.changes.len()
        );

        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|subscriber| subscriber.send(generation.clone()).is_ok());
    }
}
