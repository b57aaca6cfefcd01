//! Background worker computing generations off the UI thread.

use crate::board::{next_generation, Capacity, CellSet};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error)]
pub enum StepperError {
    #[error("failed to spawn the stepper thread")]
    Spawn(#[from] std::io::Error),
    #[error("the stepper thread has stopped")]
    Disconnected,
}

/// A computed generation.
///
/// `epoch` is copied from the request so stale results can be told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub epoch: u64,
    pub cells: CellSet,
}

struct Job {
    epoch: u64,
    cells: CellSet,
    capacity: Capacity,
}

pub struct Stepper {
    jobs: Option<Sender<Job>>,
    results: Receiver<Generation>,
    worker: Option<JoinHandle<()>>,
}

impl Stepper {
    /// Starts the worker. `on_ready` is called after every generation it
    /// sends back, so the UI can wake up and collect it.
    pub fn spawn(on_ready: impl Fn() + Send + 'static) -> Result<Self, StepperError> {
        let (jobs_tx, jobs_rx) = mpsc::channel::<Job>();
        let (results_tx, results_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("life-stepper".to_string())
            .spawn(move || {
                for job in jobs_rx {
                    let cells = next_generation(&job.cells, job.capacity);
                    trace!(epoch = job.epoch, population = cells.len(), "generation computed");
                    let generation = Generation {
                        epoch: job.epoch,
                        cells,
                    };
                    if results_tx.send(generation).is_err() {
                        break;
                    }
                    on_ready();
                }
                debug!("stepper thread finished");
            })?;

        Ok(Self {
            jobs: Some(jobs_tx),
            results: results_rx,
            worker: Some(worker),
        })
    }

    /// Queues a snapshot of the board for the next generation.
    pub fn submit(
        &self,
        epoch: u64,
        cells: CellSet,
        capacity: Capacity,
    ) -> Result<(), StepperError> {
        let jobs = self.jobs.as_ref().ok_or(StepperError::Disconnected)?;
        jobs.send(Job {
            epoch,
            cells,
            capacity,
        })
        .map_err(|_| StepperError::Disconnected)
    }

    /// Returns a finished generation if one is ready.
    pub fn try_recv(&self) -> Result<Option<Generation>, StepperError> {
        match self.results.try_recv() {
            Ok(generation) => Ok(Some(generation)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(StepperError::Disconnected),
        }
    }

    /// Waits up to `timeout` for a finished generation.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<Generation>, StepperError> {
        match self.results.recv_timeout(timeout) {
            Ok(generation) => Ok(Some(generation)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(StepperError::Disconnected),
        }
    }
}

impl Drop for Stepper {
    fn drop(&mut self) {
        // closing the job channel ends the worker loop
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("stepper thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn computes_generations_in_order() {
        let stepper = Stepper::spawn(|| {}).unwrap();
        let blinker = [(1, 2), (2, 2), (3, 2)]
            .into_iter()
            .map(Cell::from)
            .collect::<CellSet>();
        let capacity = Capacity::new(5, 5);

        stepper.submit(1, blinker.clone(), capacity).unwrap();
        stepper.submit(2, CellSet::new(), capacity).unwrap();

        let first = stepper.recv_timeout(TIMEOUT).unwrap().unwrap();
        assert_eq!(first.epoch, 1);
        assert_eq!(
            first.cells.sorted(),
            vec![Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)]
        );

        let second = stepper.recv_timeout(TIMEOUT).unwrap().unwrap();
        assert_eq!(second.epoch, 2);
        assert!(second.cells.is_empty());
    }

    #[test]
    fn nothing_ready_without_jobs() {
        let stepper = Stepper::spawn(|| {}).unwrap();
        assert_eq!(stepper.try_recv().unwrap(), None);
        assert_eq!(
            stepper.recv_timeout(Duration::from_millis(10)).unwrap(),
            None
        );
    }

    #[test]
    fn notifies_after_each_generation() {
        let (ready_tx, ready_rx) = mpsc::channel();
        let stepper = Stepper::spawn(move || {
            let _ = ready_tx.send(());
        })
        .unwrap();
        let capacity = Capacity::new(3, 3);

        stepper.submit(1, CellSet::new(), capacity).unwrap();
        ready_rx.recv_timeout(TIMEOUT).unwrap();
        // the generation is already queued when the callback runs
        assert_eq!(stepper.try_recv().unwrap().map(|g| g.epoch), Some(1));

        stepper.submit(2, CellSet::new(), capacity).unwrap();
        ready_rx.recv_timeout(TIMEOUT).unwrap();
        assert_eq!(stepper.try_recv().unwrap().map(|g| g.epoch), Some(2));
        assert!(ready_rx.try_recv().is_err());
    }

    #[test]
    fn drop_joins_the_worker() {
        let (ready_tx, ready_rx) = mpsc::channel::<()>();
        let stepper = Stepper::spawn(move || {
            let _ = ready_tx.send(());
        })
        .unwrap();
        drop(stepper);
        // the callback (and its sender) went away with the thread
        assert!(ready_rx.recv_timeout(TIMEOUT).is_err());
    }
}
