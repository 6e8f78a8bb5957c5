/*!
Lifecycle shared by all search algorithms.

Every algorithm owns an [`AlgorithmCore`] holding its [`ComputationState`] and a [`CancelManager`].
[`Algorithm::compute`] drives the lifecycle:

`NotRunning -> Running -> (Finished | Aborted)`

A computation is aborted cooperatively: clones of the [`CancelManager`] can be handed to visitors
or other threads, and the running algorithm polls the flag before every edge, every vertex
expansion and every finish step. Once the flag is observed, no further event is emitted.
*/

use std::{
    fmt::Debug,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use log::{debug, trace};

use crate::error::*;

/// Shared cancellation flag.
///
/// Clones refer to the same flag, so cancelling any clone is observed by the algorithm.
#[derive(Debug, Clone, Default)]
pub struct CancelManager {
    cancelling: Arc<AtomicBool>,
}

impl CancelManager {
    /// Creates a new, not cancelling, flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the running computation
    pub fn cancel(&self) {
        self.cancelling.store(true, Ordering::Release);
    }

    /// Clears a pending cancellation request
    pub fn reset_cancel(&self) {
        self.cancelling.store(false, Ordering::Release);
    }

    /// Returns *true* if cancellation was requested
    pub fn is_cancelling(&self) -> bool {
        self.cancelling.load(Ordering::Acquire)
    }
}

/// State of an algorithm's computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComputationState {
    #[default]
    NotRunning,
    Running,
    PendingAbortion,
    Finished,
    Aborted,
}

/// State and cancellation flag owned by every algorithm
#[derive(Debug, Clone, Default)]
pub struct AlgorithmCore {
    state: ComputationState,
    cancel_manager: CancelManager,
}

impl AlgorithmCore {
    /// Creates a core with a fresh cancellation flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a core observing an existing cancellation flag
    pub fn with_cancel_manager(cancel_manager: CancelManager) -> Self {
        Self {
            state: ComputationState::NotRunning,
            cancel_manager,
        }
    }

    pub fn state(&self) -> ComputationState {
        self.state
    }

    pub fn cancel_manager(&self) -> &CancelManager {
        &self.cancel_manager
    }

    #[inline]
    pub fn is_cancelling(&self) -> bool {
        self.cancel_manager.is_cancelling()
    }

    /// Requests cancellation; a running computation becomes `PendingAbortion`
    pub fn abort(&mut self) {
        self.cancel_manager.cancel();
        if self.state == ComputationState::Running {
            self.state = ComputationState::PendingAbortion;
        }
    }

    pub(crate) fn begin(&mut self, name: &str) {
        debug!("{name}: computation started");
        self.state = ComputationState::Running;
    }

    pub(crate) fn end(&mut self, name: &str, succeeded: bool) {
        let aborted = !succeeded
            || self.cancel_manager.is_cancelling()
            || self.state == ComputationState::PendingAbortion;

        self.state = if aborted {
            debug!("{name}: computation aborted");
            ComputationState::Aborted
        } else {
            debug!("{name}: computation finished");
            ComputationState::Finished
        };
        self.cancel_manager.reset_cancel();
    }
}

/// An algorithm with a `NotRunning -> Running -> Finished/Aborted` lifecycle
pub trait Algorithm {
    /// Human readable name used in log messages
    const NAME: &'static str;

    fn core(&self) -> &AlgorithmCore;

    fn core_mut(&mut self) -> &mut AlgorithmCore;

    /// Resets per-run state; called by [`Algorithm::compute`] before [`Algorithm::internal_compute`]
    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Runs the algorithm body; called by [`Algorithm::compute`]
    fn internal_compute(&mut self) -> Result<()>;

    /// Runs the algorithm to completion or until cancellation is observed.
    ///
    /// A cancelled run returns `Ok(())` and leaves the algorithm in state
    /// [`ComputationState::Aborted`]. Errors also leave it `Aborted`.
    /// The cancellation flag is cleared at the end of every run.
    fn compute(&mut self) -> Result<()> {
        self.core_mut().begin(Self::NAME);

        let result = if self.core().is_cancelling() {
            Ok(())
        } else {
            match self.initialize() {
                Ok(()) => self.internal_compute(),
                Err(err) => Err(err),
            }
        };

        self.core_mut().end(Self::NAME, result.is_ok());
        result
    }

    fn state(&self) -> ComputationState {
        self.core().state()
    }

    fn cancel_manager(&self) -> &CancelManager {
        self.core().cancel_manager()
    }

    fn is_cancelling(&self) -> bool {
        self.core().is_cancelling()
    }

    /// Requests cancellation of the computation
    fn abort(&mut self) {
        self.core_mut().abort()
    }
}

/// An algorithm that may start from an explicit root vertex
pub trait RootedAlgorithm: Algorithm {
    type Vertex: Copy + Debug;

    fn root_slot(&self) -> &Option<Self::Vertex>;

    fn root_slot_mut(&mut self) -> &mut Option<Self::Vertex>;

    /// Records `root` as the start of the next computation.
    /// Membership in the graph is only checked by [`Algorithm::compute`].
    fn set_root_vertex(&mut self, root: Self::Vertex) {
        trace!("{}: root vertex set to {root:?}", Self::NAME);
        *self.root_slot_mut() = Some(root);
    }

    fn try_get_root_vertex(&self) -> Option<Self::Vertex> {
        *self.root_slot()
    }

    fn clear_root_vertex(&mut self) {
        trace!("{}: root vertex cleared", Self::NAME);
        *self.root_slot_mut() = None;
    }

    /// Sets `root` and computes
    fn compute_from(&mut self, root: Self::Vertex) -> Result<()> {
        self.set_root_vertex(root);
        self.compute()
    }
}

/// Explicit frame of an iterative search: the current item, its remaining edges and its depth
pub(crate) struct SearchFrame<T, I> {
    pub current: T,
    pub edges: I,
    pub depth: usize,
}

impl<T, I> SearchFrame<T, I> {
    pub fn new(current: T, edges: I, depth: usize) -> Self {
        Self {
            current,
            edges,
            depth,
        }
    }
}

/// Boxed transformation applied to the out-edges of every expanded vertex
pub type OutEdgesFilter<'a, E> = Box<dyn Fn(Vec<E>) -> Vec<E> + 'a>;
