use crate::animation::AnimationClip;
use crate::errors::{Result, StageError};

/// Root node of a loaded actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorRoot {
    pub name: String,
    /// Material slots of the actor's skinned meshes.
    pub materials: Vec<String>,
}

impl ActorRoot {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            materials: Vec::new(),
        }
    }
}

/// Output of a successful actor load.
#[derive(Debug, Clone)]
pub struct LoadedActor {
    pub root: ActorRoot,
    /// Clips in the order the asset exported them.
    pub clips: Vec<AnimationClip>,
}

impl LoadedActor {
    #[must_use]
    pub fn clip_names(&self) -> Vec<&str> {
        self.clips.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Source of actor assets.
///
/// `load` must not block: the result is delivered through the returned
/// [`PendingActor`].
pub trait AssetProvider {
    fn load(&self, path: &str) -> PendingActor;
}

/// One-shot completion of an actor load.
#[derive(Debug)]
pub struct PendingActor {
    path: String,
    receiver: flume::Receiver<Result<LoadedActor>>,
    delivered: bool,
}

impl PendingActor {
    /// Creates a pending load and the sender its loader completes it with.
    #[must_use]
    pub fn channel(path: impl Into<String>) -> (flume::Sender<Result<LoadedActor>>, Self) {
        let (sender, receiver) = flume::bounded(1);
        let pending = Self {
            path: path.into(),
            receiver,
            delivered: false,
        };
        (sender, pending)
    }

    /// Creates an already completed load.
    #[must_use]
    pub fn ready(path: impl Into<String>, result: Result<LoadedActor>) -> Self {
        let (sender, pending) = Self::channel(path);
        // The receiver is alive and the channel has capacity for one message.
        let _ = sender.send(result);
        pending
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// Returns the load result exactly once, `None` while still loading and
    /// after delivery.
    pub fn poll(&mut self) -> Option<Result<LoadedActor>> {
        if self.delivered {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.delivered = true;
                Some(result)
            }
            Err(flume::TryRecvError::Empty) => None,
            Err(flume::TryRecvError::Disconnected) => {
                self.delivered = true;
                Some(Err(StageError::AssetLoad(format!(
                    "loader for '{}' stopped without a result",
                    self.path
                ))))
            }
        }
    }

    /// Blocks until the load completes.
    pub fn wait(self) -> Result<LoadedActor> {
        if self.delivered {
            return Err(StageError::AssetLoad(format!(
                "result for '{}' was already delivered",
                self.path
            )));
        }
        self.receiver.recv().map_err(|_| {
            StageError::AssetLoad(format!(
                "loader for '{}' stopped without a result",
                self.path
            ))
        })?
    }
}
