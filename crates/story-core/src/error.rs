use crate::routes::Trigger;

/// Startup configuration errors. Any of these means the story cannot be
/// shown at all, so the sequencer refuses to build.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    #[error("story has no scenes")]
    EmptyStory,
    #[error("scene {index} has no camera preset")]
    MissingCamera { index: usize },
    #[error("route from scene {from} on {trigger:?} targets scene {to}, but the story has {count} scenes")]
    RouteOutOfRange {
        from: usize,
        trigger: Trigger,
        to: usize,
        count: usize,
    },
    #[error("restart targets scene {index}, but the story has {count} scenes")]
    RestartOutOfRange { index: usize, count: usize },
}
