use thiserror::Error;

/// Failures while turning a scene specification into a running scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown appearance '{0}'")]
    UnknownAppearance(String),

    #[error("scene defines no player actor")]
    MissingPlayer,

    #[error("scene defines more than one player actor")]
    DuplicatePlayer,
}
