use derive_more::Display;

/// Failures surfaced to the caller. Most file-system trouble inside the
/// synchronizer is logged and degraded to a no-op instead; only the
/// operations documented as blocking (setting the game path, writing the
/// store, launching the game) return one of these.
#[derive(Debug, Display)]
pub enum Error {
    /// The supplied game path is not an existing regular file.
    #[display("not a valid game executable: {_0}")]
    InvalidGamePath(String),
    /// No game path has been configured yet.
    #[display("game path is not set")]
    GamePathUnset,
    /// The configured game executable is gone from disk.
    #[display("game executable not found: {_0}")]
    GameMissing(String),
    /// The game process is already running.
    #[display("the game is already running")]
    GameRunning,
    /// Spawning the game process failed.
    #[display("could not start the game: {_0}")]
    Launch(String),
    /// The backing store could not be written.
    #[display("config store failure: {_0}")]
    Config(String),
}

impl std::error::Error for Error {}
