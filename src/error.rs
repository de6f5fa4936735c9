use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("toml write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("section list is empty")]
    EmptySections,

    #[error("duplicate section id: {0}")]
    DuplicateSection(String),

    #[error("duplicate project id: {0}")]
    DuplicateProject(String),

    #[error("project without id")]
    MissingProjectId,

    #[error("invalid trigger band: {top}..{bottom}")]
    InvalidBand { top: f32, bottom: f32 },

    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("could not determine {0} directory")]
    NoProjectDir(&'static str),
}

pub type Result<T> = std::result::Result<T, FolioError>;
