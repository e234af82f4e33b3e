use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Enter time in minutes")]
    InvalidMinutes,

    #[error("No time!")]
    NoTime,

    #[error("API key not set. Put YT_API_KEY in ~/.yt-yoga/.env or the environment.")]
    ApiKeyMissing,

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected API response: {0}")]
    MalformedResponse(String),

    #[error("No video found that fits in {minutes} minute(s)")]
    NoMatchingVideo { minutes: u32 },

    #[error("Could not open browser: {0}")]
    Browser(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Errors caused by the `-n` value, printed without any prefix
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::InvalidMinutes | Error::NoTime)
    }

    /// Line shown on stderr before exiting with status 1
    pub fn report_line(&self) -> String {
        if self.is_input_error() {
            self.to_string()
        } else {
            format!("Error: {}", self)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
