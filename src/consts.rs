/// Chat-completion endpoint used when the config does not override it
pub(crate) const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model identifier sent with every request unless overridden
pub(crate) const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

pub(crate) const DEFAULT_MAX_TOKENS: u32 = 2000;

pub(crate) const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Identification headers OpenRouter uses for app attribution
pub(crate) const DEFAULT_REFERER: &str = "http://localhost:8501";
pub(crate) const DEFAULT_APP_TITLE: &str = "Course Syllabus Generator";

/// Environment variable holding the bearer token
pub(crate) const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable pointing at an explicit config file
pub(crate) const CONFIG_PATH_ENV: &str = "SYLLABUS_GEN_CONFIG";

/// Suffix appended to exported file names: "Physics_syllabus.txt"
pub(crate) const EXPORT_SUFFIX: &str = "_syllabus.txt";
