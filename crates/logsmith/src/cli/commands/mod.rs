//! CLI subcommands

mod completions;
mod generate;
mod languages;
mod stats;
mod themes;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use languages::LanguagesCommand;
pub use stats::StatsCommand;
pub use themes::ThemesCommand;
