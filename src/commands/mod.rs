pub mod dash;
pub mod misc;
pub mod search;

pub use dash::run as run_dashboard;
pub use misc::generate_completions;
pub use search::search_repos;
