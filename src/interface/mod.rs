pub mod prompts;
pub mod render;

pub use prompts::{prompt_entry_choice, prompt_reading};
pub use render::{
    display_alternatives, display_analysis, display_entries, display_facts, display_goals,
    display_reading, display_report, display_stats,
};
