//! Fixed prompt templates for the two assistant operations.

use super::context::format_context;
use crate::history::HistoryEntry;

/// Exact reply the agent is asked to give when nothing in history matches.
pub const NO_MATCH_REPLY: &str = "No relevant commands found.";

/// Exact reply the agent is asked to give when it cannot suggest anything.
pub const NO_SUGGESTION_REPLY: &str = "Cannot suggest a command for this task.";

pub fn find_prompt(query: &str, entries: &[HistoryEntry], max_entries: usize) -> String {
    let mut prompt = String::new();
    prompt.push_str("You are an expert shell history analyzer.\n");
    prompt.push_str(
        "The user is searching their shell history for commands based on a description.\n",
    );
    prompt.push_str(&format!("User's search query: \"{}\"\n\n", query));
    prompt.push_str(
        "Return ONLY the command text of the entry or entries below that BEST match the \
         query, one per line.\n",
    );
    prompt.push_str(&format!(
        "If NO entry strongly matches, return the exact phrase: '{}'\n\n",
        NO_MATCH_REPLY
    ));
    prompt.push_str(&format_context(
        "Shell History Entries Provided",
        entries,
        max_entries,
    ));
    prompt.push_str("Matching command(s) from the history above:\n");
    prompt
}

pub fn suggest_prompt(task: &str, entries: &[HistoryEntry], max_entries: usize) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "You are an assistant that writes safe, POSIX-compliant shell commands for Linux or macOS.\n",
    );
    prompt.push_str(&format!("Task: \"{}\"\n\n", task));
    prompt.push_str(&format_context(
        "Recent History Context (Optional)",
        entries,
        max_entries,
    ));
    prompt.push_str("Provide ONLY the raw command(s), one per line, in the order to run them.\n");
    prompt.push_str(
        "Put a `# Warning:` comment before any command that modifies or deletes data.\n",
    );
    prompt.push_str(&format!(
        "If the task cannot be done safely with a simple command, reply with the exact phrase: '{}'\n\n",
        NO_SUGGESTION_REPLY
    ));
    prompt.push_str("Suggested Command(s):\n");
    prompt
}
