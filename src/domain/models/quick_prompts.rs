#[cfg(test)]
#[path = "quick_prompts_test.rs"]
mod tests;

/// Example questions matching what the chat server understands.
pub const QUICK_PROMPTS: [&str; 6] = [
    "List all cities",
    "List all routes",
    "Find shortest path from Paris to Berlin",
    "Show fewest stops from NYC to LA",
    "Show reachable cities from Paris",
    "Show map statistics",
];

pub struct QuickPrompts {}

impl QuickPrompts {
    /// Looks up a prompt by its 1-based position in the list.
    pub fn get(number: usize) -> Option<&'static str> {
        if number == 0 {
            return None;
        }

        return QUICK_PROMPTS.get(number - 1).copied();
    }

    pub fn list_text() -> String {
        let prompts = QUICK_PROMPTS
            .iter()
            .enumerate()
            .map(|(idx, prompt)| {
                return format!("• ({}) {prompt}", idx + 1);
            })
            .collect::<Vec<String>>()
            .join("\n");

        return format!("Try one of these with **/suggest NUMBER**:\n{prompts}");
    }
}
