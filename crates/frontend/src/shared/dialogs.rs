/// Browser confirm; `false` when there is no window to ask in.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Delete prompt for a single record
pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete {name}?")
}

/// Delete prompt for a bulk selection
pub fn bulk_delete_prompt(count: usize) -> String {
    format!("Are you sure you want to delete {count} items?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts() {
        assert_eq!(delete_prompt("Amoxicillin 250mg"), "Are you sure you want to delete Amoxicillin 250mg?");
        assert_eq!(bulk_delete_prompt(3), "Are you sure you want to delete 3 items?");
    }
}
