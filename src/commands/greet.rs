//! Usage: Greeting command used by the frontend demo form.

#[tauri::command]
pub(crate) fn greet(name: String) -> String {
    greeting(&name)
}

fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "Hello there!".to_string();
    }
    format!("Hello {name}!")
}
