use crate::core::agents::{all_profiles, AgentProfile};

/// One line per agent: id, display name and description.
pub fn format_agent(profile: &AgentProfile) -> String {
    format!(
        "  • {:<16} {} - {}",
        profile.id.as_str(),
        profile.name,
        profile.description
    )
}

pub fn list_agents() {
    println!("Hospital service agents:\n");
    for profile in all_profiles() {
        println!("{}", format_agent(profile));
    }
    println!("\n💡 The navigator routes every message; start a chat with:");
    println!("   carenav");
}
