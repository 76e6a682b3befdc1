//! Session gate CLI commands
//!
//! Login stores a display name, nothing more. See
//! [`crate::services::SessionService`] for the caveats.

use crate::config::paths::ToolboxPaths;
use crate::error::ToolboxResult;
use crate::services::SessionService;

/// Store a display-name session and greet the user
pub fn handle_login(paths: &ToolboxPaths, name: &str) -> ToolboxResult<()> {
    let service = SessionService::new(paths);
    let session = service.login(name)?;
    println!("Welcome, {}!", session.username);
    Ok(())
}

/// Drop the stored session
pub fn handle_logout(paths: &ToolboxPaths) -> ToolboxResult<()> {
    let service = SessionService::new(paths);
    if service.logout()? {
        println!("Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

/// Print the current display name, if any
pub fn handle_whoami(paths: &ToolboxPaths) -> ToolboxResult<()> {
    let service = SessionService::new(paths);
    match service.current()? {
        Some(session) => println!("{}", session.username),
        None => println!("Not logged in."),
    }
    Ok(())
}
