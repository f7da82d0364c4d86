/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session completes
pub fn notify_session_complete(minutes: u32) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{} minutes of focus. Your tree has grown! 🌳" with title "Grove - Session Complete""#,
            minutes
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = minutes;
    }
}
