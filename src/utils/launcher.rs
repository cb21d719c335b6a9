use bevy::log::{error, info};
use std::process::Command;

/// Bring an already-running client's window to the front.
pub fn focus_client(address: &str) {
    let full_address = format!("address:{}", address.trim_start_matches("address:"));

    match Command::new("hyprctl")
        .args(["dispatch", "focuswindow", &full_address])
        .output()
    {
        Ok(output) if output.status.success() => {
            info!("Focused window: {}", full_address);
        }
        Ok(output) => {
            error!(
                "Failed to focus window {}: {}",
                full_address,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => error!("Failed to run hyprctl: {}", e),
    }
}

/// Launch an application by class name through the compositor.
pub fn launch_application(class: &str) {
    match Command::new("hyprctl")
        .args(["dispatch", "exec", class])
        .output()
    {
        Ok(output) if output.status.success() => {
            info!("Launched: {}", class);
        }
        Ok(output) => {
            error!(
                "Failed to launch {}: {}",
                class,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => error!("Failed to run hyprctl: {}", e),
    }
}
