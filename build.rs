use std::fs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    // Access point credentials are optional; an empty password gives an open AP
    let wifi_config_path = "wifi_config.h";
    println!("cargo:rerun-if-changed={}", wifi_config_path);
    if Path::new(wifi_config_path).exists() {
        let contents = fs::read_to_string(wifi_config_path)?;

        let define = |name: &str| {
            contents
                .lines()
                .find(|l| l.trim_start().starts_with("#define") && l.contains(name))
                .and_then(|l| l.split('"').nth(1))
                .map(str::to_owned)
                .unwrap_or_default()
        };

        println!("cargo:rustc-env=WIFI_AP_SSID={}", define("WIFI_AP_SSID"));
        println!("cargo:rustc-env=WIFI_AP_PASSWORD={}", define("WIFI_AP_PASSWORD"));
    } else {
        println!("cargo:rustc-env=WIFI_AP_SSID=");
        println!("cargo:rustc-env=WIFI_AP_PASSWORD=");
        println!("cargo:warning=wifi_config.h not found, using the default open access point. Copy wifi_config.h.example to set credentials.");
    }

    Ok(())
}
