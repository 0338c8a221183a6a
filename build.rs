fn main() {
    // Build stamp shown in the TUI header; display-only.
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=GEOCAT_BUILD_TIMESTAMP={stamp}");
}
