use chrono::{TimeZone, Utc};

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    // Reproducible builds pin the date through SOURCE_DATE_EPOCH
    let built = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| epoch.trim().parse::<i64>().ok())
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Utc::now);

    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        built.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
