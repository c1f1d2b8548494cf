use anyhow::Result;
use clap::Args;
use edid2info::Monitor;

use crate::commands::{Backend, monitors};

#[derive(Args)]
pub struct ShowArgs {
    /// Platform backend to enumerate outputs with
    #[arg(short, long, value_enum, default_value = "drm")]
    backend: Backend,

    /// Only the output with this platform name
    #[arg(short, long)]
    output: Option<String>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let mut monitors = monitors(self.backend)?;
        if let Some(name) = &self.output {
            monitors.retain(|m| m.output_name() == name);
        }
        for monitor in &monitors {
            print_monitor(monitor);
        }
        Ok(())
    }
}

fn print_field(name: &str, value: impl std::fmt::Display) {
    println!("  {name:<17} -> {value}");
}

fn print_monitor(m: &Monitor) {
    println!("{}", "-".repeat(60));
    println!("{m}");
    print_field("stable_id", m.stable_id());
    print_field("output_name", m.output_name());
    print_field("status", m.status());
    print_field("geometry", m.geometry());
    print_field(
        "resolution",
        format!("{}x{}", m.width_in_pixels(), m.height_in_pixels()),
    );
    print_field("manufacturer_id", m.manufacturer_id());
    print_field("manufacture_year", m.manufacture_year());
    print_field("manufacture_week", m.manufacture_week());
    print_field(
        "edid_version",
        format!("{}.{}", m.edid_version(), m.edid_revision()),
    );
    print_field("name", m.name());
    print_field("serial_no", m.serial_no());
    print_field("text", m.text());
    print_field("width_in_cm", m.width_in_cm());
    print_field("height_in_cm", m.height_in_cm());
    for descriptor in m.descriptors() {
        print_field("descriptor", descriptor.kind());
    }
}
