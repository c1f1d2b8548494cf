use anyhow::Result;
use clap::Args;

use crate::commands::{Backend, monitors};

#[derive(Args)]
pub struct ListArgs {
    /// Platform backend to enumerate outputs with
    #[arg(short, long, value_enum, default_value = "drm")]
    backend: Backend,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        for monitor in monitors(self.backend)? {
            println!(
                "{}\t{}\t{}x{}\t{}",
                monitor.output_name(),
                monitor.status(),
                monitor.width_in_pixels(),
                monitor.height_in_pixels(),
                monitor.name(),
            );
        }
        Ok(())
    }
}
