use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "manual-diff",
    version,
    about = "Compare instruction coverage between two AVR instruction-set manual revisions",
    long_about = "Downloads the current and the candidate AVR instruction-set manual, extracts the documented instruction mnemonics from each and reports added, removed and common instructions together with a checklist of key instructions."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
