use tracing::info;

use clara_observe::{LoggerConfig, logger_init};
use clara_sdk::{ClaraProfile, MatchingStrategy, ProfileConfig, RegisterTask};

const AGENT_ID: &str = "PPE_AGENT_SDK_1";
const KEY_DIR: &str = "./test";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger (stderr; stdout carries the result only)
    logger_init(&LoggerConfig::default())?;

    // 2) Profile from ./test/<agent>.json
    let profile = ClaraProfile::from_key_dir(ProfileConfig::new(AGENT_ID), KEY_DIR)?;
    info!(agent = %profile.id(), "profile ready");

    // 3) Register
    let task = RegisterTask::new("tweet", "Bring it on")
        .with_reward(100)
        .with_strategy(MatchingStrategy::LeastOccupied);
    let receipt = profile.register_task(&task).await?;

    // 4) Print, fully expanded
    println!("{receipt}");
    Ok(())
}
