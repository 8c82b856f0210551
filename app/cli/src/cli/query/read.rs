use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum Entity {
    /// Total tokens transferred since the recorded session start
    TokensTransferred,
    /// Whether a transaction interacted with the tracked contract
    Interaction,
}
