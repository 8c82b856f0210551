pub mod adapter;
pub mod amount;
pub mod args;
pub mod backfill;
pub mod checkpointer;
pub mod engine;
pub mod events;
pub mod forward;
pub mod health;
pub mod live;
pub mod message;
pub mod plan;
pub mod scan;
