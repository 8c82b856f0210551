use alloy::primitives::{Address, BlockNumber, TxHash};
use alloy::transports::http::reqwest::Url;
use chain::access::ChainAccess;
use chain::rpc::NodeClient;
use engine::amount::TokenAmount;
use eyre::{Result, eyre};
use store::client::Client;

use crate::cli::query::args::Query;
use crate::cli::query::read::Entity;
use crate::cli::query::response::{InteractionResponse, TokensTransferredResponse};
use crate::cli::read;

pub async fn select(query: &Query) -> Result<()> {
    match query.entity {
        Entity::TokensTransferred => {
            let client = Client::init(&query.db_url).await?;

            let checkpoint = store::checkpoint::store::Store::new(client.clone())
                .get()
                .await?
                .ok_or_else(|| eyre!("Checkpoint Not Found"))?;

            let total = store::transaction::store::Store::new(client)
                .sum_tokens_transferred_since(checkpoint.start_height as BlockNumber)
                .await?;

            let response = TokensTransferredResponse {
                total_tokens_transferred: TokenAmount::from_base_units(total).to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Entity::Interaction => {
            let rpc_url = query
                .rpc_url
                .as_deref()
                .ok_or_else(|| eyre!("--rpc-url is required for interaction checks"))?;
            let tx_hash: TxHash = query
                .tx_hash
                .as_deref()
                .ok_or_else(|| eyre!("--tx-hash is required for interaction checks"))?
                .parse()?;
            let contract = read::parse_address(&query.contract)?;

            let node_client = NodeClient::new(Url::parse(rpc_url)?);
            let is_interaction = check_interaction(&node_client, contract, tx_hash).await?;

            println!("{}", serde_json::to_string_pretty(&InteractionResponse { is_interaction })?);
        }
    }

    Ok(())
}

/// Direct interaction: the transaction was addressed to the contract.
/// Indirect: any of its receipt logs was emitted by the contract.
async fn check_interaction(
    chain: &dyn ChainAccess,
    contract: Address,
    tx_hash: TxHash,
) -> Result<bool> {
    let Some(tx) = chain.transaction_by_hash(tx_hash).await? else {
        tracing::warn!("Transaction {tx_hash} not found");
        return Ok(false);
    };

    if tx.to == Some(contract) {
        return Ok(true);
    }

    let log_addresses = chain.transaction_log_addresses(tx_hash).await?;
    Ok(log_addresses.contains(&contract))
}
