use std::time::Duration;

use alloy::primitives::{Address, BlockNumber, TxHash};
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
};
use alloy::providers::{Identity, Provider, ProviderBuilder, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::Filter;
use alloy::transports::http::reqwest;
use eyre::Result;
use futures_util::stream::{self, BoxStream};
use futures_util::{StreamExt, future};
use reqwest::Url;

use crate::access::ChainAccess;
use crate::types::{BlockTxs, TransferEvent, TxRecord};

pub const TRANSFER_EVENT_SIGNATURE: &str = "Transfer(address,address,uint256)";

type NodeClientProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
>;

#[derive(Clone)]
pub struct NodeClient {
    provider: NodeClientProvider,
}

impl NodeClient {
    pub fn new(rpc_url: Url) -> Self {
        let rpc_client = RpcClient::new_http(rpc_url);
        let provider = ProviderBuilder::new().connect_client(rpc_client);
        Self { provider }
    }
}

#[async_trait::async_trait]
impl ChainAccess for NodeClient {
    async fn head_number(&self) -> Result<BlockNumber> {
        Ok(self.provider.get_block_number().await?)
    }

    async fn block_with_transactions(&self, number: BlockNumber) -> Result<Option<BlockTxs>> {
        match self.provider.get_block_by_number(number.into()).full().await? {
            None => Ok(None),
            Some(block) => Ok(Some(BlockTxs::try_from(&block)?)),
        }
    }

    async fn transaction_by_hash(&self, hash: TxHash) -> Result<Option<TxRecord>> {
        let tx = self.provider.get_transaction_by_hash(hash).await?;
        Ok(tx.as_ref().map(TxRecord::from))
    }

    async fn transfer_logs(
        &self,
        address: Address,
        from: BlockNumber,
        to: BlockNumber,
    ) -> Result<Vec<TransferEvent>> {
        let filter = Filter::new()
            .address(address)
            .event(TRANSFER_EVENT_SIGNATURE)
            .from_block(from)
            .to_block(to);

        let mut events: Vec<TransferEvent> = self
            .provider
            .get_logs(&filter)
            .await?
            .iter()
            // NOTE: Logs may come from pending txs that have not yet been mined.
            // Pending logs are re-emitted once their tx is included in a block,
            // at which point `block_number` will be set. Skip them here and
            // process only confirmed logs.
            .filter(|log| log.block_number.is_some())
            .map(TransferEvent::try_from)
            .collect::<Result<_>>()?;

        events.sort_by_key(|event| (event.block_number, event.log_index));

        Ok(events)
    }

    async fn transaction_log_addresses(&self, hash: TxHash) -> Result<Vec<Address>> {
        use alloy::consensus::TxReceipt as _;

        match self.provider.get_transaction_receipt(hash).await? {
            None => Ok(Vec::new()),
            Some(receipt) => Ok(receipt.inner.logs().iter().map(|log| log.address()).collect()),
        }
    }

    async fn watch_heads(
        &self,
        poll_interval: Duration,
    ) -> Result<BoxStream<'static, BlockNumber>> {
        let provider = self.provider.clone();

        let heads_stream = self
            .provider
            .watch_blocks()
            .await?
            .with_poll_interval(poll_interval)
            .into_stream()
            .flat_map(stream::iter)
            .filter_map(move |block_hash| {
                let provider = provider.clone();
                async move {
                    match provider.get_block_by_hash(block_hash).await {
                        Ok(Some(block)) => Some(block.number()),
                        Ok(None) => None,
                        Err(e) => {
                            tracing::warn!("Failed to resolve head {block_hash:?}: {e:?}");
                            None
                        }
                    }
                }
            });

        Ok(Box::pin(heads_stream))
    }

    async fn watch_transfer_logs(
        &self,
        address: Address,
        poll_interval: Duration,
    ) -> Result<BoxStream<'static, TransferEvent>> {
        let filter = Filter::new().address(address).event(TRANSFER_EVENT_SIGNATURE);

        let events_stream = self
            .provider
            .watch_logs(&filter)
            .await?
            .with_poll_interval(poll_interval)
            .into_stream()
            .flat_map(stream::iter)
            .filter_map(|log| {
                // Same pending-log rule as the historical query: only decodable,
                // confirmed logs go through.
                future::ready(match TransferEvent::try_from(&log) {
                    Ok(event) => Some(event),
                    Err(e) => {
                        tracing::warn!("Skipping undecodable log: {e:?}");
                        None
                    }
                })
            });

        Ok(Box::pin(events_stream))
    }
}
