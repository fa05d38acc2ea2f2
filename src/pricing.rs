//! Basket price computation
//!
//! A basket position is worth the sum, over its underlying tokens, of the
//! contract-reported component balance scaled by the token's decimals and
//! multiplied by its host-supplied price. The sum is commutative, so the
//! per-component lookups run concurrently.

use anyhow::Result;
use futures::future::join_all;

use crate::host::PositionContract;
use crate::logger::{self, LogTag};
use crate::types::{scale_raw_units, PositionToken, UnderlyingToken};

/// Value one position by its underlying component balances.
///
/// A component with no usable balance contributes zero; a failed contract call
/// propagates to the host.
pub async fn basket_price(
    contract: &dyn PositionContract,
    position: &PositionToken,
) -> Result<f64> {
    let lookups = position.tokens.iter().map(|token| async move {
        let raw = contract.component_units(token.address).await?;
        Ok::<_, anyhow::Error>(raw.map(|raw| (token, scale_raw_units(raw, token.decimals))))
    });

    let mut total = 0.0;
    for lookup in join_all(lookups).await {
        match lookup? {
            Some((token, balance)) => {
                let liquidity = balance * token.price;
                logger::debug(
                    LogTag::Price,
                    &format!(
                        "{}: component {} balance {:.6} -> ${:.2}",
                        position.symbol, token.address, balance, liquidity
                    ),
                );
                total += liquidity;
            }
            None => {
                logger::debug(
                    LogTag::Price,
                    &format!("{}: component with no usable balance, skipped", position.symbol),
                );
            }
        }
    }

    Ok(total)
}
