//! Conversions from wire types to domain types for the wallet.

use super::wire::{SendCoinsResponse, TransactionResponse, WalletBalanceResponse};
use super::{Transaction, Txid, WalletBalance};
use crate::shared::unix_time;

impl From<WalletBalanceResponse> for WalletBalance {
    fn from(b: WalletBalanceResponse) -> Self {
        Self {
            total: b.total_balance,
            confirmed: b.confirmed_balance,
            unconfirmed: b.unconfirmed_balance,
            locked: b.locked_balance,
        }
    }
}

impl TryFrom<TransactionResponse> for Transaction {
    type Error = String;

    fn try_from(tx: TransactionResponse) -> Result<Self, Self::Error> {
        if tx.tx_hash.is_empty() {
            return Err("transaction without tx_hash".to_string());
        }
        Ok(Self {
            tx_hash: tx.tx_hash,
            amount: tx.amount,
            confirmations: tx.num_confirmations.max(0) as u32,
            block_hash: tx.block_hash,
            block_height: u32::try_from(tx.block_height).ok().filter(|h| *h > 0),
            timestamp: unix_time(tx.time_stamp),
            total_fees: tx.total_fees,
            dest_addresses: tx.dest_addresses,
            label: tx.label,
        })
    }
}

impl TryFrom<SendCoinsResponse> for Txid {
    type Error = String;

    fn try_from(resp: SendCoinsResponse) -> Result<Self, Self::Error> {
        if resp.txid.is_empty() {
            return Err("empty txid".to_string());
        }
        Ok(Txid(resp.txid))
    }
}
