use soroban_sdk::{log, token, Address, Env};

use crate::storage;
use crate::storage_types::Error;

/// Move `amount` of the configured token from `from` to `to`.
///
/// A failing token call is reported as [`Error::TransferFailed`] instead of
/// aborting the invocation, so callers must transfer before writing state.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_address = storage::get_token(env)?;
    let token_client = token::TokenClient::new(env, &token_address);

    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed", from.clone(), to.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Pull a contribution into the contract's pooled balance.
pub fn collect(env: &Env, contributor: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, contributor, &env.current_contract_address(), amount)
}

/// Release pooled funds to a campaign creator.
pub fn release(env: &Env, creator: &Address, amount: i128) -> Result<(), Error> {
    transfer(env, &env.current_contract_address(), creator, amount)
}
