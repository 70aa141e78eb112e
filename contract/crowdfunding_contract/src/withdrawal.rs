use soroban_sdk::{log, Address, Env, Vec};

use crate::admins;
use crate::events;
use crate::lifecycle;
use crate::payments;
use crate::storage;
use crate::storage_types::{Campaign, CampaignId, CampaignState, Error, QUORUM};

pub fn quorum_met(approvals: &Vec<Address>) -> bool {
    approvals.len() >= QUORUM
}

fn require_creator(campaign: &Campaign, caller: &Address) -> Result<(), Error> {
    if campaign.creator != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn require_open_cycle(campaign: &Campaign) -> Result<(), Error> {
    if campaign.state == CampaignState::Closed {
        return Err(Error::InvalidState);
    }
    Ok(())
}

/// Record `caller`'s approval. Only current admins may approve, once per cycle.
pub fn approve(env: &Env, campaign_id: CampaignId, caller: &Address) -> Result<(), Error> {
    let campaign = storage::load_campaign(env, campaign_id)?;
    require_open_cycle(&campaign)?;

    let roster = storage::load_roster(env, campaign_id);
    if !admins::is_admin(&roster, caller) {
        return Err(Error::Unauthorized);
    }

    let mut approvals = storage::load_approvals(env, campaign_id);
    admins::record_approval(&mut approvals, caller)?;
    storage::save_approvals(env, campaign_id, &approvals);

    events::emit_withdrawal_approved(
        env,
        events::WithdrawalApprovedEvent {
            campaign_id,
            admin: caller.clone(),
            approvals: approvals.len(),
        },
    );
    Ok(())
}

/// Creator-initiated reset of the approval log for the current cycle.
pub fn reset_approvals(
    env: &Env,
    campaign_id: CampaignId,
    caller: &Address,
) -> Result<(), Error> {
    let campaign = storage::load_campaign(env, campaign_id)?;
    require_creator(&campaign, caller)?;
    require_open_cycle(&campaign)?;

    let cleared = storage::load_approvals(env, campaign_id).len();
    storage::save_approvals(env, campaign_id, &Vec::new(env));

    events::emit_approvals_reset(env, events::ApprovalsResetEvent { campaign_id, cleared });
    Ok(())
}

/// Release the whole balance to the creator and close the campaign.
/// Returns the amount released.
pub fn withdraw(env: &Env, campaign_id: CampaignId, caller: &Address) -> Result<i128, Error> {
    let mut campaign = storage::load_campaign(env, campaign_id)?;

    require_creator(&campaign, caller)?;
    lifecycle::require_state(&campaign, CampaignState::Successful)?;

    let approvals = storage::load_approvals(env, campaign_id);
    if !quorum_met(&approvals) {
        return Err(Error::QuorumNotMet);
    }

    let amount = campaign.current_balance;
    payments::release(env, &campaign.creator, amount)?;

    campaign.current_balance = 0;
    lifecycle::close(&mut campaign)?;
    storage::save_campaign(env, &campaign);
    storage::save_approvals(env, campaign_id, &Vec::new(env));

    log!(env, "campaign withdrawn", campaign_id, amount);
    events::emit_withdrawn(
        env,
        events::WithdrawnEvent {
            campaign_id,
            creator: campaign.creator,
            amount,
        },
    );
    Ok(amount)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_quorum_is_strict_majority_of_capacity() {
        let env = Env::default();
        let mut approvals = Vec::new(&env);
        for _ in 0..2 {
            approvals.push_back(Address::generate(&env));
        }
        assert!(!quorum_met(&approvals));

        approvals.push_back(Address::generate(&env));
        assert!(quorum_met(&approvals));
    }
}
