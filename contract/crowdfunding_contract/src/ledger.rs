use soroban_sdk::{log, Address, Env};

use crate::admins::{self, RosterChange};
use crate::events;
use crate::lifecycle;
use crate::payments;
use crate::storage;
use crate::storage_types::{CampaignId, CampaignState, ContributionRecord, Error};

/// Record a contribution and return the campaign's new balance.
///
/// Everything that can fail (validation, overflow, the token transfer) runs
/// before the first write, so a failed call leaves the campaign untouched.
pub fn contribute(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<i128, Error> {
    let mut campaign = storage::load_campaign(env, campaign_id)?;

    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    lifecycle::require_state(&campaign, CampaignState::Fundraising)?;

    let new_balance = campaign
        .current_balance
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    let total_raised = campaign
        .total_raised
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;
    let lifetime_total = storage::get_contributor_total(env, campaign_id, contributor)
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;

    payments::collect(env, contributor, amount)?;

    let record = ContributionRecord {
        contributor: contributor.clone(),
        amount,
        sequence: campaign.contribution_count,
        timestamp: env.ledger().timestamp(),
    };
    storage::save_contribution(env, campaign_id, &record);
    storage::set_contributor_total(env, campaign_id, contributor, lifetime_total);

    campaign.current_balance = new_balance;
    campaign.total_raised = total_raised;
    campaign.contribution_count += 1;

    let ranked = admins::ranking_amount(campaign.policy.ranking, amount, lifetime_total);
    let mut roster = storage::load_roster(env, campaign_id);
    match admins::consider(&mut roster, contributor, ranked) {
        RosterChange::Unchanged => {}
        RosterChange::Refreshed(_) => storage::save_roster(env, campaign_id, &roster),
        RosterChange::Appended(slot) => {
            storage::save_roster(env, campaign_id, &roster);
            events::emit_admin_changed(
                env,
                events::AdminChangedEvent {
                    campaign_id,
                    slot,
                    admin: contributor.clone(),
                    evicted: None,
                },
            );
        }
        RosterChange::Replaced(slot, evicted) => {
            storage::save_roster(env, campaign_id, &roster);
            log!(env, "admin slot replaced", campaign_id, slot, evicted.clone());

            let mut approvals = storage::load_approvals(env, campaign_id);
            if admins::handle_eviction(&mut approvals, &evicted, campaign.policy.eviction) {
                storage::save_approvals(env, campaign_id, &approvals);
            }

            events::emit_admin_changed(
                env,
                events::AdminChangedEvent {
                    campaign_id,
                    slot,
                    admin: contributor.clone(),
                    evicted: Some(evicted),
                },
            );
        }
    }

    if lifecycle::check_goal(&mut campaign) {
        log!(env, "campaign goal reached", campaign_id, new_balance);
        events::emit_goal_reached(
            env,
            events::GoalReachedEvent {
                campaign_id,
                balance: new_balance,
            },
        );
    }

    storage::save_campaign(env, &campaign);

    events::emit_contributed(
        env,
        events::ContributedEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
            new_balance,
        },
    );

    Ok(new_balance)
}
