use soroban_sdk::{Address, Env, String, Vec};

use crate::events;
use crate::storage;
use crate::storage_types::{Campaign, CampaignId, CampaignState, Error};
use crate::utils;

pub fn create_campaign(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    deadline: u64,
    goal_amount: i128,
) -> Result<CampaignId, Error> {
    let policy = storage::get_default_policy(env)?;

    if goal_amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if !utils::is_future(env, deadline) {
        return Err(Error::InvalidDeadline);
    }

    let campaign_id = storage::get_campaign_count(env)
        .checked_add(1)
        .ok_or(Error::RegistryFull)?;

    let campaign = Campaign {
        id: campaign_id,
        creator: creator.clone(),
        title,
        description,
        deadline,
        goal_amount,
        current_balance: 0,
        total_raised: 0,
        contribution_count: 0,
        state: CampaignState::Fundraising,
        created_at: env.ledger().timestamp(),
        policy,
    };

    storage::save_campaign(env, &campaign);
    storage::save_roster(env, campaign_id, &Vec::new(env));
    storage::save_approvals(env, campaign_id, &Vec::new(env));
    storage::set_campaign_count(env, campaign_id);

    events::emit_campaign_created(
        env,
        events::CampaignCreatedEvent {
            campaign_id,
            creator,
            goal_amount,
            deadline,
        },
    );

    Ok(campaign_id)
}

/// Create a campaign whose deadline is `duration_days` from now.
pub fn start_project(
    env: &Env,
    creator: Address,
    title: String,
    description: String,
    duration_days: u32,
    goal_amount: i128,
) -> Result<CampaignId, Error> {
    if duration_days == 0 {
        return Err(Error::InvalidDeadline);
    }
    let deadline = env
        .ledger()
        .timestamp()
        .checked_add(utils::days_to_seconds(duration_days))
        .ok_or(Error::InvalidDeadline)?;

    create_campaign(env, creator, title, description, deadline, goal_amount)
}

/// Every campaign id, in creation order.
pub fn list_campaigns(env: &Env) -> Vec<CampaignId> {
    let mut ids = Vec::new(env);
    for id in 1..=storage::get_campaign_count(env) {
        ids.push_back(id);
    }
    ids
}
